//! Properties of rendering and classification over generated question lists

use kuis_babel::ir::ParagraphStyle;
use kuis_babel::record::OPTION_LABELS;
use kuis_babel::{build_document, classify_line, render_markdown, LineKind, QuestionRecord};
use proptest::prelude::*;

fn field() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ?+=,]{0,24}"
}

fn record() -> impl Strategy<Value = QuestionRecord> {
    (
        field(),
        prop::collection::vec(field(), 0..=5),
        "[A-E]",
        field(),
    )
        .prop_map(|(prompt, options, answer, explanation)| {
            QuestionRecord::new(prompt, options, answer, explanation).unwrap()
        })
}

fn records() -> impl Strategy<Value = Vec<QuestionRecord>> {
    prop::collection::vec(record(), 0..8)
}

proptest! {
    #[test]
    fn one_numbered_question_line_per_record(questions in records()) {
        let text = render_markdown(&questions);
        let question_lines: Vec<&str> = text
            .lines()
            .filter(|line| classify_line(line) == LineKind::Question)
            .collect();

        prop_assert_eq!(question_lines.len(), questions.len());
        for (n, line) in question_lines.iter().enumerate() {
            let prefix = format!("{}.", n + 1);
            prop_assert!(line.starts_with(&prefix));
        }
    }

    #[test]
    fn options_follow_their_question_in_label_order(questions in records()) {
        let text = render_markdown(&questions);
        let lines: Vec<&str> = text.lines().collect();

        let mut cursor = 0;
        for question in &questions {
            prop_assert_eq!(classify_line(lines[cursor]), LineKind::Question);
            for (i, option) in question.options().iter().enumerate() {
                let line = lines[cursor + 1 + i];
                prop_assert_eq!(classify_line(line), LineKind::Option);
                let expected = format!("\t{}. {}", OPTION_LABELS[i], option);
                prop_assert_eq!(line, expected.as_str());
            }
            // question, options, answer, explanation
            cursor += question.options().len() + 3;
        }
        prop_assert_eq!(cursor, lines.len());
    }

    #[test]
    fn rendered_lines_classify_as_intended(questions in records()) {
        let text = render_markdown(&questions);
        let mut lines = text.lines();

        for question in &questions {
            prop_assert_eq!(lines.next().map(classify_line), Some(LineKind::Question));
            for _ in question.options() {
                let line = lines.next().unwrap_or_default();
                prop_assert_eq!(classify_line(line.trim_start()), LineKind::Option);
            }
            for _ in 0..2 {
                let line = lines.next().unwrap_or_default();
                prop_assert_eq!(classify_line(line.trim_start()), LineKind::Labeled);
            }
        }
        prop_assert!(lines.next().is_none());
    }

    #[test]
    fn classification_is_pure(line in "\\PC{0,40}") {
        prop_assert_eq!(classify_line(&line), classify_line(&line));
    }

    #[test]
    fn one_paragraph_per_line(questions in records()) {
        let text = render_markdown(&questions);
        let doc = build_document(&text);

        prop_assert_eq!(doc.paragraphs.len(), text.split('\n').count());
        let labeled = doc
            .paragraphs
            .iter()
            .filter(|p| p.style == ParagraphStyle::AnswerExplanation)
            .count();
        prop_assert_eq!(labeled, questions.len() * 2);
    }
}
