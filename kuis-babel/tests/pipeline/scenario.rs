//! End-to-end runs of the JSON → text → document pipeline

use insta::assert_snapshot;
use kuis_babel::ir::{ParagraphContent, ParagraphStyle, StyleSheet, TextRun};
use kuis_babel::{
    build_document, convert_json, render_json, render_preview, ConverterSession, FormatRegistry,
    KuisError,
};

const SIMPLE_SUM: &str = r#"[["2+2=?", ["3", "4"], "B", "Simple sum."]]"#;

#[test]
fn simple_sum_renders_expected_text() {
    assert_eq!(
        render_json(SIMPLE_SUM).unwrap(),
        "1. 2+2=?\n\tA. 3\n\tB. 4\n\tJawaban: B\n\tPembahasan: Simple sum.\n"
    );
}

#[test]
fn simple_sum_builds_styled_paragraphs() {
    let doc = convert_json(SIMPLE_SUM, &StyleSheet::default()).unwrap();

    let styles: Vec<_> = doc.paragraphs.iter().map(|p| p.style).collect();
    assert_eq!(
        styles,
        vec![
            ParagraphStyle::Question,
            ParagraphStyle::Option,
            ParagraphStyle::Option,
            ParagraphStyle::AnswerExplanation,
            ParagraphStyle::AnswerExplanation,
            ParagraphStyle::Question,
        ]
    );

    assert_eq!(
        doc.paragraphs[3].content,
        ParagraphContent::Runs(vec![TextRun::bold("Jawaban:"), TextRun::plain(" B")])
    );
    assert_eq!(
        doc.paragraphs[4].content,
        ParagraphContent::Runs(vec![
            TextRun::bold("Pembahasan:"),
            TextRun::plain(" Simple sum.")
        ])
    );
    assert_eq!(doc.paragraphs[5].source(), "");
}

#[test]
fn empty_list_yields_single_empty_paragraph() {
    let text = render_json("[]").unwrap();
    assert_eq!(text, "");

    let doc = build_document(&text);
    assert_eq!(doc.paragraphs.len(), 1);
    assert_eq!(doc.paragraphs[0].style, ParagraphStyle::Question);
    assert_eq!(doc.paragraphs[0].source(), "");
}

#[test]
fn invalid_json_preview_is_sentinel() {
    assert_snapshot!(render_preview("{not json"), @"Invalid JSON format");
}

#[test]
fn malformed_record_preview_is_sentinel() {
    assert_snapshot!(render_preview(r#"[["q", "not a list", "A", "x"]]"#), @"Invalid JSON format");
}

#[test]
fn malformed_record_error_names_position() {
    let err = render_json(r#"[["ok", [], "A", "x"], ["q", [], "A"]]"#).unwrap_err();
    assert!(matches!(err, KuisError::MalformedRecord { index: Some(1), .. }));
    assert_snapshot!(err.to_string().split(':').next().unwrap(), @"Malformed record at position 2");
}

#[test]
fn second_question_is_numbered_two() {
    let text = render_json(r#"[["a", [], "A", "x"], ["b", ["o"], "A", "y"]]"#).unwrap();
    let questions: Vec<_> = text.lines().filter(|l| !l.starts_with('\t')).collect();
    assert_eq!(questions, vec!["1. a", "2. b"]);
}

#[test]
fn session_preview_then_export() {
    let registry = FormatRegistry::default();
    let mut session = ConverterSession::new();

    session.set_input("{not json");
    assert_eq!(session.rendered(), "Invalid JSON format");
    assert!(session.export(&registry, "json", &Default::default()).is_err());

    session.set_input(SIMPLE_SUM);
    let exported = session
        .export(&registry, "json", &Default::default())
        .unwrap();
    assert!(!exported.is_binary());
    let value: serde_json::Value = serde_json::from_slice(&exported.into_bytes()).unwrap();
    assert_eq!(value["paragraphs"].as_array().unwrap().len(), 6);
}

#[test]
fn edited_text_builds_like_rendered_text() {
    let registry = FormatRegistry::default();
    let rendered = render_json(SIMPLE_SUM).unwrap();

    let from_json = registry.parse(SIMPLE_SUM, "quiz").unwrap();
    let from_text = registry.parse(&rendered, "markdown").unwrap();
    assert_eq!(from_json, from_text);
}
