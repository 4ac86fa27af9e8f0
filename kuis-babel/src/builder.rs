//! Intermediate text → styled document
//!
//!     Every line becomes exactly one paragraph, in order. The text is split on `\n` without
//!     dropping the final fragment, so text ending in a line break (which rendered text always
//!     does) yields a trailing empty paragraph, and empty text yields a single empty paragraph.
//!
//!     | Line kind  | Style               | Content                                 |
//!     |------------|---------------------|-----------------------------------------|
//!     | `Question` | `question`          | line verbatim                           |
//!     | `Option`   | `option`            | line verbatim                           |
//!     | `Labeled`  | `answerExplanation` | bold marker run + plain remainder run   |
//!     | `Other`    | `question`          | line verbatim                           |

use crate::classify::{classify_line, LineKind, ANSWER_MARKER, EXPLANATION_MARKER};
use crate::ir::{ParagraphStyle, StyleSheet, StyledDocument, StyledParagraph, TextRun};
use log::debug;

/// Build a document using the default style sheet.
pub fn build_document(text: &str) -> StyledDocument {
    build_document_with_styles(text, &StyleSheet::default())
}

/// Build a document with explicit style constants.
pub fn build_document_with_styles(text: &str, styles: &StyleSheet) -> StyledDocument {
    let paragraphs: Vec<StyledParagraph> = text.split('\n').map(build_paragraph).collect();

    debug!("built {} paragraph(s)", paragraphs.len());
    StyledDocument {
        styles: styles.definitions(),
        paragraphs,
    }
}

/// Map one line to its paragraph.
pub fn build_paragraph(line: &str) -> StyledParagraph {
    match classify_line(line) {
        LineKind::Question | LineKind::Other => {
            StyledParagraph::text(ParagraphStyle::Question, line)
        }
        LineKind::Option => StyledParagraph::text(ParagraphStyle::Option, line),
        LineKind::Labeled => labeled_paragraph(line),
    }
}

fn labeled_paragraph(line: &str) -> StyledParagraph {
    // The explanation marker wins when both are present.
    let marker = if line.contains(EXPLANATION_MARKER) {
        EXPLANATION_MARKER
    } else {
        ANSWER_MARKER
    };

    // Content runs up to a repeated marker, if any; text before the marker is dropped.
    let rest = line.split(marker).nth(1).unwrap_or_default();
    let content = if rest.is_empty() {
        String::new()
    } else {
        format!(" {}", rest.trim())
    };

    StyledParagraph::runs(
        ParagraphStyle::AnswerExplanation,
        vec![TextRun::bold(marker), TextRun::plain(content)],
        line,
    )
}
