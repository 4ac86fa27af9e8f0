//! Question records → intermediate text
//!
//! The output is byte-for-byte stable: one numbered prompt line, one tab-indented line per
//! option, then the answer and explanation lines. Example for a single two-option question:
//!
//! ```text
//! 1. 2+2=?
//! \tA. 3
//! \tB. 4
//! \tJawaban: B
//! \tPembahasan: Simple sum.
//! ```

use crate::classify::{ANSWER_MARKER, EXPLANATION_MARKER};
use crate::error::KuisError;
use crate::record::{parse_questions, QuestionRecord};
use log::debug;

/// Text shown in place of the rendering when the input cannot be read as questions.
pub const INVALID_INPUT_SENTINEL: &str = "Invalid JSON format";

/// Render records to the intermediate text. Record order defines question numbering.
pub fn render_markdown(questions: &[QuestionRecord]) -> String {
    let mut out = String::new();

    for (n, question) in questions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", n + 1, question.prompt()));

        for (label, option) in question.labeled_options() {
            out.push_str(&format!("\t{label}. {option}\n"));
        }

        out.push_str(&format!("\t{ANSWER_MARKER} {}\n", question.answer()));
        out.push_str(&format!("\t{EXPLANATION_MARKER} {}\n", question.explanation()));
    }

    debug!(
        "rendered {} question(s) into {} byte(s)",
        questions.len(),
        out.len()
    );
    out
}

/// Parse JSON input and render it.
pub fn render_json(input: &str) -> Result<String, KuisError> {
    let questions = parse_questions(input)?;
    Ok(render_markdown(&questions))
}

/// Render JSON input for preview, substituting [`INVALID_INPUT_SENTINEL`] on any input error.
pub fn render_preview(input: &str) -> String {
    render_json(input).unwrap_or_else(|_| INVALID_INPUT_SENTINEL.to_string())
}
