//! Quiz JSON input format
//!
//! Parse-only: reads the JSON question list, renders it to the intermediate text and builds the
//! styled document from that text. Going through the text keeps JSON input and markdown input on
//! exactly the same classification path.

use crate::builder::build_document;
use crate::error::KuisError;
use crate::format::Format;
use crate::ir::StyledDocument;
use crate::render::render_json;

/// Format implementation for JSON question lists
pub struct QuizFormat;

impl Format for QuizFormat {
    fn name(&self) -> &str {
        "quiz"
    }

    fn description(&self) -> &str {
        "JSON list of [prompt, options, answer, explanation] records"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<StyledDocument, KuisError> {
        let text = render_json(source)?;
        Ok(build_document(&text))
    }
}
