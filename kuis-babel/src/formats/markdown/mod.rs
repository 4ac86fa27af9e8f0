//! Markdown (intermediate text) format implementation
//!
//! The line-oriented text produced by [`crate::render`] is the pipeline's markdown. Parsing it
//! runs the line classifier and document builder; serializing writes back the line each
//! paragraph was built from, so parse then serialize returns the input unchanged.

use crate::builder::build_document;
use crate::error::KuisError;
use crate::format::Format;
use crate::ir::StyledDocument;

/// Format implementation for the intermediate text
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Line-oriented quiz text (numbered questions, lettered options, labels)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown", "txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<StyledDocument, KuisError> {
        Ok(build_document(source))
    }

    fn serialize(&self, doc: &StyledDocument) -> Result<String, KuisError> {
        Ok(serialize_to_markdown(doc))
    }
}

/// Join the paragraphs' source lines with line breaks.
pub fn serialize_to_markdown(doc: &StyledDocument) -> String {
    doc.paragraphs
        .iter()
        .map(|p| p.source())
        .collect::<Vec<_>>()
        .join("\n")
}
