//! JSON dump of the styled document
//!
//! Emits the IR (style definitions and paragraphs) as pretty-printed JSON, for handing the
//! document to an external renderer or inspecting what the builder produced.

use crate::error::KuisError;
use crate::format::Format;
use crate::ir::StyledDocument;

/// Format implementation for the JSON document dump
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Styled document tree as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &StyledDocument) -> Result<String, KuisError> {
        serde_json::to_string_pretty(doc).map_err(|e| KuisError::Serialization(e.to_string()))
    }
}
