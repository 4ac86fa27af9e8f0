//! The `Format` trait
//!
//! Every kuis format sits on one side of the [`StyledDocument`]: `quiz` only reads, `docx` and
//! `json` only write, and `markdown` (the intermediate text) does both.

use crate::error::KuisError;
use crate::ir::StyledDocument;
use std::collections::HashMap;

/// Serialized output produced by a [`Format`] implementation.
#[derive(Debug)]
pub enum SerializedDocument {
    /// Intermediate text or the JSON dump
    Text(String),
    /// DOCX package
    Binary(Vec<u8>),
}

impl SerializedDocument {
    /// Consume the serialized output and return the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            SerializedDocument::Text(text) => text.into_bytes(),
            SerializedDocument::Binary(bytes) => bytes,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, SerializedDocument::Binary(_))
    }
}

/// A named reader and/or writer of [`StyledDocument`]s.
///
/// Capabilities default to "neither"; a format opts in by overriding `supports_*` together with
/// the matching method.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "quiz", "markdown", "docx")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Extensions without the leading dot, used to pick formats from file names.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format reads input (quiz JSON or intermediate text)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format writes documents
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Binary output is written to a file instead of stdout.
    fn is_binary(&self) -> bool {
        false
    }

    fn parse(&self, _source: &str) -> Result<StyledDocument, KuisError> {
        Err(KuisError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    fn serialize(&self, _doc: &StyledDocument) -> Result<String, KuisError> {
        Err(KuisError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Text formats take no options and return [`Format::serialize`] output. `docx` overrides
    /// this to accept style options and return [`SerializedDocument::Binary`].
    fn serialize_with_options(
        &self,
        doc: &StyledDocument,
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument, KuisError> {
        if options.is_empty() {
            self.serialize(doc).map(SerializedDocument::Text)
        } else {
            Err(KuisError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
