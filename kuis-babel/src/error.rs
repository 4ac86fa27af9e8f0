//! Error types for the conversion pipeline

use std::fmt;

/// Errors that can occur while reading quiz input or producing a document
#[derive(Debug, Clone, PartialEq)]
pub enum KuisError {
    /// Input is not syntactically valid JSON
    InvalidJson(String),
    /// Input is valid JSON but a record is not shaped as a question
    MalformedRecord {
        /// Zero-based position of the offending record, if the failure is record-specific
        index: Option<usize>,
        reason: String,
    },
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    Serialization(String),
    /// Format does not support the requested operation
    NotSupported(String),
}

impl KuisError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        KuisError::MalformedRecord {
            index: Some(index),
            reason: reason.into(),
        }
    }

    /// Whether this error stems from the JSON input rather than from output generation.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            KuisError::InvalidJson(_) | KuisError::MalformedRecord { .. }
        )
    }
}

impl fmt::Display for KuisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KuisError::InvalidJson(msg) => write!(f, "Invalid JSON: {msg}"),
            KuisError::MalformedRecord {
                index: Some(index),
                reason,
            } => write!(f, "Malformed record at position {}: {reason}", index + 1),
            KuisError::MalformedRecord {
                index: None,
                reason,
            } => write!(f, "Malformed input: {reason}"),
            KuisError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            KuisError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            KuisError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for KuisError {}

impl From<serde_json::Error> for KuisError {
    fn from(err: serde_json::Error) -> Self {
        KuisError::InvalidJson(err.to_string())
    }
}
