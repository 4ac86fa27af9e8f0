//! Converter session
//!
//! Holds the two pieces of state an interactive front end works with: the raw input and the
//! rendered preview. Every input change re-renders; exporting builds the document from the
//! current preview.

use crate::builder::build_document_with_styles;
use crate::error::KuisError;
use crate::format::SerializedDocument;
use crate::ir::{StyleSheet, StyledDocument};
use crate::registry::FormatRegistry;
use crate::render::{render_json, INVALID_INPUT_SENTINEL};
use std::collections::HashMap;

/// State owned by whatever drives the pipeline (CLI, server handler, UI controller).
#[derive(Debug, Clone, Default)]
pub struct ConverterSession {
    input: String,
    rendered: String,
    error: Option<KuisError>,
    styles: StyleSheet,
}

impl ConverterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_styles(styles: StyleSheet) -> Self {
        Self {
            styles,
            ..Self::default()
        }
    }

    /// Replace the input and re-render. On input errors the preview becomes
    /// [`INVALID_INPUT_SENTINEL`] and the error is kept for [`ConverterSession::error`].
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        match render_json(&self.input) {
            Ok(text) => {
                self.rendered = text;
                self.error = None;
            }
            Err(err) => {
                self.rendered = INVALID_INPUT_SENTINEL.to_string();
                self.error = Some(err);
            }
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The rendered preview (or the sentinel).
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Why the current input was rejected, if it was.
    pub fn error(&self) -> Option<&KuisError> {
        self.error.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Build the styled document from the current preview.
    ///
    /// # Errors
    ///
    /// Returns the input error when the current input was rejected, so the sentinel text is never
    /// turned into a document.
    pub fn document(&self) -> Result<StyledDocument, KuisError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        Ok(build_document_with_styles(&self.rendered, &self.styles))
    }

    /// Build the document and serialize it with a registered format.
    pub fn export(
        &self,
        registry: &FormatRegistry,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument, KuisError> {
        let doc = self.document()?;
        registry.serialize_with_options(&doc, format, options)
    }
}
