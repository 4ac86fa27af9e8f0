//! Formats by name, and format selection from file names
//!
//! Input and output detection are separate because `quiz` (read) and `json` (write) share the
//! `.json` extension.

use crate::error::KuisError;
use crate::format::{Format, SerializedDocument};
use crate::ir::StyledDocument;
use std::collections::HashMap;

/// The formats the CLI and [`crate::ConverterSession`] can convert between.
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Replaces any format registered under the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, KuisError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| KuisError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Sorted format names, as shown by `kuis --list-formats`.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Readable format for a file name (`.json` → quiz, `.md`/`.txt` → markdown).
    pub fn detect_input_format(&self, filename: &str) -> Option<String> {
        self.detect_format_from_filename(filename, |format| format.supports_parsing())
    }

    /// Writable format for a file name (`.json` → json, `.docx` → docx).
    pub fn detect_output_format(&self, filename: &str) -> Option<String> {
        self.detect_format_from_filename(filename, |format| format.supports_serialization())
    }

    fn detect_format_from_filename(
        &self,
        filename: &str,
        accept: impl Fn(&dyn Format) -> bool,
    ) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.formats
            .values()
            .map(|format| format.as_ref())
            .find(|format| accept(*format) && format.file_extensions().contains(&extension))
            .map(|format| format.name().to_string())
    }

    pub fn parse(&self, source: &str, format: &str) -> Result<StyledDocument, KuisError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(KuisError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        fmt.parse(source)
    }

    /// Text output only; a binary format is an error here.
    pub fn serialize(&self, doc: &StyledDocument, format: &str) -> Result<String, KuisError> {
        let empty = HashMap::new();
        match self.serialize_with_options(doc, format, &empty)? {
            SerializedDocument::Text(text) => Ok(text),
            SerializedDocument::Binary(_) => Err(KuisError::Serialization(format!(
                "Format '{format}' produced binary output when text was expected"
            ))),
        }
    }

    pub fn serialize_with_options(
        &self,
        doc: &StyledDocument,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument, KuisError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(KuisError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        fmt.serialize_with_options(doc, options)
    }

    /// quiz, markdown, json, and docx when the `docx` feature is on.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::quiz::QuizFormat);
        registry.register(crate::formats::markdown::MarkdownFormat);
        registry.register(crate::formats::json::JsonFormat);
        #[cfg(feature = "docx")]
        registry.register(crate::formats::docx::DocxFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
