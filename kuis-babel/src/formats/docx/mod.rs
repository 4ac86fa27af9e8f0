//! DOCX format implementation
//!
//! This module writes styled documents as Office Open XML word-processing packages, built with
//! the `docx-rs` document model.
//!
//! # Element Mapping Table
//!
//! | IR Element           | docx-rs                                        |
//! |----------------------|------------------------------------------------|
//! | StyledParagraph      | `Paragraph::new().style(style id)`             |
//! | ParagraphContent     | one `Run` for text, one per run for runs       |
//! | TextRun.bold         | `Run::bold()`                                  |
//! | `\t` in text         | `Run::add_tab()`                               |
//! | StyleDefinition      | `Style` (paragraph type) added to the document |
//!
//! The page is A4 with one-inch margins.
//!
//! # Options
//!
//! `font`, `font-size`, `indent-left` and `line-spacing` override the document's style sheet
//! (see [`crate::formats::common`]).

mod writer;

pub use writer::write_docx;

use crate::error::KuisError;
use crate::format::{Format, SerializedDocument};
use crate::formats::common::{restyle, style_sheet_from_options};
use crate::ir::StyledDocument;
use log::debug;
use std::collections::HashMap;

/// Format implementation for DOCX
pub struct DocxFormat;

impl Format for DocxFormat {
    fn name(&self) -> &str {
        "docx"
    }

    fn description(&self) -> &str {
        "Word document (Office Open XML)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn is_binary(&self) -> bool {
        true
    }

    fn serialize(&self, _doc: &StyledDocument) -> Result<String, KuisError> {
        Err(KuisError::NotSupported(
            "DOCX serialization produces binary output".to_string(),
        ))
    }

    fn serialize_with_options(
        &self,
        doc: &StyledDocument,
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument, KuisError> {
        let bytes = if options.is_empty() {
            write_docx(doc)?
        } else {
            let sheet = style_sheet_from_options(&doc.style_sheet(), options)?;
            write_docx(&restyle(doc, &sheet))?
        };

        debug!(
            "wrote DOCX package: {} paragraph(s), {} byte(s)",
            doc.paragraphs.len(),
            bytes.len()
        );
        Ok(SerializedDocument::Binary(bytes))
    }
}
