//! Intermediate Representation (IR) for styled quiz documents.
//!
//! This module defines a format-agnostic representation of the output document,
//! so that every serializer (DOCX, markdown, JSON) consumes the same structure.

pub mod nodes;
pub mod styles;

pub use nodes::{ParagraphContent, ParagraphStyle, StyledDocument, StyledParagraph, TextRun};
pub use styles::{Indent, StyleDefinition, StyleSheet};
