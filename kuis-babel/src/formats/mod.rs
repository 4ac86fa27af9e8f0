//! Format implementations
//!
//! This module contains all format implementations: the quiz JSON input, the intermediate
//! markdown text, and the document outputs.

pub mod common;
#[cfg(feature = "docx")]
pub mod docx;
pub mod json;
pub mod markdown;
pub mod quiz;

#[cfg(feature = "docx")]
pub use docx::DocxFormat;
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use quiz::QuizFormat;
