//! Quiz document conversion
//!
//!     This crate turns a JSON list of multiple-choice questions into a line-oriented text
//!     rendering, and that text into a styled word-processing document.
//!
//!     This is a pure lib, that is, it powers the kuis CLI but is shell agnostic: no code here
//!     should suppose a shell environment, be it std print, env vars etc.
//!
//! Architecture
//!
//!     The pipeline has two stages with a plain-text hand-off in between:
//!
//!         JSON ──record──▶ QuestionRecord ──render──▶ text ──classify/builder──▶ StyledDocument
//!
//!     The text in the middle (see ./render.rs) is the contract between the stages: it is what
//!     the user previews, and it is the only thing the builder reads. The builder never sees the
//!     JSON, so a hand-edited text file styles exactly like rendered output.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── record.rs               # QuestionRecord + JSON validation
//!     ├── render.rs               # records → intermediate text
//!     ├── classify.rs             # line → LineKind
//!     ├── builder.rs              # text → StyledDocument
//!     ├── ir                      # Styled document + style definitions
//!     ├── session.rs              # ConverterSession (input + preview state)
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     └── formats
//!         ├── quiz                # JSON input
//!         ├── markdown            # intermediate text in and out
//!         ├── json                # IR dump
//!         ├── docx                # Word output (feature "docx")
//!         └── common              # shared option handling
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── pipeline                # end-to-end and property tests
//!     └── docx                    # package structure tests
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait. Formats have a parse()
//!     and/or serialize() method, a name and file extensions. See the trait def [./format.rs]

pub mod builder;
pub mod classify;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod record;
pub mod registry;
pub mod render;
pub mod session;

pub use builder::{build_document, build_document_with_styles};
pub use classify::{classify_line, LineKind};
pub use error::KuisError;
pub use format::{Format, SerializedDocument};
pub use record::{parse_questions, QuestionRecord};
pub use registry::FormatRegistry;
pub use render::{render_json, render_markdown, render_preview, INVALID_INPUT_SENTINEL};
pub use session::ConverterSession;

/// Run the whole pipeline: JSON input to styled document.
///
/// # Errors
///
/// Fails with [`KuisError::InvalidJson`] or [`KuisError::MalformedRecord`] on bad input.
pub fn convert_json(input: &str, styles: &ir::StyleSheet) -> Result<ir::StyledDocument, KuisError> {
    let text = render_json(input)?;
    Ok(build_document_with_styles(&text, styles))
}
