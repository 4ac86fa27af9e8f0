//! Common utilities for styled formats
//!
//! Format options arrive as untyped `key → value` strings (from `--extra-<key>` on the CLI).
//! This module turns the style-related keys into a [`StyleSheet`] and restyles a document with it.

use crate::error::KuisError;
use crate::ir::{StyleSheet, StyledDocument};
use std::collections::HashMap;

/// Option keys understood by [`style_sheet_from_options`].
pub const STYLE_OPTION_KEYS: &[&str] = &["font", "font-size", "indent-left", "line-spacing"];

/// Layer style options over `base`. Keys not listed in [`STYLE_OPTION_KEYS`] are rejected.
pub fn style_sheet_from_options(
    base: &StyleSheet,
    options: &HashMap<String, String>,
) -> Result<StyleSheet, KuisError> {
    let mut sheet = base.clone();

    for (key, value) in options {
        match key.as_str() {
            "font" => {
                if value.trim().is_empty() {
                    return Err(KuisError::Serialization(
                        "Font name must not be empty".to_string(),
                    ));
                }
                sheet.font = value.clone();
            }
            "font-size" => sheet.font_size = parse_measure(key, value)?,
            "indent-left" => sheet.indent_left = parse_measure(key, value)?,
            "line-spacing" => sheet.line_spacing = parse_measure(key, value)?,
            other => {
                return Err(KuisError::NotSupported(format!(
                    "Unknown option '{other}' (expected one of: {})",
                    STYLE_OPTION_KEYS.join(", ")
                )))
            }
        }
    }

    Ok(sheet)
}

/// Replace the style definitions of `doc` when options change the style sheet.
pub fn restyle(doc: &StyledDocument, sheet: &StyleSheet) -> StyledDocument {
    StyledDocument {
        styles: sheet.definitions(),
        paragraphs: doc.paragraphs.clone(),
    }
}

fn parse_measure(key: &str, value: &str) -> Result<u32, KuisError> {
    value.trim().parse::<u32>().map_err(|_| {
        KuisError::Serialization(format!(
            "Invalid value '{value}' for --extra-{key}: expected a non-negative integer"
        ))
    })
}
