//! Paragraph style definitions
//!
//! All measurements use word-processor units: font size in half-points, indentation in twips
//! (1/1440 inch) and line spacing in 240ths of a line.

use super::nodes::ParagraphStyle;
use serde::Serialize;

/// Presentation constants shared by the three paragraph styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    /// Font family for every style
    pub font: String,

    /// Font size in half-points (24 = 12pt)
    pub font_size: u32,

    /// Left indentation for options and answer/explanation lines, in twips (720 = 0.5 inch)
    pub indent_left: u32,

    /// Line spacing in 240ths of a line (360 = 1.5 lines)
    pub line_spacing: u32,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            font: "Times New Roman".to_string(),
            font_size: 24,
            indent_left: 720,
            line_spacing: 360,
        }
    }
}

impl StyleSheet {
    /// Definition for one style.
    pub fn definition(&self, style: ParagraphStyle) -> StyleDefinition {
        let indent = match style {
            ParagraphStyle::Question => None,
            ParagraphStyle::Option => Some(Indent {
                left: self.indent_left,
                hanging: None,
            }),
            ParagraphStyle::AnswerExplanation => Some(Indent {
                left: self.indent_left,
                hanging: Some(0),
            }),
        };

        StyleDefinition {
            id: style.id(),
            name: style.name(),
            based_on: "Normal",
            next: "Normal",
            quick_format: true,
            font: self.font.clone(),
            font_size: self.font_size,
            indent,
            line_spacing: self.line_spacing,
        }
    }

    /// Definitions for all styles, in [`ParagraphStyle::ALL`] order.
    pub fn definitions(&self) -> Vec<StyleDefinition> {
        ParagraphStyle::ALL
            .iter()
            .map(|style| self.definition(*style))
            .collect()
    }
}

/// A fully resolved paragraph style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub based_on: &'static str,
    pub next: &'static str,
    pub quick_format: bool,
    pub font: String,
    pub font_size: u32,
    pub indent: Option<Indent>,
    pub line_spacing: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indent {
    pub left: u32,
    pub hanging: Option<u32>,
}
