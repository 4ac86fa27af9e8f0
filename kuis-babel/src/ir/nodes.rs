//! Core data structures for the styled document.

use super::styles::{StyleDefinition, StyleSheet};
use serde::Serialize;

/// Named paragraph style applied to every output paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParagraphStyle {
    Question,
    Option,
    AnswerExplanation,
}

impl ParagraphStyle {
    pub const ALL: [ParagraphStyle; 3] = [
        ParagraphStyle::Question,
        ParagraphStyle::Option,
        ParagraphStyle::AnswerExplanation,
    ];

    /// Style id as referenced from paragraphs (`w:pStyle`).
    pub fn id(&self) -> &'static str {
        match self {
            ParagraphStyle::Question => "question",
            ParagraphStyle::Option => "option",
            ParagraphStyle::AnswerExplanation => "answerExplanation",
        }
    }

    /// Human-readable style name shown in word processors.
    pub fn name(&self) -> &'static str {
        match self {
            ParagraphStyle::Question => "Question",
            ParagraphStyle::Option => "Option",
            ParagraphStyle::AnswerExplanation => "AnswerExplanation",
        }
    }
}

/// A span of text with uniform formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Body of a paragraph: either unformatted text or explicit runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParagraphContent {
    Text(String),
    Runs(Vec<TextRun>),
}

/// One output paragraph.
///
/// `source` is the intermediate-text line the paragraph was built from. Labeled paragraphs drop
/// indentation and surrounding text from their runs, so the line is kept to re-emit the text
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledParagraph {
    pub style: ParagraphStyle,
    pub content: ParagraphContent,
    #[serde(skip)]
    source: String,
}

impl StyledParagraph {
    pub fn text(style: ParagraphStyle, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            style,
            content: ParagraphContent::Text(text.clone()),
            source: text,
        }
    }

    pub fn runs(style: ParagraphStyle, runs: Vec<TextRun>, source: impl Into<String>) -> Self {
        Self {
            style,
            content: ParagraphContent::Runs(runs),
            source: source.into(),
        }
    }

    /// The line this paragraph was built from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// The complete output: style definitions plus paragraphs in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledDocument {
    pub styles: Vec<StyleDefinition>,
    pub paragraphs: Vec<StyledParagraph>,
}

impl StyledDocument {
    pub fn style_definition(&self, style: ParagraphStyle) -> Option<&StyleDefinition> {
        self.styles.iter().find(|def| def.id == style.id())
    }

    /// Recover the style constants the document was built with.
    ///
    /// Missing definitions fall back to [`StyleSheet::default`] values.
    pub fn style_sheet(&self) -> StyleSheet {
        let mut sheet = StyleSheet::default();
        if let Some(question) = self.style_definition(ParagraphStyle::Question) {
            sheet.font = question.font.clone();
            sheet.font_size = question.font_size;
            sheet.line_spacing = question.line_spacing;
        }
        if let Some(indent) = self
            .style_definition(ParagraphStyle::Option)
            .and_then(|def| def.indent)
        {
            sheet.indent_left = indent.left;
        }
        sheet
    }
}
