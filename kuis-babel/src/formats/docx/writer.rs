//! StyledDocument → docx-rs document model → DOCX bytes

use crate::error::KuisError;
use crate::ir::{ParagraphContent, StyleDefinition, StyledDocument, StyledParagraph, TextRun};
use docx_rs::{
    Docx, LineSpacing, LineSpacingType, PageMargin, Paragraph, Run, RunFonts, SpecialIndentType,
    Style, StyleType,
};
use std::io::Cursor;

/// A4 in twips.
const PAGE_WIDTH: u32 = 11906;
const PAGE_HEIGHT: u32 = 16838;

/// One inch on every side, in twips.
const PAGE_MARGIN: i32 = 1440;

/// Package the document into DOCX bytes.
pub fn write_docx(doc: &StyledDocument) -> Result<Vec<u8>, KuisError> {
    let mut buffer = Vec::new();
    build_docx(doc)
        .build()
        .pack(&mut Cursor::new(&mut buffer))
        .map_err(package_error)?;
    Ok(buffer)
}

fn package_error(err: impl std::fmt::Display) -> KuisError {
    KuisError::Serialization(format!("Failed to write DOCX package: {err}"))
}

fn build_docx(doc: &StyledDocument) -> Docx {
    let margin = PageMargin::new()
        .top(PAGE_MARGIN)
        .bottom(PAGE_MARGIN)
        .left(PAGE_MARGIN)
        .right(PAGE_MARGIN);

    let docx = doc.styles.iter().fold(
        Docx::new()
            .page_size(PAGE_WIDTH, PAGE_HEIGHT)
            .page_margin(margin),
        |docx, def| docx.add_style(build_style(def)),
    );

    doc.paragraphs
        .iter()
        .fold(docx, |docx, paragraph| docx.add_paragraph(build_paragraph(paragraph)))
}

fn build_style(def: &StyleDefinition) -> Style {
    let fonts = RunFonts::new()
        .ascii(&def.font)
        .hi_ansi(&def.font)
        .east_asia(&def.font)
        .cs(&def.font);

    let style = Style::new(def.id, StyleType::Paragraph)
        .name(def.name)
        .based_on(def.based_on)
        .next(def.next)
        .fonts(fonts)
        .size(def.font_size as usize)
        .line_spacing(
            LineSpacing::new()
                .line(def.line_spacing as _)
                .line_rule(LineSpacingType::Auto),
        );

    match def.indent {
        Some(indent) => style.indent(
            Some(indent.left as i32),
            indent
                .hanging
                .map(|hanging| SpecialIndentType::Hanging(hanging as i32)),
            None,
            None,
        ),
        None => style,
    }
}

fn build_paragraph(paragraph: &StyledParagraph) -> Paragraph {
    let p = Paragraph::new().style(paragraph.style.id());

    match &paragraph.content {
        ParagraphContent::Text(text) if text.is_empty() => p,
        ParagraphContent::Text(text) => p.add_run(build_run(&TextRun::plain(text.as_str()))),
        ParagraphContent::Runs(runs) => runs.iter().fold(p, |p, run| p.add_run(build_run(run))),
    }
}

fn build_run(run: &TextRun) -> Run {
    let mut out = Run::new();
    if run.bold {
        out = out.bold();
    }

    // Tabs are their own run content element.
    for (i, segment) in run.text.split('\t').enumerate() {
        if i > 0 {
            out = out.add_tab();
        }
        if !segment.is_empty() || run.text.is_empty() {
            out = out.add_text(segment);
        }
    }
    out
}
