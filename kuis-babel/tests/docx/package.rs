//! Structure of generated DOCX packages, inspected through the zip archive and the XML parts

use kuis_babel::ir::StyleSheet;
use kuis_babel::{convert_json, FormatRegistry, SerializedDocument};
use roxmltree::{Document, Node};
use std::collections::HashMap;
use std::io::{Cursor, Read};

const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const SIMPLE_SUM: &str = r#"[["2+2=?", ["3", "4"], "B", "Simple sum."]]"#;

fn export(input: &str, options: &[(&str, &str)]) -> Vec<u8> {
    let registry = FormatRegistry::default();
    let doc = convert_json(input, &StyleSheet::default()).unwrap();
    let options: HashMap<String, String> = options
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    match registry
        .serialize_with_options(&doc, "docx", &options)
        .unwrap()
    {
        SerializedDocument::Binary(bytes) => bytes,
        SerializedDocument::Text(_) => panic!("Expected binary output"),
    }
}

fn part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut xml = String::new();
    file.read_to_string(&mut xml).unwrap();
    xml
}

fn w_children<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Vec<Node<'a, 'input>> {
    node.children()
        .filter(|n| n.has_tag_name((W, name)))
        .collect()
}

fn paragraph_style(p: Node) -> Option<String> {
    p.descendants()
        .find(|n| n.has_tag_name((W, "pStyle")))
        .and_then(|n| n.attribute((W, "val")))
        .map(str::to_string)
}

#[test]
fn package_contains_required_parts() {
    let bytes = export(SIMPLE_SUM, &[]);
    let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
    let names: Vec<_> = archive.file_names().collect();

    for required in [
        "[Content_Types].xml",
        "_rels/.rels",
        "word/_rels/document.xml.rels",
        "word/document.xml",
        "word/styles.xml",
    ] {
        assert!(names.contains(&required), "missing {required}");
    }
}

#[test]
fn document_paragraphs_carry_styles_in_order() {
    let bytes = export(SIMPLE_SUM, &[]);
    let xml = part(&bytes, "word/document.xml");
    let doc = Document::parse(&xml).unwrap();

    let body = doc
        .descendants()
        .find(|n| n.has_tag_name((W, "body")))
        .unwrap();
    let styles: Vec<_> = w_children(body, "p")
        .into_iter()
        .map(|p| paragraph_style(p).unwrap())
        .collect();

    assert_eq!(
        styles,
        vec![
            "question",
            "option",
            "option",
            "answerExplanation",
            "answerExplanation",
            "question",
        ]
    );
}

#[test]
fn labels_are_bold_runs() {
    let bytes = export(SIMPLE_SUM, &[]);
    let xml = part(&bytes, "word/document.xml");
    let doc = Document::parse(&xml).unwrap();

    let bold_texts: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name((W, "r")))
        .filter(|r| r.descendants().any(|n| n.has_tag_name((W, "b"))))
        .filter_map(|r| {
            r.descendants()
                .find(|n| n.has_tag_name((W, "t")))
                .and_then(|t| t.text())
        })
        .collect();

    assert_eq!(bold_texts, vec!["Jawaban:", "Pembahasan:"]);
}

#[test]
fn option_indentation_is_a_tab_element() {
    let bytes = export(SIMPLE_SUM, &[]);
    let xml = part(&bytes, "word/document.xml");
    let doc = Document::parse(&xml).unwrap();

    let option = doc
        .descendants()
        .filter(|n| n.has_tag_name((W, "p")))
        .find(|p| paragraph_style(*p).as_deref() == Some("option"))
        .unwrap();
    let run = option
        .children()
        .find(|n| n.has_tag_name((W, "r")))
        .unwrap();
    let first = run
        .children()
        .find(|n| n.has_tag_name((W, "tab")) || n.has_tag_name((W, "t")))
        .unwrap();
    assert!(first.has_tag_name((W, "tab")));
}

fn quiz_styles<'a, 'input>(doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
    doc.descendants()
        .filter(|n| n.has_tag_name((W, "style")))
        .filter(|n| {
            matches!(
                n.attribute((W, "styleId")),
                Some("question" | "option" | "answerExplanation")
            )
        })
        .collect()
}

fn style_attr(style: Node, element: &str, attr: &str) -> Option<String> {
    style
        .descendants()
        .find(|n| n.has_tag_name((W, element)))
        .and_then(|n| n.attribute((W, attr)))
        .map(str::to_string)
}

#[test]
fn styles_part_defines_the_paragraph_styles() {
    let bytes = export(SIMPLE_SUM, &[]);
    let xml = part(&bytes, "word/styles.xml");
    let doc = Document::parse(&xml).unwrap();

    let styles = quiz_styles(&doc);
    let ids: Vec<_> = styles
        .iter()
        .filter_map(|n| n.attribute((W, "styleId")))
        .collect();
    assert_eq!(ids, vec!["question", "option", "answerExplanation"]);

    for style in &styles {
        assert_eq!(style.attribute((W, "type")), Some("paragraph"));
        assert_eq!(style_attr(*style, "basedOn", "val").as_deref(), Some("Normal"));
        assert_eq!(style_attr(*style, "next", "val").as_deref(), Some("Normal"));
        assert_eq!(
            style_attr(*style, "rFonts", "ascii").as_deref(),
            Some("Times New Roman")
        );
        assert_eq!(style_attr(*style, "sz", "val").as_deref(), Some("24"));
        assert_eq!(style_attr(*style, "spacing", "line").as_deref(), Some("360"));
    }

    assert_eq!(style_attr(styles[1], "name", "val").as_deref(), Some("Option"));

    let question_indent = styles[0]
        .descendants()
        .find(|n| n.has_tag_name((W, "ind")));
    assert!(question_indent.is_none());

    let answer_indent = styles[2]
        .descendants()
        .find(|n| n.has_tag_name((W, "ind")))
        .unwrap();
    let left = answer_indent
        .attribute((W, "left"))
        .or_else(|| answer_indent.attribute((W, "start")));
    assert_eq!(left, Some("720"));
    assert_eq!(answer_indent.attribute((W, "hanging")), Some("0"));
}

#[test]
fn options_override_style_sheet() {
    let bytes = export(SIMPLE_SUM, &[("font", "Arial"), ("font-size", "28")]);
    let xml = part(&bytes, "word/styles.xml");
    let doc = Document::parse(&xml).unwrap();

    for style in quiz_styles(&doc) {
        assert_eq!(style_attr(style, "rFonts", "ascii").as_deref(), Some("Arial"));
        assert_eq!(style_attr(style, "rFonts", "cs").as_deref(), Some("Arial"));
        assert_eq!(style_attr(style, "sz", "val").as_deref(), Some("28"));
    }
}

#[test]
fn markup_in_questions_is_escaped() {
    let bytes = export(r#"[["Is 1 < 2 & 3 > 2?", ["\"yes\""], "A", "Both"]]"#, &[]);
    let xml = part(&bytes, "word/document.xml");
    let doc = Document::parse(&xml).unwrap();

    let texts: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name((W, "t")))
        .filter_map(|n| n.text())
        .collect();
    assert!(texts.contains(&"1. Is 1 < 2 & 3 > 2?"));
    assert!(texts.contains(&"A. \"yes\""));
}

#[test]
fn empty_list_exports_single_empty_paragraph() {
    let bytes = export("[]", &[]);
    let xml = part(&bytes, "word/document.xml");
    let doc = Document::parse(&xml).unwrap();

    let paragraphs: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name((W, "p")))
        .collect();
    assert_eq!(paragraphs.len(), 1);
    assert!(!paragraphs[0]
        .descendants()
        .any(|n| n.has_tag_name((W, "r"))));
}
