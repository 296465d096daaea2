use deck_core::{DocumentBuilder, Encoder};
use deck_docx::DocxWriter;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

fn read_part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut out = String::new();
    archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing part {}", name))
        .read_to_string(&mut out)
        .unwrap();
    out
}

/// `(style, text)` for every body paragraph. Bullets report `"bullet"`.
fn paragraphs(xml: &str) -> Vec<(String, String)> {
    let mut reader = Reader::from_str(xml);
    let mut out = Vec::new();
    let mut style = String::new();
    let mut text = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    style.clear();
                    text.clear();
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => out.push((String::new(), String::new())),
                b"w:pStyle" if style.is_empty() => {
                    if let Some(attr) = e.try_get_attribute("w:val").unwrap() {
                        style = String::from_utf8_lossy(&attr.value).into_owned();
                    }
                }
                b"w:numId" => style = "bullet".to_string(),
                _ => {}
            },
            Event::Text(e) if in_text => text.push_str(&e.unescape().unwrap()),
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => out.push((style.clone(), text.clone())),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    out
}

#[test]
fn test_document_round_trips_through_archive() {
    let document = DocumentBuilder::new().build(
        "Sure! Here it is.\n# Plan\n\nWe **ship** on Friday.\n---\n* Build\n- Test\n##### Notes\n###### Too deep",
    );
    let bytes = DocxWriter::new().encode(&document).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

    assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");
    let rels = read_part(&mut archive, "word/_rels/document.xml.rels");
    assert!(rels.contains(r#"Target="styles.xml""#));
    assert!(rels.contains(r#"Target="numbering.xml""#));

    let body = paragraphs(&read_part(&mut archive, "word/document.xml"));
    let expected = [
        ("", ""),
        ("Heading1", "Plan"),
        ("", "We ship on Friday."),
        ("", ""),
        ("bullet", "Build"),
        ("bullet", "Test"),
        ("Heading5", "Notes"),
        ("", "###### Too deep"),
    ];
    assert_eq!(body.len(), expected.len());
    for ((style, text), (want_style, want_text)) in body.iter().zip(expected) {
        assert_eq!(style, want_style);
        assert_eq!(text, want_text);
    }
}

#[test]
fn test_content_types_cover_word_parts() {
    let document = DocumentBuilder::new().build("Hello");
    let bytes = DocxWriter::new().encode(&document).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

    let content_types = read_part(&mut archive, "[Content_Types].xml");
    for part in ["/word/document.xml", "/word/styles.xml", "/word/numbering.xml"] {
        assert!(content_types.contains(&format!(r#"PartName="{}""#, part)));
    }
    let root = read_part(&mut archive, "_rels/.rels");
    assert!(root.contains(r#"Target="word/document.xml""#));
}

#[test]
fn test_empty_document_is_still_valid_package() {
    let bytes = DocxWriter::new()
        .encode(&DocumentBuilder::new().build("\n\n"))
        .unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let body = read_part(&mut archive, "word/document.xml");
    assert!(paragraphs(&body).is_empty());
    assert!(body.contains("<w:sectPr>"));
}

#[test]
fn test_control_characters_never_reach_the_archive() {
    let document = DocumentBuilder::new().build("Intro\u{0C}page two\nBell\u{07}here");
    let bytes = DocxWriter::new().encode(&document).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

    let body = read_part(&mut archive, "word/document.xml");
    assert!(!body.bytes().any(|b| b == 0x0C || b == 0x07));
    let texts: Vec<String> = paragraphs(&body).into_iter().map(|(_, t)| t).collect();
    assert_eq!(texts, vec!["Intropage two", "Bellhere"]);
}
