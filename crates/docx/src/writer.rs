//! DOCX package assembly.

use crate::styles::{heading_style_id, numbering_xml, styles_xml, BULLET_NUM_ID};
use deck_core::{Document, DocumentElement, Encoder, Result, TextRun};
use deck_ooxml::constants::{content_type as ct, ns, rel_type};
use deck_ooxml::{PackageWriter, Relationships, XmlWriter};

const DOCUMENT_PART: &str = "word/document.xml";

/// A4 page size and one-inch margins, in twentieths of a point.
const PAGE_WIDTH: &str = "11906";
const PAGE_HEIGHT: &str = "16838";
const PAGE_MARGIN: &str = "1440";

/// Writes a [`Document`] as a Word 2007+ package.
#[derive(Debug, Clone, Default)]
pub struct DocxWriter;

impl DocxWriter {
    pub fn new() -> Self {
        Self
    }

    /// Serialize the document and return the `.docx` bytes.
    pub fn write(&self, document: &Document) -> Result<Vec<u8>> {
        let mut package = PackageWriter::new();

        let mut root_rels = Relationships::new();
        root_rels.add(rel_type::OFFICE_DOCUMENT, DOCUMENT_PART);
        package.add_rels("", &root_rels)?;

        let mut doc_rels = Relationships::new();
        doc_rels.add(rel_type::STYLES, "styles.xml");
        doc_rels.add(rel_type::NUMBERING, "numbering.xml");

        package.add_part(DOCUMENT_PART, Some(ct::WML_DOCUMENT), document_xml(document)?);
        package.add_rels(DOCUMENT_PART, &doc_rels)?;
        package.add_part("word/styles.xml", Some(ct::WML_STYLES), styles_xml()?);
        package.add_part("word/numbering.xml", Some(ct::WML_NUMBERING), numbering_xml()?);

        log::debug!("Wrote document with {} paragraphs", document.len());
        package.finish()
    }
}

impl Encoder<Document> for DocxWriter {
    fn encode(&self, document: &Document) -> Result<Vec<u8>> {
        self.write(document)
    }
}

fn write_runs(xml: &mut XmlWriter, runs: &[TextRun]) -> Result<()> {
    for run in runs.iter().filter(|r| !r.text.is_empty()) {
        xml.start("w:r", &[])?;
        if run.bold {
            xml.start("w:rPr", &[])?;
            xml.empty("w:b", &[])?;
            xml.end("w:rPr")?;
        }
        if run.is_line_break() {
            xml.empty("w:br", &[])?;
        } else {
            xml.text_element("w:t", &[("xml:space", "preserve")], &run.text)?;
        }
        xml.end("w:r")?;
    }
    Ok(())
}

fn write_element(xml: &mut XmlWriter, element: &DocumentElement) -> Result<()> {
    match element {
        DocumentElement::Blank => return xml.empty("w:p", &[]),
        DocumentElement::Heading { level, .. } => {
            xml.start("w:p", &[])?;
            xml.start("w:pPr", &[])?;
            xml.empty("w:pStyle", &[("w:val", &heading_style_id(*level))])?;
            xml.end("w:pPr")?;
        }
        DocumentElement::Bullet(_) => {
            xml.start("w:p", &[])?;
            xml.start("w:pPr", &[])?;
            xml.empty("w:pStyle", &[("w:val", "ListParagraph")])?;
            xml.start("w:numPr", &[])?;
            xml.empty("w:ilvl", &[("w:val", "0")])?;
            xml.empty("w:numId", &[("w:val", BULLET_NUM_ID)])?;
            xml.end("w:numPr")?;
            xml.end("w:pPr")?;
        }
        DocumentElement::Paragraph(_) => xml.start("w:p", &[])?,
    }
    write_runs(xml, element.runs())?;
    xml.end("w:p")
}

/// Serialize `word/document.xml`.
pub fn document_xml(document: &Document) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start(
        "w:document",
        &[("xmlns:w", ns::WORDPROCESSINGML), ("xmlns:r", ns::RELATIONSHIPS)],
    )?;
    xml.start("w:body", &[])?;

    for element in &document.elements {
        write_element(&mut xml, element)?;
    }

    xml.start("w:sectPr", &[])?;
    xml.empty("w:pgSz", &[("w:w", PAGE_WIDTH), ("w:h", PAGE_HEIGHT)])?;
    xml.empty(
        "w:pgMar",
        &[
            ("w:top", PAGE_MARGIN),
            ("w:right", PAGE_MARGIN),
            ("w:bottom", PAGE_MARGIN),
            ("w:left", PAGE_MARGIN),
            ("w:header", "708"),
            ("w:footer", "708"),
            ("w:gutter", "0"),
        ],
    )?;
    xml.end("w:sectPr")?;

    xml.end("w:body")?;
    xml.end("w:document")?;
    Ok(xml.into_bytes())
}
