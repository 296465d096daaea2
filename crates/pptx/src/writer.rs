//! PPTX package assembly.

use crate::slide::slide_xml;
use crate::template::{SLIDE_HEIGHT, SLIDE_LAYOUT_XML, SLIDE_MASTER_XML, SLIDE_WIDTH, THEME_XML};
use deck_core::{Encoder, Result, SlideDeck};
use deck_ooxml::constants::{content_type as ct, ns, rel_type};
use deck_ooxml::{PackageWriter, Relationships, XmlWriter};

const PRESENTATION_PART: &str = "ppt/presentation.xml";
const MASTER_PART: &str = "ppt/slideMasters/slideMaster1.xml";
const LAYOUT_PART: &str = "ppt/slideLayouts/slideLayout1.xml";
const THEME_PART: &str = "ppt/theme/theme1.xml";
const LOGO_PART: &str = "ppt/media/image1.png";

/// First id in `p:sldIdLst`; lower values are reserved.
const FIRST_SLIDE_ID: usize = 256;

/// Writes a [`SlideDeck`] as a PowerPoint 2007+ package.
#[derive(Debug, Clone, Default)]
pub struct PptxWriter {
    logo: Option<Vec<u8>>,
}

impl PptxWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Embed PNG bytes as the logo on every slide.
    pub fn with_logo(mut self, png: Vec<u8>) -> Self {
        self.logo = Some(png);
        self
    }

    pub fn has_logo(&self) -> bool {
        self.logo.is_some()
    }

    /// Serialize the deck and return the `.pptx` bytes.
    pub fn write(&self, deck: &SlideDeck) -> Result<Vec<u8>> {
        if self.logo.is_none() {
            log::warn!("No logo image supplied, slides are written without a logo");
        }

        let mut package = PackageWriter::new();
        if self.logo.is_some() {
            package.add_default("png", ct::PNG);
        }

        let mut root_rels = Relationships::new();
        root_rels.add(rel_type::OFFICE_DOCUMENT, PRESENTATION_PART);
        package.add_rels("", &root_rels)?;

        let mut pres_rels = Relationships::new();
        let master_rel = pres_rels.add(rel_type::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        let slide_rels: Vec<String> = (1..=deck.len())
            .map(|n| pres_rels.add(rel_type::SLIDE, &format!("slides/slide{}.xml", n)))
            .collect();
        pres_rels.add(rel_type::THEME, "theme/theme1.xml");

        package.add_part(
            PRESENTATION_PART,
            Some(ct::PML_PRESENTATION),
            presentation_xml(&master_rel, &slide_rels)?,
        );
        package.add_rels(PRESENTATION_PART, &pres_rels)?;

        let mut master_rels = Relationships::new();
        master_rels.add(rel_type::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.add(rel_type::THEME, "../theme/theme1.xml");
        package.add_part(
            MASTER_PART,
            Some(ct::PML_SLIDE_MASTER),
            SLIDE_MASTER_XML.as_bytes().to_vec(),
        );
        package.add_rels(MASTER_PART, &master_rels)?;

        let mut layout_rels = Relationships::new();
        layout_rels.add(rel_type::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        package.add_part(
            LAYOUT_PART,
            Some(ct::PML_SLIDE_LAYOUT),
            SLIDE_LAYOUT_XML.as_bytes().to_vec(),
        );
        package.add_rels(LAYOUT_PART, &layout_rels)?;

        package.add_part(THEME_PART, Some(ct::THEME), THEME_XML.as_bytes().to_vec());

        for (i, slide) in deck.slides.iter().enumerate() {
            let part = format!("ppt/slides/slide{}.xml", i + 1);
            let mut rels = Relationships::new();
            rels.add(rel_type::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
            let logo_rel = self
                .logo
                .as_ref()
                .map(|_| rels.add(rel_type::IMAGE, "../media/image1.png"));

            package.add_part(
                &part,
                Some(ct::PML_SLIDE),
                slide_xml(slide, logo_rel.as_deref())?,
            );
            package.add_rels(&part, &rels)?;
            log::debug!("Wrote slide {} with {} blocks", i + 1, slide.blocks.len());
        }

        if let Some(logo) = &self.logo {
            package.add_part(LOGO_PART, None, logo.clone());
        }

        package.finish()
    }
}

impl Encoder<SlideDeck> for PptxWriter {
    fn encode(&self, deck: &SlideDeck) -> Result<Vec<u8>> {
        self.write(deck)
    }
}

fn presentation_xml(master_rel: &str, slide_rels: &[String]) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start(
        "p:presentation",
        &[
            ("xmlns:a", ns::DRAWINGML),
            ("xmlns:r", ns::RELATIONSHIPS),
            ("xmlns:p", ns::PRESENTATIONML),
            ("saveSubsetFonts", "1"),
        ],
    )?;

    xml.start("p:sldMasterIdLst", &[])?;
    xml.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", master_rel)])?;
    xml.end("p:sldMasterIdLst")?;

    if !slide_rels.is_empty() {
        xml.start("p:sldIdLst", &[])?;
        for (i, rel) in slide_rels.iter().enumerate() {
            let id = (FIRST_SLIDE_ID + i).to_string();
            xml.empty("p:sldId", &[("id", &id), ("r:id", rel)])?;
        }
        xml.end("p:sldIdLst")?;
    }

    xml.empty(
        "p:sldSz",
        &[("cx", &SLIDE_WIDTH.to_string()), ("cy", &SLIDE_HEIGHT.to_string())],
    )?;
    xml.empty("p:notesSz", &[("cx", "6858000"), ("cy", "9144000")])?;
    xml.end("p:presentation")?;
    Ok(xml.into_bytes())
}
