//! Styles and numbering parts.

use deck_core::{LineKind, Result};
use deck_ooxml::constants::ns;
use deck_ooxml::XmlWriter;

/// Deepest heading level with its own paragraph style.
pub const MAX_HEADING_LEVEL: u8 = 5;

/// Numbering instance used by bullet paragraphs.
pub const BULLET_NUM_ID: &str = "1";

const FONT_FACE: &str = "Arial";
const BULLET_GLYPH: &str = "\u{2022}";

/// Style id for a heading level, clamped to the defined styles.
pub fn heading_style_id(level: u8) -> String {
    format!("Heading{}", level.clamp(1, MAX_HEADING_LEVEL))
}

/// Font size in half-points, the unit of `w:sz`.
fn half_points(kind: LineKind) -> String {
    let (points, _) = kind.font_style();
    ((points * 2.0).round() as i64).to_string()
}

fn write_run_props(xml: &mut XmlWriter, size: &str, bold: bool) -> Result<()> {
    xml.start("w:rPr", &[])?;
    xml.empty(
        "w:rFonts",
        &[("w:ascii", FONT_FACE), ("w:hAnsi", FONT_FACE), ("w:cs", FONT_FACE)],
    )?;
    if bold {
        xml.empty("w:b", &[])?;
    }
    xml.empty("w:sz", &[("w:val", size)])?;
    xml.empty("w:szCs", &[("w:val", size)])?;
    xml.end("w:rPr")
}

/// Serialize `word/styles.xml`.
pub fn styles_xml() -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start("w:styles", &[("xmlns:w", ns::WORDPROCESSINGML)])?;

    xml.start("w:docDefaults", &[])?;
    xml.start("w:rPrDefault", &[])?;
    write_run_props(&mut xml, &half_points(LineKind::Paragraph), false)?;
    xml.end("w:rPrDefault")?;
    xml.start("w:pPrDefault", &[])?;
    xml.start("w:pPr", &[])?;
    xml.empty("w:spacing", &[("w:after", "120"), ("w:line", "276"), ("w:lineRule", "auto")])?;
    xml.end("w:pPr")?;
    xml.end("w:pPrDefault")?;
    xml.end("w:docDefaults")?;

    xml.start(
        "w:style",
        &[("w:type", "paragraph"), ("w:default", "1"), ("w:styleId", "Normal")],
    )?;
    xml.empty("w:name", &[("w:val", "Normal")])?;
    xml.empty("w:qFormat", &[])?;
    xml.end("w:style")?;

    for level in 1..=MAX_HEADING_LEVEL {
        let id = heading_style_id(level);
        let name = format!("heading {}", level);
        let outline = (level - 1).to_string();

        xml.start("w:style", &[("w:type", "paragraph"), ("w:styleId", &id)])?;
        xml.empty("w:name", &[("w:val", &name)])?;
        xml.empty("w:basedOn", &[("w:val", "Normal")])?;
        xml.empty("w:next", &[("w:val", "Normal")])?;
        xml.empty("w:qFormat", &[])?;
        xml.start("w:pPr", &[])?;
        xml.empty("w:keepNext", &[])?;
        xml.empty("w:spacing", &[("w:before", "240"), ("w:after", "120")])?;
        xml.empty("w:outlineLvl", &[("w:val", &outline)])?;
        xml.end("w:pPr")?;
        write_run_props(&mut xml, &half_points(LineKind::Heading(level)), true)?;
        xml.end("w:style")?;
    }

    xml.start("w:style", &[("w:type", "paragraph"), ("w:styleId", "ListParagraph")])?;
    xml.empty("w:name", &[("w:val", "List Paragraph")])?;
    xml.empty("w:basedOn", &[("w:val", "Normal")])?;
    xml.empty("w:qFormat", &[])?;
    xml.start("w:pPr", &[])?;
    xml.empty("w:ind", &[("w:left", "720")])?;
    xml.end("w:pPr")?;
    xml.end("w:style")?;

    xml.end("w:styles")?;
    Ok(xml.into_bytes())
}

/// Serialize `word/numbering.xml` with one bullet list definition.
pub fn numbering_xml() -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start("w:numbering", &[("xmlns:w", ns::WORDPROCESSINGML)])?;

    xml.start("w:abstractNum", &[("w:abstractNumId", "0")])?;
    xml.empty("w:multiLevelType", &[("w:val", "singleLevel")])?;
    xml.start("w:lvl", &[("w:ilvl", "0")])?;
    xml.empty("w:start", &[("w:val", "1")])?;
    xml.empty("w:numFmt", &[("w:val", "bullet")])?;
    xml.empty("w:lvlText", &[("w:val", BULLET_GLYPH)])?;
    xml.empty("w:lvlJc", &[("w:val", "left")])?;
    xml.start("w:pPr", &[])?;
    xml.empty("w:ind", &[("w:left", "720"), ("w:hanging", "360")])?;
    xml.end("w:pPr")?;
    xml.end("w:lvl")?;
    xml.end("w:abstractNum")?;

    xml.start("w:num", &[("w:numId", BULLET_NUM_ID)])?;
    xml.empty("w:abstractNumId", &[("w:val", "0")])?;
    xml.end("w:num")?;

    xml.end("w:numbering")?;
    Ok(xml.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_style_id_clamps() {
        assert_eq!(heading_style_id(1), "Heading1");
        assert_eq!(heading_style_id(5), "Heading5");
        assert_eq!(heading_style_id(0), "Heading1");
        assert_eq!(heading_style_id(9), "Heading5");
    }

    #[test]
    fn test_styles_define_heading_ladder() {
        let xml = String::from_utf8(styles_xml().unwrap()).unwrap();
        for (level, size) in [(1, "56"), (2, "48"), (3, "40"), (4, "38"), (5, "36")] {
            assert!(xml.contains(&format!(r#"w:styleId="Heading{}""#, level)));
            assert!(xml.contains(&format!(r#"<w:sz w:val="{}"/>"#, size)));
        }
        assert!(xml.contains(r#"w:styleId="Normal""#));
        assert!(xml.contains(r#"w:styleId="ListParagraph""#));
    }

    #[test]
    fn test_numbering_is_single_level_bullet() {
        let xml = String::from_utf8(numbering_xml().unwrap()).unwrap();
        assert!(xml.contains(r#"<w:numFmt w:val="bullet"/>"#));
        assert!(xml.contains(r#"<w:lvlText w:val="•"/>"#));
        assert!(xml.contains(r#"<w:num w:numId="1">"#));
        assert_eq!(xml.matches("<w:lvl ").count(), 1);
    }
}
