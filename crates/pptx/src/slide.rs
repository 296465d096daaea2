//! Slide part serialization.

use deck_core::{LogoAnchor, Result, Slide, TextBlock, TextRun};
use deck_ooxml::constants::ns;
use deck_ooxml::{emu, XmlWriter};

/// Split a block's runs into paragraphs at break runs.
fn paragraphs(runs: &[TextRun]) -> Vec<Vec<&TextRun>> {
    let mut paragraphs = vec![Vec::new()];
    for run in runs {
        if run.is_line_break() {
            paragraphs.push(Vec::new());
        } else if !run.text.is_empty() {
            if let Some(current) = paragraphs.last_mut() {
                current.push(run);
            }
        }
    }
    paragraphs
}

/// Write the `<a:xfrm>` of a shape.
fn write_xfrm(xml: &mut XmlWriter, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
    xml.start("a:xfrm", &[])?;
    xml.empty(
        "a:off",
        &[("x", &emu(x).to_string()), ("y", &emu(y).to_string())],
    )?;
    xml.empty(
        "a:ext",
        &[("cx", &emu(width).to_string()), ("cy", &emu(height).to_string())],
    )?;
    xml.end("a:xfrm")?;
    xml.start("a:prstGeom", &[("prst", "rect")])?;
    xml.empty("a:avLst", &[])?;
    xml.end("a:prstGeom")
}

/// Write one text run with the block's style.
fn write_run(xml: &mut XmlWriter, block: &TextBlock, run: &TextRun) -> Result<()> {
    let size = ((block.font_size * 100.0).round() as i64).to_string();
    let bold = if block.bold || run.bold { "1" } else { "0" };

    xml.start("a:r", &[])?;
    xml.start(
        "a:rPr",
        &[("lang", "en-US"), ("sz", &size), ("b", bold), ("dirty", "0")],
    )?;
    xml.start("a:solidFill", &[])?;
    xml.empty("a:srgbClr", &[("val", &block.color)])?;
    xml.end("a:solidFill")?;
    if let Some(face) = &block.font_face {
        xml.empty("a:latin", &[("typeface", face)])?;
    }
    xml.end("a:rPr")?;
    xml.text_element("a:t", &[], &run.text)?;
    xml.end("a:r")
}

/// Write a text box shape for one block.
fn write_text_block(xml: &mut XmlWriter, id: u32, block: &TextBlock) -> Result<()> {
    let id_str = id.to_string();
    let name = format!("Text {}", id);

    xml.start("p:sp", &[])?;
    xml.start("p:nvSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", &id_str), ("name", &name)])?;
    xml.empty("p:cNvSpPr", &[("txBox", "1")])?;
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvSpPr")?;

    xml.start("p:spPr", &[])?;
    write_xfrm(xml, block.x, block.y, block.width, block.height)?;
    xml.empty("a:noFill", &[])?;
    xml.end("p:spPr")?;

    xml.start("p:txBody", &[])?;
    xml.empty(
        "a:bodyPr",
        &[("wrap", "square"), ("rtlCol", "0"), ("anchor", "t")],
    )?;
    xml.empty("a:lstStyle", &[])?;
    let spacing = block
        .line_spacing
        .map(|s| ((s * 100_000.0).round() as i64).to_string());
    for paragraph in paragraphs(&block.runs) {
        xml.start("a:p", &[])?;
        if let Some(spacing) = &spacing {
            xml.start("a:pPr", &[])?;
            xml.start("a:lnSpc", &[])?;
            xml.empty("a:spcPct", &[("val", spacing)])?;
            xml.end("a:lnSpc")?;
            xml.end("a:pPr")?;
        }
        for run in paragraph {
            write_run(xml, block, run)?;
        }
        xml.end("a:p")?;
    }
    xml.end("p:txBody")?;

    xml.end("p:sp")
}

/// Write the logo picture referencing the image relationship `rel_id`.
fn write_logo(xml: &mut XmlWriter, id: u32, logo: &LogoAnchor, rel_id: &str) -> Result<()> {
    xml.start("p:pic", &[])?;
    xml.start("p:nvPicPr", &[])?;
    xml.empty(
        "p:cNvPr",
        &[("id", &id.to_string()), ("name", "Logo"), ("descr", &logo.path)],
    )?;
    xml.start("p:cNvPicPr", &[])?;
    xml.empty("a:picLocks", &[("noChangeAspect", "1")])?;
    xml.end("p:cNvPicPr")?;
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvPicPr")?;

    xml.start("p:blipFill", &[])?;
    xml.empty("a:blip", &[("r:embed", rel_id)])?;
    xml.start("a:stretch", &[])?;
    xml.empty("a:fillRect", &[])?;
    xml.end("a:stretch")?;
    xml.end("p:blipFill")?;

    xml.start("p:spPr", &[])?;
    write_xfrm(xml, logo.x, logo.y, logo.width, logo.height)?;
    xml.end("p:spPr")?;
    xml.end("p:pic")
}

/// Serialize a slide part. `logo_rel_id` is set when the logo image is embedded.
pub fn slide_xml(slide: &Slide, logo_rel_id: Option<&str>) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start(
        "p:sld",
        &[
            ("xmlns:a", ns::DRAWINGML),
            ("xmlns:r", ns::RELATIONSHIPS),
            ("xmlns:p", ns::PRESENTATIONML),
        ],
    )?;
    xml.start("p:cSld", &[])?;
    xml.start("p:spTree", &[])?;

    xml.start("p:nvGrpSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
    xml.empty("p:cNvGrpSpPr", &[])?;
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvGrpSpPr")?;
    xml.start("p:grpSpPr", &[])?;
    xml.start("a:xfrm", &[])?;
    xml.empty("a:off", &[("x", "0"), ("y", "0")])?;
    xml.empty("a:ext", &[("cx", "0"), ("cy", "0")])?;
    xml.empty("a:chOff", &[("x", "0"), ("y", "0")])?;
    xml.empty("a:chExt", &[("cx", "0"), ("cy", "0")])?;
    xml.end("a:xfrm")?;
    xml.end("p:grpSpPr")?;

    // Shape ids start at 2; 1 is the group itself.
    let mut next_id = 2;
    if let Some(rel_id) = logo_rel_id {
        write_logo(&mut xml, next_id, &slide.logo, rel_id)?;
        next_id += 1;
    }
    for block in &slide.blocks {
        write_text_block(&mut xml, next_id, block)?;
        next_id += 1;
    }

    xml.end("p:spTree")?;
    xml.end("p:cSld")?;
    xml.start("p:clrMapOvr", &[])?;
    xml.empty("a:masterClrMapping", &[])?;
    xml.end("p:clrMapOvr")?;
    xml.end("p:sld")?;
    Ok(xml.into_bytes())
}
