//! WASM wrapper for generating slide decks and documents.
//!
//! Exposes the text pipeline and both encoders to JavaScript so a browser
//! front end can turn generated text into downloadable files.

use deck_core::{DocumentBuilder, Encoder, SlideDeck, SlideDeckBuilder};
use deck_docx::DocxWriter;
use deck_pptx::PptxWriter;
use js_sys::Uint8Array;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Slide deck model returned for client-side preview.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeckPreview {
    /// Number of slides, cover slide included.
    pub slide_count: usize,
    /// Visible text of each slide, one entry per text block.
    pub slide_text: Vec<Vec<String>>,
    /// The full positioned model.
    pub deck: SlideDeck,
}

/// Generate a `.pptx` file from generated text.
///
/// # Arguments
/// * `content` - The raw generated text
/// * `title` - Optional cover slide title (placeholder when absent)
/// * `logo` - Optional PNG bytes placed as the logo on every slide
///
/// # Returns
/// The file bytes, or throws on error.
#[wasm_bindgen]
pub fn generate_pptx(
    content: &str,
    title: Option<String>,
    logo: Option<Vec<u8>>,
) -> Result<Uint8Array, JsValue> {
    let bytes =
        generate_pptx_impl(content, title.as_deref(), logo).map_err(|e| JsValue::from_str(&e))?;
    Ok(Uint8Array::from(bytes.as_slice()))
}

fn generate_pptx_impl(
    content: &str,
    title: Option<&str>,
    logo: Option<Vec<u8>>,
) -> Result<Vec<u8>, String> {
    let deck = SlideDeckBuilder::new().build(content, title);

    let mut writer = PptxWriter::new();
    if let Some(png) = logo.filter(|b| !b.is_empty()) {
        writer = writer.with_logo(png);
    }
    writer
        .encode(&deck)
        .map_err(|e| format!("PPTX generation error: {}", e))
}

/// Generate a `.docx` file from generated text.
#[wasm_bindgen]
pub fn generate_docx(content: &str) -> Result<Uint8Array, JsValue> {
    let bytes = generate_docx_impl(content).map_err(|e| JsValue::from_str(&e))?;
    Ok(Uint8Array::from(bytes.as_slice()))
}

fn generate_docx_impl(content: &str) -> Result<Vec<u8>, String> {
    let document = DocumentBuilder::new().build(content);
    DocxWriter::new()
        .encode(&document)
        .map_err(|e| format!("DOCX generation error: {}", e))
}

/// Build the slide deck without encoding it.
///
/// # Returns
/// A JavaScript object with the deck preview.
#[wasm_bindgen]
pub fn preview_deck(content: &str, title: Option<String>) -> Result<JsValue, JsValue> {
    let preview = preview_deck_impl(content, title.as_deref());

    serde_wasm_bindgen::to_value(&preview)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn preview_deck_impl(content: &str, title: Option<&str>) -> DeckPreview {
    let deck = SlideDeckBuilder::new().build(content, title);
    DeckPreview {
        slide_count: deck.len(),
        slide_text: deck.slides.iter().map(|s| s.text_lines()).collect(),
        deck,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

    #[test]
    fn test_generate_pptx() {
        let bytes = generate_pptx_impl("# Agenda\n* Intro", Some("Kickoff"), None).unwrap();
        assert!(bytes.starts_with(ZIP_MAGIC));
    }

    #[test]
    fn test_generate_pptx_ignores_empty_logo() {
        let with_empty = generate_pptx_impl("Roadmap", None, Some(Vec::new())).unwrap();
        let without = generate_pptx_impl("Roadmap", None, None).unwrap();
        assert_eq!(with_empty.len(), without.len());
    }

    #[test]
    fn test_generate_docx() {
        let bytes = generate_docx_impl("# Title\nBody").unwrap();
        assert!(bytes.starts_with(ZIP_MAGIC));
    }

    #[test]
    fn test_preview_deck() {
        let preview = preview_deck_impl("# Agenda\n* Intro\n* Demo", Some("Kickoff"));

        assert_eq!(preview.slide_count, 2);
        assert_eq!(preview.slide_text[0][0], "Kickoff");
        assert_eq!(preview.slide_text[1], vec!["Agenda", "• Intro", "• Demo"]);
    }
}
