//! Slide deck generation.
//!
//! Raw text is segmented into sections, chunked into slide-sized batches and
//! laid out one slide per chunk, after a cover slide.

use crate::config::LayoutConfig;
use crate::layout::SlideLayoutBuilder;
use crate::title::build_title_slide;
use crate::types::SlideDeck;
use crate::wrap::chunk_content;

/// Builder for slide decks.
#[derive(Debug, Clone, Default)]
pub struct SlideDeckBuilder {
    config: LayoutConfig,
}

impl SlideDeckBuilder {
    /// Create a builder with the default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom layout configuration.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.config = self.config.with_wrap_width(width);
        self
    }

    /// Set the number of logical lines per slide (at least 1).
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.config = self.config.with_chunk_size(size);
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Split content into the chunks that become content slides.
    pub fn chunks(&self, content: &str) -> Vec<String> {
        chunk_content(content, self.config.wrap_width, self.config.chunk_size)
    }

    /// Build a deck from generated text and an optional title.
    ///
    /// Never fails: empty content yields a deck holding only the cover slide.
    ///
    /// # Example
    /// ```
    /// use deck_core::SlideDeckBuilder;
    ///
    /// let deck = SlideDeckBuilder::new().build("# Agenda\n* Intro\n* Demo", Some("Kickoff"));
    /// assert_eq!(deck.len(), 2);
    /// assert_eq!(deck.slides[1].text_lines(), vec!["Agenda", "• Intro", "• Demo"]);
    /// ```
    pub fn build(&self, content: &str, title: Option<&str>) -> SlideDeck {
        let mut deck = SlideDeck::new();
        deck.push(build_title_slide(title, &self.config));

        let chunks = self.chunks(content);
        log::debug!("Grouped content into {} chunks", chunks.len());

        let layout = SlideLayoutBuilder::new(&self.config);
        for (idx, chunk) in chunks.iter().enumerate() {
            if let Some(slide) = layout.build_slide(chunk, idx == 0) {
                deck.push(slide);
            }
        }

        log::debug!("Built deck with {} slides", deck.len());
        deck
    }
}
