//! Layout configuration for slide generation.
//!
//! Defaults reproduce the fixed layout of the generated decks. A JSON file
//! can override any subset of fields.

use crate::error::{Error, Result};
use crate::types::LogoAnchor;
use crate::wrap::{DEFAULT_CHUNK_SIZE, DEFAULT_WRAP_WIDTH};
use serde::{Deserialize, Serialize};

/// Static texts and styling of the cover slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleSlideConfig {
    /// Title used when none is supplied.
    pub placeholder: String,
    /// Titles longer than this many characters are split over two lines.
    pub split_threshold: usize,
    pub subtitle: String,
    pub year_line: String,
    pub attribution: String,
    pub copyright: String,
    pub font_face: String,
}

impl Default for TitleSlideConfig {
    fn default() -> Self {
        Self {
            placeholder: "{Title}".to_string(),
            split_threshold: 20,
            subtitle: "Introduction Proposal".to_string(),
            year_line: "Year of 2025".to_string(),
            attribution: "from Pasti Bisa Digital".to_string(),
            copyright: "© 2025 Pasti Bisa Digital. All rights reserved.\n\
                        This document and its contents are the property of Pasti Bisa Digital \
                        and are protected by copyright laws. Unauthorized reproduction, \
                        distribution, or modification of this document, in whole or in part, \
                        is prohibited without prior written consent from Pasti Bisa Digital."
                .to_string(),
            font_face: "Arial".to_string(),
        }
    }
}

/// Layout parameters for the slide path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Maximum characters per wrapped line.
    pub wrap_width: usize,
    /// Logical lines per slide.
    pub chunk_size: usize,
    /// Wrap chunk content again before layout.
    pub rewrap_chunks: bool,
    /// Vertical position of the first block, in inches.
    pub start_y: f64,
    /// Vertical advance per wrapped line, in inches.
    pub line_height: f64,
    pub margin_x: f64,
    pub block_width: f64,
    pub text_color: String,
    pub line_spacing: f64,
    pub logo: LogoAnchor,
    pub title_slide: TitleSlideConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            chunk_size: DEFAULT_CHUNK_SIZE,
            rewrap_chunks: true,
            start_y: 0.5,
            line_height: 0.6,
            margin_x: 0.5,
            block_width: 8.5,
            text_color: "363636".to_string(),
            line_spacing: 1.2,
            logo: LogoAnchor::default(),
            title_slide: TitleSlideConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values can produce a layout.
    pub fn validate(&self) -> Result<()> {
        if self.wrap_width == 0 {
            return Err(Error::ConfigError("wrap_width must be at least 1".into()));
        }
        if self.chunk_size == 0 {
            return Err(Error::ConfigError("chunk_size must be at least 1".into()));
        }
        if self.line_height.is_nan() || self.line_height <= 0.0 {
            return Err(Error::ConfigError("line_height must be positive".into()));
        }
        if self.text_color.len() != 6 || !self.text_color.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::ConfigError(format!(
                "text_color must be six hex digits, got '{}'",
                self.text_color
            )));
        }
        Ok(())
    }

    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width.max(1);
        self
    }

    /// Set the number of logical lines per slide (at least 1).
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.max(1);
        self
    }

    pub fn with_rewrap_chunks(mut self, rewrap: bool) -> Self {
        self.rewrap_chunks = rewrap;
        self
    }

    pub fn with_title_slide(mut self, title_slide: TitleSlideConfig) -> Self {
        self.title_slide = title_slide;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.wrap_width, 80);
        assert_eq!(config.chunk_size, 9);
        assert!(config.rewrap_chunks);
        assert_eq!(config.text_color, "363636");
        assert_eq!(config.title_slide.placeholder, "{Title}");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = LayoutConfig::from_json(r#"{"wrap_width": 75, "rewrap_chunks": false}"#)
            .unwrap();
        assert_eq!(config.wrap_width, 75);
        assert!(!config.rewrap_chunks);
        assert_eq!(config.chunk_size, 9);
        assert_eq!(config.logo, LogoAnchor::default());
    }

    #[test]
    fn test_from_json_nested_title_slide() {
        let config =
            LayoutConfig::from_json(r#"{"title_slide": {"year_line": "Year of 2026"}}"#).unwrap();
        assert_eq!(config.title_slide.year_line, "Year of 2026");
        assert_eq!(config.title_slide.subtitle, "Introduction Proposal");
    }

    #[test]
    fn test_from_json_rejects_zero_chunk_size() {
        let err = LayoutConfig::from_json(r#"{"chunk_size": 0}"#).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_from_json_rejects_bad_color() {
        assert!(LayoutConfig::from_json(r##"{"text_color": "#363636"}"##).is_err());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(LayoutConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_builder_clamps() {
        let config = LayoutConfig::new().with_chunk_size(0).with_wrap_width(0);
        assert_eq!(config.chunk_size, 1);
        assert_eq!(config.wrap_width, 1);
    }
}
