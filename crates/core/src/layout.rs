//! Slide layout: turns one chunk of wrapped text into positioned text blocks.

use crate::classify::LineClassifier;
use crate::config::LayoutConfig;
use crate::inline::parse_runs;
use crate::types::{ClassifiedLine, LineKind, Slide, TextBlock, TextRun};
use crate::wrap::wrap_lines;

/// Bullet glyph prefixed to the first wrapped line of a bullet block.
const BULLET_GLYPH: &str = "•";

/// Lays out chunks as slides.
#[derive(Debug, Clone)]
pub struct SlideLayoutBuilder<'a> {
    config: &'a LayoutConfig,
    classifier: LineClassifier,
}

impl<'a> SlideLayoutBuilder<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self {
            config,
            classifier: LineClassifier::new(),
        }
    }

    /// Split a chunk into its logical lines.
    fn logical_lines(&self, chunk: &str) -> Vec<String> {
        if self.config.rewrap_chunks {
            wrap_lines(chunk, self.config.wrap_width)
        } else {
            chunk
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect()
        }
    }

    /// Mark lines hidden by noise suppression.
    ///
    /// Only the first chunk is filtered. A noise line is hidden together with
    /// the line right after it, unless that line is a heading or a bullet.
    /// Lines already hidden are not themselves checked for noise.
    fn suppressed_lines(lines: &[ClassifiedLine], is_first_chunk: bool) -> Vec<bool> {
        let mut suppressed = vec![false; lines.len()];
        if !is_first_chunk {
            return suppressed;
        }

        for idx in 0..lines.len() {
            if suppressed[idx] || lines[idx].kind != LineKind::Noise {
                continue;
            }
            suppressed[idx] = true;
            if let Some(next) = lines.get(idx + 1) {
                if !(next.kind.is_heading() || next.kind == LineKind::Bullet) {
                    suppressed[idx + 1] = true;
                }
            }
        }

        suppressed
    }

    /// Lay out one chunk into text blocks.
    pub fn layout(&self, chunk: &str, is_first_chunk: bool) -> Vec<TextBlock> {
        let config = self.config;
        let raw_lines = self.logical_lines(chunk);
        let classified: Vec<ClassifiedLine> = raw_lines
            .iter()
            .map(|l| self.classifier.classify(l))
            .collect();
        let suppressed = Self::suppressed_lines(&classified, is_first_chunk);

        let mut blocks = Vec::new();
        let mut y = config.start_y;

        for ((raw, line), hidden) in raw_lines.iter().zip(&classified).zip(suppressed) {
            let trimmed = raw.trim();
            if hidden {
                log::debug!("Suppressed filler line: {}", trimmed);
                continue;
            }
            if trimmed.is_empty() || trimmed.starts_with("```") || line.kind == LineKind::Separator
            {
                continue;
            }

            let wrapped = wrap_lines(&line.content, config.wrap_width);
            if wrapped.is_empty() {
                continue;
            }

            let is_bullet = line.kind == LineKind::Bullet;
            let mut runs = Vec::new();
            for (idx, text) in wrapped.iter().enumerate() {
                if idx > 0 {
                    runs.push(TextRun::line_break());
                }
                if is_bullet && idx == 0 {
                    runs.extend(parse_runs(&format!("{} {}", BULLET_GLYPH, text)));
                } else {
                    runs.extend(parse_runs(text));
                }
            }

            let (font_size, bold) = line.kind.font_style();
            let height = wrapped.len() as f64 * config.line_height;
            blocks.push(TextBlock {
                runs,
                x: config.margin_x,
                y,
                width: config.block_width,
                height,
                font_size,
                bold,
                color: config.text_color.clone(),
                font_face: None,
                line_spacing: Some(config.line_spacing),
            });
            y += height;
        }

        blocks
    }

    /// Build a slide from one chunk, or `None` when nothing survives layout.
    pub fn build_slide(&self, chunk: &str, is_first_chunk: bool) -> Option<Slide> {
        let blocks = self.layout(chunk, is_first_chunk);
        if blocks.is_empty() {
            log::debug!("Skipping chunk with no renderable lines");
            return None;
        }

        Some(Slide {
            index: 0,
            blocks,
            logo: self.config.logo.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(blocks: &[TextBlock]) -> Vec<String> {
        blocks.iter().map(TextBlock::text).collect()
    }

    #[test]
    fn test_greeting_suppressed_heading_kept() {
        let config = LayoutConfig::default();
        let builder = SlideLayoutBuilder::new(&config);
        let blocks = builder.layout("Sure! Here's your summary.\n## Topic\nDetail line.", true);

        assert_eq!(texts(&blocks), vec!["Topic", "Detail line."]);
        assert_eq!(blocks[0].font_size, 24.0);
        assert!(blocks[0].bold);
        assert_eq!(blocks[1].font_size, 18.0);
        assert!(!blocks[1].bold);
    }

    #[test]
    fn test_greeting_blanks_following_paragraph() {
        let config = LayoutConfig::default();
        let builder = SlideLayoutBuilder::new(&config);
        let blocks = builder.layout(
            "Of course! Here is a summary.\nThis video covers three topics.\nFirst topic.",
            true,
        );
        assert_eq!(texts(&blocks), vec!["First topic."]);
    }

    #[test]
    fn test_greeting_keeps_following_bullet() {
        let config = LayoutConfig::default();
        let builder = SlideLayoutBuilder::new(&config);
        let blocks = builder.layout("Hello!\n* Point one", true);
        assert_eq!(texts(&blocks), vec!["• Point one"]);
    }

    #[test]
    fn test_blanked_line_is_not_checked_for_noise() {
        let config = LayoutConfig::default();
        let builder = SlideLayoutBuilder::new(&config);
        // "Hello again" is hidden as the follower of "Sure!", so it does not
        // hide "Body text" in turn.
        let blocks = builder.layout("Sure!\nHello again\nBody text", true);
        assert_eq!(texts(&blocks), vec!["Body text"]);
    }

    #[test]
    fn test_noise_rendered_outside_first_chunk() {
        let config = LayoutConfig::default();
        let builder = SlideLayoutBuilder::new(&config);
        let blocks = builder.layout("Sure! Here's more.\nDetail line.", false);
        assert_eq!(texts(&blocks), vec!["Sure! Here's more.", "Detail line."]);
    }

    #[test]
    fn test_skips_separators_and_code_fences() {
        let config = LayoutConfig::default();
        let builder = SlideLayoutBuilder::new(&config);
        let blocks = builder.layout("```markdown\nKept\n---\n```", false);
        assert_eq!(texts(&blocks), vec!["Kept"]);
    }

    #[test]
    fn test_vertical_positions_accumulate() {
        let config = LayoutConfig::default();
        let builder = SlideLayoutBuilder::new(&config);
        let long = "word ".repeat(30);
        let chunk = format!("# Title\n{}\nLast", long.trim());
        let blocks = builder.layout(&chunk, false);

        // The long paragraph is re-wrapped at 80 into two logical lines,
        // each laid out as its own block.
        assert_eq!(blocks.len(), 4);
        assert!((blocks[0].y - 0.5).abs() < 1e-9);
        assert!((blocks[1].y - 1.1).abs() < 1e-9);
        assert!((blocks[2].y - 1.7).abs() < 1e-9);
        assert!((blocks[3].y - 2.3).abs() < 1e-9);
        assert!(blocks.iter().all(|b| (b.x - 0.5).abs() < 1e-9 && (b.width - 8.5).abs() < 1e-9));
        assert!(blocks.iter().all(|b| b.color == "363636"));
    }

    #[test]
    fn test_line_of_full_width_becomes_two_blocks() {
        let config = LayoutConfig::default();
        let builder = SlideLayoutBuilder::new(&config);
        let line = format!("{} {}", "x".repeat(39), "y".repeat(40));
        let blocks = builder.layout(&line, false);

        assert_eq!(texts(&blocks), vec!["x".repeat(39), "y".repeat(40)]);
        assert!((blocks[1].y - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_bullet_block_wraps_with_glyph_on_first_line() {
        let config = LayoutConfig::default().with_wrap_width(20).with_rewrap_chunks(false);
        let builder = SlideLayoutBuilder::new(&config);
        let blocks = builder.layout("- alpha beta gamma delta epsilon", false);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text(), "• alpha beta gamma\ndelta epsilon");
        assert_eq!(blocks[0].line_count(), 2);
        assert!((blocks[0].height - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_bold_runs_inside_block() {
        let config = LayoutConfig::default();
        let builder = SlideLayoutBuilder::new(&config);
        let blocks = builder.layout("* **Speed**: fast", false);
        assert_eq!(
            blocks[0].runs,
            vec![
                TextRun::plain("• "),
                TextRun::bold("Speed"),
                TextRun::plain(": fast"),
            ]
        );
    }

    #[test]
    fn test_empty_chunk_builds_no_slide() {
        let config = LayoutConfig::default();
        let builder = SlideLayoutBuilder::new(&config);
        assert!(builder.build_slide("Sure!\nfiller", true).is_none());
        assert!(builder.build_slide("***", false).is_none());
        assert!(builder.build_slide("Content", false).is_some());
    }

    #[test]
    fn test_slide_carries_logo() {
        let config = LayoutConfig::default();
        let builder = SlideLayoutBuilder::new(&config);
        let slide = builder.build_slide("Content", false).unwrap();
        assert_eq!(slide.logo, config.logo);
    }
}
