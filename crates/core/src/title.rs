//! Cover slide construction.

use crate::config::{LayoutConfig, TitleSlideConfig};
use crate::types::{Slide, TextBlock, TextRun};

/// Break a long title over two lines near its middle.
///
/// Titles of at most `threshold` characters are returned unchanged. Longer
/// titles are broken at the last whitespace at or before the midpoint; if
/// that whitespace is missing or within 5 characters of the start, the
/// first whitespace after the midpoint is used instead. The whitespace
/// character is replaced by the line break, so no word is ever split.
pub fn split_title(title: &str, threshold: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= threshold {
        return title.to_string();
    }

    let middle = chars.len() / 2;
    let split = match chars[..=middle].iter().rposition(|c| c.is_whitespace()) {
        Some(idx) if idx >= 5 => Some(idx),
        _ => chars[middle..]
            .iter()
            .position(|c| c.is_whitespace())
            .map(|idx| idx + middle),
    };

    match split {
        Some(idx) => {
            let head: String = chars[..idx].iter().collect();
            let tail: String = chars[idx + 1..].iter().collect();
            format!("{}\n{}", head, tail)
        }
        None => title.to_string(),
    }
}

/// Plain runs for multi-line text, with break runs between lines.
fn plain_lines(text: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            runs.push(TextRun::line_break());
        }
        runs.push(TextRun::plain(line));
    }
    runs
}

/// Positioning and style of one cover element.
struct CoverText<'a> {
    text: &'a str,
    y: f64,
    height: f64,
    font_size: f64,
    bold: bool,
    color: &'a str,
}

impl CoverText<'_> {
    fn into_block(self, style: &TitleSlideConfig) -> TextBlock {
        TextBlock {
            runs: plain_lines(self.text),
            x: 0.7,
            y: self.y,
            width: 8.0,
            height: self.height,
            font_size: self.font_size,
            bold: self.bold,
            color: self.color.to_string(),
            font_face: Some(style.font_face.clone()),
            line_spacing: None,
        }
    }
}

/// Build the cover slide. It is always slide 0 and always has blocks.
pub fn build_title_slide(title: Option<&str>, config: &LayoutConfig) -> Slide {
    let style = &config.title_slide;
    let title = title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(style.placeholder.as_str());
    let title = split_title(title, style.split_threshold);

    let elements = [
        CoverText {
            text: &title,
            y: 0.0,
            height: 2.0,
            font_size: 42.0,
            bold: true,
            color: "000000",
        },
        CoverText {
            text: &style.subtitle,
            y: 1.9,
            height: 0.4,
            font_size: 18.0,
            bold: false,
            color: "000000",
        },
        CoverText {
            text: &style.year_line,
            y: 2.2,
            height: 0.4,
            font_size: 18.0,
            bold: true,
            color: "000000",
        },
        CoverText {
            text: &style.attribution,
            y: 2.5,
            height: 0.4,
            font_size: 14.0,
            bold: false,
            color: "444444",
        },
        CoverText {
            text: &style.copyright,
            y: 4.5,
            height: 1.0,
            font_size: 8.0,
            bold: false,
            color: "555555",
        },
    ];

    Slide {
        index: 0,
        blocks: elements.into_iter().map(|e| e.into_block(style)).collect(),
        logo: config.logo.clone(),
    }
}
