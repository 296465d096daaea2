//! Domain types for the slide deck and document models.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A span of text sharing one emphasis style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text of the run, without any `**` markers.
    pub text: String,

    /// Whether the run is rendered bold.
    pub bold: bool,
}

impl TextRun {
    /// Create a plain (non-bold) run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }

    /// Create a run that marks a line break inside a text block.
    pub fn line_break() -> Self {
        Self::plain("\n")
    }

    /// Whether this run is a line break marker.
    pub fn is_line_break(&self) -> bool {
        self.text == "\n"
    }
}

/// Semantic kind of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Markdown heading, level 1 through 5.
    Heading(u8),
    /// `*` or `-` list item.
    Bullet,
    /// Run of three or more `*` or `-`.
    Separator,
    /// Conversational filler emitted by the text generator.
    Noise,
    /// Anything else.
    Paragraph,
}

impl LineKind {
    /// Font size in points and weight for text of this kind.
    pub fn font_style(&self) -> (f64, bool) {
        match self {
            LineKind::Heading(1) => (28.0, true),
            LineKind::Heading(2) => (24.0, true),
            LineKind::Heading(3) => (20.0, true),
            LineKind::Heading(4) => (19.0, true),
            LineKind::Heading(_) => (18.0, true),
            _ => (18.0, false),
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, LineKind::Heading(_))
    }
}

/// A line with its classification and marker-stripped content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    pub content: String,
}

impl ClassifiedLine {
    pub fn new(kind: LineKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}

/// A positioned, styled block of text on a slide.
///
/// Coordinates and sizes are in inches from the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Runs in reading order. Break runs separate wrapped lines.
    pub runs: Vec<TextRun>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Font size in points.
    pub font_size: f64,
    /// Block-level weight; individual runs may add bold on top.
    pub bold: bool,
    /// Hex RGB color without `#`.
    pub color: String,
    pub font_face: Option<String>,
    /// Line spacing multiplier.
    pub line_spacing: Option<f64>,
}

impl TextBlock {
    /// Plain text of the block with break runs rendered as newlines.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Number of visual lines in the block.
    pub fn line_count(&self) -> usize {
        1 + self.runs.iter().filter(|r| r.is_line_break()).count()
    }
}

/// Fixed placement of the branding image, in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoAnchor {
    /// Name of the image, used as the media file name when encoding.
    pub path: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for LogoAnchor {
    fn default() -> Self {
        Self {
            path: "pbdlogo.png".to_string(),
            x: 8.25,
            y: 0.2,
            width: 1.5,
            height: 0.5,
        }
    }
}

/// A single rendered slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// 0-based position in the deck. The title slide is 0.
    pub index: usize,

    /// Text blocks in the order they were laid out.
    pub blocks: Vec<TextBlock>,

    pub logo: LogoAnchor,
}

impl Slide {
    /// Plain text of every block, one block per line.
    pub fn text_lines(&self) -> Vec<String> {
        self.blocks.iter().map(TextBlock::text).collect()
    }
}

/// An ordered sequence of slides. Slide 0 is always the title slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideDeck {
    pub slides: Vec<Slide>,
}

impl SlideDeck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slide, assigning it the next index.
    pub fn push(&mut self, mut slide: Slide) {
        slide.index = self.slides.len();
        self.slides.push(slide);
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slides after the title slide.
    pub fn content_slides(&self) -> &[Slide] {
        self.slides.get(1..).unwrap_or(&[])
    }
}

/// One element of a flowing word-processor document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentElement {
    Heading { level: u8, runs: Vec<TextRun> },
    Paragraph(Vec<TextRun>),
    Bullet(Vec<TextRun>),
    /// Placeholder for a dropped separator or filler line.
    Blank,
}

impl DocumentElement {
    /// Runs of this element; empty for `Blank`.
    pub fn runs(&self) -> &[TextRun] {
        match self {
            DocumentElement::Heading { runs, .. }
            | DocumentElement::Paragraph(runs)
            | DocumentElement::Bullet(runs) => runs,
            DocumentElement::Blank => &[],
        }
    }

    /// Plain text of the element.
    pub fn text(&self) -> String {
        self.runs().iter().map(|r| r.text.as_str()).collect()
    }
}

/// A flowing document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub elements: Vec<DocumentElement>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: DocumentElement) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Output container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// PowerPoint presentation (Office Open XML).
    Pptx,
    /// Word document (Office Open XML).
    Docx,
    /// Serialized in-memory model, for inspection.
    Json,
}

impl OutputFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pptx" => Some(Self::Pptx),
            "docx" => Some(Self::Docx),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pptx => "pptx",
            Self::Docx => "docx",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim_start_matches('.'))
            .ok_or_else(|| Error::UnsupportedFormat(s.to_string()))
    }
}
