//! Line classification.
//!
//! Assigns a [`LineKind`] to a trimmed line. Rules are checked in a fixed
//! order and the first match wins: separator, noise, heading, bullet,
//! paragraph.

use crate::types::{ClassifiedLine, LineKind};
use regex::Regex;
use std::sync::LazyLock;

/// A line made only of three or more `*` or three or more `-`.
static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\*{3,}|-{3,})$").unwrap());

/// One to five `#` followed by a space.
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,5}) (.*)$").unwrap());

/// `*` or `-` marker followed by whitespace.
static BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*\-]\s+(.*)$").unwrap());

/// Filler prefixes suppressed from slides.
pub const SLIDE_NOISE_PREFIXES: &[&str] = &[
    "of course!",
    "sure!",
    "hi",
    "hello",
    "here is",
    "ofcourse",
    "of course",
    "sure",
];

/// Filler prefixes blanked out of documents.
pub const DOCUMENT_NOISE_PREFIXES: &[&str] = &["of course!", "sure!"];

/// Classifier with a configurable set of noise prefixes.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    noise_prefixes: Vec<String>,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::with_noise_prefixes(SLIDE_NOISE_PREFIXES)
    }
}

impl LineClassifier {
    /// Classifier using the full slide noise list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier using the reduced document noise list.
    pub fn for_documents() -> Self {
        Self::with_noise_prefixes(DOCUMENT_NOISE_PREFIXES)
    }

    /// Classifier with custom noise prefixes. Prefixes match case-insensitively.
    pub fn with_noise_prefixes<S: AsRef<str>>(prefixes: &[S]) -> Self {
        Self {
            noise_prefixes: prefixes
                .iter()
                .map(|p| p.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Classify a line. Surrounding whitespace is ignored.
    pub fn classify(&self, line: &str) -> ClassifiedLine {
        let line = line.trim();

        if SEPARATOR_REGEX.is_match(line) {
            return ClassifiedLine::new(LineKind::Separator, "");
        }

        if self.is_noise(line) {
            return ClassifiedLine::new(LineKind::Noise, line);
        }

        if let Some(caps) = HEADING_REGEX.captures(line) {
            let level = caps[1].len() as u8;
            return ClassifiedLine::new(LineKind::Heading(level), caps[2].trim_start());
        }

        if let Some(caps) = BULLET_REGEX.captures(line) {
            return ClassifiedLine::new(LineKind::Bullet, &caps[1]);
        }

        ClassifiedLine::new(LineKind::Paragraph, line)
    }

    /// Whether the line starts with one of the noise prefixes.
    pub fn is_noise(&self, line: &str) -> bool {
        let lower = line.trim().to_lowercase();
        self.noise_prefixes.iter().any(|p| lower.starts_with(p.as_str()))
    }
}
