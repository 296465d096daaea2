//! Flowing document generation.
//!
//! The document path has no pagination: each non-blank input line becomes
//! exactly one element, in input order.

use crate::classify::LineClassifier;
use crate::inline::parse_runs;
use crate::types::{Document, DocumentElement, LineKind};

/// Builder for word-processor documents.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    classifier: LineClassifier,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self {
            classifier: LineClassifier::for_documents(),
        }
    }
}

impl DocumentBuilder {
    /// Create a builder using the document noise rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different classifier, for example one with the full slide noise list.
    pub fn with_classifier(mut self, classifier: LineClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Convert one non-blank line into an element.
    pub fn element(&self, line: &str) -> DocumentElement {
        let line = self.classifier.classify(line);
        match line.kind {
            LineKind::Separator | LineKind::Noise => DocumentElement::Blank,
            LineKind::Heading(level) => DocumentElement::Heading {
                level,
                runs: parse_runs(&line.content),
            },
            LineKind::Bullet => DocumentElement::Bullet(parse_runs(&line.content)),
            LineKind::Paragraph => DocumentElement::Paragraph(parse_runs(&line.content)),
        }
    }

    /// Build a document from generated text.
    pub fn build(&self, content: &str) -> Document {
        let mut document = Document::new();
        for line in content.split('\n').filter(|l| !l.trim().is_empty()) {
            document.push(self.element(line));
        }
        log::debug!("Built document with {} elements", document.len());
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TextRun;

    #[test]
    fn test_basic_markdown_document() {
        let document = DocumentBuilder::new()
            .build("# Hello World\n\nThis is a paragraph.\n\n* Point one\n* Point two");

        assert_eq!(
            document.elements,
            vec![
                DocumentElement::Heading {
                    level: 1,
                    runs: vec![TextRun::plain("Hello World")],
                },
                DocumentElement::Paragraph(vec![TextRun::plain("This is a paragraph.")]),
                DocumentElement::Bullet(vec![TextRun::plain("Point one")]),
                DocumentElement::Bullet(vec![TextRun::plain("Point two")]),
            ]
        );
    }

    #[test]
    fn test_empty_content_has_no_elements() {
        assert!(DocumentBuilder::new().build("").is_empty());
        assert!(DocumentBuilder::new().build("\n  \n\t\n").is_empty());
    }

    #[test]
    fn test_separator_and_filler_become_blank() {
        let document = DocumentBuilder::new().build("Sure! Here it is.\nIntro\n---\nOutro");
        assert_eq!(document.len(), 4);
        assert_eq!(document.elements[0], DocumentElement::Blank);
        assert_eq!(document.elements[2], DocumentElement::Blank);
        assert_eq!(document.elements[3].text(), "Outro");
    }

    #[test]
    fn test_greeting_is_kept_in_documents() {
        let document = DocumentBuilder::new().build("Hello team,\nWelcome.");
        assert_eq!(document.elements[0].text(), "Hello team,");
    }

    #[test]
    fn test_heading_levels_and_bold() {
        let document = DocumentBuilder::new().build("### **Key** results\n- dash bullet");
        assert_eq!(
            document.elements[0],
            DocumentElement::Heading {
                level: 3,
                runs: vec![TextRun::bold("Key"), TextRun::plain(" results")],
            }
        );
        assert_eq!(
            document.elements[1],
            DocumentElement::Bullet(vec![TextRun::plain("dash bullet")])
        );
    }

    #[test]
    fn test_lines_are_not_wrapped() {
        let long = "word ".repeat(50);
        let document = DocumentBuilder::new().build(long.trim());
        assert_eq!(document.len(), 1);
        assert_eq!(document.elements[0].text(), long.trim());
    }

    #[test]
    fn test_full_noise_list_classifier() {
        let document = DocumentBuilder::new()
            .with_classifier(LineClassifier::new())
            .build("Hello team,\nWelcome.");
        assert_eq!(document.elements[0], DocumentElement::Blank);
    }
}
