//! DOCX (Office Open XML) encoder for generated documents.
//!
//! Headings map to the built-in `Heading1`..`Heading5` paragraph styles and
//! bullets to a single-level bullet list, so the result stays editable in Word.

pub mod styles;
pub mod writer;

pub use writer::DocxWriter;
