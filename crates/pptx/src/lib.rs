//! PPTX (Office Open XML) encoder for generated slide decks.
//!
//! Writes a 16:9 presentation with one master, one blank layout and one
//! theme. Every [`deck_core::TextBlock`] becomes a text box and every
//! break run starts a new paragraph inside it.

pub mod slide;
pub mod template;
pub mod writer;

pub use writer::PptxWriter;
