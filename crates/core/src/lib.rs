//! Core document model and text pipeline for turning generated
//! pseudo-markdown into slide decks and word-processor documents.

pub mod classify;
pub mod config;
pub mod deck;
pub mod document;
pub mod encode;
pub mod error;
pub mod inline;
pub mod layout;
pub mod title;
pub mod types;
pub mod wrap;

pub use classify::LineClassifier;
pub use config::{LayoutConfig, TitleSlideConfig};
pub use deck::SlideDeckBuilder;
pub use document::DocumentBuilder;
pub use encode::{Encoder, JsonEncoder};
pub use error::{Error, Result};
pub use inline::parse_runs;
pub use layout::SlideLayoutBuilder;
pub use title::{build_title_slide, split_title};
pub use types::{
    ClassifiedLine, Document, DocumentElement, LineKind, LogoAnchor, OutputFormat, Slide,
    SlideDeck, TextBlock, TextRun,
};
pub use wrap::{chunk_content, group_chunks, split_sections, wrap_lines};
