//! Office Open XML packaging shared by the PPTX and DOCX encoders.
//!
//! Both formats are ZIP archives of XML parts tied together by
//! relationship parts and a content-types manifest.

pub mod constants;
pub mod package;
pub mod rels;
pub mod xml;

pub use constants::emu;
pub use package::PackageWriter;
pub use rels::Relationships;
pub use xml::XmlWriter;
