//! Relationship parts (`*.rels`).

use crate::constants::ns;
use crate::xml::XmlWriter;
use deck_core::Result;

#[derive(Debug, Clone)]
struct Relationship {
    id: String,
    rel_type: String,
    target: String,
}

/// Ordered relationships of one part, with sequential `rIdN` ids.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    items: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its id.
    pub fn add(&mut self, rel_type: &str, target: &str) -> String {
        let id = format!("rId{}", self.items.len() + 1);
        self.items.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
        });
        id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize as a relationships part.
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let mut xml = XmlWriter::new()?;
        xml.start("Relationships", &[("xmlns", ns::PACKAGE_RELATIONSHIPS)])?;
        for rel in &self.items {
            xml.empty(
                "Relationship",
                &[
                    ("Id", rel.id.as_str()),
                    ("Type", rel.rel_type.as_str()),
                    ("Target", rel.target.as_str()),
                ],
            )?;
        }
        xml.end("Relationships")?;
        Ok(xml.into_bytes())
    }
}

/// Name of the relationships part for a part name.
///
/// `ppt/slides/slide1.xml` → `ppt/slides/_rels/slide1.xml.rels`, and the
/// package root (empty name) → `_rels/.rels`.
pub fn rels_part_name(part_name: &str) -> String {
    match part_name.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part_name),
    }
}
