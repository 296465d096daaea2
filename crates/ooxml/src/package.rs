//! In-memory OPC package writer.
//!
//! Collects parts with their content types and writes them, preceded by
//! `[Content_Types].xml`, into a deflated ZIP archive held in memory.

use crate::constants::{content_type as ct, ns};
use crate::rels::{rels_part_name, Relationships};
use crate::xml::XmlWriter;
use deck_core::{Error, Result};
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Debug)]
struct Part {
    name: String,
    data: Vec<u8>,
}

/// Builder for an OPC package (the ZIP container behind `.pptx`/`.docx`).
#[derive(Debug)]
pub struct PackageWriter {
    parts: Vec<Part>,
    defaults: BTreeMap<String, String>,
    overrides: Vec<(String, String)>,
}

impl Default for PackageWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageWriter {
    /// Create an empty package with the standard `rels` and `xml` defaults.
    pub fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());
        Self {
            parts: Vec::new(),
            defaults,
            overrides: Vec::new(),
        }
    }

    /// Register a content type for every part with this extension.
    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults
            .insert(extension.to_lowercase(), content_type.to_string());
    }

    /// Add a part. Parts without an override use their extension's default.
    ///
    /// `name` is relative to the package root, without a leading slash.
    pub fn add_part(&mut self, name: &str, content_type: Option<&str>, data: Vec<u8>) {
        if let Some(content_type) = content_type {
            self.overrides
                .push((format!("/{}", name), content_type.to_string()));
        }
        self.parts.push(Part {
            name: name.to_string(),
            data,
        });
    }

    /// Add the relationships part belonging to `part_name` (empty for the package).
    pub fn add_rels(&mut self, part_name: &str, rels: &Relationships) -> Result<()> {
        let data = rels.to_xml()?;
        self.add_part(&rels_part_name(part_name), None, data);
        Ok(())
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Serialize `[Content_Types].xml`.
    fn content_types_xml(&self) -> Result<Vec<u8>> {
        let mut xml = XmlWriter::new()?;
        xml.start("Types", &[("xmlns", ns::CONTENT_TYPES)])?;
        for (ext, content_type) in &self.defaults {
            xml.empty(
                "Default",
                &[("Extension", ext.as_str()), ("ContentType", content_type.as_str())],
            )?;
        }
        for (part_name, content_type) in &self.overrides {
            xml.empty(
                "Override",
                &[
                    ("PartName", part_name.as_str()),
                    ("ContentType", content_type.as_str()),
                ],
            )?;
        }
        xml.end("Types")?;
        Ok(xml.into_bytes())
    }

    /// Write the package and return the archive bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let content_types = self.content_types_xml()?;
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        write_entry(&mut zip, "[Content_Types].xml", &content_types, options)?;
        for part in &self.parts {
            write_entry(&mut zip, &part.name, &part.data, options)?;
        }

        let cursor = zip
            .finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))?;
        log::debug!("Wrote package with {} parts", self.parts.len() + 1);
        Ok(cursor.into_inner())
    }
}

fn write_entry<W: Write + std::io::Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    data: &[u8],
    options: FileOptions,
) -> Result<()> {
    zip.start_file(name, options)
        .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", name, e)))?;
    zip.write_all(data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn test_package_contains_content_types_and_parts() {
        let mut package = PackageWriter::new();
        package.add_default("png", ct::PNG);
        package.add_part("word/document.xml", Some(ct::WML_DOCUMENT), b"<doc/>".to_vec());
        package.add_part("media/logo.png", None, vec![0x89, b'P', b'N', b'G']);
        assert_eq!(package.part_count(), 2);

        let bytes = package.finish().unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 3);

        let mut content_types = String::new();
        archive
            .by_name("[Content_Types].xml")
            .unwrap()
            .read_to_string(&mut content_types)
            .unwrap();
        assert!(content_types.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(content_types.contains(r#"PartName="/word/document.xml""#));
        assert!(!content_types.contains("/media/logo.png"));

        let mut doc = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut doc)
            .unwrap();
        assert_eq!(doc, "<doc/>");
    }

    #[test]
    fn test_add_rels_uses_rels_part_name() {
        let mut package = PackageWriter::new();
        let mut rels = Relationships::new();
        rels.add("type", "target.xml");
        package.add_rels("", &rels).unwrap();

        let bytes = package.finish().unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.file_names().any(|n| n == "_rels/.rels"));
    }
}
