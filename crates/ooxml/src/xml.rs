//! Thin element writer over `quick_xml::Writer`.
//!
//! Text and attribute values are escaped by quick-xml. Characters XML 1.0
//! cannot represent are dropped first.

use deck_core::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;

/// Attribute list as `(name, value)` pairs.
pub type Attrs<'a> = [(&'a str, &'a str)];

/// Whether `c` matches the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || c >= '\u{10000}'
}

/// Strip characters that would make the part unreadable.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return Cow::Borrowed(text);
    }
    log::debug!("Dropping characters not allowed in XML");
    Cow::Owned(text.chars().filter(|c| is_xml_char(*c)).collect())
}

fn element<'a>(name: &'a str, attrs: &Attrs<'_>) -> BytesStart<'a> {
    let mut elem = BytesStart::new(name);
    for (key, value) in attrs {
        elem.push_attribute((*key, &*sanitize(value)));
    }
    elem
}

/// Streaming XML writer for one package part.
pub struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl XmlWriter {
    /// Start a standalone UTF-8 document.
    pub fn new() -> Result<Self> {
        let mut writer = Self {
            inner: Writer::new(Vec::with_capacity(4096)),
        };
        writer.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(writer)
    }

    fn write(&mut self, event: Event<'_>) -> Result<()> {
        self.inner
            .write_event(event)
            .map_err(|e| Error::XmlError(e.to_string()))
    }

    /// Open an element.
    pub fn start(&mut self, name: &str, attrs: &Attrs<'_>) -> Result<()> {
        self.write(Event::Start(element(name, attrs)))
    }

    /// Write a self-closing element.
    pub fn empty(&mut self, name: &str, attrs: &Attrs<'_>) -> Result<()> {
        self.write(Event::Empty(element(name, attrs)))
    }

    /// Close an element.
    pub fn end(&mut self, name: &str) -> Result<()> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// Write escaped character data.
    pub fn text(&mut self, text: &str) -> Result<()> {
        let text = sanitize(text);
        self.write(Event::Text(BytesText::new(&text)))
    }

    /// Write `<name attrs>text</name>`.
    pub fn text_element(&mut self, name: &str, attrs: &Attrs<'_>, text: &str) -> Result<()> {
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)
    }

    /// Finish and return the serialized bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}
