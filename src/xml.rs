//! Minimal XML emitter used to assemble WDDX packets.
//!
//! Wraps a [`quick_xml::Writer`] over an in-memory buffer. Compact mode writes
//! everything on one line; indented mode puts each element on its own line
//! and keeps text-only elements (`<number>1</number>`) inline.

use crate::{Error, Result};
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

pub(crate) struct XmlWriter {
    writer: Writer<Vec<u8>>,
}

impl XmlWriter {
    pub(crate) fn compact() -> Self {
        XmlWriter {
            writer: Writer::new(Vec::with_capacity(256)),
        }
    }

    pub(crate) fn indented(width: usize) -> Self {
        XmlWriter {
            writer: Writer::new_with_indent(Vec::with_capacity(512), b' ', width),
        }
    }

    fn write(&mut self, event: Event<'_>) -> Result<()> {
        self.writer.write_event(event).map_err(Error::xml)
    }

    /// Opens an element whose attribute section is written verbatim.
    ///
    /// `content` is the full tag body, e.g. `wddxPacket version='1.0'`.
    pub(crate) fn start_raw(&mut self, content: &str, name_len: usize) -> Result<()> {
        self.write(Event::Start(BytesStart::from_content(content, name_len)))
    }

    pub(crate) fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut elem = BytesStart::new(name);
        for attr in attrs {
            elem.push_attribute(*attr);
        }
        self.write(Event::Start(elem))
    }

    pub(crate) fn end(&mut self, name: &str) -> Result<()> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// Writes a self-closing element such as `<null/>`.
    pub(crate) fn empty(&mut self, name: &str) -> Result<()> {
        self.write(Event::Empty(BytesStart::new(name)))
    }

    /// Writes text content; only `&`, `<` and `>` are escaped.
    pub(crate) fn text(&mut self, text: &str) -> Result<()> {
        self.write(Event::Text(BytesText::from_escaped(partial_escape(text))))
    }

    /// Writes `<name>text</name>`.
    pub(crate) fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start(name, &[])?;
        self.text(text)?;
        self.end(name)
    }

    pub(crate) fn into_string(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner()).map_err(Error::xml)
    }
}
