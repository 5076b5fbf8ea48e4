// ABOUTME: XML output for dialect documents using quick-xml's event writer.
// ABOUTME: Provides XmlElement/XmlFeed traits, to_xml/write_xml, and per-field presence helpers.

use std::fmt::Display;
use std::io::Write;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::FeedError;

/// A value that serializes itself as a single XML element.
pub trait XmlElement {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), FeedError>;
}

/// A feed that can produce its outer document envelope.
pub trait XmlFeed {
    type Envelope<'a>: XmlElement
    where
        Self: 'a;

    /// Builds the serializable envelope (root element and namespaces).
    fn feed_xml(&self) -> Self::Envelope<'_>;
}

/// Renders a feed as an XML document string, including the declaration.
pub fn to_xml<F: XmlFeed + ?Sized>(feed: &F) -> Result<String, FeedError> {
    let mut buf = Vec::new();
    write_xml(feed, &mut buf)?;
    String::from_utf8(buf).map_err(FeedError::xml)
}

/// Streams a feed as an XML document into `sink`, two-space indented.
pub fn write_xml<F: XmlFeed + ?Sized, W: Write>(feed: &F, sink: W) -> Result<(), FeedError> {
    let mut writer = Writer::new_with_indent(sink, b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(FeedError::xml)?;
    feed.feed_xml().write_xml(&mut writer)?;
    writer.into_inner().flush()?;
    Ok(())
}

/// Whether an element is written when its value is the zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Presence {
    /// Always written, `<x></x>` when empty.
    Required,
    /// Skipped when empty or zero.
    OmitEmpty,
}

pub(crate) fn start<W: Write>(writer: &mut Writer<W>, element: BytesStart<'_>) -> Result<(), FeedError> {
    writer.write_event(Event::Start(element)).map_err(FeedError::xml)
}

pub(crate) fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), FeedError> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(FeedError::xml)
}

/// Writes `<name>value</name>` with the value escaped.
pub(crate) fn text<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
    presence: Presence,
) -> Result<(), FeedError> {
    if presence == Presence::OmitEmpty && value.is_empty() {
        return Ok(());
    }
    start(writer, BytesStart::new(name))?;
    writer
        .write_event(Event::Text(BytesText::new(value)))
        .map_err(FeedError::xml)?;
    end(writer, name)
}

/// Writes a numeric element, skipping the type's zero value under `OmitEmpty`.
pub(crate) fn number<W: Write, N: Display + Default + PartialEq>(
    writer: &mut Writer<W>,
    name: &str,
    value: N,
    presence: Presence,
) -> Result<(), FeedError> {
    if presence == Presence::OmitEmpty && value == N::default() {
        return Ok(());
    }
    text(writer, name, &value.to_string(), Presence::Required)
}

/// Writes `<name><![CDATA[value]]></name>`.
///
/// A literal `]]>` inside the value is split across two CDATA sections.
pub(crate) fn cdata<W: Write>(writer: &mut Writer<W>, name: &str, value: &str) -> Result<(), FeedError> {
    start(writer, BytesStart::new(name))?;
    let mut rest = value;
    while let Some(pos) = rest.find("]]>") {
        let (head, tail) = rest.split_at(pos + 2);
        writer
            .write_event(Event::CData(BytesCData::new(head)))
            .map_err(FeedError::xml)?;
        rest = tail;
    }
    writer
        .write_event(Event::CData(BytesCData::new(rest)))
        .map_err(FeedError::xml)?;
    end(writer, name)
}

/// Writes a nested element when present.
pub(crate) fn child<W: Write, T: XmlElement>(
    writer: &mut Writer<W>,
    value: Option<&T>,
) -> Result<(), FeedError> {
    match value {
        Some(v) => v.write_xml(writer),
        None => Ok(()),
    }
}
