// ABOUTME: Base RSS 2.0 sub-elements shared by RSS dialects.
// ABOUTME: Image, text input, content:encoded, and enclosure with their XML layout.

use std::io::Write;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Writer;

use crate::error::FeedError;
use crate::xml::{self, Presence, XmlElement};

/// Channel `<image>`. Width and height are omitted when zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RssImage {
    pub url: String,
    pub title: String,
    pub link: String,
    pub width: u32,
    pub height: u32,
}

/// Channel `<textInput>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RssTextInput {
    pub title: String,
    pub description: String,
    pub name: String,
    pub link: String,
}

/// Item `<content:encoded>`, written as CDATA.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RssContent {
    pub content: String,
}

/// Item `<enclosure url=".." length=".." type=".."/>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RssEnclosure {
    pub url: String,
    pub media_type: String,
    pub length: String,
}

impl XmlElement for RssImage {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), FeedError> {
        xml::start(writer, BytesStart::new("image"))?;
        xml::text(writer, "url", &self.url, Presence::Required)?;
        xml::text(writer, "title", &self.title, Presence::Required)?;
        xml::text(writer, "link", &self.link, Presence::Required)?;
        xml::number(writer, "width", self.width, Presence::OmitEmpty)?;
        xml::number(writer, "height", self.height, Presence::OmitEmpty)?;
        xml::end(writer, "image")
    }
}

impl XmlElement for RssTextInput {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), FeedError> {
        xml::start(writer, BytesStart::new("textInput"))?;
        xml::text(writer, "title", &self.title, Presence::Required)?;
        xml::text(writer, "description", &self.description, Presence::Required)?;
        xml::text(writer, "name", &self.name, Presence::Required)?;
        xml::text(writer, "link", &self.link, Presence::Required)?;
        xml::end(writer, "textInput")
    }
}

impl XmlElement for RssContent {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), FeedError> {
        xml::cdata(writer, "content:encoded", &self.content)
    }
}

impl XmlElement for RssEnclosure {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), FeedError> {
        let mut element = BytesStart::new("enclosure");
        element.push_attribute(("url", self.url.as_str()));
        element.push_attribute(("length", self.length.as_str()));
        element.push_attribute(("type", self.media_type.as_str()));
        writer
            .write_event(Event::Empty(element))
            .map_err(FeedError::xml)
    }
}
