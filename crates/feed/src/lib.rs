// ABOUTME: Feed generation library: generic feed model rendered as Amazon-flavoured RSS 2.0.
// ABOUTME: Provides the model, the dialect adapter, XML output, and an importer for existing feeds.

pub mod amazon;
pub mod error;
pub mod models;
pub mod parser;
pub mod rss;
pub mod time_format;
pub mod xml;

pub use amazon::{AmazonProduct, AmazonRss, AmazonRssFeed, AmazonRssFeedXml, AmazonRssItem};
pub use error::FeedError;
pub use models::{Author, Enclosure, Feed, Image, Item, Link};
pub use parser::parse_feed_bytes;
pub use rss::{RssContent, RssEnclosure, RssImage, RssTextInput};
pub use time_format::{any_time_format, RFC1123Z};
pub use xml::{to_xml, write_xml, XmlElement, XmlFeed};

impl Feed {
    /// Amazon RSS view over this feed.
    pub fn amazon_rss(&self) -> AmazonRss<'_> {
        AmazonRss::new(self)
    }

    /// Renders this feed as an Amazon RSS document.
    pub fn to_amazon_rss(&self) -> Result<String, FeedError> {
        to_xml(&self.amazon_rss())
    }

    /// Streams this feed as an Amazon RSS document into `w`.
    pub fn write_amazon_rss<W: std::io::Write>(&self, w: W) -> Result<(), FeedError> {
        write_xml(&self.amazon_rss(), w)
    }
}
