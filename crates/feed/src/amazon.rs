// ABOUTME: Amazon-flavoured RSS 2.0 dialect built from the generic feed model.
// ABOUTME: Maps Feed/Item into channel and item structs with amzn: fields and wraps them in <rss>.

use std::borrow::Cow;
use std::io::Write;

use quick_xml::events::BytesStart;
use quick_xml::Writer;
use tracing::{debug, trace};

use crate::error::FeedError;
use crate::models::{Feed, Item};
use crate::rss::{RssContent, RssEnclosure, RssImage, RssTextInput};
use crate::time_format::{any_time_format, RFC1123Z};
use crate::xml::{self, Presence, XmlElement, XmlFeed};

/// Value of the `version` attribute on `<rss>`.
pub const RSS_VERSION: &str = "2.0";
pub const CONTENT_NAMESPACE: &str = "http://purl.org/rss/1.0/modules/content/";
pub const DUBLIN_CORE_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";
pub const AMAZON_NAMESPACE: &str = "https://amazon.com/ospublishing/1.0/";

/// Value of `<amzn:rssVersion>` on every channel.
pub const AMAZON_RSS_VERSION: f32 = 1.0;

// Authoring placeholders. They are meant to be replaced by hand after export.
pub const HERO_IMAGE_PLACEHOLDER: &str = "POST THUMBNAIL (Prefer 2x1 at least 1000px wide)";
pub const INTRO_TEXT_PLACEHOLDER: &str = "META DESCRIPTION";
pub const INDEX_CONTENT_FLAG: &str = "True";

/// The `<rss>` envelope: version, namespace declarations and the channel.
#[derive(Debug, Clone, PartialEq)]
pub struct AmazonRssFeedXml<'a> {
    pub version: &'static str,
    pub content_namespace: &'static str,
    pub dublin_core_namespace: &'static str,
    pub amazon_namespace: &'static str,
    pub channel: Cow<'a, AmazonRssFeed>,
}

/// `<channel>` with the Amazon-specific fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmazonRssFeed {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
    pub copyright: String,
    /// Derived from the feed author: "email" or "email (name)".
    pub managing_editor: String,
    pub web_master: String,
    /// Created, falling back to updated.
    pub pub_date: String,
    /// Updated only.
    pub last_build_date: String,
    pub category: String,
    pub generator: String,
    pub docs: String,
    pub cloud: String,
    pub ttl: u32,
    pub rating: String,
    pub skip_hours: String,
    pub skip_days: String,
    pub amzn_rss_version: f32,
    pub image: Option<RssImage>,
    pub text_input: Option<RssTextInput>,
    pub items: Vec<AmazonRssItem>,
}

/// `<item>` with the Amazon-specific fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmazonRssItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub content: Option<RssContent>,
    pub author: String,
    pub category: String,
    pub comments: String,
    pub enclosure: Option<RssEnclosure>,
    pub guid: String,
    pub pub_date: String,
    pub source: String,
    pub creator: String,
    pub hero_image: String,
    pub intro_text: String,
    pub index_content: String,
    pub products: Vec<AmazonProduct>,
}

/// One `<amzn:product>` slide entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmazonProduct {
    pub url: String,
    pub headline: String,
    pub award: String,
    pub summary: String,
}

/// Amazon RSS view over a generic feed.
#[derive(Debug, Clone, Copy)]
pub struct AmazonRss<'a> {
    feed: &'a Feed,
}

impl<'a> AmazonRss<'a> {
    pub fn new(feed: &'a Feed) -> Self {
        AmazonRss { feed }
    }

    /// Builds the channel. Never fails; absent optional data maps to empty fields.
    pub fn channel(&self) -> AmazonRssFeed {
        let feed = self.feed;
        let pub_date = any_time_format(RFC1123Z, &[feed.created, feed.updated]);
        // Build date tracks content updates only; created is not a fallback here.
        let last_build_date = any_time_format(RFC1123Z, &[feed.updated]);

        let managing_editor = match &feed.author {
            Some(author) if !author.name.is_empty() => {
                format!("{} ({})", author.email, author.name)
            }
            Some(author) => author.email.clone(),
            None => String::new(),
        };

        let image = feed.image.as_ref().map(|i| RssImage {
            url: i.url.clone(),
            title: i.title.clone(),
            link: i.link.clone(),
            width: i.width,
            height: i.height,
        });

        let items: Vec<AmazonRssItem> = feed.items.iter().map(AmazonRssItem::from_item).collect();
        debug!(title = %feed.title, items = items.len(), "mapped feed to amazon rss channel");

        AmazonRssFeed {
            title: feed.title.clone(),
            link: feed.link.href.clone(),
            description: feed.description.clone(),
            managing_editor,
            pub_date,
            last_build_date,
            copyright: feed.copyright.clone(),
            image,
            amzn_rss_version: AMAZON_RSS_VERSION,
            items,
            ..Default::default()
        }
    }
}

impl XmlFeed for AmazonRss<'_> {
    type Envelope<'e>
        = AmazonRssFeedXml<'static>
    where
        Self: 'e;

    fn feed_xml(&self) -> AmazonRssFeedXml<'static> {
        AmazonRssFeedXml::new(Cow::Owned(self.channel()))
    }
}

impl AmazonRssItem {
    /// Maps one generic item.
    pub fn from_item(item: &Item) -> Self {
        let content = if item.content.is_empty() {
            None
        } else {
            Some(RssContent {
                content: item.content.clone(),
            })
        };

        // Url alone is not enough; readers need type and length too.
        let enclosure = match &item.enclosure {
            Some(enc) if !enc.media_type.is_empty() && !enc.length.is_empty() => Some(RssEnclosure {
                url: enc.url.clone(),
                media_type: enc.media_type.clone(),
                length: enc.length.clone(),
            }),
            Some(enc) => {
                trace!(url = %enc.url, "dropping enclosure without type or length");
                None
            }
            None => None,
        };

        AmazonRssItem {
            title: item.title.clone(),
            link: item.link.href.clone(),
            description: item.description.clone(),
            content,
            author: item.author.as_ref().map(|a| a.name.clone()).unwrap_or_default(),
            enclosure,
            guid: item.id.clone(),
            pub_date: any_time_format(RFC1123Z, &[item.created, item.updated]),
            source: item.source.as_ref().map(|s| s.href.clone()).unwrap_or_default(),
            hero_image: HERO_IMAGE_PLACEHOLDER.to_string(),
            intro_text: INTRO_TEXT_PLACEHOLDER.to_string(),
            index_content: INDEX_CONTENT_FLAG.to_string(),
            ..Default::default()
        }
    }
}

impl AmazonRssFeed {
    /// Wraps this channel in the `<rss>` envelope without copying it.
    pub fn feed_xml(&self) -> AmazonRssFeedXml<'_> {
        AmazonRssFeedXml::new(Cow::Borrowed(self))
    }
}

impl XmlFeed for AmazonRssFeed {
    type Envelope<'e>
        = AmazonRssFeedXml<'e>
    where
        Self: 'e;

    fn feed_xml(&self) -> AmazonRssFeedXml<'_> {
        AmazonRssFeed::feed_xml(self)
    }
}

impl<'a> AmazonRssFeedXml<'a> {
    fn new(channel: Cow<'a, AmazonRssFeed>) -> Self {
        AmazonRssFeedXml {
            version: RSS_VERSION,
            content_namespace: CONTENT_NAMESPACE,
            dublin_core_namespace: DUBLIN_CORE_NAMESPACE,
            amazon_namespace: AMAZON_NAMESPACE,
            channel,
        }
    }
}

impl XmlElement for AmazonRssFeedXml<'_> {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), FeedError> {
        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", self.version));
        rss.push_attribute(("xmlns:content", self.content_namespace));
        rss.push_attribute(("xmlns:dc", self.dublin_core_namespace));
        rss.push_attribute(("xmlns:amzn", self.amazon_namespace));
        xml::start(writer, rss)?;
        self.channel.write_xml(writer)?;
        xml::end(writer, "rss")
    }
}

impl XmlElement for AmazonRssFeed {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), FeedError> {
        use Presence::{OmitEmpty, Required};

        xml::start(writer, BytesStart::new("channel"))?;
        xml::text(writer, "title", &self.title, Required)?;
        xml::text(writer, "link", &self.link, Required)?;
        xml::text(writer, "description", &self.description, Required)?;
        xml::text(writer, "language", &self.language, OmitEmpty)?;
        xml::text(writer, "copyright", &self.copyright, OmitEmpty)?;
        xml::text(writer, "managingEditor", &self.managing_editor, OmitEmpty)?;
        xml::text(writer, "webMaster", &self.web_master, OmitEmpty)?;
        xml::text(writer, "pubDate", &self.pub_date, OmitEmpty)?;
        xml::text(writer, "lastBuildDate", &self.last_build_date, OmitEmpty)?;
        xml::text(writer, "category", &self.category, OmitEmpty)?;
        xml::text(writer, "generator", &self.generator, OmitEmpty)?;
        xml::text(writer, "docs", &self.docs, OmitEmpty)?;
        xml::text(writer, "cloud", &self.cloud, OmitEmpty)?;
        xml::number(writer, "ttl", self.ttl, OmitEmpty)?;
        xml::text(writer, "rating", &self.rating, OmitEmpty)?;
        xml::text(writer, "skipHours", &self.skip_hours, OmitEmpty)?;
        xml::text(writer, "skipDays", &self.skip_days, OmitEmpty)?;
        xml::number(writer, "amzn:rssVersion", self.amzn_rss_version, OmitEmpty)?;
        xml::child(writer, self.image.as_ref())?;
        xml::child(writer, self.text_input.as_ref())?;
        for item in &self.items {
            item.write_xml(writer)?;
        }
        xml::end(writer, "channel")
    }
}

impl XmlElement for AmazonRssItem {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), FeedError> {
        use Presence::{OmitEmpty, Required};

        xml::start(writer, BytesStart::new("item"))?;
        xml::text(writer, "title", &self.title, Required)?;
        xml::text(writer, "link", &self.link, Required)?;
        xml::text(writer, "description", &self.description, Required)?;
        xml::child(writer, self.content.as_ref())?;
        xml::text(writer, "author", &self.author, OmitEmpty)?;
        xml::text(writer, "category", &self.category, OmitEmpty)?;
        xml::text(writer, "comments", &self.comments, OmitEmpty)?;
        xml::child(writer, self.enclosure.as_ref())?;
        xml::text(writer, "guid", &self.guid, OmitEmpty)?;
        xml::text(writer, "pubDate", &self.pub_date, OmitEmpty)?;
        xml::text(writer, "source", &self.source, OmitEmpty)?;
        xml::text(writer, "dc:creator", &self.creator, OmitEmpty)?;
        xml::text(writer, "amzn:heroImage", &self.hero_image, OmitEmpty)?;
        xml::text(writer, "amzn:introText", &self.intro_text, OmitEmpty)?;
        xml::text(writer, "amzn:indexContent", &self.index_content, OmitEmpty)?;
        for product in &self.products {
            product.write_xml(writer)?;
        }
        xml::end(writer, "item")
    }
}

impl XmlElement for AmazonProduct {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), FeedError> {
        use Presence::Required;

        xml::start(writer, BytesStart::new("amzn:product"))?;
        xml::text(writer, "amzn:productURL", &self.url, Required)?;
        xml::text(writer, "amzn:productHeadline", &self.headline, Required)?;
        xml::text(writer, "amzn:award", &self.award, Required)?;
        xml::text(writer, "amzn:productSummary", &self.summary, Required)?;
        xml::end(writer, "amzn:product")
    }
}
