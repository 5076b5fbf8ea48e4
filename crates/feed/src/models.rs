// ABOUTME: Source-agnostic feed model consumed by the dialect adapters.
// ABOUTME: Feed, Item and their nested Link/Author/Image/Enclosure shapes.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::FeedError;

/// A hyperlink. Only `href` is used by the RSS dialects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub href: String,
    pub rel: String,
    pub media_type: String,
    pub length: String,
}

impl Link {
    /// Creates a link with only `href` set.
    pub fn new(href: impl Into<String>) -> Self {
        Link {
            href: href.into(),
            ..Default::default()
        }
    }
}

/// Represents an author with a name and an email address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// Feed-level image (logo).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
    pub title: String,
    pub link: String,
    pub width: u32,
    pub height: u32,
}

/// Represents a media enclosure. `length` is kept as text; empty means unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enclosure {
    pub url: String,
    pub media_type: String,
    pub length: String,
}

/// Represents a single item within a feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub title: String,
    pub link: Link,
    pub source: Option<Link>,
    pub author: Option<Author>,
    pub description: String,
    pub id: String,
    pub updated: Option<DateTime<FixedOffset>>,
    pub created: Option<DateTime<FixedOffset>>,
    pub enclosure: Option<Enclosure>,
    pub content: String,
}

/// Represents a feed with metadata and an ordered list of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feed {
    pub title: String,
    pub link: Link,
    pub description: String,
    pub author: Option<Author>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub created: Option<DateTime<FixedOffset>>,
    pub id: String,
    pub subtitle: String,
    pub items: Vec<Item>,
    pub copyright: String,
    pub image: Option<Image>,
}

impl Feed {
    /// Appends an item. Items are emitted in insertion order.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Sorts items in place using the given comparator (stable).
    pub fn sort_items<F>(&mut self, compare: F)
    where
        F: FnMut(&Item, &Item) -> Ordering,
    {
        self.items.sort_by(compare);
    }

    /// Checks the required channel fields and every item.
    ///
    /// The adapters never call this; it is for callers that want to reject
    /// incomplete input before building a document.
    pub fn validate(&self) -> Result<(), FeedError> {
        require("feed title", &self.title)?;
        require("feed link", &self.link.href)?;
        require("feed description", &self.description)?;
        for (idx, item) in self.items.iter().enumerate() {
            if let Err(FeedError::Invalid(msg)) = item.validate() {
                return Err(FeedError::invalid(format!("item {}: {}", idx, msg)));
            }
        }
        Ok(())
    }
}

impl Item {
    /// Checks that title, link and description are non-empty.
    pub fn validate(&self) -> Result<(), FeedError> {
        require("title", &self.title)?;
        require("link", &self.link.href)?;
        require("description", &self.description)
    }
}

fn require(field: &str, value: &str) -> Result<(), FeedError> {
    if value.trim().is_empty() {
        return Err(FeedError::invalid(format!("{} is empty", field)));
    }
    Ok(())
}
