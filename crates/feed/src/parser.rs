// ABOUTME: Imports existing RSS/Atom/JSON feeds into the generic feed model using feed-rs.
// ABOUTME: Maps feed-rs types to Feed/Item so they can be re-emitted in another dialect.

use crate::error::FeedError;
use crate::models::{Author, Enclosure, Feed, Image, Item, Link};
use feed_rs::model::{Entry, Feed as FeedRsFeed, Link as FeedRsLink, Person};
use tracing::debug;

/// Parses feed bytes into the generic Feed model.
///
/// # Arguments
/// * `data` - Raw feed bytes (RSS, Atom, or JSON Feed)
///
/// # Returns
/// * `Ok(Feed)` - Parsed feed; items keep document order
/// * `Err(FeedError)` - The bytes are not a recognizable feed
pub fn parse_feed_bytes(data: &[u8]) -> Result<Feed, FeedError> {
    let parsed = feed_rs::parser::parse(data).map_err(FeedError::parse)?;

    let items: Vec<Item> = parsed.entries.iter().map(map_entry).collect();
    debug!(items = items.len(), "parsed source feed");

    Ok(Feed {
        title: parsed.title.as_ref().map(|t| t.content.clone()).unwrap_or_default(),
        link: extract_home_link(&parsed.links),
        description: parsed
            .description
            .as_ref()
            .map(|d| d.content.clone())
            .unwrap_or_default(),
        author: parsed.authors.first().map(person_to_author),
        updated: parsed.updated.map(|dt| dt.fixed_offset()),
        created: parsed.published.map(|dt| dt.fixed_offset()),
        id: parsed.id.clone(),
        subtitle: String::new(),
        items,
        copyright: parsed.rights.as_ref().map(|r| r.content.clone()).unwrap_or_default(),
        image: extract_feed_image(&parsed),
    })
}

/// Picks the feed's home link.
/// Prefers link with rel="alternate", otherwise uses the first link.
fn extract_home_link(links: &[FeedRsLink]) -> Link {
    links
        .iter()
        .find(|l| l.rel.as_deref() == Some("alternate"))
        .or_else(|| links.first())
        .map(to_link)
        .unwrap_or_default()
}

/// Picks the item link.
/// Prefers rel="alternate", then the first non-enclosure link, then the entry id.
fn extract_item_link(entry: &Entry) -> Link {
    if let Some(link) = entry
        .links
        .iter()
        .find(|l| l.rel.as_deref() == Some("alternate"))
    {
        return to_link(link);
    }

    if let Some(link) = entry.links.iter().find(|l| !is_enclosure_link(l)) {
        return to_link(link);
    }

    Link::new(entry.id.clone())
}

/// Checks if a link is an enclosure link (rel == "enclosure").
fn is_enclosure_link(link: &FeedRsLink) -> bool {
    link.rel.as_deref() == Some("enclosure")
}

fn to_link(link: &FeedRsLink) -> Link {
    Link {
        href: link.href.clone(),
        rel: link.rel.clone().unwrap_or_default(),
        media_type: link.media_type.clone().unwrap_or_default(),
        length: link.length.map(|l| l.to_string()).unwrap_or_default(),
    }
}

/// Extracts the feed image: logo first, then icon.
fn extract_feed_image(feed: &FeedRsFeed) -> Option<Image> {
    let image = feed.logo.as_ref().or(feed.icon.as_ref())?;
    Some(Image {
        url: image.uri.clone(),
        title: image.title.clone().unwrap_or_default(),
        link: image.link.as_ref().map(|l| l.href.clone()).unwrap_or_default(),
        width: image.width.unwrap_or(0),
        height: image.height.unwrap_or(0),
    })
}

/// Maps a feed-rs Entry to a generic Item.
fn map_entry(entry: &Entry) -> Item {
    let content = entry
        .content
        .as_ref()
        .and_then(|c| c.body.clone())
        .unwrap_or_default();

    Item {
        title: entry.title.as_ref().map(|t| t.content.clone()).unwrap_or_default(),
        link: extract_item_link(entry),
        source: None,
        author: entry.authors.first().map(person_to_author),
        description: entry
            .summary
            .as_ref()
            .map(|s| s.content.clone())
            .unwrap_or_default(),
        id: entry.id.clone(),
        updated: entry.updated.map(|dt| dt.fixed_offset()),
        created: entry.published.map(|dt| dt.fixed_offset()),
        enclosure: extract_enclosure(entry),
        content,
    }
}

/// Extracts the first enclosure.
/// Links with rel="enclosure" win over media content (RSS <enclosure> lands there).
fn extract_enclosure(entry: &Entry) -> Option<Enclosure> {
    if let Some(link) = entry.links.iter().find(|l| is_enclosure_link(l)) {
        return Some(Enclosure {
            url: link.href.clone(),
            media_type: link.media_type.clone().unwrap_or_default(),
            length: link.length.map(|l| l.to_string()).unwrap_or_default(),
        });
    }

    entry
        .media
        .iter()
        .flat_map(|m| m.content.iter())
        .find_map(|content| {
            let url = content.url.as_ref()?;
            Some(Enclosure {
                url: url.to_string(),
                media_type: content
                    .content_type
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_default(),
                length: content.size.map(|s| s.to_string()).unwrap_or_default(),
            })
        })
}

/// Converts a feed-rs Person to our Author model.
fn person_to_author(person: &Person) -> Author {
    Author {
        name: person.name.clone(),
        email: person.email.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
    <title>Atom Blog</title>
    <id>urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6</id>
    <updated>2024-03-01T12:00:00Z</updated>
    <link rel="self" href="https://example.com/atom.xml"/>
    <link rel="alternate" href="https://example.com/blog"/>
    <author><name>Jo</name><email>jo@example.com</email></author>
    <entry>
        <title>Episode</title>
        <id>urn:entry:1</id>
        <updated>2024-03-01T12:00:00Z</updated>
        <link rel="enclosure" type="audio/mpeg" length="4096" href="https://cdn.example.com/ep.mp3"/>
        <link rel="alternate" href="https://example.com/blog/ep"/>
        <summary>Short</summary>
    </entry>
    <entry>
        <title>Bare</title>
        <id>https://example.com/blog/bare</id>
        <updated>2024-03-02T12:00:00Z</updated>
    </entry>
</feed>"#;

    #[test]
    fn test_home_link_prefers_alternate() {
        let parsed = feed_rs::parser::parse(ATOM.as_bytes()).unwrap();
        assert_eq!(extract_home_link(&parsed.links).href, "https://example.com/blog");
    }

    #[test]
    fn test_home_link_empty() {
        assert_eq!(extract_home_link(&[]), Link::default());
    }

    #[test]
    fn test_item_link_falls_back_to_id() {
        let parsed = feed_rs::parser::parse(ATOM.as_bytes()).unwrap();
        assert_eq!(
            extract_item_link(&parsed.entries[1]).href,
            "https://example.com/blog/bare"
        );
    }

    #[test]
    fn test_enclosure_from_link() {
        let parsed = feed_rs::parser::parse(ATOM.as_bytes()).unwrap();
        assert_eq!(
            extract_enclosure(&parsed.entries[0]),
            Some(Enclosure {
                url: "https://cdn.example.com/ep.mp3".to_string(),
                media_type: "audio/mpeg".to_string(),
                length: "4096".to_string(),
            })
        );
        assert_eq!(
            extract_item_link(&parsed.entries[0]).href,
            "https://example.com/blog/ep"
        );
    }

    #[test]
    fn test_no_enclosure() {
        assert!(extract_enclosure(&Entry::default()).is_none());
    }
}
