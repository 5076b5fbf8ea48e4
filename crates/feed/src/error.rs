// ABOUTME: Error types for feed import, validation and XML output.
// ABOUTME: Provides FeedError enum with Parse, Invalid, Xml, and Io variants.

use std::fmt;
use thiserror::Error;

/// Errors that can occur around the feed conversion.
///
/// Mapping a feed into a dialect never fails; these cover the edges:
/// reading an existing feed, caller-side validation and writing XML.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Failed to parse the source feed data (malformed XML/JSON).
    #[error("failed to parse feed: {0}")]
    Parse(String),

    /// A required field (title, link, description) is empty.
    #[error("invalid feed: {0}")]
    Invalid(String),

    /// The XML writer rejected an event.
    #[error("failed to write xml: {0}")]
    Xml(String),

    /// The underlying sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FeedError {
    /// Creates a Parse error from an underlying feed-rs error.
    pub fn parse(err: impl fmt::Display) -> Self {
        FeedError::Parse(err.to_string())
    }

    /// Creates an Invalid error with a custom message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        FeedError::Invalid(msg.into())
    }

    /// Creates an Xml error from a quick-xml error.
    pub fn xml(err: impl fmt::Display) -> Self {
        FeedError::Xml(err.to_string())
    }
}
