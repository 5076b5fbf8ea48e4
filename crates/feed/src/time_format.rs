// ABOUTME: Timestamp selection and formatting for RSS date fields.
// ABOUTME: Picks the first present candidate and renders it as RFC 1123 with numeric zone.

use chrono::{DateTime, FixedOffset};

/// RFC 1123 with a numeric zone: "Mon, 02 Jan 2006 15:04:05 -0700".
///
/// chrono's `to_rfc2822` does not zero-pad the day, so the pattern is spelled out.
pub const RFC1123Z: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Formats the first present timestamp with `format`.
/// Returns an empty string when every candidate is absent.
pub fn any_time_format(format: &str, candidates: &[Option<DateTime<FixedOffset>>]) -> String {
    candidates
        .iter()
        .flatten()
        .next()
        .map(|dt| dt.format(format).to_string())
        .unwrap_or_default()
}
