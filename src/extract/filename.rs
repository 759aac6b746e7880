//! Deterministic filename derivation for extracted payloads.
//!
//! Format: `screenshot_<counter:02>_<time>_<slug>.txt` where `time` is the
//! entry timestamp as `YYYYMMDD_HHMMSS` (or `unknown_time`) and `slug` is
//! the sanitized domain of the entry URL, falling back to the entry id,
//! falling back to a positional placeholder.

use chrono::DateTime;

use crate::config::{COUNTER_WIDTH, MAX_SLUG_LEN, UNKNOWN_TIME};
use crate::results::ResultEntry;

/// Derive the payload filename for the `count`-th screenshot.
pub fn screenshot_filename(entry: &ResultEntry, count: usize, index: usize) -> String {
    let time = entry
        .timestamp
        .as_deref()
        .and_then(format_timestamp)
        .unwrap_or_else(|| UNKNOWN_TIME.to_string());
    let slug = entry_slug(entry, index);
    format!("screenshot_{:0width$}_{}_{}.txt", count, time, slug, width = COUNTER_WIDTH)
}

/// Reformat an RFC 3339 timestamp as `YYYYMMDD_HHMMSS`; `None` if malformed.
pub fn format_timestamp(timestamp: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.format("%Y%m%d_%H%M%S").to_string())
}

/// Sanitized domain-or-id component for an entry's filename.
pub fn entry_slug(entry: &ResultEntry, index: usize) -> String {
    let from_url = entry
        .url
        .as_deref()
        .map(domain_of)
        .map(sanitize_component)
        .filter(|s| !s.is_empty());
    let from_id = || {
        entry
            .id
            .as_deref()
            .map(sanitize_component)
            .filter(|s| !s.is_empty())
    };

    from_url
        .or_else(from_id)
        .unwrap_or_else(|| format!("result_{}", index))
}

/// Host portion of a URL: scheme stripped, everything after the first `/` cut.
fn domain_of(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.split('/').next().unwrap_or(rest)
}

/// Keep ASCII alphanumerics plus `.`, `-`, `_`; truncate to the slug limit.
fn sanitize_component(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .take(MAX_SLUG_LEN)
        .collect()
}
