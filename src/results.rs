//! Data model for browser results JSON.
//!
//! The results file comes in two shapes:
//! - *Direct*: `{"recentResults": [...]}` as produced by the browser tool.
//! - *Wrapped*: an MCP resource envelope `{"contents": [{"text": "<json>"}]}`
//!   where the `text` field holds the Direct document JSON-encoded as a
//!   string, requiring a second parse pass.

use serde::Deserialize;

use crate::config::SCREENSHOT_PREFIX;
use crate::extract::{ExtractError, ExtractResult};

/// A parsed results document, in either of the two known shapes.
///
/// Untagged decode: the Wrapped shape is attempted first, then Direct.
/// Anything object-shaped that is neither yields an empty Direct document,
/// which downstream treats as "no results".
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ResultsDocument {
    /// MCP resource envelope carrying the results as a JSON string
    Wrapped(WrappedResults),
    /// Results at the top level
    Direct(BrowserResults),
}

/// The envelope form: results JSON-encoded inside `contents[0].text`
#[derive(Debug, Deserialize)]
pub struct WrappedResults {
    pub contents: Vec<ContentBlock>,
}

/// One content block of the envelope
#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(default = "empty_object_json")]
    pub text: String,
}

fn empty_object_json() -> String {
    "{}".to_string()
}

/// The direct form: a list of recorded browser events
#[derive(Debug, Default, Deserialize)]
pub struct BrowserResults {
    #[serde(rename = "recentResults", default)]
    pub recent_results: Vec<ResultEntry>,
}

/// One recorded browser-automation event (navigation, capture, ...)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultEntry {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    /// ISO-8601-like timestamp; may be absent or malformed
    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub metadata: EntryMetadata,

    #[serde(default)]
    pub data: EntryData,
}

/// Metadata attached to an entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryMetadata {
    /// Inline screenshot payload, `data:image/...;base64,...` when present
    #[serde(default)]
    pub screenshot: Option<String>,
}

/// Event-specific data attached to an entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryData {
    /// True for navigation events
    #[serde(default)]
    pub navigated: bool,
}

impl ResultEntry {
    /// The screenshot payload, if present and carrying the exact
    /// `data:image/` prefix. Anything else is not a screenshot.
    pub fn screenshot(&self) -> Option<&str> {
        self.metadata
            .screenshot
            .as_deref()
            .filter(|s| s.starts_with(SCREENSHOT_PREFIX))
    }
}

impl ResultsDocument {
    /// Parse a results document from JSON text.
    pub fn parse(json: &str) -> ExtractResult<Self> {
        serde_json::from_str(json).map_err(ExtractError::Parse)
    }

    /// Normalize either shape into the entry list.
    ///
    /// For the Wrapped shape the first content block's `text` is parsed as
    /// JSON; a failing inner parse is a hard error, not a silent fallback.
    /// An empty `contents` list yields no entries.
    pub fn into_entries(self) -> ExtractResult<Vec<ResultEntry>> {
        match self {
            ResultsDocument::Wrapped(wrapped) => {
                let Some(block) = wrapped.contents.into_iter().next() else {
                    return Ok(Vec::new());
                };
                let inner: BrowserResults =
                    serde_json::from_str(&block.text).map_err(ExtractError::InnerParse)?;
                Ok(inner.recent_results)
            }
            ResultsDocument::Direct(direct) => Ok(direct.recent_results),
        }
    }
}
