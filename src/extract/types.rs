//! Error and report types for the extraction pipeline.

use std::path::PathBuf;

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors that end an extraction run.
///
/// Per-file write failures are deliberately not here: one bad write must
/// not lose the rest of the batch, so those are recorded as an
/// [`EntryOutcome`] and the loop continues.
#[derive(Debug)]
pub enum ExtractError {
    /// The input path does not exist
    InputNotFound(PathBuf),

    /// The input file is not valid JSON in either known shape
    Parse(serde_json::Error),

    /// The wrapped `contents[0].text` payload is not valid JSON
    InnerParse(serde_json::Error),

    /// I/O error outside the per-file write loop
    Io(std::io::Error),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::InputNotFound(path) => {
                write!(f, "File not found: {}", path.display())
            }
            ExtractError::Parse(err) => write!(f, "Invalid JSON: {}", err),
            ExtractError::InnerParse(err) => {
                write!(f, "Invalid JSON in wrapped results text: {}", err)
            }
            ExtractError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::InputNotFound(_) => None,
            ExtractError::Parse(err) | ExtractError::InnerParse(err) => Some(err),
            ExtractError::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Io(err)
    }
}

/// What happened to a single result entry.
///
/// `index` is the 0-based position in the normalized entry list; `count`
/// is the 1-based running screenshot counter.
#[derive(Debug, Clone)]
pub enum EntryOutcome {
    /// Payload written to `filename` under the output directory
    Saved {
        index: usize,
        count: usize,
        filename: String,
        url: String,
        /// Payload length in characters
        chars: usize,
        /// Filename of the decoded image, when `--decode` is active
        decoded: Option<String>,
        /// Why decoding failed, when `--decode` is active and it did
        decode_error: Option<String>,
    },

    /// Navigation event, no screenshot attached
    Navigation { index: usize, url: String },

    /// No screenshot data on this entry
    NoScreenshot { index: usize },

    /// Writing (or decoding) this entry's file failed; the run continued
    WriteFailed {
        index: usize,
        filename: String,
        error: String,
    },
}

/// Summary of a completed extraction run
#[derive(Debug)]
pub struct ExtractReport {
    /// Per-entry outcomes, in input order
    pub outcomes: Vec<EntryOutcome>,
    /// Number of payload files written
    pub extracted: usize,
    /// Directory payloads were written to
    pub output_dir: PathBuf,
}

impl ExtractReport {
    /// Total number of entries processed
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether the normalized entry list was empty
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
