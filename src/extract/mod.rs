//! Extraction pipeline: load, normalize, filter, write.
//!
//! [`Extractor::run`] turns one results file into zero or more payload
//! files under the output directory and returns an [`ExtractReport`]
//! describing what happened to every entry. Rendering the report is the
//! binary's job.

pub mod filename;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::config::SCREENSHOT_PREFIX;
use crate::results::{ResultEntry, ResultsDocument};

pub use filename::{entry_slug, format_timestamp, screenshot_filename};
pub use types::{EntryOutcome, ExtractError, ExtractReport, ExtractResult};

/// Placeholder URL for entries that carry none
const UNKNOWN_URL: &str = "unknown_url";

/// One-shot extractor for a results file
#[derive(Debug, Clone)]
pub struct Extractor {
    /// Directory payload files are written to
    pub output_dir: PathBuf,
    /// Whether to also write decoded image bytes next to each payload
    pub decode: bool,
}

impl Extractor {
    /// Create an extractor writing to the given directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            decode: false,
        }
    }

    /// Set whether to additionally write decoded image bytes
    pub fn decode(mut self, decode: bool) -> Self {
        self.decode = decode;
        self
    }

    /// Run the full extraction pass over one input file.
    ///
    /// The output directory is only created once there is at least one
    /// entry to process; an empty or missing result list writes nothing.
    /// Per-file write failures are recorded in the report and do not end
    /// the run.
    pub fn run(&self, input: &Path) -> ExtractResult<ExtractReport> {
        if !input.exists() {
            return Err(ExtractError::InputNotFound(input.to_path_buf()));
        }

        let text = fs::read_to_string(input)?;
        let entries = ResultsDocument::parse(&text)?.into_entries()?;

        let mut outcomes = Vec::with_capacity(entries.len());
        let mut extracted = 0;

        if !entries.is_empty() {
            fs::create_dir_all(&self.output_dir)?;
            for (index, entry) in entries.iter().enumerate() {
                outcomes.push(self.process_entry(entry, index, &mut extracted));
            }
        }

        Ok(ExtractReport {
            outcomes,
            extracted,
            output_dir: self.output_dir.clone(),
        })
    }

    fn process_entry(
        &self,
        entry: &ResultEntry,
        index: usize,
        extracted: &mut usize,
    ) -> EntryOutcome {
        let Some(payload) = entry.screenshot() else {
            return if entry.data.navigated {
                EntryOutcome::Navigation {
                    index,
                    url: entry.url.clone().unwrap_or_else(|| UNKNOWN_URL.to_string()),
                }
            } else {
                EntryOutcome::NoScreenshot { index }
            };
        };

        let count = *extracted + 1;
        let filename = screenshot_filename(entry, count, index);
        let path = self.output_dir.join(&filename);

        if let Err(err) = fs::write(&path, payload) {
            return EntryOutcome::WriteFailed {
                index,
                filename,
                error: err.to_string(),
            };
        }
        *extracted = count;

        let (decoded, decode_error) = if self.decode {
            match self.write_decoded(payload, &path) {
                Ok(name) => (Some(name), None),
                Err(err) => (None, Some(err)),
            }
        } else {
            (None, None)
        };

        EntryOutcome::Saved {
            index,
            count,
            filename,
            url: entry.url.clone().unwrap_or_else(|| UNKNOWN_URL.to_string()),
            chars: payload.chars().count(),
            decoded,
            decode_error,
        }
    }

    /// Base64-decode a payload and write the raw bytes next to `txt_path`.
    /// Returns the written filename; a failure is reported back to the
    /// caller's outcome and never ends the run.
    fn write_decoded(&self, payload: &str, txt_path: &Path) -> Result<String, String> {
        let (ext, bytes) = decode_payload(payload)
            .ok_or_else(|| "payload body is not base64 data".to_string())?;

        let image_path = txt_path.with_extension(ext);
        fs::write(&image_path, bytes)
            .map_err(|err| format!("could not write {}: {}", image_path.display(), err))?;

        image_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| "image path has no filename".to_string())
    }
}

/// Split a `data:image/<ext>;base64,<body>` payload into the file
/// extension and decoded bytes. `None` if the payload is not in that form.
fn decode_payload(payload: &str) -> Option<(String, Vec<u8>)> {
    let rest = payload.strip_prefix(SCREENSHOT_PREFIX)?;
    let (mime_tail, body) = rest.split_once(',')?;
    if !mime_tail.ends_with(";base64") {
        return None;
    }

    let ext: String = mime_tail
        .split(';')
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    let ext = if ext.is_empty() { "bin".to_string() } else { ext };

    let bytes = STANDARD.decode(body).ok()?;
    Some((ext, bytes))
}
