//! Screenshot Extract - pull base64 screenshot payloads out of browser
//! automation result JSON.
//!
//! This crate provides:
//! - A serde model for browser results in both the direct and the
//!   MCP-resource-wrapped shape
//! - An extraction pipeline writing each `data:image/...` payload to its
//!   own text file with a deterministic filename
//! - Partial-failure tolerance: one bad write never loses the batch
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use screenshot_extract::Extractor;
//!
//! let report = Extractor::new("extracted_screenshots")
//!     .run(Path::new("test/browser.results"))
//!     .unwrap();
//! println!("extracted {} screenshots", report.extracted);
//! ```

pub mod config;
pub mod extract;
pub mod results;

// Re-export pipeline types
pub use extract::{EntryOutcome, ExtractError, ExtractReport, ExtractResult, Extractor};

// Re-export the document model
pub use results::{BrowserResults, ResultEntry, ResultsDocument};
