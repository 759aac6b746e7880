//! Configuration with environment variable support.
//!
//! Centralized defaults for the extractor, overridable through the
//! environment:
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SCREENSHOT_EXTRACT_INPUT` | Input results file | `test/browser.results` |
//! | `SCREENSHOT_EXTRACT_OUTPUT_DIR` | Directory for extracted payloads | `extracted_screenshots` |

use std::env;
use std::sync::OnceLock;

/// Default input file (where `browser://results` output is saved)
pub const DEFAULT_INPUT_PATH: &str = "test/browser.results";

/// Default directory for extracted payload files
pub const DEFAULT_OUTPUT_DIR: &str = "extracted_screenshots";

/// Prefix a payload must carry to count as a screenshot
pub const SCREENSHOT_PREFIX: &str = "data:image/";

/// Zero-padding width of the screenshot counter in filenames
pub const COUNTER_WIDTH: usize = 2;

/// Maximum length of the sanitized domain/id filename component
pub const MAX_SLUG_LEN: usize = 30;

/// Timestamp component used when an entry has no parseable timestamp
pub const UNKNOWN_TIME: &str = "unknown_time";

/// Environment variable for the input file
pub const ENV_INPUT_PATH: &str = "SCREENSHOT_EXTRACT_INPUT";

/// Environment variable for the output directory
pub const ENV_OUTPUT_DIR: &str = "SCREENSHOT_EXTRACT_OUTPUT_DIR";

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration (initialized from environment on first access)
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Centralized configuration for the extractor
#[derive(Debug, Clone)]
pub struct Config {
    /// Input results file
    pub input_path: String,
    /// Directory extracted payloads are written to
    pub output_dir: String,
}

impl Config {
    /// Create configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            input_path: env::var(ENV_INPUT_PATH)
                .unwrap_or_else(|_| DEFAULT_INPUT_PATH.to_string()),
            output_dir: env::var(ENV_OUTPUT_DIR)
                .unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string()),
        }
    }

    /// Create configuration with all defaults (ignoring environment)
    pub fn defaults() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
