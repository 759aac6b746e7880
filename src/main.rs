use clap::Parser;
use std::path::PathBuf;

use screenshot_extract::config;
use screenshot_extract::{EntryOutcome, ExtractReport, Extractor};

/// Screenshot Extract - pull screenshot payloads out of browser results
#[derive(Parser, Debug)]
#[command(
    name = "screenshot-extract",
    about = "Extract base64 screenshot payloads from browser automation result JSON",
    after_help = "ENVIRONMENT VARIABLES:\n\
        SCREENSHOT_EXTRACT_INPUT        Input results file (default: test/browser.results)\n\
        SCREENSHOT_EXTRACT_OUTPUT_DIR   Directory for extracted payloads (default: extracted_screenshots)"
)]
struct Args {
    /// Path to the results JSON file (browser://results saved to disk)
    input: Option<PathBuf>,

    /// Directory extracted payloads are written to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also base64-decode each payload and write the image bytes alongside
    #[arg(long)]
    decode: bool,
}

fn main() {
    let args = Args::parse();
    let cfg = config::get();

    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(&cfg.input_path));
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&cfg.output_dir));

    println!("Screenshot extractor for browser results");
    println!("{}", "=".repeat(50));
    println!("Reading from: {}", input.display());

    let extractor = Extractor::new(output).decode(args.decode);

    // Every outcome of the run itself ends with a clean exit 0; only a
    // malformed command line (handled by clap above) exits non-zero.
    match extractor.run(&input) {
        Ok(report) => print_report(&report),
        Err(err) => println!("Error: {}", err),
    }
}

fn print_report(report: &ExtractReport) {
    if report.is_empty() {
        println!("No recent results found in the JSON");
        return;
    }

    println!("Found {} results", report.total());

    for outcome in &report.outcomes {
        match outcome {
            EntryOutcome::Saved {
                count,
                filename,
                url,
                chars,
                decoded,
                decode_error,
                ..
            } => {
                println!("Saved screenshot {}: {}", count, filename);
                println!("  URL: {}", url);
                println!("  Length: {} characters", chars);
                if let Some(image) = decoded {
                    println!("  Decoded: {}", image);
                }
                if let Some(err) = decode_error {
                    println!("  Decode failed: {}", err);
                }
            }
            EntryOutcome::Navigation { index, url } => {
                println!("Result {}: navigation to {} (no screenshot)", index + 1, url);
            }
            EntryOutcome::NoScreenshot { index } => {
                println!("Result {}: no screenshot data", index + 1);
            }
            EntryOutcome::WriteFailed {
                filename, error, ..
            } => {
                println!("Error writing {}: {}", filename, error);
            }
        }
    }

    if report.extracted == 0 {
        println!("No screenshots found in the results");
    } else {
        println!(
            "Extracted {} screenshots to {}/",
            report.extracted,
            report.output_dir.display()
        );
    }
}
