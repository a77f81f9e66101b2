//! Operator-facing progress lines on stderr.

use extpin_core::Reporter;

/// Writes progress notices to stderr, keeping stdout for manifest output.
pub struct Console;

impl Reporter for Console {
    fn fetching(&self, id: &str) {
        eprintln!("Fetching data for extension {id}...");
    }

    fn downloading(&self, id: &str, version: &str) {
        eprintln!("Downloading {id}-{version}.vsix...");
    }

    fn waiting(&self, secs: u64) {
        eprintln!("Waiting for {secs} seconds, then retrying...");
    }
}
