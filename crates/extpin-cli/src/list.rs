//! Installed-extension listing via the editor's own CLI.

use std::process::ExitStatus;

use extpin_core::types::{self, ExtensionRef};
use thiserror::Error;
use tokio::process::Command;

/// Errors from invoking the external extension lister.
#[derive(Error, Debug)]
pub enum ListError {
    /// The lister binary could not be spawned.
    #[error("failed to run {command}: {source}")]
    Spawn {
        /// The binary that was invoked.
        command: String,
        /// The underlying spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// The lister ran but exited unsuccessfully.
    #[error("{command} exited with {status}")]
    Failed {
        /// The binary that was invoked.
        command: String,
        /// Its exit status.
        status: ExitStatus,
    },
}

/// List installed extensions by running
/// `<code> --list-extensions --show-versions` and parsing its stdout.
///
/// # Errors
///
/// Fails when the binary cannot be spawned or exits non-zero.
pub async fn installed(code_bin: &str) -> Result<Vec<ExtensionRef>, ListError> {
    let output = Command::new(code_bin)
        .args(["--list-extensions", "--show-versions"])
        .output()
        .await
        .map_err(|source| ListError::Spawn {
            command: code_bin.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(ListError::Failed {
            command: code_bin.to_string(),
            status: output.status,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_lines(&stdout))
}

/// Parse explicit command-line tokens instead of querying the editor.
pub fn from_args(tokens: &[String]) -> Vec<ExtensionRef> {
    let mut extensions: Vec<ExtensionRef> = tokens.iter().map(|t| ExtensionRef::parse(t)).collect();
    types::sort_by_name(&mut extensions);
    extensions
}

fn parse_lines(text: &str) -> Vec<ExtensionRef> {
    let mut extensions: Vec<ExtensionRef> = text
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(ExtensionRef::parse)
        .collect();
    types::sort_by_name(&mut extensions);
    extensions
}
