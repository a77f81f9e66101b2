//! extpin - pin installed VS Code extensions as Nix manifest entries.
//!
//! Lists locally installed extensions (or takes them as arguments), asks the
//! marketplace for each one's latest published version, downloads the
//! `.vsix` artifact, and writes one Nix attrset per extension to stdout with
//! the artifact's SHA-256 digest. Progress goes to stderr; stdout carries
//! only the manifest blocks.

pub mod console;
pub mod list;
pub mod pipeline;

use clap::Parser;

/// Command-line surface.
#[derive(Debug, Parser)]
#[command(name = "extpin")]
#[command(author, version, about = "Emit Nix manifest snippets for installed VS Code extensions")]
pub struct Cli {
    /// Explicit publisher.name@version tokens; queries the editor when empty
    pub extensions: Vec<String>,

    /// Editor binary used to list installed extensions
    #[arg(long, default_value = "code")]
    pub code: String,

    /// Marketplace base URL
    #[arg(long, default_value = extpin_core::marketplace::DEFAULT_HOST)]
    pub marketplace: String,
}
