//! extpin - CLI entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use extpin_cli::{Cli, console, list, pipeline};

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics share stderr with progress lines; stdout is reserved for
    // the manifest blocks.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let extensions = if cli.extensions.is_empty() {
        list::installed(&cli.code).await?
    } else {
        list::from_args(&cli.extensions)
    };

    let client = reqwest::Client::new();
    let mut stdout = std::io::stdout();
    pipeline::run(
        &client,
        &cli.marketplace,
        &extensions,
        &console::Console,
        &mut stdout,
    )
    .await
}
