//! Sequential per-extension pipeline: fetch, extract, download, hash, emit.

use std::io::Write;

use anyhow::{Context, Result};
use reqwest::Client;

use extpin_core::manifest::{self, ManifestEntry};
use extpin_core::types::ExtensionRef;
use extpin_core::{Reporter, fetch, hash, marketplace};

/// Drive every extension through the pipeline, writing one manifest block
/// per extension to `out` as soon as it is ready.
///
/// Strictly sequential: at most one extension's data is in flight. The
/// first failure aborts the whole batch; blocks already written stay on
/// the output stream.
///
/// # Errors
///
/// Returns the first fetch, extraction, hashing, or write failure, wrapped
/// with the extension it occurred on.
pub async fn run<R: Reporter>(
    client: &Client,
    marketplace_url: &str,
    extensions: &[ExtensionRef],
    reporter: &R,
    out: &mut impl Write,
) -> Result<()> {
    for ext in extensions {
        reporter.fetching(&ext.id);
        let page = fetch::get(
            client,
            &marketplace::item_url(marketplace_url, &ext.id),
            reporter,
        )
        .await
        .with_context(|| format!("failed to fetch item page for {}", ext.id))?;
        let html = page
            .text()
            .await
            .with_context(|| format!("failed to read item page for {}", ext.id))?;
        let meta = marketplace::extract(&html)
            .with_context(|| format!("failed to extract metadata for {}", ext.id))?;
        tracing::debug!(
            id = %ext.id,
            installed = %ext.version,
            latest = %meta.latest,
            "resolved latest version"
        );

        reporter.downloading(&ext.id, &meta.latest);
        let url =
            marketplace::download_url(marketplace_url, &ext.publisher, &ext.name, &meta.latest);
        let artifact = fetch::get(client, &url, reporter)
            .await
            .with_context(|| format!("failed to download {} {}", ext.id, meta.latest))?;
        let sha256 = hash::hash_response(artifact)
            .await
            .with_context(|| format!("failed to hash artifact for {}", ext.id))?;

        let entry = ManifestEntry {
            display_name: meta.display_name,
            publisher: ext.publisher.clone(),
            name: ext.name.clone(),
            latest: meta.latest,
            installed: ext.version.clone(),
            sha256,
        };
        out.write_all(manifest::render(&entry).as_bytes())
            .context("failed to write manifest entry")?;
    }

    Ok(())
}
