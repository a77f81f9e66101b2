//! Marketplace item-page URLs and metadata extraction.
//!
//! The item page embeds a JSON blob describing the published versions of an
//! extension. The feed is trusted: the first entry of the list is taken as
//! the latest version, with no re-sorting or semver validation.

use scraper::{Html, Selector};
use serde::Deserialize;
use thiserror::Error;

/// Base URL of the Visual Studio Marketplace.
pub const DEFAULT_HOST: &str = "https://marketplace.visualstudio.com";

/// Item page URL for an extension identifier.
pub fn item_url(base: &str, id: &str) -> String {
    format!("{}/items?itemName={id}", base.trim_end_matches('/'))
}

/// Download URL for a specific published version of an extension.
pub fn download_url(base: &str, publisher: &str, name: &str, version: &str) -> String {
    format!(
        "{}/_apis/public/gallery/publishers/{publisher}/vsextensions/{name}/{version}/vspackage",
        base.trim_end_matches('/')
    )
}

/// One published version record in the gallery metadata blob.
#[derive(Debug, Deserialize)]
pub struct GalleryVersion {
    /// Version string as published.
    #[serde(default)]
    pub version: String,
}

/// The gallery metadata blob embedded in an item page, newest version first.
#[derive(Debug, Deserialize)]
pub struct GalleryData {
    /// Published versions, ordered descending by recency.
    #[serde(rename = "Versions", default)]
    pub versions: Vec<GalleryVersion>,
}

/// Metadata pulled out of an item page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    /// Human-readable extension name; empty when the page carries none.
    pub display_name: String,
    /// Latest published version per the gallery feed.
    pub latest: String,
}

/// Errors produced while extracting metadata from an item page.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The version metadata element is absent from the page.
    #[error("version metadata not found in item page")]
    MetadataMissing,

    /// The metadata element did not contain valid gallery JSON.
    #[error("invalid version metadata: {0}")]
    Json(#[from] serde_json::Error),

    /// The decoded version list is empty.
    #[error("version list is empty")]
    NoVersions,
}

/// Extract the display name and latest version from an item page.
///
/// The display name is the trimmed text of the first `.ux-item-name`
/// element; a page without one yields an empty string, not an error. The
/// version list comes from the first `.rhs-content .jiContent` element.
///
/// # Errors
///
/// Fails when the metadata element is missing, its JSON is malformed, or
/// the version list is empty.
pub fn extract(html: &str) -> Result<PageMetadata, ExtractError> {
    let document = Html::parse_document(html);

    let name_selector = Selector::parse(".ux-item-name").expect("static selector");
    let display_name = document
        .select(&name_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let meta_selector = Selector::parse(".rhs-content .jiContent").expect("static selector");
    let raw = document
        .select(&meta_selector)
        .next()
        .ok_or(ExtractError::MetadataMissing)?
        .text()
        .collect::<String>();

    let data: GalleryData = serde_json::from_str(&raw)?;
    let latest = data
        .versions
        .first()
        .ok_or(ExtractError::NoVersions)?
        .version
        .clone();

    Ok(PageMetadata {
        display_name,
        latest,
    })
}
