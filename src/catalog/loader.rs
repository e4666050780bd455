// SPDX-License-Identifier: MPL-2.0
//! Catalog loading: one-shot fetch with an embedded fallback snapshot.
//!
//! The catalog is fetched at most once per session. Any failure — transport
//! error, non-success status, malformed document — falls back immediately to
//! the snapshot bundled into the binary, so startup never surfaces a
//! catalog error to the user. There are no retries and no timeout beyond
//! what the transport itself imposes.

use crate::catalog::{Catalog, CatalogDocument, MediaItem};
use crate::error::{Error, Result};
use crate::query::engine;
use crate::query::SortMode;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

const EMBEDDED_CATALOG: &str = "catalog.json";

/// Parses a catalog document and returns its items in document order.
///
/// # Errors
///
/// Returns an error if the document is not valid JSON or does not match the
/// catalog shape.
pub fn parse_catalog_document(content: &str) -> Result<Vec<MediaItem>> {
    let document: CatalogDocument = serde_json::from_str(content)?;
    Ok(document.items)
}

/// Returns the catalog built from the embedded snapshot.
///
/// The snapshot is compiled into the binary; a broken snapshot is a build
/// defect, but even then this degrades to an empty catalog rather than
/// panicking.
#[must_use]
pub fn embedded_catalog() -> Catalog {
    match embedded_items() {
        Ok(items) => build_catalog(items),
        Err(err) => {
            eprintln!("Embedded catalog snapshot is unusable: {err}");
            Catalog::default()
        }
    }
}

/// Loads the catalog from `url`, falling back to the embedded snapshot on
/// any failure. With no URL the embedded snapshot is used directly.
pub async fn load_catalog(url: Option<&str>) -> Catalog {
    if let Some(url) = url {
        match fetch_items(url).await {
            Ok(items) => return build_catalog(items),
            Err(err) => {
                eprintln!("Catalog fetch failed, using embedded snapshot: {err}");
            }
        }
    }
    embedded_catalog()
}

async fn fetch_items(url: &str) -> Result<Vec<MediaItem>> {
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(Error::Catalog(format!(
            "catalog fetch returned status {}",
            response.status()
        )));
    }
    let document: CatalogDocument = response.json().await?;
    Ok(document.items)
}

fn embedded_items() -> Result<Vec<MediaItem>> {
    let asset = Assets::get(EMBEDDED_CATALOG)
        .ok_or_else(|| Error::Catalog("embedded catalog snapshot missing".to_string()))?;
    let content = std::str::from_utf8(asset.data.as_ref())
        .map_err(|err| Error::Catalog(err.to_string()))?;
    parse_catalog_document(content)
}

/// Catalog order is newest-first at load time, matching the default sort.
fn build_catalog(mut items: Vec<MediaItem>) -> Catalog {
    items.sort_by(|a, b| engine::compare_items(a, b, SortMode::Newest));
    Catalog::from_items(items)
}
