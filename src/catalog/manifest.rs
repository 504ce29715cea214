// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Static catalog directories.
//!
//! A directory holds a `manifest.json` naming the data files:
//!
//! ```json
//! {
//!   "version": 1,
//!   "listings": ["agents.json", "frameworks.json"],
//!   "categories": "categories.json",
//!   "comparisons": "comparisons.json",
//!   "platforms": "platforms.json",
//!   "listicles": "listicles.json"
//! }
//! ```
//!
//! Each listings file is a JSON array of listings. The editorial files are
//! optional; a missing entry means "none".

use super::{Catalog, EditorialPages};
use crate::error::{CatalogError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Manifest file name inside a catalog directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Highest manifest version this build reads.
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Deserialize, Clone, Debug)]
pub struct CatalogManifest {
    pub version: u32,
    pub listings: Vec<String>,
    #[serde(default)]
    pub categories: Option<String>,
    #[serde(default)]
    pub comparisons: Option<String>,
    #[serde(default)]
    pub platforms: Option<String>,
    #[serde(default)]
    pub listicles: Option<String>,
}

impl CatalogManifest {
    pub fn read(dir: &Path) -> Result<Self> {
        let manifest: CatalogManifest = read_json(&dir.join(MANIFEST_FILE))?;
        if manifest.version == 0 || manifest.version > MANIFEST_VERSION {
            return Err(CatalogError::UnsupportedVersion(manifest.version));
        }
        Ok(manifest)
    }
}

/// Read a JSON file into `T`, tagging errors with the path.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional<T: DeserializeOwned>(dir: &Path, file: Option<&String>) -> Result<Vec<T>> {
    match file {
        Some(file) => read_json(&dir.join(file)),
        None => Ok(Vec::new()),
    }
}

/// Load every listing file named by the manifest, in manifest order.
fn load_listing_files(dir: &Path, manifest: &CatalogManifest) -> Result<Vec<crate::Listing>> {
    let mut listings = Vec::new();
    for file in &manifest.listings {
        let batch: Vec<crate::Listing> = read_json(&dir.join(file))?;
        tracing::debug!(file = %file, count = batch.len(), "loaded listings");
        listings.extend(batch);
    }
    Ok(listings)
}

/// Load the editorial pages named by the manifest.
pub(crate) fn load_pages(dir: &Path, manifest: &CatalogManifest) -> Result<EditorialPages> {
    Ok(EditorialPages {
        categories: read_optional(dir, manifest.categories.as_ref())?,
        comparisons: read_optional(dir, manifest.comparisons.as_ref())?,
        platforms: read_optional(dir, manifest.platforms.as_ref())?,
        listicles: read_optional(dir, manifest.listicles.as_ref())?,
    })
}

/// Load and validate a whole catalog directory.
pub fn load_manifest_dir(dir: &Path) -> Result<Catalog> {
    let manifest = CatalogManifest::read(dir)?;
    let listings = load_listing_files(dir, &manifest)?;
    let pages = load_pages(dir, &manifest)?;
    tracing::info!(
        dir = %dir.display(),
        listings = listings.len(),
        "loaded static catalog"
    );
    Catalog::with_pages(listings, pages)
}
