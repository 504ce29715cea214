// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where catalogs come from, and how a running process swaps them.
//!
//! ```text
//!   FallbackSource
//!     ├── primary:   RowExportSource  (hosted store export)
//!     └── secondary: ManifestSource   (bundled static data)
//!                        │
//!                        ▼
//!                 SharedCatalog  ── snapshot() ──▶ Arc<Catalog>
//! ```
//!
//! A failed primary load is logged and the secondary is used. The directory
//! never goes dark because the hosted store is unreachable.

use super::manifest::{load_pages, CatalogManifest};
use super::rows::load_row_export;
use super::{load_manifest_dir, Catalog};
use crate::error::Result;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;

/// Anything that can produce a complete catalog.
pub trait ListingSource {
    /// Short name for logs.
    fn name(&self) -> &str;

    fn load(&self) -> Result<Catalog>;
}

// ============================================================================
// Static manifest directory
// ============================================================================

#[derive(Debug, Clone)]
pub struct ManifestSource {
    dir: PathBuf,
}

impl ManifestSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ListingSource for ManifestSource {
    fn name(&self) -> &str {
        "manifest"
    }

    fn load(&self) -> Result<Catalog> {
        load_manifest_dir(&self.dir)
    }
}

// ============================================================================
// Hosted store export
// ============================================================================

/// Listings from a row export, editorial pages from an optional manifest
/// directory. The manifest's own listing files are ignored.
#[derive(Debug, Clone)]
pub struct RowExportSource {
    rows: PathBuf,
    pages: Option<PathBuf>,
}

impl RowExportSource {
    pub fn new(rows: impl Into<PathBuf>) -> Self {
        Self {
            rows: rows.into(),
            pages: None,
        }
    }

    pub fn with_pages(mut self, dir: impl Into<PathBuf>) -> Self {
        self.pages = Some(dir.into());
        self
    }
}

impl ListingSource for RowExportSource {
    fn name(&self) -> &str {
        "rows"
    }

    fn load(&self) -> Result<Catalog> {
        let listings = load_row_export(&self.rows)?;
        tracing::info!(
            rows = %self.rows.display(),
            listings = listings.len(),
            "loaded row export"
        );
        match &self.pages {
            Some(dir) => {
                let manifest = CatalogManifest::read(dir)?;
                Catalog::with_pages(listings, load_pages(dir, &manifest)?)
            }
            None => Catalog::from_listings(listings),
        }
    }
}

// ============================================================================
// Fallback
// ============================================================================

/// Try `primary`; on any error, log it and load `secondary`.
#[derive(Debug, Clone)]
pub struct FallbackSource<P, S> {
    primary: P,
    secondary: S,
}

impl<P: ListingSource, S: ListingSource> FallbackSource<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: ListingSource, S: ListingSource> ListingSource for FallbackSource<P, S> {
    fn name(&self) -> &str {
        self.primary.name()
    }

    fn load(&self) -> Result<Catalog> {
        match self.primary.load() {
            Ok(catalog) => Ok(catalog),
            Err(e) => {
                tracing::warn!(
                    primary = self.primary.name(),
                    secondary = self.secondary.name(),
                    error = %e,
                    "primary catalog source failed, falling back"
                );
                self.secondary.load()
            }
        }
    }
}

// ============================================================================
// Shared snapshot
// ============================================================================

/// A catalog that readers share and a reloader replaces whole.
///
/// Readers take an `Arc` snapshot and keep using it; a reload never mutates
/// a catalog someone is ranking against.
#[derive(Debug, Default)]
pub struct SharedCatalog {
    current: RwLock<Arc<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.current.read())
    }

    /// Replace the snapshot.
    pub fn replace(&self, catalog: Catalog) {
        *self.current.write() = Arc::new(catalog);
    }

    /// Load from `source` and swap it in. On error the old snapshot stays.
    pub fn reload(&self, source: &dyn ListingSource) -> Result<Arc<Catalog>> {
        let catalog = Arc::new(source.load()?);
        *self.current.write() = Arc::clone(&catalog);
        tracing::info!(source = source.name(), listings = catalog.len(), "catalog reloaded");
        Ok(catalog)
    }
}
