//! Catalog loading errors.
//!
//! The ranking engine itself cannot fail; everything here comes from reading
//! and checking catalog data.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A catalog file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is not valid JSON for its expected shape
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two listings share a slug
    #[error("duplicate listing slug '{0}'")]
    DuplicateSlug(String),

    /// Manifest version this build does not understand
    #[error("unsupported manifest version {0}")]
    UnsupportedVersion(u32),

    /// Requested slug is not in the catalog
    #[error("not found: {0}")]
    NotFound(String),
}
