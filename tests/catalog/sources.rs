//! Listing sources and the shared snapshot.

use super::common::{make_listing, write_catalog_dir};
use std::fs;
use tempfile::TempDir;
use toolshelf::{
    Category, FallbackSource, ListingSource, ManifestSource, RowExportSource, SharedCatalog,
};

const ONE_ROW: &str = r#"[{
    "slug": "langfuse", "name": "Langfuse",
    "short_description": "LLM observability", "description": "",
    "category": "infra", "status": "published"
}]"#;

fn static_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_catalog_dir(dir.path(), &[make_listing("Aider", Category::Agent)]);
    dir
}

#[test]
fn test_manifest_source() {
    let dir = static_dir();
    let source = ManifestSource::new(dir.path());
    assert_eq!(source.name(), "manifest");
    assert!(source.load().unwrap().contains("aider"));
}

#[test]
fn test_row_export_source_takes_pages_not_listings_from_dir() {
    let dir = static_dir();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{ "version": 1, "listings": ["listings.json"], "platforms": "platforms.json" }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("platforms.json"),
        r#"[{ "slug": "observability", "name": "Observability", "description": "",
              "toolSlugs": ["langfuse"] }]"#,
    )
    .unwrap();
    let rows = dir.path().join("tools.json");
    fs::write(&rows, ONE_ROW).unwrap();

    let catalog = RowExportSource::new(&rows)
        .with_pages(dir.path())
        .load()
        .unwrap();
    assert!(catalog.contains("langfuse"));
    assert!(!catalog.contains("aider"));

    let names: Vec<&str> = catalog
        .platform_listings("observability")
        .unwrap()
        .iter()
        .map(|l| l.name.as_str())
        .collect();
    assert_eq!(names, vec!["Langfuse"]);
}

#[test]
fn test_fallback_to_static_data() {
    let dir = static_dir();
    let source = FallbackSource::new(
        RowExportSource::new(dir.path().join("missing-export.json")),
        ManifestSource::new(dir.path()),
    );
    let catalog = source.load().unwrap();
    assert!(catalog.contains("aider"));
}

#[test]
fn test_fallback_prefers_working_primary() {
    let dir = static_dir();
    let rows = dir.path().join("tools.json");
    fs::write(&rows, ONE_ROW).unwrap();

    let source = FallbackSource::new(RowExportSource::new(&rows), ManifestSource::new(dir.path()));
    let catalog = source.load().unwrap();
    assert!(catalog.contains("langfuse"));
    assert!(!catalog.contains("aider"));
}

#[test]
fn test_both_sources_failing_is_an_error() {
    let dir = TempDir::new().unwrap();
    let source = FallbackSource::new(
        RowExportSource::new(dir.path().join("a.json")),
        ManifestSource::new(dir.path().join("nowhere")),
    );
    assert!(source.load().is_err());
}

#[test]
fn test_reload_swaps_snapshot() {
    let dir = static_dir();
    let shared = SharedCatalog::default();
    assert!(shared.snapshot().is_empty());

    let held = shared.snapshot();
    shared.reload(&ManifestSource::new(dir.path())).unwrap();
    assert!(held.is_empty());
    assert!(shared.snapshot().contains("aider"));
}
