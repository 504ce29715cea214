//! Hosted-store row exports.

use std::fs;
use tempfile::TempDir;
use toolshelf::{load_row_export, Category, CatalogError, SponsorTier};

const EXPORT: &str = r#"[
    {
        "slug": "weaviate", "name": "Weaviate",
        "short_description": "Vector database with hybrid search",
        "description": "Open-source vector database",
        "category": "infra",
        "subcategories": ["Vector Database"], "use_cases": null, "integrations": null,
        "pros": null, "cons": null,
        "pricing_model": "Freemium", "github_stars": 11000,
        "featured": null, "sponsored_tier": "category",
        "setup_complexity": "Medium", "maturity": "Mature",
        "status": "published"
    },
    {
        "slug": "agent-forge-1700000000", "name": "Agent Forge",
        "short_description": "Build agents fast", "description": "Build agents fast",
        "category": "agent", "status": "pending_review"
    },
    {
        "slug": "anything-mcp", "name": "Anything MCP",
        "short_description": "Bridge to anything", "description": "",
        "category": "mcp-server", "status": "published"
    },
    {
        "slug": "retired", "name": "Retired Tool",
        "short_description": "", "description": "",
        "category": "platform"
    }
]"#;

#[test]
fn test_only_published_rows_ordered_by_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tools.json");
    fs::write(&path, EXPORT).unwrap();

    let listings = load_row_export(&path).unwrap();
    let names: Vec<&str> = listings.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Anything MCP", "Weaviate"]);
}

#[test]
fn test_row_fields_map_to_listing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tools.json");
    fs::write(&path, EXPORT).unwrap();

    let listings = load_row_export(&path).unwrap();
    let weaviate = listings.iter().find(|l| l.slug == "weaviate").unwrap();
    assert_eq!(weaviate.category, Category::Infra);
    assert_eq!(weaviate.subcategories, vec!["Vector Database".to_string()]);
    assert!(weaviate.use_cases.is_empty());
    assert!(weaviate.pros.is_empty());
    assert_eq!(weaviate.github_stars, Some(11000));
    assert_eq!(weaviate.sponsored_tier, SponsorTier::Category);
    assert!(!weaviate.featured);

    let bridge = listings.iter().find(|l| l.slug == "anything-mcp").unwrap();
    assert_eq!(bridge.category, Category::McpServer);
    assert_eq!(bridge.sponsored_tier, SponsorTier::None);
}

#[test]
fn test_missing_export_is_io_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        load_row_export(&dir.path().join("absent.json")),
        Err(CatalogError::Io { .. })
    ));
}
