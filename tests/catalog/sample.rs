//! The bundled sample catalog loads and answers lookups.

use super::common::{listing_names, SAMPLE_CATALOG};
use std::path::Path;
use toolshelf::{load_manifest_dir, Category, Query, SIMILAR_LIMIT};

fn sample() -> toolshelf::Catalog {
    load_manifest_dir(Path::new(SAMPLE_CATALOG)).unwrap()
}

#[test]
fn test_sample_loads_with_pages() {
    let catalog = sample();
    let stats = catalog.stats();
    assert_eq!(stats.total_listings, catalog.len());
    assert!(stats.total_mcp_servers >= 1);
    assert!(stats.total_categories >= 1);
    assert!(stats.total_comparisons >= 1);
}

#[test]
fn test_every_page_reference_resolves() {
    let catalog = sample();
    for page in catalog.categories() {
        for slug in &page.tool_slugs {
            assert!(catalog.contains(slug), "{} -> {}", page.slug, slug);
        }
    }
    for page in catalog.comparisons() {
        assert!(catalog.comparison(&page.slug).is_some(), "{}", page.slug);
    }
    for platform in catalog.platforms() {
        for slug in &platform.tool_slugs {
            assert!(catalog.contains(slug), "{} -> {}", platform.slug, slug);
        }
    }
    for listicle in catalog.listicles() {
        for slug in &listicle.category_slugs {
            assert!(catalog.category_page(slug).is_some(), "{} -> {}", listicle.slug, slug);
        }
    }
}

#[test]
fn test_sample_framework_search() {
    let catalog = sample();
    let results = catalog.search(&Query::new("framework").with_category(Category::Framework));
    // Category and short-description match plus the premium bonus
    assert_eq!(results.hits[0].listing.slug, "llamaindex");
}

#[test]
fn test_sample_category_page_is_sponsorship_ordered() {
    let catalog = sample();
    let listings = catalog.category_listings("best-vector-databases").unwrap();
    // Legacy "featured" tier ranks like category sponsorship
    assert_eq!(listing_names(&listings), vec!["Pinecone", "ChromaDB", "Qdrant"]);
}

#[test]
fn test_sample_roundup_merges_pages_once() {
    let catalog = sample();
    let listings = catalog.listicle_listings("best-ai-agent-frameworks").unwrap();
    // LangChain sits on both category pages but is listed once
    assert_eq!(
        listing_names(&listings),
        vec!["LlamaIndex", "CrewAI", "LangChain", "AutoGen", "Haystack"]
    );
    assert!(catalog.listicle_listings("best-nothing").is_none());
}

#[test]
fn test_sample_roundup_custom_section() {
    let catalog = sample();
    let listicle = catalog.listicle("best-mcp-servers-for-2025").unwrap();
    assert!(listicle.custom_section.is_some());
    assert_eq!(catalog.listicle_listings(&listicle.slug).unwrap().len(), 5);
    assert_eq!(catalog.stats().total_listicles, 3);
}

#[test]
fn test_sample_listing_context() {
    let catalog = sample();
    let context = catalog.listing_context("langchain").unwrap();

    let comparisons: Vec<&str> = context.comparisons.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(comparisons, vec!["langchain-vs-llamaindex"]);

    let pages: Vec<&str> = context.category_pages.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(pages, vec!["best-multi-agent-frameworks", "best-llm-frameworks"]);

    assert_eq!(listing_names(&context.similar), vec!["LlamaIndex", "Haystack"]);
}

#[test]
fn test_sample_similar_is_capped_and_excludes_self() {
    let catalog = sample();
    let similar = catalog.similar("mcp-slack", SIMILAR_LIMIT);
    assert_eq!(similar.len(), SIMILAR_LIMIT);
    assert!(similar.iter().all(|l| l.slug != "mcp-slack"));
    assert!(similar.iter().all(|l| l.category == Category::McpServer));
    // Basic tier first, then the featured GitHub server
    assert_eq!(similar[0].slug, "mcp-postgres");
    assert_eq!(similar[1].slug, "mcp-github");
    assert!(catalog.similar("no-such-tool", SIMILAR_LIMIT).is_empty());
}

#[test]
fn test_sample_unlinked_listing_has_no_context() {
    let catalog = sample();
    let context = catalog.listing_context("groq").unwrap();
    assert!(context.comparisons.is_empty());
    assert!(context.category_pages.is_empty());
    assert!(context.similar.is_empty());
    assert!(catalog.listing_context("no-such-tool").is_err());
}
