//! Category filtering and facets.

use super::common::{make_listing, make_sponsored, names};
use toolshelf::{search, Category, CategoryFacet, Query, SponsorTier};

fn kit_listings() -> Vec<toolshelf::Listing> {
    vec![
        make_listing("Toolkit", Category::Agent),
        make_listing("Agent Kit", Category::Framework),
        make_listing("Kitchen", Category::Infra),
        make_listing("Kit Agent", Category::Agent),
    ]
}

#[test]
fn test_unfiltered_order() {
    let listings = kit_listings();
    let results = search(&listings, &Query::new("kit"));
    // Prefix matches (80) first, then substring matches (60)
    assert_eq!(
        names(&results.hits),
        vec!["Kit Agent", "Kitchen", "Agent Kit", "Toolkit"]
    );
    assert_eq!(results.total, 4);
}

#[test]
fn test_filter_keeps_relative_order() {
    let listings = kit_listings();
    let results = search(&listings, &Query::new("kit").with_category(Category::Agent));
    assert_eq!(names(&results.hits), vec!["Kit Agent", "Toolkit"]);
    assert_eq!(results.total, 4);
}

#[test]
fn test_facets_count_unfiltered_hits_in_first_appearance_order() {
    let listings = kit_listings();
    let results = search(&listings, &Query::new("kit").with_category(Category::Infra));

    assert_eq!(
        results.facets,
        vec![
            CategoryFacet {
                category: Category::Agent,
                count: 2
            },
            CategoryFacet {
                category: Category::Infra,
                count: 1
            },
            CategoryFacet {
                category: Category::Framework,
                count: 1
            },
        ]
    );
    let sum: usize = results.facets.iter().map(|f| f.count).sum();
    assert_eq!(sum, results.total);
}

#[test]
fn test_filter_with_empty_query_is_category_in_sponsorship_order() {
    let listings = vec![
        make_listing("Qdrant", Category::Infra),
        make_listing("Aider", Category::Agent),
        make_sponsored("Pinecone", Category::Infra, SponsorTier::Premium, false),
    ];
    let results = search(&listings, &Query::new("").with_category(Category::Infra));
    assert_eq!(names(&results.hits), vec!["Pinecone", "Qdrant"]);
}

#[test]
fn test_filter_with_no_hits_in_category() {
    let listings = kit_listings();
    let results = search(&listings, &Query::new("kit").with_category(Category::Platform));
    assert!(results.hits.is_empty());
    assert_eq!(results.total, 4);
}

#[test]
fn test_query_params() {
    let query = Query::from_params(Some("kit"), Some("mcp server")).unwrap();
    assert_eq!(query.category, Some(Category::McpServer));

    let query = Query::from_params(None, None).unwrap();
    assert!(query.is_empty());
    assert_eq!(query.category, None);

    assert!(Query::from_params(Some("kit"), Some("databases")).is_err());
}
