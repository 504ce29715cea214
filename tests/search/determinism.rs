//! Ranking is a pure function of (listings, query).

use super::common::{make_listing, make_sponsored, slugs};
use std::sync::Arc;
use std::thread;
use toolshelf::{rank_by_relevance, Catalog, Category, Listing, Query, SharedCatalog, SponsorTier};

fn mixed_listings() -> Vec<Listing> {
    vec![
        make_sponsored("Agent Ops", Category::Infra, SponsorTier::Basic, false),
        make_listing("AgentGPT", Category::Agent),
        make_sponsored("Agent Zero", Category::Agent, SponsorTier::None, true),
        make_sponsored("Super Agent", Category::Agent, SponsorTier::Premium, false),
        make_listing("Agentic", Category::Framework),
        make_sponsored("Agent Hub", Category::Platform, SponsorTier::LegacyFeatured, false),
    ]
}

#[test]
fn test_idempotent() {
    let listings = mixed_listings();
    for query in ["agent", "", "hub", "nothing"] {
        let first = rank_by_relevance(&listings, query);
        let second = rank_by_relevance(&listings, query);
        assert_eq!(slugs(&first), slugs(&second), "query {:?}", query);
    }
}

#[test]
fn test_input_order_does_not_matter() {
    let listings = mixed_listings();
    let mut reversed = listings.clone();
    reversed.reverse();

    for query in ["agent", ""] {
        assert_eq!(
            slugs(&rank_by_relevance(&listings, query)),
            slugs(&rank_by_relevance(&reversed, query)),
            "query {:?}",
            query
        );
    }
}

#[test]
fn test_input_is_not_mutated() {
    let listings = mixed_listings();
    let before = listings.clone();
    let _ = rank_by_relevance(&listings, "agent");
    assert_eq!(listings, before);
}

#[test]
fn test_concurrent_readers_agree() {
    let shared = Arc::new(SharedCatalog::new(
        Catalog::from_listings(mixed_listings()).unwrap(),
    ));
    let expected: Vec<String> = shared
        .snapshot()
        .search(&Query::new("agent"))
        .hits
        .iter()
        .map(|h| h.listing.slug.clone())
        .collect();

    thread::scope(|scope| {
        for _ in 0..4 {
            let shared = Arc::clone(&shared);
            let expected = &expected;
            scope.spawn(move || {
                let snapshot = shared.snapshot();
                let got: Vec<String> = snapshot
                    .search(&Query::new("agent"))
                    .hits
                    .iter()
                    .map(|h| h.listing.slug.clone())
                    .collect();
                assert_eq!(&got, expected);
            });
        }
    });
}
