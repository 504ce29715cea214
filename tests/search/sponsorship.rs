//! Sponsorship ordering and the empty-query law.

use super::common::{listing_names, make_listing, make_sponsored, names};
use toolshelf::{featured_listings, order_by_sponsorship, rank_by_relevance, Category, SponsorTier};

#[test]
fn test_tier_then_featured_then_name() {
    let listings = vec![
        make_sponsored("Plain", Category::Agent, SponsorTier::None, false),
        make_sponsored("Basic", Category::Agent, SponsorTier::Basic, false),
        make_sponsored("Legacy", Category::Agent, SponsorTier::LegacyFeatured, false),
        make_sponsored("Premium", Category::Agent, SponsorTier::Premium, false),
        make_sponsored("Flagged", Category::Agent, SponsorTier::None, true),
        make_sponsored("Cat", Category::Agent, SponsorTier::Category, false),
    ];
    let ordered = order_by_sponsorship(&listings);
    assert_eq!(
        listing_names(&ordered),
        vec!["Premium", "Cat", "Legacy", "Basic", "Flagged", "Plain"]
    );
}

#[test]
fn test_name_order_is_byte_order() {
    let listings = vec![
        make_listing("alpha", Category::Agent),
        make_listing("Beta", Category::Agent),
    ];
    let ordered = order_by_sponsorship(&listings);
    assert_eq!(listing_names(&ordered), vec!["Beta", "alpha"]);
}

#[test]
fn test_duplicate_names_ordered_by_slug() {
    let mut first = make_listing("Echo", Category::Agent);
    first.slug = "echo-b".to_string();
    let mut second = make_listing("Echo", Category::Agent);
    second.slug = "echo-a".to_string();
    let listings = vec![first, second];

    let slugs: Vec<&str> = order_by_sponsorship(&listings)
        .iter()
        .map(|l| l.slug.as_str())
        .collect();
    assert_eq!(slugs, vec!["echo-a", "echo-b"]);
}

#[test]
fn test_empty_query_returns_everything_in_sponsorship_order() {
    let listings = vec![
        make_listing("Zed", Category::Agent),
        make_sponsored("Aider", Category::Agent, SponsorTier::Basic, false),
        make_sponsored("Cline", Category::Agent, SponsorTier::None, true),
    ];
    for query in ["", "   "] {
        let hits = rank_by_relevance(&listings, query);
        assert_eq!(names(&hits), vec!["Aider", "Cline", "Zed"]);
        assert!(hits.iter().all(|h| h.score == 0 && h.relevance == 0));
    }
}

#[test]
fn test_featured_flag_without_tier() {
    // The flag alone earns the bonus and the placement
    let listings = vec![
        make_listing("Framework A", Category::Framework),
        make_sponsored("Framework B", Category::Framework, SponsorTier::None, true),
    ];
    let hits = rank_by_relevance(&listings, "framework");
    assert_eq!(names(&hits), vec!["Framework B", "Framework A"]);
    assert_eq!(hits[0].score, hits[1].score + 2);
}

#[test]
fn test_featured_listings() {
    let listings = vec![
        make_sponsored("Zed", Category::Agent, SponsorTier::None, true),
        make_sponsored("Aider", Category::Agent, SponsorTier::Premium, false),
        make_sponsored("Cline", Category::Agent, SponsorTier::Basic, true),
    ];
    let featured = featured_listings(&listings);
    assert_eq!(listing_names(&featured), vec!["Cline", "Zed"]);
}
