//! The relevance threshold: sponsorship never buys inclusion.

use super::common::{framework_scenario, make_sponsored};
use toolshelf::{commercial_bonus, rank_by_relevance, relevance_score, Category, SponsorTier};

#[test]
fn test_bonus_alone_does_not_match() {
    let listings = vec![make_sponsored(
        "Devin",
        Category::Agent,
        SponsorTier::Premium,
        true,
    )];
    assert!(rank_by_relevance(&listings, "kubernetes").is_empty());
}

#[test]
fn test_hits_carry_relevance_plus_bonus() {
    let listings = framework_scenario();
    for hit in rank_by_relevance(&listings, "lla") {
        assert!(hit.relevance > 0);
        assert_eq!(hit.relevance, relevance_score(hit.listing, "lla"));
        assert_eq!(hit.score, hit.relevance + commercial_bonus(hit.listing));
    }
}

#[test]
fn test_crewai_excluded_from_framework_query() {
    let listings = framework_scenario();
    let hits = rank_by_relevance(&listings, "framework");
    assert!(hits.iter().all(|h| h.listing.name != "CrewAI"));
}

#[test]
fn test_no_match_is_empty_not_error() {
    let listings = framework_scenario();
    assert!(rank_by_relevance(&listings, "zzzz").is_empty());
}

#[test]
fn test_empty_collection() {
    assert!(rank_by_relevance(&[], "anything").is_empty());
    assert!(rank_by_relevance(&[], "").is_empty());
}
