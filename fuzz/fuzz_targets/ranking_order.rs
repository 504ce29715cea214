// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking invariants.
//!
//! Arbitrary listings, arbitrary query text (any Unicode, any case). The
//! ranking must never panic, never include a listing without textual
//! relevance, and always come out in the documented order.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use toolshelf::scoring::ranking::compare_ranked;
use toolshelf::scoring::MAX_COMMERCIAL_BONUS;
use toolshelf::testing::make_sponsored;
use toolshelf::{rank_by_relevance, Category, Listing, SponsorTier};

#[derive(Arbitrary, Debug)]
struct FuzzListing {
    name: String,
    short_description: String,
    description: String,
    category: u8,
    tier: u8,
    featured: bool,
    tags: Vec<String>,
}

#[derive(Arbitrary, Debug)]
struct Input {
    listings: Vec<FuzzListing>,
    query: String,
}

const TIERS: [SponsorTier; 5] = [
    SponsorTier::None,
    SponsorTier::Basic,
    SponsorTier::Category,
    SponsorTier::Premium,
    SponsorTier::LegacyFeatured,
];

fn build(i: usize, raw: FuzzListing) -> Listing {
    let category = Category::ALL[raw.category as usize % Category::ALL.len()];
    let tier = TIERS[raw.tier as usize % TIERS.len()];
    let mut listing = make_sponsored(&raw.name, category, tier, raw.featured);
    listing.slug = format!("fuzz-{}", i);
    listing.short_description = raw.short_description;
    listing.description = raw.description;
    listing.subcategories = raw.tags.clone();
    listing.use_cases = raw.tags.clone();
    listing.integrations = raw.tags;
    listing
}

fuzz_target!(|input: Input| {
    // Cap sizes to avoid timeouts
    let listings: Vec<Listing> = input
        .listings
        .into_iter()
        .take(64)
        .enumerate()
        .map(|(i, raw)| build(i, raw))
        .collect();
    let query: String = input.query.chars().take(64).collect();

    let hits = rank_by_relevance(&listings, &query);

    if query.trim().is_empty() {
        // INVARIANT: empty query keeps everything
        assert_eq!(hits.len(), listings.len());
        return;
    }

    for hit in &hits {
        // INVARIANT: threshold is on relevance alone
        assert!(hit.relevance > 0, "zero-relevance hit {:?}", hit.listing.slug);
        // INVARIANT: bonus bounded
        assert!(hit.score - hit.relevance <= MAX_COMMERCIAL_BONUS);
    }

    // INVARIANT: output sorted by the ranking comparator
    for pair in hits.windows(2) {
        assert_ne!(
            compare_ranked(&pair[0], &pair[1]),
            std::cmp::Ordering::Greater,
            "out of order: {:?} before {:?}",
            pair[0].listing.slug,
            pair[1].listing.slug
        );
    }
});
