// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: from a listing snapshot and a query to the sequence to display.
//!
//! Everything here is a pure function of its input. No I/O, no mutation, no
//! shared state, so concurrent requests need no coordination.
//!
//! ```text
//! listings ──▶ score ──▶ threshold (relevance > 0) ──▶ sort ──▶ category subset
//!                                 │                         │
//!                  skipped for an empty query      score desc, then
//!                                                  tier, featured, name, slug
//! ```

pub mod facets;
mod query;

pub use facets::{category_facets, CategoryFacet};
pub use query::Query;

use crate::contracts::{check_ranked_order, check_sponsor_order, check_threshold};
use crate::scoring::ranking::{compare_ranked, compare_sponsorship};
use crate::scoring::score_listing;
use crate::types::{Listing, RankedListing};
use serde::Serialize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rank listings against free text.
///
/// - Empty (after trimming) query: every listing, score 0, in sponsorship order.
/// - Otherwise: only listings with textual relevance, sorted by score
///   descending with the sponsorship order breaking ties.
pub fn rank_by_relevance<'a>(listings: &'a [Listing], query: &str) -> Vec<RankedListing<'a>> {
    let needle = crate::utils::normalize(query);

    if needle.is_empty() {
        return order_by_sponsorship(listings)
            .into_iter()
            .map(|listing| RankedListing {
                listing,
                score: 0,
                relevance: 0,
            })
            .collect();
    }

    let mut ranked = score_all(listings, &needle);
    ranked.sort_by(compare_ranked);

    check_threshold(&ranked);
    check_ranked_order(&ranked);
    ranked
}

/// Score and threshold every listing. Order of the output is unspecified.
#[cfg(feature = "parallel")]
fn score_all<'a>(listings: &'a [Listing], needle: &str) -> Vec<RankedListing<'a>> {
    listings
        .par_iter()
        .filter_map(|listing| scored(listing, needle))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all<'a>(listings: &'a [Listing], needle: &str) -> Vec<RankedListing<'a>> {
    listings
        .iter()
        .filter_map(|listing| scored(listing, needle))
        .collect()
}

#[inline]
fn scored<'a>(listing: &'a Listing, needle: &str) -> Option<RankedListing<'a>> {
    let score = score_listing(listing, needle);
    score.is_match().then(|| RankedListing {
        listing,
        score: score.total(),
        relevance: score.relevance,
    })
}

/// Order listings for placement with no text query.
///
/// Tier priority descending, then featured first, then name, then slug.
pub fn order_by_sponsorship(listings: &[Listing]) -> Vec<&Listing> {
    sort_by_sponsorship(listings)
}

/// Collect any subset of listings into sponsorship order.
///
/// Every sponsorship-ordered view goes through here so the order contract is
/// checked once, after sorting.
pub fn sort_by_sponsorship<'a, I>(listings: I) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut ordered: Vec<&Listing> = listings.into_iter().collect();
    ordered.sort_by(|a, b| compare_sponsorship(a, b));
    check_sponsor_order(&ordered);
    ordered
}

/// Featured listings in sponsorship order.
pub fn featured_listings(listings: &[Listing]) -> Vec<&Listing> {
    sort_by_sponsorship(listings.iter().filter(|l| l.featured))
}

/// Everything a results page needs from one query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<'a> {
    pub query: Query,
    /// Ranked hits after the category filter.
    pub hits: Vec<RankedListing<'a>>,
    /// Counts per category before the category filter.
    pub facets: Vec<CategoryFacet>,
    /// Number of hits before the category filter.
    pub total: usize,
}

/// Rank, then narrow to the requested category.
///
/// The category filter runs after ordering and only removes entries, so the
/// survivors keep their relative order.
pub fn search<'a>(listings: &'a [Listing], query: &Query) -> SearchResults<'a> {
    let ranked = rank_by_relevance(listings, &query.text);
    let facets = category_facets(&ranked);
    let total = ranked.len();

    let hits = match query.category {
        Some(category) => ranked
            .into_iter()
            .filter(|hit| hit.listing.category == category)
            .collect(),
        None => ranked,
    };

    SearchResults {
        query: query.clone(),
        hits,
        facets,
        total,
    }
}
