//! Runtime contracts for ranking output.
//!
//! Debug-mode assertions that check the ordering laws the presentation layer
//! relies on. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail **at the ranking call** instead of on a rendered page
//!
//! # Contracts
//!
//! | Contract Function     | Law                                                |
//! |-----------------------|----------------------------------------------------|
//! | `check_threshold`     | every text-search hit has relevance > 0            |
//! | `check_ranked_order`  | scores non-increasing, ties in sponsorship order   |
//! | `check_sponsor_order` | tier, featured, name, slug non-decreasing          |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertions on the weight table.
/// If any of these fail, the crate won't build.
const _: () = {
    use crate::scoring::*;

    // INVARIANT: name rules are strictly tiered
    assert!(NAME_EXACT_WEIGHT > NAME_PREFIX_WEIGHT);
    assert!(NAME_PREFIX_WEIGHT > NAME_SUBSTRING_WEIGHT);

    // INVARIANT: the whole commercial bonus is worth less than the weakest
    // textual signal, so sponsorship can't outweigh a full signal match
    assert!(MAX_COMMERCIAL_BONUS < DESCRIPTION_WEIGHT);
    assert!(MAX_COMMERCIAL_BONUS < INTEGRATION_WEIGHT);

    // INVARIANT: bonus order follows tier order
    assert!(PREMIUM_BONUS > CATEGORY_TIER_BONUS);
    assert!(CATEGORY_TIER_BONUS > BASIC_BONUS);
};

use crate::scoring::ranking::{compare_ranked, compare_sponsorship};
use crate::types::{Listing, RankedListing};
use std::cmp::Ordering;

/// Check that every hit of a non-empty text search actually matched.
///
/// # Panics (debug builds only)
/// Panics if any result carries zero relevance.
#[inline]
pub fn check_threshold(results: &[RankedListing<'_>]) {
    for (i, result) in results.iter().enumerate() {
        // INVARIANT: threshold law
        debug_assert!(
            result.relevance > 0,
            "Contract violation: result[{}] '{}' has zero relevance (score {})",
            i,
            result.listing.slug,
            result.score
        );
    }
}

/// Check that ranked results are in final display order.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_ranked_order(results: &[RankedListing<'_>]) {
    for (i, pair) in results.windows(2).enumerate() {
        // INVARIANT: scores non-increasing, ties resolved by sponsorship
        debug_assert!(
            compare_ranked(&pair[0], &pair[1]) != Ordering::Greater,
            "Contract violation: results[{}] '{}' ({}) ranked above '{}' ({})",
            i,
            pair[0].listing.slug,
            pair[0].score,
            pair[1].listing.slug,
            pair[1].score
        );
    }
}

/// Check that listings are in sponsorship order.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_sponsor_order(listings: &[&Listing]) {
    for (i, pair) in listings.windows(2).enumerate() {
        // INVARIANT: tier, featured, name, slug
        debug_assert!(
            compare_sponsorship(pair[0], pair[1]) != Ordering::Greater,
            "Contract violation: listings[{}] '{}' placed above '{}'",
            i,
            pair[0].slug,
            pair[1].slug
        );
    }
}
