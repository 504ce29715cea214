// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance.
//!
//! A listing's score is the sum of the textual signals it matches plus a small
//! commercial bonus. Name matching is tiered: only the strongest name rule
//! applies. Every other signal is independent and additive.
//!
//! # Signal weights
//!
//! | Signal             | Condition                                   | Weight |
//! |--------------------|---------------------------------------------|--------|
//! | Name exact         | name == query                               | 100    |
//! | Name prefix        | name starts with query                      | 80     |
//! | Name substring     | name contains query                         | 60     |
//! | Category exact     | slug, or slug with spaces, == query         | 40     |
//! | Short description  | contains query                              | 30     |
//! | Subcategory        | any tag contains query                      | 20     |
//! | Use case           | any tag contains query                      | 15     |
//! | Description        | contains query                              | 10     |
//! | Integration        | any tag contains query                      | 10     |
//!
//! # Commercial bonus
//!
//! Premium +5, category +3 (legacy featured tier +3), basic +1, and +2 for
//! the featured flag on top of any tier. The bonus only reorders listings that
//! already matched; it never lifts a listing over the relevance threshold.

use crate::types::{Listing, SponsorTier};
use crate::utils::{any_contains, contains_folded};

// =============================================================================
// SIGNAL WEIGHTS
// =============================================================================

pub const NAME_EXACT_WEIGHT: u32 = 100;
pub const NAME_PREFIX_WEIGHT: u32 = 80;
pub const NAME_SUBSTRING_WEIGHT: u32 = 60;
pub const CATEGORY_EXACT_WEIGHT: u32 = 40;
pub const SHORT_DESCRIPTION_WEIGHT: u32 = 30;
pub const SUBCATEGORY_WEIGHT: u32 = 20;
pub const USE_CASE_WEIGHT: u32 = 15;
pub const DESCRIPTION_WEIGHT: u32 = 10;
pub const INTEGRATION_WEIGHT: u32 = 10;

// =============================================================================
// COMMERCIAL BONUS
// =============================================================================

pub const PREMIUM_BONUS: u32 = 5;
pub const CATEGORY_TIER_BONUS: u32 = 3;
pub const BASIC_BONUS: u32 = 1;
pub const FEATURED_FLAG_BONUS: u32 = 2;

/// Largest bonus any listing can carry (premium + featured).
pub const MAX_COMMERCIAL_BONUS: u32 = PREMIUM_BONUS + FEATURED_FLAG_BONUS;

/// The two halves of a listing's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// Sum of matched textual signals. Zero means "did not match".
    pub relevance: u32,
    /// Sponsorship and featured bonus. Applied regardless of match.
    pub bonus: u32,
}

impl Score {
    /// What results are sorted by.
    #[inline]
    pub fn total(self) -> u32 {
        self.relevance + self.bonus
    }

    /// Threshold test: only textual relevance counts.
    #[inline]
    pub fn is_match(self) -> bool {
        self.relevance > 0
    }
}

/// Score one listing against a normalized, non-empty needle.
///
/// This is the single scoring routine; every search path goes through it.
pub fn score_listing(listing: &Listing, needle: &str) -> Score {
    Score {
        relevance: relevance_score(listing, needle),
        bonus: commercial_bonus(listing),
    }
}

/// Textual relevance of `listing` for `needle` (already trimmed and lowercased).
pub fn relevance_score(listing: &Listing, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }

    let mut score = name_score(&listing.name, needle);

    let category = listing.category.slug();
    if category == needle || category.replace('-', " ") == needle {
        score += CATEGORY_EXACT_WEIGHT;
    }
    if contains_folded(&listing.short_description, needle) {
        score += SHORT_DESCRIPTION_WEIGHT;
    }
    if any_contains(&listing.subcategories, needle) {
        score += SUBCATEGORY_WEIGHT;
    }
    if any_contains(&listing.use_cases, needle) {
        score += USE_CASE_WEIGHT;
    }
    if contains_folded(&listing.description, needle) {
        score += DESCRIPTION_WEIGHT;
    }
    if any_contains(&listing.integrations, needle) {
        score += INTEGRATION_WEIGHT;
    }

    score
}

/// Strongest applicable name rule: exact, else prefix, else substring.
fn name_score(name: &str, needle: &str) -> u32 {
    let name = name.to_lowercase();
    if name == needle {
        NAME_EXACT_WEIGHT
    } else if name.starts_with(needle) {
        NAME_PREFIX_WEIGHT
    } else if name.contains(needle) {
        NAME_SUBSTRING_WEIGHT
    } else {
        0
    }
}

/// Bonus from sponsorship tier plus the featured flag.
pub fn commercial_bonus(listing: &Listing) -> u32 {
    let tier = match listing.sponsored_tier {
        SponsorTier::Premium => PREMIUM_BONUS,
        SponsorTier::Category | SponsorTier::LegacyFeatured => CATEGORY_TIER_BONUS,
        SponsorTier::Basic => BASIC_BONUS,
        SponsorTier::None => 0,
    };
    let flag = if listing.featured { FEATURED_FLAG_BONUS } else { 0 };
    tier + flag
}
