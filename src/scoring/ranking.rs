// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: how listings get sorted.
//!
//! Two comparators, one built on the other:
//!
//! - [`compare_sponsorship`]: tier priority, then featured, then name, then slug.
//!   Category and listing pages use this alone.
//! - [`compare_ranked`]: score descending, falling back to [`compare_sponsorship`]
//!   for ties. Text search uses this.
//!
//! Both are total orders over listings with distinct slugs, so the same input
//! always produces the same sequence.

use crate::types::{Listing, RankedListing, SponsorTier};
use std::cmp::Ordering;

/// Tier priority for ordering (higher first).
///
/// | Tier            | Priority |
/// |-----------------|----------|
/// | premium         | 4        |
/// | category        | 3        |
/// | featured (old)  | 3        |
/// | basic           | 2        |
/// | none            | 0        |
pub fn tier_priority(tier: SponsorTier) -> u8 {
    match tier {
        SponsorTier::Premium => 4,
        SponsorTier::Category | SponsorTier::LegacyFeatured => 3,
        SponsorTier::Basic => 2,
        SponsorTier::None => 0,
    }
}

/// Compare two listings for sponsorship placement.
///
/// Sort order:
/// 1. **Tier priority** - descending
/// 2. **Featured flag** - featured first
/// 3. **Name** - ascending, case-sensitive byte order
/// 4. **Slug** - ascending, final tiebreaker for duplicate names
pub fn compare_sponsorship(a: &Listing, b: &Listing) -> Ordering {
    tier_priority(b.sponsored_tier)
        .cmp(&tier_priority(a.sponsored_tier))
        .then_with(|| b.featured.cmp(&a.featured))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.slug.cmp(&b.slug))
}

/// Compare two ranked results.
///
/// Score descending; equal scores fall through to [`compare_sponsorship`].
pub fn compare_ranked(a: &RankedListing<'_>, b: &RankedListing<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| compare_sponsorship(a.listing, b.listing))
}
