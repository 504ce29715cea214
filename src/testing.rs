//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! Fixture descriptions are deliberately bland so that they never match the
//! queries tests run; set the fields a test cares about explicitly.

#![doc(hidden)]

use crate::submission::slugify;
use crate::types::{Category, Listing, Maturity, PricingModel, SetupComplexity, SponsorTier};

/// Create an unsponsored, unfeatured listing.
///
/// The slug is derived from the name, descriptions are neutral filler and
/// every tag list is empty.
pub fn make_listing(name: &str, category: Category) -> Listing {
    Listing {
        slug: slugify(name),
        name: name.to_string(),
        short_description: "Fixture short text".to_string(),
        description: "Fixture long text".to_string(),
        category,
        subcategories: vec![],
        use_cases: vec![],
        integrations: vec![],
        pricing_model: PricingModel::Free,
        pricing: None,
        github_url: None,
        github_stars: None,
        website_url: format!("https://example.com/{}", slugify(name)),
        docs_url: None,
        featured: false,
        sponsored_tier: SponsorTier::None,
        last_updated: "2025-01-01".to_string(),
        pros: vec![],
        cons: vec![],
        setup_complexity: SetupComplexity::Medium,
        maturity: Maturity::Growing,
    }
}

/// Create a listing with commercial state set.
pub fn make_sponsored(
    name: &str,
    category: Category,
    tier: SponsorTier,
    featured: bool,
) -> Listing {
    Listing {
        sponsored_tier: tier,
        featured,
        ..make_listing(name, category)
    }
}
