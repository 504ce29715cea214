// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hosted content-store rows.
//!
//! The hosted store keeps listings as snake_case rows with a `status` column
//! and nullable array columns. An export of the `tools` table is a JSON array
//! of such rows. Only `published` rows become listings; drafts and
//! `pending_review` submissions stay invisible.

use super::manifest::read_json;
use crate::error::Result;
use crate::types::{
    tier_or_none, Category, Listing, Maturity, PricingModel, SetupComplexity, SponsorTier,
};
use serde::Deserialize;
use std::path::Path;

/// Status value of rows that are visible in the directory.
pub const PUBLISHED: &str = "published";

/// One row of the hosted `tools` table.
#[derive(Deserialize, Clone, Debug)]
pub struct ListingRow {
    pub slug: String,
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub subcategories: Option<Vec<String>>,
    #[serde(default)]
    pub use_cases: Option<Vec<String>>,
    #[serde(default)]
    pub integrations: Option<Vec<String>>,
    #[serde(default)]
    pub pricing_model: Option<PricingModel>,
    #[serde(default)]
    pub pricing: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub github_stars: Option<u32>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub docs_url: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default, deserialize_with = "tier_or_none")]
    pub sponsored_tier: SponsorTier,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub pros: Option<Vec<String>>,
    #[serde(default)]
    pub cons: Option<Vec<String>>,
    #[serde(default)]
    pub setup_complexity: Option<SetupComplexity>,
    #[serde(default)]
    pub maturity: Option<Maturity>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ListingRow {
    pub fn is_published(&self) -> bool {
        self.status.as_deref() == Some(PUBLISHED)
    }
}

impl From<ListingRow> for Listing {
    fn from(row: ListingRow) -> Self {
        Listing {
            slug: row.slug,
            name: row.name,
            short_description: row.short_description,
            description: row.description,
            category: row.category,
            subcategories: row.subcategories.unwrap_or_default(),
            use_cases: row.use_cases.unwrap_or_default(),
            integrations: row.integrations.unwrap_or_default(),
            pricing_model: row.pricing_model.unwrap_or_default(),
            pricing: row.pricing,
            github_url: row.github_url,
            github_stars: row.github_stars,
            website_url: row.website_url.unwrap_or_default(),
            docs_url: row.docs_url,
            featured: row.featured.unwrap_or(false),
            sponsored_tier: row.sponsored_tier,
            last_updated: row.last_updated.unwrap_or_default(),
            pros: row.pros.unwrap_or_default(),
            cons: row.cons.unwrap_or_default(),
            setup_complexity: row.setup_complexity.unwrap_or_default(),
            maturity: row.maturity.unwrap_or_default(),
        }
    }
}

/// Keep published rows, convert them, order by name.
pub fn published_listings(rows: Vec<ListingRow>) -> Vec<Listing> {
    let total = rows.len();
    let mut listings: Vec<Listing> = rows
        .into_iter()
        .filter(ListingRow::is_published)
        .map(Listing::from)
        .collect();
    listings.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(total, published = listings.len(), "filtered row export");
    listings
}

/// Read a row export file and return its published listings.
pub fn load_row_export(path: &Path) -> Result<Vec<Listing>> {
    let rows: Vec<ListingRow> = read_json(path)?;
    Ok(published_listings(rows))
}
