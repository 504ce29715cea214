// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records a directory is made of.
//!
//! A [`Listing`] is one tool entry. The ranking engine reads a handful of its
//! fields (name, descriptions, category, tag lists, sponsorship) and passes the
//! rest through untouched. The editorial pages ([`CategoryPage`],
//! [`ComparisonPage`], [`McpPlatform`]) only hold slugs; the catalog resolves
//! them against the listing snapshot.
//!
//! # Wire shape
//!
//! Everything serializes with camelCase keys, matching the JSON the content
//! store exports:
//!
//! ```text
//! { "slug": "crewai", "name": "CrewAI", "category": "agent",
//!   "shortDescription": "...", "sponsoredTier": "premium", "featured": true, ... }
//! ```
//!
//! # Invariants
//!
//! - **Category** is a closed set. Unknown values fail deserialization instead
//!   of silently landing in a catch-all bucket.
//! - **SponsorTier** and `featured` are orthogonal. A listing can be featured
//!   with no tier, and sponsored without being featured.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CATEGORY
// =============================================================================

/// Top-level directory category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Agent,
    McpServer,
    Framework,
    Infra,
    Platform,
}

impl Category {
    /// Every category, in directory display order.
    pub const ALL: [Category; 5] = [
        Category::Agent,
        Category::McpServer,
        Category::Framework,
        Category::Infra,
        Category::Platform,
    ];

    /// URL-safe identifier, as stored on the listing.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Agent => "agent",
            Category::McpServer => "mcp-server",
            Category::Framework => "framework",
            Category::Infra => "infra",
            Category::Platform => "platform",
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Agent => "AI Agent",
            Category::McpServer => "MCP Server",
            Category::Framework => "Framework",
            Category::Infra => "Infrastructure",
            Category::Platform => "Platform",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}' (expected one of agent, mcp-server, framework, infra, platform)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Accepts the slug or its space-separated form, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(' ', "-");
        Category::ALL
            .into_iter()
            .find(|category| category.slug() == wanted)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

// =============================================================================
// SPONSORSHIP
// =============================================================================

/// Paid placement tier.
///
/// `LegacyFeatured` is the old `"featured"` tier value some stored records still
/// carry. It ranks exactly like [`SponsorTier::Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SponsorTier {
    #[default]
    None,
    Basic,
    Category,
    Premium,
    #[serde(rename = "featured")]
    LegacyFeatured,
}

impl SponsorTier {
    pub fn is_sponsored(self) -> bool {
        self != SponsorTier::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SponsorTier::None => "none",
            SponsorTier::Basic => "basic",
            SponsorTier::Category => "category",
            SponsorTier::Premium => "premium",
            SponsorTier::LegacyFeatured => "featured",
        }
    }
}

/// Missing and `null` tiers both mean "not sponsored".
pub(crate) fn tier_or_none<'de, D>(deserializer: D) -> Result<SponsorTier, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<SponsorTier>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// PASSTHROUGH METADATA
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PricingModel {
    #[default]
    Free,
    #[serde(rename = "Open Source")]
    OpenSource,
    Freemium,
    Paid,
    Enterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SetupComplexity {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Maturity {
    #[default]
    Early,
    Growing,
    Mature,
}

// =============================================================================
// LISTING
// =============================================================================

/// One directory entry.
///
/// Only `slug`, `name`, `shortDescription`, `description` and `category` are
/// required on the wire. Tag lists default to empty, which scores as "no match"
/// for the corresponding signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub slug: String,
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub subcategories: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub integrations: Vec<String>,
    #[serde(default)]
    pub pricing_model: PricingModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_stars: Option<u32>,
    #[serde(default)]
    pub website_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, deserialize_with = "tier_or_none")]
    pub sponsored_tier: SponsorTier,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub setup_complexity: SetupComplexity,
    #[serde(default)]
    pub maturity: Maturity,
}

/// A listing paired with the numbers it was ranked by.
///
/// `relevance` is the textual part alone; `score` adds the commercial bonus.
/// With an empty query both are zero.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankedListing<'a> {
    #[serde(flatten)]
    pub listing: &'a Listing,
    pub score: u32,
    #[serde(skip)]
    pub relevance: u32,
}

// =============================================================================
// EDITORIAL PAGES
// =============================================================================

/// A curated "best of" page pointing at listings by slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage {
    pub slug: String,
    pub title: String,
    pub seo_title: String,
    pub seo_description: String,
    pub description: String,
    pub tool_slugs: Vec<String>,
}

/// One row of a head-to-head comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonFeature {
    pub name: String,
    pub tool_a: String,
    pub tool_b: String,
}

/// A head-to-head page between two listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonPage {
    pub slug: String,
    pub tool_a_slug: String,
    pub tool_b_slug: String,
    pub verdict: String,
    #[serde(default)]
    pub features: Vec<ComparisonFeature>,
    pub seo_title: String,
    pub seo_description: String,
}

/// A grouping of MCP servers by the platform they connect to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpPlatform {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub tool_slugs: Vec<String>,
}

/// Extra prose shown on a roundup page, e.g. a primer on the protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSection {
    pub title: String,
    pub body: String,
}

/// A "best of" roundup that merges several category pages into one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listicle {
    pub slug: String,
    pub title: String,
    pub seo_title: String,
    pub seo_description: String,
    pub description: String,
    pub category_slugs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_section: Option<CustomSection>,
}
