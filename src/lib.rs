// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance ranking and sponsorship ordering for an AI tool directory.
//!
//! Listings are scored against a free-text query, matches are ranked, and
//! paid placement nudges the order without ever letting a non-match in.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  scoring/    │────▶│   search/    │
//! │ (Listing,   │     │ (weights,    │     │ (rank, order,│
//! │  tiers)     │     │  comparators)│     │  facets)     │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                       catalog/                           │
//! │  (Catalog snapshot, manifest dirs, row exports,          │
//! │   fallback sources, SharedCatalog)                       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Ranking Rules
//!
//! | Step | Rule                                                        |
//! |------|-------------------------------------------------------------|
//! | 1    | Relevance from name, category, descriptions and tags        |
//! | 2    | Drop listings with zero relevance                           |
//! | 3    | Add the commercial bonus (tier + featured flag)             |
//! | 4    | Sort: score, tier priority, featured, name, slug            |
//!
//! The bonus is smaller than the weakest textual signal, so sponsorship
//! breaks near-ties and never outranks a clearly better match.
//!
//! # Usage
//!
//! ```
//! use toolshelf::{rank_by_relevance, testing::make_listing, Category};
//!
//! let listings = vec![
//!     make_listing("LangChain", Category::Framework),
//!     make_listing("CrewAI", Category::Agent),
//! ];
//! let hits = rank_by_relevance(&listings, "lang");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].listing.name, "LangChain");
//! ```

pub mod catalog;
pub mod contracts;
pub mod error;
pub mod scoring;
pub mod search;
pub mod submission;
pub mod testing;
mod types;
mod utils;

pub use catalog::{
    load_manifest_dir, load_row_export, Catalog, CatalogStats, EditorialPages, FallbackSource,
    ListingContext, ListingSource, ManifestSource, ResolvedComparison, RowExportSource,
    SharedCatalog, SIMILAR_LIMIT,
};
pub use error::{CatalogError, Result};
pub use scoring::{commercial_bonus, relevance_score, score_listing, Score};
pub use search::{
    category_facets, featured_listings, order_by_sponsorship, rank_by_relevance, search,
    sort_by_sponsorship, CategoryFacet, Query, SearchResults,
};
pub use submission::{slugify, Submission, SubmissionError};
pub use types::{
    Category, CategoryPage, ComparisonFeature, ComparisonPage, CustomSection, Listicle, Listing,
    Maturity, McpPlatform, ParseCategoryError, PricingModel, RankedListing, SetupComplexity,
    SponsorTier,
};
pub use utils::{format_stars, normalize};
