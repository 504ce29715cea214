// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog: one consistent snapshot of everything the directory shows.
//!
//! Listings plus the editorial pages that point at them. A `Catalog` is built
//! once, validated, and then only read. Swapping in fresh data means building a
//! new catalog and replacing the old one (see [`source::SharedCatalog`]); no
//! ranking call ever sees a half-updated collection.
//!
//! # Validation at construction
//!
//! - Duplicate listing slugs are an error. Slugs are identity.
//! - Editorial pages pointing at unknown slugs are logged and tolerated. The
//!   dangling slugs are skipped when pages are resolved, the same way a
//!   missing row would simply not render.

pub mod manifest;
pub mod rows;
pub mod source;

pub use manifest::{load_manifest_dir, CatalogManifest, MANIFEST_FILE, MANIFEST_VERSION};
pub use rows::{load_row_export, ListingRow};
pub use source::{FallbackSource, ListingSource, ManifestSource, RowExportSource, SharedCatalog};

use crate::error::{CatalogError, Result};
use crate::search::{
    featured_listings, order_by_sponsorship, search, sort_by_sponsorship, Query, SearchResults,
};
use crate::types::{Category, CategoryPage, ComparisonPage, Listicle, Listing, McpPlatform};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// How many similar listings a listing page shows.
pub const SIMILAR_LIMIT: usize = 4;

/// A validated, read-only directory snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
    categories: Vec<CategoryPage>,
    comparisons: Vec<ComparisonPage>,
    platforms: Vec<McpPlatform>,
    listicles: Vec<Listicle>,
    by_slug: HashMap<String, usize>,
}

/// Every editorial page kind, as loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct EditorialPages {
    pub categories: Vec<CategoryPage>,
    pub comparisons: Vec<ComparisonPage>,
    pub platforms: Vec<McpPlatform>,
    pub listicles: Vec<Listicle>,
}

/// Where a listing is mentioned across the editorial pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingContext<'a> {
    #[serde(flatten)]
    pub listing: &'a Listing,
    pub comparisons: Vec<&'a ComparisonPage>,
    pub category_pages: Vec<&'a CategoryPage>,
    pub similar: Vec<&'a Listing>,
}

/// A comparison page with both sides resolved.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedComparison<'a> {
    pub page: &'a ComparisonPage,
    pub tool_a: &'a Listing,
    pub tool_b: &'a Listing,
}

/// Headline numbers for the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_listings: usize,
    pub total_categories: usize,
    pub total_comparisons: usize,
    pub total_listicles: usize,
    pub total_mcp_servers: usize,
    pub sponsored: usize,
    pub featured: usize,
    /// Listings per category, in [`Category::ALL`] order.
    pub per_category: Vec<(Category, usize)>,
}

impl Catalog {
    /// Build and validate a catalog without roundup pages.
    pub fn new(
        listings: Vec<Listing>,
        categories: Vec<CategoryPage>,
        comparisons: Vec<ComparisonPage>,
        platforms: Vec<McpPlatform>,
    ) -> Result<Self> {
        Catalog::with_pages(
            listings,
            EditorialPages {
                categories,
                comparisons,
                platforms,
                listicles: Vec::new(),
            },
        )
    }

    /// Build and validate a catalog from listings plus every page kind.
    pub fn with_pages(listings: Vec<Listing>, pages: EditorialPages) -> Result<Self> {
        let mut by_slug = HashMap::with_capacity(listings.len());
        for (i, listing) in listings.iter().enumerate() {
            if by_slug.insert(listing.slug.clone(), i).is_some() {
                return Err(CatalogError::DuplicateSlug(listing.slug.clone()));
            }
        }

        let catalog = Catalog {
            listings,
            categories: pages.categories,
            comparisons: pages.comparisons,
            platforms: pages.platforms,
            listicles: pages.listicles,
            by_slug,
        };
        catalog.warn_dangling_references();

        tracing::debug!(
            listings = catalog.listings.len(),
            categories = catalog.categories.len(),
            comparisons = catalog.comparisons.len(),
            platforms = catalog.platforms.len(),
            listicles = catalog.listicles.len(),
            "catalog built"
        );
        Ok(catalog)
    }

    /// A catalog with listings only.
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self> {
        Catalog::new(listings, Vec::new(), Vec::new(), Vec::new())
    }

    fn warn_dangling_references(&self) {
        for page in &self.categories {
            for slug in page.tool_slugs.iter().filter(|s| !self.contains(s)) {
                tracing::warn!(page = %page.slug, %slug, "category page references unknown listing");
            }
        }
        for page in &self.comparisons {
            for slug in [&page.tool_a_slug, &page.tool_b_slug] {
                if !self.contains(slug) {
                    tracing::warn!(page = %page.slug, %slug, "comparison references unknown listing");
                }
            }
        }
        for platform in &self.platforms {
            for slug in platform.tool_slugs.iter().filter(|s| !self.contains(s)) {
                tracing::warn!(platform = %platform.slug, %slug, "platform references unknown listing");
            }
        }
        for listicle in &self.listicles {
            for slug in listicle
                .category_slugs
                .iter()
                .filter(|s| self.category_page(s).is_none())
            {
                tracing::warn!(listicle = %listicle.slug, %slug, "roundup references unknown category page");
            }
        }
    }

    // ------------------------------------------------------------------------
    // Raw access
    // ------------------------------------------------------------------------

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn categories(&self) -> &[CategoryPage] {
        &self.categories
    }

    pub fn comparisons(&self) -> &[ComparisonPage] {
        &self.comparisons
    }

    pub fn platforms(&self) -> &[McpPlatform] {
        &self.platforms
    }

    pub fn listicles(&self) -> &[Listicle] {
        &self.listicles
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    // ------------------------------------------------------------------------
    // Listing lookups
    // ------------------------------------------------------------------------

    pub fn listing(&self, slug: &str) -> Option<&Listing> {
        self.by_slug.get(slug).map(|&i| &self.listings[i])
    }

    /// Like [`Catalog::listing`], but a miss is an error.
    pub fn require_listing(&self, slug: &str) -> Result<&Listing> {
        self.listing(slug)
            .ok_or_else(|| CatalogError::NotFound(format!("listing '{}'", slug)))
    }

    /// Listings in one category, in sponsorship order.
    pub fn listings_in_category(&self, category: Category) -> Vec<&Listing> {
        sort_by_sponsorship(self.listings.iter().filter(|l| l.category == category))
    }

    /// Every listing in sponsorship order.
    pub fn all_by_sponsorship(&self) -> Vec<&Listing> {
        order_by_sponsorship(&self.listings)
    }

    pub fn featured(&self) -> Vec<&Listing> {
        featured_listings(&self.listings)
    }

    /// Run a query against this snapshot.
    pub fn search(&self, query: &Query) -> SearchResults<'_> {
        search(&self.listings, query)
    }

    // ------------------------------------------------------------------------
    // Editorial pages
    // ------------------------------------------------------------------------

    pub fn category_page(&self, slug: &str) -> Option<&CategoryPage> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Listings on a category page, in sponsorship order.
    ///
    /// Unknown slugs on the page are skipped.
    pub fn category_listings(&self, slug: &str) -> Option<Vec<&Listing>> {
        let page = self.category_page(slug)?;
        Some(sort_by_sponsorship(self.resolve(&page.tool_slugs)))
    }

    /// A comparison with both sides present, or `None`.
    pub fn comparison(&self, slug: &str) -> Option<ResolvedComparison<'_>> {
        let page = self.comparisons.iter().find(|c| c.slug == slug)?;
        Some(ResolvedComparison {
            page,
            tool_a: self.listing(&page.tool_a_slug)?,
            tool_b: self.listing(&page.tool_b_slug)?,
        })
    }

    pub fn platform(&self, slug: &str) -> Option<&McpPlatform> {
        self.platforms.iter().find(|p| p.slug == slug)
    }

    /// Listings of a platform, in editorial order. Unknown slugs are skipped.
    pub fn platform_listings(&self, slug: &str) -> Option<Vec<&Listing>> {
        let platform = self.platform(slug)?;
        Some(self.resolve(&platform.tool_slugs))
    }

    pub fn listicle(&self, slug: &str) -> Option<&Listicle> {
        self.listicles.iter().find(|l| l.slug == slug)
    }

    /// Listings of a roundup, in sponsorship order.
    ///
    /// The tool slugs of each named category page are joined in page order,
    /// and a slug seen twice is kept once. Unknown pages and slugs are skipped.
    pub fn listicle_listings(&self, slug: &str) -> Option<Vec<&Listing>> {
        let listicle = self.listicle(slug)?;
        let mut seen = HashSet::new();
        let listings = listicle
            .category_slugs
            .iter()
            .filter_map(|page| self.category_page(page))
            .flat_map(|page| page.tool_slugs.iter())
            .filter(|s| seen.insert(s.as_str()))
            .filter_map(|s| self.listing(s));
        Some(sort_by_sponsorship(listings))
    }

    fn resolve(&self, slugs: &[String]) -> Vec<&Listing> {
        slugs.iter().filter_map(|slug| self.listing(slug)).collect()
    }

    // ------------------------------------------------------------------------
    // Cross-references
    // ------------------------------------------------------------------------

    /// Comparison pages with this listing on either side, in editorial order.
    pub fn related_comparisons(&self, slug: &str) -> Vec<&ComparisonPage> {
        self.comparisons
            .iter()
            .filter(|c| c.tool_a_slug == slug || c.tool_b_slug == slug)
            .collect()
    }

    /// Category pages that list this listing, in editorial order.
    pub fn related_category_pages(&self, slug: &str) -> Vec<&CategoryPage> {
        self.categories
            .iter()
            .filter(|c| c.tool_slugs.iter().any(|s| s == slug))
            .collect()
    }

    /// Up to `n` other listings from the same category, in sponsorship order.
    ///
    /// Empty for an unknown slug.
    pub fn similar(&self, slug: &str, n: usize) -> Vec<&Listing> {
        let Some(listing) = self.listing(slug) else {
            return Vec::new();
        };
        self.listings_in_category(listing.category)
            .into_iter()
            .filter(|l| l.slug != slug)
            .take(n)
            .collect()
    }

    /// A listing with everything that links to it.
    pub fn listing_context(&self, slug: &str) -> Result<ListingContext<'_>> {
        Ok(ListingContext {
            listing: self.require_listing(slug)?,
            comparisons: self.related_comparisons(slug),
            category_pages: self.related_category_pages(slug),
            similar: self.similar(slug, SIMILAR_LIMIT),
        })
    }

    pub fn stats(&self) -> CatalogStats {
        let count = |category: Category| {
            self.listings
                .iter()
                .filter(|l| l.category == category)
                .count()
        };
        CatalogStats {
            total_listings: self.listings.len(),
            total_categories: self.categories.len(),
            total_comparisons: self.comparisons.len(),
            total_listicles: self.listicles.len(),
            total_mcp_servers: count(Category::McpServer),
            sponsored: self
                .listings
                .iter()
                .filter(|l| l.sponsored_tier.is_sponsored())
                .count(),
            featured: self.listings.iter().filter(|l| l.featured).count(),
            per_category: Category::ALL.into_iter().map(|c| (c, count(c))).collect(),
        }
    }
}
