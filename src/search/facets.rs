// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-category result counts for filter chips.

use crate::types::{Category, RankedListing};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryFacet {
    pub category: Category,
    pub count: usize,
}

/// Count results per category, in order of first appearance.
///
/// First-appearance order puts the category of the best hit first, which is
/// what a filter bar next to the results wants.
pub fn category_facets(results: &[RankedListing<'_>]) -> Vec<CategoryFacet> {
    let mut facets: Vec<CategoryFacet> = Vec::new();
    for result in results {
        let category = result.listing.category;
        match facets.iter_mut().find(|facet| facet.category == category) {
            Some(facet) => facet.count += 1,
            None => facets.push(CategoryFacet { category, count: 1 }),
        }
    }
    facets
}
