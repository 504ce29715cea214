// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the user asked for: free text plus an optional category filter.

use crate::types::{Category, ParseCategoryError};
use crate::utils::normalize;
use serde::Serialize;

/// A search request.
///
/// The text is kept as typed (for echoing back); [`Query::needle`] is the
/// trimmed, lowercased form that scoring matches against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Query {
            text: text.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Build from raw request parameters (`?q=...&category=...`).
    ///
    /// A missing `q` is the empty query. A blank `category` means no filter;
    /// anything else must name a known category.
    pub fn from_params(q: Option<&str>, category: Option<&str>) -> Result<Self, ParseCategoryError> {
        let category = match category.map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(raw.parse()?),
            _ => None,
        };
        Ok(Query {
            text: q.unwrap_or_default().to_string(),
            category,
        })
    }

    /// Normalized match text. Empty means "no text scoring".
    pub fn needle(&self) -> String {
        normalize(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
