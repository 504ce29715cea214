// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tool submissions: validate what a vendor sent, turn it into a draft.
//!
//! A draft listing is never published by this crate. It carries neutral
//! defaults (free pricing, medium setup, early maturity, no sponsorship) and
//! waits for editorial review in the content store.

use crate::types::{Category, Listing, Maturity, PricingModel, SetupComplexity, SponsorTier};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// One or more required fields are missing or blank. Lists all of them.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("website URL must start with http:// or https://")]
    InvalidWebsite,
}

/// A tool submission as posted by the submit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

impl Submission {
    /// Check the submission and return its parsed category.
    ///
    /// Missing fields are reported together, before any format checks.
    pub fn validate(&self) -> Result<Category, SubmissionError> {
        let required = [
            ("name", &self.name),
            ("websiteUrl", &self.website_url),
            ("category", &self.category),
            ("shortDescription", &self.short_description),
            ("email", &self.email),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();
        if !missing.is_empty() {
            return Err(SubmissionError::MissingFields(missing));
        }

        let category = self
            .category
            .parse::<Category>()
            .map_err(|_| SubmissionError::UnknownCategory(self.category.clone()))?;

        if !looks_like_email(&self.email) {
            return Err(SubmissionError::InvalidEmail);
        }

        let website = self.website_url.trim();
        if !(website.starts_with("http://") || website.starts_with("https://")) {
            return Err(SubmissionError::InvalidWebsite);
        }

        Ok(category)
    }

    /// Validate and build a draft listing.
    ///
    /// `suffix` keeps draft slugs unique (a timestamp or sequence number);
    /// the slug is `{slugify(name)}-{suffix}`.
    pub fn into_draft(self, suffix: &str) -> Result<Listing, SubmissionError> {
        let category = self.validate()?;
        let name = self.name.trim().to_string();
        let short_description = self.short_description.trim().to_string();
        let github_url = self
            .github_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(Listing {
            slug: format!("{}-{}", slugify(&name), suffix),
            description: short_description.clone(),
            short_description,
            name,
            category,
            subcategories: Vec::new(),
            use_cases: Vec::new(),
            integrations: Vec::new(),
            pricing_model: PricingModel::Free,
            pricing: None,
            github_url,
            github_stars: None,
            website_url: self.website_url.trim().to_string(),
            docs_url: None,
            featured: false,
            sponsored_tier: SponsorTier::None,
            last_updated: String::new(),
            pros: Vec::new(),
            cons: Vec::new(),
            setup_complexity: SetupComplexity::Medium,
            maturity: Maturity::Early,
        })
    }
}

/// Text on both sides of a single `@`. Hosts without a dot are fine.
fn looks_like_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// URL-safe slug: lowercase, runs of anything outside `[a-z0-9]` become one
/// `-`, no leading or trailing `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}
