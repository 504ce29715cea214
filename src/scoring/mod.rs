// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how listings get their numbers and their places.
//!
//! Relevance decides first. Sponsorship only breaks ties, either through the
//! small additive bonus in the score or through the explicit tie-break
//! comparator when scores are equal.

mod core;
pub mod ranking;

pub use self::core::*;
