//! Utility functions for string processing.

/// Normalize a query for matching: trim, then lowercase.
///
/// Matching is plain case-insensitive substring search. No diacritic folding:
/// a hit must be a real case-insensitive occurrence in the listing text.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Case-insensitive substring test. `needle` must already be normalized.
#[inline]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Does any tag contain `needle`? Empty tag lists never match.
#[inline]
pub fn any_contains(tags: &[String], needle: &str) -> bool {
    tags.iter().any(|tag| contains_folded(tag, needle))
}

/// Compact GitHub star count: `950`, `1.5K`, `12K`.
///
/// One decimal below ten thousand, none at or above.
pub fn format_stars(stars: u32) -> String {
    if stars >= 10_000 {
        format!("{:.0}K", stars as f64 / 1000.0)
    } else if stars >= 1000 {
        format!("{:.1}K", stars as f64 / 1000.0)
    } else {
        stars.to_string()
    }
}
