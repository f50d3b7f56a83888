//! Accept-Language negotiation.
//!
//! # Responsibilities
//! - Parse the weighted Accept-Language header
//! - Pick the best supported locale for the client's preferences
//!
//! # Design Decisions
//! - Entries sort by descending quality; header order breaks ties
//! - Wildcard and malformed entries are skipped, never an error
//! - An exact (case-insensitive) tag match beats a primary-subtag
//!   match, checked per preference in order

use std::cmp::Ordering;

/// One parsed Accept-Language entry.
#[derive(Debug, Clone)]
struct LanguageRange<'a> {
    tag: &'a str,
    quality: f32,
}

/// Best supported locale for an Accept-Language value.
///
/// Returns the matching locale in its configured casing, or None when
/// the header is absent or nothing matches.
pub fn match_language(header: Option<&str>, supported: &[String]) -> Option<String> {
    let header = header?;

    let mut ranges: Vec<LanguageRange<'_>> = header.split(',').filter_map(parse_range).collect();
    // Stable sort: equal qualities keep their header order.
    ranges.sort_by(|a, b| b.quality.partial_cmp(&a.quality).unwrap_or(Ordering::Equal));

    for range in &ranges {
        let tag = range.tag.to_lowercase();

        if let Some(exact) = supported.iter().find(|s| s.to_lowercase() == tag) {
            return Some(exact.clone());
        }

        let primary = tag.split('-').next().unwrap_or(&tag);
        if let Some(partial) = supported.iter().find(|s| {
            let s = s.to_lowercase();
            s.split('-').next().unwrap_or(&s) == primary
        }) {
            return Some(partial.clone());
        }
    }

    None
}

fn parse_range(part: &str) -> Option<LanguageRange<'_>> {
    let part = part.trim();
    if part.is_empty() {
        return None;
    }

    let mut split = part.splitn(2, ';');
    let tag = split.next()?.trim();
    if tag.is_empty() || tag == "*" {
        return None;
    }

    let quality = split
        .next()
        .and_then(|q| q.trim().strip_prefix("q=").and_then(|v| v.parse().ok()))
        .unwrap_or(1.0);

    Some(LanguageRange { tag, quality })
}
