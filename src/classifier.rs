// ABOUTME: Activity-to-mapping classification with exact lookup and fuzzy scoring
// ABOUTME: Implements the substring-based keyword heuristic over the static mapping table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voyara Travel Intelligence

//! Classification of free-text activity labels against the mapping table.
//!
//! The matcher is a deliberately simple rule-based heuristic (substring
//! containment plus fixed-weight bonuses), not an edit-distance or embedding
//! matcher. Exact label hits short-circuit; otherwise every table entry is
//! scored and the best one is accepted only strictly above the threshold,
//! with the first entry in table order winning ties.

use tracing::debug;

use crate::catalog::{ActivityMapping, MappingRegistry};
use crate::constants::scoring;

/// Find the best mapping table entry for a free-text activity label
///
/// Normalizes the label (trim + lowercase), tries an exact lookup against the
/// canonical labels, then falls back to fuzzy scoring. Returns `None` when no
/// entry scores strictly above [`scoring::MATCH_THRESHOLD`]. Empty input
/// never matches.
#[must_use]
pub fn find_best_activity_mapping<'a>(
    registry: &'a MappingRegistry,
    activity: &str,
) -> Option<&'a ActivityMapping> {
    let normalized = activity.trim().to_lowercase();
    // An empty label would satisfy the flat substring bonuses vacuously, so
    // reject it before scoring.
    if normalized.is_empty() {
        return None;
    }

    if let Some(exact) = registry.exact_match(&normalized) {
        debug!(activity = %normalized, "exact mapping hit");
        return Some(exact);
    }

    let mut best: Option<&ActivityMapping> = None;
    let mut best_score = 0.0_f64;
    for entry in registry.mappings() {
        let score = fuzzy_score(entry, &normalized);
        // Strict comparison: first entry in table order wins ties.
        if score > best_score {
            best_score = score;
            best = Some(entry);
        }
    }

    if best_score > scoring::MATCH_THRESHOLD {
        if let Some(entry) = best {
            debug!(
                activity = %normalized,
                matched = %entry.activity,
                score = best_score,
                "fuzzy mapping hit"
            );
        }
        best
    } else {
        debug!(activity = %normalized, score = best_score, "no mapping above threshold");
        None
    }
}

/// Score one table entry against a normalized activity label
fn fuzzy_score(entry: &ActivityMapping, normalized: &str) -> f64 {
    let mut score = 0.0;

    for keyword in &entry.keywords {
        if normalized.contains(keyword.as_str()) {
            score += scoring::KEYWORD_HIT_SCORE;
        }
    }

    let any_substring_relation = entry
        .keywords
        .iter()
        .any(|keyword| normalized.contains(keyword.as_str()) || keyword.contains(normalized));
    if any_substring_relation {
        score += scoring::KEYWORD_SUBSTRING_BONUS;
    }

    if normalized.contains(entry.activity.as_str()) || entry.activity.contains(normalized) {
        score += scoring::LABEL_SUBSTRING_BONUS;
    }

    score
}
