// ABOUTME: Classification and synthesis constants for the activity migration engine
// ABOUTME: Fuzzy-scoring weights, theme placement offsets, and ambience keyword lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voyara Travel Intelligence

//! Constants used by the classifier and POI synthesizer, organized by domain.
//!
//! The scoring weights are part of the observable classification contract:
//! changing any of them changes which activities map to which theme and, from
//! there, the category assigned to every synthesized POI.

/// Fuzzy-matching score weights and acceptance threshold
pub mod scoring {
    /// Points added for each table keyword contained in the normalized activity
    pub const KEYWORD_HIT_SCORE: f64 = 1.0;

    /// Flat bonus when any keyword has a substring relation, in either
    /// direction, with the normalized activity
    pub const KEYWORD_SUBSTRING_BONUS: f64 = 0.5;

    /// Flat bonus when the normalized activity and the canonical table label
    /// are substrings of each other
    pub const LABEL_SUBSTRING_BONUS: f64 = 2.0;

    /// A candidate is accepted only when its score strictly exceeds this value
    pub const MATCH_THRESHOLD: f64 = 0.5;

    /// Confidence recorded on the synthetic suggestion emitted for an
    /// activity no table entry matched
    pub const FALLBACK_CONFIDENCE: f64 = 0.3;
}

/// Coordinate placement offsets, in decimal degrees from the destination center
///
/// POIs cluster by theme in different directions from the center: vibe near
/// the center, discover toward the historic quarter, indulge toward the
/// upscale district, adventure toward the outskirts, nature well outside
/// town. Presentation heuristic only; the synthesized point is not a real
/// location.
pub mod placement {
    /// Maximum jitter applied per axis, in degrees (uniform in `[-x, +x]`)
    pub const JITTER_DEGREES: f64 = 0.01;

    /// Offset for vibe POIs (city center)
    pub const VIBE_OFFSET: (f64, f64) = (0.002, 0.003);

    /// Offset for adventure POIs (outskirts)
    pub const ADVENTURE_OFFSET: (f64, f64) = (0.048, 0.036);

    /// Offset for discover POIs (historic quarter)
    pub const DISCOVER_OFFSET: (f64, f64) = (-0.006, 0.011);

    /// Offset for indulge POIs (upscale district)
    pub const INDULGE_OFFSET: (f64, f64) = (0.014, -0.009);

    /// Offset for nature POIs (far outskirts)
    pub const NATURE_OFFSET: (f64, f64) = (0.085, -0.072);
}

/// Keyword lists for deriving indoor/outdoor flags from activity text
///
/// Both flags may hold simultaneously, and both may be false; the lists are
/// not mutually exclusive.
pub mod ambience {
    /// Substrings marking an activity as indoor
    pub const INDOOR_KEYWORDS: [&str; 7] = [
        "museums",
        "galleries",
        "shopping",
        "restaurants",
        "bars",
        "clubs",
        "spas",
    ];

    /// Substrings marking an activity as outdoor
    pub const OUTDOOR_KEYWORDS: [&str; 7] = [
        "hiking",
        "beaches",
        "parks",
        "biking",
        "water sports",
        "gardens",
        "scenic",
    ];
}

/// Fallback classification for activities no table entry matched
pub mod fallback {
    use crate::models::Theme;

    /// Theme assigned to unmatched activities when they are still migrated
    pub const FALLBACK_THEME: Theme = Theme::Discover;

    /// Category assigned to unmatched activities when they are still migrated
    pub const FALLBACK_CATEGORY_ID: &str = "cultural_experiences";
}
