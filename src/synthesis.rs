// ABOUTME: Draft POI assembly: coordinate placement, descriptions, and ambience flags
// ABOUTME: Turns a classified activity into a reviewable draft point of interest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voyara Travel Intelligence

//! Synthesis of draft POI records from classified activities.
//!
//! Coordinates are offset from the destination center by a theme-specific
//! bias plus bounded jitter so POIs of one theme cluster together on the map.
//! Descriptions come from three canned templates per theme, or a flat
//! fallback when templating is disabled. Draw order against the random
//! source is fixed: latitude jitter, longitude jitter, then template choice.

use crate::constants::{ambience, placement};
use crate::models::{Coordinates, DraftPoi, PoiStatus, PriceLevel, Theme};
use crate::random::RandomSource;

/// Inputs for synthesizing a single draft POI
#[derive(Debug)]
pub struct PoiBlueprint<'a> {
    /// Raw activity label as supplied by the destination record
    pub activity: &'a str,
    /// Destination city name, interpolated into name and description
    pub city_name: &'a str,
    /// Base coordinates the theme offset and jitter apply to
    pub base_coordinates: Coordinates,
    /// Theme resolved by classification (or fallback)
    pub theme: Theme,
    /// Category key resolved by classification (or fallback)
    pub category_id: &'a str,
    /// Tag set: mapping keywords, or the lowercased activity when unmatched
    pub tags: Vec<String>,
    /// Price bracket from the migration options
    pub price_level: PriceLevel,
    /// Whether to use the themed templates or the flat fallback description
    pub templated_description: bool,
}

/// Assemble a draft POI from a blueprint
///
/// The result always carries `Draft` status; synthesized POIs are never
/// auto-activated.
#[must_use]
pub fn synthesize_poi(blueprint: &PoiBlueprint<'_>, rng: &mut dyn RandomSource) -> DraftPoi {
    let coordinates = synthesize_coordinates(blueprint.base_coordinates, blueprint.theme, rng);
    let description = if blueprint.templated_description {
        themed_description(blueprint.theme, blueprint.activity, blueprint.city_name, rng)
    } else {
        format!(
            "Experience {} in {}",
            blueprint.activity, blueprint.city_name
        )
    };
    let normalized = blueprint.activity.trim().to_lowercase();
    let (is_indoor, is_outdoor) = derive_ambience(&normalized);

    DraftPoi {
        name: format!("{} in {}", title_case(&normalized), blueprint.city_name),
        description,
        short_description: format!(
            "{} experience in {}",
            title_case(&normalized),
            blueprint.city_name
        ),
        coordinates,
        theme: blueprint.theme,
        category_id: blueprint.category_id.to_owned(),
        tags: blueprint.tags.clone(),
        price_level: blueprint.price_level,
        is_indoor,
        is_outdoor,
        status: PoiStatus::Draft,
        source_activity: blueprint.activity.to_owned(),
    }
}

/// Offset the base coordinates by the theme bias plus bounded jitter
///
/// Jitter is uniform in `[-JITTER_DEGREES, +JITTER_DEGREES]` per axis.
#[must_use]
pub fn synthesize_coordinates(
    base: Coordinates,
    theme: Theme,
    rng: &mut dyn RandomSource,
) -> Coordinates {
    let (lat_offset, lng_offset) = theme_offset(theme);
    let lat_jitter = jitter(rng.next_f64());
    let lng_jitter = jitter(rng.next_f64());
    Coordinates {
        lat: base.lat + lat_offset + lat_jitter,
        lng: base.lng + lng_offset + lng_jitter,
    }
}

/// Map a unit sample onto `[-JITTER_DEGREES, +JITTER_DEGREES]`
fn jitter(sample: f64) -> f64 {
    sample.mul_add(2.0 * placement::JITTER_DEGREES, -placement::JITTER_DEGREES)
}

/// Fixed placement bias for each theme
const fn theme_offset(theme: Theme) -> (f64, f64) {
    match theme {
        Theme::Vibe => placement::VIBE_OFFSET,
        Theme::Adventure => placement::ADVENTURE_OFFSET,
        Theme::Discover => placement::DISCOVER_OFFSET,
        Theme::Indulge => placement::INDULGE_OFFSET,
        Theme::Nature => placement::NATURE_OFFSET,
    }
}

/// Pick one of the three themed templates uniformly
fn themed_description(
    theme: Theme,
    activity: &str,
    city: &str,
    rng: &mut dyn RandomSource,
) -> String {
    // A sample of exactly 1.0 cannot occur ([0,1) source), but clamp anyway
    // so a misbehaving source cannot push the index out of range.
    let index = ((rng.next_f64() * 3.0) as usize).min(2);
    match theme {
        Theme::Vibe => match index {
            0 => format!("Soak up the energy of {activity} in {city}, where the city comes alive after dark."),
            1 => format!("Join locals for {activity} and discover the social heartbeat of {city}."),
            _ => format!("From dusk till dawn, {activity} defines the vibe of {city}."),
        },
        Theme::Adventure => match index {
            0 => format!("Get your adrenaline pumping with {activity} just outside {city}."),
            1 => format!("Challenge yourself with {activity} in the wild surroundings of {city}."),
            _ => format!("An unforgettable {activity} experience awaits adventurers visiting {city}."),
        },
        Theme::Discover => match index {
            0 => format!("Uncover the stories behind {activity} in {city}'s historic quarter."),
            1 => format!("Let {activity} guide you through the culture and heritage of {city}."),
            _ => format!("Curious travellers love {activity} as a window into everyday life in {city}."),
        },
        Theme::Indulge => match index {
            0 => format!("Treat yourself to {activity} in one of {city}'s most refined districts."),
            1 => format!("Slow down and savour {activity}, a signature indulgence of {city}."),
            _ => format!("For a touch of luxury, {activity} in {city} is hard to beat."),
        },
        Theme::Nature => match index {
            0 => format!("Escape the city bustle with {activity} in the natural landscapes around {city}."),
            1 => format!("Breathe in fresh air and enjoy {activity} far from {city}'s crowds."),
            _ => format!("Nature lovers flock to {city} for {activity} and wide-open scenery."),
        },
    }
}

/// Derive indoor/outdoor flags from the normalized activity text
///
/// Both flags may hold at once, and both may be false.
#[must_use]
pub fn derive_ambience(normalized: &str) -> (bool, bool) {
    let is_indoor = ambience::INDOOR_KEYWORDS
        .iter()
        .any(|keyword| normalized.contains(keyword));
    let is_outdoor = ambience::OUTDOOR_KEYWORDS
        .iter()
        .any(|keyword| normalized.contains(keyword));
    (is_indoor, is_outdoor)
}

/// Capitalize the first letter of each whitespace-separated word
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for (i, word) in value.split_whitespace().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            for c in first.to_uppercase() {
                result.push(c);
            }
            result.extend(chars);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstantRandom(f64);

    impl RandomSource for ConstantRandom {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("wine tasting"), "Wine Tasting");
        assert_eq!(title_case("  hiking "), "Hiking");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_jitter_bounds() {
        assert!((jitter(0.0) - (-placement::JITTER_DEGREES)).abs() < f64::EPSILON);
        assert!(jitter(0.5).abs() < f64::EPSILON);
        assert!(jitter(0.999) < placement::JITTER_DEGREES);
    }

    #[test]
    fn test_coordinates_use_theme_offset() {
        let base = Coordinates { lat: 10.0, lng: 20.0 };
        let mut rng = ConstantRandom(0.5);
        let placed = synthesize_coordinates(base, Theme::Nature, &mut rng);
        let (lat_offset, lng_offset) = placement::NATURE_OFFSET;
        assert!((placed.lat - (base.lat + lat_offset)).abs() < 1e-12);
        assert!((placed.lng - (base.lng + lng_offset)).abs() < 1e-12);
    }

    #[test]
    fn test_ambience_flags_are_independent() {
        assert_eq!(derive_ambience("museums"), (true, false));
        assert_eq!(derive_ambience("hiking"), (false, true));
        assert_eq!(derive_ambience("wine tasting"), (false, false));
        assert_eq!(derive_ambience("shopping near parks"), (true, true));
    }

    #[test]
    fn test_template_selection_spans_all_three() {
        for (sample, marker) in [(0.0, "Soak up"), (0.4, "Join locals"), (0.9, "From dusk")] {
            let mut rng = ConstantRandom(sample);
            let text = themed_description(Theme::Vibe, "nightlife", "Lisbon", &mut rng);
            assert!(
                text.contains(marker),
                "sample {sample} produced unexpected template: {text}"
            );
        }
    }
}
