// ABOUTME: Shared test utilities for migration and classification integration tests
// ABOUTME: Provides destination fixtures, registry builders, and a deterministic random source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voyara Travel Intelligence

#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
#![allow(missing_docs)]

//! Shared test utilities for `voyara_intelligence` integration tests.

use voyara_intelligence::{
    ActivityMapping, Coordinates, Destination, MappingRegistry, PoiCategory, RandomSource, Theme,
};

/// Deterministic random source replaying a fixed sequence, cycling when
/// exhausted
pub struct FixedRandom {
    values: Vec<f64>,
    index: usize,
}

impl FixedRandom {
    pub fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "FixedRandom needs at least one value");
        Self {
            values: values.to_vec(),
            index: 0,
        }
    }

    /// A source that always returns the same sample
    pub fn constant(value: f64) -> Self {
        Self::new(&[value])
    }
}

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}

/// Build a destination record with the given activities
pub fn destination(iata: &str, city: &str, lat: f64, lng: f64, activities: &[&str]) -> Destination {
    Destination {
        iata_code: iata.to_owned(),
        city_name: city.to_owned(),
        coordinates: Coordinates { lat, lng },
        supported_activities: activities.iter().map(|a| (*a).to_owned()).collect(),
    }
}

/// The Barcelona fixture used by the migration examples
pub fn barcelona() -> Destination {
    destination(
        "BCN",
        "Barcelona",
        41.38,
        2.17,
        &["hiking", "nightlife", "unknown_xyz_activity"],
    )
}

/// Build a mapping table entry for custom registries
pub fn mapping(activity: &str, theme: Theme, category_id: &str, keywords: &[&str]) -> ActivityMapping {
    ActivityMapping {
        activity: activity.to_owned(),
        suggested_theme: theme,
        suggested_category_id: category_id.to_owned(),
        confidence: 0.9,
        keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
    }
}

/// Build a category record for custom registries
pub fn category(id: &str, name: &str, theme: Theme) -> PoiCategory {
    PoiCategory {
        id: id.to_owned(),
        name: name.to_owned(),
        theme,
    }
}

/// Registry with a single discover category, for classifier-only tests
pub fn classifier_registry(mappings: Vec<ActivityMapping>) -> MappingRegistry {
    MappingRegistry::new(
        mappings,
        vec![category(
            "cultural_experiences",
            "Cultural Experiences",
            Theme::Discover,
        )],
    )
}
