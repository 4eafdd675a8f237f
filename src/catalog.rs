// ABOUTME: Static activity mapping table and POI category catalog
// ABOUTME: Provides the read-only MappingRegistry consulted by classification and migration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voyara Travel Intelligence

//! Static classification tables behind a read-only registry.
//!
//! The registry is built once (at service start or per test) and passed by
//! reference into the classifier and migration functions. Table order is part
//! of the classification contract: when two entries tie on fuzzy score, the
//! first one declared wins.

use serde::{Deserialize, Serialize};

use crate::models::{PoiCategory, Theme};

/// One entry of the activity mapping table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityMapping {
    /// Canonical lowercase activity label
    pub activity: String,
    /// Theme this activity maps to
    pub suggested_theme: Theme,
    /// Category key into the catalog
    pub suggested_category_id: String,
    /// Mapping confidence in `[0, 1]`
    pub confidence: f64,
    /// Lowercase keywords used for fuzzy matching; doubles as the tag set of
    /// synthesized POIs
    pub keywords: Vec<String>,
}

/// Read-only registry holding the mapping table and the category catalog
#[derive(Debug, Clone)]
pub struct MappingRegistry {
    mappings: Vec<ActivityMapping>,
    categories: Vec<PoiCategory>,
}

impl MappingRegistry {
    /// Build a registry from explicit tables
    ///
    /// Mapping order is preserved and observable (tie-breaks); categories are
    /// kept in catalog order per theme.
    #[must_use]
    pub fn new(mappings: Vec<ActivityMapping>, categories: Vec<PoiCategory>) -> Self {
        Self {
            mappings,
            categories,
        }
    }

    /// Build the registry from the built-in platform tables
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_mappings(), builtin_categories())
    }

    /// All mapping entries in table order
    #[must_use]
    pub fn mappings(&self) -> &[ActivityMapping] {
        &self.mappings
    }

    /// All category records in catalog order
    #[must_use]
    pub fn categories(&self) -> &[PoiCategory] {
        &self.categories
    }

    /// Look up a mapping whose canonical label equals the normalized activity
    #[must_use]
    pub fn exact_match(&self, normalized: &str) -> Option<&ActivityMapping> {
        self.mappings.iter().find(|m| m.activity == normalized)
    }

    /// Look up a category by its catalog key
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&PoiCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Categories nested under the given theme, in catalog order
    pub fn categories_for_theme(&self, theme: Theme) -> impl Iterator<Item = &PoiCategory> {
        self.categories.iter().filter(move |c| c.theme == theme)
    }
}

fn mapping(
    activity: &str,
    theme: Theme,
    category_id: &str,
    confidence: f64,
    keywords: &[&str],
) -> ActivityMapping {
    ActivityMapping {
        activity: activity.to_owned(),
        suggested_theme: theme,
        suggested_category_id: category_id.to_owned(),
        confidence,
        keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
    }
}

fn poi_category(id: &str, name: &str, theme: Theme) -> PoiCategory {
    PoiCategory {
        id: id.to_owned(),
        name: name.to_owned(),
        theme,
    }
}

/// Built-in category catalog: theme -> ordered category list
fn builtin_categories() -> Vec<PoiCategory> {
    vec![
        // vibe
        poi_category("nightlife", "Nightlife", Theme::Vibe),
        poi_category("bars_clubs", "Bars & Clubs", Theme::Vibe),
        poi_category("live_music", "Live Music", Theme::Vibe),
        poi_category("festivals", "Festivals & Events", Theme::Vibe),
        // adventure
        poi_category("outdoor_activities", "Outdoor Activities", Theme::Adventure),
        poi_category("water_sports", "Water Sports", Theme::Adventure),
        poi_category("winter_sports", "Winter Sports", Theme::Adventure),
        poi_category("extreme_sports", "Extreme Sports", Theme::Adventure),
        // discover
        poi_category("cultural_experiences", "Cultural Experiences", Theme::Discover),
        poi_category("museums_galleries", "Museums & Galleries", Theme::Discover),
        poi_category("historical_sites", "Historical Sites", Theme::Discover),
        poi_category("local_markets", "Local Markets", Theme::Discover),
        // indulge
        poi_category("fine_dining", "Fine Dining", Theme::Indulge),
        poi_category("spa_wellness", "Spa & Wellness", Theme::Indulge),
        poi_category("shopping", "Shopping", Theme::Indulge),
        poi_category("wine_tasting", "Wine & Gastronomy", Theme::Indulge),
        // nature
        poi_category("parks_gardens", "Parks & Gardens", Theme::Nature),
        poi_category("beaches", "Beaches", Theme::Nature),
        poi_category("hiking_trails", "Hiking Trails", Theme::Nature),
        poi_category("wildlife", "Wildlife & Safari", Theme::Nature),
    ]
}

/// Built-in activity mapping table (~30 canonical activities)
fn builtin_mappings() -> Vec<ActivityMapping> {
    vec![
        mapping(
            "hiking",
            Theme::Adventure,
            "outdoor_activities",
            0.95,
            &["hike", "trail", "trekking", "outdoor"],
        ),
        mapping(
            "nightlife",
            Theme::Vibe,
            "nightlife",
            0.95,
            &["night", "club", "party", "dancing"],
        ),
        mapping(
            "museums",
            Theme::Discover,
            "museums_galleries",
            0.95,
            &["museum", "exhibition", "collection", "history"],
        ),
        mapping(
            "beaches",
            Theme::Nature,
            "beaches",
            0.95,
            &["beach", "coast", "seaside", "sand"],
        ),
        mapping(
            "shopping",
            Theme::Indulge,
            "shopping",
            0.9,
            &["shop", "boutique", "mall", "fashion"],
        ),
        mapping(
            "restaurants",
            Theme::Indulge,
            "fine_dining",
            0.9,
            &["restaurant", "dining", "cuisine", "food"],
        ),
        mapping(
            "surfing",
            Theme::Adventure,
            "water_sports",
            0.95,
            &["surf", "waves", "board"],
        ),
        mapping(
            "skiing",
            Theme::Adventure,
            "winter_sports",
            0.95,
            &["ski", "snow", "slopes", "alpine"],
        ),
        mapping(
            "snowboarding",
            Theme::Adventure,
            "winter_sports",
            0.9,
            &["snowboard", "snow", "slopes"],
        ),
        mapping(
            "diving",
            Theme::Adventure,
            "water_sports",
            0.9,
            &["dive", "scuba", "underwater", "reef"],
        ),
        mapping(
            "snorkeling",
            Theme::Adventure,
            "water_sports",
            0.9,
            &["snorkel", "reef", "lagoon"],
        ),
        mapping(
            "kayaking",
            Theme::Adventure,
            "water_sports",
            0.9,
            &["kayak", "paddle", "river"],
        ),
        mapping(
            "sailing",
            Theme::Adventure,
            "water_sports",
            0.9,
            &["sail", "boat", "yacht", "regatta"],
        ),
        mapping(
            "cycling",
            Theme::Adventure,
            "outdoor_activities",
            0.9,
            &["bike", "biking", "cycle", "mountain bike"],
        ),
        mapping(
            "climbing",
            Theme::Adventure,
            "extreme_sports",
            0.9,
            &["climb", "boulder", "via ferrata", "rock"],
        ),
        mapping(
            "paragliding",
            Theme::Adventure,
            "extreme_sports",
            0.85,
            &["paraglide", "glide", "tandem flight"],
        ),
        mapping(
            "art galleries",
            Theme::Discover,
            "museums_galleries",
            0.9,
            &["gallery", "art", "exhibition"],
        ),
        mapping(
            "historical tours",
            Theme::Discover,
            "historical_sites",
            0.9,
            &["history", "heritage", "ruins", "old town"],
        ),
        mapping(
            "architecture",
            Theme::Discover,
            "historical_sites",
            0.85,
            &["cathedral", "landmark", "gothic", "basilica"],
        ),
        mapping(
            "local markets",
            Theme::Discover,
            "local_markets",
            0.9,
            &["market", "bazaar", "stalls", "street food"],
        ),
        mapping(
            "food tours",
            Theme::Discover,
            "cultural_experiences",
            0.85,
            &["tasting tour", "culinary", "tapas", "street food"],
        ),
        mapping(
            "cooking classes",
            Theme::Discover,
            "cultural_experiences",
            0.85,
            &["cooking", "class", "workshop", "cuisine"],
        ),
        mapping(
            "wine tasting",
            Theme::Indulge,
            "wine_tasting",
            0.9,
            &["wine", "vineyard", "winery", "cellar"],
        ),
        mapping(
            "fine dining",
            Theme::Indulge,
            "fine_dining",
            0.9,
            &["gourmet", "michelin", "tasting menu"],
        ),
        mapping(
            "spa",
            Theme::Indulge,
            "spa_wellness",
            0.9,
            &["spa", "massage", "wellness", "thermal"],
        ),
        mapping(
            "live music",
            Theme::Vibe,
            "live_music",
            0.9,
            &["music", "concert", "jazz", "band"],
        ),
        mapping(
            "festivals",
            Theme::Vibe,
            "festivals",
            0.85,
            &["festival", "celebration", "carnival"],
        ),
        mapping(
            "bars",
            Theme::Vibe,
            "bars_clubs",
            0.9,
            &["bar", "pub", "cocktail", "drinks"],
        ),
        mapping(
            "parks",
            Theme::Nature,
            "parks_gardens",
            0.9,
            &["park", "garden", "green", "picnic"],
        ),
        mapping(
            "wildlife watching",
            Theme::Nature,
            "wildlife",
            0.85,
            &["wildlife", "safari", "birds", "animals"],
        ),
        mapping(
            "scenic views",
            Theme::Nature,
            "hiking_trails",
            0.8,
            &["scenic", "viewpoint", "panorama", "lookout"],
        ),
        mapping(
            "camping",
            Theme::Nature,
            "hiking_trails",
            0.8,
            &["camp", "tent", "glamping"],
        ),
    ]
}
