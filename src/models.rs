// ABOUTME: Domain models for activity classification and POI synthesis
// ABOUTME: Defines themes, price levels, destinations, categories, and draft POI records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voyara Travel Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Top-level grouping used to bucket points of interest for discovery
///
/// The five themes are fixed platform-wide; categories nest under exactly one
/// theme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Nightlife, bars, music, and the city's social pulse
    Vibe,
    /// Outdoor, water, winter, and adrenaline activities
    Adventure,
    /// Culture, history, museums, and local life
    Discover,
    /// Dining, wellness, shopping, and other treats
    Indulge,
    /// Parks, beaches, trails, and wildlife
    Nature,
}

impl Theme {
    /// All themes in canonical platform order
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Vibe,
            Self::Adventure,
            Self::Discover,
            Self::Indulge,
            Self::Nature,
        ]
    }

    /// Lowercase label used in serialized payloads and reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vibe => "vibe",
            Self::Adventure => "adventure",
            Self::Discover => "discover",
            Self::Indulge => "indulge",
            Self::Nature => "nature",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indicative price bracket for a point of interest
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PriceLevel {
    /// Low-cost or free
    Budget,
    /// Mid-range pricing
    #[default]
    Moderate,
    /// Above-average pricing
    Expensive,
    /// Premium pricing
    Luxury,
}

impl PriceLevel {
    /// Lowercase label used in serialized payloads and reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Moderate => "moderate",
            Self::Expensive => "expensive",
            Self::Luxury => "luxury",
        }
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "moderate" => Ok(Self::Moderate),
            "expensive" => Ok(Self::Expensive),
            "luxury" => Ok(Self::Luxury),
            other => Err(AppError::invalid_input(format!(
                "unknown price level \"{other}\" (expected budget, moderate, expensive, or luxury)"
            ))),
        }
    }
}

/// Lifecycle state of a point of interest
///
/// Synthesized POIs are always emitted as `Draft`; promotion to `Active`
/// requires human review in the admin back-office.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PoiStatus {
    /// Awaiting human review, not publicly visible
    Draft,
    /// Reviewed and publicly visible
    Active,
}

impl PoiStatus {
    /// Lowercase label used in serialized payloads and reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
        }
    }
}

impl fmt::Display for PoiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

impl Coordinates {
    /// Whether both axes are finite numbers
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// A destination record as supplied by the platform catalog
///
/// Owned by the caller; migration only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    /// IATA airport/city code identifying the destination
    pub iata_code: String,
    /// Display city name
    pub city_name: String,
    /// Destination center coordinates
    pub coordinates: Coordinates,
    /// Free-text activity labels supported at this destination, in input order
    pub supported_activities: Vec<String>,
}

/// A category record nested under a theme
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoiCategory {
    /// Stable catalog key (e.g. `outdoor_activities`)
    pub id: String,
    /// Display name (e.g. "Outdoor Activities")
    pub name: String,
    /// Theme this category nests under
    pub theme: Theme,
}

/// A synthesized draft point of interest
///
/// Held in memory by the migration result; persistence is the caller's
/// responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftPoi {
    /// Display name
    pub name: String,
    /// Full description
    pub description: String,
    /// Compact description for list views
    pub short_description: String,
    /// Synthesized coordinates (presentation heuristic, not geocoding)
    pub coordinates: Coordinates,
    /// Theme bucket
    pub theme: Theme,
    /// Category key into the catalog
    pub category_id: String,
    /// Tag set for search and filtering
    pub tags: Vec<String>,
    /// Indicative price bracket
    pub price_level: PriceLevel,
    /// Whether the activity reads as an indoor experience
    pub is_indoor: bool,
    /// Whether the activity reads as an outdoor experience
    pub is_outdoor: bool,
    /// Lifecycle state; always `Draft` when synthesized
    pub status: PoiStatus,
    /// The free-text activity label this POI was synthesized from
    pub source_activity: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_theme_serialization_is_lowercase() {
        let json = serde_json::to_string(&Theme::Adventure).unwrap();
        assert_eq!(json, "\"adventure\"");
        let back: Theme = serde_json::from_str("\"nature\"").unwrap();
        assert_eq!(back, Theme::Nature);
    }

    #[test]
    fn test_price_level_parsing() {
        assert_eq!(PriceLevel::from_str("Luxury").unwrap(), PriceLevel::Luxury);
        assert_eq!(
            PriceLevel::from_str(" moderate ").unwrap(),
            PriceLevel::Moderate
        );
        assert!(PriceLevel::from_str("free").is_err());
    }

    #[test]
    fn test_coordinates_finite_check() {
        assert!(Coordinates { lat: 41.38, lng: 2.17 }.is_finite());
        assert!(!Coordinates {
            lat: f64::NAN,
            lng: 2.17
        }
        .is_finite());
        assert!(!Coordinates {
            lat: 41.38,
            lng: f64::INFINITY
        }
        .is_finite());
    }
}
