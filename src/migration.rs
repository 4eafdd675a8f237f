// ABOUTME: Activity-to-POI conversion pipeline with per-destination batch isolation
// ABOUTME: Implements migration options/results, the conversion loop, and POI validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voyara Travel Intelligence

//! Conversion of destination activity lists into draft POI records.
//!
//! Failures never abort a run: a bad activity is counted as a skip and
//! reported in the result's error list, and in batch mode a failing
//! destination is reported as a failed result without touching its siblings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::catalog::{ActivityMapping, MappingRegistry};
use crate::classifier::find_best_activity_mapping;
use crate::constants::{fallback, scoring};
use crate::errors::{AppError, AppResult};
use crate::models::{Coordinates, Destination, DraftPoi, PriceLevel, Theme};
use crate::random::RandomSource;
use crate::synthesis::{synthesize_poi, PoiBlueprint};

/// Options controlling a migration run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationOptions {
    /// Base coordinates for POI placement; falls back to the destination's
    /// own coordinates when absent
    pub default_coordinates: Option<Coordinates>,
    /// When true, activities with no table match still synthesize a POI using
    /// the fallback theme and category
    pub include_unknown_activities: bool,
    /// Accepted for contract compatibility; consulted by no branch of the
    /// current algorithm
    pub auto_assign_themes: bool,
    /// When true, descriptions come from the themed templates; otherwise the
    /// flat `Experience {activity} in {city}` fallback is used
    pub generate_descriptions: bool,
    /// Price bracket assigned to every synthesized POI
    pub default_price_level: PriceLevel,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            default_coordinates: None,
            include_unknown_activities: false,
            auto_assign_themes: false,
            generate_descriptions: true,
            default_price_level: PriceLevel::Moderate,
        }
    }
}

/// Aggregate outcome of migrating one destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationResult {
    /// False only when the destination failed as a whole (batch isolation)
    pub success: bool,
    /// Number of POIs generated; equals `generated_pois.len()`
    pub migrated_pois: usize,
    /// Number of activities skipped (no match, or processing failure)
    pub skipped_activities: usize,
    /// Error messages collected during the run, in occurrence order
    pub errors: Vec<String>,
    /// Mappings applied plus synthetic low-confidence fallbacks, in
    /// occurrence order
    pub suggestions: Vec<ActivityMapping>,
    /// Synthesized draft POIs, in input-activity order
    pub generated_pois: Vec<DraftPoi>,
}

impl MigrationResult {
    fn new() -> Self {
        Self {
            success: true,
            migrated_pois: 0,
            skipped_activities: 0,
            errors: Vec::new(),
            suggestions: Vec::new(),
            generated_pois: Vec::new(),
        }
    }

    /// A whole-destination failure entry for batch results
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            errors: vec![message.into()],
            ..Self::new()
        }
    }
}

/// Outcome of validating a single POI record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoiValidation {
    /// True when no rule was violated
    pub is_valid: bool,
    /// All violated rules, not just the first
    pub errors: Vec<String>,
}

/// Convert a destination's supported activities into draft POIs
///
/// Activities are processed in input order. Unmatched activities are skipped
/// (with a synthetic low-confidence suggestion recorded) unless
/// `include_unknown_activities` is set, in which case they fall back to the
/// discover theme. A failure while processing one activity is recorded and
/// counted as a skip; the remaining activities still run.
///
/// An empty activity list short-circuits with a single error message while
/// leaving `success` set to true; callers branching on `success` should also
/// inspect `errors`.
///
/// # Errors
///
/// Returns an error only for a structurally invalid destination (non-finite
/// base coordinates). [`batch_migrate_destinations`] converts that case into
/// a failed result for the affected destination alone.
pub fn convert_activities_to_pois(
    registry: &MappingRegistry,
    destination: &Destination,
    options: &MigrationOptions,
    rng: &mut dyn RandomSource,
) -> AppResult<MigrationResult> {
    let base_coordinates = options
        .default_coordinates
        .unwrap_or(destination.coordinates);
    if !base_coordinates.is_finite() {
        return Err(AppError::invalid_input(format!(
            "destination {} has non-finite base coordinates",
            destination.iata_code
        ))
        .with_resource_id(destination.iata_code.clone()));
    }

    let mut result = MigrationResult::new();

    if destination.supported_activities.is_empty() {
        result.errors.push(format!(
            "Destination {} has no supported activities to migrate",
            destination.iata_code
        ));
        return Ok(result);
    }

    for activity in &destination.supported_activities {
        let mapping = find_best_activity_mapping(registry, activity);

        if mapping.is_none() && !options.include_unknown_activities {
            debug!(
                destination = %destination.iata_code,
                activity = %activity,
                "no mapping found, skipping activity"
            );
            result.skipped_activities += 1;
            result.suggestions.push(fallback_suggestion(activity));
            continue;
        }

        let (theme, category_id) = mapping.map_or_else(
            || {
                (
                    fallback::FALLBACK_THEME,
                    fallback::FALLBACK_CATEGORY_ID.to_owned(),
                )
            },
            |m| (m.suggested_theme, m.suggested_category_id.clone()),
        );

        match process_activity(
            registry,
            destination,
            base_coordinates,
            activity,
            theme,
            &category_id,
            mapping,
            options,
            rng,
        ) {
            Ok(poi) => {
                result.generated_pois.push(poi);
                result.migrated_pois += 1;
                if let Some(m) = mapping {
                    result.suggestions.push(m.clone());
                }
            }
            Err(err) => {
                result
                    .errors
                    .push(format!("Failed to process activity \"{activity}\": {err}"));
                result.skipped_activities += 1;
            }
        }
    }

    info!(
        destination = %destination.iata_code,
        migrated = result.migrated_pois,
        skipped = result.skipped_activities,
        "destination migration finished"
    );

    Ok(result)
}

/// Synthesize one POI for a classified activity
#[allow(clippy::too_many_arguments)]
fn process_activity(
    registry: &MappingRegistry,
    destination: &Destination,
    base_coordinates: Coordinates,
    activity: &str,
    theme: Theme,
    category_id: &str,
    mapping: Option<&ActivityMapping>,
    options: &MigrationOptions,
    rng: &mut dyn RandomSource,
) -> AppResult<DraftPoi> {
    // Defensive: theme/category pairs come from the same table that seeds the
    // catalog, so a miss here indicates a misconfigured registry.
    if registry.category(category_id).is_none() {
        return Err(AppError::not_found(format!("category \"{category_id}\""))
            .with_resource_id(category_id.to_owned()));
    }

    let tags = mapping.map_or_else(
        || vec![activity.trim().to_lowercase()],
        |m| m.keywords.clone(),
    );

    let blueprint = PoiBlueprint {
        activity,
        city_name: &destination.city_name,
        base_coordinates,
        theme,
        category_id,
        tags,
        price_level: options.default_price_level,
        templated_description: options.generate_descriptions,
    };
    Ok(synthesize_poi(&blueprint, rng))
}

/// Synthetic low-confidence suggestion recorded for an unmatched activity
fn fallback_suggestion(activity: &str) -> ActivityMapping {
    ActivityMapping {
        activity: activity.trim().to_lowercase(),
        suggested_theme: fallback::FALLBACK_THEME,
        suggested_category_id: fallback::FALLBACK_CATEGORY_ID.to_owned(),
        confidence: scoring::FALLBACK_CONFIDENCE,
        keywords: Vec::new(),
    }
}

/// Migrate several destinations, isolating failures per destination
///
/// A destination whose conversion fails contributes a `success = false`
/// result with a single error and no POIs; its siblings are unaffected.
pub fn batch_migrate_destinations(
    registry: &MappingRegistry,
    destinations: &[Destination],
    options: &MigrationOptions,
    rng: &mut dyn RandomSource,
) -> BTreeMap<String, MigrationResult> {
    let mut results = BTreeMap::new();
    for destination in destinations {
        let result = convert_activities_to_pois(registry, destination, options, rng)
            .unwrap_or_else(|err| {
                warn!(
                    destination = %destination.iata_code,
                    error = %err,
                    "destination migration failed"
                );
                MigrationResult::failed(format!("Migration failed: {err}"))
            });
        results.insert(destination.iata_code.clone(), result);
    }
    results
}

/// Validate a POI record against the platform's minimum data rules
///
/// Returns every violated rule, not just the first.
#[must_use]
pub fn validate_poi_data(registry: &MappingRegistry, poi: &DraftPoi) -> PoiValidation {
    let mut errors = Vec::new();

    if poi.name.trim().chars().count() < 2 {
        errors.push("POI name must be at least 2 characters long".to_owned());
    }
    if poi.description.chars().count() < 10 {
        errors.push("POI description must be at least 10 characters long".to_owned());
    }
    if !poi.coordinates.is_finite() {
        errors.push("POI coordinates must be finite numbers".to_owned());
    }
    if registry.category(&poi.category_id).is_none() {
        errors.push(format!(
            "POI references unknown category \"{}\"",
            poi.category_id
        ));
    }

    PoiValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}
