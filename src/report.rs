// ABOUTME: Migration report rendering and CSV export over batch results
// ABOUTME: Pure formatting; callers persist or display the returned strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voyara Travel Intelligence

//! Report and export rendering over a batch migration result map.
//!
//! Both functions are pure aggregations: they return strings and perform no
//! I/O. The CSV export uses RFC 4180 quoting, so embedded double quotes are
//! doubled and the field is wrapped in quotes.

use std::collections::BTreeMap;

use crate::errors::{AppError, AppResult};
use crate::migration::MigrationResult;
use crate::models::Theme;

/// CSV header row of the migration export
pub const CSV_HEADER: [&str; 10] = [
    "Destination",
    "Original Activity",
    "POI Name",
    "Theme",
    "Category",
    "Description",
    "Latitude",
    "Longitude",
    "Price Level",
    "Status",
];

/// Render a Markdown-style summary of a batch migration
#[must_use]
pub fn generate_migration_report(results: &BTreeMap<String, MigrationResult>) -> String {
    let total_migrated: usize = results.values().map(|r| r.migrated_pois).sum();
    let total_skipped: usize = results.values().map(|r| r.skipped_activities).sum();
    let total_errors: usize = results.values().map(|r| r.errors.len()).sum();
    let failed_destinations = results.values().filter(|r| !r.success).count();

    let mut report = String::new();
    report.push_str("# Activity to POI Migration Report\n\n");

    report.push_str("## Summary\n\n");
    report.push_str(&format!("- Destinations processed: {}\n", results.len()));
    report.push_str(&format!("- Destinations failed: {failed_destinations}\n"));
    report.push_str(&format!("- POIs generated: {total_migrated}\n"));
    report.push_str(&format!("- Activities skipped: {total_skipped}\n"));
    report.push_str(&format!("- Errors: {total_errors}\n\n"));

    report.push_str("## Destinations\n\n");
    for (code, result) in results {
        if result.success {
            report.push_str(&format!(
                "### {code}: {} migrated, {} skipped\n",
                result.migrated_pois, result.skipped_activities
            ));
        } else {
            report.push_str(&format!("### {code} (failed)\n"));
        }
        for error in &result.errors {
            report.push_str(&format!("- {error}\n"));
        }
        report.push('\n');
    }

    report.push_str("## Theme distribution\n\n");
    for theme in Theme::all() {
        let count = results
            .values()
            .flat_map(|r| &r.generated_pois)
            .filter(|poi| poi.theme == theme)
            .count();
        report.push_str(&format!("- {theme}: {count}\n"));
    }

    report
}

/// Serialize every generated POI of a batch into CSV
///
/// One row per POI, keyed by the destination's IATA code, with the fixed
/// [`CSV_HEADER`] columns.
///
/// # Errors
///
/// Returns a serialization error if CSV encoding fails.
pub fn export_migration_to_csv(results: &BTreeMap<String, MigrationResult>) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .map_err(|e| AppError::serialization(format!("CSV header write failed: {e}")))?;

    for (code, result) in results {
        for poi in &result.generated_pois {
            let lat = poi.coordinates.lat.to_string();
            let lng = poi.coordinates.lng.to_string();
            writer
                .write_record([
                    code.as_str(),
                    poi.source_activity.as_str(),
                    poi.name.as_str(),
                    poi.theme.as_str(),
                    poi.category_id.as_str(),
                    poi.description.as_str(),
                    lat.as_str(),
                    lng.as_str(),
                    poi.price_level.as_str(),
                    poi.status.as_str(),
                ])
                .map_err(|e| AppError::serialization(format!("CSV row write failed: {e}")))?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::serialization(format!("CSV flush failed: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::serialization(format!("CSV output is not UTF-8: {e}")).with_source(e))
}
