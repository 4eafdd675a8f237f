// ABOUTME: Integration tests for migration report rendering and CSV export
// ABOUTME: Covers summary aggregation, failure display, header shape, and quote escaping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voyara Travel Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{destination, FixedRandom};
use std::collections::BTreeMap;
use voyara_intelligence::{
    batch_migrate_destinations, export_migration_to_csv, generate_migration_report, Coordinates,
    DraftPoi, MappingRegistry, MigrationOptions, MigrationResult, PoiStatus, PriceLevel, Theme,
};

fn sample_batch() -> BTreeMap<String, MigrationResult> {
    let registry = MappingRegistry::builtin();
    let mut rng = FixedRandom::constant(0.5);
    let destinations = vec![
        destination("BCN", "Barcelona", 41.38, 2.17, &["hiking", "nightlife"]),
        destination("LIS", "Lisbon", 38.72, -9.14, &["surfing", "zzz gibberish"]),
    ];
    batch_migrate_destinations(
        &registry,
        &destinations,
        &MigrationOptions::default(),
        &mut rng,
    )
}

fn draft_poi(description: &str) -> DraftPoi {
    DraftPoi {
        name: "Nightlife in Berlin".to_owned(),
        description: description.to_owned(),
        short_description: "Nightlife in Berlin".to_owned(),
        coordinates: Coordinates {
            lat: 52.52,
            lng: 13.4,
        },
        theme: Theme::Vibe,
        category_id: "nightlife".to_owned(),
        tags: vec!["night".to_owned()],
        price_level: PriceLevel::Moderate,
        is_indoor: false,
        is_outdoor: false,
        status: PoiStatus::Draft,
        source_activity: "nightlife".to_owned(),
    }
}

// === Report rendering ===

#[test]
fn test_report_summarizes_batch_counts() {
    let results = sample_batch();
    let report = generate_migration_report(&results);

    assert!(report.starts_with("# Activity to POI Migration Report"));
    assert!(report.contains("- Destinations processed: 2"));
    assert!(report.contains("- POIs generated: 3"));
    assert!(report.contains("- Activities skipped: 1"));
    assert!(report.contains("### BCN: 2 migrated, 0 skipped"));
    assert!(report.contains("### LIS: 1 migrated, 1 skipped"));
}

#[test]
fn test_report_theme_distribution_tally() {
    let results = sample_batch();
    let report = generate_migration_report(&results);

    // hiking + surfing are adventure, nightlife is vibe; other themes empty.
    assert!(report.contains("- adventure: 2"));
    assert!(report.contains("- vibe: 1"));
    assert!(report.contains("- nature: 0"));
}

#[test]
fn test_report_marks_failed_destinations() {
    let mut results = BTreeMap::new();
    results.insert(
        "ERR".to_owned(),
        MigrationResult::failed("Migration failed: bad coordinates"),
    );

    let report = generate_migration_report(&results);
    assert!(report.contains("- Destinations failed: 1"));
    assert!(report.contains("### ERR (failed)"));
    assert!(report.contains("- Migration failed: bad coordinates"));
}

// === CSV export ===

#[test]
fn test_csv_header_row() {
    let results = sample_batch();
    let csv_text = export_migration_to_csv(&results).unwrap();
    let header = csv_text.lines().next().unwrap();
    assert_eq!(
        header,
        "Destination,Original Activity,POI Name,Theme,Category,Description,Latitude,Longitude,Price Level,Status"
    );
}

#[test]
fn test_csv_row_count_matches_generated_pois() {
    let results = sample_batch();
    let total: usize = results.values().map(|r| r.generated_pois.len()).sum();
    let csv_text = export_migration_to_csv(&results).unwrap();
    assert_eq!(csv_text.lines().count(), total + 1);
}

#[test]
fn test_csv_doubles_embedded_quotes_and_round_trips() {
    let mut results = BTreeMap::new();
    let mut result = MigrationResult::failed("placeholder");
    result.success = true;
    result.errors.clear();
    result.migrated_pois = 1;
    result.generated_pois.push(draft_poi("He said \"hi\""));
    results.insert("BER".to_owned(), result);

    let csv_text = export_migration_to_csv(&results).unwrap();
    assert!(
        csv_text.contains("\"He said \"\"hi\"\"\""),
        "quotes not doubled: {csv_text}"
    );

    // A standard CSV reader must reproduce the original description.
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(&record[1], "nightlife");
    assert_eq!(&record[5], "He said \"hi\"");
}

#[test]
fn test_csv_skips_failed_destinations() {
    let mut results = sample_batch();
    results.insert(
        "ERR".to_owned(),
        MigrationResult::failed("Migration failed: bad coordinates"),
    );

    let csv_text = export_migration_to_csv(&results).unwrap();
    assert!(!csv_text.contains("ERR"));
}
