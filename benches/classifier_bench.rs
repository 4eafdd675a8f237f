// ABOUTME: Criterion benchmarks for activity classification and POI conversion
// ABOUTME: Measures exact-hit, fuzzy, and miss lookups plus a full destination migration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voyara Travel Intelligence

//! Criterion benchmarks for the classification and migration hot paths.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use voyara_intelligence::{
    convert_activities_to_pois, find_best_activity_mapping, Coordinates, Destination,
    MappingRegistry, MigrationOptions, SeededRandom,
};

fn bench_destination() -> Destination {
    Destination {
        iata_code: "BCN".to_owned(),
        city_name: "Barcelona".to_owned(),
        coordinates: Coordinates { lat: 41.38, lng: 2.17 },
        supported_activities: [
            "hiking",
            "nightlife",
            "museums",
            "wine tasting",
            "mountain biking",
            "unknown_xyz_activity",
        ]
        .iter()
        .map(|a| (*a).to_owned())
        .collect(),
    }
}

fn classification_benchmark(c: &mut Criterion) {
    let registry = MappingRegistry::builtin();

    c.bench_function("classify_exact_hit", |b| {
        b.iter(|| find_best_activity_mapping(&registry, black_box("hiking")));
    });

    c.bench_function("classify_fuzzy_hit", |b| {
        b.iter(|| find_best_activity_mapping(&registry, black_box("mountain biking")));
    });

    c.bench_function("classify_miss", |b| {
        b.iter(|| find_best_activity_mapping(&registry, black_box("unknown_xyz_activity")));
    });
}

fn migration_benchmark(c: &mut Criterion) {
    let registry = MappingRegistry::builtin();
    let destination = bench_destination();
    let options = MigrationOptions::default();

    c.bench_function("convert_destination", |b| {
        b.iter(|| {
            let mut rng = SeededRandom::new(42);
            convert_activities_to_pois(
                &registry,
                black_box(&destination),
                &options,
                &mut rng,
            )
        });
    });
}

criterion_group!(benches, classification_benchmark, migration_benchmark);
criterion_main!(benches);
