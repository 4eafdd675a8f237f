// ABOUTME: Main library entry point for the Voyara activity intelligence engine
// ABOUTME: Classifies free-text activities and synthesizes draft POI records for destinations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voyara Travel Intelligence

#![deny(unsafe_code)]

//! # Voyara Intelligence
//!
//! Activity classification and point-of-interest synthesis for the Voyara
//! travel platform. Given a destination's free-text list of supported
//! activities, this crate maps each activity to a `(theme, category)` pair
//! using a static keyword table with fuzzy scoring, synthesizes a draft POI
//! record per mapped activity, and renders a migration report plus a CSV
//! export for review.
//!
//! ## Features
//!
//! - **Keyword classification**: exact-label lookup with a substring-based
//!   fuzzy fallback over a curated mapping table
//! - **POI synthesis**: theme-clustered coordinates, templated descriptions,
//!   indoor/outdoor tagging, always emitted in `draft` status
//! - **Batch migration**: per-destination isolation, nothing propagates to
//!   sibling destinations
//! - **Reporting**: Markdown-style summary and RFC 4180 CSV export
//!
//! All operations are synchronous, pure transforms over in-memory data. The
//! only nondeterminism (coordinate jitter, description template choice) sits
//! behind the injectable [`RandomSource`] trait so callers and tests can pin
//! exact output with a seed.
//!
//! ## Example
//!
//! ```rust
//! use voyara_intelligence::{
//!     convert_activities_to_pois, Coordinates, Destination, MappingRegistry,
//!     MigrationOptions, SeededRandom,
//! };
//!
//! # fn main() -> voyara_intelligence::AppResult<()> {
//! let registry = MappingRegistry::builtin();
//! let destination = Destination {
//!     iata_code: "BCN".to_owned(),
//!     city_name: "Barcelona".to_owned(),
//!     coordinates: Coordinates { lat: 41.38, lng: 2.17 },
//!     supported_activities: vec!["hiking".to_owned(), "nightlife".to_owned()],
//! };
//! let mut rng = SeededRandom::new(7);
//! let result = convert_activities_to_pois(
//!     &registry,
//!     &destination,
//!     &MigrationOptions::default(),
//!     &mut rng,
//! )?;
//! assert_eq!(result.migrated_pois, 2);
//! # Ok(())
//! # }
//! ```

/// Static activity mapping table and category catalog behind a read-only registry
pub mod catalog;

/// Activity-to-mapping classification with exact and fuzzy matching
pub mod classifier;

/// Scoring weights, placement offsets, and ambience keyword lists
pub mod constants;

/// Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
pub mod errors;

/// Activity-to-POI conversion, batch migration, and POI validation
pub mod migration;

/// Domain models: themes, destinations, categories, and draft POIs
pub mod models;

/// Injectable randomness source for jitter and template selection
pub mod random;

/// Migration report rendering and CSV export
pub mod report;

/// Coordinate placement, description templates, and POI assembly
pub mod synthesis;

pub use catalog::{ActivityMapping, MappingRegistry};
pub use classifier::find_best_activity_mapping;
pub use errors::{AppError, AppResult, ErrorCode};
pub use migration::{
    batch_migrate_destinations, convert_activities_to_pois, validate_poi_data, MigrationOptions,
    MigrationResult, PoiValidation,
};
pub use models::{Coordinates, Destination, DraftPoi, PoiCategory, PoiStatus, PriceLevel, Theme};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use report::{export_migration_to_csv, generate_migration_report};
