// ABOUTME: Batch CLI that migrates destination activity lists into draft POIs
// ABOUTME: Reads destinations from JSON, writes the migration report and CSV export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voyara Travel Intelligence

//! Batch activity migration for the Voyara admin back-office.
//!
//! Reads an array of destination records from a JSON file, runs the
//! activity-to-POI migration over all of them, and writes the report and CSV
//! export for review. Generated POIs are drafts only; nothing is persisted
//! by this tool.
//!
//! Usage:
//! ```bash
//! # Report to stdout
//! cargo run --bin migrate-activities -- --input destinations.json
//!
//! # Write report and CSV, include unmatched activities, reproducible output
//! cargo run --bin migrate-activities -- --input destinations.json \
//!     --report-out report.md --csv-out pois.csv --include-unknown --seed 42
//!
//! # Verbose output
//! cargo run --bin migrate-activities -- --input destinations.json -v
//! ```

use chrono::Utc;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use voyara_intelligence::{
    batch_migrate_destinations, export_migration_to_csv, generate_migration_report, AppError,
    Destination, MappingRegistry, MigrationOptions, PriceLevel, RandomSource, SeededRandom,
    ThreadRandom,
};

/// CLI-specific error type for the migration binary
#[derive(Error, Debug)]
enum MigrateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid destinations file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    App(#[from] AppError),
}

type MigrateResult<T> = Result<T, MigrateError>;

#[derive(Parser)]
#[command(
    name = "migrate-activities",
    about = "Voyara activity-to-POI batch migration",
    long_about = "Convert destination activity lists into draft POI records, with a review report and CSV export"
)]
struct MigrateArgs {
    /// JSON file containing an array of destination records
    #[arg(long)]
    input: PathBuf,

    /// Write the migration report to this path (default: stdout)
    #[arg(long)]
    report_out: Option<PathBuf>,

    /// Write the CSV export to this path
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// Also generate POIs for activities with no table match
    #[arg(long)]
    include_unknown: bool,

    /// Use the flat description fallback instead of themed templates
    #[arg(long)]
    plain_descriptions: bool,

    /// Price level assigned to generated POIs
    #[arg(long, default_value = "moderate")]
    price_level: PriceLevel,

    /// Random seed for reproducible output (optional)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> MigrateResult<()> {
    let args = MigrateArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("Voyara activity migration");
    info!("   Input: {}", args.input.display());

    let raw = fs::read_to_string(&args.input)?;
    let destinations: Vec<Destination> = serde_json::from_str(&raw)?;
    info!("   Destinations: {}", destinations.len());

    let registry = MappingRegistry::builtin();
    let options = MigrationOptions {
        include_unknown_activities: args.include_unknown,
        generate_descriptions: !args.plain_descriptions,
        default_price_level: args.price_level,
        ..MigrationOptions::default()
    };

    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => {
            info!("   Random seed: {seed}");
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(ThreadRandom),
    };

    let results = batch_migrate_destinations(&registry, &destinations, &options, rng.as_mut());

    let migrated: usize = results.values().map(|r| r.migrated_pois).sum();
    let skipped: usize = results.values().map(|r| r.skipped_activities).sum();
    let failed = results.values().filter(|r| !r.success).count();

    info!("Migration finished: {migrated} POIs generated, {skipped} activities skipped");
    if failed > 0 {
        info!("   Failed destinations: {failed}");
    }
    for (code, result) in &results {
        info!(
            "   {code}: {} migrated, {} skipped, {} errors",
            result.migrated_pois,
            result.skipped_activities,
            result.errors.len()
        );
    }

    let report = generate_migration_report(&results);
    match args.report_out {
        Some(path) => {
            let stamped = format!("Generated: {}\n\n{report}", Utc::now().to_rfc3339());
            fs::write(&path, stamped)?;
            info!("Report written to {}", path.display());
        }
        None => println!("{report}"),
    }

    if let Some(path) = args.csv_out {
        let csv_text = export_migration_to_csv(&results)?;
        fs::write(&path, csv_text)?;
        info!("CSV export written to {}", path.display());
    }

    Ok(())
}
