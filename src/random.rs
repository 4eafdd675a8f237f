// ABOUTME: Injectable randomness source for coordinate jitter and template selection
// ABOUTME: Provides seeded and thread-local implementations over the rand crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voyara Travel Intelligence

//! Pluggable randomness for the synthesis steps.
//!
//! Coordinate jitter and description-template selection are the only
//! nondeterministic parts of the engine. They draw from a [`RandomSource`] so
//! production callers can use ambient entropy or a fixed seed, and tests can
//! supply a deterministic fake to assert exact output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random floats in `[0, 1)`
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`
    fn next_f64(&mut self) -> f64;
}

/// Seeded random source for reproducible synthesis output
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a source seeded from the given value
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Random source backed by the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }
}
