// ABOUTME: Command modules for foodscan-cli
// ABOUTME: Single-photo scan, parallel directory batch, and nutrition lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

pub mod batch;
pub mod nutrition;
pub mod scan;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Exit status when the input itself is at fault
pub const USER_ERROR_EXIT: u8 = 2;

/// Deterministic generator when seeded, OS entropy otherwise
pub fn rng_for(seed: Option<u64>) -> ChaCha8Rng {
    seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
}
