// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet test logging, synthetic photo builders, and seeded RNGs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation
)]
//! Shared test utilities for `foodscan`
//!
//! Synthetic images are built at the 224x224 analysis size so resizing does
//! not blur the statistics the tests reason about.

use foodscan::models::{MealTime, UserProfile, WeightGoal};
use foodscan::services::ScanRequest;
use image::{Rgb, RgbImage};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Once;

/// Analysis resolution
pub const SIZE: u32 = 224;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Deterministic RNG for recommendation sampling
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Request with the default profile and `goal`
pub fn request(goal: WeightGoal, meal_time: MealTime) -> ScanRequest {
    let profile = UserProfile {
        goal,
        ..UserProfile::default()
    };
    ScanRequest::new(profile, meal_time)
}

/// Single-color image
pub fn solid(color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(SIZE, SIZE, Rgb(color))
}

/// Rows switch between `a` and `b` every `band` rows (vertical edges only)
pub fn row_bands(a: [u8; 3], b: [u8; 3], band: u32) -> RgbImage {
    RgbImage::from_fn(SIZE, SIZE, |_, y| {
        if (y / band) % 2 == 0 {
            Rgb(a)
        } else {
            Rgb(b)
        }
    })
}

/// Columns switch between `a` and `b` every column (horizontal edges only)
pub fn column_stripes(a: [u8; 3], b: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(SIZE, SIZE, |x, _| if x % 2 == 0 { Rgb(a) } else { Rgb(b) })
}

/// Leafy green dish: only the green flag fires
pub fn green_dish() -> RgbImage {
    row_bands([40, 160, 40], [60, 200, 60], 1)
}

/// Steamed white dish: only the white flag fires and texture stays below 15
pub fn steamed_white_dish() -> RgbImage {
    row_bands([240, 240, 220], [210, 210, 190], 2)
}

/// Muted dish with no dominance flag and brightness under 150
pub fn muted_dish() -> RgbImage {
    row_bands([150, 130, 140], [90, 70, 80], 1)
}

/// Near-white photo averaging above 250 that still has pixel variation
///
/// About 5% of pixels lose their blue channel, which keeps the mean above
/// 250 while pushing pixel spread and channel spread over the rejection gates.
pub fn overexposed_photo() -> RgbImage {
    RgbImage::from_fn(SIZE, SIZE, |x, y| {
        if (x + y) % 20 == 0 {
            Rgb([255, 255, 0])
        } else {
            Rgb([255, 255, 255])
        }
    })
}
