// ABOUTME: Main library entry point for FoodScan food photo recognition
// ABOUTME: Wires vision heuristics, nutrition lookup, and goal-aware advice into a scan service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

#![deny(unsafe_code)]

//! # FoodScan
//!
//! Heuristic food photo recognition. A photo is reduced to summary pixel
//! statistics, validated as plausibly depicting food, matched to a label from
//! a small set of hand-tuned color and texture rules, and then paired with
//! static nutrition facts and goal-aware meal advice.
//!
//! Nothing is learned. Every decision is a threshold comparison over the
//! statistics in [`foodscan_core::models::FeatureVector`].
//!
//! ## Architecture
//!
//! - **`foodscan-core`**: errors, domain models, tuned constants
//! - **`foodscan-vision`**: feature extraction, validation, matching, lighting
//! - **config**: environment, thresholds, embedded reference tables
//! - **intelligence**: nutrition lookup, recommendations, weight impact
//! - **services**: the scan pipeline producing a [`ScanReport`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use foodscan::image_loader::load_image;
//! use foodscan::models::{MealTime, UserProfile};
//! use foodscan::services::{ScanRequest, ScanService};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let service = ScanService::with_defaults()?;
//!     let image = load_image(Path::new("lunch.jpg"))?;
//!     let request = ScanRequest::new(UserProfile::default(), MealTime::Lunch);
//!     let report = service.scan(&image, &request, &mut ChaCha8Rng::seed_from_u64(7))?;
//!     println!("{} ({:.0}%)", report.recognition.label, report.recognition.confidence * 100.0);
//!     Ok(())
//! }
//! ```

/// Configuration: environment, thresholds, reference data
pub mod config;

/// Unified error handling
pub mod errors;

/// JPEG/PNG decoding
pub mod image_loader;

/// Nutrition lookup, recommendations, weight impact
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Scan pipeline service
pub mod services;

/// Domain models shared with the vision crate
pub use foodscan_core::models;

/// Tuned reference constants
pub use foodscan_core::constants;

/// Image heuristics
pub use foodscan_vision as vision;

pub use errors::{AppError, AppResult, ErrorCode};
pub use services::{ScanReport, ScanRequest, ScanService, ScanWarning};
