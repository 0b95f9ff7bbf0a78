// ABOUTME: Configuration management for scan runs, recommendation thresholds, and reference data
// ABOUTME: Environment variables, embedded JSON tables, and optional data-directory overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! Configuration module for FoodScan
//!
//! - **Environment**: `ScanConfig` from `FOODSCAN_*` variables
//! - **Recommendation**: calorie bands and tip thresholds per weight goal
//! - **Reference data**: palette, nutrition, and advice tables
//!
//! Vision thresholds are defined next to the heuristics in `foodscan-vision`.

/// Configuration error types
pub mod error;

/// Environment and scan configuration
pub mod environment;

/// Recommendation thresholds
pub mod recommendation;

/// Reference table loading
pub mod reference_data;

pub use environment::{Environment, ScanConfig};
pub use error::ConfigError;
pub use recommendation::{
    GoalThresholds, MacroTipThresholds, RecommendationConfig, WeightImpactConfig,
};
pub use reference_data::{vision_config_from_dir, ReferenceData};
