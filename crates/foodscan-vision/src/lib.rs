// ABOUTME: Heuristic food-image analysis: features, validation, matching, lighting
// ABOUTME: Pure functions over decoded RGB images with thresholds from VisionConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

#![deny(unsafe_code)]

//! # FoodScan Vision
//!
//! Fixed hand-tuned arithmetic over summary pixel statistics. Nothing here
//! learns; every decision is a threshold comparison that can be traced back
//! to a field of [`VisionConfig`].
//!
//! ## Modules
//!
//! - **features**: resize and summarize an image into a `FeatureVector`
//! - **validator**: decide whether the image plausibly depicts food
//! - **matcher**: rank candidate labels and palette alternatives
//! - **lighting**: advisory too-dark / too-bright check on the raw image

/// Threshold configuration
pub mod config;
/// Vision error types
pub mod error;
/// Feature extraction
pub mod features;
/// Raw-image lighting check
pub mod lighting;
/// Candidate matching
pub mod matcher;
/// Food validation
pub mod validator;

pub use config::VisionConfig;
pub use error::VisionError;
pub use features::FeatureExtractor;
pub use lighting::{assess_lighting, LightingIssue};
pub use matcher::CandidateMatcher;
pub use validator::FoodValidator;
