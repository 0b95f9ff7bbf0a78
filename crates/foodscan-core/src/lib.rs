// ABOUTME: Core types and constants for the FoodScan recognition workspace
// ABOUTME: Foundation crate with error handling, domain models, and tuned constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

#![deny(unsafe_code)]

//! # FoodScan Core
//!
//! Foundation crate providing shared types and constants for the FoodScan
//! workspace. It has no image dependency so that the vision crate, the root
//! crate and any presentation layer agree on one vocabulary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Tuned thresholds and reference values organized by domain
//! - **models**: Feature vectors, recognition results, nutrition records, profiles

/// Unified error handling system with standard error codes
pub mod errors;

/// Tuned thresholds and reference values organized by domain
pub mod constants;

/// Core data models (features, recognition, nutrition, recommendations)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
