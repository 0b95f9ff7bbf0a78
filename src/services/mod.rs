// ABOUTME: Domain service layer composing vision and intelligence into a scan pipeline
// ABOUTME: Front-end agnostic; the CLI and tests drive the same ScanService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! Domain service layer

/// Photo to report pipeline
pub mod scan;

pub use scan::{ScanReport, ScanRequest, ScanService, ScanWarning};
