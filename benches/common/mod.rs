// ABOUTME: Common benchmark utilities and photo fixtures for performance testing
// ABOUTME: Provides reusable image generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! Common benchmark utilities and photo fixtures.

pub mod fixtures;
