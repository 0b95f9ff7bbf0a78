// ABOUTME: Helper modules for foodscan-cli
// ABOUTME: Provides text formatting for scan reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

pub mod display;
