// ABOUTME: Nutrition lookup command for foodscan-cli
// ABOUTME: Prints the record for a label, or the default record for unknown labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use anyhow::Result;
use foodscan::services::ScanService;
use serde_json::json;
use std::process::ExitCode;

/// Print nutrition facts for `label` as JSON
pub fn run(service: &ScanService, label: &str) -> Result<ExitCode> {
    let database = service.nutrition();
    let output = json!({
        "label": label.trim().to_lowercase(),
        "known": database.contains(label),
        "nutrition": database.lookup(label),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::SUCCESS)
}
