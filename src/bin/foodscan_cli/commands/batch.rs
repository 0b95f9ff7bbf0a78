// ABOUTME: Parallel directory scan command for foodscan-cli
// ABOUTME: One JSON line per image, each file sampled with its own seeded RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use anyhow::Result;
use foodscan::errors::ErrorResponse;
use foodscan::image_loader::{list_images, load_image};
use foodscan::logging::ScanLogger;
use foodscan::services::{ScanReport, ScanRequest, ScanService};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

/// One output line
#[derive(Serialize)]
struct BatchLine {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<ScanReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorResponse>,
}

/// Scan every image in `dir` and print JSON lines in path order
pub fn run(
    service: &ScanService,
    dir: &Path,
    request: &ScanRequest,
    seed: Option<u64>,
) -> Result<ExitCode> {
    let paths = list_images(dir)?;
    let base_seed = seed.unwrap_or_else(rand::random);
    info!(
        dir = %dir.display(),
        files = paths.len(),
        base_seed,
        "Starting batch scan"
    );

    let lines: Vec<BatchLine> = paths
        .par_iter()
        .enumerate()
        .map(|(index, path)| {
            let mut rng = ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(index as u64));
            let display = path.display().to_string();
            match load_image(path).and_then(|image| service.scan(&image, request, &mut rng)) {
                Ok(report) => BatchLine {
                    path: display,
                    report: Some(report),
                    error: None,
                },
                Err(error) => {
                    ScanLogger::log_batch_failure(&display, &error.to_string());
                    BatchLine {
                        path: display,
                        report: None,
                        error: Some(ErrorResponse::from(error)),
                    }
                }
            }
        })
        .collect();

    let failures = lines.iter().filter(|line| line.error.is_some()).count();
    for line in &lines {
        println!("{}", serde_json::to_string(line)?);
    }
    info!(
        scanned = lines.len() - failures,
        failed = failures,
        "Batch scan finished"
    );

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
