// ABOUTME: Single-photo scan command for foodscan-cli
// ABOUTME: Prints the report as JSON or text; user errors exit with status 2
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use anyhow::Result;
use foodscan::errors::ErrorResponse;
use foodscan::image_loader::load_image;
use foodscan::services::{ScanRequest, ScanService};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use super::{rng_for, USER_ERROR_EXIT};
use crate::helpers::display::display_report;
use crate::OutputFormat;

/// Scan `image` and print the report
pub fn run(
    service: &ScanService,
    image: &Path,
    request: &ScanRequest,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<ExitCode> {
    info!(path = %image.display(), "Scanning image");
    let outcome = load_image(image)
        .and_then(|decoded| service.scan(&decoded, request, &mut rng_for(seed)));

    match outcome {
        Ok(report) => {
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => display_report(&report),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) if error.code.is_user_error() => {
            match format {
                OutputFormat::Json => {
                    let response = ErrorResponse::from(error);
                    println!("{}", serde_json::to_string_pretty(&response)?);
                }
                OutputFormat::Text => eprintln!("{}", error.user_message()),
            }
            Ok(ExitCode::from(USER_ERROR_EXIT))
        }
        Err(error) => Err(error.into()),
    }
}
