// ABOUTME: Configuration error types for environment parsing and reference data loading
// ABOUTME: Defines error variants for bad env values, invalid ranges, and unreadable data files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! Configuration error types.

use foodscan_core::errors::AppError;
use foodscan_vision::VisionError;
use std::env;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., confidence not between 0-1)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Reference data file could not be read
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reference data file is not valid JSON for its schema
    #[error("Malformed {name}: {source}")]
    Malformed {
        /// File or asset name
        name: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Vision thresholds are unusable
    #[error(transparent)]
    Vision(#[from] VisionError),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
