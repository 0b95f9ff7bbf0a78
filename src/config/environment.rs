// ABOUTME: Environment configuration for scan runs and deployment mode
// ABOUTME: Reads FOODSCAN_* variables into a validated ScanConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use super::error::ConfigError;
use foodscan_core::constants::matching::LOW_CONFIDENCE_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

/// Directory holding reference-data overrides
pub const DATA_DIR_VAR: &str = "FOODSCAN_DATA_DIR";
/// Confidence below which a detection carries a warning
pub const LOW_CONFIDENCE_VAR: &str = "FOODSCAN_LOW_CONFIDENCE";
/// Base seed for recommendation sampling
pub const SEED_VAR: &str = "FOODSCAN_SEED";
/// Deployment environment
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Runtime settings for scans
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Directory with JSON overrides; embedded data when None
    pub data_dir: Option<PathBuf>,
    /// Detections below this confidence carry a warning
    pub low_confidence_threshold: f64,
    /// Base seed for recommendation sampling; entropy when None
    pub seed: Option<u64>,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            low_confidence_threshold: LOW_CONFIDENCE_THRESHOLD,
            seed: None,
            environment: Environment::default(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` when a variable holds an unparsable value
    /// and `ConfigError::InvalidRange` when the confidence threshold is
    /// outside 0.0-1.0.
    pub fn from_env() -> Result<Self, ConfigError> {
        debug!("Loading scan configuration from environment variables");

        let config = Self {
            data_dir: env::var(DATA_DIR_VAR)
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            low_confidence_threshold: parse_env(LOW_CONFIDENCE_VAR)?
                .unwrap_or(LOW_CONFIDENCE_THRESHOLD),
            seed: parse_env(SEED_VAR)?,
            environment: Environment::from_str_or_default(&env_var_or(
                ENVIRONMENT_VAR,
                "development",
            )),
        };

        config.validate()?;
        info!(
            data_dir = ?config.data_dir,
            low_confidence_threshold = config.low_confidence_threshold,
            seeded = config.seed.is_some(),
            environment = %config.environment,
            "Scan configuration loaded"
        );
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when the confidence threshold is
    /// outside 0.0-1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.low_confidence_threshold) {
            return Err(ConfigError::InvalidRange(
                "low confidence threshold must be within 0.0-1.0",
            ));
        }
        Ok(())
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an optional environment variable
fn parse_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("Invalid {key} value '{raw}': {e}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
