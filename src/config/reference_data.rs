// ABOUTME: Reference data loading for the palette, nutrition, and recommendation tables
// ABOUTME: Embedded JSON assets with optional per-file overrides from a data directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! Reference Data
//!
//! Three JSON tables ship inside the binary. A data directory may replace any
//! of them by providing a file with the same name; missing files fall back to
//! the embedded copy. An optional `vision.json` overrides vision thresholds.

use super::error::ConfigError;
use crate::intelligence::{NutritionDatabase, NutritionFile, RecommendationTable};
use foodscan_core::models::FoodRecord;
use foodscan_vision::VisionConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Reference palette file name
pub const PALETTE_FILE: &str = "food_palette.json";
/// Nutrition table file name
pub const NUTRITION_FILE: &str = "nutrition.json";
/// Recommendation table file name
pub const RECOMMENDATIONS_FILE: &str = "meal_recommendations.json";
/// Vision threshold override file name
pub const VISION_FILE: &str = "vision.json";

const EMBEDDED_PALETTE: &str = include_str!("../../data/food_palette.json");
const EMBEDDED_NUTRITION: &str = include_str!("../../data/nutrition.json");
const EMBEDDED_RECOMMENDATIONS: &str = include_str!("../../data/meal_recommendations.json");

/// Immutable tables consulted by a scan
#[derive(Debug, Clone)]
pub struct ReferenceData {
    /// Palette used for color alternatives
    pub palette: Vec<FoodRecord>,
    /// Nutrition facts per label
    pub nutrition: NutritionDatabase,
    /// Alternatives and advice templates
    pub recommendations: RecommendationTable,
}

impl ReferenceData {
    /// Tables compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Malformed` if an embedded asset does not parse.
    pub fn embedded() -> Result<Self, ConfigError> {
        Ok(Self {
            palette: parse(PALETTE_FILE, EMBEDDED_PALETTE)?,
            nutrition: NutritionDatabase::new(parse::<NutritionFile>(
                NUTRITION_FILE,
                EMBEDDED_NUTRITION,
            )?),
            recommendations: with_fallback_tips(parse(
                RECOMMENDATIONS_FILE,
                EMBEDDED_RECOMMENDATIONS,
            )?)?,
        })
    }

    /// Tables from `dir`, each falling back to the embedded copy when absent
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` when a present file cannot be read,
    /// `ConfigError::Malformed` when it does not parse, and
    /// `ConfigError::InvalidRange` when the recommendation table has no
    /// fallback tips.
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let data = Self {
            palette: load_or_embedded(dir, PALETTE_FILE, EMBEDDED_PALETTE)?,
            nutrition: NutritionDatabase::new(load_or_embedded::<NutritionFile>(
                dir,
                NUTRITION_FILE,
                EMBEDDED_NUTRITION,
            )?),
            recommendations: with_fallback_tips(load_or_embedded(
                dir,
                RECOMMENDATIONS_FILE,
                EMBEDDED_RECOMMENDATIONS,
            )?)?,
        };
        info!(
            data_dir = %dir.display(),
            palette = data.palette.len(),
            nutrition_labels = data.nutrition.len(),
            "Reference data loaded"
        );
        Ok(data)
    }

    /// Embedded tables, or `from_dir` when a directory is configured
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::embedded`] or [`Self::from_dir`].
    pub fn load(dir: Option<&Path>) -> Result<Self, ConfigError> {
        dir.map_or_else(Self::embedded, Self::from_dir)
    }
}

/// Vision thresholds from `dir/vision.json`, defaults when absent
///
/// # Errors
///
/// Returns `ConfigError::Io`/`ConfigError::Malformed` for an unreadable or
/// unparsable file and `ConfigError::Vision` when the thresholds are invalid.
pub fn vision_config_from_dir(dir: &Path) -> Result<VisionConfig, ConfigError> {
    let config = match read_optional(dir, VISION_FILE)? {
        Some(raw) => parse(VISION_FILE, &raw)?,
        None => VisionConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T, ConfigError> {
    serde_json::from_str(raw).map_err(|source| ConfigError::Malformed {
        name: name.to_owned(),
        source,
    })
}

fn with_fallback_tips(table: RecommendationTable) -> Result<RecommendationTable, ConfigError> {
    table.validate()?;
    Ok(table)
}

fn read_optional(dir: &Path, name: &str) -> Result<Option<String>, ConfigError> {
    let path = dir.join(name);
    match fs::read_to_string(&path) {
        Ok(raw) => {
            debug!(path = %path.display(), "Using reference data override");
            Ok(Some(raw))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Io { path, source }),
    }
}

fn load_or_embedded<T: DeserializeOwned>(
    dir: &Path,
    name: &str,
    embedded: &str,
) -> Result<T, ConfigError> {
    match read_optional(dir, name)? {
        Some(raw) => parse(name, &raw),
        None => parse(name, embedded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodscan_core::models::{AlternativeCategory, MealTime};

    #[test]
    fn test_embedded_tables_parse() {
        let data = ReferenceData::embedded().unwrap();
        assert_eq!(data.palette.len(), 12);
        assert!(data.nutrition.contains("idli"));
        assert!(data.nutrition.contains("chapati"));
        assert_eq!(
            data.recommendations
                .alternatives(MealTime::Breakfast, AlternativeCategory::Healthy)
                .len(),
            5
        );
    }

    #[test]
    fn test_embedded_palette_labels_have_nutrition() {
        let data = ReferenceData::embedded().unwrap();
        for record in &data.palette {
            assert!(
                data.nutrition.contains(&record.label),
                "missing nutrition for {}",
                record.label
            );
        }
    }
}
