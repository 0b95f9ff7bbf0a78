// ABOUTME: Threshold configuration for feature extraction, validation and matching
// ABOUTME: Defaults come from the tuned constants; a JSON file may override any field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! Vision Configuration
//!
//! Every numeric threshold used by the heuristics lives here so it can be
//! tuned without recompiling. Serialized field names are stable.

use crate::error::VisionError;
use foodscan_core::constants::{dominance, lighting, matching, normalization, validation};
use serde::{Deserialize, Serialize};

/// Complete vision configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VisionConfig {
    /// Edge length of the square images are resized to before analysis
    pub normalize_size: u32,
    /// Dominant-color flag thresholds
    pub features: FeatureThresholds,
    /// Food validator thresholds
    pub validator: ValidatorThresholds,
    /// Candidate matcher thresholds
    pub matcher: MatcherThresholds,
    /// Raw-image lighting thresholds
    pub lighting: LightingThresholds,
}

/// Dominant-color flag thresholds (0-255 channel scale)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeatureThresholds {
    /// Margin one channel must exceed both others by
    pub channel_margin: f64,
    /// Yellow: red and green floor
    pub yellow_rg_floor: f64,
    /// Yellow: blue ceiling
    pub yellow_blue_ceiling: f64,
    /// Brown: exclusive red band
    pub brown_red_range: (f64, f64),
    /// Brown: exclusive green band
    pub brown_green_range: (f64, f64),
    /// Brown: blue ceiling
    pub brown_blue_ceiling: f64,
    /// White: brightness floor
    pub white_brightness_floor: f64,
    /// White: saturation ceiling
    pub white_saturation_ceiling: f64,
}

/// Food validator gates and confidence formula
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ValidatorThresholds {
    /// Pixel standard deviation below this rejects the image
    pub min_pixel_std_dev: f64,
    /// Confidence reported for too-uniform images
    pub uniform_confidence: f64,
    /// Spread of channel averages below this rejects the image
    pub min_channel_spread: f64,
    /// Confidence reported for flat-color images
    pub flat_color_confidence: f64,
    /// Brightness below this is a lighting extreme
    pub dark_brightness: f64,
    /// Brightness above this is a lighting extreme
    pub bright_brightness: f64,
    /// Confidence reported for lighting extremes
    pub lighting_extreme_confidence: f64,
    /// Vertical edge mean below this rejects the image
    pub min_vertical_edges: f64,
    /// Confidence reported for textureless images
    pub textureless_confidence: f64,
    /// Base of the accepted-image confidence formula
    pub base_confidence: f64,
    /// Vertical edge mean divisor in the confidence formula
    pub edge_divisor: f64,
    /// Standard deviation divisor in the confidence formula
    pub std_dev_divisor: f64,
    /// Cap of the confidence formula
    pub max_confidence: f64,
    /// Confidence reported when validation itself fails
    pub fail_open_confidence: f64,
}

/// Candidate rule splits and color-similarity ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatcherThresholds {
    /// Red rule: texture split between gravies and soup
    pub red_texture_split: f64,
    /// Yellow rule: brightness split between dal and curry
    pub yellow_brightness_split: f64,
    /// Brown rule: texture split between fried snacks and gravies
    pub brown_texture_split: f64,
    /// White rule: texture split between steamed and flat items
    pub white_texture_split: f64,
    /// Fallback: brightness split between rice and mixed curry
    pub fallback_brightness_split: f64,
    /// Unscaled similarity a palette entry must exceed
    pub min_color_similarity: f64,
    /// Scale applied to kept similarities
    pub color_similarity_scale: f64,
    /// Maximum number of alternatives returned
    pub max_alternatives: usize,
}

/// Mean raw-image intensity limits that trigger an advisory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingThresholds {
    /// Mean below this is too dark
    pub too_dark: f64,
    /// Mean above this is too bright
    pub too_bright: f64,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            normalize_size: normalization::TARGET_SIZE,
            features: FeatureThresholds::default(),
            validator: ValidatorThresholds::default(),
            matcher: MatcherThresholds::default(),
            lighting: LightingThresholds::default(),
        }
    }
}

impl Default for FeatureThresholds {
    fn default() -> Self {
        Self {
            channel_margin: dominance::CHANNEL_MARGIN,
            yellow_rg_floor: dominance::YELLOW_RG_FLOOR,
            yellow_blue_ceiling: dominance::YELLOW_BLUE_CEILING,
            brown_red_range: dominance::BROWN_RED_RANGE,
            brown_green_range: dominance::BROWN_GREEN_RANGE,
            brown_blue_ceiling: dominance::BROWN_BLUE_CEILING,
            white_brightness_floor: dominance::WHITE_BRIGHTNESS_FLOOR,
            white_saturation_ceiling: dominance::WHITE_SATURATION_CEILING,
        }
    }
}

impl Default for ValidatorThresholds {
    fn default() -> Self {
        Self {
            min_pixel_std_dev: validation::MIN_PIXEL_STD_DEV,
            uniform_confidence: validation::UNIFORM_CONFIDENCE,
            min_channel_spread: validation::MIN_CHANNEL_SPREAD,
            flat_color_confidence: validation::FLAT_COLOR_CONFIDENCE,
            dark_brightness: validation::DARK_BRIGHTNESS,
            bright_brightness: validation::BRIGHT_BRIGHTNESS,
            lighting_extreme_confidence: validation::LIGHTING_EXTREME_CONFIDENCE,
            min_vertical_edges: validation::MIN_VERTICAL_EDGES,
            textureless_confidence: validation::TEXTURELESS_CONFIDENCE,
            base_confidence: validation::BASE_CONFIDENCE,
            edge_divisor: validation::EDGE_DIVISOR,
            std_dev_divisor: validation::STD_DEV_DIVISOR,
            max_confidence: validation::MAX_CONFIDENCE,
            fail_open_confidence: validation::FAIL_OPEN_CONFIDENCE,
        }
    }
}

impl Default for MatcherThresholds {
    fn default() -> Self {
        Self {
            red_texture_split: matching::RED_TEXTURE_SPLIT,
            yellow_brightness_split: matching::YELLOW_BRIGHTNESS_SPLIT,
            brown_texture_split: matching::BROWN_TEXTURE_SPLIT,
            white_texture_split: matching::WHITE_TEXTURE_SPLIT,
            fallback_brightness_split: matching::FALLBACK_BRIGHTNESS_SPLIT,
            min_color_similarity: matching::MIN_COLOR_SIMILARITY,
            color_similarity_scale: matching::COLOR_SIMILARITY_SCALE,
            max_alternatives: matching::MAX_ALTERNATIVES,
        }
    }
}

impl Default for LightingThresholds {
    fn default() -> Self {
        Self {
            too_dark: lighting::TOO_DARK,
            too_bright: lighting::TOO_BRIGHT,
        }
    }
}

impl VisionConfig {
    /// Check that the thresholds describe a usable configuration
    ///
    /// # Errors
    ///
    /// Returns `VisionError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<(), VisionError> {
        if self.normalize_size < 2 {
            return Err(VisionError::InvalidConfig(
                "normalize_size must be at least 2 to measure edges".into(),
            ));
        }

        let confidences = [
            ("validator.uniform_confidence", self.validator.uniform_confidence),
            ("validator.flat_color_confidence", self.validator.flat_color_confidence),
            (
                "validator.lighting_extreme_confidence",
                self.validator.lighting_extreme_confidence,
            ),
            ("validator.textureless_confidence", self.validator.textureless_confidence),
            ("validator.base_confidence", self.validator.base_confidence),
            ("validator.max_confidence", self.validator.max_confidence),
            ("validator.fail_open_confidence", self.validator.fail_open_confidence),
            ("matcher.min_color_similarity", self.matcher.min_color_similarity),
            ("matcher.color_similarity_scale", self.matcher.color_similarity_scale),
        ];
        for (name, value) in confidences {
            if !(0.0..=1.0).contains(&value) {
                return Err(VisionError::InvalidConfig(format!(
                    "{name} must be within 0.0-1.0, got {value}"
                )));
            }
        }

        if self.matcher.max_alternatives > matching::MAX_ALTERNATIVES {
            return Err(VisionError::InvalidConfig(format!(
                "matcher.max_alternatives must not exceed {}, got {}",
                matching::MAX_ALTERNATIVES,
                self.matcher.max_alternatives
            )));
        }

        if self.validator.edge_divisor <= 0.0 || self.validator.std_dev_divisor <= 0.0 {
            return Err(VisionError::InvalidConfig(
                "validator divisors must be positive".into(),
            ));
        }

        if self.lighting.too_dark >= self.lighting.too_bright {
            return Err(VisionError::InvalidConfig(
                "lighting.too_dark must be below lighting.too_bright".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(VisionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: VisionConfig =
            serde_json::from_str(r#"{"validator": {"min_pixel_std_dev": 10.0}}"#).unwrap();
        assert!((config.validator.min_pixel_std_dev - 10.0).abs() < f64::EPSILON);
        assert!((config.validator.max_confidence - 0.95).abs() < f64::EPSILON);
        assert_eq!(config.normalize_size, 224);
    }

    #[test]
    fn test_rejects_out_of_range_confidence() {
        let mut config = VisionConfig::default();
        config.validator.max_confidence = 1.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_confidence"));
    }

    #[test]
    fn test_rejects_tiny_normalize_size() {
        let config = VisionConfig {
            normalize_size: 1,
            ..VisionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_more_than_three_alternatives() {
        let mut config = VisionConfig::default();
        config.matcher.max_alternatives = 3;
        assert!(config.validate().is_ok());

        config.matcher.max_alternatives = 10;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_alternatives"));
    }
}
