// ABOUTME: Food validator deciding whether an image plausibly depicts food
// ABOUTME: Ordered list of pure gate rules over a feature vector; first decision wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! Food Validation
//!
//! Gates, in evaluation order:
//!
//! 1. pixel standard deviation too low: reject (too uniform)
//! 2. channel averages too close together: reject (flat color)
//! 3. very dark or very bright: accept with reduced confidence
//! 4. vertical edge mean too low: reject (no texture)
//!
//! An image passing every gate is accepted with a confidence that grows with
//! vertical edge strength and pixel spread, capped below certainty.
//!
//! Any failure while computing features is logged and the image is accepted
//! with a neutral confidence.

use crate::config::{ValidatorThresholds, VisionConfig};
use crate::error::VisionError;
use crate::features::FeatureExtractor;
use foodscan_core::models::{FeatureVector, ValidationOutcome, ValidationReason};
use image::RgbImage;
use tracing::{debug, warn};

/// A single validation gate
pub type ValidationRule = fn(&FeatureVector, &ValidatorThresholds) -> Option<ValidationOutcome>;

/// Gates in evaluation order
pub const VALIDATION_RULES: [ValidationRule; 4] = [
    reject_uniform,
    reject_flat_color,
    accept_lighting_extreme,
    reject_textureless,
];

/// Reject images whose pixel values barely vary
#[must_use]
pub fn reject_uniform(
    features: &FeatureVector,
    thresholds: &ValidatorThresholds,
) -> Option<ValidationOutcome> {
    (features.saturation < thresholds.min_pixel_std_dev).then(|| {
        ValidationOutcome::reject(thresholds.uniform_confidence, ValidationReason::TooUniform)
    })
}

/// Reject images whose channel averages are nearly identical
#[must_use]
pub fn reject_flat_color(
    features: &FeatureVector,
    thresholds: &ValidatorThresholds,
) -> Option<ValidationOutcome> {
    (features.channel_spread() < thresholds.min_channel_spread).then(|| {
        ValidationOutcome::reject(thresholds.flat_color_confidence, ValidationReason::FlatColor)
    })
}

/// Accept very dark or very bright images with reduced confidence
#[must_use]
pub fn accept_lighting_extreme(
    features: &FeatureVector,
    thresholds: &ValidatorThresholds,
) -> Option<ValidationOutcome> {
    (features.brightness < thresholds.dark_brightness
        || features.brightness > thresholds.bright_brightness)
        .then(|| {
            ValidationOutcome::accept(
                thresholds.lighting_extreme_confidence,
                ValidationReason::LightingExtreme,
            )
        })
}

/// Reject images without vertical edge structure
#[must_use]
pub fn reject_textureless(
    features: &FeatureVector,
    thresholds: &ValidatorThresholds,
) -> Option<ValidationOutcome> {
    (features.edges_vertical < thresholds.min_vertical_edges).then(|| {
        ValidationOutcome::reject(
            thresholds.textureless_confidence,
            ValidationReason::Textureless,
        )
    })
}

/// Accept an image that passed every gate
#[must_use]
pub fn accept_textured(features: &FeatureVector, thresholds: &ValidatorThresholds) -> ValidationOutcome {
    let confidence = (thresholds.base_confidence
        + features.edges_vertical / thresholds.edge_divisor
        + features.saturation / thresholds.std_dev_divisor)
        .min(thresholds.max_confidence);
    ValidationOutcome::accept(confidence, ValidationReason::Textured)
}

/// Decides whether images depict food
#[derive(Debug, Clone, Default)]
pub struct FoodValidator {
    extractor: FeatureExtractor,
    thresholds: ValidatorThresholds,
}

impl FoodValidator {
    /// Create a validator from the vision configuration
    #[must_use]
    pub fn new(config: &VisionConfig) -> Self {
        Self {
            extractor: FeatureExtractor::new(config),
            thresholds: config.validator.clone(),
        }
    }

    /// Validate an image, failing open when features cannot be computed
    #[must_use]
    pub fn validate(&self, image: &RgbImage) -> ValidationOutcome {
        self.validate_extracted(&self.extractor.extract(image))
    }

    /// Validate the result of a feature extraction done elsewhere
    ///
    /// Extraction errors fail open exactly as in [`Self::validate`].
    #[must_use]
    pub fn validate_extracted(
        &self,
        extracted: &Result<FeatureVector, VisionError>,
    ) -> ValidationOutcome {
        match extracted {
            Ok(features) => self.validate_features(features),
            Err(error) => {
                warn!(error = %error, "food validation failed, accepting image");
                ValidationOutcome::accept(
                    self.thresholds.fail_open_confidence,
                    ValidationReason::FailOpen,
                )
            }
        }
    }

    /// Run the gates over already extracted features
    #[must_use]
    pub fn validate_features(&self, features: &FeatureVector) -> ValidationOutcome {
        let outcome = VALIDATION_RULES
            .iter()
            .find_map(|rule| rule(features, &self.thresholds))
            .unwrap_or_else(|| accept_textured(features, &self.thresholds));
        debug!(
            is_food = outcome.is_food,
            confidence = outcome.confidence,
            reason = outcome.reason.as_str(),
            "food validation decided"
        );
        outcome
    }
}
