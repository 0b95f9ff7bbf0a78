// ABOUTME: Advisory lighting check over the raw, unresized image
// ABOUTME: Flags photos that are too dark or too bright without rejecting them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use crate::config::LightingThresholds;
use image::RgbImage;
use serde::{Deserialize, Serialize};

/// Lighting problem detected in a photo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LightingIssue {
    /// Mean intensity below the dark threshold
    TooDark,
    /// Mean intensity above the bright threshold
    TooBright,
}

impl LightingIssue {
    /// Advice shown alongside the report
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::TooDark => "Image is too dark. Try taking photo in better lighting.",
            Self::TooBright => "Image is too bright. Adjust lighting for better results.",
        }
    }
}

/// Mean over every channel value of every pixel, None for an empty image
#[must_use]
pub fn mean_intensity(image: &RgbImage) -> Option<f64> {
    let raw = image.as_raw();
    if raw.is_empty() {
        return None;
    }
    let total: u64 = raw.iter().map(|value| u64::from(*value)).sum();
    Some(total as f64 / raw.len() as f64)
}

/// Check the raw image against the lighting thresholds
#[must_use]
pub fn assess_lighting(image: &RgbImage, thresholds: &LightingThresholds) -> Option<LightingIssue> {
    let mean = mean_intensity(image)?;
    if mean < thresholds.too_dark {
        Some(LightingIssue::TooDark)
    } else if mean > thresholds.too_bright {
        Some(LightingIssue::TooBright)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_lighting_thresholds() {
        let thresholds = LightingThresholds::default();
        let dark = RgbImage::from_pixel(10, 10, Rgb([5, 10, 15]));
        let bright = RgbImage::from_pixel(10, 10, Rgb([255, 253, 252]));
        let normal = RgbImage::from_pixel(10, 10, Rgb([120, 90, 60]));

        assert_eq!(assess_lighting(&dark, &thresholds), Some(LightingIssue::TooDark));
        assert_eq!(assess_lighting(&bright, &thresholds), Some(LightingIssue::TooBright));
        assert_eq!(assess_lighting(&normal, &thresholds), None);
    }

    #[test]
    fn test_empty_image_has_no_mean() {
        assert_eq!(mean_intensity(&RgbImage::new(0, 0)), None);
        assert_eq!(assess_lighting(&RgbImage::new(0, 0), &LightingThresholds::default()), None);
    }
}
