// ABOUTME: Feature extractor turning an RGB image into aggregate pixel statistics
// ABOUTME: Resizes to a fixed square, then computes color means, spread, edges and dominance flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! Feature Extraction
//!
//! All statistics are computed in `f64` over the normalized image:
//!
//! - `avg_color`: per-channel mean
//! - `brightness`: mean of `avg_color`
//! - `saturation`: population standard deviation over every channel value
//! - `edges_horizontal` / `edges_vertical`: mean absolute difference of the
//!   gray value (channel mean) between neighboring pixels
//! - `texture_score`: mean of the two edge means

use crate::config::{FeatureThresholds, VisionConfig};
use crate::error::VisionError;
use foodscan_core::models::{DominanceFlags, DominantColor, FeatureVector};
use image::imageops::{self, FilterType};
use image::RgbImage;
use tracing::trace;

/// Computes a `FeatureVector` from an image
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    size: u32,
    thresholds: FeatureThresholds,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(&VisionConfig::default())
    }
}

impl FeatureExtractor {
    /// Create an extractor from the vision configuration
    #[must_use]
    pub fn new(config: &VisionConfig) -> Self {
        Self {
            size: config.normalize_size,
            thresholds: config.features.clone(),
        }
    }

    /// Resize `image` to the configured square with a cubic filter
    #[must_use]
    pub fn normalize(&self, image: &RgbImage) -> RgbImage {
        if image.dimensions() == (self.size, self.size) {
            return image.clone();
        }
        imageops::resize(image, self.size, self.size, FilterType::CatmullRom)
    }

    /// Extract the feature vector of `image`
    ///
    /// # Errors
    ///
    /// Returns `VisionError::EmptyImage` for a zero-sized image and
    /// `VisionError::Degenerate` when a statistic is not finite.
    pub fn extract(&self, image: &RgbImage) -> Result<FeatureVector, VisionError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(VisionError::EmptyImage { width, height });
        }

        let normalized = self.normalize(image);
        let stats = PixelStats::measure(&normalized);
        let mut features = FeatureVector {
            avg_color: stats.avg_color,
            brightness: stats.avg_color.iter().sum::<f64>() / 3.0,
            saturation: stats.std_dev,
            edges_horizontal: stats.edges_horizontal,
            edges_vertical: stats.edges_vertical,
            texture_score: (stats.edges_horizontal + stats.edges_vertical) / 2.0,
            dominance: DominanceFlags::default(),
        };

        if !features.is_finite() {
            return Err(VisionError::Degenerate);
        }

        features.dominance = dominance_flags(&features, &self.thresholds);
        trace!(
            brightness = features.brightness,
            saturation = features.saturation,
            texture = features.texture_score,
            dominant = ?features.dominance.active(),
            "extracted image features"
        );
        Ok(features)
    }
}

/// Raw statistics before derived fields are filled in
struct PixelStats {
    avg_color: [f64; 3],
    std_dev: f64,
    edges_horizontal: f64,
    edges_vertical: f64,
}

impl PixelStats {
    fn measure(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        let (w, h) = (width as usize, height as usize);
        let pixel_count = (w * h) as f64;

        let mut sums = [0.0_f64; 3];
        let mut gray = Vec::with_capacity(w * h);
        for pixel in image.pixels() {
            let [r, g, b] = pixel.0.map(f64::from);
            sums[0] += r;
            sums[1] += g;
            sums[2] += b;
            gray.push((r + g + b) / 3.0);
        }
        let avg_color = sums.map(|sum| sum / pixel_count);

        let overall_mean = avg_color.iter().sum::<f64>() / 3.0;
        let squared: f64 = image
            .pixels()
            .flat_map(|pixel| pixel.0)
            .map(|value| (f64::from(value) - overall_mean).powi(2))
            .sum();
        let std_dev = (squared / (pixel_count * 3.0)).sqrt();

        let mut horizontal = 0.0;
        for row in gray.chunks_exact(w) {
            horizontal += row
                .windows(2)
                .map(|pair| (pair[1] - pair[0]).abs())
                .sum::<f64>();
        }
        let mut vertical = 0.0;
        for (upper, lower) in gray.chunks_exact(w).zip(gray.chunks_exact(w).skip(1)) {
            vertical += upper
                .iter()
                .zip(lower)
                .map(|(a, b)| (b - a).abs())
                .sum::<f64>();
        }

        // An image one pixel wide or tall has no neighbor pairs; the NaN this
        // produces is reported as Degenerate by the caller.
        let horizontal_pairs = (h * w.saturating_sub(1)) as f64;
        let vertical_pairs = (w * h.saturating_sub(1)) as f64;

        Self {
            avg_color,
            std_dev,
            edges_horizontal: horizontal / horizontal_pairs,
            edges_vertical: vertical / vertical_pairs,
        }
    }
}

/// Compute the five independent dominance flags
#[must_use]
pub fn dominance_flags(features: &FeatureVector, thresholds: &FeatureThresholds) -> DominanceFlags {
    let (r, g, b) = (features.red(), features.green(), features.blue());
    let margin = thresholds.channel_margin;
    let (red_low, red_high) = thresholds.brown_red_range;
    let (green_low, green_high) = thresholds.brown_green_range;

    let mut flags = DominanceFlags::default();
    flags.set(DominantColor::Red, r > g + margin && r > b + margin);
    flags.set(DominantColor::Green, g > r + margin && g > b + margin);
    flags.set(
        DominantColor::Yellow,
        r > thresholds.yellow_rg_floor
            && g > thresholds.yellow_rg_floor
            && b < thresholds.yellow_blue_ceiling,
    );
    flags.set(
        DominantColor::Brown,
        red_low < r
            && r < red_high
            && green_low < g
            && g < green_high
            && b < thresholds.brown_blue_ceiling,
    );
    flags.set(
        DominantColor::White,
        features.brightness > thresholds.white_brightness_floor
            && features.saturation < thresholds.white_saturation_ceiling,
    );
    flags
}
