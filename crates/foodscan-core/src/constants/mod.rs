// ABOUTME: Tuned thresholds and reference values for food recognition and advice
// ABOUTME: Pure data constants organized by domain, consumed as config defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! Constants module
//!
//! These values are hand-tuned, not derived. The classifier's behavior depends
//! on them exactly, so they are the defaults for every threshold config.

/// Image normalization before statistics are computed
pub mod normalization {
    /// Edge length of the square every image is resized to
    pub const TARGET_SIZE: u32 = 224;
}

/// Dominant-color flag thresholds (channel values on a 0-255 scale)
pub mod dominance {
    /// Margin a channel must exceed both others by to be dominant
    pub const CHANNEL_MARGIN: f64 = 20.0;

    /// Yellow: red and green must both exceed this
    pub const YELLOW_RG_FLOOR: f64 = 150.0;
    /// Yellow: blue must stay below this
    pub const YELLOW_BLUE_CEILING: f64 = 120.0;

    /// Brown: exclusive red band
    pub const BROWN_RED_RANGE: (f64, f64) = (80.0, 150.0);
    /// Brown: exclusive green band
    pub const BROWN_GREEN_RANGE: (f64, f64) = (60.0, 120.0);
    /// Brown: blue must stay below this
    pub const BROWN_BLUE_CEILING: f64 = 100.0;

    /// White: brightness must exceed this
    pub const WHITE_BRIGHTNESS_FLOOR: f64 = 200.0;
    /// White: saturation must stay below this
    pub const WHITE_SATURATION_CEILING: f64 = 30.0;
}

/// Food validator gates and confidences
pub mod validation {
    /// Pixel standard deviation below this means a near-uniform image
    pub const MIN_PIXEL_STD_DEV: f64 = 15.0;
    /// Confidence reported for near-uniform rejections
    pub const UNIFORM_CONFIDENCE: f64 = 0.2;

    /// Spread of the channel averages below this means a flat single color
    pub const MIN_CHANNEL_SPREAD: f64 = 5.0;
    /// Confidence reported for flat-color rejections
    pub const FLAT_COLOR_CONFIDENCE: f64 = 0.3;

    /// Brightness below this is a lighting extreme
    pub const DARK_BRIGHTNESS: f64 = 20.0;
    /// Brightness above this is a lighting extreme
    pub const BRIGHT_BRIGHTNESS: f64 = 250.0;
    /// Confidence reported when lighting is extreme
    pub const LIGHTING_EXTREME_CONFIDENCE: f64 = 0.5;

    /// Vertical edge mean below this means no texture
    pub const MIN_VERTICAL_EDGES: f64 = 5.0;
    /// Confidence reported for textureless rejections
    pub const TEXTURELESS_CONFIDENCE: f64 = 0.4;

    /// Base of the computed acceptance confidence
    pub const BASE_CONFIDENCE: f64 = 0.6;
    /// Vertical edge mean is divided by this before being added
    pub const EDGE_DIVISOR: f64 = 50.0;
    /// Pixel standard deviation is divided by this before being added
    pub const STD_DEV_DIVISOR: f64 = 100.0;
    /// Cap on the computed acceptance confidence
    pub const MAX_CONFIDENCE: f64 = 0.95;

    /// Result returned when validation itself fails
    pub const FAIL_OPEN_CONFIDENCE: f64 = 0.5;
}

/// Candidate matcher branch thresholds
pub mod matching {
    /// Red foods with texture above this are gravies
    pub const RED_TEXTURE_SPLIT: f64 = 20.0;
    /// Yellow foods brighter than this are dal/biryani
    pub const YELLOW_BRIGHTNESS_SPLIT: f64 = 180.0;
    /// Brown foods with texture above this are fried snacks
    pub const BROWN_TEXTURE_SPLIT: f64 = 25.0;
    /// White foods with texture below this are steamed
    pub const WHITE_TEXTURE_SPLIT: f64 = 15.0;
    /// Fallback: brighter than this guesses rice
    pub const FALLBACK_BRIGHTNESS_SPLIT: f64 = 150.0;

    /// Label reported when no candidate exists at all
    pub const UNKNOWN_LABEL: &str = "unknown food";
    /// Confidence reported with [`UNKNOWN_LABEL`]
    pub const UNKNOWN_CONFIDENCE: f64 = 0.3;

    /// Color similarity must exceed this for a palette entry to be kept
    pub const MIN_COLOR_SIMILARITY: f64 = 0.5;
    /// Kept similarities are scaled by this
    pub const COLOR_SIMILARITY_SCALE: f64 = 0.9;
    /// Number of color alternatives returned
    pub const MAX_ALTERNATIVES: usize = 3;

    /// Detections below this confidence carry a warning
    pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.6;
}

/// Lighting advice on the raw, un-resized image
pub mod lighting {
    /// Mean pixel value below this is too dark
    pub const TOO_DARK: f64 = 20.0;
    /// Mean pixel value above this is too bright
    pub const TOO_BRIGHT: f64 = 250.0;
}

/// Goal thresholds for meal recommendations
pub mod recommendation {
    /// Lose Weight: meals above this are calorie-dense
    pub const LOSS_CALORIE_CEILING: f64 = 400.0;
    /// Gain Weight: meals below this are too light
    pub const GAIN_CALORIE_FLOOR: f64 = 400.0;
    /// Maintain Weight: inclusive balanced range
    pub const MAINTAIN_CALORIE_RANGE: (f64, f64) = (250.0, 450.0);
    /// Protein above this earns a high-protein tip (grams)
    pub const HIGH_PROTEIN_G: f64 = 25.0;
    /// Carbohydrates above this earn a high-carb tip (grams)
    pub const HIGH_CARBS_G: f64 = 50.0;
    /// Maximum number of sampled alternatives
    pub const SAMPLE_SIZE: usize = 3;
}

/// Energy conversions
pub mod units {
    /// Kilocalories in one kilogram of body weight
    pub const KCAL_PER_KG: f64 = 7700.0;
    /// Reference daily intake for a weight-loss plan
    pub const WEIGHT_LOSS_DAILY_TARGET_KCAL: f64 = 1800.0;
    /// Share of the daily target one meal may take before it is heavy
    pub const MEAL_SHARE_OF_DAILY_TARGET: f64 = 0.3;
}

/// User profile bounds
pub mod profile {
    /// Lowest accepted body weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Highest accepted body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 200.0;
    /// Weight used when none is given (kg)
    pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
}

