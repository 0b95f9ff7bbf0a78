// ABOUTME: Outputs of the food validator and the candidate matcher
// ABOUTME: Each decision carries its confidence plus the rule that produced it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use super::features::DominantColor;
use serde::{Deserialize, Serialize};

/// Why the validator reached its decision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    /// Pixel values barely vary (blank wall, lens cap)
    TooUniform,
    /// Channel averages are nearly equal (monochrome)
    FlatColor,
    /// Very dark or very bright; accepted with reduced confidence
    LightingExtreme,
    /// No vertical edge structure
    Textureless,
    /// Enough variation and texture to be food
    Textured,
    /// Validation failed internally and the image was let through
    FailOpen,
}

impl ValidationReason {
    /// Stable snake-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooUniform => "too_uniform",
            Self::FlatColor => "flat_color",
            Self::LightingExtreme => "lighting_extreme",
            Self::Textureless => "textureless",
            Self::Textured => "textured",
            Self::FailOpen => "fail_open",
        }
    }
}

/// Decision of the food validator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ValidationOutcome {
    /// Whether the image plausibly depicts food
    pub is_food: bool,
    /// Heuristic confidence in [0, 1]
    pub confidence: f64,
    /// Rule that decided
    pub reason: ValidationReason,
}

impl ValidationOutcome {
    /// Accept the image
    #[must_use]
    pub const fn accept(confidence: f64, reason: ValidationReason) -> Self {
        Self {
            is_food: true,
            confidence,
            reason,
        }
    }

    /// Reject the image
    #[must_use]
    pub const fn reject(confidence: f64, reason: ValidationReason) -> Self {
        Self {
            is_food: false,
            confidence,
            reason,
        }
    }
}

/// Rule that produced a candidate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// A dominant-color rule fired
    Dominant(DominantColor),
    /// No flag fired; brightness fallback
    Fallback,
    /// No candidate at all
    Unknown,
}

/// A scored label proposed by one rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    /// Food label
    pub label: String,
    /// Fixed rule confidence
    pub confidence: f64,
    /// Rule that proposed it
    pub rule: MatchRule,
}

impl Candidate {
    /// Create a candidate
    #[must_use]
    pub fn new(label: impl Into<String>, confidence: f64, rule: MatchRule) -> Self {
        Self {
            label: label.into(),
            confidence,
            rule,
        }
    }
}

/// Identification of the food in one image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecognitionResult {
    /// Winning label from the rule-based ranking
    pub label: String,
    /// Confidence of the winning label in [0, 1]
    pub confidence: f64,
    /// Up to three labels from color-similarity ranking
    pub alternatives: Vec<String>,
    /// Rule that produced the winning label
    pub rule: MatchRule,
}

impl RecognitionResult {
    /// Whether the detection falls below `threshold` and needs a warning
    #[must_use]
    pub fn is_low_confidence(&self, threshold: f64) -> bool {
        self.confidence < threshold
    }
}
