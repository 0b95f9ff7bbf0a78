// ABOUTME: Reference palette entry with a fixed color profile and synonyms
// ABOUTME: Read-only data used by color-similarity alternative ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use serde::{Deserialize, Serialize};

/// Static reference food
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodRecord {
    /// Canonical label
    pub label: String,
    /// Typical average color (red, green, blue)
    pub color_profile: [u8; 3],
    /// Descriptive keywords
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Names people use for this dish
    #[serde(default)]
    pub common_names: Vec<String>,
}

impl FoodRecord {
    /// Whether `name` is the label or one of the common names (case-insensitive)
    #[must_use]
    pub fn is_known_as(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.label.to_lowercase() == needle
            || self
                .common_names
                .iter()
                .any(|common| common.to_lowercase() == needle)
    }

    /// Mean absolute channel difference to `avg_color`
    #[must_use]
    pub fn color_distance(&self, avg_color: &[f64; 3]) -> f64 {
        self.color_profile
            .iter()
            .zip(avg_color)
            .map(|(reference, actual)| (f64::from(*reference) - actual).abs())
            .sum::<f64>()
            / 3.0
    }
}
