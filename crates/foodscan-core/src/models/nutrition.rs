// ABOUTME: Static nutrition facts for one serving of a dish
// ABOUTME: Default impl is the record returned for labels with no entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use serde::{Deserialize, Serialize};

/// Nutrition facts per serving
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionRecord {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Fiber (grams)
    pub fiber_g: f64,
    /// Sugar (grams)
    pub sugar_g: f64,
    /// Serving description, e.g. "1 cup (158g)"
    pub serving_size: String,
    /// Notable vitamins
    #[serde(default)]
    pub vitamins: Vec<String>,
    /// Notable minerals
    #[serde(default)]
    pub minerals: Vec<String>,
}

/// Generic mixed-dish serving used when a label has no entry
impl Default for NutritionRecord {
    fn default() -> Self {
        Self {
            calories: 250.0,
            protein_g: 10.0,
            carbs_g: 35.0,
            fat_g: 8.0,
            fiber_g: 3.0,
            sugar_g: 5.0,
            serving_size: "1 serving (200g)".into(),
            vitamins: vec!["Vitamin B Complex".into(), "Vitamin C".into()],
            minerals: vec!["Iron".into(), "Calcium".into(), "Potassium".into()],
        }
    }
}
