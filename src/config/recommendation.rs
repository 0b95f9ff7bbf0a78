// ABOUTME: Recommendation engine configuration for goal-aware meal advice
// ABOUTME: Calorie bands per weight goal, macro tip thresholds, and sample size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use super::error::ConfigError;
use foodscan_core::constants::{recommendation, units};
use serde::{Deserialize, Serialize};

/// Recommendation engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Calorie thresholds per goal
    pub thresholds: GoalThresholds,
    /// Macro-nutrient thresholds for extra tips
    pub macros: MacroTipThresholds,
    /// Alternatives sampled per recommendation
    pub sample_size: usize,
    /// Weight impact conversion
    pub weight_impact: WeightImpactConfig,
}

/// Calorie bands deciding the message branch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GoalThresholds {
    /// Lose weight: meals above this are too heavy
    pub loss_calorie_ceiling: f64,
    /// Gain weight: meals below this are too light
    pub gain_calorie_floor: f64,
    /// Maintain weight: inclusive balanced band
    pub maintain_calorie_range: (f64, f64),
}

/// Thresholds for the macro-nutrient tips
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MacroTipThresholds {
    /// Protein grams above which the high-protein tip is added
    pub high_protein_g: f64,
    /// Carbohydrate grams above which the high-carb tip is added
    pub high_carbs_g: f64,
}

/// Calorie to body-weight conversion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeightImpactConfig {
    /// Kilocalories per kilogram of body weight
    pub kcal_per_kg: f64,
    /// Daily intake target for weight loss
    pub loss_daily_target_kcal: f64,
    /// Share of the daily target one meal may take
    pub meal_share_of_daily_target: f64,
}

impl RecommendationConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when a band is inverted, more than
    /// three alternatives would be sampled, or a conversion factor is not
    /// positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (low, high) = self.thresholds.maintain_calorie_range;
        if low > high {
            return Err(ConfigError::InvalidRange(
                "maintain calorie range lower bound must not exceed upper bound",
            ));
        }
        if self.sample_size > recommendation::SAMPLE_SIZE {
            return Err(ConfigError::InvalidRange(
                "sample_size must not exceed 3 alternatives",
            ));
        }
        if self.weight_impact.kcal_per_kg <= 0.0 {
            return Err(ConfigError::InvalidRange("kcal_per_kg must be positive"));
        }
        if !(0.0..=1.0).contains(&self.weight_impact.meal_share_of_daily_target) {
            return Err(ConfigError::InvalidRange(
                "meal_share_of_daily_target must be within 0.0-1.0",
            ));
        }
        Ok(())
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            thresholds: GoalThresholds::default(),
            macros: MacroTipThresholds::default(),
            sample_size: recommendation::SAMPLE_SIZE,
            weight_impact: WeightImpactConfig::default(),
        }
    }
}

impl Default for GoalThresholds {
    fn default() -> Self {
        Self {
            loss_calorie_ceiling: recommendation::LOSS_CALORIE_CEILING,
            gain_calorie_floor: recommendation::GAIN_CALORIE_FLOOR,
            maintain_calorie_range: recommendation::MAINTAIN_CALORIE_RANGE,
        }
    }
}

impl Default for MacroTipThresholds {
    fn default() -> Self {
        Self {
            high_protein_g: recommendation::HIGH_PROTEIN_G,
            high_carbs_g: recommendation::HIGH_CARBS_G,
        }
    }
}

impl Default for WeightImpactConfig {
    fn default() -> Self {
        Self {
            kcal_per_kg: units::KCAL_PER_KG,
            loss_daily_target_kcal: units::WEIGHT_LOSS_DAILY_TARGET_KCAL,
            meal_share_of_daily_target: units::MEAL_SHARE_OF_DAILY_TARGET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RecommendationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_sample_size_above_three() {
        let config = RecommendationConfig {
            sample_size: 10,
            ..RecommendationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(msg)) if msg.contains("sample_size")
        ));
    }

    #[test]
    fn test_rejects_inverted_maintain_range() {
        let mut config = RecommendationConfig::default();
        config.thresholds.maintain_calorie_range = (500.0, 300.0);
        assert!(config.validate().is_err());
    }
}
