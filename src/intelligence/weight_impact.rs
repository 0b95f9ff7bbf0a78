// ABOUTME: Body-weight equivalent of a meal's calories relative to the user's goal
// ABOUTME: Converts kcal to kg and flags meals too heavy for a weight-loss plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use crate::config::WeightImpactConfig;
use foodscan_core::models::WeightGoal;
use serde::{Deserialize, Serialize};

/// How the meal relates to the goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightAssessment {
    /// Meal takes more than its share of a weight-loss day
    HeavyForLoss,
    /// Meal fits a weight-loss day
    OnTrackForLoss,
    /// Calories count towards a weight-gain goal
    Surplus,
    /// Informational only
    Neutral,
}

/// Weight equivalent of one meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightImpact {
    /// Kilograms of body weight the calories correspond to
    pub kg_equivalent: f64,
    /// Goal-relative assessment
    pub assessment: WeightAssessment,
    /// Human-readable summary
    pub message: String,
}

impl WeightImpact {
    /// Estimate with the default conversion factors
    #[must_use]
    pub fn estimate(calories: f64, goal: WeightGoal) -> Self {
        estimate(calories, goal, &WeightImpactConfig::default())
    }
}

/// Estimate the weight impact of `calories` for `goal`
#[must_use]
pub fn estimate(calories: f64, goal: WeightGoal, config: &WeightImpactConfig) -> WeightImpact {
    let kg_equivalent = calories / config.kcal_per_kg;
    let (assessment, message) = match goal {
        WeightGoal::Lose => {
            let meal_budget = config.loss_daily_target_kcal * config.meal_share_of_daily_target;
            if calories > meal_budget {
                (
                    WeightAssessment::HeavyForLoss,
                    format!(
                        "This meal has {calories} kcal. Consider a lighter option for weight loss."
                    ),
                )
            } else {
                (
                    WeightAssessment::OnTrackForLoss,
                    "Good choice! This aligns with your weight loss goal.".to_owned(),
                )
            }
        }
        WeightGoal::Gain => (
            WeightAssessment::Surplus,
            format!("Eating this will provide {kg_equivalent:.4} kg worth of calories."),
        ),
        WeightGoal::Maintain => (
            WeightAssessment::Neutral,
            format!(
                "This meal contains {calories} kcal, contributing {kg_equivalent:.4} kg to weight if fully stored."
            ),
        ),
    };

    WeightImpact {
        kg_equivalent,
        assessment,
        message,
    }
}
