// ABOUTME: Goal-aware meal recommendation engine over static advice tables
// ABOUTME: Picks a template per weight goal and samples alternatives with an explicit RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! Meal recommendation engine
//!
//! Every goal has two branches separated by a calorie threshold from
//! [`GoalThresholds`](crate::config::GoalThresholds). The off-target branch
//! samples alternatives for the current meal time; the on-target branch only
//! gives tips. Macro-nutrient tips are appended afterwards and a generic pair
//! of tips is used when nothing else applies, so the tip list is never empty.

use crate::config::{ConfigError, RecommendationConfig};
use foodscan_core::models::{
    AlternativeCategory, MealTime, NutritionRecord, Recommendation, RecommendationTone,
    WeightGoal,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Message text and fixed tips for one branch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdviceTemplate {
    /// Message with `{calories}` / `{protein}` placeholders
    pub message: String,
    /// Tips attached to this branch
    #[serde(default)]
    pub tips: Vec<String>,
}

/// All advice texts, one template per goal branch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdviceTemplates {
    /// Lose weight, meal above the calorie ceiling
    pub lose_heavy: AdviceTemplate,
    /// Lose weight, meal within the ceiling
    pub lose_on_track: AdviceTemplate,
    /// Gain weight, meal below the calorie floor
    pub gain_light: AdviceTemplate,
    /// Gain weight, meal at or above the floor
    pub gain_on_track: AdviceTemplate,
    /// Maintain weight, meal inside the balanced band
    pub maintain_balanced: AdviceTemplate,
    /// Maintain weight, meal outside the balanced band
    pub maintain_unbalanced: AdviceTemplate,
    /// Appended when protein is high
    pub high_protein_tip: String,
    /// Appended when carbohydrates are high
    pub high_carbs_tip: String,
    /// Used when no other tip applies
    pub fallback_tips: Vec<String>,
}

/// Alternatives per meal time and category plus the advice templates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationTable {
    /// Meal time to category to dish names
    pub meals: HashMap<MealTime, HashMap<AlternativeCategory, Vec<String>>>,
    /// Advice texts
    pub templates: AdviceTemplates,
}

impl RecommendationTable {
    /// Dishes listed for a meal time and category; empty when either is missing
    #[must_use]
    pub fn alternatives(&self, meal_time: MealTime, category: AlternativeCategory) -> &[String] {
        self.meals
            .get(&meal_time)
            .and_then(|categories| categories.get(&category))
            .map_or(&[], Vec::as_slice)
    }

    /// Check that advice can always carry at least one tip
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when `fallback_tips` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.templates.fallback_tips.is_empty() {
            return Err(ConfigError::InvalidRange(
                "templates.fallback_tips must not be empty",
            ));
        }
        Ok(())
    }
}

/// Which branch of the goal logic fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    LoseHeavy,
    LoseOnTrack,
    GainLight,
    GainOnTrack,
    MaintainBalanced,
    MaintainUnbalanced,
}

impl Branch {
    fn select(goal: WeightGoal, nutrition: &NutritionRecord, config: &RecommendationConfig) -> Self {
        let calories = nutrition.calories;
        let thresholds = &config.thresholds;
        match goal {
            WeightGoal::Lose if calories > thresholds.loss_calorie_ceiling => Self::LoseHeavy,
            WeightGoal::Lose => Self::LoseOnTrack,
            WeightGoal::Gain if calories < thresholds.gain_calorie_floor => Self::GainLight,
            WeightGoal::Gain => Self::GainOnTrack,
            WeightGoal::Maintain => {
                let (low, high) = thresholds.maintain_calorie_range;
                if (low..=high).contains(&calories) {
                    Self::MaintainBalanced
                } else {
                    Self::MaintainUnbalanced
                }
            }
        }
    }

    const fn tone(self) -> RecommendationTone {
        match self {
            Self::LoseHeavy => RecommendationTone::Warning,
            Self::GainLight => RecommendationTone::Encourage,
            Self::MaintainUnbalanced => RecommendationTone::Info,
            Self::LoseOnTrack | Self::GainOnTrack | Self::MaintainBalanced => {
                RecommendationTone::Affirm
            }
        }
    }

    const fn samples_alternatives(self) -> bool {
        matches!(
            self,
            Self::LoseHeavy | Self::GainLight | Self::MaintainUnbalanced
        )
    }

    const fn template(self, templates: &AdviceTemplates) -> &AdviceTemplate {
        match self {
            Self::LoseHeavy => &templates.lose_heavy,
            Self::LoseOnTrack => &templates.lose_on_track,
            Self::GainLight => &templates.gain_light,
            Self::GainOnTrack => &templates.gain_on_track,
            Self::MaintainBalanced => &templates.maintain_balanced,
            Self::MaintainUnbalanced => &templates.maintain_unbalanced,
        }
    }
}

/// Fill `{calories}` and `{protein}` placeholders
fn render(template: &str, nutrition: &NutritionRecord) -> String {
    template
        .replace("{calories}", &nutrition.calories.to_string())
        .replace("{protein}", &nutrition.protein_g.to_string())
}

/// Produces goal-aware advice for a scanned meal
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    table: RecommendationTable,
    config: RecommendationConfig,
}

impl RecommendationEngine {
    /// Create an engine over `table` with the given thresholds
    #[must_use]
    pub const fn new(table: RecommendationTable, config: RecommendationConfig) -> Self {
        Self { table, config }
    }

    /// Advice table in use
    #[must_use]
    pub const fn table(&self) -> &RecommendationTable {
        &self.table
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Build the recommendation for one meal
    ///
    /// `label` is the recognized food; it only appears in logs. Alternatives
    /// are sampled without replacement from `rng`, so a seeded generator
    /// gives reproducible output.
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        meal_time: MealTime,
        label: &str,
        goal: WeightGoal,
        nutrition: &NutritionRecord,
        rng: &mut R,
    ) -> Recommendation {
        let branch = Branch::select(goal, nutrition, &self.config);
        let template = branch.template(&self.table.templates);

        let alternatives = if branch.samples_alternatives() {
            self.sample_alternatives(meal_time, AlternativeCategory::for_goal(goal), rng)
        } else {
            Vec::new()
        };

        let mut tips = template.tips.clone();
        let macros = &self.config.macros;
        if nutrition.protein_g > macros.high_protein_g {
            tips.push(self.table.templates.high_protein_tip.clone());
        }
        if nutrition.carbs_g > macros.high_carbs_g {
            tips.push(self.table.templates.high_carbs_tip.clone());
        }
        if tips.is_empty() {
            tips.clone_from(&self.table.templates.fallback_tips);
        }

        debug!(
            label,
            %meal_time,
            %goal,
            calories = nutrition.calories,
            branch = ?branch,
            alternatives = alternatives.len(),
            "recommendation generated"
        );

        Recommendation {
            tone: branch.tone(),
            message: render(&template.message, nutrition),
            alternatives,
            tips,
        }
    }

    fn sample_alternatives<R: Rng + ?Sized>(
        &self,
        meal_time: MealTime,
        category: AlternativeCategory,
        rng: &mut R,
    ) -> Vec<String> {
        let pool = self.table.alternatives(meal_time, category);
        let amount = self.config.sample_size.min(pool.len());
        pool.choose_multiple(rng, amount).cloned().collect()
    }
}
