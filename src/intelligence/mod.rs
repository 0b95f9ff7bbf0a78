// ABOUTME: Intelligence module turning a recognized label into nutrition and advice
// ABOUTME: Nutrition lookup, goal-aware recommendations, and weight impact estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! # Intelligence Module
//!
//! Everything downstream of recognition. All inputs are static reference
//! tables passed in explicitly; the only source of variation is the RNG handed
//! to [`RecommendationEngine::recommend`].

/// Label to nutrition record lookup
pub mod nutrition_lookup;
/// Goal-aware meal recommendations
pub mod recommendation_engine;
/// Calorie to body-weight conversion
pub mod weight_impact;

pub use nutrition_lookup::{NutritionDatabase, NutritionEntry, NutritionFile};
pub use recommendation_engine::{
    AdviceTemplate, AdviceTemplates, RecommendationEngine, RecommendationTable,
};
pub use weight_impact::{WeightAssessment, WeightImpact};
