// ABOUTME: Core data models shared by the vision crate and the scan pipeline
// ABOUTME: Re-exports feature, recognition, food, nutrition, profile, and advice types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

/// Summary statistics extracted from an image
pub mod features;
/// Reference palette entries
pub mod food;
/// Static nutrition facts
pub mod nutrition;
/// User profile, weight goal, and meal-time bucketing
pub mod profile;
/// Validator and matcher outputs
pub mod recognition;
/// Goal-aware meal advice
pub mod recommendation;

pub use features::{DominanceFlags, DominantColor, FeatureVector};
pub use food::FoodRecord;
pub use nutrition::NutritionRecord;
pub use profile::{ActivityLevel, MealTime, UserProfile, WeightGoal};
pub use recognition::{Candidate, MatchRule, RecognitionResult, ValidationOutcome, ValidationReason};
pub use recommendation::{AlternativeCategory, Recommendation, RecommendationTone};
