// ABOUTME: Goal-aware meal advice produced after nutrition lookup
// ABOUTME: Tone replaces decorative markers so front ends can style the message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use super::profile::WeightGoal;
use serde::{Deserialize, Serialize};

/// Overall sentiment of a recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTone {
    /// Meal works against the goal
    Warning,
    /// Meal fits the goal
    Affirm,
    /// Meal is too light for the goal
    Encourage,
    /// Neutral guidance
    Info,
}

/// Alternative-meal list keyed by purpose
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlternativeCategory {
    /// Balanced everyday choices
    Healthy,
    /// Protein-rich choices
    ProteinRich,
    /// Light choices
    Light,
    /// Choices for a weight-loss goal
    WeightLoss,
    /// Choices for a weight-gain goal
    WeightGain,
}

impl AlternativeCategory {
    /// List sampled when a meal does not suit `goal`
    #[must_use]
    pub const fn for_goal(goal: WeightGoal) -> Self {
        match goal {
            WeightGoal::Maintain => Self::Healthy,
            WeightGoal::Lose => Self::WeightLoss,
            WeightGoal::Gain => Self::WeightGain,
        }
    }
}

/// Advice for one scanned meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Sentiment
    pub tone: RecommendationTone,
    /// Rendered message
    pub message: String,
    /// At most three suggested dishes
    pub alternatives: Vec<String>,
    /// Never empty
    pub tips: Vec<String>,
}
