// ABOUTME: User profile parameters and meal-time bucketing
// ABOUTME: Weight goal drives recommendation branches; activity level is carried through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use crate::constants::profile::{DEFAULT_WEIGHT_KG, MAX_WEIGHT_KG, MIN_WEIGHT_KG};
use crate::errors::{AppError, AppResult};
use chrono::Timelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dietary goal of the user
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    /// Keep current weight
    #[default]
    Maintain,
    /// Lose weight
    Lose,
    /// Gain weight
    Gain,
}

impl WeightGoal {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Maintain => "Maintain Weight",
            Self::Lose => "Lose Weight",
            Self::Gain => "Gain Weight",
        }
    }

    /// Parse from a string, defaulting to `Maintain` for unrecognized values
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for WeightGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "maintain" | "maintain weight" => Ok(Self::Maintain),
            "lose" | "lose weight" | "loss" => Ok(Self::Lose),
            "gain" | "gain weight" => Ok(Self::Gain),
            other => Err(AppError::invalid_input(format!(
                "unknown weight goal '{other}', expected maintain, lose or gain"
            ))),
        }
    }
}

impl fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little exercise
    Sedentary,
    /// Regular light exercise
    #[default]
    Moderate,
    /// Daily training
    Active,
}

impl ActivityLevel {
    /// Parse from a string, defaulting to `Moderate` for unrecognized values
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Self::Sedentary,
            "active" => Self::Active,
            _ => Self::Moderate,
        }
    }
}

/// Meal bucket derived from the hour of day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealTime {
    /// 05:00 to 11:59
    Breakfast,
    /// 12:00 to 16:59
    Lunch,
    /// 17:00 to 20:59
    Dinner,
    /// Everything else
    LateNightSnack,
}

impl MealTime {
    /// Every bucket in day order
    pub const ALL: [Self; 4] = [
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
        Self::LateNightSnack,
    ];

    /// Bucket an hour of day (0-23); out-of-range hours land in the snack bucket
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Breakfast,
            12..=16 => Self::Lunch,
            17..=20 => Self::Dinner,
            _ => Self::LateNightSnack,
        }
    }

    /// Bucket any chrono time value
    #[must_use]
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self::from_hour(time.hour())
    }

    /// Parse from a string, returning None for unrecognized values
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "snack" | "late night snack" | "late night" => Some(Self::LateNightSnack),
            _ => None,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::LateNightSnack => "Late Night Snack",
        }
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parameters supplied with every scan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Dietary goal
    pub goal: WeightGoal,
    /// Activity level
    pub activity_level: ActivityLevel,
}

impl UserProfile {
    /// Build a validated profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the weight is not a number or lies
    /// outside 30-200 kg.
    pub fn new(weight_kg: f64, goal: WeightGoal, activity_level: ActivityLevel) -> AppResult<Self> {
        if !weight_kg.is_finite() {
            return Err(AppError::invalid_input("weight must be a number"));
        }
        if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
            return Err(AppError::invalid_input(format!(
                "weight {weight_kg} kg outside {MIN_WEIGHT_KG}-{MAX_WEIGHT_KG} kg"
            )));
        }
        Ok(Self {
            weight_kg,
            goal,
            activity_level,
        })
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            weight_kg: DEFAULT_WEIGHT_KG,
            goal: WeightGoal::default(),
            activity_level: ActivityLevel::default(),
        }
    }
}
