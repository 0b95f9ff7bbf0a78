// ABOUTME: Candidate matcher mapping feature vectors to ranked food labels
// ABOUTME: Dominant-color rules drive the primary label; palette color distance drives alternatives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! Candidate Matching
//!
//! Two independent rankings are produced:
//!
//! - **Primary**: every set dominance flag contributes fixed-confidence
//!   candidates (green, red, yellow, brown, white order). With no flag set a
//!   brightness fallback applies. Candidates are stably sorted by confidence,
//!   so ties keep rule order.
//! - **Alternatives**: palette entries ranked by mean channel distance to the
//!   image's average color. The best color match is skipped and the next
//!   three are returned.
//!
//! The two rankings are not reconciled and may disagree.

use crate::config::{MatcherThresholds, VisionConfig};
use foodscan_core::constants::matching::{UNKNOWN_CONFIDENCE, UNKNOWN_LABEL};
use foodscan_core::models::{
    Candidate, DominantColor, FeatureVector, FoodRecord, MatchRule, RecognitionResult,
};
use tracing::debug;

/// Candidates proposed by one dominant-color rule
pub type CandidateRule = fn(&FeatureVector, &MatcherThresholds) -> Vec<Candidate>;

/// Dominant-color rules in evaluation order
pub const CANDIDATE_RULES: [(DominantColor, CandidateRule); 5] = [
    (DominantColor::Green, green_candidates),
    (DominantColor::Red, red_candidates),
    (DominantColor::Yellow, yellow_candidates),
    (DominantColor::Brown, brown_candidates),
    (DominantColor::White, white_candidates),
];

fn scored(pairs: &[(&str, f64)], rule: MatchRule) -> Vec<Candidate> {
    pairs
        .iter()
        .map(|(label, confidence)| Candidate::new(*label, *confidence, rule))
        .collect()
}

/// Leafy green dishes
#[must_use]
pub fn green_candidates(_features: &FeatureVector, _thresholds: &MatcherThresholds) -> Vec<Candidate> {
    scored(
        &[("palak paneer", 0.85), ("green salad", 0.75)],
        MatchRule::Dominant(DominantColor::Green),
    )
}

/// Tomato and chili gravies; smooth red images read as soup
#[must_use]
pub fn red_candidates(features: &FeatureVector, thresholds: &MatcherThresholds) -> Vec<Candidate> {
    let rule = MatchRule::Dominant(DominantColor::Red);
    if features.texture_score > thresholds.red_texture_split {
        scored(&[("paneer butter masala", 0.80), ("chicken curry", 0.75)], rule)
    } else {
        scored(&[("tomato soup", 0.70)], rule)
    }
}

/// Turmeric dishes
#[must_use]
pub fn yellow_candidates(features: &FeatureVector, thresholds: &MatcherThresholds) -> Vec<Candidate> {
    let rule = MatchRule::Dominant(DominantColor::Yellow);
    if features.brightness > thresholds.yellow_brightness_split {
        scored(&[("dal tadka", 0.85), ("biryani", 0.75)], rule)
    } else {
        scored(&[("curry", 0.65)], rule)
    }
}

/// Fried snacks when textured, legume gravies otherwise
#[must_use]
pub fn brown_candidates(features: &FeatureVector, thresholds: &MatcherThresholds) -> Vec<Candidate> {
    let rule = MatchRule::Dominant(DominantColor::Brown);
    if features.texture_score > thresholds.brown_texture_split {
        scored(&[("samosa", 0.80), ("pakora", 0.75)], rule)
    } else {
        scored(&[("chole", 0.75), ("rajma", 0.70)], rule)
    }
}

/// Steamed items when smooth, flat breads otherwise
#[must_use]
pub fn white_candidates(features: &FeatureVector, thresholds: &MatcherThresholds) -> Vec<Candidate> {
    let rule = MatchRule::Dominant(DominantColor::White);
    if features.texture_score < thresholds.white_texture_split {
        scored(&[("idli", 0.85), ("rice", 0.80)], rule)
    } else {
        scored(&[("dosa", 0.75), ("roti", 0.70)], rule)
    }
}

/// Used when no dominance flag is set
#[must_use]
pub fn fallback_candidates(features: &FeatureVector, thresholds: &MatcherThresholds) -> Vec<Candidate> {
    if features.brightness > thresholds.fallback_brightness_split {
        scored(&[("rice", 0.60)], MatchRule::Fallback)
    } else {
        scored(&[("mixed curry", 0.55)], MatchRule::Fallback)
    }
}

/// Ranks food labels for a feature vector
#[derive(Debug, Clone, Default)]
pub struct CandidateMatcher {
    thresholds: MatcherThresholds,
}

impl CandidateMatcher {
    /// Create a matcher from the vision configuration
    #[must_use]
    pub fn new(config: &VisionConfig) -> Self {
        Self {
            thresholds: config.matcher.clone(),
        }
    }

    /// All primary candidates, highest confidence first
    #[must_use]
    pub fn rank_candidates(&self, features: &FeatureVector) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = if features.dominance.is_empty() {
            fallback_candidates(features, &self.thresholds)
        } else {
            CANDIDATE_RULES
                .iter()
                .filter(|(color, _)| features.dominance.is(*color))
                .flat_map(|(_, rule)| rule(features, &self.thresholds))
                .collect()
        };
        // sort_by is stable: equal confidences keep rule order
        candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        candidates
    }

    /// Highest-ranked candidate, or the unknown label when none exists
    #[must_use]
    pub fn best_match(&self, features: &FeatureVector) -> Candidate {
        self.rank_candidates(features)
            .into_iter()
            .next()
            .unwrap_or_else(|| Candidate::new(UNKNOWN_LABEL, UNKNOWN_CONFIDENCE, MatchRule::Unknown))
    }

    /// Palette labels ranked 2nd to 4th by color similarity
    #[must_use]
    pub fn color_alternatives(&self, features: &FeatureVector, palette: &[FoodRecord]) -> Vec<String> {
        let mut similar: Vec<(&str, f64)> = palette
            .iter()
            .filter_map(|record| {
                let similarity = (1.0 - record.color_distance(&features.avg_color) / 255.0).max(0.0);
                (similarity > self.thresholds.min_color_similarity).then_some((
                    record.label.as_str(),
                    similarity * self.thresholds.color_similarity_scale,
                ))
            })
            .collect();
        similar.sort_by(|a, b| b.1.total_cmp(&a.1));

        similar
            .into_iter()
            .skip(1)
            .take(self.thresholds.max_alternatives)
            .map(|(label, _)| label.to_owned())
            .collect()
    }

    /// Identify the food: best rule-based label plus color alternatives
    #[must_use]
    pub fn recognize(&self, features: &FeatureVector, palette: &[FoodRecord]) -> RecognitionResult {
        let best = self.best_match(features);
        let alternatives = self.color_alternatives(features, palette);
        debug!(
            label = %best.label,
            confidence = best.confidence,
            rule = ?best.rule,
            alternatives = ?alternatives,
            "food recognized"
        );
        RecognitionResult {
            label: best.label,
            confidence: best.confidence,
            alternatives,
            rule: best.rule,
        }
    }
}
