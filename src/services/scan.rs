// ABOUTME: Scan pipeline service running lighting, validation, recognition, and advice
// ABOUTME: Produces a serializable ScanReport or a NotFood/InvalidImage AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! Scan pipeline
//!
//! One scan runs these stages in order:
//!
//! 1. advisory lighting check on the raw image
//! 2. feature extraction and food validation (fails open on extraction errors)
//! 3. candidate matching and palette alternatives
//! 4. nutrition lookup, recommendation, weight impact
//!
//! A rejected image stops the pipeline before nutrition lookup.

use crate::config::{
    vision_config_from_dir, ConfigError, RecommendationConfig, ReferenceData, ScanConfig,
    WeightImpactConfig,
};
use crate::errors::{AppError, AppResult};
use crate::intelligence::{weight_impact, NutritionDatabase, RecommendationEngine, WeightImpact};
use crate::logging::ScanLogger;
use chrono::{DateTime, Utc};
use foodscan_core::models::{
    FoodRecord, MealTime, NutritionRecord, RecognitionResult, Recommendation, UserProfile,
    ValidationOutcome, WeightGoal,
};
use foodscan_vision::config::LightingThresholds;
use foodscan_vision::{
    assess_lighting, CandidateMatcher, FeatureExtractor, FoodValidator, LightingIssue,
    VisionConfig,
};
use image::RgbImage;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info_span};
use uuid::Uuid;

/// Who is eating and when
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScanRequest {
    /// User profile; only the goal affects advice
    pub profile: UserProfile,
    /// Meal bucket the photo belongs to
    pub meal_time: MealTime,
}

impl ScanRequest {
    /// Request for `profile` at `meal_time`
    #[must_use]
    pub const fn new(profile: UserProfile, meal_time: MealTime) -> Self {
        Self { profile, meal_time }
    }
}

/// Non-fatal issue attached to a report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanWarning {
    /// Recognition confidence below the configured threshold
    LowConfidence {
        /// Detected confidence
        confidence: f64,
        /// Threshold it fell below
        threshold: f64,
    },
    /// Raw image is very dark
    TooDark,
    /// Raw image is very bright
    TooBright,
}

impl ScanWarning {
    /// Text shown to the user
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::LowConfidence { confidence, .. } => format!(
                "Low confidence detection ({:.1}%). Results may not be accurate.",
                confidence * 100.0
            ),
            Self::TooDark => LightingIssue::TooDark.advice().to_owned(),
            Self::TooBright => LightingIssue::TooBright.advice().to_owned(),
        }
    }
}

impl From<LightingIssue> for ScanWarning {
    fn from(issue: LightingIssue) -> Self {
        match issue {
            LightingIssue::TooDark => Self::TooDark,
            LightingIssue::TooBright => Self::TooBright,
        }
    }
}

/// Everything known about one scanned photo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanReport {
    /// Correlates logs and errors
    pub scan_id: Uuid,
    /// When the scan ran
    pub scanned_at: DateTime<Utc>,
    /// Meal bucket used for advice
    pub meal_time: MealTime,
    /// Goal used for advice
    pub goal: WeightGoal,
    /// Food validator decision
    pub validation: ValidationOutcome,
    /// Recognized label and alternatives
    pub recognition: RecognitionResult,
    /// Nutrition facts for the label
    pub nutrition: NutritionRecord,
    /// Goal-aware advice
    pub recommendation: Recommendation,
    /// Calories as body weight
    pub weight_impact: WeightImpact,
    /// Non-fatal issues
    pub warnings: Vec<ScanWarning>,
}

/// Runs scans against immutable reference data
///
/// Cloning is cheap; reference tables are shared.
#[derive(Debug, Clone)]
pub struct ScanService {
    extractor: FeatureExtractor,
    validator: FoodValidator,
    matcher: CandidateMatcher,
    lighting: LightingThresholds,
    palette: Arc<Vec<FoodRecord>>,
    nutrition: Arc<NutritionDatabase>,
    recommender: Arc<RecommendationEngine>,
    weight_impact: WeightImpactConfig,
    low_confidence_threshold: f64,
}

impl ScanService {
    /// Assemble a service from explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when any configuration fails validation.
    pub fn new(
        scan: &ScanConfig,
        reference: ReferenceData,
        vision: &VisionConfig,
        recommendation: RecommendationConfig,
    ) -> Result<Self, ConfigError> {
        scan.validate()?;
        vision.validate()?;
        recommendation.validate()?;
        reference.recommendations.validate()?;

        Ok(Self {
            extractor: FeatureExtractor::new(vision),
            validator: FoodValidator::new(vision),
            matcher: CandidateMatcher::new(vision),
            lighting: vision.lighting.clone(),
            palette: Arc::new(reference.palette),
            nutrition: Arc::new(reference.nutrition),
            weight_impact: recommendation.weight_impact.clone(),
            recommender: Arc::new(RecommendationEngine::new(
                reference.recommendations,
                recommendation,
            )),
            low_confidence_threshold: scan.low_confidence_threshold,
        })
    }

    /// Service over the embedded tables and default thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the embedded assets do not parse.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(
            &ScanConfig::default(),
            ReferenceData::embedded()?,
            &VisionConfig::default(),
            RecommendationConfig::default(),
        )
    }

    /// Service honoring `data_dir` overrides from `scan`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when override files cannot be read, parsed, or
    /// validated.
    pub fn from_config(scan: &ScanConfig) -> Result<Self, ConfigError> {
        let dir = scan.data_dir.as_deref();
        let reference = ReferenceData::load(dir)?;
        let vision = match dir {
            Some(dir) => vision_config_from_dir(dir)?,
            None => VisionConfig::default(),
        };
        Self::new(scan, reference, &vision, RecommendationConfig::default())
    }

    /// Nutrition database in use
    #[must_use]
    pub fn nutrition(&self) -> &NutritionDatabase {
        &self.nutrition
    }

    /// Reference palette in use
    #[must_use]
    pub fn palette(&self) -> &[FoodRecord] {
        &self.palette
    }

    /// Scan one decoded image
    ///
    /// # Errors
    ///
    /// - `NotFood` when the validator rejects the image
    /// - `InvalidImage` when features cannot be computed for recognition
    pub fn scan<R: Rng + ?Sized>(
        &self,
        image: &RgbImage,
        request: &ScanRequest,
        rng: &mut R,
    ) -> AppResult<ScanReport> {
        let scan_id = Uuid::new_v4();
        let span = info_span!("scan", scan.id = %scan_id);
        let _enter = span.enter();
        let started = Instant::now();

        let mut warnings: Vec<ScanWarning> = assess_lighting(image, &self.lighting)
            .map(ScanWarning::from)
            .into_iter()
            .collect();

        let extracted = self.extractor.extract(image);
        let validation = self.validator.validate_extracted(&extracted);
        if !validation.is_food {
            ScanLogger::log_scan_rejected(
                &scan_id.to_string(),
                validation.reason.as_str(),
                validation.confidence,
            );
            return Err(AppError::not_food(
                validation.confidence,
                validation.reason.as_str(),
            )
            .with_scan_id(scan_id.to_string()));
        }

        let features =
            extracted.map_err(|e| AppError::from(e).with_scan_id(scan_id.to_string()))?;
        debug!(
            brightness = features.brightness,
            saturation = features.saturation,
            texture = features.texture_score,
            "features extracted"
        );

        let recognition = self.matcher.recognize(&features, &self.palette);
        if recognition.is_low_confidence(self.low_confidence_threshold) {
            warnings.push(ScanWarning::LowConfidence {
                confidence: recognition.confidence,
                threshold: self.low_confidence_threshold,
            });
        }

        let goal = request.profile.goal;
        let nutrition = self.nutrition.lookup(&recognition.label).clone();
        let recommendation =
            self.recommender
                .recommend(request.meal_time, &recognition.label, goal, &nutrition, rng);
        let weight_impact = weight_impact::estimate(nutrition.calories, goal, &self.weight_impact);

        ScanLogger::log_scan_completed(
            &scan_id.to_string(),
            &recognition.label,
            recognition.confidence,
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        Ok(ScanReport {
            scan_id,
            scanned_at: Utc::now(),
            meal_time: request.meal_time,
            goal,
            validation,
            recognition,
            nutrition,
            recommendation,
            weight_impact,
            warnings,
        })
    }
}
