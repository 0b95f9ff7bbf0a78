// ABOUTME: End-to-end tests for the scan service from decoded image to report
// ABOUTME: Covers recognition, nutrition, advice, warnings, and NotFood/InvalidImage errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    green_dish, init_test_logging, muted_dish, overexposed_photo, request, seeded_rng, solid,
    steamed_white_dish,
};
use foodscan::config::{RecommendationConfig, ReferenceData, ScanConfig};
use foodscan::errors::ErrorCode;
use foodscan::intelligence::WeightAssessment;
use foodscan::models::{MealTime, RecommendationTone, ValidationReason, WeightGoal};
use foodscan::services::{ScanService, ScanWarning};
use foodscan::vision::VisionConfig;
use image::RgbImage;

fn service() -> ScanService {
    init_test_logging();
    ScanService::with_defaults().unwrap()
}

// ============================================================================
// Successful Scans
// ============================================================================

#[test]
fn test_idli_for_maintain_gets_healthy_alternatives() {
    let report = service()
        .scan(
            &steamed_white_dish(),
            &request(WeightGoal::Maintain, MealTime::Breakfast),
            &mut seeded_rng(11),
        )
        .unwrap();

    assert_eq!(report.recognition.label, "idli");
    assert!((report.nutrition.calories - 156.0).abs() < f64::EPSILON);
    assert_eq!(report.recommendation.tone, RecommendationTone::Info);
    assert_eq!(
        report.recommendation.message,
        "This meal has 156 kcal. For weight maintenance, aim for balanced meals."
    );

    let healthy_breakfast = ["idli", "dosa", "poha", "upma", "oats"];
    assert_eq!(report.recommendation.alternatives.len(), 3);
    assert!(report
        .recommendation
        .alternatives
        .iter()
        .all(|alt| healthy_breakfast.contains(&alt.as_str())));
    assert!(!report.recommendation.tips.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_green_dish_for_weight_loss_is_on_track() {
    let report = service()
        .scan(
            &green_dish(),
            &request(WeightGoal::Lose, MealTime::Dinner),
            &mut seeded_rng(1),
        )
        .unwrap();

    assert_eq!(report.recognition.label, "palak paneer");
    assert!((report.nutrition.calories - 265.0).abs() < f64::EPSILON);
    assert_eq!(report.recommendation.tone, RecommendationTone::Affirm);
    assert!(report.recommendation.alternatives.is_empty());
    assert_eq!(report.weight_impact.assessment, WeightAssessment::OnTrackForLoss);
    assert_eq!(report.goal, WeightGoal::Lose);
    assert_eq!(report.meal_time, MealTime::Dinner);
}

#[test]
fn test_fallback_label_carries_low_confidence_warning() {
    let report = service()
        .scan(
            &muted_dish(),
            &request(WeightGoal::Maintain, MealTime::Lunch),
            &mut seeded_rng(5),
        )
        .unwrap();

    assert_eq!(report.recognition.label, "mixed curry");
    // no entry for the fallback label, so the default record applies
    assert!((report.nutrition.calories - 250.0).abs() < f64::EPSILON);
    assert_eq!(
        report.warnings,
        vec![ScanWarning::LowConfidence {
            confidence: 0.55,
            threshold: 0.6
        }]
    );
    assert_eq!(
        report.warnings[0].message(),
        "Low confidence detection (55.0%). Results may not be accurate."
    );
}

#[test]
fn test_overexposed_photo_is_scanned_with_lighting_warning() {
    let report = service()
        .scan(
            &overexposed_photo(),
            &request(WeightGoal::Gain, MealTime::LateNightSnack),
            &mut seeded_rng(9),
        )
        .unwrap();

    assert!(report.validation.is_food);
    assert_eq!(report.validation.reason, ValidationReason::LightingExtreme);
    assert_eq!(report.warnings.first(), Some(&ScanWarning::TooBright));
    assert_eq!(report.weight_impact.assessment, WeightAssessment::Surplus);
}

#[test]
fn test_same_seed_same_recommendations() {
    let service = service();
    let scan = |seed| {
        service
            .scan(
                &steamed_white_dish(),
                &request(WeightGoal::Maintain, MealTime::Lunch),
                &mut seeded_rng(seed),
            )
            .unwrap()
            .recommendation
            .alternatives
    };
    assert_eq!(scan(42), scan(42));
}

#[test]
fn test_report_serializes_to_json() {
    let report = service()
        .scan(
            &green_dish(),
            &request(WeightGoal::Gain, MealTime::Lunch),
            &mut seeded_rng(3),
        )
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["recognition"]["label"], "palak paneer");
    assert_eq!(json["meal_time"], "lunch");
    assert_eq!(json["goal"], "gain");
    assert!(json["scan_id"].is_string());
}

// ============================================================================
// Rejections and Errors
// ============================================================================

#[test]
fn test_uniform_image_is_not_food() {
    let err = service()
        .scan(
            &solid([255, 255, 255]),
            &request(WeightGoal::Maintain, MealTime::Lunch),
            &mut seeded_rng(1),
        )
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::NotFood);
    assert_eq!(
        err.user_message(),
        "This doesn't appear to be a food image. Please upload a photo of actual food."
    );
    assert_eq!(err.context.details["reason"], "too_uniform");
    assert!(err.context.scan_id.is_some());
}

#[test]
fn test_empty_image_fails_open_then_cannot_be_recognized() {
    let err = service()
        .scan(
            &RgbImage::new(0, 0),
            &request(WeightGoal::Maintain, MealTime::Lunch),
            &mut seeded_rng(1),
        )
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidImage);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_custom_low_confidence_threshold() {
    let scan_config = ScanConfig {
        low_confidence_threshold: 0.5,
        ..ScanConfig::default()
    };
    let service = ScanService::new(
        &scan_config,
        ReferenceData::embedded().unwrap(),
        &VisionConfig::default(),
        RecommendationConfig::default(),
    )
    .unwrap();

    let report = service
        .scan(
            &muted_dish(),
            &request(WeightGoal::Maintain, MealTime::Lunch),
            &mut seeded_rng(1),
        )
        .unwrap();
    assert!(report.warnings.is_empty());
}

#[test]
fn test_invalid_thresholds_are_rejected_at_construction() {
    let scan_config = ScanConfig {
        low_confidence_threshold: 2.0,
        ..ScanConfig::default()
    };
    assert!(ScanService::new(
        &scan_config,
        ReferenceData::embedded().unwrap(),
        &VisionConfig::default(),
        RecommendationConfig::default(),
    )
    .is_err());
}

#[test]
fn test_oversized_alternative_sample_is_rejected_at_construction() {
    let recommendation = RecommendationConfig {
        sample_size: 10,
        ..RecommendationConfig::default()
    };
    let err = ScanService::new(
        &ScanConfig::default(),
        ReferenceData::embedded().unwrap(),
        &VisionConfig::default(),
        recommendation,
    )
    .unwrap_err();
    assert!(err.to_string().contains("sample_size"));
}
