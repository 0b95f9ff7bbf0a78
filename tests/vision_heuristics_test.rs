// ABOUTME: Integration tests for feature extraction, food validation, and candidate matching
// ABOUTME: Drives the vision crate with synthetic photos whose statistics are known
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    column_stripes, green_dish, init_test_logging, muted_dish, overexposed_photo, row_bands,
    solid, steamed_white_dish,
};
use foodscan::config::ReferenceData;
use foodscan::models::{DominantColor, MatchRule, RecognitionResult, ValidationReason};
use foodscan::vision::{CandidateMatcher, FeatureExtractor, FoodValidator, VisionError};
use image::{Rgb, RgbImage};

// ============================================================================
// Feature Extraction
// ============================================================================

#[test]
fn test_row_bands_produce_vertical_edges_only() {
    init_test_logging();
    let features = FeatureExtractor::default().extract(&green_dish()).unwrap();

    assert!((features.avg_color[0] - 50.0).abs() < 1e-9);
    assert!((features.avg_color[1] - 180.0).abs() < 1e-9);
    assert!(features.edges_horizontal.abs() < 1e-9);
    // gray alternates between 80 and 106.67 on every row
    assert!((features.edges_vertical - 80.0 / 3.0).abs() < 1e-6);
    assert!((features.texture_score - features.edges_vertical / 2.0).abs() < 1e-9);
    assert_eq!(features.dominance.active(), vec![DominantColor::Green]);
}

#[test]
fn test_extraction_resizes_arbitrary_sizes() {
    let small = RgbImage::from_fn(50, 30, |x, _| {
        if x < 25 {
            Rgb([200, 40, 40])
        } else {
            Rgb([180, 30, 30])
        }
    });
    let features = FeatureExtractor::default().extract(&small).unwrap();
    assert!(features.dominance.red);
    assert!(features.brightness > 0.0);
}

#[test]
fn test_empty_image_is_an_error() {
    let empty = RgbImage::new(0, 10);
    assert_eq!(
        FeatureExtractor::default().extract(&empty),
        Err(VisionError::EmptyImage {
            width: 0,
            height: 10
        })
    );
}

// ============================================================================
// Food Validation
// ============================================================================

#[test]
fn test_uniform_images_are_rejected_as_too_uniform() {
    let validator = FoodValidator::default();
    for color in [[128, 128, 128], [255, 255, 255], [0, 0, 0], [90, 90, 90]] {
        let outcome = validator.validate(&solid(color));
        assert!(!outcome.is_food, "{color:?} accepted");
        assert!((outcome.confidence - 0.2).abs() < f64::EPSILON);
        assert_eq!(outcome.reason, ValidationReason::TooUniform);
    }
}

#[test]
fn test_gray_bands_are_rejected_as_flat_color() {
    let outcome = FoodValidator::default().validate(&row_bands([100, 100, 100], [160, 160, 160], 1));
    assert!(!outcome.is_food);
    assert!((outcome.confidence - 0.3).abs() < f64::EPSILON);
    assert_eq!(outcome.reason, ValidationReason::FlatColor);
}

#[test]
fn test_overexposed_photo_is_accepted_at_half_confidence() {
    let outcome = FoodValidator::default().validate(&overexposed_photo());
    assert!(outcome.is_food);
    assert!((outcome.confidence - 0.5).abs() < f64::EPSILON);
    assert_eq!(outcome.reason, ValidationReason::LightingExtreme);
}

#[test]
fn test_column_stripes_have_no_vertical_texture() {
    let outcome = FoodValidator::default().validate(&column_stripes([40, 160, 40], [60, 200, 60]));
    assert!(!outcome.is_food);
    assert!((outcome.confidence - 0.4).abs() < f64::EPSILON);
    assert_eq!(outcome.reason, ValidationReason::Textureless);
}

#[test]
fn test_textured_confidence_is_capped() {
    let validator = FoodValidator::default();
    for image in [green_dish(), steamed_white_dish(), muted_dish()] {
        let outcome = validator.validate(&image);
        assert!(outcome.is_food);
        assert_eq!(outcome.reason, ValidationReason::Textured);
        assert!(outcome.confidence <= 0.95);
        assert!(outcome.confidence >= 0.6);
    }
}

#[test]
fn test_validation_fails_open_on_empty_image() {
    let outcome = FoodValidator::default().validate(&RgbImage::new(0, 0));
    assert!(outcome.is_food);
    assert!((outcome.confidence - 0.5).abs() < f64::EPSILON);
    assert_eq!(outcome.reason, ValidationReason::FailOpen);
}

// ============================================================================
// Candidate Matching
// ============================================================================

fn recognize(image: &RgbImage) -> RecognitionResult {
    let palette = ReferenceData::embedded().unwrap().palette;
    let features = FeatureExtractor::default().extract(image).unwrap();
    CandidateMatcher::default().recognize(&features, &palette)
}

#[test]
fn test_green_dish_is_palak_paneer() {
    let result = recognize(&green_dish());
    assert_eq!(result.label, "palak paneer");
    assert!((result.confidence - 0.85).abs() < f64::EPSILON);
    assert_eq!(result.rule, MatchRule::Dominant(DominantColor::Green));
}

#[test]
fn test_smooth_white_dish_is_idli() {
    let result = recognize(&steamed_white_dish());
    assert_eq!(result.label, "idli");
    assert!((result.confidence - 0.85).abs() < f64::EPSILON);
}

#[test]
fn test_flagless_dim_dish_falls_back_to_mixed_curry() {
    let result = recognize(&muted_dish());
    assert_eq!(result.label, "mixed curry");
    assert!((result.confidence - 0.55).abs() < f64::EPSILON);
    assert_eq!(result.rule, MatchRule::Fallback);
}

#[test]
fn test_alternatives_exclude_top_color_match() {
    let palette = ReferenceData::embedded().unwrap().palette;
    for image in [green_dish(), steamed_white_dish(), muted_dish(), overexposed_photo()] {
        let features = FeatureExtractor::default().extract(&image).unwrap();
        let closest = palette
            .iter()
            .min_by(|a, b| {
                a.color_distance(&features.avg_color)
                    .total_cmp(&b.color_distance(&features.avg_color))
            })
            .unwrap();

        let alternatives = CandidateMatcher::default().color_alternatives(&features, &palette);
        assert!(alternatives.len() <= 3);
        assert!(!alternatives.contains(&closest.label));
    }
}

#[test]
fn test_primary_label_and_alternatives_are_independent() {
    // the closest palette color to the white dish is rice, yet the rules say idli
    let result = recognize(&steamed_white_dish());
    assert_eq!(result.label, "idli");
    assert!(result.alternatives.contains(&"idli".to_owned()));
    assert!(!result.alternatives.contains(&"rice".to_owned()));
}
