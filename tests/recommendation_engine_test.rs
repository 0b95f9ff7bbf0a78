// ABOUTME: Integration tests for goal-aware recommendations over the embedded advice table
// ABOUTME: Covers branch selection, alternative sampling, seeding, and tip guarantees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::seeded_rng;
use foodscan::config::{RecommendationConfig, ReferenceData};
use foodscan::intelligence::{NutritionDatabase, RecommendationEngine};
use foodscan::models::{AlternativeCategory, MealTime, RecommendationTone, WeightGoal};

fn setup() -> (RecommendationEngine, NutritionDatabase) {
    common::init_test_logging();
    let data = ReferenceData::embedded().unwrap();
    (
        RecommendationEngine::new(data.recommendations, RecommendationConfig::default()),
        data.nutrition,
    )
}

// ============================================================================
// Branch Selection
// ============================================================================

#[test]
fn test_idli_for_maintain_suggests_healthy_breakfasts() {
    let (engine, db) = setup();
    let rec = engine.recommend(
        MealTime::Breakfast,
        "idli",
        WeightGoal::Maintain,
        db.lookup("idli"),
        &mut seeded_rng(1),
    );

    assert_eq!(rec.tone, RecommendationTone::Info);
    let pool = engine
        .table()
        .alternatives(MealTime::Breakfast, AlternativeCategory::Healthy);
    assert_eq!(rec.alternatives.len(), 3);
    assert!(rec.alternatives.iter().all(|alt| pool.contains(alt)));
    // sampling is without replacement
    let mut unique = rec.alternatives.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 3);
    // template has no tips, so the fallback list applies
    assert_eq!(rec.tips, engine.table().templates.fallback_tips);
}

#[test]
fn test_biryani_for_weight_loss_is_a_warning() {
    let (engine, db) = setup();
    let rec = engine.recommend(
        MealTime::Lunch,
        "chicken biryani",
        WeightGoal::Lose,
        db.lookup("chicken biryani"),
        &mut seeded_rng(2),
    );

    assert_eq!(rec.tone, RecommendationTone::Warning);
    assert!(rec.message.contains("450 kcal"));
    let pool = engine
        .table()
        .alternatives(MealTime::Lunch, AlternativeCategory::WeightLoss);
    // the lunch weight-loss list only has two entries
    assert_eq!(rec.alternatives.len(), pool.len().min(3));
    assert!(rec.alternatives.iter().all(|alt| pool.contains(alt)));
}

#[test]
fn test_light_meal_for_weight_gain_is_encouraged() {
    let (engine, db) = setup();
    let rec = engine.recommend(
        MealTime::Dinner,
        "roti",
        WeightGoal::Gain,
        db.lookup("roti"),
        &mut seeded_rng(3),
    );
    assert_eq!(rec.tone, RecommendationTone::Encourage);
    assert!(!rec.alternatives.is_empty());
}

#[test]
fn test_on_track_meals_have_no_alternatives() {
    let (engine, db) = setup();
    for (goal, label) in [
        (WeightGoal::Lose, "dal tadka"),
        (WeightGoal::Gain, "chicken biryani"),
        (WeightGoal::Maintain, "paneer butter masala"),
    ] {
        let rec = engine.recommend(
            MealTime::Dinner,
            label,
            goal,
            db.lookup(label),
            &mut seeded_rng(4),
        );
        assert_eq!(rec.tone, RecommendationTone::Affirm, "{goal} {label}");
        assert!(rec.alternatives.is_empty());
    }
}

// ============================================================================
// Sampling and Tips
// ============================================================================

#[test]
fn test_same_seed_same_alternatives() {
    let (engine, db) = setup();
    let record = db.lookup("samosa");
    let sample = |seed| {
        engine
            .recommend(
                MealTime::LateNightSnack,
                "samosa",
                WeightGoal::Maintain,
                record,
                &mut seeded_rng(seed),
            )
            .alternatives
    };
    assert_eq!(sample(99), sample(99));
}

#[test]
fn test_tips_are_never_empty() {
    let (engine, db) = setup();
    let labels = ["idli", "rice", "chicken curry", "chicken biryani", "xyz123"];
    let mut rng = seeded_rng(5);
    for goal in [WeightGoal::Maintain, WeightGoal::Lose, WeightGoal::Gain] {
        for meal_time in MealTime::ALL {
            for label in labels {
                let rec = engine.recommend(meal_time, label, goal, db.lookup(label), &mut rng);
                assert!(!rec.tips.is_empty(), "{goal} {meal_time} {label}");
                assert!(rec.alternatives.len() <= 3);
            }
        }
    }
}

#[test]
fn test_high_protein_meal_gets_protein_tip() {
    let (engine, db) = setup();
    let rec = engine.recommend(
        MealTime::Dinner,
        "chicken curry",
        WeightGoal::Gain,
        db.lookup("chicken curry"),
        &mut seeded_rng(6),
    );
    assert!(rec
        .tips
        .contains(&engine.table().templates.high_protein_tip));
}
