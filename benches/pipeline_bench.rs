// ABOUTME: Criterion benchmarks for the end-to-end scan pipeline
// ABOUTME: Measures full scans plus nutrition lookup and recommendation generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! Criterion benchmarks for the scan service.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{curry_photo, leafy_photo, PhotoSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use foodscan::config::{RecommendationConfig, ReferenceData};
use foodscan::intelligence::RecommendationEngine;
use foodscan::models::{MealTime, UserProfile, WeightGoal};
use foodscan::services::{ScanRequest, ScanService};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_full_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    let Ok(service) = ScanService::with_defaults() else {
        return;
    };
    let request = ScanRequest::new(UserProfile::default(), MealTime::Lunch);

    for size in PhotoSize::ALL {
        let photo = curry_photo(size);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        group.bench_with_input(BenchmarkId::new("full", size.label()), &photo, |b, photo| {
            b.iter(|| service.scan(black_box(photo), &request, &mut rng));
        });
    }

    let leafy = leafy_photo(PhotoSize::Analysis);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    group.bench_function("leafy_for_weight_loss", |b| {
        let request = ScanRequest::new(
            UserProfile {
                goal: WeightGoal::Lose,
                ..UserProfile::default()
            },
            MealTime::Dinner,
        );
        b.iter(|| service.scan(black_box(&leafy), &request, &mut rng));
    });

    group.finish();
}

fn bench_advice(c: &mut Criterion) {
    let mut group = c.benchmark_group("advice");
    let Ok(service) = ScanService::with_defaults() else {
        return;
    };
    let nutrition = service.nutrition();

    group.bench_function("nutrition_lookup_hit", |b| {
        b.iter(|| nutrition.lookup(black_box("Paneer Butter Masala")));
    });
    group.bench_function("nutrition_lookup_miss", |b| {
        b.iter(|| nutrition.lookup(black_box("unknown dish")));
    });

    let Ok(data) = ReferenceData::embedded() else {
        return;
    };
    let engine = RecommendationEngine::new(
        data.recommendations,
        RecommendationConfig::default(),
    );
    let record = nutrition.lookup("chicken biryani");
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for goal in [WeightGoal::Lose, WeightGoal::Maintain, WeightGoal::Gain] {
        group.bench_with_input(
            BenchmarkId::new("recommend", goal.to_string()),
            &goal,
            |b, goal| {
                b.iter(|| {
                    engine.recommend(MealTime::Dinner, "chicken biryani", *goal, record, &mut rng)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_full_scan, bench_advice);
criterion_main!(benches);
