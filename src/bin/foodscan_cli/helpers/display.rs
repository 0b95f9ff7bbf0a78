// ABOUTME: Output formatting helpers for foodscan-cli
// ABOUTME: Renders a ScanReport as a human-readable text summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use foodscan::models::RecommendationTone;
use foodscan::services::ScanReport;

const fn tone_marker(tone: RecommendationTone) -> &'static str {
    match tone {
        RecommendationTone::Warning => "[!]",
        RecommendationTone::Affirm => "[ok]",
        RecommendationTone::Encourage => "[+]",
        RecommendationTone::Info => "[i]",
    }
}

/// Display a scan report as text
pub fn display_report(report: &ScanReport) {
    let recognition = &report.recognition;
    let nutrition = &report.nutrition;

    for warning in &report.warnings {
        println!("Warning: {}", warning.message());
    }

    println!("\n{}", "=".repeat(60));
    println!(
        "Detected: {} ({:.1}% confidence)",
        recognition.label,
        recognition.confidence * 100.0
    );
    if !recognition.alternatives.is_empty() {
        println!("   Could also be: {}", recognition.alternatives.join(", "));
    }
    println!("{}", "=".repeat(60));

    println!("\nNutrition per {}:", nutrition.serving_size);
    println!("   Calories: {} kcal", nutrition.calories);
    println!("   Protein:  {} g", nutrition.protein_g);
    println!("   Carbs:    {} g", nutrition.carbs_g);
    println!("   Fat:      {} g", nutrition.fat_g);
    println!("   Fiber:    {} g", nutrition.fiber_g);
    println!("   Sugar:    {} g", nutrition.sugar_g);
    println!("   Vitamins: {}", nutrition.vitamins.join(", "));
    println!("   Minerals: {}", nutrition.minerals.join(", "));

    println!("\nWeight impact:");
    println!("   {}", report.weight_impact.message);

    let recommendation = &report.recommendation;
    println!("\nAdvice for {} ({}):", report.meal_time, report.goal);
    println!(
        "   {} {}",
        tone_marker(recommendation.tone),
        recommendation.message
    );
    if !recommendation.alternatives.is_empty() {
        println!("   Try instead: {}", recommendation.alternatives.join(", "));
    }
    for tip in &recommendation.tips {
        println!("   - {tip}");
    }
    println!();
}
