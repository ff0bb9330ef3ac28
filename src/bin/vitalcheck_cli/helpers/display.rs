// ABOUTME: Output formatting helpers for vitalcheck-cli
// ABOUTME: Provides JSON output and text reports for assessments, ranges, and statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

use anyhow::Result;
use serde::Serialize;
use vitalcheck::assessment::HealthAssessment;
use vitalcheck::intelligence::reference_ranges::{RangeBands, ReferenceRange, ScoringBand};
use vitalcheck::intelligence::HealthScoreStatus;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a text report of an assessment
pub fn display_assessment(assessment: &HealthAssessment) {
    println!("Health Check {}", assessment.id);
    println!("{}", "=".repeat(60));
    println!(
        "   Assessed at: {}",
        assessment.assessed_at.format("%Y-%m-%d %H:%M UTC")
    );

    match (&assessment.result, &assessment.status) {
        (Some(result), Some(status)) => {
            println!(
                "   Score: {} / 100  {} {}",
                result.score, status.icon, status.label
            );
            println!("   {}", status.description);
            println!(
                "   Confidence: {}%  ({} biomarkers)",
                result.confidence, result.assessed_biomarkers
            );
            println!(
                "   Breakdown: base {} + completeness {} - consistency {}",
                result.breakdown.base_score,
                result.breakdown.completeness_bonus,
                result.breakdown.consistency_penalty
            );

            println!("\nBIOMARKERS:");
            for (biomarker, individual) in &result.individual_scores {
                println!(
                    "   {:<32} {:>8} {:<5} score {:.2}",
                    biomarker.display_name(),
                    individual.value,
                    biomarker.unit(),
                    individual.score
                );
            }
        }
        _ => println!("   Score: not available (no assessable biomarkers)"),
    }

    println!("\nRISK: {}", assessment.risk.level.name());
    println!("   Urgency: {}", assessment.risk.urgency.name());
    for factor in &assessment.risk.factors {
        println!("   • {factor}");
    }

    println!("\nRECOMMENDATIONS:");
    for (index, recommendation) in assessment.recommendations.iter().enumerate() {
        println!("{}. {recommendation}", index + 1);
    }
}

fn format_band(band: &ScoringBand) -> String {
    format!(
        "optimal {}-{}, acceptable {}-{}",
        band.optimal.min, band.optimal.max, band.acceptable.min, band.acceptable.max
    )
}

/// Print the reference range tables
pub fn display_ranges(ranges: &[&ReferenceRange]) {
    println!("REFERENCE RANGES");
    println!("{}", "=".repeat(60));
    for range in ranges {
        let biomarker = range.biomarker;
        println!(
            "{} ({}, {}) weight {:.2}",
            biomarker.display_name(),
            biomarker.canonical_name(),
            biomarker.unit(),
            range.weight
        );
        match &range.bands {
            RangeBands::Flat(band) => println!("   {}", format_band(band)),
            RangeBands::ByVoiceProfile { male, female } => {
                println!("   male:   {}", format_band(male));
                println!("   female: {}", format_band(female));
            }
        }
    }
}

/// Print a score status
pub fn display_status(score: f64, status: &HealthScoreStatus) {
    println!("{} Score {score}: {}", status.icon, status.label);
    println!("   {}", status.description);
    println!("   Color: {}", status.color);
}
