// ABOUTME: Recommendation generation from individual biomarker scores and the composite score
// ABOUTME: Produces an ordered, bounded list of advice messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

use tracing::debug;
use vitalcheck_core::models::Biomarker;

use crate::config::RecommendationConfig;
use crate::health_score_calculator::{HealthScoreResult, IndividualScore};

/// Generate recommendations for a health score result
///
/// Biomarker-specific advice comes first (in biomarker order), followed by
/// advice on the composite score. The list is never empty and never longer than
/// the configured maximum.
#[must_use]
pub fn generate_recommendations(
    result: Option<&HealthScoreResult>,
    config: &RecommendationConfig,
) -> Vec<String> {
    let messages = &config.messages;
    let Some(result) = result else {
        return vec![messages.insufficient_data.clone()];
    };
    let thresholds = &config.thresholds;

    let mut recommendations: Vec<String> = result
        .individual_scores
        .iter()
        .filter(|(_, individual)| individual.score < thresholds.low_biomarker_score)
        .filter_map(|(biomarker, individual)| biomarker_message(*biomarker, individual, config))
        .map(str::to_owned)
        .collect();

    let score = f64::from(result.score);
    if score < thresholds.consult_below_score {
        recommendations.push(messages.consult_professional.clone());
    }
    if score >= thresholds.maintain_at_or_above_score {
        recommendations.push(messages.maintain_habits.clone());
    }
    if recommendations.is_empty() {
        recommendations.push(messages.general_wellness.clone());
    }

    if recommendations.len() > config.limits.max_recommendations {
        debug!(
            generated = recommendations.len(),
            max = config.limits.max_recommendations,
            "Truncating recommendations"
        );
        recommendations.truncate(config.limits.max_recommendations);
    }
    recommendations
}

/// Advice for a low-scoring biomarker, if the biomarker has any
fn biomarker_message<'a>(
    biomarker: Biomarker,
    individual: &IndividualScore,
    config: &'a RecommendationConfig,
) -> Option<&'a str> {
    let messages = &config.messages;
    let thresholds = &config.thresholds;
    let message = match biomarker {
        Biomarker::HeartRate if individual.value > thresholds.heart_rate_high_bpm => {
            &messages.heart_rate_high
        }
        Biomarker::HeartRate => &messages.heart_rate_low,
        Biomarker::Rmssd => &messages.rmssd_low,
        Biomarker::OxygenSaturation => &messages.oxygen_saturation_low,
        Biomarker::BloodPressureSystolic if individual.value > thresholds.systolic_high_mmhg => {
            &messages.blood_pressure_high
        }
        Biomarker::BloodPressureSystolic => &messages.blood_pressure_low,
        Biomarker::StressLevel => &messages.stress_high,
        Biomarker::VocalStress => &messages.vocal_stress_high,
        _ => return None,
    };
    Some(message.as_str())
}
