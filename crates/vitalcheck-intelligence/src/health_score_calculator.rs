// ABOUTME: Composite health score calculation from cardiovascular and voice biomarkers
// ABOUTME: Weighted per-biomarker scoring with completeness bonus, consistency penalty, and confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

//! Health Score Calculator
//!
//! Scores a flat biomarker map into a 0-100 health index:
//!
//! 1. Each biomarker with a usable value is scored against its reference range
//!    (1.0 inside the optimal band, 0.7-1.0 inside the acceptable band, 0.1-0.4
//!    outside it).
//! 2. Individual scores are averaged by weight into a base score.
//! 3. A completeness bonus rewards assessing more biomarkers and a consistency
//!    penalty discounts widely scattered individual scores.
//!
//! The calculator holds only immutable configuration and is safe to share
//! across threads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, error};
use vitalcheck_core::constants::limits;
use vitalcheck_core::errors::{AppError, AppResult};
use vitalcheck_core::models::{
    Biomarker, BiomarkerCategory, BiomarkerReadings, HealthLevel, VoiceProfile,
};

use crate::biomarker_extraction::extract_biomarker_value;
use crate::config::HealthScoringConfig;
use crate::health_status::{self, HealthScoreStatus};
use crate::recommendation_engine;
use crate::reference_ranges::{self, ReferenceRange, ScoringBand};
use crate::risk_assessment::{self, RiskAssessment};

/// Score of one assessed biomarker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndividualScore {
    /// Extracted value
    pub value: f64,
    /// Score in `[0, 1]`
    pub score: f64,
    /// Weight used in the composite
    pub weight: f64,
    /// Category of the biomarker
    pub category: BiomarkerCategory,
}

/// Components of the composite score (rounded points)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Weighted average of individual scores, scaled to 0-100
    pub base_score: u32,
    /// Points added for the number of biomarkers assessed
    pub completeness_bonus: u32,
    /// Points removed for scattered individual scores
    pub consistency_penalty: u32,
}

/// Result of a health score calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreResult {
    /// Composite score (0-100)
    pub score: u8,
    /// Health level of the unrounded composite score
    pub level: HealthLevel,
    /// Confidence in the score (0-100)
    pub confidence: u8,
    /// Number of biomarkers scored
    pub assessed_biomarkers: usize,
    /// Individual scores in biomarker order
    pub individual_scores: BTreeMap<Biomarker, IndividualScore>,
    /// Score components
    pub breakdown: ScoreBreakdown,
}

/// Running totals of the weighted aggregation
#[derive(Debug, Default)]
struct Accumulator {
    total_score: f64,
    total_weight: f64,
    individual_scores: BTreeMap<Biomarker, IndividualScore>,
}

/// Health score calculator
#[derive(Debug, Clone)]
pub struct HealthScoreCalculator {
    config: HealthScoringConfig,
}

impl Default for HealthScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthScoreCalculator {
    /// Create a calculator using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HealthScoringConfig::global().clone())
    }

    /// Create a calculator with custom configuration
    #[must_use]
    pub const fn with_config(config: HealthScoringConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &HealthScoringConfig {
        &self.config
    }

    /// Calculate the composite health score
    ///
    /// Returns `None` when no biomarker could be assessed. Internal failures are
    /// logged and also reported as `None`.
    #[must_use]
    pub fn calculate_health_score(&self, readings: &BiomarkerReadings) -> Option<HealthScoreResult> {
        match self.try_calculate_health_score(readings) {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "Health score calculation failed");
                None
            }
        }
    }

    /// Calculate the composite health score, reporting internal failures
    ///
    /// # Errors
    ///
    /// Returns an internal error if an intermediate value is not finite
    pub fn try_calculate_health_score(
        &self,
        readings: &BiomarkerReadings,
    ) -> AppResult<Option<HealthScoreResult>> {
        let mut acc = Accumulator::default();

        for range in reference_ranges::all_ranges() {
            let Some(value) = extract_biomarker_value(readings, range.biomarker) else {
                continue;
            };
            let band = self.band_for(range, value);
            let score = Self::calculate_biomarker_score(value, Some(band));
            debug!(
                biomarker = %range.biomarker,
                value,
                score,
                "Scored biomarker"
            );

            acc.total_score += score * range.weight;
            acc.total_weight += range.weight;
            acc.individual_scores.insert(
                range.biomarker,
                IndividualScore {
                    value,
                    score,
                    weight: range.weight,
                    category: range.biomarker.category(),
                },
            );
        }

        let assessed = acc.individual_scores.len();
        if assessed == 0 || acc.total_weight <= 0.0 {
            debug!("No assessable biomarkers in readings");
            return Ok(None);
        }

        let base_score = acc.total_score / acc.total_weight * limits::MAX_HEALTH_SCORE;
        let completeness_bonus = self.completeness_bonus(assessed);
        let scores: Vec<f64> = acc.individual_scores.values().map(|s| s.score).collect();
        let consistency_penalty = self.calculate_consistency_penalty(&scores);
        let final_score = (base_score + completeness_bonus - consistency_penalty)
            .clamp(limits::MIN_HEALTH_SCORE, limits::MAX_HEALTH_SCORE);

        if !final_score.is_finite() {
            return Err(AppError::internal(format!(
                "Non-finite health score (base {base_score}, bonus {completeness_bonus}, penalty {consistency_penalty})"
            )));
        }

        let result = HealthScoreResult {
            score: round_to_u8(final_score),
            level: self.score_to_health_level(final_score),
            confidence: self.calculate_confidence(assessed, acc.total_weight),
            assessed_biomarkers: assessed,
            individual_scores: acc.individual_scores,
            breakdown: ScoreBreakdown {
                base_score: round_to_u32(base_score),
                completeness_bonus: round_to_u32(completeness_bonus),
                consistency_penalty: round_to_u32(consistency_penalty),
            },
        };
        debug!(
            score = result.score,
            level = %result.level,
            confidence = result.confidence,
            assessed,
            "Calculated health score"
        );
        Ok(Some(result))
    }

    /// Score a single value against a scoring band
    ///
    /// A missing band yields the neutral score 0.5.
    #[must_use]
    pub fn calculate_biomarker_score(value: f64, band: Option<&ScoringBand>) -> f64 {
        let Some(band) = band else {
            return limits::NEUTRAL_BIOMARKER_SCORE;
        };
        let optimal = band.optimal;
        let acceptable = band.acceptable;

        if optimal.contains(value) {
            return limits::MAX_BIOMARKER_SCORE;
        }

        if acceptable.contains(value) {
            let distance = if value < optimal.min {
                (optimal.min - value) / (optimal.min - acceptable.min)
            } else {
                (value - optimal.max) / (acceptable.max - optimal.max)
            };
            return 0.3f64.mul_add(1.0 - distance, 0.7);
        }

        let penalty = if value < acceptable.min {
            if acceptable.min > 0.0 {
                ((acceptable.min - value) / acceptable.min).min(0.6)
            } else {
                0.6
            }
        } else {
            ((value - acceptable.max) / acceptable.max).min(0.6)
        };
        (0.4 - penalty).max(limits::MIN_BIOMARKER_SCORE)
    }

    /// Voice profile for a fundamental frequency, per the configured strategy
    #[must_use]
    pub fn estimate_gender(&self, fundamental_frequency_hz: f64) -> VoiceProfile {
        self.config.voice_profile.estimate(fundamental_frequency_hz)
    }

    /// Penalty for scattered individual scores
    ///
    /// Population standard deviation scaled and capped; zero below the
    /// minimum number of scores.
    #[must_use]
    pub fn calculate_consistency_penalty(&self, scores: &[f64]) -> f64 {
        let aggregation = &self.config.aggregation;
        if scores.len() < aggregation.consistency_min_biomarkers {
            return 0.0;
        }
        let count = count_as_f64(scores.len());
        let mean = scores.iter().sum::<f64>() / count;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / count;
        (variance.sqrt() * aggregation.consistency_std_dev_multiplier)
            .min(aggregation.max_consistency_penalty)
    }

    /// Confidence (0-100) from the number of biomarkers and their total weight
    #[must_use]
    pub fn calculate_confidence(&self, assessed: usize, total_weight: f64) -> u8 {
        let confidence = &self.config.confidence;
        let from_count =
            (count_as_f64(assessed) * confidence.per_biomarker).min(confidence.max_count_contribution);
        let from_weight =
            (total_weight * confidence.weight_factor).min(confidence.max_weight_contribution);
        round_to_u8(((from_count + from_weight) * 100.0).min(100.0))
    }

    /// Health level of a composite score
    #[must_use]
    pub fn score_to_health_level(&self, score: f64) -> HealthLevel {
        health_status::level_for_score(score, &self.config.levels)
    }

    /// Presentation status of a composite score
    #[must_use]
    pub fn get_health_score_status(&self, score: f64) -> HealthScoreStatus {
        health_status::get_health_score_status(score, &self.config.levels)
    }

    /// Recommendations for a result (`None` yields the insufficient data message)
    #[must_use]
    pub fn generate_recommendations(&self, result: Option<&HealthScoreResult>) -> Vec<String> {
        recommendation_engine::generate_recommendations(result, &self.config.recommendations)
    }

    /// Risk assessment for a result (`None` yields unknown risk)
    #[must_use]
    pub fn calculate_risk_assessment(&self, result: Option<&HealthScoreResult>) -> RiskAssessment {
        risk_assessment::calculate_risk_assessment(result, &self.config.risk)
    }

    fn completeness_bonus(&self, assessed: usize) -> f64 {
        let aggregation = &self.config.aggregation;
        (count_as_f64(assessed) * aggregation.completeness_bonus_per_biomarker)
            .min(aggregation.max_completeness_bonus)
    }

    fn band_for<'a>(&self, range: &'a ReferenceRange, value: f64) -> &'a ScoringBand {
        let profile = if range.is_profile_conditioned() {
            self.estimate_gender(value)
        } else {
            VoiceProfile::Male
        };
        range.band_for(profile)
    }
}

fn count_as_f64(count: usize) -> f64 {
    count as f64
}

fn round_to_u8(value: f64) -> u8 {
    value.round().clamp(0.0, f64::from(u8::MAX)) as u8
}

fn round_to_u32(value: f64) -> u32 {
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HealthScoringConfig;
    use crate::reference_ranges::Band;

    fn calculator() -> HealthScoreCalculator {
        HealthScoreCalculator::with_config(HealthScoringConfig::default())
    }

    #[test]
    fn test_zero_floor_saturates_below_range() {
        let band = ScoringBand {
            optimal: Band::new(0.0, 30.0),
            acceptable: Band::new(0.0, 60.0),
        };
        let score = HealthScoreCalculator::calculate_biomarker_score(-5.0, Some(&band));
        assert!((score - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_consistency_penalty_needs_three_scores() {
        let calc = calculator();
        assert!(calc.calculate_consistency_penalty(&[1.0, 0.1]).abs() < f64::EPSILON);
        // std dev of [1, 0.1, 1] is ~0.424, scaled by 30 and capped at 15
        let penalty = calc.calculate_consistency_penalty(&[1.0, 0.1, 1.0]);
        assert!((penalty - 12.727_922).abs() < 1e-3);
    }

    #[test]
    fn test_non_finite_score_is_reported_as_internal_error() {
        // Unvalidated config: an infinite bonus minus an infinite penalty is NaN
        let mut config = HealthScoringConfig::default();
        config.aggregation.completeness_bonus_per_biomarker = f64::INFINITY;
        config.aggregation.max_completeness_bonus = f64::INFINITY;
        config.aggregation.consistency_std_dev_multiplier = f64::INFINITY;
        config.aggregation.max_consistency_penalty = f64::INFINITY;
        let calc = HealthScoreCalculator::with_config(config);
        let readings = BiomarkerReadings::new()
            .with("heartRate", 130.0)
            .with("oxygenSaturation", 98.0)
            .with("rmssd", 45.0);

        let err = calc.try_calculate_health_score(&readings).unwrap_err();
        assert_eq!(err.code, vitalcheck_core::errors::ErrorCode::InternalError);
        assert!(calc.calculate_health_score(&readings).is_none());
    }

    #[test]
    fn test_confidence_caps() {
        let calc = calculator();
        assert_eq!(calc.calculate_confidence(1, 0.2), 10);
        assert_eq!(calc.calculate_confidence(13, 1.5), 100);
    }
}
