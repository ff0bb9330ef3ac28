// ABOUTME: Composite scoring configuration - level thresholds, aggregation, confidence, and risk
// ABOUTME: Default values reproduce the reference health check scoring behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

//! Composite Score Configuration
//!
//! Parameters of the composite health score:
//! - level thresholds (score to `HealthLevel`)
//! - completeness bonus and consistency penalty applied to the weighted base score
//! - confidence contributions of biomarker count and cumulative weight
//! - risk classification thresholds

use serde::{Deserialize, Serialize};

/// Minimum composite scores (inclusive) for each health level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelThresholds {
    /// Minimum score for "Excelente"
    pub excellent: f64,
    /// Minimum score for "Buena"
    pub good: f64,
    /// Minimum score for "Aceptable"
    pub acceptable: f64,
    /// Minimum score for "Regular"; anything lower is "Preocupante"
    pub fair: f64,
}

/// Adjustments applied to the weighted base score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Bonus points per assessed biomarker
    pub completeness_bonus_per_biomarker: f64,
    /// Cap on the completeness bonus
    pub max_completeness_bonus: f64,
    /// Minimum number of individual scores before variance is penalized
    pub consistency_min_biomarkers: usize,
    /// Multiplier applied to the standard deviation of individual scores
    pub consistency_std_dev_multiplier: f64,
    /// Cap on the consistency penalty
    pub max_consistency_penalty: f64,
}

/// Confidence contributions (fractions of 1.0)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    /// Contribution of each assessed biomarker
    pub per_biomarker: f64,
    /// Cap on the biomarker count contribution
    pub max_count_contribution: f64,
    /// Multiplier applied to the cumulative weight
    pub weight_factor: f64,
    /// Cap on the cumulative weight contribution
    pub max_weight_contribution: f64,
}

/// Risk assessment thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Individual biomarker score (0-1) below which the value is a risk factor
    pub concerning_biomarker_score: f64,
    /// Composite score at or above which risk is low
    pub low_risk_min_score: f64,
    /// Composite score at or above which risk is moderate
    pub moderate_risk_min_score: f64,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            excellent: 85.0,
            good: 70.0,
            acceptable: 55.0,
            fair: 40.0,
        }
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            completeness_bonus_per_biomarker: 0.5,
            max_completeness_bonus: 10.0,
            consistency_min_biomarkers: 3,
            consistency_std_dev_multiplier: 30.0,
            max_consistency_penalty: 15.0,
        }
    }
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            per_biomarker: 0.08,
            max_count_contribution: 0.9,
            weight_factor: 0.1,
            max_weight_contribution: 0.1,
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            concerning_biomarker_score: 0.4,
            low_risk_min_score: 70.0,
            moderate_risk_min_score: 55.0,
        }
    }
}
