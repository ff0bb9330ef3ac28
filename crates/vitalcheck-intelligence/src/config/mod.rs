// ABOUTME: Health scoring configuration container with validation and environment loading
// ABOUTME: Orchestrates domain-specific configs and provides a validated global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

//! Health Scoring Configuration
//!
//! Configuration is organized into domain-specific modules:
//! - `scoring` - Level thresholds, aggregation, confidence, and risk
//! - `recommendation` - Recommendation thresholds, limits, and messages
//! - `error` - Validation errors
//!
//! Reference ranges are not part of this configuration: they are static tables
//! in [`crate::reference_ranges`] shared by every calculator instance.

pub mod error;
pub mod recommendation;
pub mod scoring;

pub use error::ConfigError;
pub use recommendation::{
    RecommendationConfig, RecommendationLimits, RecommendationMessages, RecommendationThresholds,
};
pub use scoring::{AggregationConfig, ConfidenceConfig, LevelThresholds, RiskConfig};

use crate::algorithms::VoiceProfileAlgorithm;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;
use vitalcheck_core::constants::env_config;

/// Global configuration singleton
static HEALTH_SCORING_CONFIG: OnceLock<HealthScoringConfig> = OnceLock::new();

/// Main health scoring configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthScoringConfig {
    /// Score to health level thresholds
    pub levels: LevelThresholds,
    /// Completeness bonus and consistency penalty
    pub aggregation: AggregationConfig,
    /// Confidence estimation
    pub confidence: ConfidenceConfig,
    /// Recommendation generation
    pub recommendations: RecommendationConfig,
    /// Risk assessment
    pub risk: RiskConfig,
    /// Strategy used to pick the fundamental frequency band
    pub voice_profile: VoiceProfileAlgorithm,
}

impl HealthScoringConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        HEALTH_SCORING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load health scoring config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN slips through every ordering check below
        if self.numeric_fields().iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "scoring parameters must be finite numbers",
            ));
        }

        let levels = &self.levels;
        let level_values = [levels.excellent, levels.good, levels.acceptable, levels.fair];
        if level_values
            .iter()
            .any(|value| !(0.0..=100.0).contains(value))
        {
            return Err(ConfigError::ValueOutOfRange(
                "level thresholds must be between 0 and 100",
            ));
        }
        if levels.fair >= levels.acceptable
            || levels.acceptable >= levels.good
            || levels.good >= levels.excellent
        {
            return Err(ConfigError::InvalidRange(
                "level thresholds must satisfy fair < acceptable < good < excellent",
            ));
        }

        let aggregation = &self.aggregation;
        if aggregation.completeness_bonus_per_biomarker < 0.0
            || !(0.0..=100.0).contains(&aggregation.max_completeness_bonus)
        {
            return Err(ConfigError::ValueOutOfRange(
                "completeness bonus must be non-negative and at most 100",
            ));
        }
        if aggregation.consistency_min_biomarkers < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "consistency penalty needs at least 2 biomarkers",
            ));
        }
        if aggregation.consistency_std_dev_multiplier < 0.0
            || !(0.0..=100.0).contains(&aggregation.max_consistency_penalty)
        {
            return Err(ConfigError::ValueOutOfRange(
                "consistency penalty must be non-negative and at most 100",
            ));
        }

        let confidence = &self.confidence;
        if confidence.per_biomarker < 0.0
            || confidence.weight_factor < 0.0
            || confidence.max_count_contribution < 0.0
            || confidence.max_weight_contribution < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "confidence contributions must be non-negative",
            ));
        }
        if confidence.max_count_contribution + confidence.max_weight_contribution > 1.0 + 1e-9 {
            return Err(ConfigError::InvalidWeights(
                "confidence contribution caps must sum to at most 1.0",
            ));
        }

        let thresholds = &self.recommendations.thresholds;
        if !(0.0..=1.0).contains(&thresholds.low_biomarker_score) {
            return Err(ConfigError::ValueOutOfRange(
                "low_biomarker_score must be between 0 and 1",
            ));
        }
        if thresholds.consult_below_score > thresholds.maintain_at_or_above_score {
            return Err(ConfigError::InvalidRange(
                "consult_below_score must be <= maintain_at_or_above_score",
            ));
        }
        if self.recommendations.limits.max_recommendations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_recommendations must be at least 1",
            ));
        }

        let risk = &self.risk;
        if !(0.0..=1.0).contains(&risk.concerning_biomarker_score) {
            return Err(ConfigError::ValueOutOfRange(
                "concerning_biomarker_score must be between 0 and 1",
            ));
        }
        if risk.moderate_risk_min_score >= risk.low_risk_min_score {
            return Err(ConfigError::InvalidRange(
                "moderate_risk_min_score must be < low_risk_min_score",
            ));
        }

        self.voice_profile.validate()
    }

    /// Every floating-point parameter, for the finiteness check
    fn numeric_fields(&self) -> [f64; 20] {
        let levels = &self.levels;
        let aggregation = &self.aggregation;
        let confidence = &self.confidence;
        let thresholds = &self.recommendations.thresholds;
        let risk = &self.risk;
        [
            levels.excellent,
            levels.good,
            levels.acceptable,
            levels.fair,
            aggregation.completeness_bonus_per_biomarker,
            aggregation.max_completeness_bonus,
            aggregation.consistency_std_dev_multiplier,
            aggregation.max_consistency_penalty,
            confidence.per_biomarker,
            confidence.max_count_contribution,
            confidence.weight_factor,
            confidence.max_weight_contribution,
            thresholds.low_biomarker_score,
            thresholds.heart_rate_high_bpm,
            thresholds.systolic_high_mmhg,
            thresholds.consult_below_score,
            thresholds.maintain_at_or_above_score,
            risk.concerning_biomarker_score,
            risk.low_risk_min_score,
            risk.moderate_risk_min_score,
        ]
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(ConfigError::EnvVar(e)),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Level thresholds
        Self::apply_env_var(env_config::LEVEL_EXCELLENT, &mut self.levels.excellent)?;
        Self::apply_env_var(env_config::LEVEL_GOOD, &mut self.levels.good)?;
        Self::apply_env_var(env_config::LEVEL_ACCEPTABLE, &mut self.levels.acceptable)?;
        Self::apply_env_var(env_config::LEVEL_FAIR, &mut self.levels.fair)?;

        // Aggregation
        Self::apply_env_var(
            env_config::COMPLETENESS_BONUS_PER_BIOMARKER,
            &mut self.aggregation.completeness_bonus_per_biomarker,
        )?;
        Self::apply_env_var(
            env_config::COMPLETENESS_MAX_BONUS,
            &mut self.aggregation.max_completeness_bonus,
        )?;
        Self::apply_env_var(
            env_config::CONSISTENCY_MAX_PENALTY,
            &mut self.aggregation.max_consistency_penalty,
        )?;

        // Recommendations and risk
        Self::apply_env_var(
            env_config::RECOMMENDATIONS_MAX,
            &mut self.recommendations.limits.max_recommendations,
        )?;
        Self::apply_env_var(
            env_config::RISK_CONCERNING_SCORE,
            &mut self.risk.concerning_biomarker_score,
        )?;

        // Voice profile strategy
        Self::apply_env_var(env_config::VOICE_PROFILE_ALGORITHM, &mut self.voice_profile)?;

        Ok(self)
    }
}
