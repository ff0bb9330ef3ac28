// ABOUTME: Health score intelligence engine for digital health checks
// ABOUTME: Scores cardiovascular and voice biomarkers into a composite health index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

#![deny(unsafe_code)]

//! # VitalCheck Intelligence
//!
//! Pure, synchronous scoring over flat biomarker maps.
//!
//! ## Modules
//!
//! - **reference_ranges**: Static optimal/acceptable bands and weights
//! - **biomarker_extraction**: Canonical key, alias, and blood pressure resolution
//! - **health_score_calculator**: Per-biomarker and composite scoring
//! - **recommendation_engine**: Ordered, bounded advice messages
//! - **risk_assessment**: Concerning values and urgency
//! - **health_status**: Level label, description, color, and icon
//! - **algorithms**: Voice profile estimation strategies
//! - **config**: Scoring configuration with environment overrides

/// Pluggable algorithms (voice profile estimation)
pub mod algorithms;
/// Biomarker value extraction from raw readings
pub mod biomarker_extraction;
/// Scoring configuration
pub mod config;
/// Composite health score calculation
pub mod health_score_calculator;
/// Health level classification and presentation status
pub mod health_status;
/// Recommendation generation
pub mod recommendation_engine;
/// Static reference range tables
pub mod reference_ranges;
/// Risk assessment
pub mod risk_assessment;

pub use algorithms::{estimate_gender, VoiceProfileAlgorithm};
pub use biomarker_extraction::{extract_biomarker_value, BIOMARKER_ALIASES};
pub use config::{ConfigError, HealthScoringConfig};
pub use health_score_calculator::{
    HealthScoreCalculator, HealthScoreResult, IndividualScore, ScoreBreakdown,
};
pub use health_status::{get_health_score_status, HealthScoreStatus};
pub use recommendation_engine::generate_recommendations;
pub use reference_ranges::{
    reference_range, reference_range_by_name, Band, RangeBands, ReferenceRange, ScoringBand,
    REFERENCE_RANGES, VOICE_RANGES,
};
pub use risk_assessment::{calculate_risk_assessment, RiskAssessment};
