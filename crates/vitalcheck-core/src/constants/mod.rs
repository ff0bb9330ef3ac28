// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service names, environment variable names, and scoring limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Service identifiers used in structured logs
pub mod service_names {
    /// Command-line tool service name
    pub const VITALCHECK_CLI: &str = "vitalcheck-cli";
    /// Library target used in log filter directives
    pub const VITALCHECK_TARGET: &str = "vitalcheck";
}

/// Environment variables read by configuration loaders
pub mod env_config {
    /// Minimum score for the "Excelente" level
    pub const LEVEL_EXCELLENT: &str = "VITALCHECK_LEVEL_EXCELLENT";
    /// Minimum score for the "Buena" level
    pub const LEVEL_GOOD: &str = "VITALCHECK_LEVEL_GOOD";
    /// Minimum score for the "Aceptable" level
    pub const LEVEL_ACCEPTABLE: &str = "VITALCHECK_LEVEL_ACCEPTABLE";
    /// Minimum score for the "Regular" level
    pub const LEVEL_FAIR: &str = "VITALCHECK_LEVEL_FAIR";
    /// Completeness bonus points per assessed biomarker
    pub const COMPLETENESS_BONUS_PER_BIOMARKER: &str =
        "VITALCHECK_COMPLETENESS_BONUS_PER_BIOMARKER";
    /// Maximum completeness bonus
    pub const COMPLETENESS_MAX_BONUS: &str = "VITALCHECK_COMPLETENESS_MAX_BONUS";
    /// Maximum consistency penalty
    pub const CONSISTENCY_MAX_PENALTY: &str = "VITALCHECK_CONSISTENCY_MAX_PENALTY";
    /// Maximum number of recommendations returned
    pub const RECOMMENDATIONS_MAX: &str = "VITALCHECK_RECOMMENDATIONS_MAX";
    /// Individual score below which a biomarker counts as a risk factor
    pub const RISK_CONCERNING_SCORE: &str = "VITALCHECK_RISK_CONCERNING_SCORE";
    /// Voice profile estimation algorithm (threshold, male, female)
    pub const VOICE_PROFILE_ALGORITHM: &str = "VITALCHECK_VOICE_PROFILE_ALGORITHM";
}

/// Hard limits of the scoring scale
pub mod limits {
    /// Lowest composite health score
    pub const MIN_HEALTH_SCORE: f64 = 0.0;
    /// Highest composite health score
    pub const MAX_HEALTH_SCORE: f64 = 100.0;
    /// Neutral score returned when a biomarker has no usable scoring band
    pub const NEUTRAL_BIOMARKER_SCORE: f64 = 0.5;
    /// Floor of any scored biomarker
    pub const MIN_BIOMARKER_SCORE: f64 = 0.1;
    /// Ceiling of any scored biomarker
    pub const MAX_BIOMARKER_SCORE: f64 = 1.0;
}
