// ABOUTME: Health classification enums - health level, risk level, and urgency
// ABOUTME: Shared by the scoring engine, the assessment pipeline, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Five-level classification of the composite health score
///
/// Serialized with the product's Spanish labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthLevel {
    /// Score of 85 or more
    #[serde(rename = "Excelente")]
    Excellent,
    /// Score of 70 or more
    #[serde(rename = "Buena")]
    Good,
    /// Score of 55 or more
    #[serde(rename = "Aceptable")]
    Acceptable,
    /// Score of 40 or more
    #[serde(rename = "Regular")]
    Fair,
    /// Score below 40
    #[serde(rename = "Preocupante")]
    Concerning,
}

impl HealthLevel {
    /// Every level, best first
    pub const ALL: [Self; 5] = [
        Self::Excellent,
        Self::Good,
        Self::Acceptable,
        Self::Fair,
        Self::Concerning,
    ];

    /// Label shown to users
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excelente",
            Self::Good => "Buena",
            Self::Acceptable => "Aceptable",
            Self::Fair => "Regular",
            Self::Concerning => "Preocupante",
        }
    }
}

impl fmt::Display for HealthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Composite score of 70 or more
    Low,
    /// Composite score of 55 or more
    Moderate,
    /// Composite score below 55
    High,
    /// No assessable biomarkers
    Unknown,
}

impl RiskLevel {
    /// Lowercase name of the level
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

/// How soon follow-up is advised
///
/// Ordered so that escalation is `max(current, candidate)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Routine follow-up
    Low,
    /// Follow-up advised
    Moderate,
    /// Prompt follow-up advised
    High,
}

impl Urgency {
    /// Lowercase name of the urgency
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}
