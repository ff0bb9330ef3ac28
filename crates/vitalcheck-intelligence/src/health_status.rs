// ABOUTME: Health level classification and presentation status for composite scores
// ABOUTME: Maps scores to levels with label, description, color, and icon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

use serde::{Deserialize, Serialize};
use vitalcheck_core::models::HealthLevel;

use crate::config::LevelThresholds;

/// Presentation status for a composite score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScoreStatus {
    /// Health level
    pub level: HealthLevel,
    /// Label shown to users
    pub label: String,
    /// One-sentence explanation of the level
    pub description: String,
    /// Hex color used by the presentation layer
    pub color: String,
    /// Icon shown next to the score
    pub icon: String,
}

/// Classify a composite score (thresholds are inclusive lower bounds)
#[must_use]
pub fn level_for_score(score: f64, thresholds: &LevelThresholds) -> HealthLevel {
    if score >= thresholds.excellent {
        HealthLevel::Excellent
    } else if score >= thresholds.good {
        HealthLevel::Good
    } else if score >= thresholds.acceptable {
        HealthLevel::Acceptable
    } else if score >= thresholds.fair {
        HealthLevel::Fair
    } else {
        HealthLevel::Concerning
    }
}

/// Presentation status of a health level
#[must_use]
pub fn status_for_level(level: HealthLevel) -> HealthScoreStatus {
    let (description, color, icon) = match level {
        HealthLevel::Excellent => (
            "Tus indicadores están en rangos óptimos.",
            "#16a34a",
            "🌟",
        ),
        HealthLevel::Good => (
            "Tu estado de salud es bueno, con pequeños aspectos a mejorar.",
            "#65a30d",
            "💚",
        ),
        HealthLevel::Acceptable => (
            "Tu estado es aceptable, aunque algunos indicadores merecen atención.",
            "#ca8a04",
            "👍",
        ),
        HealthLevel::Fair => (
            "Varios indicadores están fuera de rango. Considera ajustar tus hábitos.",
            "#ea580c",
            "⚠️",
        ),
        HealthLevel::Concerning => (
            "Algunos indicadores son preocupantes. Te recomendamos consultar con un profesional.",
            "#dc2626",
            "🚨",
        ),
    };

    HealthScoreStatus {
        level,
        label: level.label().to_owned(),
        description: description.to_owned(),
        color: color.to_owned(),
        icon: icon.to_owned(),
    }
}

/// Presentation status of a composite score
#[must_use]
pub fn get_health_score_status(score: f64, thresholds: &LevelThresholds) -> HealthScoreStatus {
    status_for_level(level_for_score(score, thresholds))
}
