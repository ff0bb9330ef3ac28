// ABOUTME: Risk assessment from individual biomarker scores and the composite score
// ABOUTME: Lists concerning values and escalates urgency for critical biomarkers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

use serde::{Deserialize, Serialize};
use tracing::debug;
use vitalcheck_core::models::{Biomarker, RiskLevel, Urgency};

use crate::config::RiskConfig;
use crate::health_score_calculator::HealthScoreResult;

/// Risk assessment of a health score result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Overall risk level
    pub level: RiskLevel,
    /// Concerning values, in biomarker order
    pub factors: Vec<String>,
    /// How soon follow-up is advised
    pub urgency: Urgency,
    /// Composite score the level was derived from (absent when unknown)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

impl RiskAssessment {
    /// Assessment for missing results
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            level: RiskLevel::Unknown,
            factors: Vec::new(),
            urgency: Urgency::Low,
            score: None,
        }
    }
}

/// Minimum urgency a concerning value of this biomarker calls for
const fn urgency_for(biomarker: Biomarker) -> Urgency {
    match biomarker {
        Biomarker::OxygenSaturation | Biomarker::BloodPressureSystolic => Urgency::High,
        Biomarker::HeartRate | Biomarker::StressLevel => Urgency::Moderate,
        _ => Urgency::Low,
    }
}

/// Assess risk for a health score result
#[must_use]
pub fn calculate_risk_assessment(
    result: Option<&HealthScoreResult>,
    config: &RiskConfig,
) -> RiskAssessment {
    let Some(result) = result else {
        return RiskAssessment::unknown();
    };

    let mut factors = Vec::new();
    let mut urgency = Urgency::Low;
    for (biomarker, individual) in &result.individual_scores {
        if individual.score >= config.concerning_biomarker_score {
            continue;
        }
        factors.push(format!(
            "Valor preocupante en {}: {} {}",
            biomarker.display_name(),
            individual.value,
            biomarker.unit()
        ));
        urgency = urgency.max(urgency_for(*biomarker));
    }

    let score = f64::from(result.score);
    let level = if score >= config.low_risk_min_score {
        RiskLevel::Low
    } else if score >= config.moderate_risk_min_score {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    };
    debug!(
        level = level.name(),
        urgency = urgency.name(),
        factors = factors.len(),
        "Assessed risk"
    );

    RiskAssessment {
        level,
        factors,
        urgency,
        score: Some(result.score),
    }
}
