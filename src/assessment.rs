// ABOUTME: Health assessment pipeline bundling score, status, recommendations, and risk
// ABOUTME: Evaluates single readings or parallel batches with stable output order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

//! Health Assessment Pipeline
//!
//! A [`HealthAssessment`] is the full report for one set of readings: the
//! composite score, its presentation status, the recommendations, and the risk
//! assessment, stamped with an id and the time of assessment.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use vitalcheck_core::models::BiomarkerReadings;
use vitalcheck_intelligence::{
    HealthScoreCalculator, HealthScoreResult, HealthScoreStatus, RiskAssessment,
};

/// Complete health report for one set of readings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAssessment {
    /// Unique assessment id
    pub id: Uuid,
    /// When the assessment was produced
    pub assessed_at: DateTime<Utc>,
    /// Composite score, absent when nothing could be assessed
    pub result: Option<HealthScoreResult>,
    /// Presentation status of the composite score
    pub status: Option<HealthScoreStatus>,
    /// Advice, never empty
    pub recommendations: Vec<String>,
    /// Risk assessment
    pub risk: RiskAssessment,
}

/// Produces [`HealthAssessment`]s with a shared calculator
#[derive(Debug, Clone, Default)]
pub struct HealthAssessor {
    calculator: HealthScoreCalculator,
}

impl HealthAssessor {
    /// Create an assessor using the global scoring configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assessor around a specific calculator
    #[must_use]
    pub const fn with_calculator(calculator: HealthScoreCalculator) -> Self {
        Self { calculator }
    }

    /// Calculator in use
    #[must_use]
    pub const fn calculator(&self) -> &HealthScoreCalculator {
        &self.calculator
    }

    /// Assess one set of readings
    #[must_use]
    pub fn assess(&self, readings: &BiomarkerReadings) -> HealthAssessment {
        let result = self.calculator.calculate_health_score(readings);
        let status = result
            .as_ref()
            .map(|r| self.calculator.get_health_score_status(f64::from(r.score)));
        let recommendations = self.calculator.generate_recommendations(result.as_ref());
        let risk = self.calculator.calculate_risk_assessment(result.as_ref());

        HealthAssessment {
            id: Uuid::new_v4(),
            assessed_at: Utc::now(),
            result,
            status,
            recommendations,
            risk,
        }
    }

    /// Assess many sets of readings in parallel
    ///
    /// Output order matches input order.
    #[must_use]
    pub fn assess_batch(&self, batch: &[BiomarkerReadings]) -> Vec<HealthAssessment> {
        let assessments: Vec<HealthAssessment> =
            batch.par_iter().map(|readings| self.assess(readings)).collect();
        let scored = assessments.iter().filter(|a| a.result.is_some()).count();
        info!(
            total = assessments.len(),
            scored,
            "Assessed batch of biomarker readings"
        );
        assessments
    }
}
