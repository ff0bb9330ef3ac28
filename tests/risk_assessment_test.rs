// ABOUTME: Integration tests for risk assessment
// ABOUTME: Covers risk levels, concerning factors, and urgency escalation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{calculator, optimal_readings, readings};
use serde_json::json;
use std::collections::BTreeMap;
use vitalcheck::intelligence::config::RiskConfig;
use vitalcheck::intelligence::{
    calculate_risk_assessment, HealthScoreResult, RiskAssessment, ScoreBreakdown,
};
use vitalcheck::models::{BiomarkerReadings, HealthLevel, RiskLevel, Urgency};

fn assess(readings: &BiomarkerReadings) -> RiskAssessment {
    let calc = calculator();
    let result = calc.calculate_health_score(readings);
    calc.calculate_risk_assessment(result.as_ref())
}

fn bare_result(score: u8) -> HealthScoreResult {
    HealthScoreResult {
        score,
        level: HealthLevel::Acceptable,
        confidence: 50,
        assessed_biomarkers: 0,
        individual_scores: BTreeMap::new(),
        breakdown: ScoreBreakdown {
            base_score: u32::from(score),
            completeness_bonus: 0,
            consistency_penalty: 0,
        },
    }
}

#[test]
fn test_missing_result_is_unknown_risk() {
    let risk = calculator().calculate_risk_assessment(None);
    assert_eq!(risk.level, RiskLevel::Unknown);
    assert!(risk.factors.is_empty());
    assert_eq!(risk.urgency, Urgency::Low);
    assert_eq!(risk.score, None);

    let value = serde_json::to_value(&risk).unwrap();
    assert_eq!(
        value,
        json!({ "level": "unknown", "factors": [], "urgency": "low" })
    );
}

#[test]
fn test_low_oxygen_saturation_is_high_urgency() {
    let risk = assess(&readings([("oxygenSaturation", 80.0)]));
    assert_eq!(risk.urgency, Urgency::High);
    assert_eq!(risk.level, RiskLevel::High);
    assert_eq!(
        risk.factors,
        vec!["Valor preocupante en Saturación de oxígeno: 80 %".to_owned()]
    );
}

#[test]
fn test_high_systolic_pressure_is_high_urgency() {
    let risk = assess(&BiomarkerReadings::new().with("bloodPressure", "200/80"));
    assert_eq!(risk.urgency, Urgency::High);
    assert_eq!(risk.factors.len(), 1);
}

#[test]
fn test_heart_rate_and_stress_are_moderate_urgency() {
    let risk = assess(&readings([("heartRate", 130.0)]));
    assert_eq!(risk.urgency, Urgency::Moderate);

    let risk = assess(&readings([("stressLevel", 95.0)]));
    assert_eq!(risk.urgency, Urgency::Moderate);
}

#[test]
fn test_urgency_is_never_downgraded() {
    // Oxygen saturation is evaluated before stress level
    let risk = assess(&readings([("oxygenSaturation", 80.0), ("stressLevel", 95.0)]));
    assert_eq!(risk.urgency, Urgency::High);
    assert_eq!(risk.factors.len(), 2);
}

#[test]
fn test_other_concerning_biomarkers_add_factors_without_urgency() {
    let risk = assess(&readings([("jitter", 5.0)]));
    assert_eq!(risk.urgency, Urgency::Low);
    assert_eq!(risk.factors.len(), 1);
    assert!(risk.factors[0].contains("Jitter"));
}

#[test]
fn test_acceptable_values_are_not_factors() {
    // 45 bpm scores 0.3; 95 bpm scores 0.775
    let risk = assess(&readings([("heartRate", 95.0)]));
    assert!(risk.factors.is_empty());

    let risk = assess(&readings([("heartRate", 45.0)]));
    assert_eq!(risk.factors.len(), 1);
}

#[test]
fn test_level_follows_composite_score() {
    let config = RiskConfig::default();
    let cases = [
        (100, RiskLevel::Low),
        (70, RiskLevel::Low),
        (69, RiskLevel::Moderate),
        (55, RiskLevel::Moderate),
        (54, RiskLevel::High),
        (0, RiskLevel::High),
    ];
    for (score, level) in cases {
        let risk = calculate_risk_assessment(Some(&bare_result(score)), &config);
        assert_eq!(risk.level, level, "score {score}");
        assert_eq!(risk.score, Some(score));
    }
}

#[test]
fn test_optimal_readings_are_low_risk() {
    let risk = assess(&optimal_readings());
    assert_eq!(risk.level, RiskLevel::Low);
    assert_eq!(risk.urgency, Urgency::Low);
    assert!(risk.factors.is_empty());
    assert_eq!(risk.score, Some(100));
}
