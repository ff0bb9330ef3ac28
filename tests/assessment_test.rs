// ABOUTME: Integration tests for the health assessment pipeline
// ABOUTME: Covers single assessments, empty input, parallel batches, and JSON shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assessor, optimal_readings, poor_readings, readings};
use std::collections::HashSet;
use vitalcheck::input::{parse_readings, ReadingsInput};
use vitalcheck::intelligence::config::RecommendationMessages;
use vitalcheck::models::{BiomarkerReadings, HealthLevel, RiskLevel};

#[test]
fn test_assess_optimal_readings() {
    let assessment = assessor().assess(&optimal_readings());

    let result = assessment.result.as_ref().unwrap();
    assert_eq!(result.score, 100);
    assert_eq!(assessment.status.as_ref().unwrap().level, HealthLevel::Excellent);
    assert_eq!(
        assessment.recommendations,
        vec![RecommendationMessages::default().maintain_habits]
    );
    assert_eq!(assessment.risk.level, RiskLevel::Low);
}

#[test]
fn test_assess_empty_readings_degrades_gracefully() {
    let assessment = assessor().assess(&BiomarkerReadings::new());

    assert!(assessment.result.is_none());
    assert!(assessment.status.is_none());
    assert_eq!(
        assessment.recommendations,
        vec![RecommendationMessages::default().insufficient_data]
    );
    assert_eq!(assessment.risk.level, RiskLevel::Unknown);
}

#[test]
fn test_batch_preserves_input_order() {
    let batch: Vec<BiomarkerReadings> = (0..64)
        .map(|i| match i % 4 {
            0 => optimal_readings(),
            1 => readings([("heartRate", 130.0)]),
            2 => BiomarkerReadings::new(),
            _ => poor_readings(),
        })
        .collect();

    let assessor = assessor();
    let assessments = assessor.assess_batch(&batch);
    assert_eq!(assessments.len(), batch.len());

    for (readings, assessment) in batch.iter().zip(&assessments) {
        let expected = assessor.assess(readings).result.map(|r| r.score);
        assert_eq!(assessment.result.as_ref().map(|r| r.score), expected);
    }

    let ids: HashSet<_> = assessments.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), assessments.len());
}

#[test]
fn test_empty_batch() {
    assert!(assessor().assess_batch(&[]).is_empty());
}

#[test]
fn test_assessment_json_shape() {
    let assessment = assessor().assess(&optimal_readings());
    let value = serde_json::to_value(&assessment).unwrap();

    assert!(value["id"].is_string());
    assert!(value["assessedAt"].is_string());
    assert_eq!(value["result"]["score"], 100);
    assert_eq!(value["status"]["label"], "Excelente");
    assert_eq!(value["risk"]["level"], "low");
    assert_eq!(value["recommendations"].as_array().unwrap().len(), 1);
}

#[test]
fn test_parsed_batch_feeds_assessor() {
    let input = parse_readings(
        r#"[{"heartRate": 72, "rmssd": 45, "oxygenSaturation": 98}, {"bloodPressure": "120/80"}]"#
            .as_bytes(),
    )
    .unwrap();
    let ReadingsInput::Batch(batch) = input else {
        panic!("expected batch input");
    };

    let assessments = assessor().assess_batch(&batch);
    assert_eq!(assessments[0].result.as_ref().unwrap().score, 100);
    assert_eq!(assessments[1].result.as_ref().unwrap().assessed_biomarkers, 2);
}
