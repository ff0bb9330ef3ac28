// ABOUTME: Integration tests for biomarker value extraction from raw readings
// ABOUTME: Covers canonical keys, alias resolution order, numeric strings, and blood pressure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{calculator, readings};
use serde_json::json;
use vitalcheck::intelligence::biomarker_extraction::aliases_for;
use vitalcheck::intelligence::extract_biomarker_value;
use vitalcheck::models::{Biomarker, BiomarkerReadings};

fn from_json(value: serde_json::Value) -> BiomarkerReadings {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_canonical_key_wins_over_aliases() {
    let readings = readings([("heartRate", 65.0), ("hr", 90.0), ("pulse", 100.0)]);
    assert_eq!(
        extract_biomarker_value(&readings, Biomarker::HeartRate),
        Some(65.0)
    );
}

#[test]
fn test_aliases_resolve_in_table_order() {
    let readings = readings([("bpm", 60.0), ("pulse", 90.0)]);
    assert_eq!(
        extract_biomarker_value(&readings, Biomarker::HeartRate),
        Some(90.0)
    );
    assert_eq!(aliases_for(Biomarker::HeartRate), ["hr", "pulse", "bpm"]);
}

#[test]
fn test_non_numeric_canonical_value_falls_back_to_alias() {
    let readings = from_json(json!({ "heartRate": "fast", "hr": 70 }));
    assert_eq!(
        extract_biomarker_value(&readings, Biomarker::HeartRate),
        Some(70.0)
    );
}

#[test]
fn test_heart_rate_variability_alias_feeds_rmssd() {
    let readings = from_json(json!({ "heartRateVariability": 42 }));
    assert_eq!(
        extract_biomarker_value(&readings, Biomarker::Rmssd),
        Some(42.0)
    );
}

#[test]
fn test_numeric_strings_are_trimmed() {
    let readings = from_json(json!({ "oxygenSaturation": " 97.5 ", "spo2": 90 }));
    assert_eq!(
        extract_biomarker_value(&readings, Biomarker::OxygenSaturation),
        Some(97.5)
    );
}

#[test]
fn test_absent_null_and_non_numeric_values_are_none() {
    let readings = from_json(json!({
        "heartRate": null,
        "rmssd": "",
        "sdnn": [50],
        "jitter": { "value": 0.5 },
        "shimmer": false
    }));
    for biomarker in Biomarker::ALL {
        assert_eq!(extract_biomarker_value(&readings, biomarker), None, "{biomarker}");
    }
}

#[test]
fn test_blood_pressure_components() {
    let readings = from_json(json!({ "bloodPressure": "118 / 76" }));
    assert_eq!(
        extract_biomarker_value(&readings, Biomarker::BloodPressureSystolic),
        Some(118.0)
    );
    assert_eq!(
        extract_biomarker_value(&readings, Biomarker::BloodPressureDiastolic),
        Some(76.0)
    );
}

#[test]
fn test_malformed_blood_pressure_is_ignored() {
    for raw in [json!("120"), json!("120-80"), json!("abc/def"), json!(120), json!(null)] {
        let readings = from_json(json!({ "bloodPressure": raw }));
        assert_eq!(
            extract_biomarker_value(&readings, Biomarker::BloodPressureSystolic),
            None
        );
        assert_eq!(
            extract_biomarker_value(&readings, Biomarker::BloodPressureDiastolic),
            None
        );
    }
}

#[test]
fn test_blood_pressure_is_scored_as_two_biomarkers() {
    let result = calculator()
        .calculate_health_score(&from_json(json!({ "bloodPressure": "120/80" })))
        .unwrap();
    assert_eq!(result.assessed_biomarkers, 2);
    assert!(result
        .individual_scores
        .contains_key(&Biomarker::BloodPressureSystolic));
    assert!(result
        .individual_scores
        .contains_key(&Biomarker::BloodPressureDiastolic));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let readings = from_json(json!({ "heartRate": 72, "glucose": 95, "mood": "happy" }));
    let result = calculator().calculate_health_score(&readings).unwrap();
    assert_eq!(result.assessed_biomarkers, 1);
    assert_eq!(readings.len(), 3);
}
