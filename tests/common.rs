// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides calculator construction, reading builders, and float assertions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::float_cmp
)]
//! Shared test utilities for `vitalcheck`
//!
//! Calculators built here use the default configuration so that tests are not
//! affected by `VITALCHECK_*` variables in the environment.

use std::sync::Once;
use vitalcheck::assessment::HealthAssessor;
use vitalcheck::intelligence::{HealthScoreCalculator, HealthScoringConfig};
use vitalcheck::models::{BiomarkerReadings, BiomarkerValue};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Calculator with the default configuration
pub fn calculator() -> HealthScoreCalculator {
    init_test_logging();
    HealthScoreCalculator::with_config(HealthScoringConfig::default())
}

/// Assessor with the default configuration
pub fn assessor() -> HealthAssessor {
    HealthAssessor::with_calculator(calculator())
}

/// Build readings from name/value pairs
pub fn readings<V>(pairs: impl IntoIterator<Item = (&'static str, V)>) -> BiomarkerReadings
where
    V: Into<BiomarkerValue>,
{
    pairs.into_iter().collect()
}

/// Readings that score 1.0 on every biomarker they contain
pub fn optimal_readings() -> BiomarkerReadings {
    readings([("heartRate", 72.0), ("rmssd", 45.0), ("oxygenSaturation", 98.0)])
}

/// Readings where the six biomarkers with dedicated advice all score low
pub fn poor_readings() -> BiomarkerReadings {
    BiomarkerReadings::new()
        .with("heartRate", 130.0)
        .with("rmssd", 5.0)
        .with("oxygenSaturation", 80.0)
        .with("bloodPressure", "180/120")
        .with("stressLevel", 90.0)
        .with("vocalStress", 90.0)
}

/// Assert two floats are within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
