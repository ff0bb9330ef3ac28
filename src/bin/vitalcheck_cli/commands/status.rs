// ABOUTME: Status command for vitalcheck-cli
// ABOUTME: Prints the health level and presentation status for a score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

use anyhow::Result;
use vitalcheck::constants::limits;
use vitalcheck::errors::AppError;
use vitalcheck::intelligence::HealthScoreCalculator;

use crate::helpers::display::{display_status, print_json};
use crate::OutputFormat;

/// Print the status for a composite score
pub fn run(score: f64, format: OutputFormat) -> Result<()> {
    if !(limits::MIN_HEALTH_SCORE..=limits::MAX_HEALTH_SCORE).contains(&score) {
        return Err(AppError::value_out_of_range(format!(
            "Score must be between {} and {}, got {score}",
            limits::MIN_HEALTH_SCORE,
            limits::MAX_HEALTH_SCORE
        ))
        .into());
    }

    let status = HealthScoreCalculator::new().get_health_score_status(score);
    match format {
        OutputFormat::Json => print_json(&status)?,
        OutputFormat::Text => display_status(score, &status),
    }
    Ok(())
}
