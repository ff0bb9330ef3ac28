// ABOUTME: Score command for vitalcheck-cli
// ABOUTME: Reads biomarker readings as JSON and prints health assessments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

use anyhow::Result;
use std::path::Path;
use tracing::info;
use vitalcheck::assessment::HealthAssessor;
use vitalcheck::input::{read_readings, ReadingsInput};
use vitalcheck::intelligence::{HealthScoreCalculator, HealthScoringConfig, VoiceProfileAlgorithm};

use crate::helpers::display::{display_assessment, print_json};
use crate::OutputFormat;

/// Score readings from a file or stdin
pub fn run(input: Option<&Path>, format: OutputFormat, voice_profile: Option<&str>) -> Result<()> {
    let assessor = build_assessor(voice_profile)?;

    match read_readings(input)? {
        ReadingsInput::Single(readings) => {
            let assessment = assessor.assess(&readings);
            info!(id = %assessment.id, "Assessment complete");
            match format {
                OutputFormat::Json => print_json(&assessment)?,
                OutputFormat::Text => display_assessment(&assessment),
            }
        }
        ReadingsInput::Batch(batch) => {
            let assessments = assessor.assess_batch(&batch);
            match format {
                OutputFormat::Json => print_json(&assessments)?,
                OutputFormat::Text => {
                    for (index, assessment) in assessments.iter().enumerate() {
                        println!("\n#{} of {}", index + 1, assessments.len());
                        display_assessment(assessment);
                    }
                }
            }
        }
    }

    Ok(())
}

fn build_assessor(voice_profile: Option<&str>) -> Result<HealthAssessor> {
    let Some(voice_profile) = voice_profile else {
        return Ok(HealthAssessor::new());
    };
    let mut config = HealthScoringConfig::global().clone();
    config.voice_profile = voice_profile.parse::<VoiceProfileAlgorithm>()?;
    info!(
        voice_profile = config.voice_profile.name(),
        "Using voice profile override"
    );
    Ok(HealthAssessor::with_calculator(
        HealthScoreCalculator::with_config(config),
    ))
}
