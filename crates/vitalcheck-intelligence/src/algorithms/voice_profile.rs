// ABOUTME: Voice profile estimation algorithms for selecting fundamental frequency bands
// ABOUTME: Implements a frequency threshold heuristic and a fixed caller-supplied profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use vitalcheck_core::errors::AppError;
use vitalcheck_core::models::VoiceProfile;

use crate::config::ConfigError;

/// Fundamental frequency (Hz) separating the male and female bands
pub const DEFAULT_VOICE_THRESHOLD_HZ: f64 = 200.0;

/// Voice profile selection strategy
///
/// Only used to pick the `fundamentalFrequency` reference band; it is not a
/// classification of the person being assessed.
///
/// - `FrequencyThreshold`: `f0 < threshold_hz` is male, anything else female
/// - `Fixed`: profile known from elsewhere (e.g. the user's settings)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum VoiceProfileAlgorithm {
    /// Threshold on the measured fundamental frequency
    ///
    /// Adult speaking F0 averages roughly 85-155 Hz for male voices and
    /// 165-255 Hz for female voices; 200 Hz sits in the gap.
    FrequencyThreshold {
        /// Boundary in Hz (default 200)
        threshold_hz: f64,
    },

    /// Always use the given profile
    Fixed {
        /// Profile to use
        profile: VoiceProfile,
    },
}

impl Default for VoiceProfileAlgorithm {
    fn default() -> Self {
        Self::FrequencyThreshold {
            threshold_hz: DEFAULT_VOICE_THRESHOLD_HZ,
        }
    }
}

impl VoiceProfileAlgorithm {
    /// Pick the voice profile for a fundamental frequency
    #[must_use]
    pub fn estimate(&self, fundamental_frequency_hz: f64) -> VoiceProfile {
        match self {
            Self::FrequencyThreshold { threshold_hz } => {
                if fundamental_frequency_hz < *threshold_hz {
                    VoiceProfile::Male
                } else {
                    VoiceProfile::Female
                }
            }
            Self::Fixed { profile } => *profile,
        }
    }

    /// Get algorithm name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FrequencyThreshold { .. } => "threshold",
            Self::Fixed {
                profile: VoiceProfile::Male,
            } => "male",
            Self::Fixed {
                profile: VoiceProfile::Female,
            } => "female",
        }
    }

    /// Get algorithm description
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::FrequencyThreshold { threshold_hz } => {
                format!("Frequency threshold: f0 < {threshold_hz} Hz is male, otherwise female")
            }
            Self::Fixed { profile } => format!("Fixed profile: {}", profile.name()),
        }
    }

    /// Validate algorithm parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is not a positive finite frequency
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::FrequencyThreshold { threshold_hz }
                if !threshold_hz.is_finite() || *threshold_hz <= 0.0 =>
            {
                Err(ConfigError::ValueOutOfRange(
                    "voice profile threshold must be a positive frequency",
                ))
            }
            _ => Ok(()),
        }
    }
}

impl FromStr for VoiceProfileAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        match lowered.as_str() {
            "threshold" | "frequency_threshold" => Ok(Self::default()),
            "male" => Ok(Self::Fixed {
                profile: VoiceProfile::Male,
            }),
            "female" => Ok(Self::Fixed {
                profile: VoiceProfile::Female,
            }),
            other => {
                if let Some(hz) = other.strip_prefix("threshold:") {
                    let threshold_hz = hz.trim().parse::<f64>().map_err(|_| {
                        AppError::invalid_input(format!("Invalid voice threshold: '{hz}'"))
                    })?;
                    let algorithm = Self::FrequencyThreshold { threshold_hz };
                    algorithm.validate().map_err(AppError::from)?;
                    return Ok(algorithm);
                }
                Err(AppError::invalid_input(format!(
                    "Unknown voice profile algorithm: '{other}'. Valid options: threshold, threshold:<hz>, male, female"
                )))
            }
        }
    }
}

/// Estimate the voice profile with the default 200 Hz threshold
#[must_use]
pub fn estimate_gender(fundamental_frequency_hz: f64) -> VoiceProfile {
    VoiceProfileAlgorithm::default().estimate(fundamental_frequency_hz)
}
