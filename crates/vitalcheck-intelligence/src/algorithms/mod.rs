// ABOUTME: Pluggable algorithms used by the health scoring engine
// ABOUTME: Currently hosts voice profile estimation for gender-conditioned voice ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

/// Voice profile estimation from fundamental frequency
pub mod voice_profile;

pub use voice_profile::{estimate_gender, VoiceProfileAlgorithm, DEFAULT_VOICE_THRESHOLD_HZ};
