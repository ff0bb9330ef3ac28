// ABOUTME: Core data models for biomarker readings and health classifications
// ABOUTME: Re-exports biomarker and health level types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

//! Core data models shared across the workspace.

/// Biomarkers, raw values, and reading maps
pub mod biomarker;
/// Health level, risk level, and urgency classifications
pub mod health;

pub use biomarker::{Biomarker, BiomarkerCategory, BiomarkerReadings, BiomarkerValue, VoiceProfile};
pub use health::{HealthLevel, RiskLevel, Urgency};
