// ABOUTME: Main library entry point for the VitalCheck digital health check
// ABOUTME: Re-exports the scoring engine and provides assessment, input, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

#![deny(unsafe_code)]

//! # VitalCheck
//!
//! Scores cardiovascular (rPPG) and voice biomarkers captured during a short
//! digital health check into a 0-100 health index with recommendations and a
//! risk assessment.
//!
//! ## Architecture
//!
//! - **vitalcheck-core**: Errors, constants, and biomarker models
//! - **vitalcheck-intelligence**: Reference ranges and the scoring engine
//! - **assessment**: Full reports for single readings and parallel batches
//! - **input**: JSON parsing of biomarker maps
//! - **logging**: Structured logging setup
//!
//! ## Example Usage
//!
//! ```rust
//! use vitalcheck::assessment::HealthAssessor;
//! use vitalcheck::models::BiomarkerReadings;
//!
//! let readings = BiomarkerReadings::new()
//!     .with("heartRate", 72.0)
//!     .with("rmssd", 45.0)
//!     .with("oxygenSaturation", 98.0);
//!
//! let assessment = HealthAssessor::new().assess(&readings);
//! assert_eq!(assessment.result.map(|r| r.score), Some(100));
//! ```

/// Health assessment pipeline
pub mod assessment;

/// JSON input parsing
pub mod input;

/// Structured logging configuration
pub mod logging;

pub use vitalcheck_core::{constants, errors, models};
pub use vitalcheck_intelligence as intelligence;
