// ABOUTME: Core types and constants for the VitalCheck health scoring engine
// ABOUTME: Foundation crate with error handling, biomarker models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

#![deny(unsafe_code)]

//! # VitalCheck Core
//!
//! Foundation crate providing shared types and constants for the VitalCheck
//! health scoring engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Service names, environment variable names, and limits
//! - **models**: Biomarker readings, canonical biomarkers, and health classifications

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (biomarkers, readings, health levels)
pub mod models;
