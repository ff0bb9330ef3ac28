// ABOUTME: Re-exports command modules for vitalcheck-cli
// ABOUTME: Provides access to score, ranges, and status commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

pub mod ranges;
pub mod score;
pub mod status;
