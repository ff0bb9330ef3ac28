// ABOUTME: Ranges command for vitalcheck-cli
// ABOUTME: Prints the reference range tables used for scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

use anyhow::Result;
use vitalcheck::intelligence::reference_ranges::{all_ranges, ReferenceRange};

use crate::helpers::display::{display_ranges, print_json};
use crate::OutputFormat;

/// Print every reference range
pub fn run(format: OutputFormat) -> Result<()> {
    let ranges: Vec<&ReferenceRange> = all_ranges().collect();
    match format {
        OutputFormat::Json => print_json(&ranges)?,
        OutputFormat::Text => display_ranges(&ranges),
    }
    Ok(())
}
