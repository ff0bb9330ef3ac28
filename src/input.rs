// ABOUTME: JSON input parsing for biomarker readings from files, stdin, or any reader
// ABOUTME: A JSON object is one set of readings; a JSON array is a batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::debug;
use vitalcheck_core::errors::{AppError, AppResult, ErrorCode};
use vitalcheck_core::models::BiomarkerReadings;

/// Parsed input document
#[derive(Debug, Clone, PartialEq)]
pub enum ReadingsInput {
    /// One set of readings (any non-array document)
    Single(BiomarkerReadings),
    /// Several sets of readings
    Batch(Vec<BiomarkerReadings>),
}

impl ReadingsInput {
    /// Number of reading sets
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Batch(batch) => batch.len(),
        }
    }

    /// Whether the input is an empty batch
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Value> for ReadingsInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                Self::Batch(items.into_iter().map(BiomarkerReadings::from).collect())
            }
            other => Self::Single(BiomarkerReadings::from(other)),
        }
    }
}

/// Parse readings from a JSON reader
///
/// Non-object documents (including `null`) produce empty readings.
///
/// # Errors
///
/// Returns a serialization error if the input is not valid JSON
pub fn parse_readings<R: Read>(reader: R) -> AppResult<ReadingsInput> {
    let value: Value = serde_json::from_reader(reader)?;
    let input = ReadingsInput::from(value);
    debug!(sets = input.len(), "Parsed biomarker readings");
    Ok(input)
}

/// Read readings from a file, or from stdin when no path is given
///
/// # Errors
///
/// Returns a storage error if the file cannot be opened, or a serialization
/// error if its content is not valid JSON
pub fn read_readings(path: Option<&Path>) -> AppResult<ReadingsInput> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                AppError::new(
                    ErrorCode::StorageError,
                    format!("Cannot open {}", path.display()),
                )
                .with_source(e)
            })?;
            parse_readings(BufReader::new(file))
        }
        None => parse_readings(io::stdin().lock()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_is_batch() {
        let input = parse_readings(r#"[{"heartRate": 70}, {}, null]"#.as_bytes()).unwrap();
        let ReadingsInput::Batch(batch) = input else {
            panic!("expected batch");
        };
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].number("heartRate"), Some(70.0));
        assert!(batch[2].is_empty());
    }

    #[test]
    fn test_null_is_empty_single() {
        let input = parse_readings("null".as_bytes()).unwrap();
        assert_eq!(input, ReadingsInput::Single(BiomarkerReadings::new()));
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let err = parse_readings("{not json".as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::SerializationError);
    }
}
