// ABOUTME: Biomarker data models - canonical biomarkers, raw values, and reading maps
// ABOUTME: Represents the flat name-to-value map produced by the capture pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Physiological system a biomarker belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiomarkerCategory {
    /// Measured from facial video (rPPG)
    Cardiovascular,
    /// Measured from a voice recording
    Voice,
}

/// Voice profile used to pick gender-conditioned reference bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceProfile {
    /// Lower fundamental frequency band
    Male,
    /// Higher fundamental frequency band
    Female,
}

impl VoiceProfile {
    /// Lowercase name of the profile
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Canonical biomarkers understood by the scoring engine
///
/// Declaration order is the evaluation order: individual scores, recommendations,
/// and risk factors are all reported in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Biomarker {
    /// Heart rate (bpm)
    HeartRate,
    /// Root mean square of successive RR differences (ms)
    Rmssd,
    /// Standard deviation of NN intervals (ms)
    Sdnn,
    /// Peripheral oxygen saturation (%)
    OxygenSaturation,
    /// Systolic blood pressure (mmHg), parsed from `bloodPressure`
    BloodPressureSystolic,
    /// Diastolic blood pressure (mmHg), parsed from `bloodPressure`
    BloodPressureDiastolic,
    /// Respiratory rate (breaths/min)
    RespiratoryRate,
    /// Perfusion index (ratio)
    PerfusionIndex,
    /// Physiological stress (0-100)
    StressLevel,
    /// Voice fundamental frequency (Hz)
    FundamentalFrequency,
    /// Cycle-to-cycle frequency variation (%)
    Jitter,
    /// Cycle-to-cycle amplitude variation (%)
    Shimmer,
    /// Stress detected in the voice (0-100)
    VocalStress,
}

impl Biomarker {
    /// Every biomarker in evaluation order
    pub const ALL: [Self; 13] = [
        Self::HeartRate,
        Self::Rmssd,
        Self::Sdnn,
        Self::OxygenSaturation,
        Self::BloodPressureSystolic,
        Self::BloodPressureDiastolic,
        Self::RespiratoryRate,
        Self::PerfusionIndex,
        Self::StressLevel,
        Self::FundamentalFrequency,
        Self::Jitter,
        Self::Shimmer,
        Self::VocalStress,
    ];

    /// Key used in the flat biomarker map
    #[must_use]
    pub const fn canonical_name(&self) -> &'static str {
        match self {
            Self::HeartRate => "heartRate",
            Self::Rmssd => "rmssd",
            Self::Sdnn => "sdnn",
            Self::OxygenSaturation => "oxygenSaturation",
            Self::BloodPressureSystolic => "bloodPressureSystolic",
            Self::BloodPressureDiastolic => "bloodPressureDiastolic",
            Self::RespiratoryRate => "respiratoryRate",
            Self::PerfusionIndex => "perfusionIndex",
            Self::StressLevel => "stressLevel",
            Self::FundamentalFrequency => "fundamentalFrequency",
            Self::Jitter => "jitter",
            Self::Shimmer => "shimmer",
            Self::VocalStress => "vocalStress",
        }
    }

    /// Human-readable name shown in reports
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::HeartRate => "Frecuencia cardíaca",
            Self::Rmssd => "Variabilidad cardíaca (RMSSD)",
            Self::Sdnn => "Variabilidad cardíaca (SDNN)",
            Self::OxygenSaturation => "Saturación de oxígeno",
            Self::BloodPressureSystolic => "Presión sistólica",
            Self::BloodPressureDiastolic => "Presión diastólica",
            Self::RespiratoryRate => "Frecuencia respiratoria",
            Self::PerfusionIndex => "Índice de perfusión",
            Self::StressLevel => "Nivel de estrés",
            Self::FundamentalFrequency => "Frecuencia fundamental",
            Self::Jitter => "Jitter",
            Self::Shimmer => "Shimmer",
            Self::VocalStress => "Estrés vocal",
        }
    }

    /// Measurement unit
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::HeartRate => "bpm",
            Self::Rmssd | Self::Sdnn => "ms",
            Self::OxygenSaturation | Self::Jitter | Self::Shimmer => "%",
            Self::BloodPressureSystolic | Self::BloodPressureDiastolic => "mmHg",
            Self::RespiratoryRate => "rpm",
            Self::PerfusionIndex => "ratio",
            Self::StressLevel | Self::VocalStress => "/100",
            Self::FundamentalFrequency => "Hz",
        }
    }

    /// Category the biomarker belongs to
    #[must_use]
    pub const fn category(&self) -> BiomarkerCategory {
        match self {
            Self::FundamentalFrequency | Self::Jitter | Self::Shimmer | Self::VocalStress => {
                BiomarkerCategory::Voice
            }
            _ => BiomarkerCategory::Cardiovascular,
        }
    }
}

impl fmt::Display for Biomarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for Biomarker {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|biomarker| biomarker.canonical_name() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown biomarker: '{s}'")))
    }
}

/// Raw value of one entry in the biomarker map
///
/// The capture pipeline is loosely typed: numbers may arrive as strings, blood
/// pressure arrives as `"120/80"`, and missing measurements arrive as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum BiomarkerValue {
    /// Numeric value
    Number(f64),
    /// Text value (numeric string or composite like blood pressure)
    Text(String),
    /// Explicit null
    Null,
    /// Any other JSON shape (booleans, arrays, objects)
    Unsupported(Value),
}

impl BiomarkerValue {
    /// Interpret the value as a finite number
    ///
    /// Numeric strings are accepted after trimming whitespace.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let number = match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Null | Self::Unsupported(_) => None,
        };
        number.filter(|n| n.is_finite())
    }

    /// Borrow the value as text, if it is text
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Value> for BiomarkerValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            Value::String(s) => Self::Text(s),
            other => Self::Unsupported(other),
        }
    }
}

impl From<BiomarkerValue> for Value {
    fn from(value: BiomarkerValue) -> Self {
        match value {
            BiomarkerValue::Number(n) => {
                serde_json::Number::from_f64(n).map_or(Self::Null, Self::Number)
            }
            BiomarkerValue::Text(s) => Self::String(s),
            BiomarkerValue::Null => Self::Null,
            BiomarkerValue::Unsupported(v) => v,
        }
    }
}

impl From<f64> for BiomarkerValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<f64>> for BiomarkerValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for BiomarkerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for BiomarkerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Flat map of biomarker name to raw value, as produced by the capture pipeline
///
/// Keys are kept verbatim; unknown keys are carried along and ignored by scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct BiomarkerReadings {
    values: BTreeMap<String, BiomarkerValue>,
}

impl BiomarkerReadings {
    /// Create an empty reading map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<BiomarkerValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a raw value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<BiomarkerValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Raw value stored under `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BiomarkerValue> {
        self.values.get(name)
    }

    /// Finite numeric value stored under `name`
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(BiomarkerValue::as_number)
    }

    /// Number of raw entries (including null and unknown keys)
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over raw entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BiomarkerValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<Value> for BiomarkerReadings {
    /// Non-object JSON documents produce an empty map
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => map.into_iter().collect(),
            _ => Self::default(),
        }
    }
}

impl From<BiomarkerReadings> for Value {
    fn from(readings: BiomarkerReadings) -> Self {
        Self::Object(
            readings
                .values
                .into_iter()
                .map(|(k, v)| (k, Self::from(v)))
                .collect(),
        )
    }
}

impl<K, V> FromIterator<(K, V)> for BiomarkerReadings
where
    K: Into<String>,
    V: Into<BiomarkerValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_strings_are_numbers() {
        assert_eq!(BiomarkerValue::from(" 72.5 ").as_number(), Some(72.5));
        assert_eq!(BiomarkerValue::from("abc").as_number(), None);
        assert_eq!(BiomarkerValue::from("inf").as_number(), None);
        assert_eq!(BiomarkerValue::Null.as_number(), None);
        assert_eq!(BiomarkerValue::from(json!(true)).as_number(), None);
    }

    #[test]
    fn test_non_object_json_yields_empty_readings() {
        let readings: BiomarkerReadings = serde_json::from_value(json!([1, 2, 3])).unwrap();
        assert!(readings.is_empty());
    }

    #[test]
    fn test_biomarker_canonical_names_round_trip() {
        for biomarker in Biomarker::ALL {
            assert_eq!(
                biomarker.canonical_name().parse::<Biomarker>().unwrap(),
                biomarker
            );
            assert_eq!(
                serde_json::to_value(biomarker).unwrap(),
                json!(biomarker.canonical_name())
            );
        }
    }
}
