// ABOUTME: Biomarker value extraction from loosely-typed reading maps
// ABOUTME: Resolves canonical keys, ordered aliases, and composite blood pressure strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

use vitalcheck_core::models::{Biomarker, BiomarkerReadings};

/// Raw key carrying blood pressure as `"systolic/diastolic"`
pub const BLOOD_PRESSURE_KEY: &str = "bloodPressure";

/// Alternative input keys per biomarker, tried in order after the canonical key
pub static BIOMARKER_ALIASES: [(Biomarker, &[&str]); 11] = [
    (Biomarker::HeartRate, &["hr", "pulse", "bpm"]),
    (Biomarker::Rmssd, &["heartRateVariability", "hrv"]),
    (Biomarker::Sdnn, &["hrvSdnn"]),
    (Biomarker::OxygenSaturation, &["spo2", "oxygen"]),
    (Biomarker::RespiratoryRate, &["breathingRate", "respiration"]),
    (Biomarker::PerfusionIndex, &["pi", "perfusion"]),
    (Biomarker::StressLevel, &["stress", "stressIndex"]),
    (Biomarker::FundamentalFrequency, &["f0", "pitch"]),
    (Biomarker::Jitter, &["jitterPercent"]),
    (Biomarker::Shimmer, &["shimmerPercent"]),
    (Biomarker::VocalStress, &["voiceStress"]),
];

/// Aliases accepted for a biomarker (empty when it has none)
#[must_use]
pub fn aliases_for(biomarker: Biomarker) -> &'static [&'static str] {
    BIOMARKER_ALIASES
        .iter()
        .find(|(candidate, _)| *candidate == biomarker)
        .map_or(&[][..], |(_, aliases)| *aliases)
}

/// Extract the numeric value of a biomarker from raw readings
///
/// Blood pressure components come from the `bloodPressure` string. Every other
/// biomarker is read from its canonical key, then from its aliases in order.
/// Absent, null, or non-numeric values yield `None`; the result is always finite.
#[must_use]
pub fn extract_biomarker_value(readings: &BiomarkerReadings, biomarker: Biomarker) -> Option<f64> {
    match biomarker {
        Biomarker::BloodPressureSystolic => blood_pressure(readings).map(|(systolic, _)| systolic),
        Biomarker::BloodPressureDiastolic => {
            blood_pressure(readings).map(|(_, diastolic)| diastolic)
        }
        _ => readings.number(biomarker.canonical_name()).or_else(|| {
            aliases_for(biomarker)
                .iter()
                .find_map(|alias| readings.number(alias))
        }),
    }
}

/// Parse the `bloodPressure` entry into `(systolic, diastolic)`
fn blood_pressure(readings: &BiomarkerReadings) -> Option<(f64, f64)> {
    let raw = readings.get(BLOOD_PRESSURE_KEY)?.as_text()?;
    parse_blood_pressure(raw)
}

/// Parse `"120/80"` (whitespace around either side allowed) into integers
///
/// Parsing is strict: a third component (`"120/80/60"`) or a decimal part
/// (`"120.5/80"`) rejects the whole reading rather than keeping a prefix.
#[must_use]
pub fn parse_blood_pressure(raw: &str) -> Option<(f64, f64)> {
    let (systolic, diastolic) = raw.split_once('/')?;
    let systolic = systolic.trim().parse::<i32>().ok()?;
    let diastolic = diastolic.trim().parse::<i32>().ok()?;
    Some((f64::from(systolic), f64::from(diastolic)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_entry_is_unique() {
        for (index, (biomarker, _)) in BIOMARKER_ALIASES.iter().enumerate() {
            assert!(BIOMARKER_ALIASES[index + 1..]
                .iter()
                .all(|(other, _)| other != biomarker));
        }
    }

    #[test]
    fn test_parse_blood_pressure() {
        assert_eq!(parse_blood_pressure("120/80"), Some((120.0, 80.0)));
        assert_eq!(parse_blood_pressure(" 118 / 76 "), Some((118.0, 76.0)));
        assert_eq!(parse_blood_pressure("120"), None);
        assert_eq!(parse_blood_pressure("120/80/60"), None);
        assert_eq!(parse_blood_pressure("abc/80"), None);
        assert_eq!(parse_blood_pressure("120.5/80"), None);
    }
}
