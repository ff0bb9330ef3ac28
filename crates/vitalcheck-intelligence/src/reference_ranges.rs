// ABOUTME: Static reference range tables for cardiovascular and voice biomarkers
// ABOUTME: Provides scoring bands, weights, and lookups by biomarker or canonical name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

//! Reference Ranges
//!
//! Each scored biomarker has an optimal band, a wider acceptable band that
//! contains it, and a positive weight. Weights are normalized by the sum of the
//! weights of the biomarkers actually assessed, so they need not sum to 1.
//!
//! The voice fundamental frequency is gender-conditioned and carries one band
//! per [`VoiceProfile`].

use serde::{Deserialize, Serialize};
use vitalcheck_core::models::{Biomarker, VoiceProfile};

use crate::config::ConfigError;

/// Closed interval `[min, max]`, serialized as a two-element array
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Band {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl Band {
    /// Create a band without validation
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies in `[min, max]`
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Whether `other` lies entirely within this band
    #[must_use]
    pub fn encloses(&self, other: &Self) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}

impl From<[f64; 2]> for Band {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<Band> for [f64; 2] {
    fn from(band: Band) -> Self {
        [band.min, band.max]
    }
}

/// Optimal band nested in an acceptable band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringBand {
    /// Values scoring 1.0
    pub optimal: Band,
    /// Values scoring between 0.7 and 1.0
    pub acceptable: Band,
}

impl ScoringBand {
    /// Create a validated scoring band
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is non-finite or negative, the acceptable
    /// maximum is not positive, a band is inverted, or the acceptable band does
    /// not contain the optimal band
    pub fn new(optimal: Band, acceptable: Band) -> Result<Self, ConfigError> {
        let band = Self::unchecked(optimal, acceptable);
        band.validate()?;
        Ok(band)
    }

    const fn unchecked(optimal: Band, acceptable: Band) -> Self {
        Self {
            optimal,
            acceptable,
        }
    }

    /// Check the band invariants
    ///
    /// # Errors
    ///
    /// See [`ScoringBand::new`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = [
            self.optimal.min,
            self.optimal.max,
            self.acceptable.min,
            self.acceptable.max,
        ];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(ConfigError::ValueOutOfRange("band bounds must be finite"));
        }
        if bounds.iter().any(|b| *b < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "band bounds must be non-negative",
            ));
        }
        if self.acceptable.max <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "acceptable maximum must be positive",
            ));
        }
        if self.optimal.min > self.optimal.max || self.acceptable.min > self.acceptable.max {
            return Err(ConfigError::InvalidRange("band minimum exceeds maximum"));
        }
        if !self.acceptable.encloses(&self.optimal) {
            return Err(ConfigError::InvalidRange(
                "acceptable band must contain the optimal band",
            ));
        }
        Ok(())
    }
}

/// Bands of a biomarker, flat or conditioned on the voice profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeBands {
    /// Same band for everyone
    Flat(ScoringBand),
    /// One band per voice profile
    ByVoiceProfile {
        /// Band for male voices
        male: ScoringBand,
        /// Band for female voices
        female: ScoringBand,
    },
}

/// Reference range entry for one biomarker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    /// Biomarker the entry applies to
    pub biomarker: Biomarker,
    /// Scoring band(s)
    #[serde(flatten)]
    pub bands: RangeBands,
    /// Relative weight in the composite score
    pub weight: f64,
}

impl ReferenceRange {
    /// Band to score against for the given voice profile
    ///
    /// Flat ranges ignore the profile.
    #[must_use]
    pub const fn band_for(&self, profile: VoiceProfile) -> &ScoringBand {
        match (&self.bands, profile) {
            (RangeBands::Flat(band), _)
            | (RangeBands::ByVoiceProfile { male: band, .. }, VoiceProfile::Male)
            | (RangeBands::ByVoiceProfile { female: band, .. }, VoiceProfile::Female) => band,
        }
    }

    /// Whether the band depends on the voice profile
    #[must_use]
    pub const fn is_profile_conditioned(&self) -> bool {
        matches!(self.bands, RangeBands::ByVoiceProfile { .. })
    }

    /// Every scoring band of the entry
    #[must_use]
    pub fn scoring_bands(&self) -> Vec<&ScoringBand> {
        match &self.bands {
            RangeBands::Flat(band) => vec![band],
            RangeBands::ByVoiceProfile { male, female } => vec![male, female],
        }
    }
}

const fn flat(
    biomarker: Biomarker,
    optimal: (f64, f64),
    acceptable: (f64, f64),
    weight: f64,
) -> ReferenceRange {
    ReferenceRange {
        biomarker,
        bands: RangeBands::Flat(ScoringBand::unchecked(
            Band::new(optimal.0, optimal.1),
            Band::new(acceptable.0, acceptable.1),
        )),
        weight,
    }
}

/// Cardiovascular reference ranges (rPPG measurements)
pub static REFERENCE_RANGES: [ReferenceRange; 9] = [
    flat(Biomarker::HeartRate, (60.0, 80.0), (50.0, 100.0), 0.20),
    flat(Biomarker::Rmssd, (30.0, 80.0), (20.0, 120.0), 0.15),
    flat(Biomarker::Sdnn, (50.0, 100.0), (30.0, 150.0), 0.10),
    flat(Biomarker::OxygenSaturation, (95.0, 100.0), (90.0, 100.0), 0.20),
    flat(
        Biomarker::BloodPressureSystolic,
        (90.0, 120.0),
        (85.0, 140.0),
        0.10,
    ),
    flat(
        Biomarker::BloodPressureDiastolic,
        (60.0, 80.0),
        (55.0, 90.0),
        0.08,
    ),
    flat(Biomarker::RespiratoryRate, (12.0, 20.0), (10.0, 24.0), 0.07),
    flat(Biomarker::PerfusionIndex, (1.0, 20.0), (0.3, 20.0), 0.05),
    flat(Biomarker::StressLevel, (0.0, 30.0), (0.0, 60.0), 0.10),
];

/// Voice reference ranges
pub static VOICE_RANGES: [ReferenceRange; 4] = [
    ReferenceRange {
        biomarker: Biomarker::FundamentalFrequency,
        bands: RangeBands::ByVoiceProfile {
            male: ScoringBand::unchecked(Band::new(85.0, 155.0), Band::new(65.0, 200.0)),
            female: ScoringBand::unchecked(Band::new(165.0, 255.0), Band::new(140.0, 300.0)),
        },
        weight: 0.05,
    },
    flat(Biomarker::Jitter, (0.0, 1.04), (0.0, 2.0), 0.05),
    flat(Biomarker::Shimmer, (0.0, 3.81), (0.0, 6.0), 0.05),
    flat(Biomarker::VocalStress, (0.0, 30.0), (0.0, 60.0), 0.05),
];

/// Every reference range, cardiovascular first, in biomarker order
pub fn all_ranges() -> impl Iterator<Item = &'static ReferenceRange> {
    REFERENCE_RANGES.iter().chain(VOICE_RANGES.iter())
}

/// Reference range for a biomarker
#[must_use]
pub fn reference_range(biomarker: Biomarker) -> Option<&'static ReferenceRange> {
    all_ranges().find(|range| range.biomarker == biomarker)
}

/// Reference range by canonical name; unknown names return `None`
#[must_use]
pub fn reference_range_by_name(name: &str) -> Option<&'static ReferenceRange> {
    name.parse::<Biomarker>().ok().and_then(reference_range)
}
