// ABOUTME: Recommendation configuration for biomarker-driven health advice
// ABOUTME: Configures thresholds, limits, and message templates for recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

//! Recommendation Configuration
//!
//! Thresholds that trigger per-biomarker and general advice, the cap on the
//! number of recommendations returned, and the message texts themselves.
//! Messages default to Spanish, the language of the product.

use serde::{Deserialize, Serialize};

/// Recommendation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Threshold values for triggering recommendations
    pub thresholds: RecommendationThresholds,
    /// Limits on recommendation generation
    pub limits: RecommendationLimits,
    /// Message texts
    pub messages: RecommendationMessages,
}

/// Thresholds for triggering recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Individual biomarker score (0-1) below which biomarker advice is given
    pub low_biomarker_score: f64,
    /// Heart rate (bpm) above which the "high" message is used
    pub heart_rate_high_bpm: f64,
    /// Systolic pressure (mmHg) above which the "high" message is used
    pub systolic_high_mmhg: f64,
    /// Composite score below which a professional consultation is advised
    pub consult_below_score: f64,
    /// Composite score at or above which current habits are endorsed
    pub maintain_at_or_above_score: f64,
}

/// Limits on recommendation generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationLimits {
    /// Maximum recommendations returned
    pub max_recommendations: usize,
}

/// Message texts for each recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationMessages {
    /// Heart rate above the high threshold
    pub heart_rate_high: String,
    /// Heart rate at or below the high threshold
    pub heart_rate_low: String,
    /// Low heart rate variability
    pub rmssd_low: String,
    /// Low oxygen saturation
    pub oxygen_saturation_low: String,
    /// Systolic pressure above the high threshold
    pub blood_pressure_high: String,
    /// Systolic pressure at or below the high threshold
    pub blood_pressure_low: String,
    /// High physiological stress
    pub stress_high: String,
    /// High vocal stress
    pub vocal_stress_high: String,
    /// Low composite score
    pub consult_professional: String,
    /// High composite score
    pub maintain_habits: String,
    /// Fallback when nothing else applies
    pub general_wellness: String,
    /// No assessable biomarkers
    pub insufficient_data: String,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            low_biomarker_score: 0.6,
            heart_rate_high_bpm: 90.0,
            systolic_high_mmhg: 140.0,
            consult_below_score: 55.0,
            maintain_at_or_above_score: 70.0,
        }
    }
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            max_recommendations: 5,
        }
    }
}

impl Default for RecommendationMessages {
    fn default() -> Self {
        Self {
            heart_rate_high: "Tu frecuencia cardíaca está elevada. Practica técnicas de relajación y respiración profunda para reducirla.".to_owned(),
            heart_rate_low: "Tu frecuencia cardíaca es baja. Si sientes mareos o fatiga, consulta con un profesional.".to_owned(),
            rmssd_low: "Tu variabilidad cardíaca es baja. Prioriza el descanso, un sueño de calidad y la gestión del estrés.".to_owned(),
            oxygen_saturation_low: "Tu saturación de oxígeno es baja. Practica ejercicios de respiración y consulta a un médico si persiste.".to_owned(),
            blood_pressure_high: "Tu presión arterial está elevada. Reduce el consumo de sal y consulta a tu médico.".to_owned(),
            blood_pressure_low: "Tu presión arterial es baja. Mantente hidratado y evita cambios bruscos de postura.".to_owned(),
            stress_high: "Tu nivel de estrés es alto. Dedica tiempo a actividades relajantes como la meditación o caminar.".to_owned(),
            vocal_stress_high: "Se detecta tensión en tu voz. Haz pausas durante el día y practica ejercicios de relajación.".to_owned(),
            consult_professional: "Considera consultar con un profesional de la salud para una evaluación completa.".to_owned(),
            maintain_habits: "¡Buen trabajo! Mantén tus hábitos saludables actuales.".to_owned(),
            general_wellness: "Continúa con un estilo de vida equilibrado: ejercicio regular, buena alimentación y descanso adecuado.".to_owned(),
            insufficient_data: "No hay datos suficientes para generar recomendaciones. Realiza un nuevo análisis.".to_owned(),
        }
    }
}
