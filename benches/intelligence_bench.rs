// ABOUTME: Criterion benchmarks for the health scoring engine
// ABOUTME: Measures biomarker extraction, composite scoring, and parallel batch assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors

//! Criterion benchmarks for the health scoring engine.
//!
//! Measures single-reading scoring, the full assessment pipeline, and batch
//! throughput with varying batch sizes.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vitalcheck::assessment::HealthAssessor;
use vitalcheck::intelligence::{extract_biomarker_value, HealthScoreCalculator, HealthScoringConfig};
use vitalcheck::models::{Biomarker, BiomarkerReadings};

/// Generate varied readings covering every biomarker, aliases, and missing values
fn generate_readings(count: usize) -> Vec<BiomarkerReadings> {
    (0..count)
        .map(|index| {
            let offset = (index % 40) as f64;
            let mut readings = BiomarkerReadings::new()
                .with("heartRate", 55.0 + offset)
                .with("rmssd", 20.0 + offset * 2.0)
                .with("oxygenSaturation", 92.0 + offset / 5.0)
                .with("bloodPressure", format!("{}/{}", 100 + index % 50, 65 + index % 30))
                .with("stressLevel", offset * 2.0)
                .with("jitter", 0.4 + offset / 20.0)
                .with("shimmer", 2.0 + offset / 10.0)
                .with("vocalStress", offset);
            if index % 3 == 0 {
                readings.insert("spo2", 97.0);
                readings.insert("f0", 110.0 + offset * 3.0);
            } else {
                readings.insert("sdnn", 40.0 + offset * 2.0);
                readings.insert("respiratoryRate", "16");
            }
            readings
        })
        .collect()
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("biomarker_extraction");
    let readings = generate_readings(1).remove(0);

    group.throughput(Throughput::Elements(Biomarker::ALL.len() as u64));
    group.bench_function("extract_all_biomarkers", |b| {
        b.iter(|| {
            Biomarker::ALL
                .iter()
                .filter_map(|biomarker| extract_biomarker_value(black_box(&readings), *biomarker))
                .count()
        });
    });

    group.finish();
}

fn bench_health_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("health_score");
    let calculator = HealthScoreCalculator::with_config(HealthScoringConfig::default());
    let readings = generate_readings(1).remove(0);

    group.bench_function("calculate_health_score", |b| {
        b.iter(|| calculator.calculate_health_score(black_box(&readings)));
    });

    let result = calculator.calculate_health_score(&readings);
    group.bench_function("recommendations_and_risk", |b| {
        b.iter(|| {
            (
                calculator.generate_recommendations(black_box(result.as_ref())),
                calculator.calculate_risk_assessment(black_box(result.as_ref())),
            )
        });
    });

    group.finish();
}

fn bench_batch_assessment(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_assessment");
    group.sample_size(50);
    let assessor = HealthAssessor::with_calculator(HealthScoreCalculator::with_config(
        HealthScoringConfig::default(),
    ));

    for count in [10, 100, 1_000] {
        let batch = generate_readings(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("assess_batch", count), &batch, |b, batch| {
            b.iter(|| assessor.assess_batch(black_box(batch)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extraction,
    bench_health_score,
    bench_batch_assessment,
);
criterion_main!(benches);
