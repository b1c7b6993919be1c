//! Benchmarks for one-off shape construction.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use patientsim::signal::{build_beat, respiration::breath_shape, WaveformParams};

use crate::SAMPLE_RATES;

pub fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("signal/build");

    for &fs in SAMPLE_RATES {
        // Resting rate - no compression
        let resting = WaveformParams::default().with_sampling_rate(fs);
        group.bench_with_input(BenchmarkId::new("beat_resting", fs), &fs, |b, _| {
            b.iter(|| build_beat(black_box(&resting)))
        });

        // Tachycardia - proportional compression path
        let fast = resting.with_heart_rate(220.0);
        group.bench_with_input(BenchmarkId::new("beat_compressed", fs), &fs, |b, _| {
            b.iter(|| build_beat(black_box(&fast)))
        });

        group.bench_with_input(BenchmarkId::new("breath_shape", fs), &fs, |b, &fs| {
            b.iter(|| breath_shape(black_box(fs)))
        });
    }

    group.finish();
}
