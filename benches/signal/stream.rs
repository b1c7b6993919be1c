//! Benchmarks for streaming samples out of a configured source.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use patientsim::{
    EcgSource, RespirationParams, RespirationSource, SignalSource, WaveformParams,
};

use crate::STEP_SIZES;

pub fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("signal/stream");

    for &size in STEP_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut ecg = EcgSource::new(WaveformParams::default());
        group.bench_with_input(BenchmarkId::new("ecg_step_into", size), &size, |b, _| {
            b.iter(|| ecg.step_into(black_box(&mut buffer)))
        });

        // Allocating variant, as a display loop would call it
        group.bench_with_input(BenchmarkId::new("ecg_step", size), &size, |b, &n| {
            b.iter(|| black_box(ecg.step(n)))
        });

        let mut resp = RespirationSource::new(RespirationParams::default());
        group.bench_with_input(BenchmarkId::new("respiration_step_into", size), &size, |b, _| {
            b.iter(|| resp.step_into(black_box(&mut buffer)))
        });
    }

    group.finish();
}
