//! Breath waveform: a quick inhale followed by a slower exhale.
//!
//! The shape is sampled once over a one-second grid and normalized to a peak
//! of 1.0. Playback length is set separately by the breathing rate, so the
//! cursor walks this shape at its own period (see `SignalCursor::new`).

use log::debug;

/// Inhale rise constant (1 - e^{-5t}).
const INHALE_RATE: f64 = 5.0;
/// Exhale decay constant (e^{-3t}).
const EXHALE_RATE: f64 = 3.0;

/// One second of normalized breath shape at `sample_rate_hz`.
///
/// Sample k sits at t = k / fs, so the grid covers [0, 1). A zero sampling
/// rate gives an empty shape.
pub fn breath_shape(sample_rate_hz: u32) -> Vec<f32> {
    let n = sample_rate_hz as usize;

    let raw: Vec<f64> = (0..n)
        .map(|k| {
            let t = k as f64 / n as f64;
            let inhale = 1.0 - (-INHALE_RATE * t).exp();
            let exhale = (-EXHALE_RATE * t).exp();
            inhale * exhale
        })
        .collect();

    let peak = raw.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()));
    if peak == 0.0 {
        debug!("breath shape at {sample_rate_hz} Hz has no energy; leaving it flat");
        return vec![0.0; raw.len()];
    }

    raw.iter().map(|&x| (x / peak) as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_spans_one_second() {
        assert_eq!(breath_shape(100).len(), 100);
        assert!(breath_shape(0).is_empty());
    }

    #[test]
    fn shape_is_normalized_to_unit_peak() {
        let shape = breath_shape(100);
        let peak = shape.iter().copied().fold(f32::MIN, f32::max);
        assert!((peak - 1.0).abs() < 1e-6);
        assert!(shape.iter().all(|&s| (0.0..=1.0 + 1e-6).contains(&s)));
    }

    #[test]
    fn inhale_is_faster_than_exhale() {
        // Peak of (1 - e^{-5t}) e^{-3t} is at t = ln(8/3) / 5 ~= 0.196 s.
        let shape = breath_shape(1000);
        let peak_idx = shape
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert!((190..=202).contains(&peak_idx), "peak at {peak_idx}");
    }

    #[test]
    fn single_sample_shape_is_flat() {
        // t = 0 only: the product is exactly zero.
        assert_eq!(breath_shape(1), vec![0.0]);
    }
}
