//! Conversions between wall-clock durations and sample counts.
//!
//! All rounding here is round-half-to-even evaluated in `f64`. Sample counts
//! feed directly into segment lengths, so a 4.5-sample Q wave must land on 4
//! every time, regardless of how the caller's `f32` parameters were stored.

/// Round to the nearest integer, ties to even, and clamp into `usize`.
///
/// Negative and NaN inputs collapse to 0.
#[inline]
pub fn round_count(x: f64) -> usize {
    let r = x.round_ties_even();
    if r.is_nan() || r <= 0.0 {
        0
    } else {
        r as usize
    }
}

/// Number of samples spanned by `ms` milliseconds at `sample_rate_hz`.
#[inline]
pub fn ms_to_samples(sample_rate_hz: u32, ms: f32) -> usize {
    round_count(sample_rate_hz as f64 * ms as f64 / 1000.0)
}

/// Samples in one cycle of an event that repeats `rate_per_min` times a minute
/// (heart beats or breaths). Never less than 1.
///
/// A non-positive or non-finite rate is treated as "one sample per cycle"
/// rather than an infinite period.
#[inline]
pub fn period_samples(sample_rate_hz: u32, rate_per_min: f32) -> usize {
    let rate = rate_per_min as f64;
    if !rate.is_finite() || rate <= 0.0 {
        return 1;
    }
    round_count(60.0 / rate * sample_rate_hz as f64).max(1)
}
