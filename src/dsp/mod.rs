//! Low-level numeric primitives used by the signal builders.
//!
//! These functions are pure and stateless: they turn durations into sample
//! counts and sample counts into waveform fragments. The `signal` module
//! layers physiology (which segments, in what order, at what amplitude) on
//! top of them.

/// Half-sine, open-ended ramp and silence fragments.
pub mod segment;
/// Duration and rate to sample-count conversions.
pub mod timing;

pub use segment::{half_sine, ramp, silence};
pub use timing::{ms_to_samples, period_samples};
