use std::f64::consts::PI;

/*
Waveform Segments
=================

Every synthetic beat is stitched together from three kinds of segment. None
of them carry state; each call returns a freshly allocated `Vec<f32>` that
the caller concatenates.

Half-sine (closed)
------------------

    amp ┐      ___
        │    ╱     ╲
        │   ╱       ╲
    0.0 └──●─────────●──→ k
           0        N-1

  sample[k] = amp * sin(π k / (N - 1)),   k = 0..N-1

Both endpoints are included, so the segment starts and ends exactly on the
baseline. N is forced up to 2; a single sample cannot hold both endpoints.
For odd N the peak sample sits at (N - 1) / 2 and equals `amp`.


Ramp (open-ended)
-----------------

    end   ┐          ○   <- not emitted, the next segment owns it
          │       ●
          │    ●
    start └─●──────────→ k
            0  1  2  (n)

  sample[k] = start + (end - start) * k / n,   k = 0..n-1

The final value is deliberately left out. Ramps are chained so that each
one begins where the previous one would have ended (Q ends at -q_depth, R
begins at -q_depth), which keeps the joins continuous without ever emitting
the same boundary value twice.


Silence
-------

A run of zeros. Zero length is legal and common (isoelectric segments can
round down to nothing).
*/

/// Closed half-sine from 0 up to `amp` and back to 0 over `len` samples.
pub fn half_sine(len: usize, amp: f32) -> Vec<f32> {
    let len = len.max(2);
    let last = (len - 1) as f64;
    let amp = amp as f64;

    (0..len)
        .map(|k| (amp * (PI * k as f64 / last).sin()) as f32)
        .collect()
}

/// Open-ended linear ramp of `len` samples from `start` towards `end`.
pub fn ramp(start: f32, end: f32, len: usize) -> Vec<f32> {
    if len == 0 {
        return Vec::new();
    }

    let start = start as f64;
    let step = (end as f64 - start) / len as f64;

    (0..len).map(|k| (start + step * k as f64) as f32).collect()
}

/// `len` samples of baseline.
#[inline]
pub fn silence(len: usize) -> Vec<f32> {
    vec![0.0; len]
}
