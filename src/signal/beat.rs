use std::ops::Deref;

use log::{debug, trace};

use crate::dsp::{
    segment::{half_sine, ramp, silence},
    timing::{ms_to_samples, period_samples, round_count},
};

use super::params::WaveformParams;

/*
Synthetic ECG Beat
==================

One beat is a fixed-length buffer covering exactly one cardiac period:

    R
    ┐         ╱╲
    │        ╱  ╲
    │  P    ╱    ╲             T
    │ ╱╲   ╱      ╲          ╱‾‾╲
  0 ┼╱──╲─╲╱───────╲──╱───╱──────╲─────────────
    │      Q        ╲╱
    │               S
     |P |iso1|  QRS  |iso2 |  T   |   rest    |
     └──────────── period_samples ────────────┘

Segments are laid out in this order and simply concatenated:

  P       closed half-sine, amp_p                 (min 2 samples)
  iso1    zeros                                   (min 0)
  QRS     piecewise-linear Q / R / S              (min 3)
  iso2    zeros                                   (min 0)
  T       closed half-sine, amp_t                 (min 2)
  rest    zeros padding out to the period


Fitting Into The Period
-----------------------

Durations are converted to samples and floored at the minimums above. If
the five active segments together are longer than the period (fast heart
rate), every length is multiplied by `period / total`, rounded, and floored
again. Rounding can still overshoot by a sample or two; those are taken
back one at a time from the longest segment above its floor (usually an
isoelectric one). Relative proportions survive; whatever is left becomes
`rest`.

At absurd rates the floors alone (2 + 3 + 2) can exceed the period. The
buffer is then cut at `period_samples` so its length is always exact.


QRS Construction
----------------

  qrs_len is split ~18% Q, ~34% R, remainder S (each at least 1 sample).
  Depths follow R:  q_depth = 0.20 * amp_r,  s_depth = 0.45 * amp_r

  Q       0        → -q_depth    open-ended ramp
  R      -q_depth  → +amp_r      open-ended ramp
  S down +amp_r    → -s_depth    first half of S
  S up   -s_depth  →  0          the remaining samples

Each ramp stops one step short of its target; the next ramp starts on it.
*/

const MIN_WAVE_SAMPLES: usize = 2;
const MIN_QRS_SAMPLES: usize = 3;

const Q_FRACTION: f64 = 0.18;
const R_FRACTION: f64 = 0.34;
const Q_DEPTH_OF_R: f32 = 0.20;
const S_DEPTH_OF_R: f32 = 0.45;

/// Sample counts of each segment of one beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentLengths {
    pub p: usize,
    pub iso1: usize,
    pub qrs: usize,
    pub iso2: usize,
    pub t: usize,
    /// Trailing baseline that pads the active segments out to the period.
    pub rest: usize,
}

impl SegmentLengths {
    /// Convert the durations in `params` to sample counts that fit one period.
    pub fn plan(params: &WaveformParams) -> Self {
        let fs = params.sampling_rate_hz;
        let period = period_samples(fs, params.heart_rate_bpm);

        let mut lengths = Self {
            p: ms_to_samples(fs, params.p_duration_ms),
            iso1: ms_to_samples(fs, params.isoelectric1_ms),
            qrs: ms_to_samples(fs, params.qrs_duration_ms),
            iso2: ms_to_samples(fs, params.isoelectric2_ms),
            t: ms_to_samples(fs, params.t_duration_ms),
            rest: 0,
        }
        .floored();

        let requested = lengths.active_total();
        if requested > period {
            let scale = period as f64 / requested as f64;
            trace!("compressing {requested} samples into a {period}-sample period (scale {scale:.3})");
            lengths = lengths.scaled(scale).floored();
            lengths.trim_to(period);
        }

        lengths.rest = period.saturating_sub(lengths.active_total());
        lengths
    }

    /// Samples taken by P, QRS, T and both isoelectric segments.
    pub fn active_total(&self) -> usize {
        self.p + self.iso1 + self.qrs + self.iso2 + self.t
    }

    /// Active segments plus trailing rest.
    pub fn total(&self) -> usize {
        self.active_total() + self.rest
    }

    fn floored(self) -> Self {
        Self {
            p: self.p.max(MIN_WAVE_SAMPLES),
            qrs: self.qrs.max(MIN_QRS_SAMPLES),
            t: self.t.max(MIN_WAVE_SAMPLES),
            ..self
        }
    }

    /// Take single samples from the longest segment still above its floor
    /// until the active segments fit `period`. Rounding after scaling can
    /// overshoot by a few samples; the floors alone may still not fit.
    fn trim_to(&mut self, period: usize) {
        while self.active_total() > period {
            let mut slots = [
                (&mut self.p, MIN_WAVE_SAMPLES),
                (&mut self.iso1, 0),
                (&mut self.qrs, MIN_QRS_SAMPLES),
                (&mut self.iso2, 0),
                (&mut self.t, MIN_WAVE_SAMPLES),
            ];
            match slots
                .iter_mut()
                .filter(|(len, floor)| **len > *floor)
                .max_by_key(|(len, _)| **len)
            {
                Some((len, _)) => **len -= 1,
                None => break,
            }
        }
    }

    fn scaled(self, scale: f64) -> Self {
        let s = |len: usize| round_count(len as f64 * scale);
        Self {
            p: s(self.p),
            iso1: s(self.iso1),
            qrs: s(self.qrs),
            iso2: s(self.iso2),
            t: s(self.t),
            rest: 0,
        }
    }
}

/// One cardiac period of samples (mV). Immutable once built; a parameter
/// change produces a new buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct BeatBuffer {
    samples: Box<[f32]>,
    segments: SegmentLengths,
}

impl BeatBuffer {
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn segments(&self) -> SegmentLengths {
        self.segments
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples.into_vec()
    }
}

impl Deref for BeatBuffer {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.samples
    }
}

/// Q, R and S for a complex of `len` samples peaking at `amp_r`.
pub fn qrs_complex(len: usize, amp_r: f32) -> Vec<f32> {
    let len = len.max(MIN_QRS_SAMPLES);
    let q_len = round_count(len as f64 * Q_FRACTION).max(1);
    let r_len = round_count(len as f64 * R_FRACTION).max(1);
    let s_len = len.saturating_sub(q_len + r_len).max(1);

    let q_depth = Q_DEPTH_OF_R * amp_r;
    let s_depth = S_DEPTH_OF_R * amp_r;

    let s_down_len = (s_len / 2).max(1);
    let s_up_len = s_len - s_down_len;

    let mut out = Vec::with_capacity(q_len + r_len + s_len);
    out.extend(ramp(0.0, -q_depth, q_len));
    out.extend(ramp(-q_depth, amp_r, r_len));
    out.extend(ramp(amp_r, -s_depth, s_down_len));
    out.extend(ramp(-s_depth, 0.0, s_up_len));
    out
}

/// Synthesize one beat. Total: degenerate inputs are clamped, never refused.
pub fn build_beat(params: &WaveformParams) -> BeatBuffer {
    let segments = SegmentLengths::plan(params);
    let period = period_samples(params.sampling_rate_hz, params.heart_rate_bpm);

    let mut samples = Vec::with_capacity(segments.total().max(period));
    samples.extend(half_sine(segments.p, params.amp_p));
    samples.extend(silence(segments.iso1));
    samples.extend(qrs_complex(segments.qrs, params.amp_r));
    samples.extend(silence(segments.iso2));
    samples.extend(half_sine(segments.t, params.amp_t));
    samples.extend(silence(segments.rest));

    // Only reachable when the minimum floors alone (2 + 3 + 2) overflow the
    // period; `plan` trims everything else to fit.
    samples.truncate(period);

    debug!(
        "built {}-sample beat at {} Hz / {} BPM: {:?}",
        samples.len(),
        params.sampling_rate_hz,
        params.heart_rate_bpm,
        segments
    );

    BeatBuffer {
        samples: samples.into_boxed_slice(),
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn resting() -> WaveformParams {
        WaveformParams::default()
    }

    #[test]
    fn resting_plan_needs_no_scaling() {
        let lengths = SegmentLengths::plan(&resting());
        assert_eq!(
            lengths,
            SegmentLengths {
                p: 20,
                iso1: 20,
                qrs: 25,
                iso2: 30,
                t: 40,
                rest: 115,
            }
        );
        assert_eq!(lengths.total(), 250);
    }

    #[test]
    fn fast_rate_compresses_proportionally() {
        let params = resting().with_heart_rate(220.0);
        let lengths = SegmentLengths::plan(&params);

        // scale = 68 / 135
        assert_eq!(lengths.p, 10);
        assert_eq!(lengths.iso1, 10);
        assert_eq!(lengths.qrs, 13);
        assert_eq!(lengths.iso2, 15);
        assert_eq!(lengths.t, 20);
        assert_eq!(lengths.rest, 0);
        assert!(lengths.active_total() <= 68);
    }

    #[test]
    fn rounding_overshoot_is_trimmed_from_longest_segment() {
        // Scaled lengths round to 12 + 20 + 14 + 30 + 25 = 101 in a
        // 100-sample period; the longest segment gives one back.
        let params = WaveformParams::new(100, 60.0)
            .with_durations(120.0, 140.0, 250.0)
            .with_isoelectric(200.0, 300.0);
        let lengths = SegmentLengths::plan(&params);

        assert_eq!(
            lengths,
            SegmentLengths {
                p: 12,
                iso1: 20,
                qrs: 14,
                iso2: 29,
                t: 25,
                rest: 0,
            }
        );

        let beat = build_beat(&params);
        assert_eq!(beat.len(), 100);
        assert!(beat[99].abs() < EPS, "beat ends on {}", beat[99]);
    }

    #[test]
    fn trimming_respects_floors() {
        let mut lengths = SegmentLengths {
            p: 2,
            iso1: 0,
            qrs: 4,
            iso2: 1,
            t: 3,
            rest: 0,
        };
        lengths.trim_to(7);
        assert_eq!((lengths.p, lengths.iso1, lengths.qrs, lengths.iso2, lengths.t), (2, 0, 3, 0, 2));

        // Floors alone overflow: stop at the floors
        lengths.trim_to(5);
        assert_eq!(lengths.active_total(), 7);
    }

    #[test]
    fn compression_keeps_minimum_floors() {
        let params = resting().with_heart_rate(3000.0);
        let lengths = SegmentLengths::plan(&params);

        assert!(lengths.p >= 2);
        assert!(lengths.qrs >= 3);
        assert!(lengths.t >= 2);
    }

    #[test]
    fn zero_durations_are_floored() {
        let params = resting()
            .with_durations(0.0, 0.0, 0.0)
            .with_isoelectric(0.0, -50.0);
        let lengths = SegmentLengths::plan(&params);

        assert_eq!((lengths.p, lengths.qrs, lengths.t), (2, 3, 2));
        assert_eq!((lengths.iso1, lengths.iso2), (0, 0));
        assert_eq!(lengths.total(), 250);
    }

    #[test]
    fn qrs_split_rounds_ties_to_even() {
        // 25 samples: Q = round(4.5) = 4, R = round(8.5) = 8, S = 13
        let qrs = qrs_complex(25, 5.0);
        assert_eq!(qrs.len(), 25);

        let q_depth = 1.0;
        assert!(qrs[0].abs() < EPS);
        // R ramp begins exactly where Q was heading
        assert!((qrs[4] + q_depth).abs() < EPS, "R start was {}", qrs[4]);
        // S down-ramp begins on the R peak
        assert!((qrs[12] - 5.0).abs() < EPS, "S start was {}", qrs[12]);
        // S up-ramp (7 samples) begins at the S trough
        assert!((qrs[18] + 2.25).abs() < EPS, "S trough was {}", qrs[18]);
    }

    #[test]
    fn qrs_has_negative_q_and_s_dips() {
        let qrs = qrs_complex(25, 5.0);
        let min = qrs.iter().copied().fold(f32::MAX, f32::min);
        let max = qrs.iter().copied().fold(f32::MIN, f32::max);

        assert!((min + 0.45 * 5.0).abs() < EPS);
        assert!((max - 5.0).abs() < EPS);
    }

    #[test]
    fn minimal_qrs_is_three_samples() {
        let qrs = qrs_complex(0, 1.0);
        assert_eq!(qrs.len(), 3);
        assert_eq!(qrs[0], 0.0);
        assert!((qrs[1] + 0.2).abs() < EPS);
        assert!((qrs[2] - 1.0).abs() < EPS);
    }

    #[test]
    fn beat_length_matches_period() {
        for bpm in [30.0, 60.0, 75.0, 110.0, 220.0, 400.0, 1000.0, 20_000.0] {
            let params = resting().with_heart_rate(bpm);
            let beat = build_beat(&params);
            assert_eq!(
                beat.len(),
                period_samples(params.sampling_rate_hz, bpm),
                "wrong length at {bpm} BPM"
            );
        }
    }

    #[test]
    fn resting_beat_layout() {
        let beat = build_beat(&resting());

        // P peak at the middle of its 20 samples lies between 9 and 10.
        assert!(beat[..20].iter().all(|&s| s >= -EPS && s <= 2.0 + EPS));
        assert!(beat[20..40].iter().all(|&s| s == 0.0));
        assert!(beat[65..95].iter().all(|&s| s == 0.0));
        assert!(beat[135..].iter().all(|&s| s == 0.0));
        assert_eq!(beat.samples().len() - 135, 115);
    }

    #[test]
    fn degenerate_rate_still_yields_a_sample() {
        let beat = build_beat(&resting().with_heart_rate(f32::INFINITY));
        assert_eq!(beat.len(), 1);
        assert_eq!(beat[0], 0.0);
    }
}
