use super::beat::BeatBuffer;

/*
Cyclic Playback Cursor
======================

A cursor streams a fixed shape forever, a few samples at a time:

    shape   [ s0 s1 s2 ... s(L-1) ]
    index    0  1  2  ...            period-1 │ 0  1  2 ...
                                              └ wraps

  output[k] = gain * shape[index % L]
  index     = (index + 1) % period

For an ECG beat `period == L` and the cursor simply loops the buffer. For
respiration the period comes from the breathing rate while the shape is a
fixed one-second grid; the two lengths are independent. When the period is
longer than the shape, the lookup wraps inside the shape as well.

The only state is `index`. Pulling n samples in one call or in several
smaller calls yields the same stream.
*/

#[derive(Debug, Clone)]
pub struct SignalCursor {
    shape: Box<[f32]>,
    period: usize,
    index: usize,
    gain: f32,
}

impl SignalCursor {
    /// Loop `shape` with a cycle of `period` samples (floored at 1).
    pub fn new(shape: Vec<f32>, period: usize) -> Self {
        Self {
            shape: shape.into_boxed_slice(),
            period: period.max(1),
            index: 0,
            gain: 1.0,
        }
    }

    /// Loop a beat buffer end to end.
    pub fn from_beat(beat: BeatBuffer) -> Self {
        let period = beat.len();
        Self::new(beat.into_samples(), period)
    }

    /// Scale every emitted sample.
    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    /// Return the next `n` samples and advance.
    pub fn step(&mut self, n: usize) -> Vec<f32> {
        let mut out = vec![0.0; n];
        self.step_into(&mut out);
        out
    }

    /// Fill `out` with the next `out.len()` samples and advance.
    ///
    /// Allocation-free counterpart of `step` for render loops.
    pub fn step_into(&mut self, out: &mut [f32]) {
        if self.shape.is_empty() {
            out.fill(0.0);
            self.index = (self.index + out.len()) % self.period;
            return;
        }

        let len = self.shape.len();
        for sample in out.iter_mut() {
            *sample = self.gain * self.shape[self.index % len];
            self.index += 1;
            if self.index >= self.period {
                self.index = 0;
            }
        }
    }

    /// Rewind to the start of the cycle.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Current read position within `[0, period)`.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn shape(&self) -> &[f32] {
        &self.shape
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }
}

impl From<BeatBuffer> for SignalCursor {
    fn from(beat: BeatBuffer) -> Self {
        SignalCursor::from_beat(beat)
    }
}
