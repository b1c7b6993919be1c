use log::debug;

use crate::dsp::timing::period_samples;

use super::{
    beat::build_beat,
    cursor::SignalCursor,
    params::{RespirationParams, SignalParams, WaveformParams},
    respiration::breath_shape,
};

/// A configurable, endlessly repeating sample stream.
///
/// `configure` rebuilds the underlying shape and rewinds playback. The
/// previous phase is discarded because the new cycle may not even have the
/// same length. `step` never fails; `step(0)` returns an empty vector.
pub trait SignalSource {
    type Params;

    fn configure(&mut self, params: Self::Params);

    fn step(&mut self, n: usize) -> Vec<f32>;

    /// Allocation-free `step`: fills the whole of `out`.
    fn step_into(&mut self, out: &mut [f32]);

    fn sampling_rate(&self) -> u32;
}

/// ECG trace: one synthesized beat looped end to end.
#[derive(Debug, Clone)]
pub struct EcgSource {
    params: WaveformParams,
    cursor: SignalCursor,
}

impl EcgSource {
    pub fn new(params: WaveformParams) -> Self {
        Self {
            params,
            cursor: SignalCursor::from_beat(build_beat(&params)),
        }
    }

    pub fn params(&self) -> &WaveformParams {
        &self.params
    }

    /// The beat currently being played.
    pub fn beat(&self) -> &[f32] {
        self.cursor.shape()
    }

    pub fn cursor(&self) -> &SignalCursor {
        &self.cursor
    }
}

impl Default for EcgSource {
    fn default() -> Self {
        Self::new(WaveformParams::default())
    }
}

impl SignalSource for EcgSource {
    type Params = WaveformParams;

    fn configure(&mut self, params: WaveformParams) {
        self.params = params;
        self.cursor = build_beat(&params).into();
    }

    fn step(&mut self, n: usize) -> Vec<f32> {
        self.cursor.step(n)
    }

    fn step_into(&mut self, out: &mut [f32]) {
        self.cursor.step_into(out)
    }

    fn sampling_rate(&self) -> u32 {
        self.params.sampling_rate_hz
    }
}

/// Respiration trace: a one-second breath shape replayed at the breathing
/// rate.
#[derive(Debug, Clone)]
pub struct RespirationSource {
    params: RespirationParams,
    cursor: SignalCursor,
}

impl RespirationSource {
    pub fn new(params: RespirationParams) -> Self {
        Self {
            params,
            cursor: Self::cursor_for(&params),
        }
    }

    pub fn params(&self) -> &RespirationParams {
        &self.params
    }

    pub fn cursor(&self) -> &SignalCursor {
        &self.cursor
    }

    fn cursor_for(params: &RespirationParams) -> SignalCursor {
        let period = period_samples(params.sampling_rate_hz, params.breaths_per_minute);
        debug!(
            "respiration at {} Hz / {} br/min: {period}-sample cycle",
            params.sampling_rate_hz, params.breaths_per_minute
        );
        SignalCursor::new(breath_shape(params.sampling_rate_hz), period).with_gain(params.amplitude)
    }
}

impl Default for RespirationSource {
    fn default() -> Self {
        Self::new(RespirationParams::default())
    }
}

impl SignalSource for RespirationSource {
    type Params = RespirationParams;

    fn configure(&mut self, params: RespirationParams) {
        self.params = params;
        self.cursor = Self::cursor_for(&params);
    }

    fn step(&mut self, n: usize) -> Vec<f32> {
        self.cursor.step(n)
    }

    fn step_into(&mut self, out: &mut [f32]) {
        self.cursor.step_into(out)
    }

    fn sampling_rate(&self) -> u32 {
        self.params.sampling_rate_hz
    }
}

/// Which kind of trace a `Signal` is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Ecg,
    Respiration,
}

impl SignalKind {
    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::Ecg => "ECG",
            SignalKind::Respiration => "Respiration",
        }
    }
}

/// Any supported trace behind one type.
#[derive(Debug, Clone)]
pub enum Signal {
    Ecg(EcgSource),
    Respiration(RespirationSource),
}

impl Signal {
    pub fn from_params(params: SignalParams) -> Self {
        match params {
            SignalParams::Ecg(p) => Signal::Ecg(EcgSource::new(p)),
            SignalParams::Respiration(p) => Signal::Respiration(RespirationSource::new(p)),
        }
    }

    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::Ecg(_) => SignalKind::Ecg,
            Signal::Respiration(_) => SignalKind::Respiration,
        }
    }

    pub fn params(&self) -> SignalParams {
        match self {
            Signal::Ecg(src) => SignalParams::Ecg(*src.params()),
            Signal::Respiration(src) => SignalParams::Respiration(*src.params()),
        }
    }

    /// Samples in one cycle of the current trace.
    pub fn period(&self) -> usize {
        match self {
            Signal::Ecg(src) => src.cursor().period(),
            Signal::Respiration(src) => src.cursor().period(),
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Signal::Ecg(src) => src.cursor().position(),
            Signal::Respiration(src) => src.cursor().position(),
        }
    }
}

impl Default for Signal {
    fn default() -> Self {
        Signal::Ecg(EcgSource::default())
    }
}

impl SignalSource for Signal {
    type Params = SignalParams;

    /// Reconfigure in place, switching variant if the params are for the
    /// other kind of trace.
    fn configure(&mut self, params: SignalParams) {
        match (self, params) {
            (Signal::Ecg(src), SignalParams::Ecg(p)) => src.configure(p),
            (Signal::Respiration(src), SignalParams::Respiration(p)) => src.configure(p),
            (this, params) => *this = Signal::from_params(params),
        }
    }

    fn step(&mut self, n: usize) -> Vec<f32> {
        match self {
            Signal::Ecg(src) => src.step(n),
            Signal::Respiration(src) => src.step(n),
        }
    }

    fn step_into(&mut self, out: &mut [f32]) {
        match self {
            Signal::Ecg(src) => src.step_into(out),
            Signal::Respiration(src) => src.step_into(out),
        }
    }

    fn sampling_rate(&self) -> u32 {
        match self {
            Signal::Ecg(src) => src.sampling_rate(),
            Signal::Respiration(src) => src.sampling_rate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ecg_configure_rewinds_to_first_sample() {
        let mut ecg = EcgSource::default();
        ecg.step(37);

        let params = WaveformParams::default().with_heart_rate(90.0);
        ecg.configure(params);

        assert_eq!(ecg.cursor().position(), 0);
        let first = ecg.step(1)[0];
        assert_eq!(first, ecg.beat()[0]);
        assert_eq!(ecg.beat().len(), 167);
    }

    #[test]
    fn ecg_is_periodic() {
        let mut ecg = EcgSource::default();
        let period = ecg.beat().len();
        let first = ecg.step(period);
        let second = ecg.step(period);
        assert_eq!(first, second);
    }

    #[test]
    fn respiration_period_follows_breathing_rate() {
        let src = RespirationSource::new(RespirationParams::new(100, 12.0));
        assert_eq!(src.cursor().period(), 500);
        assert_eq!(src.cursor().shape().len(), 100);
    }

    #[test]
    fn respiration_amplitude_scales_output() {
        let mut unit = RespirationSource::new(RespirationParams::new(50, 20.0));
        let mut doubled =
            RespirationSource::new(RespirationParams::new(50, 20.0).with_amplitude(2.0));

        let a = unit.step(150);
        let b = doubled.step(150);
        for (x, y) in a.iter().zip(&b) {
            assert!((2.0 * x - y).abs() < 1e-6);
        }
    }

    #[test]
    fn signal_switches_variant_on_configure() {
        let mut signal = Signal::default();
        assert_eq!(signal.kind(), SignalKind::Ecg);

        signal.configure(RespirationParams::default().into());
        assert_eq!(signal.kind(), SignalKind::Respiration);
        assert_eq!(signal.sampling_rate(), 100);
        assert_eq!(signal.period(), 500);

        signal.configure(WaveformParams::default().into());
        assert_eq!(signal.kind(), SignalKind::Ecg);
        assert_eq!(signal.period(), 250);
    }

    #[test]
    fn signal_step_into_matches_step() {
        let mut a = Signal::default();
        let mut b = Signal::default();

        let mut buf = [0.0f32; 64];
        a.step_into(&mut buf);
        assert_eq!(buf.to_vec(), b.step(64));
        assert_eq!(a.position(), b.position());
    }
}
