#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParamError;

/// Everything needed to synthesize one ECG beat.
///
/// Amplitudes are peak millivolts, durations are milliseconds. The Q and S
/// depths are not configurable; they follow the R amplitude.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformParams {
    pub sampling_rate_hz: u32,
    pub heart_rate_bpm: f32,

    pub amp_p: f32,
    pub amp_r: f32,
    pub amp_t: f32,

    pub p_duration_ms: f32,
    pub qrs_duration_ms: f32,
    pub t_duration_ms: f32,

    /// Flat segment between P and QRS.
    pub isoelectric1_ms: f32,
    /// Flat segment between QRS and T.
    pub isoelectric2_ms: f32,
}

impl Default for WaveformParams {
    fn default() -> Self {
        Self {
            sampling_rate_hz: 250,
            heart_rate_bpm: 60.0,
            amp_p: 2.0,
            amp_r: 5.0,
            amp_t: 3.0,
            p_duration_ms: 80.0,
            qrs_duration_ms: 100.0,
            t_duration_ms: 160.0,
            isoelectric1_ms: 80.0,
            isoelectric2_ms: 120.0,
        }
    }
}

impl WaveformParams {
    pub fn new(sampling_rate_hz: u32, heart_rate_bpm: f32) -> Self {
        Self {
            sampling_rate_hz,
            heart_rate_bpm,
            ..Self::default()
        }
    }

    pub fn with_sampling_rate(mut self, hz: u32) -> Self {
        self.sampling_rate_hz = hz;
        self
    }

    pub fn with_heart_rate(mut self, bpm: f32) -> Self {
        self.heart_rate_bpm = bpm;
        self
    }

    /// Peak amplitudes (mV) of the P wave, R spike and T wave.
    pub fn with_amplitudes(mut self, p: f32, r: f32, t: f32) -> Self {
        self.amp_p = p;
        self.amp_r = r;
        self.amp_t = t;
        self
    }

    /// Widths (ms) of the P wave, QRS complex and T wave.
    pub fn with_durations(mut self, p_ms: f32, qrs_ms: f32, t_ms: f32) -> Self {
        self.p_duration_ms = p_ms;
        self.qrs_duration_ms = qrs_ms;
        self.t_duration_ms = t_ms;
        self
    }

    /// Flat delays (ms) before and after the QRS complex.
    pub fn with_isoelectric(mut self, before_qrs_ms: f32, after_qrs_ms: f32) -> Self {
        self.isoelectric1_ms = before_qrs_ms;
        self.isoelectric2_ms = after_qrs_ms;
        self
    }

    /// Check raw settings before handing them to a source.
    ///
    /// The builder never calls this; it clamps whatever it is given. This is
    /// for front ends that want to refuse nonsense input up front.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.sampling_rate_hz == 0 {
            return Err(ParamError::InvalidSampleRate);
        }
        positive("heart rate", self.heart_rate_bpm)?;

        for (name, value) in [
            ("P amplitude", self.amp_p),
            ("R amplitude", self.amp_r),
            ("T amplitude", self.amp_t),
            ("P duration", self.p_duration_ms),
            ("QRS duration", self.qrs_duration_ms),
            ("T duration", self.t_duration_ms),
            ("PR delay", self.isoelectric1_ms),
            ("ST delay", self.isoelectric2_ms),
        ] {
            finite(name, value)?;
        }

        Ok(())
    }
}

/// Settings for the respiration trace.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RespirationParams {
    pub sampling_rate_hz: u32,
    pub breaths_per_minute: f32,
    /// Output gain applied to the normalized breath shape.
    pub amplitude: f32,
}

impl Default for RespirationParams {
    fn default() -> Self {
        Self {
            sampling_rate_hz: 100,
            breaths_per_minute: 12.0,
            amplitude: 1.0,
        }
    }
}

impl RespirationParams {
    pub fn new(sampling_rate_hz: u32, breaths_per_minute: f32) -> Self {
        Self {
            sampling_rate_hz,
            breaths_per_minute,
            ..Self::default()
        }
    }

    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        if self.sampling_rate_hz == 0 {
            return Err(ParamError::InvalidSampleRate);
        }
        positive("breathing rate", self.breaths_per_minute)?;
        finite("amplitude", self.amplitude)
    }
}

/// Settings for either kind of signal, tagged by kind.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "signal", rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalParams {
    Ecg(WaveformParams),
    Respiration(RespirationParams),
}

impl SignalParams {
    pub fn sampling_rate_hz(&self) -> u32 {
        match self {
            SignalParams::Ecg(p) => p.sampling_rate_hz,
            SignalParams::Respiration(p) => p.sampling_rate_hz,
        }
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        match self {
            SignalParams::Ecg(p) => p.validate(),
            SignalParams::Respiration(p) => p.validate(),
        }
    }
}

impl Default for SignalParams {
    fn default() -> Self {
        SignalParams::Ecg(WaveformParams::default())
    }
}

impl From<WaveformParams> for SignalParams {
    fn from(params: WaveformParams) -> Self {
        SignalParams::Ecg(params)
    }
}

impl From<RespirationParams> for SignalParams {
    fn from(params: RespirationParams) -> Self {
        SignalParams::Respiration(params)
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ParamError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamError::NonPositiveRate { name, value })
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), ParamError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamError::NotFinite { name, value })
    }
}
