pub mod dsp; // Stateless segment and timing primitives
pub mod error;
pub mod io;
pub mod signal; // ECG / respiration sources and the playback cursor

pub use error::ParamError;
#[cfg(feature = "serde")]
pub use error::PresetError;
pub use signal::{
    build_beat, BeatBuffer, EcgSource, RespirationParams, RespirationSource, Signal, SignalCursor,
    SignalKind, SignalParams, SignalSource, WaveformParams,
};

/// Largest pull the monitor makes from a source in one tick.
pub const MAX_STEP_SIZE: usize = 64;
