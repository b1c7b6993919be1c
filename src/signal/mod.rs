//! Physiological signal sources built on the `dsp` primitives.
//!
//! Each source pairs a shape builder with the shared `SignalCursor`: the
//! builder produces one cycle of samples from a parameter set, the cursor
//! streams it forever. Reconfiguring a source rebuilds the cycle from scratch.

/// ECG beat synthesis and segment planning.
pub mod beat;
/// Cyclic read cursor shared by every source.
pub mod cursor;
/// Parameter sets and their validation.
pub mod params;
/// Breath shape synthesis.
pub mod respiration;
/// `SignalSource` trait and the ECG / respiration sources.
pub mod source;

pub use beat::{build_beat, BeatBuffer, SegmentLengths};
pub use cursor::SignalCursor;
pub use params::{RespirationParams, SignalParams, WaveformParams};
pub use source::{EcgSource, RespirationSource, Signal, SignalKind, SignalSource};
