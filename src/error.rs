//! Error types for the edges of the crate.
//!
//! Synthesis itself is total: `configure` and `step` clamp instead of failing.
//! Errors only exist where outside input arrives, i.e. validating raw settings
//! before they reach a source, and reading or writing presets.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("sampling rate must be greater than zero")]
    InvalidSampleRate,
    #[error("{name} must be a finite number greater than zero, got {value}")]
    NonPositiveRate { name: &'static str, value: f32 },
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f32 },
}

#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to access preset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed preset: {0}")]
    Format(#[from] serde_json::Error),
    #[error("preset holds invalid settings: {0}")]
    Invalid(#[from] ParamError),
}
