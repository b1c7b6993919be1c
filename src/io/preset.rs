//! JSON presets for signal settings.
//!
//! A preset is the set of values a front panel would commit with "apply",
//! stored so the same trace can be brought back later:
//!
//! ```json
//! {
//!   "name": "tachycardia",
//!   "params": { "signal": "ecg", "sampling_rate_hz": 250, "heart_rate_bpm": 150.0, ... }
//! }
//! ```
//!
//! Fields missing from `params` take their defaults. Loading validates the
//! settings; saving writes them as they are.

use std::{fs, path::Path};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{error::PresetError, signal::SignalParams};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preset {
    #[serde(default)]
    pub name: String,
    pub params: SignalParams,
}

impl Preset {
    pub fn new(name: impl Into<String>, params: impl Into<SignalParams>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, PresetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PresetError> {
        let preset: Preset = serde_json::from_str(json)?;
        preset.params.validate()?;
        Ok(preset)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PresetError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        info!("saved preset {:?} to {}", self.name, path.display());
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let preset = Self::from_json(&fs::read_to_string(path)?)?;
        info!("loaded preset {:?} from {}", preset.name, path.display());
        Ok(preset)
    }
}
