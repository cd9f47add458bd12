//! Headless driver settings
//!
//! Gameplay tuning is fixed in [`crate::consts`]; these only control how the
//! native driver runs a game. Stored as JSON.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Why settings could not be loaded
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read settings: {e}"),
            Self::Parse(e) => write!(f, "malformed settings: {e}"),
            Self::Invalid(reason) => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the scripted input generator
    pub seed: u64,
    /// Stop after this many frames even if the game is still running
    pub max_frames: u32,
    /// Fixed frame time in seconds
    pub frame_dt: f32,
    /// Frames a random movement intent is held before re-rolling
    pub intent_hold_frames: u32,
    /// Log a state line every N frames (0 = never)
    pub report_every: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            max_frames: 60 * 60 * 5,
            frame_dt: 1.0 / 60.0,
            intent_hold_frames: 20,
            report_every: 600,
        }
    }
}

impl Settings {
    /// Load from a JSON file; missing fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.frame_dt.is_finite() && self.frame_dt > 0.0) {
            return Err(SettingsError::Invalid("frame_dt must be a positive number"));
        }
        if self.intent_hold_frames == 0 {
            return Err(SettingsError::Invalid("intent_hold_frames must be at least 1"));
        }
        Ok(())
    }
}
