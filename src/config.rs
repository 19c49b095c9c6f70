//! Configuration file handling
//!
//! Settings live in `<config dir>/seekbar/config.toml`. Every section and
//! field has a default, so a missing file or a partial file is valid.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::slider::{ControllerSettings, DeviceGate, HandleLabels};

/// Slider behavior settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Delay before time updates move the handle again after a drag
    pub unfreeze_delay_ms: u64,
    /// Touch device identifiers that get no slider
    pub excluded_devices: Vec<String>,
    /// Seconds moved per arrow key press
    pub keyboard_step_secs: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            unfreeze_delay_ms: 200,
            excluded_devices: vec![DeviceGate::PHONE.to_string()],
            keyboard_step_secs: 5.0,
        }
    }
}

/// Terminal demo settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Length of the simulated media
    pub duration_secs: f64,
    /// Event loop tick
    pub tick_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            duration_secs: 120.0,
            tick_ms: 50,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub slider: SliderConfig,
    pub accessibility: HandleLabels,
    pub demo: DemoConfig,
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("seekbar").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if the file
    /// does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn unfreeze_delay(&self) -> Duration {
        Duration::from_millis(self.slider.unfreeze_delay_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.demo.tick_ms.max(1))
    }

    pub fn device_gate(&self) -> DeviceGate {
        DeviceGate::new(self.slider.excluded_devices.clone())
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            unfreeze_delay: self.unfreeze_delay(),
            labels: self.accessibility.clone(),
        }
    }
}
