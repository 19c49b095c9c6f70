//! Error types.
//!
//! The slider core never fails; these cover configuration files and
//! command-line input.

use std::path::PathBuf;

/// Errors loading or saving the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user configuration directory")]
    NoConfigDir,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors parsing a chapter argument such as `10-20:Intro`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChapterError {
    #[error("Chapter '{0}' must be written as START-END")]
    MissingSeparator(String),

    #[error("Invalid chapter time '{0}'")]
    InvalidTime(String),

    #[error("Chapter ends before it starts (end {end} < start {start})")]
    Reversed { start: f64, end: f64 },
}
