//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Video seek slider controller with a terminal demo
#[derive(Debug, Parser)]
#[command(name = "seekbar", version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a simulated video with an interactive seek slider
    Demo(DemoArgs),

    /// Print the highlight range of an interval on a timeline
    Range(RangeArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Length of the simulated video in seconds
    #[arg(long, value_name = "SECONDS")]
    pub duration: Option<f64>,

    /// Pretend to run on this touch device (e.g. iPhone, iPad)
    #[arg(long, value_name = "DEVICE")]
    pub touch_device: Option<String>,

    /// Chapters as START-END[:Title], comma separated
    #[arg(long, value_name = "LIST")]
    pub chapters: Option<String>,

    /// Append logs to this file while the demo runs
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RangeArgs {
    /// Interval start in seconds
    #[arg(allow_negative_numbers = true)]
    pub start: f64,

    /// Interval end in seconds
    #[arg(allow_negative_numbers = true)]
    pub end: f64,

    /// Total duration in seconds
    #[arg(allow_negative_numbers = true)]
    pub duration: f64,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration as TOML
    Show,

    /// Print the config file location
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
