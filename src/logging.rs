//! Tracing subscriber setup for the binary.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Where log output goes.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Standard error (non-interactive commands)
    Stderr,
    /// Append to a file (the interactive demo owns the terminal)
    File(&'a Path),
    /// No subscriber
    Off,
}

fn env_filter(verbose: bool) -> EnvFilter {
    std::env::var("SEEKBAR_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("info")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        )
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(verbose: bool, target: LogTarget<'_>) {
    let builder = FmtSubscriber::builder().with_env_filter(env_filter(verbose));

    let result = match target {
        LogTarget::Off => return,
        LogTarget::Stderr => {
            tracing::subscriber::set_global_default(builder.with_writer(std::io::stderr).finish())
        }
        LogTarget::File(path) => {
            let file = match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => file,
                Err(err) => {
                    eprintln!("Failed to open log file {}: {}", path.display(), err);
                    return;
                }
            };
            tracing::subscriber::set_global_default(
                builder.with_ansi(false).with_writer(Mutex::new(file)).finish(),
            )
        }
    };

    if let Err(err) = result {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
