//! Shared helpers for integration tests

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

use seekbar::player::SimulatedPlayer;
use seekbar::slider::{ControllerSettings, DeviceGate, ProgressSlider, StaticProbe, TrackSlider};

/// Run the seekbar CLI and capture (stdout, stderr, exit code).
pub fn run_seekbar(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_seekbar"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("SEEKBAR_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute seekbar");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// A temporary directory with a config file path inside it (not created).
pub fn temp_config() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("seekbar").join("config.toml");
    (dir, path)
}

/// A desktop slider on a 101-cell track, so each cell is one percent.
pub fn desktop_slider() -> ProgressSlider<TrackSlider> {
    ProgressSlider::construct(
        &StaticProbe::non_touch(),
        &DeviceGate::default(),
        TrackSlider::new(101),
        ControllerSettings::default(),
    )
    .expect("desktop devices get a slider")
}

/// A paused simulated player with immediate seeks.
pub fn player(duration: f64) -> SimulatedPlayer {
    SimulatedPlayer::new(duration)
}
