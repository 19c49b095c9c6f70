//! Integration tests for the config subcommands

use std::fs;

use seekbar::Config;

use crate::helpers::{run_seekbar, temp_config};

// ============================================================================
// config path
// ============================================================================

#[test]
fn config_path_honors_explicit_flag() {
    let (_dir, path) = temp_config();
    let path_arg = path.to_string_lossy().to_string();

    let (stdout, _stderr, exit_code) = run_seekbar(&["config", "path", "--config", &path_arg]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim_end(), path_arg);
}

// ============================================================================
// config show
// ============================================================================

#[test]
fn config_show_without_file_prints_defaults() {
    let (_dir, path) = temp_config();
    let path_arg = path.to_string_lossy().to_string();

    let (stdout, _stderr, exit_code) = run_seekbar(&["config", "show", "--config", &path_arg]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[slider]"));
    assert!(stdout.contains("unfreeze_delay_ms = 200"));
    assert!(stdout.contains("video ended"));
    assert!(!path.exists());
}

#[test]
fn config_show_reflects_file_values() {
    let (_dir, path) = temp_config();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[slider]\nunfreeze_delay_ms = 350\n").unwrap();
    let path_arg = path.to_string_lossy().to_string();

    let (stdout, _stderr, exit_code) = run_seekbar(&["config", "show", "--config", &path_arg]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("unfreeze_delay_ms = 350"));
    assert!(stdout.contains("keyboard_step_secs = 5.0"));
}

#[test]
fn config_show_rejects_invalid_toml() {
    let (_dir, path) = temp_config();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[slider\n").unwrap();
    let path_arg = path.to_string_lossy().to_string();

    let (_stdout, stderr, exit_code) = run_seekbar(&["config", "show", "--config", &path_arg]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("config.toml"));
}

// ============================================================================
// config init
// ============================================================================

#[test]
fn config_init_writes_loadable_defaults() {
    let (_dir, path) = temp_config();
    let path_arg = path.to_string_lossy().to_string();

    let (stdout, _stderr, exit_code) = run_seekbar(&["config", "init", "--config", &path_arg]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Wrote"));
    assert!(path.exists());

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.slider.unfreeze_delay_ms, 200);
    assert_eq!(config.slider.excluded_devices, vec!["iPhone".to_string()]);
}

#[test]
fn config_init_refuses_to_overwrite() {
    let (_dir, path) = temp_config();
    let path_arg = path.to_string_lossy().to_string();

    let (_stdout, _stderr, exit_code) = run_seekbar(&["config", "init", "--config", &path_arg]);
    assert_eq!(exit_code, 0);
    fs::write(&path, "[slider]\nunfreeze_delay_ms = 999\n").unwrap();

    let (_stdout, stderr, exit_code) = run_seekbar(&["config", "init", "--config", &path_arg]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("already exists"));
    assert!(stderr.contains("--force"));
    assert!(fs::read_to_string(&path).unwrap().contains("999"));
}

#[test]
fn config_init_force_overwrites() {
    let (_dir, path) = temp_config();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[slider]\nunfreeze_delay_ms = 999\n").unwrap();
    let path_arg = path.to_string_lossy().to_string();

    let (_stdout, _stderr, exit_code) =
        run_seekbar(&["config", "init", "--force", "--config", &path_arg]);

    assert_eq!(exit_code, 0);
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.slider.unfreeze_delay_ms, 200);
}
