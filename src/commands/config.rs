//! Config subcommands handler

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use seekbar::ui::current_theme;
use seekbar::Config;

/// Resolve the config file location: `--config` wins over the default.
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::config_path()?),
    }
}

/// Load the configuration from `--config` or the default location.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    Ok(Config::load_from(&resolve_path(explicit)?)?)
}

/// Show the effective configuration as TOML.
pub fn handle_show(explicit: Option<&Path>) -> Result<()> {
    let config = load(explicit)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the config file location.
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(explicit)?.display());
    Ok(())
}

/// Write a config file with default values.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init(explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = resolve_path(explicit)?;
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    tracing::info!(path = %path.display(), "config written");

    let message = format!("Wrote {}", path.display());
    if std::io::stdout().is_terminal() {
        println!("{}", current_theme().success_text(&message));
    } else {
        println!("{}", message);
    }
    Ok(())
}
