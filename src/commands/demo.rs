//! Demo subcommand handler

use anyhow::{bail, Result};

use seekbar::cli::DemoArgs;
use seekbar::slider::{parse_chapters, StaticProbe};
use seekbar::ui::run_demo;
use seekbar::Config;

/// Run the interactive demo.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &DemoArgs, config: &Config) -> Result<()> {
    let duration = args.duration.unwrap_or(config.demo.duration_secs);
    if !duration.is_finite() || duration <= 0.0 {
        bail!("duration must be greater than zero");
    }

    let chapters = match args.chapters.as_deref() {
        Some(list) => parse_chapters(list)?,
        None => Vec::new(),
    };

    let probe = match args.touch_device.as_deref() {
        Some(device) => StaticProbe::touch(device),
        None => StaticProbe::non_touch(),
    };

    run_demo(config, &probe, chapters, duration)
}
