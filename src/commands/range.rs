//! Range subcommand handler

use anyhow::{anyhow, Result};

use seekbar::slider::compute_range;

/// Print the highlight range of `[start, end]` on a `duration` timeline.
pub fn handle(start: f64, end: f64, duration: f64, json: bool) -> Result<()> {
    let params = compute_range(start, end, duration)
        .ok_or_else(|| anyhow!("duration must be greater than zero"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&params)?);
    } else {
        println!("left: {}", params.left_css());
        println!("width: {}", params.width_css());
    }
    Ok(())
}
