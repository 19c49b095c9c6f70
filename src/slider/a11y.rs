//! Accessibility notifications through the slider handle.
//!
//! Screen readers announce the handle's title when it gains focus, so the
//! end of playback is announced by retitling the handle and focusing it.

use serde::{Deserialize, Serialize};

use super::widget::SliderHandle;

/// Parameters of an end-of-media notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EndNotice {
    /// Whether playback reached the end of the media
    pub end: bool,
}

impl EndNotice {
    pub const ENDED: Self = Self { end: true };
    pub const PLAYING: Self = Self { end: false };
}

/// Labels written to the handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleLabels {
    /// Title once playback reached the end
    pub ended_label: String,
    /// Title during playback
    pub position_label: String,
}

impl Default for HandleLabels {
    fn default() -> Self {
        Self {
            ended_label: "video ended".to_string(),
            position_label: "video position".to_string(),
        }
    }
}

/// Writes accessibility labels to the slider handle.
#[derive(Debug, Clone, Default)]
pub struct AccessibilityNotifier {
    labels: HandleLabels,
}

impl AccessibilityNotifier {
    pub fn new(labels: HandleLabels) -> Self {
        Self { labels }
    }

    /// Retitle the handle; on end of media also focus it so the new title
    /// is announced.
    pub fn notify_end(&self, handle: &mut dyn SliderHandle, notice: EndNotice) {
        if notice.end {
            handle.set_title(&self.labels.ended_label);
            handle.focus();
        } else {
            handle.set_title(&self.labels.position_label);
        }
    }

    /// Write the spoken form of `seconds` as the handle's value text.
    pub fn describe_position(&self, handle: &mut dyn SliderHandle, seconds: f64) {
        handle.set_value_text(&describe_time(seconds));
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Spoken form of a playback position, e.g. `"1 hour 2 minutes 5 seconds"`.
///
/// Fractions are truncated. Negative and non-finite values read as zero.
pub fn describe_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(plural(minutes, "minute"));
    }
    if secs > 0 || parts.is_empty() {
        parts.push(plural(secs, "second"));
    }
    parts.join(" ")
}
