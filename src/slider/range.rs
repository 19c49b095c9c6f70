//! Range mapping for chapter and segment highlighting.
//!
//! Converts a time interval inside a media timeline into left-offset and
//! width percentages of the slider track.

use std::fmt;

use serde::{Serialize, Serializer};

/// Position and width of a highlighted interval, as percentages of the track.
///
/// Values are plain `f64` division results: nothing is rounded or clamped, so
/// inconsistent input (an end past the duration) yields values above 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeParams {
    /// Offset of the interval start from the track start
    #[serde(serialize_with = "serialize_percent")]
    pub left: f64,
    /// Length of the interval
    #[serde(serialize_with = "serialize_percent")]
    pub width: f64,
}

impl RangeParams {
    /// Left offset as a CSS-style percentage string, e.g. `"6.666666666666667%"`.
    pub fn left_css(&self) -> String {
        format_percent(self.left)
    }

    /// Width as a CSS-style percentage string.
    pub fn width_css(&self) -> String {
        format_percent(self.width)
    }
}

impl fmt::Display for RangeParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "left: {}, width: {}", self.left_css(), self.width_css())
    }
}

/// Format a percentage using the shortest round-trip decimal form.
///
/// # Examples
///
/// ```
/// use seekbar::slider::range::format_percent;
///
/// assert_eq!(format_percent(90.0), "90%");
/// assert_eq!(format_percent(12.5), "12.5%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

fn serialize_percent<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_percent(*value))
}

/// Compute the highlight range for `[start_time, end_time]` on a timeline of
/// `duration` seconds.
///
/// Returns `None` when `duration` is zero, negative or not finite: there is
/// no track to place the interval on.
///
/// # Arguments
/// * `start_time` - Interval start in seconds
/// * `end_time` - Interval end in seconds
/// * `duration` - Total media duration in seconds
pub fn compute_range(start_time: f64, end_time: f64, duration: f64) -> Option<RangeParams> {
    if !duration.is_finite() || duration <= 0.0 {
        return None;
    }

    Some(RangeParams {
        left: start_time / duration * 100.0,
        width: (end_time - start_time) / duration * 100.0,
    })
}
