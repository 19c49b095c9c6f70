//! Chapters highlighted on the seek slider.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::range::{compute_range, RangeParams};
use crate::error::ChapterError;

/// A titled sub-interval of the media timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Start in seconds
    pub start: f64,
    /// End in seconds
    pub end: f64,
    #[serde(default)]
    pub title: Option<String>,
}

impl Chapter {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether `time` falls inside the chapter (end exclusive).
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time < self.end
    }

    /// Highlight range of this chapter on a timeline of `duration` seconds.
    pub fn range(&self, duration: f64) -> Option<RangeParams> {
        compute_range(self.start, self.end, duration)
    }
}

impl FromStr for Chapter {
    type Err = ChapterError;

    /// Parse `START-END` or `START-END:Title`, times in seconds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (span, title) = match s.split_once(':') {
            Some((span, title)) => (span, Some(title.trim().to_string())),
            None => (s, None),
        };
        let (start, end) = span
            .split_once('-')
            .ok_or_else(|| ChapterError::MissingSeparator(s.to_string()))?;
        let start = parse_seconds(start)?;
        let end = parse_seconds(end)?;
        if end < start {
            return Err(ChapterError::Reversed { start, end });
        }
        Ok(Self {
            start,
            end,
            title: title.filter(|t| !t.is_empty()),
        })
    }
}

fn parse_seconds(value: &str) -> Result<f64, ChapterError> {
    let value = value.trim();
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ChapterError::InvalidTime(value.to_string())),
    }
}

/// Parse a comma-separated chapter list such as `0-30:Intro,30-95`.
pub fn parse_chapters(list: &str) -> Result<Vec<Chapter>, ChapterError> {
    list.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect()
}
