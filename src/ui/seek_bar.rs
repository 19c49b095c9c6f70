//! Seek bar widget for the terminal host.
//!
//! Draws a [`TrackSlider`] as one row of cells: played part, handle,
//! remaining part, chapter boundary markers, and a background highlight on
//! the chapter under the handle.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::slider::{Chapter, RangeControl, RangeParams, TrackSlider};
use crate::ui::theme::Theme;

/// Format a duration in seconds to MM:SS format.
///
/// # Arguments
/// * `seconds` - Duration in seconds
///
/// # Returns
/// A string in MM:SS format
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// What a single track cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackCell {
    Played,
    Handle,
    Remaining,
    /// Chapter boundary
    Marker,
}

impl TrackCell {
    fn symbol(self) -> &'static str {
        match self {
            Self::Played => "━",
            Self::Handle => "⏺",
            Self::Remaining => "─",
            Self::Marker => "◆",
        }
    }
}

fn column_of(percent: f64, width: u16) -> u16 {
    if width <= 1 {
        return 0;
    }
    let last = (width - 1) as f64;
    ((percent / 100.0).clamp(0.0, 1.0) * last).round() as u16
}

/// Columns `[start, end)` covered by a highlight range.
pub fn range_columns(range: &RangeParams, width: u16) -> (u16, u16) {
    let start = (range.left / 100.0 * width as f64).floor();
    let end = ((range.left + range.width) / 100.0 * width as f64).ceil();
    let clamp = |v: f64| v.clamp(0.0, width as f64) as u16;
    (clamp(start), clamp(end))
}

/// Build the cells of a track `width` cells wide.
///
/// # Arguments
/// * `width` - Track width in cells
/// * `fraction` - Handle position as a fraction of the track
/// * `duration` - Track maximum, used to place chapter markers
/// * `chapters` - Chapters whose start gets a marker
///
/// A marker sits on the first cell of the chapter's [`range_columns`] span, so
/// it always lines up with the chapter highlight. The handle takes precedence
/// over markers; a chapter starting at zero has no marker.
pub fn build_track_cells(
    width: u16,
    fraction: f64,
    duration: f64,
    chapters: &[Chapter],
) -> Vec<TrackCell> {
    if width == 0 {
        return Vec::new();
    }
    let handle = column_of(fraction * 100.0, width) as usize;

    let mut cells: Vec<TrackCell> = (0..width as usize)
        .map(|i| {
            if i < handle {
                TrackCell::Played
            } else {
                TrackCell::Remaining
            }
        })
        .collect();

    for chapter in chapters {
        let Some(range) = chapter.range(duration) else {
            continue;
        };
        if range.left <= 0.0 {
            continue;
        }
        let (col, _) = range_columns(&range, width);
        if let Some(cell) = cells.get_mut(col as usize) {
            *cell = TrackCell::Marker;
        }
    }

    cells[handle] = TrackCell::Handle;
    cells
}

/// Seek bar widget.
pub struct SeekBar<'a> {
    slider: &'a TrackSlider,
    chapters: &'a [Chapter],
    frozen: bool,
    theme: &'a Theme,
}

impl<'a> SeekBar<'a> {
    pub fn new(slider: &'a TrackSlider, theme: &'a Theme) -> Self {
        Self {
            slider,
            chapters: &[],
            frozen: false,
            theme,
        }
    }

    pub fn chapters(mut self, chapters: &'a [Chapter]) -> Self {
        self.chapters = chapters;
        self
    }

    /// Draw the handle in its frozen style.
    pub fn frozen(mut self, frozen: bool) -> Self {
        self.frozen = frozen;
        self
    }

    fn highlighted_columns(&self, width: u16) -> Option<(u16, u16)> {
        let value = self.slider.value();
        let chapter = self.chapters.iter().find(|c| c.contains(value))?;
        let range = chapter.range(self.slider.max())?;
        Some(range_columns(&range, width))
    }
}

impl Widget for SeekBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let cells = build_track_cells(
            area.width,
            self.slider.fraction(),
            self.slider.max(),
            self.chapters,
        );
        let highlight = self.highlighted_columns(area.width);

        for (i, cell) in cells.iter().enumerate() {
            let col = i as u16;
            let mut style = match cell {
                TrackCell::Played => self.theme.accent_style(),
                TrackCell::Handle => self.theme.handle_style(self.frozen),
                TrackCell::Remaining => self.theme.text_secondary_style(),
                TrackCell::Marker => self.theme.marker_style(),
            };
            if let Some((start, end)) = highlight {
                if col >= start && col < end {
                    style = style.bg(self.theme.chapter_highlight);
                }
            }
            if let Some(target) = buf.cell_mut((area.x + col, area.y)) {
                target.set_symbol(cell.symbol()).set_style(style);
            }
        }
    }
}
