//! Theme for the terminal host
//!
//! Centralizes colors: ratatui styles for the seek bar and ANSI escape codes
//! for plain CLI output.

use ratatui::style::{Color, Modifier, Style};

/// Colors used by the seek bar and the demo screen.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color
    pub text_primary: Color,
    /// Secondary/dimmed text color (footer, remaining track)
    pub text_secondary: Color,
    /// Played part of the track
    pub accent: Color,
    /// Handle while time updates move it
    pub handle: Color,
    /// Handle while the user owns it
    pub handle_frozen: Color,
    /// Chapter boundary markers
    pub marker: Color,
    /// Background of the chapter under the handle
    pub chapter_highlight: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::terminal()
    }
}

impl Theme {
    /// Standard ANSI colors, matching the terminal palette.
    pub fn terminal() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            handle: Color::White,
            handle_frozen: Color::Yellow,
            marker: Color::Yellow,
            chapter_highlight: Color::Indexed(236),
            error: Color::Red,
            success: Color::Green,
        }
    }

    // Style helpers

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style of the handle; frozen handles are bold and recolored.
    pub fn handle_style(&self, frozen: bool) -> Style {
        if frozen {
            Style::default()
                .fg(self.handle_frozen)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.handle)
        }
    }

    pub fn marker_style(&self) -> Style {
        Style::default().fg(self.marker)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    // ANSI color helpers for CLI output

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // Other colors fall back to no color
        _ => "",
    }
}

/// Theme used by the binary.
pub fn current_theme() -> Theme {
    Theme::default()
}
