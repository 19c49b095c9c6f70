//! Terminal host for the seek slider
//!
//! Renders the slider with ratatui and feeds it crossterm input.

pub mod demo;
pub mod input;
pub mod seek_bar;
pub mod theme;

pub use demo::{run_demo, DemoApp};
pub use seek_bar::{format_duration, SeekBar};
pub use theme::{current_theme, Theme};
