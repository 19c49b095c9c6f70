//! Input handling for the terminal host.
//!
//! Turns crossterm mouse and key events into slider events (through the
//! [`TrackSlider`] pointer model) or host actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::slider::{RangeControl, SliderEvent, TrackSlider};

/// What the host should do after an input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputResult {
    /// Nothing to do
    Continue,
    /// Exit the demo
    Quit,
    /// Toggle play/pause
    TogglePlay,
    /// The slider reported events for the controller
    Slider(Vec<SliderEvent>),
    /// The terminal was resized
    Resize(u16, u16),
}

fn slider_result(events: Vec<SliderEvent>) -> InputResult {
    if events.is_empty() {
        InputResult::Continue
    } else {
        InputResult::Slider(events)
    }
}

/// Handle any input event.
///
/// # Arguments
/// * `event` - The crossterm event
/// * `slider` - The slider, if the device has one
/// * `track` - Screen area of the seek bar row
/// * `step` - Seconds moved per arrow key press
pub fn handle_event(
    event: Event,
    slider: Option<&mut TrackSlider>,
    track: Rect,
    step: f64,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, slider, step),
        Event::Mouse(mouse) => match slider {
            Some(slider) => handle_mouse_event(mouse, slider, track),
            None => InputResult::Continue,
        },
        Event::Resize(cols, rows) => InputResult::Resize(cols, rows),
        _ => InputResult::Continue, // Ignore focus events, paste, etc.
    }
}

/// Handle a keyboard event.
pub fn handle_key_event(
    key: KeyEvent,
    slider: Option<&mut TrackSlider>,
    step: f64,
) -> InputResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Char(' ') => InputResult::TogglePlay,
        KeyCode::Left => step_slider(slider, -step),
        KeyCode::Right => step_slider(slider, step),
        KeyCode::Home => match slider {
            Some(slider) => {
                let delta = -slider.value();
                slider_result(slider.step_by(delta))
            }
            None => InputResult::Continue,
        },
        KeyCode::End => match slider {
            Some(slider) => {
                let delta = slider.max() - slider.value();
                slider_result(slider.step_by(delta))
            }
            None => InputResult::Continue,
        },
        _ => InputResult::Continue,
    }
}

fn step_slider(slider: Option<&mut TrackSlider>, delta: f64) -> InputResult {
    match slider {
        Some(slider) => slider_result(slider.step_by(delta)),
        None => InputResult::Continue,
    }
}

/// Handle a mouse event.
///
/// A left press on the seek bar row starts a drag; drags and the release
/// are tracked anywhere on screen, with the column clamped to the track.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    slider: &mut TrackSlider,
    track: Rect,
) -> InputResult {
    let column = mouse.column.saturating_sub(track.x);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let on_track = mouse.row == track.y
                && mouse.column >= track.x
                && mouse.column < track.x + track.width;
            if on_track {
                slider_result(slider.press(column))
            } else {
                InputResult::Continue
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => slider_result(slider.drag(column)),
        MouseEventKind::Up(MouseButton::Left) => slider_result(slider.release(column)),
        _ => InputResult::Continue,
    }
}
