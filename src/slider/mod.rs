//! Seek slider core
//!
//! Everything here is independent of the terminal: the controller drives any
//! [`RangeControl`] implementation and seeks through any [`crate::player::Player`].
//!
//! # Architecture
//!
//! - `range`: chapter/segment highlight ranges (pure)
//! - `chapter`: chapter list parsing
//! - `device`: device gate deciding whether a slider exists at all
//! - `widget`: range primitive traits and the terminal `TrackSlider`
//! - `timer`: cancellable timers on a virtual clock
//! - `freeze`: freeze state machine around drags
//! - `a11y`: handle titles and focus notifications
//! - `controller`: `ProgressSlider`, which ties the above together

pub mod a11y;
pub mod chapter;
pub mod controller;
pub mod device;
pub mod freeze;
pub mod range;
pub mod timer;
pub mod widget;

pub use a11y::{AccessibilityNotifier, EndNotice, HandleLabels};
pub use chapter::{parse_chapters, Chapter};
pub use controller::{ControllerSettings, ProgressSlider};
pub use device::{DeviceGate, DeviceProbe, StaticProbe};
pub use freeze::{FreezeController, FreezeState, DEFAULT_UNFREEZE_DELAY};
pub use range::{compute_range, RangeParams};
pub use timer::{TimerId, TimerQueue};
pub use widget::{
    RangeControl, RangeMode, SliderEvent, SliderHandle, SliderOptions, TrackHandle, TrackSlider,
};
