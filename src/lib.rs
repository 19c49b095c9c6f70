//! Progress slider controller for video players.
//!
//! The [`slider`] module holds the controller and its parts: device gate,
//! freeze state machine, range mapping and accessibility notices. The
//! [`ui`] module hosts the controller in a terminal for the `seekbar`
//! binary.
//!
//! # Usage
//!
//! ```
//! use seekbar::player::{PlaybackTime, SimulatedPlayer};
//! use seekbar::slider::{
//!     ControllerSettings, DeviceGate, ProgressSlider, RangeControl, StaticProbe, TrackSlider,
//! };
//!
//! let mut player = SimulatedPlayer::new(120.0);
//! let mut slider = ProgressSlider::construct(
//!     &StaticProbe::non_touch(),
//!     &DeviceGate::default(),
//!     TrackSlider::new(40),
//!     ControllerSettings::default(),
//! )
//! .expect("desktop devices get a slider");
//!
//! slider.update_play_time(PlaybackTime::new(20.0, 120.0));
//! assert_eq!(slider.slider().value(), 20.0);
//!
//! slider.on_stop(60.0, &mut player);
//! assert!(slider.is_frozen());
//! assert_eq!(player.position(), 60.0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod player;
pub mod slider;
pub mod ui;

pub use config::Config;
pub use error::{ChapterError, ConfigError};
pub use player::{PlaybackTime, Player, SimulatedPlayer};
pub use slider::{EndNotice, ProgressSlider, RangeParams};
