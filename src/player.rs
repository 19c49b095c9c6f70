//! Player side of the seek slider.
//!
//! The slider never plays media itself. It receives [`PlaybackTime`] updates
//! and asks a [`Player`] to seek. [`SimulatedPlayer`] is a clock-driven
//! stand-in used by the terminal host and the integration tests.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A time update reported by the player.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaybackTime {
    /// Current position in seconds
    pub time: f64,
    /// Total media duration in seconds
    pub duration: f64,
}

impl PlaybackTime {
    pub fn new(time: f64, duration: f64) -> Self {
        Self { time, duration }
    }
}

/// Seek target receiver.
///
/// Called on every drag move (preview) and when the drag stops (commit).
/// The slider does not verify that the seek happened.
pub trait Player {
    fn slide_seek(&mut self, time: f64);
}

/// What a [`SimulatedPlayer`] reports after advancing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// Position moved
    TimeUpdate(PlaybackTime),
    /// Playback reached the end
    Ended,
}

/// Media-less player whose position follows a clock.
///
/// Seeks take effect after `seek_latency`, like a real player acknowledging a
/// seek asynchronously: until then the old position keeps being reported.
#[derive(Debug, Clone)]
pub struct SimulatedPlayer {
    duration: f64,
    position: f64,
    playing: bool,
    ended: bool,
    seek_latency: Duration,
    pending_seek: Option<(f64, Duration)>,
    seeks: Vec<f64>,
}

impl SimulatedPlayer {
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            position: 0.0,
            playing: false,
            ended: false,
            seek_latency: Duration::ZERO,
            pending_seek: None,
            seeks: Vec::new(),
        }
    }

    pub fn with_seek_latency(mut self, latency: Duration) -> Self {
        self.seek_latency = latency;
        self
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    /// Every seek target received, in order.
    pub fn seeks(&self) -> &[f64] {
        &self.seeks
    }

    pub fn current(&self) -> PlaybackTime {
        PlaybackTime::new(self.position, self.duration)
    }

    /// Start or resume playback. Restarts from zero after the end.
    pub fn play(&mut self) {
        if self.ended {
            self.position = 0.0;
            self.ended = false;
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advance the clock by `elapsed` and report what happened.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<PlayerEvent> {
        let mut events = Vec::new();

        if let Some((target, remaining)) = self.pending_seek.take() {
            if remaining <= elapsed {
                self.position = target;
                self.ended = false;
            } else {
                self.pending_seek = Some((target, remaining - elapsed));
            }
        }

        if !self.playing {
            return events;
        }

        self.position = (self.position + elapsed.as_secs_f64()).min(self.duration);
        events.push(PlayerEvent::TimeUpdate(self.current()));

        if self.position >= self.duration && !self.ended {
            self.ended = true;
            self.playing = false;
            events.push(PlayerEvent::Ended);
        }

        events
    }
}

impl Player for SimulatedPlayer {
    fn slide_seek(&mut self, time: f64) {
        let target = time.clamp(0.0, self.duration);
        self.seeks.push(target);
        if self.seek_latency.is_zero() {
            self.position = target;
            self.ended = false;
        } else {
            self.pending_seek = Some((target, self.seek_latency));
        }
    }
}
