//! Progress slider controller.
//!
//! Ties the range primitive to the player: time updates move the handle
//! unless the freeze state says the user owns it, drags become seeks, and
//! playback start/end are announced through the handle.

use std::time::Duration;

use tracing::{debug, info, trace};

use super::a11y::{AccessibilityNotifier, EndNotice, HandleLabels};
use super::chapter::Chapter;
use super::device::{DeviceGate, DeviceProbe};
use super::freeze::{FreezeController, FreezeState, DEFAULT_UNFREEZE_DELAY};
use super::range::{compute_range, RangeParams};
use super::timer::TimerQueue;
use super::widget::{RangeControl, SliderEvent, SliderOptions};
use crate::player::{PlaybackTime, Player};

/// Tunables of a [`ProgressSlider`].
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSettings {
    /// How long time updates stay blocked after a drag stops
    pub unfreeze_delay: Duration,
    pub labels: HandleLabels,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            unfreeze_delay: DEFAULT_UNFREEZE_DELAY,
            labels: HandleLabels::default(),
        }
    }
}

/// Seek slider bound to one player instance.
///
/// Only exists when the device gate allows a slider; hosts keep an
/// `Option<ProgressSlider<_>>` and treat `None` as "no slider".
#[derive(Debug)]
pub struct ProgressSlider<R: RangeControl> {
    slider: R,
    freeze: FreezeController,
    timers: TimerQueue,
    notifier: AccessibilityNotifier,
    /// Set by `on_play` until the first usable time update arrives
    announce_on_ready: bool,
    build_count: usize,
}

impl<R: RangeControl> ProgressSlider<R> {
    /// Build the controller, or return `None` if the device gate rejects the
    /// device `probe` reports.
    pub fn construct(
        probe: &dyn DeviceProbe,
        gate: &DeviceGate,
        slider: R,
        settings: ControllerSettings,
    ) -> Option<Self> {
        if !gate.should_build_slider(probe) {
            info!("touch device excluded, progress slider not built");
            return None;
        }

        let mut controller = Self {
            slider,
            freeze: FreezeController::new(settings.unfreeze_delay),
            timers: TimerQueue::new(),
            notifier: AccessibilityNotifier::new(settings.labels),
            announce_on_ready: false,
            build_count: 0,
        };
        controller.build_slider();
        info!("progress slider built");
        Some(controller)
    }

    fn build_slider(&mut self) {
        self.slider.build(&SliderOptions::seek_slider());
        self.build_count += 1;
    }

    pub fn slider(&self) -> &R {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut R {
        &mut self.slider
    }

    /// How many times the slider was built. Always 1.
    pub fn build_count(&self) -> usize {
        self.build_count
    }

    pub fn is_frozen(&self) -> bool {
        self.freeze.is_frozen()
    }

    /// Force the freeze state, dropping any pending unfreeze.
    pub fn set_frozen(&mut self, frozen: bool) {
        let state = if frozen {
            FreezeState::Frozen
        } else {
            FreezeState::Unfrozen
        };
        self.freeze.set_state(state, &mut self.timers);
    }

    /// Apply a time update from the player.
    ///
    /// Returns false if the update was dropped because the slider is frozen.
    /// Values are forwarded unclamped; the range primitive clamps them.
    pub fn update_play_time(&mut self, update: PlaybackTime) -> bool {
        if self.announce_on_ready && update.duration > 0.0 && update.time.is_finite() {
            self.announce_on_ready = false;
            self.notify_through_handle_end(EndNotice::PLAYING);
        }

        if !self.freeze.accepts_updates() {
            trace!(time = update.time, "time update dropped while frozen");
            return false;
        }

        self.slider.set_max(update.duration);
        self.slider.set_value(update.time);
        true
    }

    /// Retitle the handle for playback start (`end: false`) or end of media
    /// (`end: true`, which also focuses the handle).
    pub fn notify_through_handle_end(&mut self, notice: EndNotice) {
        debug!(end = notice.end, "handle notification");
        self.notifier.notify_end(self.slider.handle_mut(), notice);
    }

    /// Highlight range of `[start_time, end_time]`, see [`compute_range`].
    pub fn get_range_params(
        &self,
        start_time: f64,
        end_time: f64,
        duration: f64,
    ) -> Option<RangeParams> {
        compute_range(start_time, end_time, duration)
    }

    /// Highlight ranges of all chapters that can be placed on the timeline.
    pub fn chapter_ranges<'a>(
        &self,
        chapters: &'a [Chapter],
        duration: f64,
    ) -> Vec<(&'a Chapter, RangeParams)> {
        chapters
            .iter()
            .filter_map(|chapter| {
                self.get_range_params(chapter.start, chapter.end, duration)
                    .map(|range| (chapter, range))
            })
            .collect()
    }

    /// The value changed through user interaction.
    pub fn on_change(&mut self, value: f64) {
        self.notifier
            .describe_position(self.slider.handle_mut(), value);
    }

    /// The handle is being dragged: freeze and preview the seek.
    pub fn on_slide(&mut self, value: f64, player: &mut dyn Player) {
        self.freeze.on_slide(&mut self.timers);
        player.slide_seek(value);
    }

    /// The drag ended: commit the seek and unfreeze after the delay.
    pub fn on_stop(&mut self, value: f64, player: &mut dyn Player) {
        self.freeze.on_stop(&mut self.timers);
        debug!(value, "seek committed");
        player.slide_seek(value);
    }

    /// Dispatch an event reported by the slider.
    pub fn handle_event(&mut self, event: SliderEvent, player: &mut dyn Player) {
        match event {
            SliderEvent::Change(value) => self.on_change(value),
            SliderEvent::Slide(value) => self.on_slide(value, player),
            SliderEvent::Stop(value) => self.on_stop(value, player),
        }
    }

    /// Playback started; the handle is retitled once time and duration are
    /// known.
    pub fn on_play(&mut self) {
        self.announce_on_ready = true;
    }

    /// Playback reached the end of the media.
    pub fn on_ended(&mut self) {
        self.announce_on_ready = false;
        self.notify_through_handle_end(EndNotice::ENDED);
    }

    /// Advance the slider's clock, firing due timers.
    pub fn advance(&mut self, elapsed: Duration) {
        for id in self.timers.advance(elapsed) {
            self.freeze.on_timer(id);
        }
    }

    /// Time until the next pending timer, for sizing event-loop waits.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Cancel pending timers. Called on teardown and on drop.
    pub fn destroy(&mut self) {
        self.freeze.cancel(&mut self.timers);
        self.timers.clear();
    }
}

impl<R: RangeControl> Drop for ProgressSlider<R> {
    fn drop(&mut self) {
        self.destroy();
    }
}
