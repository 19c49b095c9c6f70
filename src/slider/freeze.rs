//! Freeze state machine for the seek slider.
//!
//! While the user drags the handle, and for a short while after release,
//! time updates from the player must not move the handle: the player still
//! reports the pre-seek position until it acknowledges the seek. The freeze
//! state decides whether incoming time updates are applied or dropped.

use std::time::Duration;

use tracing::debug;

use super::timer::{TimerId, TimerQueue};

/// Delay between the end of a drag and accepting time updates again.
pub const DEFAULT_UNFREEZE_DELAY: Duration = Duration::from_millis(200);

/// Whether the slider accepts time updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FreezeState {
    /// Time updates move the handle
    #[default]
    Unfrozen,
    /// The user owns the handle; time updates are dropped
    Frozen,
}

/// Owner of the `frozen` flag and of the pending unfreeze timer.
#[derive(Debug)]
pub struct FreezeController {
    state: FreezeState,
    unfreeze_delay: Duration,
    pending: Option<TimerId>,
}

impl FreezeController {
    pub fn new(unfreeze_delay: Duration) -> Self {
        Self {
            state: FreezeState::Unfrozen,
            unfreeze_delay,
            pending: None,
        }
    }

    pub fn state(&self) -> FreezeState {
        self.state
    }

    pub fn is_frozen(&self) -> bool {
        self.state == FreezeState::Frozen
    }

    /// Whether a time update arriving now should be applied.
    pub fn accepts_updates(&self) -> bool {
        self.state == FreezeState::Unfrozen
    }

    pub fn unfreeze_delay(&self) -> Duration {
        self.unfreeze_delay
    }

    /// The handle is being dragged: freeze until the drag stops.
    pub fn on_slide(&mut self, timers: &mut TimerQueue) {
        self.cancel(timers);
        self.freeze();
    }

    /// The drag stopped: stay frozen, then unfreeze after the delay.
    pub fn on_stop(&mut self, timers: &mut TimerQueue) {
        self.cancel(timers);
        self.freeze();
        let id = timers.schedule(self.unfreeze_delay);
        debug!(delay_ms = self.unfreeze_delay.as_millis() as u64, "unfreeze scheduled");
        self.pending = Some(id);
    }

    /// Handle a fired timer. Timers other than the pending one are ignored.
    ///
    /// Returns true if the slider was unfrozen.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;
        self.state = FreezeState::Unfrozen;
        debug!("slider unfrozen");
        true
    }

    /// Cancel the pending unfreeze timer without changing state.
    pub fn cancel(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.pending.take() {
            timers.cancel(id);
        }
    }

    /// Force the state, dropping any pending unfreeze.
    pub fn set_state(&mut self, state: FreezeState, timers: &mut TimerQueue) {
        self.cancel(timers);
        self.state = state;
    }

    fn freeze(&mut self) {
        if self.state != FreezeState::Frozen {
            debug!("slider frozen");
        }
        self.state = FreezeState::Frozen;
    }
}

impl Default for FreezeController {
    fn default() -> Self {
        Self::new(DEFAULT_UNFREEZE_DELAY)
    }
}
