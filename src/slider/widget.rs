//! Draggable range primitive behind the seek slider.
//!
//! The controller only talks to the [`RangeControl`] trait, so the same
//! controller drives the terminal [`TrackSlider`] and recording test doubles.
//! The primitive owns value clamping: the controller forwards player values
//! as they arrive.

/// How the filled part of the track is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeMode {
    /// Fill from the track minimum up to the handle
    #[default]
    Min,
}

/// Build-time options of a slider.
///
/// The `on_*` flags subscribe the host to the matching [`SliderEvent`]s;
/// unsubscribed events are never reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderOptions {
    pub range: RangeMode,
    pub on_change: bool,
    pub on_slide: bool,
    pub on_stop: bool,
}

impl SliderOptions {
    /// Options used by the progress slider: min range, all events.
    pub fn seek_slider() -> Self {
        Self {
            range: RangeMode::Min,
            on_change: true,
            on_slide: true,
            on_stop: true,
        }
    }

    fn wants(&self, event: &SliderEvent) -> bool {
        match event {
            SliderEvent::Change(_) => self.on_change,
            SliderEvent::Slide(_) => self.on_slide,
            SliderEvent::Stop(_) => self.on_stop,
        }
    }
}

/// Events a slider reports to its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// The value changed as a result of user interaction
    Change(f64),
    /// The handle moved during a drag
    Slide(f64),
    /// The drag ended at this value
    Stop(f64),
}

impl SliderEvent {
    pub fn value(&self) -> f64 {
        match *self {
            Self::Change(v) | Self::Slide(v) | Self::Stop(v) => v,
        }
    }
}

/// Draggable handle of a slider, target of accessibility writes.
pub trait SliderHandle {
    /// Set the descriptive label announced by assistive technology.
    fn set_title(&mut self, title: &str);

    /// Set the spoken form of the current value.
    fn set_value_text(&mut self, text: &str);

    /// Move assistive-technology focus to the handle.
    fn focus(&mut self);
}

/// A single-handle range control.
pub trait RangeControl {
    /// Construct the control. Called once per controller.
    fn build(&mut self, options: &SliderOptions);

    /// Set the upper bound of the track.
    fn set_max(&mut self, max: f64);

    /// Set the handle position.
    fn set_value(&mut self, value: f64);

    fn value(&self) -> f64;

    fn max(&self) -> f64;

    fn handle_mut(&mut self) -> &mut dyn SliderHandle;
}

/// Accessibility state of a [`TrackSlider`] handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackHandle {
    pub title: Option<String>,
    pub value_text: Option<String>,
    /// Whether the handle currently holds focus
    pub focused: bool,
    /// How many focus notifications were fired
    pub focus_count: usize,
}

impl SliderHandle for TrackHandle {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_value_text(&mut self, text: &str) {
        self.value_text = Some(text.to_string());
    }

    fn focus(&mut self) {
        self.focused = true;
        self.focus_count += 1;
    }
}

/// Slider laid out on a track of `width` terminal cells.
#[derive(Debug, Clone, Default)]
pub struct TrackSlider {
    options: Option<SliderOptions>,
    max: f64,
    value: f64,
    width: u16,
    drag_start: Option<f64>,
    handle: TrackHandle,
}

impl TrackSlider {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn options(&self) -> Option<&SliderOptions> {
        self.options.as_ref()
    }

    pub fn is_built(&self) -> bool {
        self.options.is_some()
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Resize the track (terminal resize).
    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn handle(&self) -> &TrackHandle {
        &self.handle
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    /// Fraction of the track covered by the value, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.max > 0.0 {
            (self.value / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Track cell the handle sits on.
    pub fn handle_column(&self) -> u16 {
        if self.width <= 1 {
            return 0;
        }
        let last = (self.width - 1) as f64;
        (self.fraction() * last).round() as u16
    }

    /// Value corresponding to a track cell. Cells past the end map to `max`.
    pub fn value_at(&self, column: u16) -> f64 {
        if self.width <= 1 {
            return 0.0;
        }
        let last = self.width - 1;
        let ratio = column.min(last) as f64 / last as f64;
        ratio * self.max
    }

    /// Pointer pressed on the track: the handle jumps there and a drag begins.
    pub fn press(&mut self, column: u16) -> Vec<SliderEvent> {
        if !self.is_built() {
            return Vec::new();
        }
        self.drag_start = Some(self.value);
        self.value = self.value_at(column);
        self.emit(vec![SliderEvent::Slide(self.value)])
    }

    /// Pointer moved while pressed.
    pub fn drag(&mut self, column: u16) -> Vec<SliderEvent> {
        if !self.is_dragging() {
            return Vec::new();
        }
        let value = self.value_at(column);
        if value == self.value {
            return Vec::new();
        }
        self.value = value;
        self.emit(vec![SliderEvent::Slide(value)])
    }

    /// Pointer released: the drag stops at `column`.
    pub fn release(&mut self, column: u16) -> Vec<SliderEvent> {
        let Some(start) = self.drag_start.take() else {
            return Vec::new();
        };
        self.value = self.value_at(column);
        let mut events = vec![SliderEvent::Stop(self.value)];
        if self.value != start {
            events.push(SliderEvent::Change(self.value));
        }
        self.emit(events)
    }

    /// Keyboard step: move the handle by `delta` and report a complete
    /// slide/stop/change sequence.
    pub fn step_by(&mut self, delta: f64) -> Vec<SliderEvent> {
        if !self.is_built() || self.is_dragging() {
            return Vec::new();
        }
        let start = self.value;
        self.set_value(start + delta);
        if self.value == start {
            return Vec::new();
        }
        let value = self.value;
        self.emit(vec![
            SliderEvent::Slide(value),
            SliderEvent::Stop(value),
            SliderEvent::Change(value),
        ])
    }

    fn emit(&self, events: Vec<SliderEvent>) -> Vec<SliderEvent> {
        match &self.options {
            Some(options) => events.into_iter().filter(|e| options.wants(e)).collect(),
            None => Vec::new(),
        }
    }
}

impl RangeControl for TrackSlider {
    fn build(&mut self, options: &SliderOptions) {
        self.options = Some(*options);
    }

    fn set_max(&mut self, max: f64) {
        self.max = if max.is_finite() && max > 0.0 { max } else { 0.0 };
        self.value = self.value.clamp(0.0, self.max);
    }

    fn set_value(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.value = value.clamp(0.0, self.max);
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn handle_mut(&mut self) -> &mut dyn SliderHandle {
        &mut self.handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(width: u16, max: f64) -> TrackSlider {
        let mut slider = TrackSlider::new(width);
        slider.build(&SliderOptions::seek_slider());
        slider.set_max(max);
        slider
    }

    #[test]
    fn values_are_clamped_to_bounds() {
        let mut slider = built(11, 100.0);

        slider.set_value(150.0);
        assert_eq!(slider.value(), 100.0);

        slider.set_value(-3.0);
        assert_eq!(slider.value(), 0.0);

        slider.set_value(40.0);
        slider.set_value(f64::NAN);
        assert_eq!(slider.value(), 40.0);
    }

    #[test]
    fn negative_max_clamps_to_zero() {
        let mut slider = built(11, -10.0);
        assert_eq!(slider.max(), 0.0);
        slider.set_value(5.0);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn shrinking_max_pulls_value_back() {
        let mut slider = built(11, 100.0);
        slider.set_value(80.0);
        slider.set_max(50.0);
        assert_eq!(slider.value(), 50.0);
    }

    #[test]
    fn columns_map_to_values() {
        let slider = built(11, 100.0);
        assert_eq!(slider.value_at(0), 0.0);
        assert_eq!(slider.value_at(5), 50.0);
        assert_eq!(slider.value_at(10), 100.0);
        assert_eq!(slider.value_at(40), 100.0);
    }

    #[test]
    fn handle_column_follows_value() {
        let mut slider = built(11, 100.0);
        slider.set_value(30.0);
        assert_eq!(slider.handle_column(), 3);
        assert!((slider.fraction() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn drag_reports_slide_then_stop_and_change() {
        let mut slider = built(11, 100.0);

        assert_eq!(slider.press(2), vec![SliderEvent::Slide(20.0)]);
        assert!(slider.is_dragging());
        assert_eq!(slider.drag(4), vec![SliderEvent::Slide(40.0)]);
        assert!(slider.drag(4).is_empty());
        assert_eq!(
            slider.release(6),
            vec![SliderEvent::Stop(60.0), SliderEvent::Change(60.0)]
        );
        assert!(!slider.is_dragging());
        assert_eq!(slider.value(), 60.0);
    }

    #[test]
    fn release_at_start_value_has_no_change() {
        let mut slider = built(11, 100.0);
        slider.set_value(50.0);

        slider.press(5);
        assert_eq!(slider.release(5), vec![SliderEvent::Stop(50.0)]);
    }

    #[test]
    fn unbuilt_slider_reports_nothing() {
        let mut slider = TrackSlider::new(11);
        slider.set_max(100.0);
        assert!(slider.press(3).is_empty());
        assert!(slider.release(3).is_empty());
        assert!(slider.step_by(5.0).is_empty());
    }

    #[test]
    fn unsubscribed_events_are_filtered() {
        let mut slider = TrackSlider::new(11);
        slider.build(&SliderOptions {
            range: RangeMode::Min,
            on_change: false,
            on_slide: false,
            on_stop: true,
        });
        slider.set_max(100.0);

        assert!(slider.press(1).is_empty());
        assert_eq!(slider.release(3), vec![SliderEvent::Stop(30.0)]);
    }

    #[test]
    fn keyboard_step_reports_full_sequence() {
        let mut slider = built(11, 100.0);
        slider.set_value(10.0);

        assert_eq!(
            slider.step_by(5.0),
            vec![
                SliderEvent::Slide(15.0),
                SliderEvent::Stop(15.0),
                SliderEvent::Change(15.0)
            ]
        );
        slider.set_value(100.0);
        assert!(slider.step_by(5.0).is_empty());
    }

    #[test]
    fn handle_records_accessibility_writes() {
        let mut slider = built(11, 100.0);
        slider.handle_mut().set_title("video position");
        slider.handle_mut().set_value_text("5 seconds");
        slider.handle_mut().focus();

        let handle = slider.handle();
        assert_eq!(handle.title.as_deref(), Some("video position"));
        assert_eq!(handle.value_text.as_deref(), Some("5 seconds"));
        assert!(handle.focused);
        assert_eq!(handle.focus_count, 1);
    }

    #[test]
    fn event_value_accessor() {
        assert_eq!(SliderEvent::Stop(3.5).value(), 3.5);
        assert_eq!(SliderEvent::Change(1.0).value(), 1.0);
    }
}
