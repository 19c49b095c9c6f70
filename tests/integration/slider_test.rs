//! End-to-end tests of the progress slider against a simulated player

use std::time::Duration;

use seekbar::player::{PlaybackTime, PlayerEvent, SimulatedPlayer};
use seekbar::slider::{
    Chapter, ControllerSettings, DeviceGate, EndNotice, ProgressSlider, RangeControl,
    StaticProbe, TrackSlider,
};

use crate::helpers::{desktop_slider, player};

const MS: Duration = Duration::from_millis(1);

/// Feed player events into the controller, like the host loop does.
fn pump(
    slider: &mut ProgressSlider<TrackSlider>,
    player: &mut SimulatedPlayer,
    elapsed: Duration,
) {
    let events = player.advance(elapsed);
    slider.advance(elapsed);
    for event in events {
        match event {
            PlayerEvent::TimeUpdate(update) => {
                slider.update_play_time(update);
            }
            PlayerEvent::Ended => slider.on_ended(),
        }
    }
}

// ============================================================================
// Device gate
// ============================================================================

#[test]
fn slider_absent_on_phone_present_elsewhere() {
    let build = |probe: StaticProbe| {
        ProgressSlider::construct(
            &probe,
            &DeviceGate::default(),
            TrackSlider::new(10),
            ControllerSettings::default(),
        )
    };

    assert!(build(StaticProbe::touch("iPhone")).is_none());
    assert!(build(StaticProbe::non_touch()).is_some());
    assert!(build(StaticProbe::touch("iPad")).is_some());
    assert!(build(StaticProbe::touch("Android")).is_some());
}

#[test]
fn built_slider_reports_events() {
    let mut slider = desktop_slider();
    slider.update_play_time(PlaybackTime::new(0.0, 100.0));

    let events = slider.slider_mut().press(10);
    assert_eq!(events.len(), 1);
    assert!(slider.slider().is_built());
}

// ============================================================================
// Dragging
// ============================================================================

#[test]
fn drag_holds_handle_until_seek_lands() {
    let mut slider = desktop_slider();
    let mut player = player(100.0).with_seek_latency(150 * MS);
    player.play();
    pump(&mut slider, &mut player, Duration::from_secs(10));
    assert_eq!(slider.slider().value(), 10.0);

    // Press at 50%, drag to 70%
    for event in slider.slider_mut().press(50) {
        slider.handle_event(event, &mut player);
    }
    for event in slider.slider_mut().drag(70) {
        slider.handle_event(event, &mut player);
    }
    assert!(slider.is_frozen());

    // The player still reports the old position: the handle must not jump back
    pump(&mut slider, &mut player, 50 * MS);
    assert_eq!(slider.slider().value(), 70.0);

    for event in slider.slider_mut().release(70) {
        slider.handle_event(event, &mut player);
    }
    pump(&mut slider, &mut player, 100 * MS);
    assert!(slider.is_frozen());
    assert_eq!(slider.slider().value(), 70.0);

    // Seek lands after 150ms, unfreeze after 200ms
    pump(&mut slider, &mut player, 100 * MS);
    assert!(!slider.is_frozen());
    assert!((slider.slider().value() - 70.1).abs() < 1e-6);

    assert_eq!(player.seeks(), [50.0, 70.0, 70.0]);
}

#[test]
fn change_event_sets_spoken_position() {
    let mut slider = desktop_slider();
    let mut player = player(100.0);
    slider.update_play_time(PlaybackTime::new(0.0, 100.0));

    slider.slider_mut().press(0);
    for event in slider.slider_mut().release(50) {
        slider.handle_event(event, &mut player);
    }

    assert_eq!(
        slider.slider().handle().value_text.as_deref(),
        Some("50 seconds")
    );
}

#[test]
fn teardown_cancels_unfreeze() {
    let mut slider = desktop_slider();
    let mut player = player(100.0);

    slider.on_stop(40.0, &mut player);
    assert!(slider.next_deadline().is_some());

    slider.destroy();
    assert!(slider.next_deadline().is_none());
}

// ============================================================================
// Accessibility
// ============================================================================

#[test]
fn playback_start_and_end_are_announced() {
    let mut slider = desktop_slider();
    let mut player = player(3.0);

    player.play();
    slider.on_play();
    pump(&mut slider, &mut player, 500 * MS);
    assert_eq!(
        slider.slider().handle().title.as_deref(),
        Some("video position")
    );
    assert_eq!(slider.slider().handle().focus_count, 0);

    pump(&mut slider, &mut player, Duration::from_secs(5));
    assert_eq!(slider.slider().handle().title.as_deref(), Some("video ended"));
    assert_eq!(slider.slider().handle().focus_count, 1);
}

#[test]
fn explicit_notices_write_labels() {
    let mut slider = desktop_slider();

    slider.notify_through_handle_end(EndNotice { end: true });
    assert_eq!(slider.slider().handle().title.as_deref(), Some("video ended"));
    assert!(slider.slider().handle().focused);

    slider.notify_through_handle_end(EndNotice { end: false });
    assert_eq!(
        slider.slider().handle().title.as_deref(),
        Some("video position")
    );
    assert_eq!(slider.slider().handle().focus_count, 1);
}

// ============================================================================
// Range params
// ============================================================================

#[test]
fn range_params_for_reference_cases() {
    let slider = desktop_slider();
    let cases = [(10.0, 20.0, 150.0), (90.0, 100.0, 100.0), (0.0, 200.0, 200.0)];

    for (start, end, duration) in cases {
        let params = slider.get_range_params(start, end, duration).unwrap();

        assert_eq!(params.left, start / duration * 100.0, "left for {:?}", (start, end));
        assert_eq!(
            params.width,
            (end - start) / duration * 100.0,
            "width for {:?}",
            (start, end)
        );
    }

    let params = slider.get_range_params(10.0, 20.0, 150.0).unwrap();
    assert_eq!(params.left_css(), "6.666666666666667%");
    assert_eq!(params.width_css(), "6.666666666666667%");

    assert!(slider.get_range_params(0.0, 10.0, 0.0).is_none());
}

#[test]
fn chapter_ranges_cover_timeline() {
    let slider = desktop_slider();
    let chapters = vec![
        Chapter::new(0.0, 30.0).with_title("Intro"),
        Chapter::new(30.0, 90.0),
        Chapter::new(90.0, 120.0),
    ];

    let ranges = slider.chapter_ranges(&chapters, 120.0);
    let total: f64 = ranges.iter().map(|(_, r)| r.width).sum();

    assert_eq!(ranges.len(), 3);
    assert!((total - 100.0).abs() < 1e-9);
    assert_eq!(ranges[0].0.title.as_deref(), Some("Intro"));
    assert_eq!(ranges[1].1.left_css(), "25%");
}
