//! Interactive terminal demo.
//!
//! Hosts a [`ProgressSlider`] over a [`TrackSlider`] against a
//! [`SimulatedPlayer`]: space plays/pauses, mouse drags and arrow keys seek.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::{debug, info};

use crate::config::Config;
use crate::player::{PlayerEvent, SimulatedPlayer};
use crate::slider::{Chapter, DeviceProbe, ProgressSlider, TrackSlider};
use crate::ui::input::{handle_event, InputResult};
use crate::ui::seek_bar::{format_duration, SeekBar};
use crate::ui::theme::{current_theme, Theme};

/// How long the simulated player takes to acknowledge a seek.
pub const DEMO_SEEK_LATENCY: Duration = Duration::from_millis(120);

/// State of the demo screen.
pub struct DemoApp {
    controller: Option<ProgressSlider<TrackSlider>>,
    player: SimulatedPlayer,
    chapters: Vec<Chapter>,
    step: f64,
    track: Rect,
    theme: Theme,
}

impl DemoApp {
    pub fn new(
        config: &Config,
        probe: &dyn DeviceProbe,
        chapters: Vec<Chapter>,
        duration: f64,
    ) -> Self {
        let player = SimulatedPlayer::new(duration).with_seek_latency(DEMO_SEEK_LATENCY);
        let mut controller = ProgressSlider::construct(
            probe,
            &config.device_gate(),
            TrackSlider::new(0),
            config.controller_settings(),
        );
        if let Some(controller) = controller.as_mut() {
            controller.update_play_time(player.current());
        }

        Self {
            controller,
            player,
            chapters,
            step: config.slider.keyboard_step_secs,
            track: Rect::default(),
            theme: current_theme(),
        }
    }

    pub fn has_slider(&self) -> bool {
        self.controller.is_some()
    }

    pub fn controller(&self) -> Option<&ProgressSlider<TrackSlider>> {
        self.controller.as_ref()
    }

    pub fn player(&self) -> &SimulatedPlayer {
        &self.player
    }

    /// Screen area of the seek bar from the last draw.
    pub fn track(&self) -> Rect {
        self.track
    }

    /// Chapter containing the player position.
    pub fn current_chapter(&self) -> Option<&Chapter> {
        let position = self.player.position();
        self.chapters.iter().find(|c| c.contains(position))
    }

    fn toggle_play(&mut self) {
        self.player.toggle();
        if self.player.is_playing() {
            info!(position = self.player.position(), "playback started");
            if let Some(controller) = self.controller.as_mut() {
                controller.on_play();
            }
        }
    }

    /// Advance player and slider clocks by `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) {
        let events = self.player.advance(elapsed);
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        controller.advance(elapsed);
        for event in events {
            match event {
                PlayerEvent::TimeUpdate(update) => {
                    controller.update_play_time(update);
                }
                PlayerEvent::Ended => {
                    info!("playback ended");
                    controller.on_ended();
                }
            }
        }
    }

    /// How long the event loop may wait for input.
    pub fn next_wait(&self, tick: Duration) -> Duration {
        self.controller
            .as_ref()
            .and_then(|c| c.next_deadline())
            .map_or(tick, |deadline| deadline.min(tick))
    }

    /// Handle an input event. Returns false when the user quits.
    pub fn handle_input(&mut self, event: Event) -> bool {
        let slider = self.controller.as_mut().map(|c| c.slider_mut());
        let result = handle_event(event, slider, self.track, self.step);

        match result {
            InputResult::Continue | InputResult::Resize(..) => true,
            InputResult::Quit => false,
            InputResult::TogglePlay => {
                self.toggle_play();
                true
            }
            InputResult::Slider(events) => {
                if let Some(controller) = self.controller.as_mut() {
                    for event in events {
                        debug!(?event, "slider event");
                        controller.handle_event(event, &mut self.player);
                    }
                }
                true
            }
        }
    }

    /// Render the demo screen.
    pub fn draw(&mut self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1),
                Constraint::Length(1), // seek bar
                Constraint::Length(1), // time and state
                Constraint::Length(1), // chapter
                Constraint::Length(1), // accessibility
                Constraint::Min(0),
                Constraint::Length(1), // footer
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new("seekbar demo").style(self.theme.accent_style()),
            rows[0],
        );

        self.track = Rect {
            x: rows[2].x + 1,
            width: rows[2].width.saturating_sub(2),
            ..rows[2]
        };

        let status = match self.controller.as_mut() {
            Some(controller) => {
                controller.slider_mut().set_width(self.track.width);
                let frozen = controller.is_frozen();
                let bar = SeekBar::new(controller.slider(), &self.theme)
                    .chapters(&self.chapters)
                    .frozen(frozen);
                frame.render_widget(bar, self.track);
                if frozen {
                    "  [seeking]"
                } else {
                    ""
                }
            }
            None => {
                frame.render_widget(
                    Paragraph::new("No seek slider on this device; native controls only.")
                        .style(self.theme.error_style()),
                    self.track,
                );
                ""
            }
        };

        let state = if self.player.is_playing() {
            "playing"
        } else if self.player.has_ended() {
            "ended"
        } else {
            "paused"
        };
        let time_line = Line::from(vec![
            Span::styled(
                format!(
                    " {} / {}",
                    format_duration(self.player.position()),
                    format_duration(self.player.duration())
                ),
                self.theme.text_style(),
            ),
            Span::styled(format!("  {}", state), self.theme.text_secondary_style()),
            Span::styled(status, self.theme.marker_style()),
        ]);
        frame.render_widget(Paragraph::new(time_line), rows[3]);

        if let Some(title) = self.current_chapter().and_then(|c| c.title.clone()) {
            frame.render_widget(
                Paragraph::new(format!(" Chapter: {}", title)).style(self.theme.text_style()),
                rows[4],
            );
        }

        if let Some(controller) = self.controller.as_ref() {
            let handle = controller.slider().handle();
            let text = format!(
                " handle: {} | {}",
                handle.title.as_deref().unwrap_or("-"),
                handle.value_text.as_deref().unwrap_or("-")
            );
            frame.render_widget(
                Paragraph::new(text).style(self.theme.text_secondary_style()),
                rows[5],
            );
        }

        frame.render_widget(
            Paragraph::new("space: play/pause | drag/click: seek | ←/→: step | q: quit")
                .style(self.theme.text_secondary_style()),
            rows[7],
        );
    }
}

/// Drive the demo until the user quits.
pub fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut DemoApp,
    tick: Duration,
) -> Result<()> {
    let mut last = Instant::now();
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(app.next_wait(tick))? && !app.handle_input(event::read()?) {
            return Ok(());
        }

        let now = Instant::now();
        app.tick(now - last);
        last = now;
    }
}

/// Run the demo on the real terminal.
#[cfg(not(tarpaulin_include))]
pub fn run_demo(
    config: &Config,
    probe: &dyn DeviceProbe,
    chapters: Vec<Chapter>,
    duration: f64,
) -> Result<()> {
    let mut app = DemoApp::new(config, probe, chapters, duration);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        disable_raw_mode().ok();
        return Err(err.into());
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, &mut app, config.tick());

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}
