use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use ratatui::layout::Rect;
use ratatui::DefaultTerminal;
use tracing::info;

use crate::core::config::GameConfig;
use crate::core::game::Game;
use crate::core::input::InputRouter;
use crate::core::surface::TerminalSurface;
use crate::core::window::{FrameStats, GameWindow};

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Which periodic actions are due on this pass of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ticks {
    pub render: bool,
    pub update: bool,
    pub report: Option<FrameStats>,
}

/// Render and update cadence over a single polled clock.
pub struct TickClock {
    time_per_frame: Duration,
    time_per_update: Duration,
    last_frame: Option<Instant>,
    last_update: Option<Instant>,
    last_report: Instant,
    window: GameWindow,
}

impl TickClock {
    pub fn new(config: &GameConfig, now: Instant) -> Self {
        Self {
            time_per_frame: config.time_per_frame(),
            time_per_update: config.time_per_update(),
            last_frame: None,
            last_update: None,
            last_report: now,
            window: GameWindow::new(),
        }
    }

    pub fn poll(&mut self, now: Instant) -> Ticks {
        let mut ticks = Ticks::default();

        if is_due(self.last_frame, self.time_per_frame, now) {
            self.last_frame = Some(now);
            self.window.record_frame();
            ticks.render = true;
        }

        if is_due(self.last_update, self.time_per_update, now) {
            self.last_update = Some(now);
            self.window.record_update();
            ticks.update = true;
        }

        if now.saturating_duration_since(self.last_report) >= REPORT_INTERVAL {
            self.last_report = now;
            ticks.report = Some(self.window.take_stats());
        }

        ticks
    }

    /// Time left until the earliest of the next render or update tick.
    pub fn until_next_tick(&self, now: Instant) -> Duration {
        let remaining = |last: Option<Instant>, interval: Duration| {
            last.map_or(Duration::ZERO, |t| interval.saturating_sub(now.saturating_duration_since(t)))
        };
        remaining(self.last_frame, self.time_per_frame).min(remaining(self.last_update, self.time_per_update))
    }
}

fn is_due(last: Option<Instant>, interval: Duration, now: Instant) -> bool {
    last.map_or(true, |t| now.saturating_duration_since(t).as_nanos() >= interval.as_nanos())
}

pub struct Engine<G: Game> {
    game: G,
    clock: TickClock,
    router: InputRouter,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G, config: &GameConfig) -> Self {
        Self {
            game,
            clock: TickClock::new(config, Instant::now()),
            router: InputRouter::new(Rect::default()),
        }
    }

    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        while self.game.is_running() {
            let ticks = self.clock.poll(Instant::now());

            if ticks.render {
                let (game, router) = (&self.game, &mut self.router);
                terminal.draw(|frame| {
                    let area = frame.area();
                    router.set_viewport(area);
                    let mut surface = TerminalSurface::new(frame.buffer_mut(), area);
                    game.render(&mut surface);
                })?;
            }

            if ticks.update {
                self.game.update();
            }

            if let Some(stats) = ticks.report {
                info!(fps = stats.frames, ups = stats.updates, "frame report");
            }

            // wait on the terminal until the next tick is due
            let timeout = self.clock.until_next_tick(Instant::now());
            if event::poll(timeout)? {
                let ev = event::read()?;
                self.router.dispatch(&ev, &mut self.game);
            }
        }

        info!("game loop stopped");
        Ok(self.game)
    }
}
