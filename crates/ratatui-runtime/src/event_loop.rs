use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::{event::TuiEvent, tick_timer::TickTimer};

/// Rendering trigger mode.
#[derive(Debug, Clone, Copy, Default)]
pub enum RenderMode {
    /// Render after state changes (tick or crossterm event).
    #[default]
    OnDirty,
    /// Render after state changes, but with minimum interval between renders.
    ///
    /// If events occur faster than the interval, they are batched into one render.
    Throttled(Duration),
}

impl RenderMode {
    /// Creates `Throttled` mode from frame rate (FPS).
    #[must_use]
    pub fn throttled_from_rate(rate: f64) -> Self {
        Self::Throttled(Duration::from_secs_f64(1.0 / rate))
    }
}

/// Event loop state management.
///
/// Multiplexes the tick timer, render requests and crossterm input into a
/// single stream of [`TuiEvent`]s.
#[derive(Debug)]
pub(super) struct EventLoop {
    ticks: TickTimer,
    render_mode: RenderMode,
    last_render: Option<Instant>,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self {
            ticks: TickTimer::default(),
            render_mode: RenderMode::default(),
            last_render: None,
            // Initial render is required on startup
            dirty: true,
        }
    }
}

impl EventLoop {
    /// Acquires or releases the tick interval, restarting its period.
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.ticks.set_interval(Instant::now(), interval);
    }

    pub(super) fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    /// Returns the next event.
    ///
    /// Blocks until a tick or render is due, or a crossterm event arrives.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(elapsed) = self.ticks.poll(now) {
                self.dirty = true;
                return Ok(TuiEvent::Tick(elapsed));
            }

            if let Some(render_at) = self.next_render_at(now)
                && render_at <= now
            {
                self.last_render = Some(now);
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            let wake_at = [self.ticks.deadline(), self.next_render_at(now)]
                .into_iter()
                .flatten()
                .min();
            if let Some(wake_at) = wake_at
                && !event::poll(wake_at.saturating_duration_since(now))?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn next_render_at(&self, now: Instant) -> Option<Instant> {
        if !self.dirty {
            return None;
        }
        match (self.render_mode, self.last_render) {
            (RenderMode::Throttled(interval), Some(last)) => Some(last + interval),
            _ => Some(now),
        }
    }
}
