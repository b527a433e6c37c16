use std::time::{Duration, Instant};

/// A scoped periodic timer.
///
/// The timer is either released (no ticks) or holds an interval. Acquiring
/// an interval, or changing it, restarts the period from the moment of the
/// call; the first tick therefore fires one full interval later, never
/// immediately.
#[derive(Debug, Clone, Default)]
pub(super) struct TickTimer {
    interval: Option<Duration>,
    last_tick: Option<Instant>,
}

impl TickTimer {
    /// Acquires (`Some`) or releases (`None`) the interval.
    ///
    /// Setting the interval it already holds keeps the running period.
    pub(super) fn set_interval(&mut self, now: Instant, interval: Option<Duration>) {
        if interval == self.interval {
            return;
        }
        self.interval = interval;
        self.last_tick = interval.map(|_| now);
    }

    /// Returns the time since the previous tick if the interval has elapsed
    /// at `now`, and starts the next period.
    pub(super) fn poll(&mut self, now: Instant) -> Option<Duration> {
        let (interval, last_tick) = (self.interval?, self.last_tick?);
        let elapsed = now.saturating_duration_since(last_tick);
        if elapsed < interval {
            return None;
        }
        self.last_tick = Some(now);
        Some(elapsed)
    }

    /// Returns the instant of the next tick, or `None` while released.
    pub(super) fn deadline(&self) -> Option<Instant> {
        Some(self.last_tick? + self.interval?)
    }
}
