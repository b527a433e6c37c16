use std::time::Duration;

use super::{game_session::GameSession, spawner::PieceSource};

/// Default period between automatic descents.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("tick interval must be greater than zero")]
pub struct ZeroTickIntervalError;

/// Time-based source of automatic descents (gravity).
///
/// The driver is fed elapsed time and issues one [`GameSession::descend`] for
/// every full interval that passes while the game is running and unpaused.
/// Whenever the game is not running (not started, paused or over) the
/// interval is released and accumulated time is dropped, so after a resume
/// the next descent comes one full interval later.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use blockfall_engine::{GameSession, ScriptedPieceSource, TickDriver};
///
/// let source: ScriptedPieceSource = "T".parse().unwrap();
/// let mut session = GameSession::new(source);
/// let mut ticks = TickDriver::new(Duration::from_millis(500)).unwrap();
///
/// assert_eq!(ticks.advance(&mut session, Duration::from_secs(3)), 0);
///
/// session.start();
/// assert_eq!(ticks.advance(&mut session, Duration::from_millis(1200)), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TickDriver {
    interval: Duration,
    /// Time accumulated toward the next descent; `None` while released.
    elapsed: Option<Duration>,
}

impl Default for TickDriver {
    fn default() -> Self {
        Self {
            interval: DEFAULT_TICK_INTERVAL,
            elapsed: None,
        }
    }
}

impl TickDriver {
    pub fn new(interval: Duration) -> Result<Self, ZeroTickIntervalError> {
        if interval.is_zero() {
            return Err(ZeroTickIntervalError);
        }
        Ok(Self {
            interval,
            elapsed: None,
        })
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns whether the interval is currently held.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Acquires or releases the interval to match the session's status.
    ///
    /// Call after every command so that pausing takes effect immediately.
    pub fn sync<S>(&mut self, session: &GameSession<S>)
    where
        S: PieceSource,
    {
        match (session.is_running(), self.elapsed) {
            (true, None) => self.elapsed = Some(Duration::ZERO),
            (false, Some(_)) => self.elapsed = None,
            _ => {}
        }
    }

    /// Advances time by `elapsed` and returns how many descents were issued.
    pub fn advance<S>(&mut self, session: &mut GameSession<S>, elapsed: Duration) -> usize
    where
        S: PieceSource,
    {
        self.sync(session);
        let Some(mut accumulated) = self.elapsed else {
            return 0;
        };
        accumulated += elapsed;

        let mut issued = 0;
        while accumulated >= self.interval {
            accumulated -= self.interval;
            session.descend();
            issued += 1;
            if !session.is_running() {
                self.elapsed = None;
                return issued;
            }
        }
        self.elapsed = Some(accumulated);
        issued
    }

    /// Returns the time left until the next descent, or `None` while the
    /// session is not running.
    #[must_use]
    pub fn until_next_tick<S>(&self, session: &GameSession<S>) -> Option<Duration>
    where
        S: PieceSource,
    {
        if !session.is_running() {
            return None;
        }
        let elapsed = self.elapsed.unwrap_or_default();
        Some(self.interval.saturating_sub(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cell, FallingPiece, GameState, Piece, PieceColor, PieceKind, Position};
    use crate::{Board, ScriptedPieceSource, WIDTH};

    use super::*;

    const INTERVAL: Duration = Duration::from_millis(1000);

    fn started() -> GameSession<ScriptedPieceSource> {
        let mut session = GameSession::new("I".parse().unwrap());
        session.start();
        session
    }

    fn y(session: &GameSession<ScriptedPieceSource>) -> i32 {
        session.state().falling_piece().unwrap().position.y
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert_eq!(TickDriver::new(Duration::ZERO).unwrap_err(), ZeroTickIntervalError);
    }

    #[test]
    fn test_default_interval() {
        assert_eq!(TickDriver::default().interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_no_ticks_before_start() {
        let mut session = GameSession::new("I".parse::<ScriptedPieceSource>().unwrap());
        let mut ticks = TickDriver::new(INTERVAL).unwrap();
        assert_eq!(ticks.advance(&mut session, Duration::from_secs(10)), 0);
        assert!(!ticks.is_active());
        assert_eq!(ticks.until_next_tick(&session), None);
    }

    #[test]
    fn test_one_descent_per_interval() {
        let mut session = started();
        let mut ticks = TickDriver::new(INTERVAL).unwrap();

        assert_eq!(ticks.advance(&mut session, Duration::from_millis(999)), 0);
        assert_eq!(y(&session), -2);
        assert_eq!(ticks.advance(&mut session, Duration::from_millis(1)), 1);
        assert_eq!(y(&session), -1);
        assert_eq!(ticks.advance(&mut session, Duration::from_millis(2500)), 2);
        assert_eq!(y(&session), 1);
        assert_eq!(
            ticks.until_next_tick(&session),
            Some(Duration::from_millis(500))
        );
    }

    #[test]
    fn test_pause_releases_interval() {
        let mut session = started();
        let mut ticks = TickDriver::new(INTERVAL).unwrap();
        ticks.advance(&mut session, Duration::from_millis(700));

        session.toggle_pause();
        ticks.sync(&session);
        assert!(!ticks.is_active());
        assert_eq!(ticks.advance(&mut session, Duration::from_secs(30)), 0);
        assert_eq!(y(&session), -2);

        session.toggle_pause();
        ticks.sync(&session);
        // The 700ms accumulated before the pause were dropped.
        assert_eq!(ticks.until_next_tick(&session), Some(INTERVAL));
        assert_eq!(ticks.advance(&mut session, Duration::from_millis(700)), 0);
        assert_eq!(ticks.advance(&mut session, Duration::from_millis(300)), 1);
        assert_eq!(y(&session), -1);
    }

    #[test]
    fn test_stops_at_game_over() {
        let board = (0..WIDTH - 1).fold(Board::EMPTY, |board, x| {
            board.with_cell(x, 0, Cell::Filled(PieceColor::Red))
        });
        let falling = FallingPiece {
            piece: Piece::new(PieceKind::O),
            position: Position::SPAWN,
        };
        let source: ScriptedPieceSource = "O".parse().unwrap();
        let mut session = GameSession::from_state(GameState::running_with(board, falling), source);
        let mut ticks = TickDriver::new(INTERVAL).unwrap();

        assert_eq!(ticks.advance(&mut session, Duration::from_secs(10)), 1);
        assert!(session.game_over());
        assert!(!ticks.is_active());
        assert_eq!(ticks.advance(&mut session, Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_tick_and_manual_descent_are_equivalent() {
        let mut ticked = started();
        let mut manual = started();
        let mut ticks = TickDriver::new(INTERVAL).unwrap();

        ticks.advance(&mut ticked, Duration::from_secs(25));
        for _ in 0..25 {
            manual.descend();
        }
        assert_eq!(ticked.state(), manual.state());
    }
}
