use crate::core::board::Board;

use super::{
    game_state::{Command, Direction, GameState, Outcome},
    snapshot::Snapshot,
    spawner::{PieceSource, RandomPieceSource},
};

/// A game together with the piece source it draws from.
///
/// This is the single owner of the game state. The presentation layer and
/// the [`TickDriver`](super::TickDriver) only reach it through the command
/// methods, each of which runs to completion (including any lock, clear,
/// respawn and game-over check) before returning.
///
/// # Example
///
/// ```
/// use blockfall_engine::{GameSession, Outcome, ScriptedPieceSource};
///
/// let source: ScriptedPieceSource = "IO".parse().unwrap();
/// let mut session = GameSession::new(source);
///
/// assert_eq!(session.descend(), Outcome::Ignored);
/// assert_eq!(session.start(), Outcome::Started);
/// assert_eq!(session.shift_right(), Outcome::Moved);
/// assert!(session.state().game_started());
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<S = RandomPieceSource> {
    state: GameState,
    source: S,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(RandomPieceSource::new())
    }
}

impl<S> GameSession<S>
where
    S: PieceSource,
{
    /// Creates a session that has not been started yet.
    pub fn new(source: S) -> Self {
        Self {
            state: GameState::new(),
            source,
        }
    }

    /// Creates a session resuming from an existing state.
    pub fn from_state(state: GameState, source: S) -> Self {
        Self { state, source }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.state.score()
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    #[must_use]
    pub fn game_started(&self) -> bool {
        self.state.game_started()
    }

    /// Returns `true` while automatic descent should be running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.status().is_running()
    }

    /// Returns the settled board with the falling piece overlaid.
    #[must_use]
    pub fn render(&self) -> Board {
        self.state.render()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    pub fn start(&mut self) -> Outcome {
        self.apply(Command::Start)
    }

    pub fn toggle_pause(&mut self) -> Outcome {
        self.apply(Command::TogglePause)
    }

    pub fn shift_left(&mut self) -> Outcome {
        self.apply(Command::ShiftLeft)
    }

    pub fn shift_right(&mut self) -> Outcome {
        self.apply(Command::ShiftRight)
    }

    pub fn shift(&mut self, direction: Direction) -> Outcome {
        match direction {
            Direction::Left => self.shift_left(),
            Direction::Right => self.shift_right(),
        }
    }

    pub fn descend(&mut self) -> Outcome {
        self.apply(Command::Descend)
    }

    /// Runs one command and replaces the state with its result.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let (state, outcome) = self.state.apply(command, &mut self.source);
        self.state = state;
        self.trace(command, outcome);
        outcome
    }

    fn trace(&self, command: Command, outcome: Outcome) {
        let score = self.state.score();
        match outcome {
            Outcome::Started => tracing::info!(?command, "game started"),
            Outcome::GameOver { cleared_rows } => {
                tracing::info!(?command, cleared_rows, score, "game over");
            }
            Outcome::Locked { cleared_rows } => {
                tracing::debug!(cleared_rows, score, "piece locked");
            }
            Outcome::Paused | Outcome::Resumed => tracing::debug!(?outcome, "pause toggled"),
            Outcome::Moved | Outcome::Blocked | Outcome::Ignored => {
                tracing::trace!(?command, ?outcome);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Cell, FallingPiece, Piece, PieceColor, PieceKind, Position, ScriptedPieceSource, WIDTH,
    };

    use super::*;

    fn session(kinds: &str) -> GameSession<ScriptedPieceSource> {
        GameSession::new(kinds.parse().unwrap())
    }

    #[test]
    fn test_commands_ignored_before_start() {
        let mut session = session("I");
        assert_eq!(session.toggle_pause(), Outcome::Ignored);
        assert_eq!(session.shift_left(), Outcome::Ignored);
        assert_eq!(session.shift_right(), Outcome::Ignored);
        assert_eq!(session.descend(), Outcome::Ignored);
        assert!(!session.game_started());
    }

    #[test]
    fn test_drop_to_floor_and_respawn() {
        let mut session = session("IJ");
        session.start();

        let mut moves = 0;
        let outcome = loop {
            match session.descend() {
                Outcome::Moved => moves += 1,
                other => break other,
            }
        };
        // I starts at y = -2 and rests on row 19.
        assert_eq!(moves, 21);
        assert_eq!(outcome, Outcome::Locked { cleared_rows: 0 });

        let cyan = Cell::Filled(PieceColor::Cyan);
        let bottom = session.state().board().rows().last().unwrap();
        assert_eq!(&bottom[4..8], &[cyan; 4]);

        let falling = session.state().falling_piece().unwrap();
        assert_eq!(falling.piece, Piece::new(PieceKind::J));
        assert_eq!(falling.position, Position::SPAWN);
    }

    #[test]
    fn test_game_over_then_restart() {
        let board = (0..WIDTH - 1).fold(Board::EMPTY, |board, x| {
            board
                .with_cell(x, 0, Cell::Filled(PieceColor::Red))
                .with_cell(x, 1, Cell::Filled(PieceColor::Red))
        });
        let falling = FallingPiece {
            piece: Piece::new(PieceKind::T),
            position: Position::SPAWN,
        };
        let source: ScriptedPieceSource = "O".parse().unwrap();
        let mut session = GameSession::from_state(GameState::running_with(board, falling), source);

        assert!(session.descend().is_game_over());
        assert!(session.game_over());
        let frozen = session.state().clone();
        assert_eq!(session.shift_left(), Outcome::Ignored);
        assert_eq!(session.descend(), Outcome::Ignored);
        assert_eq!(session.state(), &frozen);

        assert_eq!(session.start(), Outcome::Started);
        assert!(!session.game_over());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_pause_resumes_where_it_left_off() {
        let mut session = session("L");
        session.start();
        session.shift_left();
        session.descend();
        let before = session.state().clone();

        assert_eq!(session.toggle_pause(), Outcome::Paused);
        assert!(session.is_paused());
        assert!(!session.is_running());
        assert_eq!(session.descend(), Outcome::Ignored);
        assert_eq!(session.shift(Direction::Right), Outcome::Ignored);

        assert_eq!(session.toggle_pause(), Outcome::Resumed);
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_default_session_uses_random_source() {
        let mut session: GameSession = GameSession::default();
        assert_eq!(session.start(), Outcome::Started);
        assert!(session.is_running());
    }
}
