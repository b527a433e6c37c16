use serde::{Deserialize, Serialize};

use crate::core::{
    board::Board,
    collision::collides,
    piece::{Piece, Position},
};

use super::{
    game_stats::GameStats,
    spawner::{PieceSource, spawn},
};

/// Lifecycle of a game.
///
/// ```text
/// NotStarted ──start──▶ Running ◀──toggle_pause──▶ Paused
///                          │
///                        lock (top-out)
///                          ▼
///                       GameOver ──start──▶ Running
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum Status {
    #[default]
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// Horizontal shift direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[must_use]
    pub const fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// A command issued by the presentation layer or the tick driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Start,
    TogglePause,
    ShiftLeft,
    ShiftRight,
    Descend,
}

/// What a command did to the game.
///
/// Commands never fail; an illegal or blocked command is reported here and
/// otherwise leaves the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// The command is not accepted in the current status.
    Ignored,
    /// A new game began.
    Started,
    Paused,
    Resumed,
    /// The falling piece moved one cell.
    Moved,
    /// The move would collide; the piece stayed put.
    Blocked,
    /// The piece locked and a new piece spawned.
    Locked { cleared_rows: usize },
    /// The game ended. `cleared_rows` counts rows removed by the final lock.
    GameOver { cleared_rows: usize },
}

/// The current piece together with its board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingPiece {
    pub piece: Piece,
    pub position: Position,
}

/// Complete game state as an immutable value.
///
/// Every command is a method taking `&self` and returning the next state
/// together with an [`Outcome`]; the receiver is never modified. Randomness
/// only enters through the [`PieceSource`] passed to [`start`] and
/// [`descend`].
///
/// # Example
///
/// ```
/// use blockfall_engine::{Direction, GameState, Outcome, ScriptedPieceSource};
///
/// let mut source: ScriptedPieceSource = "O".parse().unwrap();
/// let (state, outcome) = GameState::new().start(&mut source);
/// assert_eq!(outcome, Outcome::Started);
///
/// let (moved, outcome) = state.shift(Direction::Left);
/// assert_eq!(outcome, Outcome::Moved);
/// assert_eq!(moved.falling_piece().unwrap().position.x, 3);
/// ```
///
/// [`start`]: Self::start
/// [`descend`]: Self::descend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    falling: Option<FallingPiece>,
    status: Status,
    stats: GameStats,
}

impl GameState {
    /// Creates a state that has not been started yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current piece, or `None` before the first start.
    #[must_use]
    pub fn falling_piece(&self) -> Option<FallingPiece> {
        self.falling
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.status.is_game_over()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status.is_paused()
    }

    #[must_use]
    pub fn game_started(&self) -> bool {
        !self.status.is_not_started()
    }

    /// Returns the settled board with the falling piece drawn on top.
    ///
    /// Computed on every call; the board itself is not modified.
    #[must_use]
    pub fn render(&self) -> Board {
        match self.falling {
            Some(FallingPiece { piece, position }) => self.board.merge(&piece, position),
            None => self.board,
        }
    }

    /// Dispatches a [`Command`] to the matching transition.
    #[must_use]
    pub fn apply<S>(&self, command: Command, source: &mut S) -> (Self, Outcome)
    where
        S: PieceSource + ?Sized,
    {
        match command {
            Command::Start => self.start(source),
            Command::TogglePause => self.toggle_pause(),
            Command::ShiftLeft => self.shift(Direction::Left),
            Command::ShiftRight => self.shift(Direction::Right),
            Command::Descend => self.descend(source),
        }
    }

    /// Begins a new game on an empty board. Always accepted.
    #[must_use]
    pub fn start<S>(&self, source: &mut S) -> (Self, Outcome)
    where
        S: PieceSource + ?Sized,
    {
        let (piece, position) = spawn(source);
        let board = Board::EMPTY;
        let mut next = Self {
            board,
            falling: Some(FallingPiece { piece, position }),
            status: Status::Running,
            stats: GameStats::new(),
        };
        if collides(&piece, position, &board) {
            next.status = Status::GameOver;
            return (next, Outcome::GameOver { cleared_rows: 0 });
        }
        (next, Outcome::Started)
    }

    /// Flips between running and paused. Ignored outside those two states.
    #[must_use]
    pub fn toggle_pause(&self) -> (Self, Outcome) {
        let (status, outcome) = match self.status {
            Status::Running => (Status::Paused, Outcome::Paused),
            Status::Paused => (Status::Running, Outcome::Resumed),
            Status::NotStarted | Status::GameOver => return (self.clone(), Outcome::Ignored),
        };
        let next = Self {
            status,
            ..self.clone()
        };
        (next, outcome)
    }

    /// Moves the falling piece one column, if the target is free.
    #[must_use]
    pub fn shift(&self, direction: Direction) -> (Self, Outcome) {
        let Some(falling) = self.active_piece() else {
            return (self.clone(), Outcome::Ignored);
        };
        let candidate = falling.position.shifted(direction.dx());
        if collides(&falling.piece, candidate, &self.board) {
            return (self.clone(), Outcome::Blocked);
        }
        (self.with_position(candidate), Outcome::Moved)
    }

    /// Moves the falling piece one row down, or locks it if it cannot move.
    ///
    /// A lock merges the piece at its current position, clears full rows,
    /// scores them and spawns the next piece. The game ends instead of
    /// continuing when
    ///
    /// - part of the locked piece is still above the board (those cells
    ///   cannot be merged), or
    /// - the new piece collides at the spawn position.
    ///
    /// On game over the locked piece stays as the current piece.
    #[must_use]
    pub fn descend<S>(&self, source: &mut S) -> (Self, Outcome)
    where
        S: PieceSource + ?Sized,
    {
        let Some(falling) = self.active_piece() else {
            return (self.clone(), Outcome::Ignored);
        };
        let candidate = falling.position.lowered();
        if !collides(&falling.piece, candidate, &self.board) {
            return (self.with_position(candidate), Outcome::Moved);
        }

        let merged = self.board.merge(&falling.piece, falling.position);
        let (board, cleared_rows) = merged.clear_full_rows();
        let mut stats = self.stats;
        stats.record_lock(cleared_rows);
        let locked_out = falling
            .piece
            .cells_at(falling.position)
            .iter()
            .any(|cell| cell.y < 0);

        let (piece, position) = spawn(source);
        if locked_out || collides(&piece, position, &board) {
            let next = Self {
                board,
                falling: Some(falling),
                status: Status::GameOver,
                stats,
            };
            return (next, Outcome::GameOver { cleared_rows });
        }

        let next = Self {
            board,
            falling: Some(FallingPiece { piece, position }),
            status: Status::Running,
            stats,
        };
        (next, Outcome::Locked { cleared_rows })
    }

    /// Returns the falling piece if commands that move it are accepted.
    fn active_piece(&self) -> Option<FallingPiece> {
        self.falling.filter(|_| self.status.is_running())
    }

    fn with_position(&self, position: Position) -> Self {
        let mut next = self.clone();
        if let Some(falling) = &mut next.falling {
            falling.position = position;
        }
        next
    }

    /// Builds a running state from an arbitrary board and piece.
    #[cfg(test)]
    pub(crate) fn running_with(board: Board, falling: FallingPiece) -> Self {
        Self {
            board,
            falling: Some(falling),
            status: Status::Running,
            stats: GameStats::new(),
        }
    }
}
