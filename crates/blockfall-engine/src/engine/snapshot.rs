use serde::{Deserialize, Serialize};

use crate::core::board::Board;

use super::game_state::GameState;

/// Read-only view of a game for painting or export.
///
/// `grid` is the settled board with the falling piece overlaid, top row
/// first. Cells serialize as `null` or a lowercase color name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Board,
    pub score: usize,
    pub game_over: bool,
    pub is_paused: bool,
    pub game_started: bool,
    pub cleared_rows: usize,
    pub locked_pieces: usize,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        let stats = state.stats();
        Self {
            grid: state.render(),
            score: stats.score(),
            game_over: state.game_over(),
            is_paused: state.is_paused(),
            game_started: state.game_started(),
            cleared_rows: stats.cleared_rows(),
            locked_pieces: stats.locked_pieces(),
        }
    }
}
