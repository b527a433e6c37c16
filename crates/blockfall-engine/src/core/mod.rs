//! Pure game data: the piece catalog, the board, and the collision rule.

pub use self::{board::*, collision::*, piece::*};

pub(crate) mod board;
pub(crate) mod collision;
pub(crate) mod piece;
