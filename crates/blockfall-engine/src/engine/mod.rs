//! Game rules and state management.
//!
//! This module drives the core data structures through a game:
//!
//! - [`GameState`] - Immutable game state; every command returns the next state
//! - [`GameSession`] - Owner of a [`GameState`] and its [`PieceSource`]
//! - [`GameStats`] - Score, cleared rows and locked pieces
//! - [`TickDriver`] - Automatic descent on a fixed interval
//! - [`Snapshot`] - Serializable view for painting or export
//!
//! # Game Flow
//!
//! 1. `start()` clears the board and spawns a piece above it
//! 2. The player shifts the piece; the tick driver (or the player) descends it
//! 3. A piece that cannot descend locks, full rows clear, the next piece spawns
//! 4. The game ends when a locked piece still sticks out above the board, or
//!    a new piece cannot be placed
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{GameSession, Outcome};
//!
//! let mut session = GameSession::default();
//! session.start();
//!
//! while !session.game_over() {
//!     if let Outcome::Locked { cleared_rows } = session.descend() {
//!         println!("locked, cleared {cleared_rows} rows");
//!     }
//! }
//! ```

pub use self::{
    game_session::*, game_state::*, game_stats::*, snapshot::*, spawner::*, tick::*,
};

mod game_session;
mod game_state;
mod game_stats;
mod snapshot;
mod spawner;
mod tick;
