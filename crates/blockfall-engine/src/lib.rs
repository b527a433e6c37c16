//! Falling-block puzzle engine.
//!
//! The crate is split into pure data in [`core`] (piece catalog, board,
//! collision rule) and game logic in [`engine`] (state machine, spawner,
//! tick driver). Nothing here touches the terminal or performs I/O.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
