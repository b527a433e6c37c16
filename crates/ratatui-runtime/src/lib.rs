//! Minimal terminal application runtime on top of ratatui and crossterm.
//!
//! An [`App`] is driven by three kinds of events: ticks (from a scoped
//! interval the app acquires and releases at will), render requests, and
//! crossterm input events.

pub use self::{app::App, event_loop::RenderMode, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
mod tick_timer;
