use std::time::Duration;

use blockfall_engine::{GameSession, RandomPieceSource, TickDriver};
use ratatui_runtime::Runtime;

use self::app::PlayApp;

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Milliseconds between automatic descents
    #[clap(long, default_value_t = 1000, value_parser = super::parse_tick_ms)]
    tick_ms: u64,
    /// Seed for the piece generator (random if omitted)
    #[clap(long)]
    seed: Option<u64>,
    /// Maximum frames drawn per second
    #[clap(long, default_value_t = 60.0, value_parser = super::parse_fps)]
    fps: f64,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            seed: None,
            fps: 60.0,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { tick_ms, seed, fps } = arg;

    let source = seed.map_or_else(RandomPieceSource::new, RandomPieceSource::with_seed);
    let ticks = TickDriver::new(Duration::from_millis(*tick_ms))?;
    let mut app = PlayApp::new(GameSession::new(source), ticks, *fps);

    Runtime::new().run(&mut app)?;

    let snapshot = app.session().snapshot();
    tracing::info!(
        score = snapshot.score,
        cleared_rows = snapshot.cleared_rows,
        "session closed"
    );
    Ok(())
}
