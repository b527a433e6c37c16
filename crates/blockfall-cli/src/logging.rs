use std::{fs::File, path::Path, sync::Mutex};

use anyhow::Context as _;
use tracing::Level;

/// Sends engine events to `path`, truncating it.
pub fn init_file(path: &Path, level: Level) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

pub fn init_stderr(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
