use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use blockfall_engine::{
    Command, GameSession, PieceSource, RandomPieceSource, ScriptedPieceSource, Snapshot,
    TickDriver,
};
use serde::Deserialize;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Path to the JSON script, or `-` to read it from stdin
    script: PathBuf,
    /// Milliseconds between automatic descents
    #[clap(long, default_value_t = 1000, value_parser = super::parse_tick_ms)]
    tick_ms: u64,
    /// Seed for the piece generator
    #[clap(long, default_value_t = 0)]
    seed: u64,
    /// Fixed piece sequence such as `IOT`, repeated as needed (overrides `--seed`)
    #[clap(long)]
    pieces: Option<ScriptedPieceSource>,
}

/// One entry of a simulation script.
///
/// Commands are written as bare strings (`"shift_left"`); time passes with
/// `{"wait_ms": 1500}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum Step {
    Command(Command),
    Wait { wait_ms: u64 },
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        script,
        tick_ms,
        seed,
        pieces,
    } = arg;

    let steps = read_script(script)?;
    let source: Box<dyn PieceSource> = match pieces {
        Some(pieces) => Box::new(pieces.clone()),
        None => Box::new(RandomPieceSource::with_seed(*seed)),
    };
    let ticks = TickDriver::new(Duration::from_millis(*tick_ms))?;

    let snapshot = simulate(&steps, GameSession::new(source), ticks);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn read_script(path: &Path) -> anyhow::Result<Vec<Step>> {
    let reader: Box<dyn Read> = if path.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(path)
            .with_context(|| format!("failed to open script {}", path.display()))?;
        Box::new(file)
    };
    let steps = serde_json::from_reader(BufReader::new(reader))
        .with_context(|| format!("invalid script {}", path.display()))?;
    Ok(steps)
}

fn simulate<S>(steps: &[Step], mut session: GameSession<S>, mut ticks: TickDriver) -> Snapshot
where
    S: PieceSource,
{
    for (index, step) in steps.iter().copied().enumerate() {
        match step {
            Step::Command(command) => {
                let outcome = session.apply(command);
                ticks.sync(&session);
                tracing::debug!(index, ?command, ?outcome, "step");
            }
            Step::Wait { wait_ms } => {
                let descents = ticks.advance(&mut session, Duration::from_millis(wait_ms));
                tracing::debug!(index, wait_ms, descents, "step");
            }
        }
    }
    session.snapshot()
}
