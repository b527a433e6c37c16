use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

use crate::logging;

use self::{play::PlayArg, simulate::SimulateArg};

mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Write log output to this file (play mode logs nothing without it)
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,
    /// Maximum log level
    #[clap(long, global = true, default_value_t = Level::INFO)]
    log_level: Level,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play interactively in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Run a scripted command sequence and print the final snapshot as JSON
    Simulate(#[clap(flatten)] SimulateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let mode = args.mode.unwrap_or(Mode::Play(PlayArg::default()));

    match &args.log_file {
        Some(path) => logging::init_file(path, args.log_level)?,
        // Stderr belongs to the terminal UI while playing
        None if matches!(mode, Mode::Simulate(_)) => logging::init_stderr(args.log_level),
        None => {}
    }

    match mode {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}

fn parse_tick_ms(s: &str) -> Result<u64, String> {
    match s.parse::<u64>() {
        Ok(0) => Err("tick interval must be at least 1 ms".to_owned()),
        Ok(ms) => Ok(ms),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_fps(s: &str) -> Result<f64, String> {
    let fps = s.parse::<f64>().map_err(|e| e.to_string())?;
    if !fps.is_finite() || fps <= 0.0 {
        return Err("frame rate must be a positive finite number".to_owned());
    }
    Ok(fps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_play() {
        let args = CommandArgs::try_parse_from(["blockfall"]).unwrap();
        assert!(args.mode.is_none());
        assert_eq!(args.log_level, Level::INFO);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_global_log_options_after_subcommand() {
        let args = CommandArgs::try_parse_from([
            "blockfall",
            "simulate",
            "script.json",
            "--log-level",
            "debug",
            "--log-file",
            "out.log",
        ])
        .unwrap();
        assert_eq!(args.log_level, Level::DEBUG);
        assert_eq!(args.log_file, Some(PathBuf::from("out.log")));
        assert!(matches!(args.mode, Some(Mode::Simulate(_))));
    }

    #[test]
    fn test_zero_tick_rejected() {
        assert!(CommandArgs::try_parse_from(["blockfall", "play", "--tick-ms", "0"]).is_err());
        assert!(parse_tick_ms("abc").is_err());
        assert_eq!(parse_tick_ms("250"), Ok(250));
    }

    #[test]
    fn test_invalid_fps_rejected() {
        for fps in ["0", "-30", "NaN", "inf", "fast"] {
            assert!(
                CommandArgs::try_parse_from(["blockfall", "play", "--fps", fps]).is_err(),
                "--fps {fps} accepted"
            );
        }
        assert!(parse_fps("30").is_ok_and(|fps| (fps - 30.0).abs() < f64::EPSILON));
        assert!(CommandArgs::try_parse_from(["blockfall", "play", "--fps", "0.5"]).is_ok());
    }
}
