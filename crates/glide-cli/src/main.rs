//! glidectl - Touchpad Acceleration Debugging CLI
//!
//! Inspect acceleration curves and replay recorded motion traces through
//! the glide filters.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{CurveArgs, ReplayArgs, SpeedCurveArgs};
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "glidectl")]
#[command(about = "Inspect touchpad acceleration curves and replay motion traces")]
#[command(version)]
#[command(long_about = "
glidectl evaluates glide acceleration configurations offline.

Use `curve` to tabulate a profile, `speed-curve` to see how the speed
preference maps to gain, and `replay` to feed a recorded trace through a
filter. Use --json for machine-readable output.
")]
struct Cli {
    /// Output in JSON format for machine parsing
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging (-v info, -vv debug, -vvv per-event trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tabulate speed -> factor for a config
    Curve(CurveArgs),

    /// Tabulate speed preference -> speed factor
    SpeedCurve(SpeedCurveArgs),

    /// Replay a JSON-lines motion trace through a filter
    Replay(ReplayArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("glidectl={log_level},glide_filters={log_level},glide::accel={log_level}")
                    .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Curve(args) => commands::curve::execute(args, cli.json),
        Commands::SpeedCurve(args) => commands::speed_curve::execute(args, cli.json),
        Commands::Replay(args) => commands::replay::execute(args, cli.json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_curve_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["glidectl", "curve", "--config", "tp.yaml"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Curve(args) => {
                assert_eq!(args.config.to_str(), Some("tp.yaml"));
                assert!((args.max_speed - 200.0).abs() < f64::EPSILON);
                assert!((args.step - 10.0).abs() < f64::EPSILON);
            }
            other => return Err(format!("unexpected command: {other:?}").into()),
        }
        Ok(())
    }

    #[test]
    fn parse_global_flags_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["glidectl", "speed-curve", "--steps", "4", "--json", "-vv"])?;
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::SpeedCurve(SpeedCurveArgs { steps: 4 })));
        Ok(())
    }

    #[test]
    fn parse_replay() -> TestResult {
        let cli = Cli::try_parse_from([
            "glidectl",
            "replay",
            "-c",
            "tp.json",
            "-t",
            "swipe.jsonl",
            "--constant",
            "--restart-gap-us",
            "250000",
        ])?;
        match cli.command {
            Commands::Replay(args) => {
                assert!(args.constant);
                assert_eq!(args.restart_gap_us, Some(250_000));
            }
            other => return Err(format!("unexpected command: {other:?}").into()),
        }
        Ok(())
    }

    #[test]
    fn rejects_zero_steps() {
        assert!(Cli::try_parse_from(["glidectl", "speed-curve", "--steps", "0"]).is_err());
    }

    #[test]
    fn replay_requires_trace() {
        assert!(Cli::try_parse_from(["glidectl", "replay", "--config", "tp.json"]).is_err());
    }
}
