//! `glidectl replay`: run a recorded motion trace through a filter.
//!
//! Traces are JSON lines, one `{"dx": .., "dy": .., "time_us": ..}` object
//! per event. Blank lines and lines starting with `#` are skipped.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use glide_filters::prelude::DeviceFloatCoords;
use glide_filters::{
    AccelConfig, MotionFilter, NormalizedCoords, TracingSink, create_filter_with_diagnostics,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::commands::load_config;
use crate::error::CliError;
use crate::output;

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Acceleration config (.json, .yaml or .yml)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Motion trace in JSON lines
    #[arg(short, long)]
    pub trace: PathBuf,

    /// Use the unaccelerated path
    #[arg(long)]
    pub constant: bool,

    /// Restart the filter when events are further apart than this
    #[arg(long)]
    pub restart_gap_us: Option<u64>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TraceEvent {
    pub dx: f64,
    pub dy: f64,
    pub time_us: u64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ReplayRow {
    pub time_us: u64,
    pub dx: f64,
    pub dy: f64,
    pub x: f64,
    pub y: f64,
    pub restarted: bool,
}

#[derive(Debug, Serialize)]
struct ReplaySummary<'a> {
    events: usize,
    restarts: usize,
    total_x: f64,
    total_y: f64,
    rows: &'a [ReplayRow],
}

pub fn execute(args: &ReplayArgs, json: bool) -> Result<()> {
    let config = load_config(&args.config)?;
    let trace = std::fs::read_to_string(&args.trace)?;
    let events = parse_trace(&trace)?;
    info!(events = events.len(), profile = %config.profile, "replaying trace");

    let rows = replay(&config, &events, args.constant, args.restart_gap_us)?;
    let restarts = rows.iter().filter(|row| row.restarted).count();
    let total_x: f64 = rows.iter().map(|row| row.x).sum();
    let total_y: f64 = rows.iter().map(|row| row.y).sum();

    if json {
        output::print_json(
            "replay",
            &ReplaySummary {
                events: rows.len(),
                restarts,
                total_x,
                total_y,
                rows: &rows,
            },
        )?;
    } else {
        output::print_header(&format!(
            "{} events, {} restarts, total ({:.3}, {:.3})",
            rows.len(),
            restarts,
            total_x,
            total_y
        ));
        for row in &rows {
            let marker = if row.restarted { "*" } else { " " };
            println!(
                "{marker}{:>12}  {:>8.3} {:>8.3}  ->  {:>9.4} {:>9.4}",
                row.time_us, row.dx, row.dy, row.x, row.y
            );
        }
    }
    Ok(())
}

/// Parse a JSON-lines trace; line numbers in errors are 1-based.
pub fn parse_trace(input: &str) -> Result<Vec<TraceEvent>, CliError> {
    let mut events = Vec::new();
    let mut previous: Option<u64> = None;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let event: TraceEvent =
            serde_json::from_str(trimmed).map_err(|err| CliError::TraceParse {
                line: line_no,
                message: err.to_string(),
            })?;
        if !event.dx.is_finite() || !event.dy.is_finite() {
            return Err(CliError::TraceParse {
                line: line_no,
                message: "deltas must be finite".into(),
            });
        }
        if previous.is_some_and(|prev| event.time_us < prev) {
            return Err(CliError::TraceParse {
                line: line_no,
                message: format!("timestamp {} goes backwards", event.time_us),
            });
        }

        previous = Some(event.time_us);
        events.push(event);
    }
    Ok(events)
}

/// Feed `events` through a filter built from `config`.
pub fn replay(
    config: &AccelConfig,
    events: &[TraceEvent],
    constant: bool,
    restart_gap_us: Option<u64>,
) -> Result<Vec<ReplayRow>, CliError> {
    let mut filter =
        create_filter_with_diagnostics(config, Arc::new(TracingSink)).map_err(CliError::Config)?;

    let mut rows = Vec::with_capacity(events.len());
    let mut previous: Option<u64> = None;

    for event in events {
        let restarted = match previous {
            None => true,
            Some(prev) => restart_gap_us.is_some_and(|gap| event.time_us.saturating_sub(prev) > gap),
        };
        if restarted {
            debug!(time_us = event.time_us, "restarting filter");
            filter.restart(event.time_us);
        }
        previous = Some(event.time_us);

        let out = evaluate(filter.as_mut(), event, constant);
        rows.push(ReplayRow {
            time_us: event.time_us,
            dx: event.dx,
            dy: event.dy,
            x: out.x,
            y: out.y,
            restarted,
        });
    }
    Ok(rows)
}

fn evaluate(filter: &mut dyn MotionFilter, event: &TraceEvent, constant: bool) -> NormalizedCoords {
    let delta = DeviceFloatCoords::new(event.dx, event.dy);
    if constant {
        filter.filter_constant(delta, event.time_us)
    } else {
        filter.filter(delta, event.time_us)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const TRACE: &str = r#"
# two-finger scroll, then a pause
{"dx": 2.0, "dy": 0.0, "time_us": 10000}
{"dx": 3.0, "dy": 1.0, "time_us": 17000}

{"dx": 1.0, "dy": 0.0, "time_us": 2000000}
"#;

    #[test]
    fn parses_trace_skipping_comments() -> TestResult {
        let events = parse_trace(TRACE)?;
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[1],
            TraceEvent {
                dx: 3.0,
                dy: 1.0,
                time_us: 17_000
            }
        );
        Ok(())
    }

    #[test]
    fn reports_line_of_bad_event() {
        let err = parse_trace("{\"dx\": 1.0, \"dy\": 0.0, \"time_us\": 1}\n{\"dx\": 1.0}\n");
        assert!(matches!(err, Err(CliError::TraceParse { line: 2, .. })));
    }

    #[test]
    fn rejects_time_going_backwards() {
        let err = parse_trace(
            "{\"dx\": 1.0, \"dy\": 0.0, \"time_us\": 10}\n{\"dx\": 1.0, \"dy\": 0.0, \"time_us\": 5}\n",
        );
        assert!(matches!(err, Err(CliError::TraceParse { line: 2, .. })));
    }

    #[test]
    fn restarts_on_gaps() -> TestResult {
        let events = parse_trace(TRACE)?;
        let rows = replay(&AccelConfig::default(), &events, false, Some(500_000))?;
        let restarted: Vec<bool> = rows.iter().map(|r| r.restarted).collect();
        assert_eq!(restarted, [true, false, true]);
        Ok(())
    }

    #[test]
    fn constant_path_uses_flat_gain() -> TestResult {
        let events = parse_trace(TRACE)?;
        let rows = replay(&AccelConfig::default(), &events, true, None)?;
        for row in rows {
            assert!((row.x - row.dx * glide_filters::CONSTANT_GAIN).abs() < 1e-12);
        }
        Ok(())
    }
}
