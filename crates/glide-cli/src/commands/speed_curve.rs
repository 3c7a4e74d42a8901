//! `glidectl speed-curve`: show how speed preferences map to gain.

use anyhow::Result;
use clap::Args;
use glide_curves::{SPEED_MAX, SPEED_MIN, speed_factor};
use serde::Serialize;

use crate::error::CliError;
use crate::output;

#[derive(Args, Debug)]
pub struct SpeedCurveArgs {
    /// Number of intervals between -1 and 1
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..=10_000))]
    pub steps: u32,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SpeedRow {
    pub preference: f64,
    pub speed_factor: f64,
}

pub fn execute(args: &SpeedCurveArgs, json: bool) -> Result<()> {
    let rows = tabulate(args.steps)?;

    if json {
        output::print_json("speed_curve", &rows)?;
    } else {
        output::print_header("speed preference -> speed factor");
        for row in &rows {
            println!("{:>7.3}  {:.4}", row.preference, row.speed_factor);
        }
    }
    Ok(())
}

/// Evaluate the speed curve at `steps + 1` evenly spaced preferences.
pub fn tabulate(steps: u32) -> Result<Vec<SpeedRow>, CliError> {
    let steps = steps.max(1);
    let width = (SPEED_MAX - SPEED_MIN) / f64::from(steps);

    (0..=steps)
        .map(|i| {
            let preference = if i == steps {
                SPEED_MAX
            } else {
                SPEED_MIN + f64::from(i) * width
            };
            let factor = speed_factor(preference)
                .map_err(|err| CliError::Config(err.into()))?;
            Ok(SpeedRow {
                preference,
                speed_factor: factor,
            })
        })
        .collect()
}
