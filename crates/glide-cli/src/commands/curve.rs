//! `glidectl curve`: tabulate a configured acceleration curve.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use glide_filters::{AccelConfig, AccelProfile};
use serde::Serialize;

use crate::commands::load_config;
use crate::error::CliError;
use crate::output;

#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Acceleration config (.json, .yaml or .yml)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Highest speed to tabulate, in the profile's speed unit
    #[arg(long, default_value_t = 200.0)]
    pub max_speed: f64,

    /// Distance between rows
    #[arg(long, default_value_t = 10.0)]
    pub step: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CurveRow {
    pub speed: f64,
    pub factor: f64,
}

#[derive(Debug, Serialize)]
struct CurveTable<'a> {
    profile: AccelProfile,
    unit: &'static str,
    rows: &'a [CurveRow],
}

pub fn execute(args: &CurveArgs, json: bool) -> Result<()> {
    let config = load_config(&args.config)?;
    let rows = tabulate(&config, args.max_speed, args.step)?;
    let unit = speed_unit(config.profile);

    if json {
        output::print_json(
            "curve",
            &CurveTable {
                profile: config.profile,
                unit,
                rows: &rows,
            },
        )?;
    } else {
        output::print_header(&format!("{} curve (speed in {unit})", config.profile));
        for row in &rows {
            println!("{:>10.2}  {:.4}", row.speed, row.factor);
        }
    }
    Ok(())
}

fn speed_unit(profile: AccelProfile) -> &'static str {
    match profile {
        AccelProfile::TouchpadPl => "mm/s",
        AccelProfile::Custom => "units/ms",
    }
}

/// Evaluate the configured curve from zero to `max_speed` inclusive.
pub fn tabulate(config: &AccelConfig, max_speed: f64, step: f64) -> Result<Vec<CurveRow>, CliError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(CliError::InvalidArgument(format!("step must be > 0, got {step}")));
    }
    if !max_speed.is_finite() || max_speed < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "max speed must be >= 0, got {max_speed}"
        )));
    }

    let evaluate: Box<dyn Fn(f64) -> f64> = match config.profile {
        AccelProfile::TouchpadPl => {
            let profile = config.touchpad_profile().map_err(CliError::Config)?;
            Box::new(move |speed| profile.evaluate(speed))
        }
        AccelProfile::Custom => {
            let curve = config.custom_curve().map_err(CliError::Config)?;
            Box::new(move |speed| curve.evaluate(speed))
        }
    };

    let mut rows = Vec::new();
    let mut index = 0u32;
    loop {
        let speed = f64::from(index) * step;
        if speed > max_speed {
            break;
        }
        rows.push(CurveRow {
            speed,
            factor: evaluate(speed),
        });
        index += 1;
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn tabulates_stock_touchpad_curve() -> TestResult {
        let rows = tabulate(&AccelConfig::default(), 100.0, 20.0)?;
        let factors: Vec<String> = rows.iter().map(|r| format!("{:.4}", r.factor)).collect();
        assert_eq!(
            factors,
            ["0.0500", "0.0500", "0.2875", "0.5250", "0.7625", "1.0000"]
        );
        Ok(())
    }

    #[test]
    fn tabulates_custom_curve() -> TestResult {
        let config = AccelConfig {
            profile: AccelProfile::Custom,
            ..AccelConfig::default()
        };
        let rows = tabulate(&config, 5.0, 5.0)?;
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| (r.factor - 1.0).abs() < f64::EPSILON));
        Ok(())
    }

    #[test]
    fn rejects_non_positive_step() {
        assert!(matches!(
            tabulate(&AccelConfig::default(), 100.0, 0.0),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
