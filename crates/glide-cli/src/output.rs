//! Output formatting for CLI responses

use anyhow::Error;
use colored::Colorize;
use serde::Serialize;
use serde_json::json;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    use crate::error::CliError;

    match error.downcast_ref::<CliError>() {
        Some(CliError::Config(_)) => "config",
        Some(CliError::TraceParse { .. }) => "trace_parse",
        Some(CliError::InvalidArgument(_)) => "invalid_argument",
        Some(CliError::IoError(_)) => "io",
        Some(CliError::JsonError(_)) => "json",
        None => "unknown",
    }
}

/// Print a successful JSON response with `payload` merged under `key`.
pub fn print_json<T: Serialize>(key: &str, payload: &T) -> Result<(), serde_json::Error> {
    let mut body = serde_json::Map::new();
    body.insert("success".into(), true.into());
    body.insert(key.into(), serde_json::to_value(payload)?);
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

/// Print a bold section header.
pub fn print_header(title: &str) {
    println!("{}", title.bold());
}
