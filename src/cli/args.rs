//! Command-line argument definitions using clap

use clap::Parser;

use crate::convert::Precision;

/// weightconv - Convert weights between lbs, kg, oz, g and stones
#[derive(Parser, Debug)]
#[command(name = "weightconv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Decimal places used for conversion results (0-6).
    /// Can also be changed during the session from the Precision Settings menu.
    #[arg(short, long, default_value = "2", value_parser = validate_precision)]
    pub precision: Precision,

    /// Log level for diagnostics written to stderr (error, warn, info, debug, trace).
    /// RUST_LOG takes precedence when set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Disable colored output
    #[arg(long, default_value = "false")]
    pub no_color: bool,
}

/// Validator for precision parameter
fn validate_precision(s: &str) -> Result<Precision, String> {
    let value: i32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid integer", s))?;

    Precision::new(value).map_err(|e| e.to_string())
}
