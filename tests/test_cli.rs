//! Tests for CLI argument parsing

use clap::Parser;
use weightconv::cli::Cli;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["weightconv"]);

    assert_eq!(cli.precision.places(), 2, "Default precision should be 2");
    assert_eq!(cli.log_level, "warn", "Default log level should be warn");
    assert!(!cli.no_color, "Default no_color should be false");
}

#[test]
fn test_cli_custom_precision() {
    let cli = Cli::parse_from(["weightconv", "--precision", "4"]);
    assert_eq!(cli.precision.places(), 4);

    let cli = Cli::parse_from(["weightconv", "-p", "0"]);
    assert_eq!(cli.precision.places(), 0);
}

#[test]
fn test_cli_precision_out_of_range() {
    let err = Cli::try_parse_from(["weightconv", "--precision", "7"]).unwrap_err();
    assert!(err.to_string().contains("Precision must be between 0 and 6, got 7"));

    assert!(Cli::try_parse_from(["weightconv", "--precision", "two"]).is_err());
    assert!(Cli::try_parse_from(["weightconv", "--precision=-1"]).is_err());
}

#[test]
fn test_cli_logging_and_color_flags() {
    let cli = Cli::parse_from(["weightconv", "--log-level", "debug", "--no-color"]);

    assert_eq!(cli.log_level, "debug");
    assert!(cli.no_color);
}

#[test]
fn test_cli_rejects_positional_arguments() {
    assert!(Cli::try_parse_from(["weightconv", "150", "lbs"]).is_err());
}
