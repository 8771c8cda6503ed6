//! weightconv: Interactive Weight Converter
//!
//! A menu-driven command-line tool for converting weights between
//! common mass units.

use std::io;

use anyhow::Result;
use clap::Parser;

use weightconv::cli::{Cli, Console, Session, StdinLines};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never mix with the menus on stdout
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    log::debug!("starting session with precision {}", cli.precision);

    let console = Console::new(StdinLines::new(), io::stdout().lock());
    let mut session = Session::new(console, cli.precision);
    session.run()?;

    log::debug!(
        "session finished with {} history entries",
        session.history.len()
    );
    Ok(())
}
