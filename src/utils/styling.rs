//! Terminal styling helpers
//!
//! Each helper returns a `String` rather than printing, so the caller decides
//! which writer receives it. With colors disabled the text is unchanged.

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static SCALE: Emoji<'_, '_> = Emoji("⚖️  ", "");
pub static WAVE: Emoji<'_, '_> = Emoji("👋 ", "");

/// Welcome banner shown once at startup
pub fn banner(version: &str) -> Vec<String> {
    vec![
        String::new(),
        format!(
            "{}{}",
            SCALE,
            style("=== Welcome to the Advanced Weight Converter ===")
                .cyan()
                .bold()
        ),
        format!("{}", style(format!("v{}", version)).dim()),
    ]
}

/// Section heading, e.g. `=== Main Menu ===`
pub fn heading(title: &str) -> String {
    format!("{}", style(format!("=== {} ===", title)).cyan().bold())
}

/// Numbered menu option
pub fn menu_option(number: usize, label: &str) -> String {
    format!("{} {}", style(format!("{}:", number)).yellow().bold(), label)
}

pub fn success(message: &str) -> String {
    format!("{}", style(message).green())
}

pub fn warning(message: &str) -> String {
    format!("{}", style(message).yellow())
}

pub fn error(message: &str) -> String {
    format!("{}", style(message).red())
}

/// A conversion result line
pub fn result(message: &str) -> String {
    format!("{}", style(message).white().bold())
}

pub fn dim(message: &str) -> String {
    format!("{}", style(message).dim())
}

/// A horizontal rule of the given width
pub fn rule(width: usize) -> String {
    dim(&"-".repeat(width))
}

pub fn farewell() -> String {
    format!(
        "{}{}",
        WAVE,
        style("Thank you for using the Weight Converter. Goodbye!")
            .green()
            .bold()
    )
}
