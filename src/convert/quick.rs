//! Free-form "<value> <unit>" entries for Quick Convert mode

use thiserror::Error;

use super::units::Unit;
use super::validate::parse_weight;

/// Why a quick entry could not be understood. Display text is the user hint.
#[derive(Debug, Error, PartialEq)]
pub enum QuickEntryError {
    #[error("Format: 'value unit'. Example: '150 lbs'")]
    MissingUnit,
    #[error("Invalid number format. Use: '150 lbs' or '68.5 kg'")]
    InvalidNumber(String),
    #[error("Unknown unit. Try: lbs, kg, oz, g, stones")]
    UnknownUnit(String),
}

/// A parsed quick entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickEntry {
    pub value: f64,
    pub unit: Unit,
}

/// True when the line asks to leave Quick Convert mode
pub fn is_back_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("back")
}

/// Parse a line such as `"150 lbs"`. Tokens after the unit are ignored.
pub fn parse_quick_entry(line: &str) -> Result<QuickEntry, QuickEntryError> {
    let mut parts = line.split_whitespace();
    let (value, unit) = match (parts.next(), parts.next()) {
        (Some(value), Some(unit)) => (value, unit),
        _ => return Err(QuickEntryError::MissingUnit),
    };

    let value = parse_weight(value).ok_or_else(|| QuickEntryError::InvalidNumber(value.to_string()))?;
    let unit = Unit::from_token(unit).ok_or_else(|| QuickEntryError::UnknownUnit(unit.to_string()))?;

    Ok(QuickEntry { value, unit })
}
