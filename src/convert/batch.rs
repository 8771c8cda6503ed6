//! Comma-separated batch input

use super::units::{ConversionPair, Unit};
use super::validate::parse_weight;

/// Direction offered by batch conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchDirection {
    LbsToKg,
    KgToLbs,
}

impl BatchDirection {
    /// Map the 1-based menu choice; anything other than 1 or 2 is `None`
    pub fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(BatchDirection::LbsToKg),
            2 => Some(BatchDirection::KgToLbs),
            _ => None,
        }
    }

    pub fn pair(&self) -> ConversionPair {
        match self {
            BatchDirection::LbsToKg => ConversionPair::LBS_KG,
            BatchDirection::KgToLbs => ConversionPair::KG_LBS,
        }
    }
}

/// One comma-separated token of a batch line
#[derive(Debug, Clone, PartialEq)]
pub enum BatchToken {
    Value(f64),
    /// Trimmed text that did not parse as a number
    Invalid(String),
}

pub fn parse_batch(line: &str) -> Vec<BatchToken> {
    line.split(',')
        .map(|raw| {
            let token = raw.trim();
            match parse_weight(token) {
                Some(value) => BatchToken::Value(value),
                None => BatchToken::Invalid(token.to_string()),
            }
        })
        .collect()
}

/// History line recorded after a batch with at least one converted value
pub fn batch_summary(count: usize, from: Unit, to: Unit) -> String {
    format!("Batch: {} values converted from {} to {}", count, from, to)
}
