//! Session-wide decimal precision for conversion output

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrecisionError {
    #[error("Precision must be between 0 and 6, got {0}")]
    OutOfRange(i32),
}

/// Number of decimal places used when printing conversions (0 to 6)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision(usize);

impl Precision {
    pub const MAX: usize = 6;
    pub const DEFAULT: Precision = Precision(2);

    pub fn new(places: i32) -> Result<Self, PrecisionError> {
        if (0..=Self::MAX as i32).contains(&places) {
            Ok(Precision(places as usize))
        } else {
            Err(PrecisionError::OutOfRange(places))
        }
    }

    pub fn places(&self) -> usize {
        self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
