//! weightconv: Weight Conversion Library
//!
//! Converts weights between pounds, kilograms, ounces, grams and stones,
//! keeps an in-memory history of conversions, and drives the interactive
//! menus over any line source and writer.

pub mod cli;
pub mod convert;
pub mod report;
pub mod utils;
