//! Utility module - terminal styling

pub mod styling;

pub use styling::*;
