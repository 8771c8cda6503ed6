//! Report module - conversion history and static reference content

pub mod history;
pub mod reference;

pub use history::*;
pub use reference::*;
