//! Convert module - units, factors, validation and entry parsing

pub mod batch;
pub mod precision;
pub mod quick;
pub mod units;
pub mod validate;

pub use batch::*;
pub use precision::*;
pub use quick::*;
pub use units::*;
pub use validate::*;
