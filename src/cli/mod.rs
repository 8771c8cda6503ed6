//! CLI module - argument parsing, console prompts and the interactive menus

mod args;
pub mod error;
pub mod menu;
mod modes;
pub mod prompts;

pub use args::Cli;
pub use error::InputError;
pub use menu::{MenuState, Session};
pub use prompts::{Console, LineSource, ScriptedLines, StdinLines};
