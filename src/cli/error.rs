//! Errors raised while reading interactive input

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// The line source ran dry while a prompt was waiting for an answer
    #[error("input stream closed while waiting for a response")]
    EndOfInput,

    #[error("failed to read from input: {0}")]
    Io(#[from] std::io::Error),
}
