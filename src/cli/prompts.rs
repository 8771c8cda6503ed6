//! Line-oriented console I/O
//!
//! Every prompt in the program, including the confirmation asked by the weight
//! validator, reads from the one `LineSource` owned by a `Console`. Tests swap
//! stdin for `ScriptedLines` and stdout for an in-memory buffer.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Write};

use anyhow::Result;

use super::error::InputError;
use crate::convert::{is_affirmative, parse_weight, WeightCheck};
use crate::utils::{error, warning};

/// Supplier of input lines. `Ok(None)` signals end of input.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<String>, InputError>;
}

/// Lines read from standard input
pub struct StdinLines {
    reader: StdinLock<'static>,
}

impl StdinLines {
    pub fn new() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl Default for StdinLines {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinLines {
    fn next_line(&mut self) -> Result<Option<String>, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Pre-supplied lines, consumed front to back
#[derive(Debug, Default, Clone)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLines {
    fn next_line(&mut self) -> Result<Option<String>, InputError> {
        Ok(self.lines.pop_front())
    }
}

/// A line source paired with the writer prompts and results go to
pub struct Console<S, W> {
    source: S,
    out: W,
}

impl<S: LineSource, W: Write> Console<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self { source, out }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (S, W) {
        (self.source, self.out)
    }

    /// Write one line of output
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.out, "{}", line.as_ref())?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    /// Show `prompt` and return the next input line, trimmed
    pub fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        match self.source.next_line()? {
            Some(line) => Ok(line.trim().to_string()),
            None => {
                log::warn!("end of input at prompt {:?}", prompt.trim());
                Err(InputError::EndOfInput.into())
            }
        }
    }

    /// Prompt until the answer parses as an integer
    pub fn read_int(&mut self, prompt: &str) -> Result<i32> {
        loop {
            match self.prompt(prompt)?.parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(error("Invalid input. Please enter a valid integer."))?,
            }
        }
    }

    /// Prompt until the answer is a number that passes weight validation
    pub fn read_weight(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let answer = self.prompt(prompt)?;
            match parse_weight(&answer) {
                Some(weight) => {
                    if self.is_valid_weight(weight)? {
                        return Ok(weight);
                    }
                }
                None => self.say(error("Invalid input. Please enter a valid number."))?,
            }
        }
    }

    /// Single-shot confirmation: true only for "y" or "yes"
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.prompt(prompt)?;
        Ok(is_affirmative(&answer))
    }

    /// Ask until the answer is one of y/yes/n/no
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            match self.prompt(prompt)?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say(warning("Please enter 'y' or 'n'."))?,
            }
        }
    }

    /// Check a weight, printing why it was rejected.
    ///
    /// A weight of exactly zero is confirmed through the same line source as
    /// every other prompt.
    pub fn is_valid_weight(&mut self, weight: f64) -> Result<bool> {
        let check = WeightCheck::classify(weight);
        match check {
            WeightCheck::Valid => Ok(true),
            WeightCheck::Zero => self.confirm(check.message()),
            WeightCheck::Negative | WeightCheck::Unrealistic => {
                self.say(warning(check.message()))?;
                Ok(false)
            }
        }
    }
}
