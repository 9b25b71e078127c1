//! Line-oriented console over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Console errors.
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed")]
    InputClosed,
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Prompts and messages for an interactive session.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of output.
    pub fn say(&mut self, text: impl Display) -> ConsoleResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show `label` and read one trimmed line.
    ///
    /// End of input is reported as [`ConsoleError::InputClosed`].
    pub fn prompt(&mut self, label: &str) -> ConsoleResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript readable when input ends mid-prompt.
            writeln!(self.output)?;
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Prompt until `parse` accepts the input, printing each rejection.
    pub fn prompt_until<T, E, F>(&mut self, label: &str, parse: F) -> ConsoleResult<T>
    where
        E: Display,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            let answer = self.prompt(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Like [`prompt_until`](Self::prompt_until), but a blank answer skips the
    /// field and yields `None`.
    pub fn prompt_optional<T, E, F>(&mut self, label: &str, parse: F) -> ConsoleResult<Option<T>>
    where
        E: Display,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            let answer = self.prompt(label)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Prompt for free text where blank means "keep".
    pub fn prompt_keep(&mut self, label: &str) -> ConsoleResult<Option<String>> {
        let answer = self.prompt(label)?;
        Ok(Some(answer).filter(|a| !a.is_empty()))
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
