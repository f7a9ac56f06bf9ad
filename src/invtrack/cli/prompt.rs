use colored::Colorize;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed")]
    Closed,

    #[error("too many invalid attempts")]
    TooManyAttempts,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Line-oriented prompting over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, max_attempts: u32) -> Self {
        Self {
            input,
            output,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints `prompt` and returns the next line, trimmed.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until `parse` accepts the answer, up to the attempt limit.
    pub fn ask_valid<T, E, F>(&mut self, prompt: &str, parse: F) -> Result<T, PromptError>
    where
        E: Display,
        F: Fn(&str) -> Result<T, E>,
    {
        for _ in 0..self.max_attempts {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{}", format!("Error: {}", e).red())?,
            }
        }
        Err(PromptError::TooManyAttempts)
    }

    /// Yes/no question; only `y` (either case) counts as yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        Ok(self.ask(prompt)?.eq_ignore_ascii_case("y"))
    }
}
