// src/system/console.rs

use colored::Colorize;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors raised by a [`Console`].
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// The underlying reader or writer failed.
    #[error("Terminal I/O Error: {0}")]
    Io(#[from] std::io::Error),
    /// The input ended while a prompt was waiting.
    #[error("Input stream was closed while waiting for a response.")]
    InputClosed,
    /// A caller passed arguments that cannot be honored.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Result type for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// One non-blank line of user input, classified the way a token scanner would see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The trimmed line parsed as a (possibly signed) integer.
    Integer(i64),
    /// Anything else, trimmed.
    Word(String),
}

impl Token {
    /// Classifies a raw line. Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.parse::<i64>() {
            Ok(value) => Self::Integer(value),
            Err(_) => Self::Word(trimmed.to_string()),
        })
    }
}

/// The input/output capability the navigator is written against.
///
/// Implementors only have to provide raw line output and raw line input;
/// token classification and bounded integer prompting are built on top.
pub trait Console {
    /// Writes one line of text followed by a newline.
    fn write_line(&mut self, text: &str) -> ConsoleResult<()>;

    /// Writes `prompt` without a newline and reads one line of input.
    /// The returned string has its line terminator removed.
    ///
    /// # Errors
    /// Returns [`ConsoleError::InputClosed`] once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String>;

    /// Writes a line that introduces a block of output (e.g. the breadcrumb trail).
    fn write_heading(&mut self, text: &str) -> ConsoleResult<()> {
        self.write_line(text)
    }

    /// Writes a diagnostic or informational message meant for the user.
    fn write_notice(&mut self, text: &str) -> ConsoleResult<()> {
        self.write_line(text)
    }

    /// Reads lines until a non-blank one arrives and classifies it.
    fn read_token(&mut self, prompt: &str) -> ConsoleResult<Token> {
        loop {
            let line = self.read_line(prompt)?;
            if let Some(token) = Token::parse(&line) {
                return Ok(token);
            }
        }
    }

    /// Prompts until the user enters an integer in `[min, max]`.
    ///
    /// Non-integers and out-of-range integers are rejected with a message and
    /// the prompt is repeated.
    ///
    /// # Errors
    /// Fails with [`ConsoleError::InvalidArgument`] before reading anything if `min > max`.
    fn prompt_int_in_range(&mut self, prompt: &str, min: i64, max: i64) -> ConsoleResult<i64> {
        if min > max {
            return Err(ConsoleError::InvalidArgument(
                "min cannot be greater than max",
            ));
        }
        loop {
            match self.read_token(prompt)? {
                Token::Integer(value) if (min..=max).contains(&value) => return Ok(value),
                Token::Integer(value) => {
                    log::trace!("Rejected {} outside [{}, {}].", value, min, max);
                    self.write_notice(&format!("Input must be between {} and {}", min, max))?;
                }
                Token::Word(word) => {
                    log::trace!("Rejected non-integer input '{}'.", word);
                    self.write_notice("Invalid input. Please enter a number.")?;
                }
            }
        }
    }
}

/// A line-oriented console over any buffered reader and writer.
///
/// The binary wires it to stdin/stdout; tests wire it to in-memory buffers.
#[derive(Debug)]
pub struct LineConsole<R, W> {
    input: R,
    output: W,
    styled: bool,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    /// Creates an unstyled console.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            styled: false,
        }
    }

    /// Enables or disables ANSI styling of headings and notices.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Read-only access to the underlying writer (used to inspect transcripts).
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console and returns the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn write_line(&mut self, text: &str) -> ConsoleResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Bytes are decoded lossily so a malformed line is rejected as bad input
        // by the caller instead of ending the session.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        log::trace!("Read input line: {:?}", line);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_heading(&mut self, text: &str) -> ConsoleResult<()> {
        if self.styled {
            let styled = text.bold().to_string();
            self.write_line(&styled)
        } else {
            self.write_line(text)
        }
    }

    fn write_notice(&mut self, text: &str) -> ConsoleResult<()> {
        if self.styled {
            let styled = text.yellow().to_string();
            self.write_line(&styled)
        } else {
            self.write_line(text)
        }
    }
}

// MARK: --- UNIT TESTS ---
