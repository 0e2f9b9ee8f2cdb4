use crate::error::Result;
use std::io::{BufRead, Write};

/// Line-oriented terminal: prompts go to `out`, problems to `err`.
///
/// Reads either whole lines or whitespace-delimited tokens from `input`.
/// A token read leaves the rest of its line pending so the next token can
/// come from the same line.
pub struct Console<R: BufRead, W: Write, E: Write> {
    input: R,
    out: W,
    err: E,
    pending: Option<String>,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self {
            input,
            out,
            err,
            pending: None,
        }
    }

    /// Writes one line to the output stream.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Writes one line to the error stream.
    pub fn report(&mut self, message: &str) -> Result<()> {
        writeln!(self.err, "{message}")?;
        self.err.flush()?;
        Ok(())
    }

    /// Returns the rest of the current line, or the next line.
    ///
    /// Only the line terminator is stripped. `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        if let Some(rest) = self.pending.take() {
            return Ok(Some(rest));
        }
        self.next_line()
    }

    /// Returns the next whitespace-delimited token, skipping blank lines.
    ///
    /// `None` at end of input.
    pub fn read_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(line) = self.pending.take() {
                let trimmed = line.trim_start();
                if !trimmed.is_empty() {
                    let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                    let (token, rest) = trimmed.split_at(end);
                    let token = token.to_string();
                    self.pending = Some(rest.to_string());
                    return Ok(Some(token));
                }
            }

            match self.next_line()? {
                Some(line) => self.pending = Some(line),
                None => return Ok(None),
            }
        }
    }

    /// Drops whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending = None;
    }

    /// Gives access to the output stream for multi-line writers.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
