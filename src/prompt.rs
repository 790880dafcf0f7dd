//! Prompts for input.
use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// Asks questions on an output stream and reads the answers from an input
/// stream, one line per answer.
pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a new prompter.
    pub(crate) fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Write `prompt` and read one line of raw input.  The line terminator
    /// is not included.
    pub(crate) fn ask(&mut self, prompt: &str) -> Result<Vec<u8>> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(Error::UnexpectedEof {
                prompt: prompt.to_string(),
            });
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Write `prompt` and read one line, replacing invalid UTF-8.
    pub(crate) fn ask_lossy(&mut self, prompt: &str) -> Result<String> {
        let line = self.ask(prompt)?;
        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    /// Write `prompt` and read one line, which must be valid UTF-8.
    pub(crate) fn ask_utf8(&mut self, prompt: &str) -> Result<String> {
        let line = self.ask(prompt)?;
        Ok(String::from_utf8(line)?)
    }

    /// The output stream.
    pub(crate) fn output(&mut self) -> &mut W {
        &mut self.output
    }
}
