//! Line-oriented console for tasklist
//!
//! Conventions:
//! - Prompts are full sentences ending in a colon, printed on their own line
//! - Answers are read one line at a time, line endings stripped
//! - Feedback is a single line: `The task is deleted`

use anyhow::{bail, Result};
use std::io::{BufRead, Write};

/// Prompt and read over any line reader and writer.
///
/// The binary wires this to locked stdin/stdout; tests drive it with
/// `io::Cursor` input and a `Vec<u8>` output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of output
    pub fn line(&mut self, s: &str) -> Result<()> {
        writeln!(self.output, "{}", s)?;
        Ok(())
    }

    /// Write several lines in order
    pub fn lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
        for line in lines {
            self.line(line.as_ref())?;
        }
        Ok(())
    }

    /// Print `message`, then block for one line of input
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        self.line(message)?;
        self.read_line()
    }

    /// Read one line without its line ending.
    ///
    /// End of input is an error: every prompt expects an answer. Bytes that
    /// are not UTF-8 become U+FFFD rather than failing the read.
    pub fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            bail!("standard input closed");
        }
        let mut buf = String::from_utf8_lossy(&bytes).into_owned();
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(buf)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }

    /// Everything written so far
    pub fn output(&self) -> &W {
        &self.output
    }
}
