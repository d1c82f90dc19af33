//! Line-oriented console I/O shared by both programs.
//!
//! Sessions talk to a [`Prompter`] instead of stdin/stdout directly so tests
//! can drive them with byte slices and capture the output in a `Vec<u8>`.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(
        input: R,
        output: W,
    ) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` without a trailing newline, then reads one line.
    ///
    /// Returns `None` once input is exhausted.
    pub fn ask(
        &mut self,
        prompt: &str,
    ) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line with its line terminator removed.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, so a garbled line is
    /// rejected by whichever parser reads it instead of ending the session.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prints one line.
    pub fn say(
        &mut self,
        text: impl Display,
    ) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
