// src/prompt.rs
//! Line-oriented input for interactive flows
//!
//! `StdinSource` backs the terminal; `ReaderSource` wraps any reader/writer
//! pair so scripted input can drive the same code.

use std::io::{self, BufRead, Write};

pub trait LineSource {
    /// Show `prompt`, read one line without its line ending.
    /// `Ok(None)` means the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Strip a single trailing `\n` or `\r\n`
pub fn trim_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

pub struct ReaderSource<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ReaderSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        trim_line_ending(&mut line);
        Ok(Some(line))
    }
}

/// Terminal input
pub struct StdinSource(ReaderSource<io::StdinLock<'static>, io::Stdout>);

impl StdinSource {
    pub fn new() -> Self {
        Self(ReaderSource::new(io::stdin().lock(), io::stdout()))
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.0.read_line(prompt)
    }
}
