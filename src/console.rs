//! Line-oriented console I/O for `print()` and `input()`.

use std::io::{self, BufRead, Write};

use tracing::{debug, trace};

use crate::error::ConsoleError;
use crate::util::JoinIter as _;
use crate::value::Value;


/// A reader and writer pair used by the console builtins.
///
/// The reader is kept for the lifetime of the console, so input buffered
/// past the end of one line is still there for the next `input` call.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    separator: &'static str,
    strip_carriage_return: bool,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::default()
    }

    /// A console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::builder().build_stdio()
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        ConsoleBuilder::default().build(reader, writer)
    }

    /// Write `values` followed by a newline.
    ///
    /// The separator is placed between every pair of values.
    pub fn print(&mut self, values: &[Value<'_>]) -> Result<(), ConsoleError> {
        print_to(&mut self.writer, self.separator, values)
    }

    /// Write `prompt`, then block until a full line is read.
    ///
    /// The prompt is written without a trailing newline, and the separator
    /// is only placed between two values when neither of them is a string.
    /// The line is returned without its `\n`, and without a `\r` before it
    /// unless the console was built with `strip_carriage_return(false)`.
    pub fn input(&mut self, prompt: &[Value<'_>]) -> Result<String, ConsoleError> {
        self.write_prompt(prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if !line.ends_with('\n') {
            debug!(read, "input stream closed before end of line");
            return Err(ConsoleError::Closed { partial: line });
        }

        line.pop();
        if self.strip_carriage_return && line.ends_with('\r') {
            line.pop();
        }
        trace!(len = line.len(), "input");
        Ok(line)
    }

    fn write_prompt(&mut self, prompt: &[Value<'_>]) -> io::Result<()> {
        let mut prev_is_str = true;
        for value in prompt {
            let is_str = value.is_str();
            if !is_str && !prev_is_str {
                self.writer.write_all(self.separator.as_bytes())?;
            }
            write!(self.writer, "{value}")?;
            prev_is_str = is_str;
        }
        Ok(())
    }

    pub fn reader(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

/// Placed between printed values unless the console is built with another one.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Write `values` joined by `separator`, then a newline, then flush.
///
/// Only `writer` is touched, so this never waits on an input stream.
pub fn print_to<W: Write>(
    writer: &mut W,
    separator: &str,
    values: &[Value<'_>],
) -> Result<(), ConsoleError> {
    writeln!(writer, "{}", values.iter().join(separator))?;
    writer.flush()?;
    trace!(values = values.len(), "print");
    Ok(())
}

pub struct ConsoleBuilder {
    separator: &'static str,
    strip_carriage_return: bool,
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            strip_carriage_return: true,
        }
    }
}

impl ConsoleBuilder {
    /// Placed between printed values. Defaults to a single space.
    pub fn separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    /// Whether `input` also strips a `\r` before the `\n`. Defaults to `true`.
    pub fn strip_carriage_return(mut self, strip_carriage_return: bool) -> Self {
        self.strip_carriage_return = strip_carriage_return;
        self
    }

    pub fn build<R: BufRead, W: Write>(self, reader: R, writer: W) -> Console<R, W> {
        Console {
            reader,
            writer,
            separator: self.separator,
            strip_carriage_return: self.strip_carriage_return,
        }
    }

    pub fn build_stdio(self) -> Console<io::StdinLock<'static>, io::Stdout> {
        self.build(io::stdin().lock(), io::stdout())
    }
}
