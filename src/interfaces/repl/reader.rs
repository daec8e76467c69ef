use std::io::BufRead;

use crate::error::Result;
use crate::interfaces::repl::command::Command;

/// Reads commands line by line from any buffered source (stdin, a script
/// file, a byte slice in tests).
pub struct CommandReader<R: BufRead> {
    source: R,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Lazily parses commands. Blank lines and `#` comment lines are
    /// skipped; parse failures come through as errors so the caller can
    /// report them and keep reading.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.source
            .lines()
            .map(|line| -> Result<Option<Command>> {
                let line = line?;
                if line.trim_start().starts_with('#') {
                    return Ok(None);
                }
                Command::parse(&line)
            })
            .filter_map(|result| result.transpose())
    }
}
