//! Reads and tokenizes Hack VM source into a stream of [`Command`]s.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::command::{parse_line, Command};
use crate::error::VmError;

/// Reads `path`, stripping `//` comments and blank lines, and returns the
/// remaining source lines trimmed of surrounding whitespace.
pub fn read_lines(path: &str) -> Result<Vec<String>, VmError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let stripped = line.find("//").map_or(line.as_str(), |pos| &line[..pos]);
        let trimmed = stripped.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    Ok(lines)
}

/// Tokenizes a vector of comment-stripped source lines one at a time.
pub struct Parser {
    lines: std::vec::IntoIter<String>,
    current: Option<Command>,
}

impl Parser {
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            lines: lines.into_iter(),
            current: None,
        }
    }

    /// Advances to the next command, tokenizing its source line.
    ///
    /// Returns `Ok(false)` once the source is exhausted.
    ///
    /// # Errors
    /// Returns the tokenization error for the first ill-formed line.
    pub fn advance(&mut self) -> Result<bool, VmError> {
        match self.lines.next() {
            Some(line) => {
                self.current = Some(parse_line(&line)?);
                Ok(true)
            }
            None => {
                self.current = None;
                Ok(false)
            }
        }
    }

    /// Returns the most recently tokenized command.
    #[must_use]
    pub fn command(&self) -> Option<&Command> {
        self.current.as_ref()
    }
}
