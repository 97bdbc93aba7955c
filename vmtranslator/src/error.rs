//! Error taxonomy for the Hack VM translator
//!
//! Every error here is fatal: translation stops at the first offending
//! line and reports it, rather than attempting recovery.

use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum VmError {
    /// No `.vm` file was given on the command line.
    UsageError,
    /// A line didn't tokenize into any known command shape.
    MalformedCommand(String),
    /// `push`/`pop` named a segment that doesn't exist.
    UnknownSegment(String),
    /// An arithmetic/logical mnemonic that isn't one of the nine ops.
    UnknownArithmetic(String),
    /// A numeric field (index, arg count) failed to parse.
    InvalidIndex(String),
    /// Underlying I/O failure (file not found, etc).
    Io(String),
}

impl fmt::Display for VmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UsageError => write!(f, "usage: vmtranslator <input.vm>..."),
            Self::MalformedCommand(line) => write!(f, "malformed VM command: '{line}'"),
            Self::UnknownSegment(s) => write!(f, "unknown segment '{s}'"),
            Self::UnknownArithmetic(op) => write!(f, "unknown arithmetic command '{op}'"),
            Self::InvalidIndex(s) => write!(f, "invalid numeric field '{s}'"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for VmError {}

impl From<std::io::Error> for VmError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}
