//! Error taxonomy for the Hack assembler
//!
//! Every error here is fatal: the assembler stops at the first offending
//! line and reports it, rather than attempting recovery.

use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AssemblerError {
    /// No input path was given on the command line.
    UsageError,
    /// `@` with no operand.
    MalformedA,
    /// `(` without a matching `)`, or an empty label name.
    MalformedLabel,
    /// Unrecognized `dest` mnemonic.
    InvalidDest(String),
    /// Unrecognized `jump` mnemonic.
    InvalidJump(String),
    /// Unrecognized `comp` mnemonic.
    UnknownComp(String),
    /// The same label was declared twice.
    DuplicateLabel(String),
    /// The variable allocator ran past `0x3FFF`.
    SymbolSpaceExhausted,
    /// Underlying I/O failure (file not found, etc).
    Io(String),
    /// The parser was asked for a field that doesn't apply to the current line.
    Internal(String),
}

impl fmt::Display for AssemblerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UsageError => write!(f, "usage: assembler <input.asm>"),
            Self::MalformedA => write!(f, "malformed A-instruction: '@' with no operand"),
            Self::MalformedLabel => write!(f, "malformed label declaration"),
            Self::InvalidDest(m) => write!(f, "invalid dest mnemonic '{m}'"),
            Self::InvalidJump(m) => write!(f, "invalid jump mnemonic '{m}'"),
            Self::UnknownComp(m) => write!(f, "unknown comp mnemonic '{m}'"),
            Self::DuplicateLabel(name) => write!(f, "label '{name}' declared more than once"),
            Self::SymbolSpaceExhausted => {
                write!(f, "variable allocator exhausted the symbol space (>0x3FFF)")
            }
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Internal(msg) => write!(f, "internal parser error: {msg}"),
        }
    }
}

impl std::error::Error for AssemblerError {}

impl From<std::io::Error> for AssemblerError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<crate::parser::ParserError> for AssemblerError {
    fn from(error: crate::parser::ParserError) -> Self {
        match error {
            crate::parser::ParserError::IoError(e) => Self::Io(e.to_string()),
            crate::parser::ParserError::InvalidState(msg) => Self::Internal(msg.to_string()),
            crate::parser::ParserError::MalformedA => Self::MalformedA,
            crate::parser::ParserError::MalformedLabel => Self::MalformedLabel,
        }
    }
}
