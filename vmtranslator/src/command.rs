//! Tokenized VM commands.
//!
//! A line is classified into a `Command` exactly once, in
//! [`crate::parser::parse_line`]. Every later stage matches on the
//! resulting enum instead of re-inspecting the source text.

use crate::error::VmError;
use crate::segment::Segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Neg,
    Eq,
    Gt,
    Lt,
    And,
    Or,
    Not,
}

impl ArithmeticOp {
    pub fn parse(mnemonic: &str) -> Result<Self, VmError> {
        match mnemonic {
            "add" => Ok(Self::Add),
            "sub" => Ok(Self::Sub),
            "neg" => Ok(Self::Neg),
            "eq" => Ok(Self::Eq),
            "gt" => Ok(Self::Gt),
            "lt" => Ok(Self::Lt),
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            "not" => Ok(Self::Not),
            other => Err(VmError::UnknownArithmetic(other.to_string())),
        }
    }

    #[must_use]
    pub fn is_unary(self) -> bool {
        matches!(self, Self::Neg | Self::Not)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Arithmetic(ArithmeticOp),
    Push(Segment, u16),
    Pop(Segment, u16),
    Label(String),
    Goto(String),
    IfGoto(String),
    Function(String, u16),
    Call(String, u16),
    Return,
}

fn parse_u16(field: &str) -> Result<u16, VmError> {
    field
        .parse::<u16>()
        .map_err(|_| VmError::InvalidIndex(field.to_string()))
}

/// Tokenizes one comment-stripped, trimmed, non-empty VM source line.
///
/// # Errors
/// Returns `MalformedCommand` if the line doesn't have the field count
/// its leading keyword requires, `UnknownSegment`/`UnknownArithmetic` if
/// a keyword isn't recognized, or `InvalidIndex` if a numeric field
/// doesn't parse.
pub fn parse_line(line: &str) -> Result<Command, VmError> {
    let mut fields = line.split_whitespace();
    let keyword = fields.next().ok_or_else(|| VmError::MalformedCommand(line.to_string()))?;

    match keyword {
        "push" | "pop" => {
            let segment = fields
                .next()
                .ok_or_else(|| VmError::MalformedCommand(line.to_string()))?;
            let index = fields
                .next()
                .ok_or_else(|| VmError::MalformedCommand(line.to_string()))?;
            let segment = Segment::parse(segment)?;
            let index = parse_u16(index)?;
            if keyword == "push" {
                Ok(Command::Push(segment, index))
            } else {
                Ok(Command::Pop(segment, index))
            }
        }
        "label" => {
            let name = fields
                .next()
                .ok_or_else(|| VmError::MalformedCommand(line.to_string()))?;
            Ok(Command::Label(name.to_string()))
        }
        "goto" => {
            let name = fields
                .next()
                .ok_or_else(|| VmError::MalformedCommand(line.to_string()))?;
            Ok(Command::Goto(name.to_string()))
        }
        "if-goto" => {
            let name = fields
                .next()
                .ok_or_else(|| VmError::MalformedCommand(line.to_string()))?;
            Ok(Command::IfGoto(name.to_string()))
        }
        "function" => {
            let name = fields
                .next()
                .ok_or_else(|| VmError::MalformedCommand(line.to_string()))?;
            let n_locals = fields
                .next()
                .ok_or_else(|| VmError::MalformedCommand(line.to_string()))?;
            Ok(Command::Function(name.to_string(), parse_u16(n_locals)?))
        }
        "call" => {
            let name = fields
                .next()
                .ok_or_else(|| VmError::MalformedCommand(line.to_string()))?;
            let n_args = fields
                .next()
                .ok_or_else(|| VmError::MalformedCommand(line.to_string()))?;
            Ok(Command::Call(name.to_string(), parse_u16(n_args)?))
        }
        "return" => Ok(Command::Return),
        other => Ok(Command::Arithmetic(ArithmeticOp::parse(other)?)),
    }
}
