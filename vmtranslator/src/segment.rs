//! The eight VM memory segments.
//!
//! Tokenized once into a `Segment` value at parse time, the way the
//! assembler tokenizes a line into a `CommandType` up front instead of
//! re-matching the mnemonic string at every use site.

use crate::error::VmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Local,
    Argument,
    This,
    That,
    Temp,
    Pointer,
    Static,
    Constant,
}

impl Segment {
    /// Parses a segment keyword as it appears in VM source.
    ///
    /// # Errors
    /// Returns `UnknownSegment` for anything but the eight valid names.
    pub fn parse(segment: &str) -> Result<Self, VmError> {
        match segment {
            "local" => Ok(Self::Local),
            "argument" => Ok(Self::Argument),
            "this" => Ok(Self::This),
            "that" => Ok(Self::That),
            "temp" => Ok(Self::Temp),
            "pointer" => Ok(Self::Pointer),
            "static" => Ok(Self::Static),
            "constant" => Ok(Self::Constant),
            other => Err(VmError::UnknownSegment(other.to_string())),
        }
    }

    /// The base symbol for segments addressed through a pointer
    /// (`*(base + index)`). Not meaningful for `Temp`, `Pointer`,
    /// `Static`, or `Constant`, which each have their own addressing.
    #[must_use]
    pub fn pointer_symbol(self) -> Option<&'static str> {
        match self {
            Self::Local => Some("LCL"),
            Self::Argument => Some("ARG"),
            Self::This => Some("THIS"),
            Self::That => Some("THAT"),
            _ => None,
        }
    }
}
