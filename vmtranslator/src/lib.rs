//! Hack VM Translator
//!
//! Lowers the stack-oriented Hack VM bytecode into Hack assembly.
//!
//! # Architecture
//!
//! - [`command`]: Tagged VM command variants, tokenized once per line
//! - [`segment`]: The eight VM memory segments and their addressing mode
//! - [`parser`]: Reads and tokenizes `.vm` source
//! - [`code_writer`]: Emits assembly for each command
//! - [`context`]: Explicit counters/bases threaded through emission
//! - [`error`]: The translator's error taxonomy
//!
//! # Example
//!
//! ```rust
//! use vmtranslator::{code_writer::CodeWriter, command::Command, context::Context, segment::Segment};
//!
//! let mut ctx = Context::new();
//! let mut output = Vec::new();
//! let mut writer = CodeWriter::new(&mut output);
//! writer
//!     .write_command(&Command::Push(Segment::Constant, 7), &mut ctx)
//!     .unwrap();
//! writer.flush().unwrap();
//! let asm = String::from_utf8(output).unwrap();
//! assert!(asm.contains("@7"));
//! ```

#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod code_writer;
pub mod command;
pub mod context;
pub mod error;
pub mod parser;
pub mod segment;

pub use context::Context;
pub use error::VmError;
