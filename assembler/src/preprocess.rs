//! Pass 1: builds the label-to-ROM-address map and strips label
//! declarations out of the instruction stream.
//!
//! Label declarations (`(LOOP)`) occupy no ROM address of their own —
//! they name the address of the *next* real instruction — so this pass
//! has to walk the whole program before pass 2 can resolve any forward
//! reference.

use crate::context::Context;
use crate::error::AssemblerError;
use crate::parser::{CommandType, ParserLines};

/// Scans `lines` for label declarations, registering each in `ctx`, and
/// returns the remaining A/C-instructions in order, comment-stripped and
/// trimmed, ready for pass 2.
///
/// # Errors
/// Returns `MalformedLabel` for an ill-formed `(...)` line, or
/// `DuplicateLabel` if the same label is declared twice.
pub fn preprocess(lines: &[String], ctx: &mut Context) -> Result<Vec<String>, AssemblerError> {
    let mut instructions = Vec::with_capacity(lines.len());
    let mut parser = ParserLines::from_lines(lines);
    let mut rom_address: u16 = 0;

    while parser.advance() {
        match parser.command_type()? {
            CommandType::LCommand => {
                let symbol = parser.symbol()?;
                ctx.symbols.declare_label(symbol, rom_address)?;
            }
            CommandType::ACommand | CommandType::CCommand => {
                instructions.push(parser.raw().to_string());
                rom_address += 1;
            }
        }
    }

    Ok(instructions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_strips_labels_and_keeps_instructions() {
        let src = lines(&["(LOOP)", "@1", "D=D+1", "(END)", "0;JMP"]);
        let mut ctx = Context::new();
        let instructions = preprocess(&src, &mut ctx).unwrap();

        assert_eq!(instructions, vec!["@1", "D=D+1", "0;JMP"]);
        assert_eq!(ctx.symbols.lookup("LOOP"), Some(0));
        assert_eq!(ctx.symbols.lookup("END"), Some(2));
    }

    #[test]
    fn test_comments_and_blank_lines_ignored() {
        let src = lines(&["// header", "", "@100 // load", "   ", "D=A"]);
        let mut ctx = Context::new();
        let instructions = preprocess(&src, &mut ctx).unwrap();

        assert_eq!(instructions, vec!["@100", "D=A"]);
    }

    #[test]
    fn test_duplicate_label_propagates_error() {
        let src = lines(&["(LOOP)", "@1", "(LOOP)"]);
        let mut ctx = Context::new();
        let err = preprocess(&src, &mut ctx).unwrap_err();
        assert_eq!(err, AssemblerError::DuplicateLabel("LOOP".to_string()));
    }

    #[test]
    fn test_malformed_label_propagates_error() {
        let src = lines(&["(LOOP"]);
        let mut ctx = Context::new();
        let err = preprocess(&src, &mut ctx).unwrap_err();
        assert_eq!(err, AssemblerError::MalformedLabel);
    }
}
