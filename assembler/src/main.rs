//! Hack Assembler - Main Entry Point
//!
//! A two-pass assembler for the Hack assembly language.
//!
//! # Architecture
//! - **Pass 1** (`preprocess`): Builds the symbol table by recording label positions
//! - **Pass 2**: Generates machine code, resolving all symbols
//!
//! # Usage
//! ```bash
//! assembler <input.asm>
//! ```
//!
//! Machine code is streamed to stdout, one instruction per line. A sorted
//! dump of every user-defined symbol (label or variable) is printed to
//! stderr afterwards, for inspection — it never mixes with the machine
//! code stream.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process;

use assembler::context::Context;
use assembler::error::AssemblerError;
use assembler::parser::{CommandType, ParserLines};
use assembler::preprocess::preprocess;
use assembler::code;

type Result<T> = std::result::Result<T, AssemblerError>;

/// Reads assembly file into memory
fn read_lines(path: &str) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .map_err(Into::into)
}

/// Second pass: generates machine code for the label-free instruction
/// stream produced by `preprocess`, writing one binary line per
/// instruction.
fn second_pass<W: Write>(instructions: &[String], ctx: &mut Context, writer: &mut W) -> Result<()> {
    let mut parser = ParserLines::from_lines(instructions);

    while parser.advance() {
        match parser.command_type()? {
            CommandType::ACommand => {
                let symbol = parser.symbol()?;
                let address = ctx.resolve(symbol)?;
                let instruction = code::encode_a_instruction(address);
                writeln!(writer, "{instruction}")?;
            }
            CommandType::CCommand => {
                let dest = parser.dest()?.unwrap_or("");
                let comp = parser.comp()?.unwrap_or("");
                let jump = parser.jump()?.unwrap_or("");

                let instruction = code::encode_c_instruction(dest, comp, jump)?;
                writeln!(writer, "{instruction}")?;
            }
            CommandType::LCommand => {
                unreachable!("preprocess strips every label before pass 2 runs")
            }
        }
    }

    writer.flush()?;
    Ok(())
}

fn run(input_path: &str) -> Result<()> {
    let lines = read_lines(input_path)?;

    let mut ctx = Context::new();
    let instructions = preprocess(&lines, &mut ctx)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    second_pass(&instructions, &mut ctx, &mut writer)?;

    let stderr = io::stderr();
    let mut diag = stderr.lock();
    for (symbol, address) in ctx.symbols.sorted_entries() {
        writeln!(diag, "{symbol} -> {address}")?;
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("{}", AssemblerError::UsageError);
        process::exit(1);
    }

    if let Err(err) = run(&args[1]) {
        eprintln!("{err}");
        process::exit(1);
    }
}
