//! Hack VM Translator - Main Entry Point
//!
//! Lowers one or more `.vm` files into a single Hack assembly program on
//! stdout.
//!
//! # Usage
//! ```bash
//! vmtranslator <input.vm>...
//! ```
//!
//! When more than one file is given, a bootstrap sequence (`SP=256`
//! followed by `call Sys.init 0`) is prepended, and each file's `static`
//! segment is assigned a disjoint block of RAM cells (§4.7).

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use std::env;
use std::io::{self, BufWriter};
use std::path::Path;
use std::process;

use vmtranslator::code_writer::CodeWriter;
use vmtranslator::command::Command;
use vmtranslator::context::Context;
use vmtranslator::error::VmError;
use vmtranslator::parser::{read_lines, Parser};
use vmtranslator::segment::Segment;

/// Highest `static i` index referenced anywhere in `commands`, if any.
fn max_static_index(commands: &[Command]) -> Option<u16> {
    commands
        .iter()
        .filter_map(|c| match c {
            Command::Push(Segment::Static, i) | Command::Pop(Segment::Static, i) => Some(*i),
            _ => None,
        })
        .max()
}

fn module_name(path: &str) -> &str {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown")
}

fn translate_file<W: io::Write>(
    path: &str,
    writer: &mut CodeWriter<W>,
    ctx: &mut Context,
) -> Result<(), VmError> {
    let lines = read_lines(path)?;
    let mut commands = Vec::with_capacity(lines.len());

    let mut parser = Parser::from_lines(lines);
    while parser.advance()? {
        commands.push(parser.command().expect("advance just returned true").clone());
    }

    ctx.set_module(module_name(path));
    writer.write_module_marker(ctx)?;

    let static_count = max_static_index(&commands).map_or(0, |max| max + 1);

    for command in &commands {
        writer.write_command(command, ctx)?;
    }

    ctx.reserve_static_block(static_count);
    Ok(())
}

fn run(paths: &[String]) -> Result<(), VmError> {
    let stdout = io::stdout();
    let mut writer = CodeWriter::new(BufWriter::new(stdout.lock()));
    let mut ctx = Context::new();

    if paths.len() > 1 {
        writer.write_bootstrap(&mut ctx)?;
    }

    for path in paths {
        translate_file(path, &mut writer, &mut ctx)?;
    }

    writer.flush()
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("{}", VmError::UsageError);
        process::exit(1);
    }

    if let Err(err) = run(&args[1..]) {
        eprintln!("{err}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_static_index_ignores_other_segments() {
        let commands = vec![
            Command::Push(Segment::Constant, 9),
            Command::Pop(Segment::Static, 2),
            Command::Push(Segment::Static, 0),
        ];
        assert_eq!(max_static_index(&commands), Some(2));
    }

    #[test]
    fn test_max_static_index_none_when_absent() {
        let commands = vec![Command::Push(Segment::Constant, 9)];
        assert_eq!(max_static_index(&commands), None);
    }

    #[test]
    fn test_module_name_strips_directory_and_extension() {
        assert_eq!(module_name("dir/Main.vm"), "Main");
        assert_eq!(module_name("Sys.vm"), "Sys");
    }
}
