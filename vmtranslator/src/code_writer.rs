//! Emits Hack assembly for each tokenized VM command.
//!
//! Every `write_*` method takes the shared [`Context`] explicitly,
//! rather than reaching into process-wide counters, so two files can be
//! translated back to back in one process without cross-talk.

use std::io::Write;

use crate::command::{ArithmeticOp, Command};
use crate::context::Context;
use crate::error::VmError;
use crate::segment::Segment;

macro_rules! write_asm {
    ($writer:expr, $($line:literal)*) => {
        $writer.write_all(concat!($($line, "\n"),*).as_bytes())
    };
}

pub struct CodeWriter<W: Write> {
    writer: W,
}

impl<W: Write> CodeWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Initializes `SP=256` and invokes `Sys.init` through the ordinary
    /// call sequence. Emitted only when translating more than one file.
    pub fn write_bootstrap(&mut self, ctx: &mut Context) -> Result<(), VmError> {
        write_asm!(self.writer,
            "@256"
            "D=A"
            "@SP"
            "M=D"
        )?;
        self.write_call("Sys.init", 0, ctx)
    }

    /// Marks the start of a new translation unit in the output, purely
    /// for human readability — it carries no semantic weight.
    pub fn write_module_marker(&mut self, ctx: &Context) -> Result<(), VmError> {
        writeln!(self.writer, "// === {} ===", ctx.module())?;
        Ok(())
    }

    pub fn write_command(&mut self, command: &Command, ctx: &mut Context) -> Result<(), VmError> {
        match command {
            Command::Arithmetic(op) => self.write_arithmetic(*op, ctx),
            Command::Push(segment, index) => self.write_push(*segment, *index, ctx),
            Command::Pop(segment, index) => self.write_pop(*segment, *index, ctx),
            Command::Label(name) => self.write_label(name),
            Command::Goto(name) => self.write_goto(name),
            Command::IfGoto(name) => self.write_if_goto(name),
            Command::Function(name, n_locals) => self.write_function(name, *n_locals),
            Command::Call(name, n_args) => self.write_call(name, *n_args, ctx),
            Command::Return => self.write_return(),
        }
    }

    fn write_arithmetic(&mut self, op: ArithmeticOp, ctx: &mut Context) -> Result<(), VmError> {
        match op {
            ArithmeticOp::Add => self.write_binary_op("D+M"),
            ArithmeticOp::Sub => self.write_binary_op("M-D"),
            ArithmeticOp::And => self.write_binary_op("D&M"),
            ArithmeticOp::Or => self.write_binary_op("D|M"),
            ArithmeticOp::Neg => self.write_unary_op(true),
            ArithmeticOp::Not => self.write_unary_op(false),
            ArithmeticOp::Eq => self.write_comparison("JEQ", ctx),
            ArithmeticOp::Gt => self.write_comparison("JGT", ctx),
            ArithmeticOp::Lt => self.write_comparison("JLT", ctx),
        }
    }

    /// `operation` computes the result into `M` from `D` (top) and `M`
    /// (next), e.g. `"D+M"` for add, `"M-D"` for sub (so `x - y`).
    fn write_binary_op(&mut self, operation: &str) -> Result<(), VmError> {
        write_asm!(self.writer,
            "@SP"
            "M=M-1"
            "A=M"
            "D=M"
            "@SP"
            "M=M-1"
            "A=M"
        )?;
        writeln!(self.writer, "M={operation}")?;
        write_asm!(self.writer, "@SP" "M=M+1")?;
        Ok(())
    }

    fn write_unary_op(&mut self, is_neg: bool) -> Result<(), VmError> {
        write_asm!(self.writer,
            "@SP"
            "A=M-1"
        )?;
        if is_neg {
            write_asm!(self.writer, "M=-M")?;
        } else {
            write_asm!(self.writer, "M=!M")?;
        }
        Ok(())
    }

    fn write_comparison(&mut self, jump: &str, ctx: &mut Context) -> Result<(), VmError> {
        let id = ctx.next_comparison_id();
        write_asm!(self.writer,
            "@SP"
            "M=M-1"
            "A=M"
            "D=M"
            "@SP"
            "M=M-1"
            "A=M"
            "D=M-D"
        )?;
        writeln!(self.writer, "@TRUE.{id}")?;
        writeln!(self.writer, "D;{jump}")?;
        write_asm!(self.writer,
            "@SP"
            "A=M"
            "M=0"
        )?;
        writeln!(self.writer, "@END.{id}")?;
        write_asm!(self.writer, "0;JMP")?;
        writeln!(self.writer, "(TRUE.{id})")?;
        write_asm!(self.writer,
            "@SP"
            "A=M"
            "M=-1"
        )?;
        writeln!(self.writer, "(END.{id})")?;
        write_asm!(self.writer, "@SP" "M=M+1")?;
        Ok(())
    }

    fn write_push(&mut self, segment: Segment, index: u16, ctx: &mut Context) -> Result<(), VmError> {
        match segment {
            Segment::Constant => {
                writeln!(self.writer, "@{index}")?;
                write_asm!(self.writer, "D=A")?;
            }
            Segment::Local | Segment::Argument | Segment::This | Segment::That => {
                let base = segment.pointer_symbol().expect("indirect segment has a base symbol");
                writeln!(self.writer, "@{base}")?;
                write_asm!(self.writer, "D=M")?;
                writeln!(self.writer, "@{index}")?;
                write_asm!(self.writer, "A=D+A" "D=M")?;
            }
            Segment::Temp => {
                writeln!(self.writer, "@{}", 5 + index)?;
                write_asm!(self.writer, "D=M")?;
            }
            Segment::Pointer => {
                writeln!(self.writer, "@{}", 3 + index)?;
                write_asm!(self.writer, "D=M")?;
            }
            Segment::Static => {
                writeln!(self.writer, "@{}", ctx.static_base() + index)?;
                write_asm!(self.writer, "D=M")?;
            }
        }
        self.write_push_d()
    }

    fn write_pop(&mut self, segment: Segment, index: u16, ctx: &mut Context) -> Result<(), VmError> {
        match segment {
            Segment::Constant => {
                // `pop constant i` discards the stack top; no write target.
                write_asm!(self.writer, "@SP" "M=M-1")
            }
            Segment::Local | Segment::Argument | Segment::This | Segment::That => {
                let base = segment.pointer_symbol().expect("indirect segment has a base symbol");
                writeln!(self.writer, "@{base}")?;
                write_asm!(self.writer, "D=M")?;
                writeln!(self.writer, "@{index}")?;
                write_asm!(self.writer, "D=D+A" "@R13" "M=D")?;
                self.write_pop_to_d()?;
                write_asm!(self.writer, "@R13" "A=M" "M=D")
            }
            Segment::Temp => {
                writeln!(self.writer, "@{}", 5 + index)?;
                write_asm!(self.writer, "D=A" "@R13" "M=D")?;
                self.write_pop_to_d()?;
                write_asm!(self.writer, "@R13" "A=M" "M=D")
            }
            Segment::Pointer => {
                writeln!(self.writer, "@{}", 3 + index)?;
                write_asm!(self.writer, "D=A" "@R13" "M=D")?;
                self.write_pop_to_d()?;
                write_asm!(self.writer, "@R13" "A=M" "M=D")
            }
            Segment::Static => {
                self.write_pop_to_d()?;
                writeln!(self.writer, "@{}", ctx.static_base() + index)?;
                write_asm!(self.writer, "M=D")
            }
        }
    }

    fn write_label(&mut self, name: &str) -> Result<(), VmError> {
        writeln!(self.writer, "({name})")?;
        Ok(())
    }

    fn write_goto(&mut self, name: &str) -> Result<(), VmError> {
        writeln!(self.writer, "@{name}")?;
        write_asm!(self.writer, "0;JMP")?;
        Ok(())
    }

    fn write_if_goto(&mut self, name: &str) -> Result<(), VmError> {
        self.write_pop_to_d()?;
        writeln!(self.writer, "@{name}")?;
        write_asm!(self.writer, "D;JNE")?;
        Ok(())
    }

    fn write_function(&mut self, name: &str, n_locals: u16) -> Result<(), VmError> {
        writeln!(self.writer, "({name})")?;
        for _ in 0..n_locals {
            writeln!(self.writer, "@0")?;
            write_asm!(self.writer, "D=A")?;
            self.write_push_d()?;
        }
        Ok(())
    }

    fn write_call(&mut self, name: &str, n_args: u16, ctx: &mut Context) -> Result<(), VmError> {
        let id = ctx.next_call_id();
        let return_label = format!("{name}$ret.{id}");

        writeln!(self.writer, "@{return_label}")?;
        write_asm!(self.writer, "D=A")?;
        self.write_push_d()?;

        for saved in ["LCL", "ARG", "THIS", "THAT"] {
            writeln!(self.writer, "@{saved}")?;
            write_asm!(self.writer, "D=M")?;
            self.write_push_d()?;
        }

        writeln!(self.writer, "@{}", n_args + 5)?;
        write_asm!(self.writer, "D=A" "@SP" "D=M-D" "@ARG" "M=D")?;
        write_asm!(self.writer, "@SP" "D=M" "@LCL" "M=D")?;

        writeln!(self.writer, "@{name}")?;
        write_asm!(self.writer, "0;JMP")?;
        writeln!(self.writer, "({return_label})")?;
        Ok(())
    }

    fn write_return(&mut self) -> Result<(), VmError> {
        // FRAME = LCL, stashed in R13
        write_asm!(self.writer, "@LCL" "D=M" "@R13" "M=D")?;
        // RET = *(FRAME - 5), stashed in R14
        write_asm!(self.writer,
            "@5"
            "A=D-A"
            "D=M"
            "@R14"
            "M=D"
        )?;
        // *ARG = pop()
        self.write_pop_to_d()?;
        write_asm!(self.writer, "@ARG" "A=M" "M=D")?;
        // SP = ARG + 1
        write_asm!(self.writer, "@ARG" "D=M+1" "@SP" "M=D")?;
        // THAT = *(FRAME-1), THIS = *(FRAME-2), ARG = *(FRAME-3), LCL = *(FRAME-4)
        for (offset, dest) in [(1, "THAT"), (2, "THIS"), (3, "ARG"), (4, "LCL")] {
            writeln!(self.writer, "@R13")?;
            write_asm!(self.writer, "D=M")?;
            writeln!(self.writer, "@{offset}")?;
            write_asm!(self.writer, "A=D-A" "D=M")?;
            writeln!(self.writer, "@{dest}")?;
            write_asm!(self.writer, "M=D")?;
        }
        // goto RET
        write_asm!(self.writer, "@R14" "A=M" "0;JMP")?;
        Ok(())
    }

    fn write_push_d(&mut self) -> Result<(), VmError> {
        write_asm!(self.writer,
            "@SP"
            "A=M"
            "M=D"
            "@SP"
            "M=M+1"
        )?;
        Ok(())
    }

    fn write_pop_to_d(&mut self) -> Result<(), VmError> {
        write_asm!(self.writer,
            "@SP"
            "M=M-1"
            "A=M"
            "D=M"
        )?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), VmError> {
        self.writer.flush()?;
        Ok(())
    }
}
