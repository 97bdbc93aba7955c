use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn run_translator(paths: &[PathBuf]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vmtranslator"))
        .args(paths)
        .output()
        .expect("failed to execute vmtranslator binary")
}

#[test]
fn test_single_file_has_no_bootstrap() {
    let output = run_translator(&[fixture("simple_add.vm")]);
    assert!(output.status.success());

    let asm = String::from_utf8(output.stdout).unwrap();
    assert!(!asm.contains("@256"));
    assert!(asm.contains("@7"));
    assert!(asm.contains("@8"));
    assert!(asm.contains("M=D+M"));
}

#[test]
fn test_multiple_files_emit_bootstrap_once() {
    let output = run_translator(&[fixture("sys.vm"), fixture("fib_call.vm")]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let asm = String::from_utf8(output.stdout).unwrap();
    assert_eq!(asm.matches("@256").count(), 1);
    assert!(asm.contains("Sys.init$ret.0"));
    assert!(asm.contains("(Main.sum2)"));
    assert!(asm.contains("Main.sum2$ret."));
}

#[test]
fn test_static_segments_are_disjoint_across_files() {
    let output = run_translator(&[fixture("a.vm"), fixture("b.vm")]);
    assert!(output.status.success());

    let asm = String::from_utf8(output.stdout).unwrap();
    // a.vm's static 0 lands at RAM[16]; b.vm's static 0 must land elsewhere.
    assert!(asm.contains("@16\n"));
    assert!(asm.contains("@17\n"));
}

#[test]
fn test_single_file_static_uses_base_sixteen() {
    let output = run_translator(&[fixture("a.vm")]);
    assert!(output.status.success());

    let asm = String::from_utf8(output.stdout).unwrap();
    assert!(asm.contains("@16\n"));
}

#[test]
fn test_malformed_command_is_a_hard_error() {
    let output = run_translator(&[fixture("malformed.vm")]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let message = String::from_utf8(output.stderr).unwrap();
    assert!(message.contains("unknown segment"));
}

#[test]
fn test_missing_arguments_reports_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_vmtranslator"))
        .output()
        .expect("failed to execute vmtranslator binary");

    assert!(!output.status.success());
    let message = String::from_utf8(output.stderr).unwrap();
    assert!(message.contains("usage"));
}
