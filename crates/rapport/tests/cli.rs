use std::process::{Command, Output};

use rapport_lib::output::color::strip_ansi;

fn rapport(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rapport"))
        .args(args)
        .env_remove("RAPPORT_COLOR")
        .env_remove("NO_COLOR")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run rapport")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn info_prints_joined_message() {
    let output = rapport(&["info", "a", "1", "b"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a 1 b\n");
}

#[test]
fn piped_output_is_not_colored_by_default() {
    let output = rapport(&["success", "done"]);
    assert!(output.status.success());
    assert!(!stdout(&output).contains('\u{1b}'));
}

#[test]
fn color_always_wraps_and_strips_back() {
    let output = rapport(&["--color", "always", "success", "ok"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains('\u{1b}'));
    assert_eq!(strip_ansi(&out), "ok\n");
}

#[test]
fn color_always_distinguishes_levels() {
    let success = stdout(&rapport(&["--color", "always", "success", "x"]));
    let error = stdout(&rapport(&["--color", "always", "error", "x"]));
    assert_ne!(success, error);
    assert_eq!(strip_ansi(&success), strip_ansi(&error));
}

#[test]
fn env_color_choice_is_honoured() {
    let output = Command::new(env!("CARGO_BIN_EXE_rapport"))
        .args(["warning", "careful"])
        .env("RAPPORT_COLOR", "always")
        .env_remove("NO_COLOR")
        .output()
        .unwrap();
    assert!(stdout(&output).contains('\u{1b}'));
}

#[test]
fn color_flag_overrides_env() {
    let output = Command::new(env!("CARGO_BIN_EXE_rapport"))
        .args(["--color", "never", "warning", "careful"])
        .env("RAPPORT_COLOR", "always")
        .output()
        .unwrap();
    assert_eq!(stdout(&output), "careful\n");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first = rapport(&["--color", "always", "info", "same", "input"]);
    let second = rapport(&["--color", "always", "info", "same", "input"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn fail_exits_with_requested_code() {
    let output = rapport(&["--color", "always", "fail", "--code", "2", "boom"]);
    assert_eq!(output.status.code(), Some(2));
    let out = stdout(&output);
    assert!(out.contains("boom"));
    assert!(out.contains('\u{1b}'));
}

#[test]
fn fail_defaults_to_exit_code_one() {
    let output = rapport(&["fail", "boom"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "boom\n");
}

#[test]
fn fail_prints_only_the_error_line() {
    let output = rapport(&["fail", "--code", "3", "first", "second"]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stdout(&output), "first second\n");
}

#[test]
fn missing_command_is_a_usage_error() {
    let output = rapport(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn verbose_logs_to_stderr_only() {
    let output = rapport(&["--verbose", "info", "quiet"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "quiet\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Executing command"));
}
