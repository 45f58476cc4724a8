//! End-to-end tests for the `intersect` CLI, driven through its library
//! surface so argument parsing, settings, solving and rendering are all
//! exercised together.

use clap::Parser;
use intersect_cli::cli_args::{is_informational, requests_help, Args};
use intersect_cli::execution::run;
use intersect_core::error::{Error, ErrorKind};

fn run_with(arguments: &[&str]) -> Result<String, Error> {
    let argv = std::iter::once("intersect").chain(arguments.iter().copied());
    let args = Args::try_parse_from(argv).expect("arguments should parse");
    run(&args).map(|report| report.to_string())
}

#[test]
fn test_crossing_diagonals_with_separator() {
    let output = run_with(&["0", "0", "1", "--", "0", "0", "-1"]).unwrap();
    assert_eq!(output, "y=x\ny=-1*x\nx = 0\ny = 0\n(0, 0)\n");
}

#[test]
fn test_offset_gradients() {
    let output = run_with(&["0", "0", "1", "1", "0", "2"]).unwrap();
    assert_eq!(output, "y=x\ny=2*(x-1)\nx = 2\ny = 2\n(2, 2)\n");
}

#[test]
fn test_degrees_mode() {
    let output = run_with(&["-d", "0", "0", "45", "0", "0", "-45"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "y=tan(45°)*x");
    assert_eq!(lines[1], "y=tan(-45°)*x");
    assert_eq!(lines[4], "(0, 0)");
}

#[test]
fn test_radians_with_right_angle() {
    let output = run_with(&["--radians", "--subtract90", "1", "2", "0.5", "0", "0", "1"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "y=tan(0.5-\u{03c0}/2)*(x-1)+2");
    assert_eq!(lines[1], "y=tan(1-\u{03c0}/2)*x");
}

#[test]
fn test_flat_line_output() {
    let output = run_with(&["0", "3", "0", "0", "0", "1"]).unwrap();
    assert_eq!(output, "y=3\ny=x\nx = 3\ny = 3\n(3, 3)\n");
}

#[test]
fn test_parallel_lines_exit_code() {
    let error = run_with(&["0", "0", "2", "5", "5", "2"]).unwrap_err();
    assert!(matches!(error, Error::ParallelLines));
    assert_eq!(error.kind(), ErrorKind::Geometry);
    assert_eq!(error.exit_code(), 3);
}

#[test]
fn test_parallel_angles() {
    let error = run_with(&["-d", "0", "0", "30", "1", "1", "30"]).unwrap_err();
    assert!(matches!(error, Error::ParallelLines));
}

#[test]
fn test_bad_number_exit_code() {
    let error = run_with(&["0", "0", "1", "0", "zero", "2"]).unwrap_err();
    assert_eq!(error.to_string(), "y2: zero: not a valid floating point number");
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn test_infinite_value_rejected() {
    let error = run_with(&["0", "0", "inf", "0", "0", "2"]).unwrap_err();
    assert!(matches!(error, Error::InvalidNumber { .. }));
}

#[test]
fn test_wrong_count_exit_code() {
    let error = run_with(&["0", "0", "1"]).unwrap_err();
    assert!(matches!(error, Error::ArgumentCount { .. }));
    assert_eq!(error.exit_code(), 1);
}

#[test]
fn test_subtract_rejected_before_parsing_values() {
    let error = run_with(&["-s", "not", "a", "number", "at", "all", "!"]).unwrap_err();
    assert!(matches!(error, Error::SubtractWithoutAngleMode));
    assert_eq!(error.exit_code(), 1);
}

#[test]
fn test_conflicting_modes_exit_code() {
    let error = run_with(&["-d", "-r", "0", "0", "1", "0", "0", "2"]).unwrap_err();
    assert!(matches!(error, Error::ConflictingAngleModes));
    assert_eq!(error.exit_code(), 1);
}

#[test]
fn test_repeated_mode_flag_is_usage_error() {
    let error = Args::try_parse_from(["intersect", "-d", "-d", "0", "0", "1", "0", "0", "2"])
        .unwrap_err();
    assert!(!is_informational(&error));
}

#[test]
fn test_help_short_circuits() {
    let error = Args::try_parse_from(["intersect", "-h", "0", "0", "1"]).unwrap_err();
    assert!(is_informational(&error));
    assert!(error.to_string().contains("--subtract90"));
}

#[test]
fn test_repeated_subtract_flag_solves() {
    let output = run_with(&["-s", "-s", "-d", "0", "0", "45", "0", "0", "-45"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "y=tan(45°-90°)*x");
    assert_eq!(lines[1], "y=tan(-45°-90°)*x");
}

#[test]
fn test_help_after_rejected_flags() {
    for arguments in [&["intersect", "--bogus", "-h"][..], &["intersect", "-d", "-d", "-h"][..]] {
        let error = Args::try_parse_from(arguments).unwrap_err();
        assert!(!is_informational(&error));
        assert!(requests_help(&arguments[1..]));
    }
}
