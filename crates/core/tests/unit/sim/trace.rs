//! # Trace Parsing Tests
//!
//! Tests for the text trace format and file loading.

use std::io::Write;

use pretty_assertions::assert_eq;
use rstest::rstest;

use srrip_core::common::TraceError;
use srrip_core::sim::trace::{Access, load_trace, parse_trace};

#[test]
fn test_parse_reads_writes_and_bare_addresses() {
    let text = "R 0x1000\nW 4096\n0x2000\nw 0X40\n";
    let accesses = parse_trace(text).unwrap();
    assert_eq!(
        accesses,
        vec![
            Access::read(0x1000),
            Access::write(4096),
            Access::read(0x2000),
            Access::write(0x40),
        ]
    );
}

#[test]
fn test_parse_skips_blank_lines_and_comments() {
    let text = "# header\n\n   \nR 0x10 # inline\n  # indented comment\nL 0x20\nS 0x30\n";
    let accesses = parse_trace(text).unwrap();
    assert_eq!(
        accesses,
        vec![Access::read(0x10), Access::read(0x20), Access::write(0x30)]
    );
}

#[test]
fn test_parse_accepts_underscored_literals() {
    let accesses = parse_trace("R 0x8000_0000\nW 1_024\n").unwrap();
    assert_eq!(accesses, vec![Access::read(0x8000_0000), Access::write(1024)]);
}

#[test]
fn test_parse_empty_trace() {
    assert!(parse_trace("").unwrap().is_empty());
}

#[rstest]
#[case("X 0x10", 1)]
#[case("R", 1)]
#[case("R 0xZZ", 1)]
#[case("R 0x10 extra", 1)]
#[case("R 0x10\nW -5", 2)]
#[case("# ok\nR 0x10\n\nfoo", 4)]
fn test_parse_reports_malformed_line(#[case] text: &str, #[case] expected_line: usize) {
    match parse_trace(text) {
        Err(TraceError::Malformed { line, .. }) => assert_eq!(line, expected_line),
        other => panic!("expected malformed error, got {other:?}"),
    }
}

#[test]
fn test_load_trace_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "R 0x0").unwrap();
    writeln!(file, "W 0x80").unwrap();
    file.flush().unwrap();

    let accesses = load_trace(file.path()).unwrap();
    assert_eq!(accesses, vec![Access::read(0), Access::write(0x80)]);
}

#[test]
fn test_load_missing_trace_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.trace");
    match load_trace(&missing) {
        Err(TraceError::Io { path, .. }) => assert!(path.ends_with("missing.trace")),
        other => panic!("expected io error, got {other:?}"),
    }
}
