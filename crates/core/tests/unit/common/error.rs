//! # Error Tests
//!
//! Tests for policy and trace error display and equality.

use std::error::Error;
use std::io;

use srrip_core::common::{PolicyError, TraceError};

#[test]
fn test_zero_lines_display() {
    let err = PolicyError::ZeroLines;
    assert!(err.to_string().contains("at least one line"));
}

#[test]
fn test_zero_rpv_max_display() {
    let err = PolicyError::ZeroRpvMax;
    assert!(err.to_string().contains("rpv_max"));
}

#[test]
fn test_empty_candidates_display() {
    let err = PolicyError::EmptyCandidates;
    assert!(err.to_string().contains("empty candidate set"));
}

#[test]
fn test_invalid_geometry_display() {
    let err = PolicyError::InvalidGeometry {
        size_bytes: 300,
        line_bytes: 64,
        ways: 2,
    };
    assert_eq!(
        err.to_string(),
        "invalid cache geometry: 300 bytes with 64-byte lines and 2 ways"
    );
}

#[test]
fn test_policy_too_small_display() {
    let err = PolicyError::PolicyTooSmall {
        required: 64,
        available: 4,
    };
    assert_eq!(
        err.to_string(),
        "policy tracks 4 lines but the cache needs 64"
    );
}

#[test]
fn test_policy_error_equality() {
    assert_eq!(PolicyError::ZeroLines, PolicyError::ZeroLines);
    assert_ne!(PolicyError::ZeroLines, PolicyError::ZeroRpvMax);
}

#[test]
fn test_trace_malformed_display() {
    let err = TraceError::Malformed {
        line: 7,
        content: "X 12".to_string(),
    };
    assert_eq!(err.to_string(), "malformed trace line 7: 'X 12'");
    assert!(err.source().is_none());
}

#[test]
fn test_trace_io_has_source() {
    let err = TraceError::Io {
        path: "missing.trace".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.to_string().contains("missing.trace"));
    assert!(err.source().is_some());
}
