//! Memory-Access Trace Reader.
//!
//! Parses plain-text access traces for replay through a cache. One access
//! per line:
//!
//! ```text
//! # comment
//! R 0x1000
//! W 4096
//! 0x2000        # bare address, read
//! ```
//!
//! Addresses are hex with a `0x` prefix or decimal. Blank lines and text
//! after `#` are ignored.

use std::fs;
use std::path::Path;

use crate::common::TraceError;

/// A single memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Access {
    /// Byte address.
    pub addr: u64,
    /// Whether the access is a store.
    pub is_write: bool,
}

impl Access {
    /// A load from `addr`.
    pub const fn read(addr: u64) -> Self {
        Self {
            addr,
            is_write: false,
        }
    }

    /// A store to `addr`.
    pub const fn write(addr: u64) -> Self {
        Self {
            addr,
            is_write: true,
        }
    }
}

fn parse_addr(token: &str) -> Option<u64> {
    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        u64::from_str_radix(&hex.replace('_', ""), 16).ok()
    } else {
        token.replace('_', "").parse().ok()
    }
}

/// Parses one line; `Ok(None)` for blank and comment-only lines.
fn parse_line(number: usize, line: &str) -> Result<Option<Access>, TraceError> {
    let body = line.split('#').next().unwrap_or_default().trim();
    if body.is_empty() {
        return Ok(None);
    }

    let malformed = || TraceError::Malformed {
        line: number,
        content: line.trim().to_string(),
    };

    let mut tokens = body.split_whitespace();
    let first = tokens.next().ok_or_else(malformed)?;
    let (is_write, addr_token) = match first {
        "R" | "r" | "L" | "l" => (false, tokens.next().ok_or_else(malformed)?),
        "W" | "w" | "S" | "s" => (true, tokens.next().ok_or_else(malformed)?),
        _ => (false, first),
    };
    if tokens.next().is_some() {
        return Err(malformed());
    }

    let addr = parse_addr(addr_token).ok_or_else(malformed)?;
    Ok(Some(Access { addr, is_write }))
}

/// Parses a trace from text.
///
/// # Errors
///
/// Returns [`TraceError::Malformed`] with the 1-based line number of the
/// first line that is not a valid access.
pub fn parse_trace(text: &str) -> Result<Vec<Access>, TraceError> {
    let mut accesses = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(access) = parse_line(idx + 1, line)? {
            accesses.push(access);
        }
    }
    Ok(accesses)
}

/// Reads and parses a trace file.
///
/// # Errors
///
/// Returns [`TraceError::Io`] if the file cannot be read, or
/// [`TraceError::Malformed`] as for [`parse_trace`].
pub fn load_trace(path: impl AsRef<Path>) -> Result<Vec<Access>, TraceError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| TraceError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_trace(&text)
}
