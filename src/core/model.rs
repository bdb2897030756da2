//! Result model shared by the scanner, the rule engine and the reporter
//!
//! Everything here is created and consumed within a single run.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Path as it was discovered, using '/' as separator
    pub file: String,

    /// 1-based line number
    pub line: usize,

    /// 1-based column number
    pub column: usize,

    /// Rule identifier, e.g. `TL010`
    pub rule: &'static str,

    /// Human-readable message
    pub message: &'static str,
}

impl Issue {
    pub fn new(
        file: impl Into<String>,
        line: usize,
        column: usize,
        rule: &'static str,
        message: &'static str,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            rule,
            message,
        }
    }
}

/// Why a discovered file was not treated as text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NullByte,
    InvalidUtf8,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NullByte => "null byte",
            SkipReason::InvalidUtf8 => "invalid UTF-8",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scanning the input paths
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Accepted text files in discovery order
    pub files: Vec<PathBuf>,

    /// Rejected files and the reason, ordered by path
    pub skipped: BTreeMap<PathBuf, SkipReason>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, path: PathBuf) {
        self.files.push(path);
    }

    pub fn reject(&mut self, path: PathBuf, reason: SkipReason) {
        self.skipped.insert(path, reason);
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
