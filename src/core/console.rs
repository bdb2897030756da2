//! Console context
//!
//! Carries the verbosity level and the two output streams through a run.
//! Reports go to `out`, progress and diagnostics go to `err`. Nothing here is
//! process-wide, so tests can run pipelines side by side with their own buffers.

use std::fmt;
use std::io::{self, Write};

/// Output verbosity, ordered from least to most output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Reports and summaries
    #[default]
    Normal,
    /// Adds scan progress and timing
    Verbose,
    /// Adds per-path decisions and a parameter dump
    Debug,
}

impl Verbosity {
    /// Pick the highest level requested on the command line
    pub fn from_flags(quiet: bool, verbose: bool, debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else if verbose {
            Verbosity::Verbose
        } else if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}

pub struct Console<'a> {
    verbosity: Verbosity,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(verbosity: Verbosity, out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self {
            verbosity,
            out,
            err,
        }
    }

    /// Whether messages at `level` are shown
    pub fn enabled(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }

    /// Write a diagnostic line to the error stream when `level` is enabled
    pub fn log(&mut self, level: Verbosity, args: fmt::Arguments<'_>) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.err.write_fmt(args)?;
        self.err.write_all(b"\n")
    }

    /// Write a line to the report stream when `level` is enabled
    pub fn print(&mut self, level: Verbosity, args: fmt::Arguments<'_>) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.out.write_fmt(args)?;
        self.out.write_all(b"\n")
    }

    /// Raw access to the report stream
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}
