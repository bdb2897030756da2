//! Flows module - the check and write pipelines
//!
//! Both flows share the same front half: scan the input paths, then read and
//! check each text file. They differ in what happens to the issues.

pub mod check;
pub mod write;

use anyhow::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::backends::scan::scan_paths;
use crate::core::console::{Console, Verbosity};
use crate::core::file_reader::read_content;
use crate::core::model::{Issue, ScanResult};
use crate::core::paths::normalize_path;
use crate::core::render::OutputFormat;
use crate::rules::RuleSet;

/// What a run does with the issues it finds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Report issues, never touch files
    #[default]
    Check,
    /// Rewrite files in place
    Write,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Check => "check",
            Mode::Write => "write",
        }
    }
}

/// Validated options for a single run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub mode: Mode,
    pub format: OutputFormat,
    pub paths: Vec<PathBuf>,
}

/// Counters describing a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub mode: Mode,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub issues: usize,
    pub files_fixed: usize,
}

impl RunOutcome {
    /// 1 when check mode found issues, 0 otherwise
    pub fn exit_code(&self) -> i32 {
        match self.mode {
            Mode::Check if self.issues > 0 => 1,
            _ => 0,
        }
    }
}

/// Run the pipeline selected by `opts.mode`
pub fn run(opts: &RunOptions, console: &mut Console<'_>) -> Result<RunOutcome> {
    let outcome = match opts.mode {
        Mode::Check => check::run_check(opts, console)?,
        Mode::Write => write::run_write(opts, console)?,
    };
    console.flush()?;
    Ok(outcome)
}

/// Scan the input paths, reporting progress according to verbosity
pub(crate) fn scan_step(opts: &RunOptions, console: &mut Console<'_>) -> Result<ScanResult> {
    let shown: Vec<String> = opts.paths.iter().map(|p| normalize_path(p)).collect();

    console.log(
        Verbosity::Debug,
        format_args!(
            "debug: mode={} format={} rules={} paths={:?}",
            opts.mode.as_str(),
            opts.format,
            RuleSet::builtin().ids().join(","),
            shown
        ),
    )?;
    console.log(
        Verbosity::Verbose,
        format_args!("Scanning {} path(s): {}", shown.len(), shown.join(", ")),
    )?;

    let scan = scan_paths(&opts.paths)?;

    if scan.files.is_empty() {
        console.log(
            Verbosity::Verbose,
            format_args!(
                "No text files found. Scanned 0 text file(s), skipped {} path(s).",
                scan.skipped.len()
            ),
        )?;
    } else {
        console.log(
            Verbosity::Verbose,
            format_args!(
                "Scanned {} text file(s), skipped {} path(s).",
                scan.files.len(),
                scan.skipped.len()
            ),
        )?;
    }

    for (path, reason) in &scan.skipped {
        if console.enabled(Verbosity::Debug) {
            console.log(
                Verbosity::Debug,
                format_args!(
                    "scanner: rejected {} (reason: {})",
                    normalize_path(path),
                    reason
                ),
            )?;
        } else {
            console.log(
                Verbosity::Verbose,
                format_args!("Skipped (not text): {}", normalize_path(path)),
            )?;
        }
    }
    for path in &scan.files {
        console.log(
            Verbosity::Debug,
            format_args!("scanner: accepted {}", normalize_path(path)),
        )?;
    }

    Ok(scan)
}

/// A text file after the rules ran over it
pub(crate) struct CheckedFile {
    pub content: Vec<u8>,
    pub issues: Vec<Issue>,
}

/// Read one file and run every rule over it
pub(crate) fn check_file(
    path: &Path,
    rules: &RuleSet,
    console: &mut Console<'_>,
) -> Result<CheckedFile> {
    let display = normalize_path(path);
    let content = read_content(path)?;
    let issues = rules.check(&display, &content);

    if !issues.is_empty() {
        let ids: BTreeSet<&str> = issues.iter().map(|i| i.rule).collect();
        console.log(
            Verbosity::Debug,
            format_args!(
                "rules: {} -> {} issue(s): {}",
                display,
                issues.len(),
                ids.into_iter().collect::<Vec<_>>().join(", ")
            ),
        )?;
    }

    Ok(CheckedFile { content, issues })
}

/// Log the total run time at verbose level
pub(crate) fn log_elapsed(console: &mut Console<'_>, start: Instant) -> Result<()> {
    console.log(
        Verbosity::Verbose,
        format_args!("Completed in {}", format_elapsed(start.elapsed())),
    )?;
    Ok(())
}

/// Milliseconds, rounded to the nearest one
fn format_elapsed(elapsed: Duration) -> String {
    let ms = (elapsed.as_micros() + 500) / 1000;
    format!("{}ms", ms)
}
