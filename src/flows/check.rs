//! Check flow
//!
//! Scans, runs every rule over every text file and prints one report.

use anyhow::{Context, Result};
use std::time::Instant;

use crate::core::console::{Console, Verbosity};
use crate::core::paths::normalize_path;
use crate::core::render::{OutputFormat, Renderer};
use crate::flows::{check_file, log_elapsed, scan_step, Mode, RunOptions, RunOutcome};
use crate::rules::RuleSet;

pub fn run_check(opts: &RunOptions, console: &mut Console<'_>) -> Result<RunOutcome> {
    let start = Instant::now();
    let scan = scan_step(opts, console)?;
    let renderer = Renderer::new(opts.format);

    let mut outcome = RunOutcome {
        mode: Mode::Check,
        files_scanned: scan.files.len(),
        files_skipped: scan.skipped.len(),
        ..Default::default()
    };

    if scan.is_empty() {
        // The plain-text notice would break tap/json consumers
        if opts.format == OutputFormat::Compact {
            console.print(Verbosity::Normal, format_args!("No text files found."))?;
        }
        if console.enabled(Verbosity::Normal) {
            renderer
                .render_to(&[], Some(0), console.out())
                .context("Failed to write report")?;
        }
        return Ok(outcome);
    }

    let rules = RuleSet::builtin();
    let mut issues = Vec::new();
    for path in &scan.files {
        console.log(
            Verbosity::Verbose,
            format_args!("Checking {}", normalize_path(path)),
        )?;
        let checked = check_file(path, &rules, console)?;
        issues.extend(checked.issues);
    }
    outcome.issues = issues.len();

    if console.enabled(Verbosity::Normal) {
        renderer
            .render_to(&issues, Some(scan.files.len()), console.out())
            .context("Failed to write report")?;
    }

    log_elapsed(console, start)?;
    Ok(outcome)
}
