//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;
use std::path::PathBuf;
use tracing::debug;

use crate::core::console::{Console, Verbosity};
use crate::core::error::FmtError;
use crate::core::render::OutputFormat;
use crate::flows::{self, Mode, RunOptions};

/// prosefmt - the simplest text formatter for making your files look correct.
#[derive(Parser, Debug)]
#[command(name = "prosefmt")]
#[command(
    author,
    version,
    about,
    long_about = r#"Check or fix text files. Pass one or more files or directories
(directories are scanned recursively). Only text files are processed: a file
is text when its first 32 KB contain no null byte and are valid UTF-8.

Rules:
- TL010: no trailing spaces or tabs at the end of a line
- TL001: the file ends with exactly one newline (LF or CRLF, as detected)

Exit status is 1 when --check finds issues or when anything goes wrong,
otherwise 0.

Examples:
    prosefmt README.md docs/
    prosefmt --format json src
    prosefmt --write notes.txt
"#
)]
pub struct Cli {
    /// Files or directories to process.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Check files and report issues (default).
    #[arg(
        long,
        long_help = "Check files and report issues without modifying anything.\n\n\
This is the default when neither --check nor --write is given."
    )]
    pub check: bool,

    /// Fix issues in place.
    #[arg(
        long,
        visible_alias = "fix",
        long_help = "Fix issues in place. Each file with issues is rewritten through a\n\
temporary file in the same directory and renamed over the original, so a file\n\
is never left half-written."
    )]
    pub write: bool,

    /// Report format (compact/tap/json).
    #[arg(
        long,
        default_value = "compact",
        value_name = "FORMAT",
        long_help = "Select the report format used by --check.\n\n\
Supported values:\n\
- compact (default): file:line:column: rule: message\n\
- tap: Test Anything Protocol\n\
- json: issues grouped by file plus a summary"
    )]
    pub format: String,

    /// Quiet mode: only fatal errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode: steps, skipped files, timing.
    #[arg(long)]
    pub verbose: bool,

    /// Debug mode: internal state and why each file was accepted or skipped.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate flags into run options
    pub fn options(&self) -> Result<RunOptions, FmtError> {
        if self.check && self.write {
            return Err(FmtError::usage("cannot use both --check and --write"));
        }

        let format: OutputFormat = self.format.parse().map_err(FmtError::Usage)?;
        let mode = if self.write { Mode::Write } else { Mode::Check };

        Ok(RunOptions {
            mode,
            format,
            paths: self.paths.clone(),
        })
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose, self.debug)
    }
}

/// Run the CLI with parsed arguments, returning the process exit code
pub fn run(cli: Cli) -> Result<i32> {
    if cli.paths.is_empty() {
        eprint!("{}", Cli::command().render_help());
        return Ok(0);
    }

    let opts = cli.options()?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let mut console = Console::new(cli.verbosity(), &mut out, &mut err);

    let outcome = flows::run(&opts, &mut console)?;
    debug!(
        mode = opts.mode.as_str(),
        files_scanned = outcome.files_scanned,
        files_skipped = outcome.files_skipped,
        issues = outcome.issues,
        files_fixed = outcome.files_fixed,
        "run finished"
    );
    Ok(outcome.exit_code())
}
