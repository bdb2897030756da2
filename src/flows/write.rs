//! Write flow
//!
//! Scans, checks every text file and atomically rewrites the ones with
//! issues. Files without issues are never touched.

use anyhow::Result;
use std::time::Instant;
use tracing::debug;

use crate::core::atomic::write_atomic;
use crate::core::console::{Console, Verbosity};
use crate::core::paths::normalize_path;
use crate::flows::{check_file, log_elapsed, scan_step, Mode, RunOptions, RunOutcome};
use crate::rules::RuleSet;

pub fn run_write(opts: &RunOptions, console: &mut Console<'_>) -> Result<RunOutcome> {
    let start = Instant::now();
    let scan = scan_step(opts, console)?;

    let mut outcome = RunOutcome {
        mode: Mode::Write,
        files_scanned: scan.files.len(),
        files_skipped: scan.skipped.len(),
        ..Default::default()
    };

    if scan.is_empty() {
        console.print(Verbosity::Normal, format_args!("No text files found."))?;
        return Ok(outcome);
    }

    let rules = RuleSet::builtin();
    let mut fixed = Vec::new();
    for path in &scan.files {
        let shown = normalize_path(path);
        console.log(Verbosity::Verbose, format_args!("Fixing {}", shown))?;

        let checked = check_file(path, &rules, console)?;
        if checked.issues.is_empty() {
            continue;
        }
        outcome.issues += checked.issues.len();

        let content = rules.fix(&checked.content);
        debug!(path = %shown, before = checked.content.len(), after = content.len(), "fixing");
        write_atomic(path, &content)?;

        console.log(Verbosity::Debug, format_args!("fix: applied to {}", shown))?;
        fixed.push(shown);
    }
    outcome.files_fixed = fixed.len();

    if !fixed.is_empty() {
        console.print(
            Verbosity::Normal,
            format_args!("Fixed {} file(s):", fixed.len()),
        )?;
        for shown in &fixed {
            console.print(Verbosity::Normal, format_args!("{}", shown))?;
        }
    }

    log_elapsed(console, start)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::OutputFormat;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn opts(paths: Vec<PathBuf>) -> RunOptions {
        RunOptions {
            mode: Mode::Write,
            format: OutputFormat::Compact,
            paths,
        }
    }

    fn run(verbosity: Verbosity, opts: &RunOptions) -> (RunOutcome, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = {
            let mut console = Console::new(verbosity, &mut out, &mut err);
            run_write(opts, &mut console).unwrap()
        };
        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_write_fixes_files() {
        let temp = tempdir().unwrap();
        let bad = temp.path().join("bad.txt");
        fs::write(&bad, "hello   \nworld\t\n\n").unwrap();

        let (outcome, out, _) = run(Verbosity::Normal, &opts(vec![bad.clone()]));

        assert_eq!(fs::read(&bad).unwrap(), b"hello\nworld\n");
        assert_eq!(outcome.files_fixed, 1);
        assert_eq!(outcome.issues, 3);
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(out, format!("Fixed 1 file(s):\n{}\n", normalize_path(&bad)));
    }

    #[test]
    fn test_write_preserves_crlf() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("dos.txt");
        fs::write(&file, "a  \r\nb\r\n\r\n").unwrap();

        run(Verbosity::Quiet, &opts(vec![file.clone()]));

        assert_eq!(fs::read(&file).unwrap(), b"a\r\nb\r\n");
    }

    #[test]
    fn test_write_leaves_clean_and_binary_files_alone() {
        let temp = tempdir().unwrap();
        let good = temp.path().join("good.txt");
        let bin = temp.path().join("data.bin");
        fs::write(&good, "fine\n").unwrap();
        fs::write(&bin, [b' ', 0, b' ', b'\n', b'\n']).unwrap();

        let (outcome, out, _) = run(Verbosity::Normal, &opts(vec![temp.path().to_path_buf()]));

        assert_eq!(outcome.files_fixed, 0);
        assert!(out.is_empty());
        assert_eq!(fs::read(&good).unwrap(), b"fine\n");
        assert_eq!(fs::read(&bin).unwrap(), [b' ', 0, b' ', b'\n', b'\n']);
    }

    #[test]
    fn test_write_then_check_is_clean() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("a.txt"), "x  \n\n\n").unwrap();
        fs::write(temp.path().join("sub/b.md"), "no newline\t").unwrap();
        fs::write(temp.path().join("empty.txt"), "").unwrap();

        let (outcome, _, _) = run(Verbosity::Quiet, &opts(vec![temp.path().to_path_buf()]));
        assert_eq!(outcome.files_fixed, 2);

        assert_eq!(fs::read(temp.path().join("a.txt")).unwrap(), b"x\n");
        assert_eq!(fs::read(temp.path().join("sub/b.md")).unwrap(), b"no newline\n");
        assert_eq!(fs::read(temp.path().join("empty.txt")).unwrap(), b"");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut console = Console::new(Verbosity::Quiet, &mut out, &mut err);
        let check = crate::flows::check::run_check(
            &RunOptions {
                mode: Mode::Check,
                format: OutputFormat::Compact,
                paths: vec![temp.path().to_path_buf()],
            },
            &mut console,
        )
        .unwrap();
        assert_eq!(check.issues, 0);
    }

    #[test]
    fn test_write_debug_logs_applied() {
        let temp = tempdir().unwrap();
        let bad = temp.path().join("bad.txt");
        fs::write(&bad, "x").unwrap();

        let (_, _, err) = run(Verbosity::Debug, &opts(vec![bad]));

        assert!(err.contains("Fixing "));
        assert!(err.contains("fix: applied to "));
        assert!(err.contains("debug: mode=write"));
    }

    #[test]
    fn test_write_no_text_files() {
        let temp = tempdir().unwrap();

        let (outcome, out, _) = run(Verbosity::Normal, &opts(vec![temp.path().to_path_buf()]));

        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(out, "No text files found.\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_aborts_on_unreadable_file_before_rewriting() {
        use crate::core::error::FmtError;
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let bad = temp.path().join("a.txt");
        let locked = temp.path().join("b.txt");
        fs::write(&bad, "x  \n").unwrap();
        fs::write(&locked, "y  \n").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root
        if fs::File::open(&locked).is_ok() {
            return;
        }

        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut console = Console::new(Verbosity::Normal, &mut out, &mut err);
        let result = run_write(&opts(vec![temp.path().to_path_buf()]), &mut console);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<FmtError>(),
            Some(FmtError::Read { .. })
        ));
        assert_eq!(fs::read(&bad).unwrap(), b"x  \n");
        assert_eq!(fs::read(&locked).unwrap(), b"y  \n");
    }
}
