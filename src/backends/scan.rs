//! File scanning backend
//!
//! Uses walkdir for deterministic traversal and the file reader for text
//! classification.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::core::error::FmtError;
use crate::core::file_reader::{classify_file, FileClass};
use crate::core::model::ScanResult;
use crate::core::paths::dedup_key;

/// Walks input paths and sorts files into accepted text files and rejects
struct Scanner {
    seen: HashSet<PathBuf>,
    result: ScanResult,
}

impl Scanner {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
            result: ScanResult::new(),
        }
    }

    fn visit_root(&mut self, root: &Path) -> Result<(), FmtError> {
        let metadata = fs::metadata(root).map_err(|source| FmtError::Path {
            path: root.to_path_buf(),
            source,
        })?;

        if metadata.is_file() {
            return self.visit_file(root.to_path_buf());
        }

        if !metadata.is_dir() {
            return Err(FmtError::NotFileOrDir {
                path: root.to_path_buf(),
            });
        }

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|source| FmtError::Walk {
                path: root.to_path_buf(),
                source,
            })?;

            // Symlinks are not followed, so only real regular files get here
            if entry.file_type().is_file() {
                self.visit_file(entry.into_path())?;
            }
        }

        Ok(())
    }

    fn visit_file(&mut self, path: PathBuf) -> Result<(), FmtError> {
        if !self.seen.insert(dedup_key(&path)) {
            debug!(path = %path.display(), "already scanned");
            return Ok(());
        }

        match classify_file(&path)? {
            FileClass::Text => {
                debug!(path = %path.display(), "accepted");
                self.result.accept(path);
            }
            FileClass::Rejected(reason) => {
                debug!(path = %path.display(), %reason, "rejected");
                self.result.reject(path, reason);
            }
        }
        Ok(())
    }
}

/// Scan files and directories, returning text files in discovery order.
///
/// A file reachable through several arguments is scanned once, the first
/// time it is seen. Any path that cannot be stat'd, and any file that
/// cannot be read for classification, aborts the scan.
pub fn scan_paths<P: AsRef<Path>>(paths: &[P]) -> Result<ScanResult, FmtError> {
    let mut scanner = Scanner::new();
    for path in paths {
        scanner.visit_root(path.as_ref())?;
    }
    Ok(scanner.result)
}
