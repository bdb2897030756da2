//! File reading and text classification
//!
//! Provides consistent handling for:
//! - Binary files (null bytes in the sampled prefix)
//! - Non-UTF-8 files
//! - Whole-file reads for the rule engine

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::core::error::FmtError;
use crate::core::model::SkipReason;

/// Number of leading bytes sampled to decide whether a file is text (32 KB)
pub const SAMPLE_SIZE: usize = 32 * 1024;

/// Classification of a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    Text,
    Rejected(SkipReason),
}

/// Classify a sampled prefix.
///
/// `truncated` tells whether the file continues past the sample; in that case
/// a multi-byte character cut by the sample boundary is not held against it.
pub fn classify_sample(sample: &[u8], truncated: bool) -> FileClass {
    if sample.is_empty() {
        return FileClass::Text;
    }

    if sample.contains(&0) {
        return FileClass::Rejected(SkipReason::NullByte);
    }

    match std::str::from_utf8(sample) {
        Ok(_) => FileClass::Text,
        // error_len() is None when the input ends mid-sequence
        Err(e) if truncated && e.error_len().is_none() => FileClass::Text,
        Err(_) => FileClass::Rejected(SkipReason::InvalidUtf8),
    }
}

/// Read up to [`SAMPLE_SIZE`] bytes of `path` and classify them
pub fn classify_file(path: &Path) -> Result<FileClass, FmtError> {
    let file = fs::File::open(path).map_err(|e| FmtError::read(path, e))?;

    // One extra byte tells us whether the file goes on past the sample.
    let mut buffer = Vec::with_capacity(SAMPLE_SIZE + 1);
    file.take(SAMPLE_SIZE as u64 + 1)
        .read_to_end(&mut buffer)
        .map_err(|e| FmtError::read(path, e))?;

    let truncated = buffer.len() > SAMPLE_SIZE;
    buffer.truncate(SAMPLE_SIZE);

    Ok(classify_sample(&buffer, truncated))
}

/// Read the whole file for checking or fixing
pub fn read_content(path: &Path) -> Result<Vec<u8>, FmtError> {
    fs::read(path).map_err(|e| FmtError::read(path, e))
}
