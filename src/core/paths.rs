//! Path utilities
//!
//! Display paths use '/' as separator. Deduplication keys are canonical
//! absolute paths.

use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Key used to recognise the same file reached through different arguments.
///
/// Falls back to the lexically absolute path when the file cannot be
/// canonicalized.
pub fn dedup_key(path: &Path) -> PathBuf {
    path.canonicalize()
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("src/main.rs");
        assert_eq!(normalize_path(path), "src/main.rs");
    }

    #[test]
    fn test_normalize_path_nested() {
        let path = Path::new("a/b/c/d.txt");
        assert_eq!(normalize_path(path), "a/b/c/d.txt");
    }

    #[test]
    fn test_dedup_key_same_file_two_spellings() {
        let temp = tempfile::tempdir().unwrap();
        let subdir = temp.path().join("subdir");
        std::fs::create_dir(&subdir).unwrap();
        let file = subdir.join("file.txt");
        std::fs::write(&file, "test").unwrap();

        let roundabout = temp.path().join("subdir").join("..").join("subdir").join("file.txt");
        assert_eq!(dedup_key(&file), dedup_key(&roundabout));
    }

    #[test]
    fn test_dedup_key_missing_file_is_absolute() {
        let key = dedup_key(Path::new("does-not-exist.txt"));
        assert!(key.is_absolute());
    }
}
