//! Error kinds that abort a run

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FmtError {
    /// Conflicting or invalid flags; nothing is scanned
    #[error("{0}")]
    Usage(String),

    /// A top-level input path cannot be used
    #[error("{path}: {source}")]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: not a regular file or directory")]
    NotFileOrDir { path: PathBuf },

    #[error("walking {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FmtError {
    pub fn usage(message: impl Into<String>) -> Self {
        FmtError::Usage(message.into())
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FmtError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FmtError::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = FmtError::read(
            "a.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "reading a.txt: denied");

        let err = FmtError::NotFileOrDir {
            path: PathBuf::from("/dev/null"),
        };
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_usage_is_verbatim() {
        let err = FmtError::usage("cannot use both --check and --write");
        assert_eq!(err.to_string(), "cannot use both --check and --write");
    }
}
