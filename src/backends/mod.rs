//! Backends module - file system operations
//!
//! Provides:
//! - scan: Path traversal with walkdir and text classification

pub mod scan;
