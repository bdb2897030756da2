//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Result model (Issue, ScanResult)
//! - Error kinds
//! - Console context for verbosity-gated output
//! - Report rendering (compact/tap/json)
//! - Text classification and file reading
//! - Atomic file replacement
//! - Path utilities

pub mod atomic;
pub mod console;
pub mod error;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
