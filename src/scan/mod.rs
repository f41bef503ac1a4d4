//! Duplicate detection
//!
//! A single pass over the directory that groups files by the URL on their
//! first line and, in prune mode, deletes the later copies.

pub mod scanner;

// Re-export commonly used items
pub use scanner::{ScanDirectory, Scanner, scan};
