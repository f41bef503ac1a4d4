//! Directory listing and first-line URL extraction
//!
//! This module enumerates the files directly under the scanned directory
//! and pulls the recorded URL out of each file's first line.

pub mod extractor;
pub mod listing;

// Re-export commonly used items
pub use extractor::{extract_record, extract_url, read_first_line};
pub use listing::list_entries;
