//! Find crawled pages that record the same URL.
//!
//! Every page saved by the crawler starts with a header line of the form
//! `URL: <url> Doc number <n>`. [`scan`] reads that line from each regular
//! file directly under a directory, groups file names by URL and, in prune
//! mode, deletes every file after the first one for a URL.
//!
//! ```no_run
//! use std::path::Path;
//! use urldupes::{ScanMode, scan};
//!
//! let report = scan(Path::new("pages"), ScanMode::Report).unwrap();
//! for (url, files) in report.duplicates() {
//!     println!("{url}: {}", files.join(", "));
//! }
//! ```

pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod scan;
pub mod ui;

pub use crate::core::error::{Result, UrlDupesError};
pub use crate::core::types::{DirectoryEntry, ExtractedRecord, ScanMode, ScanReport, UrlGroups};
pub use crate::scan::{ScanDirectory, Scanner, scan};
