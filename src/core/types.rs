use rustc_hash::FxHashMap;
use std::fmt;
use std::path::PathBuf;

use crate::core::constants::scanning;

/// A single entry directly under the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Full path, used to open and delete the file
    pub path: PathBuf,
    /// File name relative to the scanned directory
    pub file_name: String,
    /// Whether the entry resolves to a regular file (symlinks are followed)
    pub is_file: bool,
}

impl DirectoryEntry {
    /// The crawler's log file, which every scan leaves alone
    pub fn is_sentinel(&self) -> bool {
        self.file_name == scanning::SENTINEL_FILE_NAME
    }
}

/// The outcome of reading one file's first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRecord {
    pub file_name: String,
    /// `None` when the first line does not carry `URL: ... Doc number`
    pub url: Option<String>,
}

/// How a scan treats files whose URL was already seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Collect every filename per URL; nothing on disk changes
    #[default]
    Report,
    /// Keep the first filename per URL and delete later ones
    Prune {
        /// Count and list duplicates without deleting them
        dry_run: bool,
    },
}

impl ScanMode {
    pub fn is_dry_run(&self) -> bool {
        matches!(self, ScanMode::Prune { dry_run: true })
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Report => write!(f, "report"),
            ScanMode::Prune { .. } => write!(f, "prune"),
        }
    }
}

/// Filenames grouped by extracted URL.
///
/// URLs iterate in the order they were first seen and each group keeps its
/// filenames in visit order.
#[derive(Debug, Clone, Default)]
pub struct UrlGroups {
    groups: Vec<(String, Vec<String>)>,
    index: FxHashMap<String, usize>,
}

impl UrlGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `file_name` to the group for `url`, creating the group if needed.
    pub fn push(&mut self, url: String, file_name: String) {
        match self.index.get(&url) {
            Some(&position) => self.groups[position].1.push(file_name),
            None => {
                self.index.insert(url.clone(), self.groups.len());
                self.groups.push((url, vec![file_name]));
            }
        }
    }

    /// Record `file_name` as the representative for `url` unless the URL is
    /// already known. Returns `true` when the file became the representative.
    pub fn insert_first(&mut self, url: String, file_name: String) -> bool {
        if self.index.contains_key(&url) {
            return false;
        }
        self.push(url, file_name);
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.index.contains_key(url)
    }

    pub fn get(&self, url: &str) -> Option<&[String]> {
        self.index
            .get(url)
            .map(|&position| self.groups[position].1.as_slice())
    }

    /// Number of distinct URLs
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(url, files)| (url.as_str(), files.as_slice()))
    }

    /// Groups claimed by more than one file
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter().filter(|(_, files)| files.len() > 1)
    }
}

/// Everything a scan produced: the URL groups plus the file counters.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub mode: ScanMode,
    pub groups: UrlGroups,
    /// Regular files looked at, excluding the sentinel
    pub considered: usize,
    /// Files deleted as duplicates, or that would have been in a dry run
    pub removed_files: Vec<String>,
}

impl ScanReport {
    pub fn new(mode: ScanMode) -> Self {
        Self {
            mode,
            groups: UrlGroups::new(),
            considered: 0,
            removed_files: Vec::new(),
        }
    }

    pub fn removed(&self) -> usize {
        self.removed_files.len()
    }

    pub fn remaining(&self) -> usize {
        self.considered - self.removed()
    }

    pub fn duplicates(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.duplicates()
    }
}
