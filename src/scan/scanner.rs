use std::fs;
use std::path::Path;

use crate::core::error::{Result, UrlDupesError};
use crate::core::types::{DirectoryEntry, ScanMode, ScanReport};
use crate::discovery::{extract_record, list_entries};
use crate::reporting::logging;

pub trait ScanDirectory {
    fn scan(&self, directory: &Path, mode: ScanMode) -> Result<ScanReport>;
}

#[derive(Default, Debug)]
pub struct Scanner {}

impl ScanDirectory for Scanner {
    /// Group the regular files directly under `directory` by the URL on their
    /// first line.
    ///
    /// Files are visited in file-name order. `logs.txt` is never read, counted
    /// or deleted, and non-files are skipped without being counted. In prune
    /// mode the first file per URL is kept and every later one is deleted as
    /// soon as it is read; deletions already made stay made if a later file
    /// fails to open.
    fn scan(&self, directory: &Path, mode: ScanMode) -> Result<ScanReport> {
        let metadata = fs::metadata(directory)
            .map_err(|e| UrlDupesError::DirectoryRead(directory.display().to_string(), e))?;
        if !metadata.is_dir() {
            return Err(UrlDupesError::NotADirectory(
                directory.display().to_string(),
            ));
        }

        logging::log_scan_start(directory, mode);

        let mut report = ScanReport::new(mode);

        for entry in list_entries(directory)? {
            if entry.is_sentinel() {
                logging::log_entry_skipped(&entry.file_name, "sentinel file");
                continue;
            }
            if !entry.is_file {
                logging::log_entry_skipped(&entry.file_name, "not a regular file");
                continue;
            }

            report.considered += 1;
            Self::process_entry(&entry, &mut report)?;
        }

        logging::log_scan_complete(&report);

        Ok(report)
    }
}

impl Scanner {
    fn process_entry(entry: &DirectoryEntry, report: &mut ScanReport) -> Result<()> {
        let record = extract_record(entry)?;
        logging::log_extracted_url(&record.file_name, record.url.as_deref());

        let Some(url) = record.url else {
            return Ok(());
        };

        match report.mode {
            ScanMode::Report => report.groups.push(url, record.file_name),
            ScanMode::Prune { dry_run } => {
                if report.groups.contains(&url) {
                    if !dry_run {
                        fs::remove_file(&entry.path).map_err(|e| {
                            UrlDupesError::FileRemove(entry.path.display().to_string(), e)
                        })?;
                    }
                    logging::log_duplicate_removed(&record.file_name, &url, dry_run);
                    report.removed_files.push(record.file_name);
                } else {
                    report.groups.insert_first(url, record.file_name);
                }
            }
        }

        Ok(())
    }
}

/// Scan `directory` with the default [`Scanner`].
pub fn scan(directory: &Path, mode: ScanMode) -> Result<ScanReport> {
    Scanner::default().scan(directory, mode)
}
