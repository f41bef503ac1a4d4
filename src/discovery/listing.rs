use std::fs;
use std::path::Path;

use crate::core::error::{Result, UrlDupesError};
use crate::core::types::DirectoryEntry;

/// List the entries directly under `directory`, sorted by file name.
///
/// The listing is not recursive. Symlinks are followed when deciding whether an
/// entry is a regular file, so a broken link counts as "not a file".
pub fn list_entries(directory: &Path) -> Result<Vec<DirectoryEntry>> {
    let directory_name = directory.display().to_string();
    let read_dir =
        fs::read_dir(directory).map_err(|e| UrlDupesError::DirectoryRead(directory_name.clone(), e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| UrlDupesError::DirectoryRead(directory_name.clone(), e))?;
        let path = entry.path();

        entries.push(DirectoryEntry {
            file_name: entry.file_name().to_string_lossy().into_owned(),
            is_file: path.is_file(),
            path,
        });
    }

    // read_dir order is filesystem dependent
    entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    Ok(entries)
}
