use memchr::memchr2;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::scanning::FIRST_LINE_URL_PATTERN;
use crate::core::error::{Result, UrlDupesError};
use crate::core::types::{DirectoryEntry, ExtractedRecord};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

static FIRST_LINE_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(FIRST_LINE_URL_PATTERN).expect("Failed to compile first-line URL pattern")
});

/// Pull the URL out of a first line of the form `URL: <url> Doc number ...`.
///
/// Returns `None` when the line does not contain the pattern anywhere.
pub fn extract_url(line: &str) -> Option<String> {
    FIRST_LINE_URL_REGEX
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|url| url.as_str().trim().to_string())
}

/// Read the first line of `path` with surrounding whitespace stripped.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
/// `\n`, `\r\n` and a lone `\r` all end the line. An empty file yields "".
pub fn read_first_line(path: &Path) -> Result<String> {
    let file =
        File::open(path).map_err(|e| UrlDupesError::FileRead(path.display().to_string(), e))?;
    let mut reader = BufReader::new(file);

    let bytes = read_line_bytes(&mut reader)
        .map_err(|e| UrlDupesError::FileRead(path.display().to_string(), e))?;

    Ok(String::from_utf8_lossy(&bytes).trim().to_string())
}

/// Read the first line of a directory entry and extract its URL.
pub fn extract_record(entry: &DirectoryEntry) -> Result<ExtractedRecord> {
    let first_line = read_first_line(&entry.path)?;

    Ok(ExtractedRecord {
        file_name: entry.file_name.clone(),
        url: extract_url(&first_line),
    })
}

/// Collect bytes up to (not including) the first line terminator.
fn read_line_bytes<R: BufRead>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut line = Vec::new();

    loop {
        let available = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        if available.is_empty() {
            break;
        }

        match memchr2(b'\n', b'\r', available) {
            Some(end) => {
                line.extend_from_slice(&available[..end]);
                break;
            }
            None => {
                let consumed = available.len();
                line.extend_from_slice(available);
                reader.consume(consumed);
            }
        }
    }

    Ok(line)
}
