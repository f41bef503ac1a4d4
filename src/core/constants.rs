/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal values the scanner and the output
/// layer agree on.
/// Output format constants
pub mod output_formats {
    /// Text output format - the line-oriented report
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// Directory scanning constants
pub mod scanning {
    /// Crawler log file that lives next to the saved pages; never read, counted or deleted
    pub const SENTINEL_FILE_NAME: &str = "logs.txt";

    /// First-line pattern: `URL:` then the shortest run up to `Doc number`
    pub const FIRST_LINE_URL_PATTERN: &str = r"URL:\s*(.*?)\s*Doc number";
}

/// Text report markers
pub mod display {
    /// Prefix of a duplicate group heading in report mode
    pub const GROUP_HEADING_PREFIX: &str = "URL: ";
    /// Marker in front of every filename listed under a group
    pub const GROUP_MEMBER_MARKER: &str = "  -> ";
    /// Suffix appended to the removal count when nothing was deleted
    pub const DRY_RUN_SUFFIX: &str = " (dry run)";
}

/// Usage line printed when the argument count is wrong
pub mod usage {
    pub const USAGE: &str = concat!("Usage: ", env!("CARGO_PKG_NAME"), " <directory_path>");
}
