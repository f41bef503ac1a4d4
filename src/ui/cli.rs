// Command-line interface definitions and parsing for urldupes

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the crawled pages
    pub directory: PathBuf,

    // Scan Options
    /// Delete every file whose URL repeats an earlier file's (irreversible)
    #[arg(long, help_heading = "Scan Options")]
    pub prune: bool,

    /// With --prune, list what would be deleted without deleting it
    #[arg(long, help_heading = "Scan Options")]
    pub dry_run: bool,

    // Output & Verbosity
    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, default_value = output_formats::DEFAULT, help_heading = "Output & Verbosity")]
    pub format: String,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Disable logging
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,
}

/// Convert parsed CLI arguments into the options `Config` merges
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        prune: cli.prune,
        dry_run: cli.dry_run,
        output_format: Some(cli.format.clone()),
        verbose: cli.verbose,
        quiet: cli.quiet,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse__directory_only() {
        let cli = Cli::try_parse_from(["urldupes", "pages"]).unwrap();

        assert_eq!(cli.directory, PathBuf::from("pages"));
        assert!(!cli.prune);
        assert!(!cli.dry_run);
        assert_eq!(cli.format, output_formats::TEXT);
    }

    #[test]
    fn test_parse__all_options() {
        let cli = Cli::try_parse_from([
            "urldupes", "pages", "--prune", "--dry-run", "--format", "json", "-v",
        ])
        .unwrap();

        let cli_config = cli_to_config(&cli);
        assert!(cli_config.prune);
        assert!(cli_config.dry_run);
        assert!(cli_config.verbose);
        assert!(!cli_config.quiet);
        assert_eq!(cli_config.output_format, Some("json".to_string()));
    }

    #[test]
    fn test_parse__missing_directory() {
        let err = Cli::try_parse_from(["urldupes"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse__too_many_directories() {
        let result = Cli::try_parse_from(["urldupes", "pages", "more"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_parse__invalid_format() {
        let err = Cli::try_parse_from(["urldupes", "pages", "--format", "xml"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[cfg(unix)]
    #[test]
    fn test_parse__non_utf8_directory() {
        use std::ffi::{OsStr, OsString};
        use std::os::unix::ffi::OsStrExt;

        let directory = OsStr::from_bytes(b"pages_\xff");
        let cli = Cli::try_parse_from([OsString::from("urldupes"), directory.to_os_string()]).unwrap();

        assert_eq!(cli.directory.as_os_str(), directory);
    }
}
