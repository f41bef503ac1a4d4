//! Configuration management
//!
//! Settings come from command-line options only; there are no config files.

use crate::core::constants::output_formats;
use crate::core::error::{Result, UrlDupesError};
use crate::core::types::ScanMode;

#[derive(Debug, Clone)]
pub struct Config {
    /// Delete later files that repeat an earlier file's URL
    pub prune: Option<bool>,

    /// With `prune`, report what would be deleted without deleting
    pub dry_run: Option<bool>,

    /// Output format (text, json)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Silence logging entirely
    pub quiet: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prune: Some(false),
            dry_run: Some(false),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
            quiet: Some(false),
        }
    }
}

impl Config {
    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if cli_config.prune {
            self.prune = Some(true);
        }
        if cli_config.dry_run {
            self.dry_run = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if cli_config.quiet {
            self.quiet = Some(true);
        }
    }

    pub fn scan_mode(&self) -> ScanMode {
        if self.prune.unwrap_or(false) {
            ScanMode::Prune {
                dry_run: self.dry_run.unwrap_or(false),
            }
        } else {
            ScanMode::Report
        }
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.dry_run.unwrap_or(false) && !self.prune.unwrap_or(false) {
            return Err(UrlDupesError::Config(
                "--dry-run only applies together with --prune.".to_string(),
            ));
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(UrlDupesError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub prune: bool,                   // --prune
    pub dry_run: bool,                 // --dry-run
    pub output_format: Option<String>, // --format
    pub verbose: bool,                 // --verbose
    pub quiet: bool,                   // --quiet
}
