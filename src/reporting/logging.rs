use crate::config::Config;
use crate::core::types::{ScanMode, ScanReport};
use log::{debug, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: mode={}, dry_run={}, format={}",
        config.scan_mode(),
        config.scan_mode().is_dry_run(),
        config.output_format()
    );
}

/// Log the start of a scan
pub fn log_scan_start(directory: &Path, mode: ScanMode) {
    info!("Scanning {} in {mode} mode", directory.display());
}

/// Log an entry the scan does not read
pub fn log_entry_skipped(file_name: &str, reason: &str) {
    debug!("Skipping {file_name}: {reason}");
}

/// Log the URL found on a file's first line, if any
pub fn log_extracted_url(file_name: &str, url: Option<&str>) {
    match url {
        Some(url) => debug!("{file_name} -> {url}"),
        None => debug!("{file_name} -> no URL on first line"),
    }
}

/// Log a duplicate that was (or would have been) deleted
pub fn log_duplicate_removed(file_name: &str, url: &str, dry_run: bool) {
    if dry_run {
        info!("Would remove {file_name} (duplicate of {url})");
    } else {
        warn!("Removed {file_name} (duplicate of {url})");
    }
}

/// Log the scan totals
pub fn log_scan_complete(report: &ScanReport) {
    info!(
        "Scan complete: {} file(s) considered, {} unique URL(s), {} removed",
        report.considered,
        report.groups.len(),
        report.removed()
    );
}
