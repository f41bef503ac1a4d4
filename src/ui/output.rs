//! Output formatting and display logic for urldupes

use serde::Serialize;

use crate::core::constants::{display, output_formats};
use crate::core::error::Result;
use crate::core::types::{ScanMode, ScanReport};

#[derive(Serialize)]
struct JsonGroup<'a> {
    url: &'a str,
    files: &'a [String],
}

#[derive(Serialize)]
struct JsonRetained<'a> {
    url: &'a str,
    file: &'a str,
}

#[derive(Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
enum JsonReport<'a> {
    Report {
        files_considered: usize,
        duplicates: Vec<JsonGroup<'a>>,
    },
    Prune {
        dry_run: bool,
        started_with: usize,
        removed: usize,
        remaining: usize,
        retained: Vec<JsonRetained<'a>>,
        removed_files: &'a [String],
    },
}

/// Render a scan report in the requested output format
pub fn render_report(report: &ScanReport, output_format: &str) -> Result<String> {
    match output_format {
        output_formats::JSON => render_json(report),
        _ => Ok(render_text(report)),
    }
}

/// Print a scan report to stdout
pub fn display_report(report: &ScanReport, output_format: &str) -> Result<()> {
    print!("{}", render_report(report, output_format)?);
    Ok(())
}

fn render_text(report: &ScanReport) -> String {
    let mut out = String::new();

    match report.mode {
        ScanMode::Report => {
            for (url, files) in report.duplicates() {
                out.push_str(&format!("{}{url}\n", display::GROUP_HEADING_PREFIX));
                for file in files {
                    out.push_str(&format!("{}{file}\n", display::GROUP_MEMBER_MARKER));
                }
            }
        }
        ScanMode::Prune { dry_run } => {
            for (url, files) in report.groups.iter() {
                if let Some(representative) = files.first() {
                    out.push_str(&format!("{url}: {representative}\n"));
                }
            }
            let suffix = if dry_run { display::DRY_RUN_SUFFIX } else { "" };
            out.push_str(&format!("Started with {}\n", report.considered));
            out.push_str(&format!("Removed {}{suffix}\n", report.removed()));
            out.push_str(&format!("{} remaining\n", report.remaining()));
        }
    }

    out
}

fn render_json(report: &ScanReport) -> Result<String> {
    let json_report = match report.mode {
        ScanMode::Report => JsonReport::Report {
            files_considered: report.considered,
            duplicates: report
                .duplicates()
                .map(|(url, files)| JsonGroup { url, files })
                .collect(),
        },
        ScanMode::Prune { dry_run } => JsonReport::Prune {
            dry_run,
            started_with: report.considered,
            removed: report.removed(),
            remaining: report.remaining(),
            retained: report
                .groups
                .iter()
                .filter_map(|(url, files)| {
                    files.first().map(|file| JsonRetained {
                        url,
                        file: file.as_str(),
                    })
                })
                .collect(),
            removed_files: &report.removed_files,
        },
    };

    Ok(format!("{}\n", serde_json::to_string(&json_report)?))
}
