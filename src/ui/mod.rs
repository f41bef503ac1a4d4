//! User interface
//!
//! Command-line parsing and report rendering.

pub mod cli;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use output::{display_report, render_report};
