//! Structured logging
//!
//! Log output goes to stderr so stdout carries only the report.

pub mod logging;
