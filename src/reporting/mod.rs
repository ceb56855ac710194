//! Report output and logging
//!
//! This module serializes the finished report to disk and holds the
//! structured logging helpers used during a run.

pub mod logging;
pub mod writer;

// Re-export commonly used items
pub use writer::ReportWriter;
