//! Core types and foundational components
//!
//! This module contains the report data model, error handling,
//! and constants used throughout the application.

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{ReportError, Result};
pub use types::{Report, UrlDetails};
