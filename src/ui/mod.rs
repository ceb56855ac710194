//! User interface and interaction
//!
//! This module contains the CLI definition, terminal colors and the
//! per-file progress output.

pub mod cli;
pub mod color;
pub mod progress;

// Re-export commonly used items
pub use cli::{Cli, Commands};
pub use progress::ProgressReporter;
