//! md-link-report - check the links in a project's markdown files
//!
//! A run walks the workspace for markdown files, skipping those that version
//! control ignores, extracts every `http(s)` URL from their text, probes each
//! URL with a header-only request and writes the status codes to a JSON
//! report.
//!
//! # Modules
//!
//! - [`core`] - Report data model, error handling and constants
//! - [`config`] - Run configuration and the optional TOML file layer
//! - [`discovery`] - Exclusion resolution, file discovery and URL extraction
//! - [`validation`] - Liveness probing
//! - [`reporting`] - Report writing and logging
//! - [`runner`] - The run itself, with injectable capabilities
//! - [`ui`] - CLI definition and console output

pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod runner;
pub mod ui;
pub mod validation;

// Re-export the main public API
pub use config::Config;
pub use core::{Report, ReportError, Result, UrlDetails};
pub use discovery::{ExclusionPattern, ExclusionResolver, ListIgnoredPaths};
pub use reporting::ReportWriter;
pub use runner::{FsSource, ReadSource, Runner};
pub use validation::{HttpProber, ProbeUrl};
