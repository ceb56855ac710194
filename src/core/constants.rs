//! Application-wide constants to avoid magic values throughout the codebase.
//!
//! This module centralizes the hardcoded locations, thresholds and formatting
//! choices of a report run.

/// Report output constants
pub mod output {
    /// Directory (relative to the workspace root) that receives the report
    pub const DEFAULT_OUTPUT_DIR: &str = "tmp";
    /// File name of the JSON report
    pub const DEFAULT_REPORT_FILE_NAME: &str = "markdown-link-report.json";
    /// Indentation used when serializing the report
    pub const JSON_INDENT: &[u8] = b"    ";
}

/// HTTP status code constants
pub mod http_status {
    /// Lowest status code classified as a failed link
    pub const FAILURE_THRESHOLD: u16 = 400;
    /// HTTP 200 OK - successful response
    pub const OK: u16 = 200;
    /// HTTP 301 Moved Permanently - permanent redirect
    pub const MOVED_PERMANENTLY: u16 = 301;
    /// HTTP 404 Not Found - resource not found
    pub const NOT_FOUND: u16 = 404;
    /// HTTP 500 Internal Server Error - server error
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// File discovery constants
pub mod files {
    /// Extension (without the dot) of markdown files
    pub const MARKDOWN_EXTENSION: &str = "md";
    /// Marker file whose presence means the root is a git checkout
    pub const GIT_CONFIG_PATH: &str = ".git/config";
    /// Root ignore file evaluated by the gitignore backend
    pub const GITIGNORE_FILE: &str = ".gitignore";
    /// Repository-local exclude file evaluated by the gitignore backend
    pub const GIT_INFO_EXCLUDE_PATH: &str = ".git/info/exclude";
    /// Name of the optional configuration file looked up in the root
    pub const CONFIG_FILE_NAME: &str = ".md-link-report.toml";
}

/// Console output constants
pub mod display {
    /// Header printed before any file is checked
    pub const HEADER: &str = "Markdown Link Reporter";
    /// Line printed before the report path
    pub const REPORT_WRITTEN: &str = "Successfully generated the report:";
}
