//! Markdown and URL discovery
//!
//! This module resolves which paths version control ignores, walks the
//! workspace for markdown files, and pulls URL-shaped text out of them.

pub mod exclusion;
pub mod extractor;
pub mod files;

// Re-export commonly used items
pub use exclusion::{
    ExclusionPattern, ExclusionResolver, GitCheckIgnore, GitignoreRules, ListIgnoredPaths,
};
pub use extractor::extract_urls;
pub use files::discover_markdown_files;
