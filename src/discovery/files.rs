use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use log::debug;

use crate::core::constants::files;
use crate::core::error::Result;
use crate::discovery::exclusion::ExclusionPattern;

use std::path::{Path, PathBuf};

/// Find every markdown file below `root` that no exclusion pattern matches.
///
/// Hidden entries are skipped and symlinks are not followed. Entries are
/// visited in file name order, so repeated runs over the same tree yield the
/// same sequence. Ignore files are not consulted here; exclusion comes only
/// from `exclusions`.
pub fn discover_markdown_files(
    root: &Path,
    exclusions: &[ExclusionPattern],
) -> Result<Vec<PathBuf>> {
    let mut overrides = OverrideBuilder::new(root);
    for pattern in exclusions {
        overrides.add(&format!("!{}", pattern.glob()))?;
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(true)
        .follow_links(false)
        .overrides(overrides.build()?)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut markdown_paths = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let is_file = entry.file_type().is_some_and(|kind| kind.is_file());

        if is_file && is_markdown(entry.path()) {
            markdown_paths.push(entry.into_path());
        }
    }

    debug!(
        "Discovered {} markdown file(s) under {}",
        markdown_paths.len(),
        root.display()
    );

    Ok(markdown_paths)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == files::MARKDOWN_EXTENSION)
}
