use ignore::gitignore::{GitignoreBuilder, gitconfig_excludes_path};
use log::debug;

use crate::core::constants::files;
use crate::core::error::{ReportError, Result};

use std::fs;
use std::path::Path;
use std::process::Command;

/// Lists root-relative entries that version control ignores.
///
/// Implementations return raw lines; empty lines and trailing separators
/// are tolerated and cleaned up by [`ExclusionResolver`].
pub trait ListIgnoredPaths {
    fn list_ignored_paths(&self, root: &Path) -> Result<Vec<String>>;
}

/// Evaluates git's ignore files in-process.
///
/// Reads the global excludes file (`core.excludesFile`, else
/// `$XDG_CONFIG_HOME/git/ignore`), `.git/info/exclude` and the root
/// `.gitignore`, later files taking precedence. Unlike `git check-ignore`
/// it does not consult the index, so a tracked file that matches an ignore
/// rule is still listed.
#[derive(Default, Debug)]
pub struct GitignoreRules {}

impl ListIgnoredPaths for GitignoreRules {
    fn list_ignored_paths(&self, root: &Path) -> Result<Vec<String>> {
        let mut builder = GitignoreBuilder::new(root);
        let rule_files = gitconfig_excludes_path().into_iter().chain([
            root.join(files::GIT_INFO_EXCLUDE_PATH),
            root.join(files::GITIGNORE_FILE),
        ]);
        for rules_path in rule_files {
            if rules_path.is_file()
                && let Some(err) = builder.add(&rules_path)
            {
                return Err(err.into());
            }
        }
        let matcher = builder.build()?;

        let ignored = top_level_entries(root)?
            .into_iter()
            .filter(|name| {
                let path = root.join(name);
                matcher.matched(&path, path.is_dir()).is_ignore()
            })
            .collect();

        Ok(ignored)
    }
}

/// Runs `git check-ignore` over the top-level entries of the root.
#[derive(Default, Debug)]
pub struct GitCheckIgnore {}

impl ListIgnoredPaths for GitCheckIgnore {
    fn list_ignored_paths(&self, root: &Path) -> Result<Vec<String>> {
        let entries = top_level_entries(root)?;
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let output = Command::new("git")
            .arg("check-ignore")
            .args(&entries)
            .current_dir(root)
            .output()
            .map_err(|e| ReportError::VersionControl(format!("could not run git: {e}")))?;

        // Exit code 1 only means that none of the entries is ignored
        match output.status.code() {
            Some(0) | Some(1) => Ok(String::from_utf8_lossy(&output.stdout)
                .lines()
                .map(str::to_string)
                .collect()),
            _ => Err(ReportError::VersionControl(format!(
                "git check-ignore failed ({}): {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ))),
        }
    }
}

/// Non-hidden entries directly under `root`, sorted by name.
fn top_level_entries(root: &Path) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(root)? {
        let name = entry?.file_name().to_string_lossy().to_string();
        if !name.starts_with('.') {
            entries.push(name);
        }
    }
    entries.sort();
    Ok(entries)
}

/// A path that file discovery must skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionPattern {
    /// A single ignored markdown file, relative to the root
    File(String),
    /// An ignored directory, relative to the root; every markdown file below it is skipped
    Directory(String),
}

impl ExclusionPattern {
    /// Root-anchored glob in gitignore syntax
    pub fn glob(&self) -> String {
        match self {
            ExclusionPattern::File(path) => format!("/{path}"),
            ExclusionPattern::Directory(path) => {
                format!("/{path}/**/*.{}", files::MARKDOWN_EXTENSION)
            }
        }
    }

    /// The glob joined onto `root`, for display
    pub fn absolute_glob(&self, root: &Path) -> String {
        format!(
            "{}{}",
            root.display().to_string().trim_end_matches('/'),
            self.glob()
        )
    }
}

/// Turns version-control ignore rules into markdown exclusion patterns.
pub struct ExclusionResolver<'a> {
    lister: &'a dyn ListIgnoredPaths,
}

impl<'a> ExclusionResolver<'a> {
    pub fn new(lister: &'a dyn ListIgnoredPaths) -> Self {
        Self { lister }
    }

    /// Resolve the exclusion patterns for `root`.
    ///
    /// Without `.git/config` under the root nothing is excluded. Otherwise a
    /// failing lookup is returned as an error and aborts the run.
    pub fn resolve(&self, root: &Path) -> Result<Vec<ExclusionPattern>> {
        if !root.join(files::GIT_CONFIG_PATH).exists() {
            debug!("No git metadata in {}, nothing excluded", root.display());
            return Ok(Vec::new());
        }

        let ignored = self.lister.list_ignored_paths(root)?;
        let patterns = parse_ignored_paths(root, &ignored);

        for pattern in &patterns {
            debug!("Excluding {}", pattern.absolute_glob(root));
        }

        Ok(patterns)
    }
}

/// Keep ignored entries that are directories or markdown files.
pub fn parse_ignored_paths(root: &Path, lines: &[String]) -> Vec<ExclusionPattern> {
    let markdown_suffix = format!(".{}", files::MARKDOWN_EXTENSION);

    lines
        .iter()
        .map(|line| line.trim().trim_end_matches('/'))
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            if line.ends_with(&markdown_suffix) {
                Some(ExclusionPattern::File(line.to_string()))
            } else if is_directory(&root.join(line)) {
                Some(ExclusionPattern::Directory(line.to_string()))
            } else {
                None
            }
        })
        .collect()
}

// Symlinks are not followed.
fn is_directory(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}
