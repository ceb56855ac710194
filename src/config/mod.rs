//! Configuration management
//!
//! A run is driven by a single [`Config`] value. The defaults reproduce the
//! hardcoded behavior (report in `<root>/tmp/markdown-link-report.json`, no
//! probe timeout); an optional `.md-link-report.toml` in the root can
//! override them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{files, output};
use crate::core::error::{ReportError, Result};

/// Where ignored paths are looked up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExclusionSource {
    /// Evaluate `.gitignore` rules in-process
    #[default]
    Gitignore,
    /// Ask the `git` binary via `git check-ignore`
    Git,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Workspace root that is scanned and receives the report
    #[serde(skip)]
    pub root: PathBuf,

    /// Output directory, relative to the root
    pub output_dir: String,

    /// File name of the report inside the output directory
    pub report_file_name: String,

    /// Timeout in seconds for each probe; no timeout when unset
    pub timeout: Option<u64>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Backend used to list ignored paths
    pub exclusion_source: ExclusionSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            output_dir: output::DEFAULT_OUTPUT_DIR.to_string(),
            report_file_name: output::DEFAULT_REPORT_FILE_NAME.to_string(),
            timeout: None,
            user_agent: None,
            exclusion_source: ExclusionSource::default(),
        }
    }
}

impl Config {
    /// Default configuration rooted at `root`
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Load configuration from a TOML file and attach it to `root`
    pub fn load_from_file<P: AsRef<Path>>(path: P, root: impl Into<PathBuf>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ReportError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| {
            ReportError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.root = root.into();

        config.validate()?;
        Ok(config)
    }

    /// Use `<root>/.md-link-report.toml` when present, defaults otherwise.
    ///
    /// A config file that exists but cannot be loaded is an error.
    pub fn load_from_root(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let candidate = root.join(files::CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load_from_file(&candidate, root)
        } else {
            Ok(Self::for_root(root))
        }
    }

    pub fn output_dir_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir_path().join(&self.report_file_name)
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.timeout == Some(0) {
            return Err(ReportError::Config(
                "Timeout cannot be 0. Expected a positive integer representing seconds."
                    .to_string(),
            ));
        }

        if self.report_file_name.trim().is_empty() {
            return Err(ReportError::Config(
                "Report file name cannot be empty.".to_string(),
            ));
        }

        let mut components = Path::new(&self.report_file_name).components();
        let is_plain_name = matches!(components.next(), Some(Component::Normal(_)))
            && components.next().is_none();
        if !is_plain_name {
            return Err(ReportError::Config(format!(
                "Report file name '{}' must be a plain file name.",
                self.report_file_name
            )));
        }

        if Path::new(&self.output_dir).is_absolute() {
            return Err(ReportError::Config(format!(
                "Output directory '{}' must be relative to the workspace root.",
                self.output_dir
            )));
        }

        Ok(())
    }
}
