//! The report run: resolve exclusions, discover markdown files, extract and
//! probe every URL, and collect the results into a [`Report`].
//!
//! Side effects are reached only through the injected capabilities, so the
//! whole pipeline can be driven with fakes.

use crate::config::{Config, ExclusionSource};
use crate::core::error::Result;
use crate::core::types::{Report, UrlDetails};
use crate::discovery::exclusion::{
    ExclusionResolver, GitCheckIgnore, GitignoreRules, ListIgnoredPaths,
};
use crate::discovery::{discover_markdown_files, extract_urls};
use crate::reporting::logging;
use crate::ui::ProgressReporter;
use crate::validation::{HttpProber, ProbeUrl};

use std::fs;
use std::io;
use std::path::Path;

/// Reads the text of a discovered markdown file.
pub trait ReadSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads from disk; invalid UTF-8 is replaced rather than rejected.
#[derive(Default, Debug)]
pub struct FsSource {}

impl ReadSource for FsSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

pub struct Runner<'a> {
    config: &'a Config,
    ignored_paths: &'a dyn ListIgnoredPaths,
    prober: &'a dyn ProbeUrl,
    source: &'a dyn ReadSource,
}

impl<'a> Runner<'a> {
    pub fn new(
        config: &'a Config,
        ignored_paths: &'a dyn ListIgnoredPaths,
        prober: &'a dyn ProbeUrl,
        source: &'a dyn ReadSource,
    ) -> Self {
        Self {
            config,
            ignored_paths,
            prober,
            source,
        }
    }

    /// Build the report for the configured root.
    ///
    /// Files and URLs are handled strictly one after another. A URL whose
    /// probe fails is logged and left out of its file's list; failures to
    /// resolve exclusions, walk the tree or read a file abort the run.
    pub async fn run(&self, mut progress: Option<&mut ProgressReporter>) -> Result<Report> {
        let root = self.config.root.as_path();

        let exclusions = ExclusionResolver::new(self.ignored_paths).resolve(root)?;
        let markdown_paths = discover_markdown_files(root, &exclusions)?;
        logging::log_file_info(markdown_paths.len(), &markdown_paths);

        if let Some(progress) = progress.as_mut() {
            progress.start_run();
        }

        let mut report = Report::new();
        let mut probe_errors = 0;
        let total = markdown_paths.len();

        for (index, path) in markdown_paths.iter().enumerate() {
            if let Some(progress) = progress.as_mut() {
                progress.start_file(index, total, path);
            }

            let key = path.display().to_string();
            report.add_file(key.clone());

            let content = self.source.read_to_string(path)?;
            for url in extract_urls(&content) {
                match self.prober.probe(&url).await {
                    Ok(status_code) => {
                        let details = UrlDetails::new(url, status_code);
                        logging::log_url_result(&details.url, status_code, details.succeeded);
                        report.push(&key, details);
                    }
                    Err(err) => {
                        probe_errors += 1;
                        logging::log_probe_error(&url, path, &err);
                    }
                }
            }
        }

        logging::log_run_complete(
            report.len(),
            report.url_count(),
            report.failure_count(),
            probe_errors,
        );

        Ok(report)
    }
}

/// Run with the production capabilities selected by `config`.
pub async fn run(config: &Config, progress: Option<&mut ProgressReporter>) -> Result<Report> {
    let gitignore_rules = GitignoreRules::default();
    let git_check_ignore = GitCheckIgnore::default();
    let ignored_paths: &dyn ListIgnoredPaths = match config.exclusion_source {
        ExclusionSource::Gitignore => &gitignore_rules,
        ExclusionSource::Git => &git_check_ignore,
    };

    let prober = HttpProber::new(config)?;
    let source = FsSource::default();

    Runner::new(config, ignored_paths, &prober, &source)
        .run(progress)
        .await
}
