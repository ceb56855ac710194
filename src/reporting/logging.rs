use crate::config::Config;
use log::{debug, error, info, warn};
use std::path::Path;

/// Pick the log level for the given verbosity flags.
///
/// Warnings and errors are shown by default so that failed probes reach
/// stderr; quiet keeps only errors.
pub fn level_for(verbose: bool, quiet: bool) -> log::LevelFilter {
    if quiet {
        log::LevelFilter::Error
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    }
}

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = level_for(verbose, quiet);

    // A second initialization (e.g. in tests) keeps the first logger
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let timeout = config
        .timeout
        .map(|t| format!("{t}s"))
        .unwrap_or_else(|| "none".to_string());

    info!("Root: {}", config.root.display());
    info!("Report: {}", config.report_path().display());
    info!(
        "Probe: timeout={timeout}, exclusions={:?}",
        config.exclusion_source
    );
}

/// Log file discovery information
pub fn log_file_info<P: AsRef<Path>>(file_count: usize, files: &[P]) {
    info!("Processing {file_count} markdown file(s)");
    for (i, file) in files.iter().enumerate() {
        debug!("  {}. {}", i + 1, file.as_ref().display());
    }
}

/// Log individual probe results for debugging
pub fn log_url_result(url: &str, status_code: u16, succeeded: bool) {
    if succeeded {
        debug!("✓ {url} -> {status_code}");
    } else {
        debug!("✗ {url} -> {status_code}");
    }
}

/// Log a probe that produced no status code
pub fn log_probe_error(url: &str, file: &Path, source: &dyn std::error::Error) {
    error!("Could not check {url} (in {}): {source}", file.display());
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log the totals of a finished run
pub fn log_run_complete(files: usize, urls: usize, failures: usize, probe_errors: usize) {
    if failures == 0 && probe_errors == 0 {
        info!("Checked {urls} URL(s) in {files} file(s), all reachable");
    } else {
        warn!(
            "Checked {urls} URL(s) in {files} file(s): {failures} failed, {probe_errors} could not be checked"
        );
    }
}
