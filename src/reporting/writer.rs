use log::debug;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::core::constants::output;
use crate::core::error::Result;
use crate::core::types::Report;

use std::fs;
use std::path::{Path, PathBuf};

/// Writes a [`Report`] as indented JSON below the workspace root.
pub struct ReportWriter<'a> {
    root: &'a Path,
    output_dir: &'a str,
    file_name: &'a str,
}

impl<'a> ReportWriter<'a> {
    pub fn new(root: &'a Path, output_dir: &'a str, file_name: &'a str) -> Self {
        Self {
            root,
            output_dir,
            file_name,
        }
    }

    /// Replace any previous report with `report` and return the written path.
    ///
    /// The old file is removed before the new one is written, so a crash in
    /// between leaves no report behind.
    pub fn write(&self, report: &Report) -> Result<PathBuf> {
        let output_dir = self.root.join(self.output_dir);
        fs::create_dir_all(&output_dir)?;

        let report_path = output_dir.join(self.file_name);
        if report_path.exists() {
            debug!("Removing previous report {}", report_path.display());
            fs::remove_file(&report_path)?;
        }

        fs::write(&report_path, to_json(report)?)?;
        debug!(
            "Wrote {} file(s), {} URL(s) to {}",
            report.len(),
            report.url_count(),
            report_path.display()
        );

        Ok(report_path)
    }
}

/// Serialize with four-space indentation, keeping file order.
pub fn to_json(report: &Report) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(output::JSON_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    report.serialize(&mut serializer)?;
    Ok(buffer)
}
