use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::collections::HashMap;
use std::fmt;

use crate::core::constants::http_status;

/// Outcome of probing a single URL found in a markdown file.
///
/// Created once per successful probe and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlDetails {
    pub url: String,
    pub status_code: u16,
    pub succeeded: bool,
}

impl UrlDetails {
    /// Classify `status_code` and build the record.
    ///
    /// # Examples
    /// ```
    /// use md_link_report::core::types::UrlDetails;
    ///
    /// let ok = UrlDetails::new("https://example.com".to_string(), 301);
    /// assert!(ok.succeeded);
    ///
    /// let broken = UrlDetails::new("https://example.com/gone".to_string(), 404);
    /// assert!(!broken.succeeded);
    /// ```
    pub fn new(url: String, status_code: u16) -> Self {
        Self {
            url,
            succeeded: is_success_status(status_code),
            status_code,
        }
    }
}

impl fmt::Display for UrlDetails {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.status_code, self.url)
    }
}

/// A status code counts as success when it is below 400.
pub fn is_success_status(status_code: u16) -> bool {
    status_code < http_status::FAILURE_THRESHOLD
}

/// Probe results keyed by markdown file path.
///
/// Keys keep insertion (discovery) order and values keep extraction order,
/// both in memory and in the serialized JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<(String, Vec<UrlDetails>)>,
    // path -> index into `entries`
    positions: HashMap<String, usize>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` with an empty result list, keeping its first position
    /// if it was already present.
    pub fn add_file(&mut self, path: impl Into<String>) {
        let path = path.into();
        if self.position(&path).is_none() {
            self.insert(path, Vec::new());
        }
    }

    /// Append a probe result to `path`, registering the file if needed.
    pub fn push(&mut self, path: &str, details: UrlDetails) {
        match self.position(path) {
            Some(index) => self.entries[index].1.push(details),
            None => self.insert(path.to_string(), vec![details]),
        }
    }

    pub fn get(&self, path: &str) -> Option<&[UrlDetails]> {
        self.position(path)
            .map(|index| self.entries[index].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[UrlDetails])> {
        self.entries
            .iter()
            .map(|(path, details)| (path.as_str(), details.as_slice()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(path, _)| path.as_str())
    }

    /// Number of files in the report
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of probed URLs across all files
    pub fn url_count(&self) -> usize {
        self.entries.iter().map(|(_, details)| details.len()).sum()
    }

    /// Number of probed URLs that were classified as failed
    pub fn failure_count(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|(_, details)| details.iter())
            .filter(|details| !details.succeeded)
            .count()
    }

    fn position(&self, path: &str) -> Option<usize> {
        self.positions.get(path).copied()
    }

    fn insert(&mut self, path: String, details: Vec<UrlDetails>) {
        self.positions.insert(path.clone(), self.entries.len());
        self.entries.push((path, details));
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, details) in &self.entries {
            map.serialize_entry(path, details)?;
        }
        map.end()
    }
}

struct ReportVisitor;

impl<'de> Visitor<'de> for ReportVisitor {
    type Value = Report;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of file paths to lists of url details")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Report, A::Error> {
        let mut report = Report::new();
        while let Some((path, details)) = access.next_entry::<String, Vec<UrlDetails>>()? {
            report.add_file(path.clone());
            for detail in details {
                report.push(&path, detail);
            }
        }
        Ok(report)
    }
}

impl<'de> Deserialize<'de> for Report {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ReportVisitor)
    }
}
