use std::fmt;

/// Error types for a report run
#[derive(Debug)]
pub enum ReportError {
    /// IO error (file reads, report writes, spawning processes)
    Io(std::io::Error),

    /// HTTP client error
    Http(reqwest::Error),

    /// Report serialization error
    Json(serde_json::Error),

    /// File walking/ignore error
    FileWalking(ignore::Error),

    /// Ignored-path lookup failed
    VersionControl(String),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Io(err) => write!(f, "IO error: {err}"),
            ReportError::Http(err) => write!(f, "HTTP error: {err}"),
            ReportError::Json(err) => write!(f, "JSON error: {err}"),
            ReportError::FileWalking(err) => write!(f, "File walking error: {err}"),
            ReportError::VersionControl(msg) => write!(f, "Version control error: {msg}"),
            ReportError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ReportError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(err) => Some(err),
            ReportError::Http(err) => Some(err),
            ReportError::Json(err) => Some(err),
            ReportError::FileWalking(err) => Some(err),
            ReportError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err)
    }
}

impl From<reqwest::Error> for ReportError {
    fn from(err: reqwest::Error) -> Self {
        ReportError::Http(err)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Json(err)
    }
}

impl From<ignore::Error> for ReportError {
    fn from(err: ignore::Error) -> Self {
        ReportError::FileWalking(err)
    }
}

impl From<toml::de::Error> for ReportError {
    fn from(err: toml::de::Error) -> Self {
        ReportError::TomlParsing(err)
    }
}

/// Type alias for Results using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let vcs_error = ReportError::VersionControl("not a git repository".to_string());
        assert_eq!(
            format!("{vcs_error}"),
            "Version control error: not a git repository"
        );

        let config_error = ReportError::Config("bad output dir".to_string());
        assert_eq!(format!("{config_error}"), "Configuration error: bad output dir");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let report_error = ReportError::from(io_error);

        match report_error {
            ReportError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid").unwrap_err();
        let report_error = ReportError::from(json_error);

        match report_error {
            ReportError::Json(_) => {} // Expected
            _ => panic!("Expected Json variant"),
        }
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let report_error = ReportError::from(toml_error);

        match report_error {
            ReportError::TomlParsing(_) => {} // Expected
            _ => panic!("Expected TomlParsing variant"),
        }
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let report_error = ReportError::Io(io_error);

        let source = report_error.source();
        assert!(source.is_some());
        assert!(format!("{}", source.unwrap()).contains("file not found"));

        let vcs_error = ReportError::VersionControl("test".to_string());
        assert!(vcs_error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReportError>();
    }
}
