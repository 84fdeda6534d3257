//! Errors surfaced by the logger

use std::path::PathBuf;

use thiserror::Error;

use crate::logging::severity_names;

/// Failures a caller must handle.
///
/// A write that fails after the file is open is not an error; it is dropped.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The severity filter was set to a weight outside the severity table
    #[error("invalid severity filter {value}: must be one of {}", severity_names())]
    InvalidSeverity { value: u32 },

    /// The log file could not be opened for appending or truncating
    #[error(
        "unable to open log file for writing, check the permissions on {}",
        .path.display()
    )]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoggerError {
    /// Whether this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LoggerError::InvalidSeverity { .. })
    }

    /// Whether this is an I/O open failure
    pub fn is_io(&self) -> bool {
        matches!(self, LoggerError::Open { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_severity_lists_names() {
        let err = LoggerError::InvalidSeverity { value: 12345 };
        let msg = err.to_string();
        assert!(msg.contains("12345"));
        for name in ["DEBUG", "INFO", "WARNING", "ERROR", "NONE"] {
            assert!(msg.contains(name), "missing {} in {}", name, msg);
        }
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_open_error_mentions_path() {
        let err = LoggerError::Open {
            path: PathBuf::from("/var/log/app.log"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/var/log/app.log"));
        assert!(err.is_io());
        assert!(std::error::Error::source(&err).is_some());
    }
}
