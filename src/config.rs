//! Configuration for the text logger
//!
//! `LoggerConfig` is built in code, or deserialized as part of a host
//! application's own configuration. The logger reads no file of its own.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logging::Severity;

/// Default strftime format, e.g. `2015-06-03,22:32:07.097 -04:00`.
///
/// chrono has no zone abbreviations for local time, so `%Z` renders the UTC
/// offset where a zone name like `EDT` would otherwise appear.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d,%H:%M:%S%.3f %Z";

/// Settings that shape every log entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Path of the log file
    #[serde(default = "default_filename")]
    pub filename: PathBuf,

    /// Tag inserted into every entry (default: "logger")
    #[serde(default = "default_label")]
    pub label: String,

    /// strftime-style timestamp format
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Entries below this severity are discarded (default: ERROR)
    #[serde(default = "default_severity_filter")]
    pub severity_filter: Severity,

    /// Replace carriage returns and newlines in messages with spaces
    #[serde(default = "default_collapse_entries")]
    pub collapse_entries: bool,
}

fn default_filename() -> PathBuf {
    PathBuf::from("logfile.log")
}

fn default_label() -> String {
    "logger".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_severity_filter() -> Severity {
    Severity::Error
}

fn default_collapse_entries() -> bool {
    true
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            filename: default_filename(),
            label: default_label(),
            date_format: default_date_format(),
            severity_filter: default_severity_filter(),
            collapse_entries: default_collapse_entries(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.filename, PathBuf::from("logfile.log"));
        assert_eq!(config.label, "logger");
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(config.severity_filter, Severity::Error);
        assert!(config.collapse_entries);
    }

    /// Host configuration that embeds the logger settings in a table
    #[derive(Debug, Deserialize, Serialize)]
    struct HostConfig {
        name: String,
        #[serde(default)]
        logging: LoggerConfig,
    }

    #[test]
    fn test_partial_table_uses_defaults() {
        let host: HostConfig = toml::from_str(
            r#"
            name = "worker"

            [logging]
            label = "worker"
            severity_filter = "WARNING"
            "#,
        )
        .unwrap();
        let config = host.logging;
        assert_eq!(config.label, "worker");
        assert_eq!(config.severity_filter, Severity::Warning);
        assert_eq!(config.filename, PathBuf::from("logfile.log"));
        assert!(config.collapse_entries);
    }

    #[test]
    fn test_missing_table_uses_defaults() {
        let host: HostConfig = toml::from_str(r#"name = "worker""#).unwrap();
        assert_eq!(host.logging, LoggerConfig::default());
    }

    #[test]
    fn test_severity_names_accepted() {
        for (name, expected) in [
            ("WARN", Severity::Warning),
            ("warning", Severity::Warning),
            ("debug", Severity::Debug),
            ("NONE", Severity::None),
        ] {
            let host: HostConfig = toml::from_str(&format!(
                "name = \"w\"\n[logging]\nseverity_filter = \"{}\"\n",
                name
            ))
            .unwrap();
            assert_eq!(host.logging.severity_filter, expected, "{}", name);
        }
    }

    #[test]
    fn test_unknown_severity_rejected() {
        let result: Result<HostConfig, _> =
            toml::from_str("name = \"w\"\n[logging]\nseverity_filter = \"LOUD\"\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("LOUD"), "{}", err);
    }

    #[test]
    fn test_serialized_table_round_trips() {
        let host = HostConfig {
            name: "app".to_string(),
            logging: LoggerConfig {
                filename: PathBuf::from("app.log"),
                label: "app".to_string(),
                date_format: "%H:%M:%S".to_string(),
                severity_filter: Severity::Info,
                collapse_entries: false,
            },
        };
        let toml_str = toml::to_string(&host).unwrap();
        assert!(toml_str.contains(r#"severity_filter = "INFO""#));

        let parsed: HostConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.logging, host.logging);
    }
}
