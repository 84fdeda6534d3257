//! File-backed logger
//!
//! Filters entries by severity, stamps and formats them, and appends them to
//! the configured file. The handle is opened lazily on the first entry that
//! clears the filter and reopened whenever the file disappears from disk.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::Local;

use super::format::{collapse_newlines, render_line, render_timestamp};
use super::severity::{preface_for, Severity};
use crate::config::LoggerConfig;
use crate::error::LoggerError;

/// Mutable state guarded by the logger's lock
struct LoggerState {
    config: LoggerConfig,
    handle: Option<File>,
}

/// A text file logger.
///
/// Construct one per destination and share it via `Arc<Logger>`; every method
/// takes `&self` and serializes on an internal lock so concurrent entries
/// never interleave within a line.
pub struct Logger {
    state: Mutex<LoggerState>,
    echo: Mutex<Box<dyn Write + Send>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("Logger")
            .field("config", &state.config)
            .field("open", &state.handle.is_some())
            .finish()
    }
}

impl Logger {
    /// Create a logger with default settings. No file is touched yet.
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    /// Create a logger with the given settings
    pub fn with_config(config: LoggerConfig) -> Self {
        Self {
            state: Mutex::new(LoggerState {
                config,
                handle: None,
            }),
            echo: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Replace the channel echoed entries are copied to (stdout by default)
    pub fn with_echo_writer<W>(mut self, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.echo = Mutex::new(Box::new(writer));
        self
    }

    fn state(&self) -> MutexGuard<'_, LoggerState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of the current settings
    pub fn config(&self) -> LoggerConfig {
        self.state().config.clone()
    }

    /// Replace every setting at once. An open handle is kept.
    pub fn apply_config(&self, config: LoggerConfig) {
        self.state().config = config;
    }

    /// Path of the log file
    pub fn filename(&self) -> PathBuf {
        self.state().config.filename.clone()
    }

    /// Change the log file path.
    ///
    /// An already open handle is not closed. It is only replaced once the new
    /// path is found missing on disk, so pointing at an existing file while a
    /// handle is open keeps appending to the old one until the next truncate.
    pub fn set_filename(&self, filename: impl Into<PathBuf>) {
        self.state().config.filename = filename.into();
    }

    pub fn label(&self) -> String {
        self.state().config.label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.state().config.label = label.into();
    }

    pub fn date_format(&self) -> String {
        self.state().config.date_format.clone()
    }

    /// Set the strftime-style timestamp format
    pub fn set_date_format(&self, date_format: impl Into<String>) {
        self.state().config.date_format = date_format.into();
    }

    pub fn severity_filter(&self) -> Severity {
        self.state().config.severity_filter
    }

    /// Set the filter from a raw weight.
    ///
    /// Fails with [`LoggerError::InvalidSeverity`] unless `weight` is one of
    /// the weights in [`Severity::ALL`]; the previous filter is then kept.
    pub fn set_severity_filter(&self, weight: u32) -> Result<(), LoggerError> {
        let severity =
            Severity::from_weight(weight).ok_or(LoggerError::InvalidSeverity { value: weight })?;
        self.set_severity_filter_level(severity);
        Ok(())
    }

    pub fn set_severity_filter_level(&self, severity: Severity) {
        self.state().config.severity_filter = severity;
    }

    pub fn collapse_entries(&self) -> bool {
        self.state().config.collapse_entries
    }

    pub fn set_collapse_entries(&self, collapse: bool) {
        self.state().config.collapse_entries = collapse;
    }

    /// Turn newline collapsing back on
    pub fn enable_collapse_entries(&self) {
        self.set_collapse_entries(true);
    }

    /// Whether a file handle is currently held
    pub fn is_open(&self) -> bool {
        self.state().handle.is_some()
    }

    /// Release the handle without touching the file
    pub fn close(&self) {
        if self.state().handle.take().is_some() {
            tracing::debug!("Closed log file handle");
        }
    }

    pub fn debug(&self, message: &str, echo: bool) -> Result<(), LoggerError> {
        self.write_log_entry(message, Severity::Debug.weight(), echo)
    }

    pub fn info(&self, message: &str, echo: bool) -> Result<(), LoggerError> {
        self.write_log_entry(message, Severity::Info.weight(), echo)
    }

    pub fn warning(&self, message: &str, echo: bool) -> Result<(), LoggerError> {
        self.write_log_entry(message, Severity::Warning.weight(), echo)
    }

    pub fn error(&self, message: &str, echo: bool) -> Result<(), LoggerError> {
        self.write_log_entry(message, Severity::Error.weight(), echo)
    }

    /// Write one entry with a raw severity weight.
    ///
    /// Entries below the filter return immediately without any file access,
    /// as does everything while the filter is NONE. NONE is never written as
    /// a message severity.
    /// Otherwise the file is opened (or reopened if it vanished) in append
    /// mode; only that open can fail. A failed append is dropped, and when
    /// `echo` is set the line is copied to the echo channel either way.
    pub fn write_log_entry(
        &self,
        message: &str,
        severity: u32,
        echo: bool,
    ) -> Result<(), LoggerError> {
        let mut state = self.state();
        let filter = state.config.severity_filter;
        if filter == Severity::None
            || severity == Severity::None.weight()
            || severity < filter.weight()
        {
            return Ok(());
        }

        let path_exists = state.config.filename.exists();
        if state.handle.is_none() || !path_exists {
            let reopening = state.handle.is_some();
            let file = open_append(&state.config.filename)?;
            if reopening {
                tracing::debug!(
                    "Log file {} disappeared, reopened",
                    state.config.filename.display()
                );
            } else {
                tracing::debug!("Opened log file {}", state.config.filename.display());
            }
            state.handle = Some(file);
        }

        let message = if state.config.collapse_entries {
            collapse_newlines(message)
        } else {
            message.into()
        };
        let timestamp = render_timestamp(&Local::now(), &state.config.date_format);
        let line = render_line(
            &timestamp,
            preface_for(severity),
            &state.config.label,
            &message,
        );

        if let Some(file) = state.handle.as_mut() {
            if let Err(e) = file.write_all(line.as_bytes()) {
                tracing::warn!("Dropped log entry, write failed: {}", e);
            }
        }

        if echo {
            let mut out = self
                .echo
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let _ = out.write_all(line.as_bytes());
            let _ = out.flush();
        }

        Ok(())
    }

    /// Empty the log file and leave it closed.
    ///
    /// The next entry that clears the filter reopens it in append mode.
    pub fn truncate(&self) -> Result<(), LoggerError> {
        let mut state = self.state();
        state.handle = None;
        open_truncate(&state.config.filename)?;
        tracing::debug!("Truncated log file {}", state.config.filename.display());
        Ok(())
    }
}

fn open_append(path: &Path) -> Result<File, LoggerError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggerError::Open {
            path: path.to_path_buf(),
            source,
        })
}

fn open_truncate(path: &Path) -> Result<File, LoggerError> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| LoggerError::Open {
            path: path.to_path_buf(),
            source,
        })
}
