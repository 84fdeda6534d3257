//! Text file logging
//!
//! Provides the severity table, entry formatting, and the file-backed [`Logger`].

mod file_writer;
mod format;
mod severity;

pub use file_writer::Logger;
pub use format::{collapse_newlines, render_line, render_timestamp, LINE_ENDING};
pub use severity::{preface_for, severity_names, valid_severities, Severity, UNKNOWN_PREFACE};
