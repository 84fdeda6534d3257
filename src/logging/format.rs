//! Entry formatting
//!
//! Produces lines of the form `[<timestamp>] <preface>: <label>: <message>`.

use std::borrow::Cow;
use std::fmt::{self, Write};

use chrono::{DateTime, TimeZone};

use crate::config::DEFAULT_DATE_FORMAT;

/// Line terminator appended to every entry
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Replace every `\r` and `\n` with a single space.
///
/// Each character is replaced on its own, so `"a\n\nb"` becomes `"a  b"`.
pub fn collapse_newlines(message: &str) -> Cow<'_, str> {
    if message.contains(['\r', '\n']) {
        Cow::Owned(message.replace(['\r', '\n'], " "))
    } else {
        Cow::Borrowed(message)
    }
}

/// Render a timestamp with a strftime-style format string.
///
/// An unparseable format falls back to [`DEFAULT_DATE_FORMAT`] instead of panicking.
pub fn render_timestamp<Tz>(now: &DateTime<Tz>, date_format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", now.format(date_format)).is_ok() {
        return out;
    }
    out.clear();
    let _ = write!(out, "{}", now.format(DEFAULT_DATE_FORMAT));
    out
}

/// Assemble a complete entry, terminator included
pub fn render_line(timestamp: &str, preface: &str, label: &str, message: &str) -> String {
    format!(
        "[{}] {}: {}: {}{}",
        timestamp, preface, label, message, LINE_ENDING
    )
}
