//! Severity levels
//!
//! Severities carry fixed numeric weights so they can be compared against the
//! configured filter. The ordered table in [`Severity::ALL`] drives validation,
//! error messages and the preface lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Preface rendered for a weight that matches no known severity
pub const UNKNOWN_PREFACE: &str = "  WTF";

/// Severity of a log message, or the filter threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Severity {
    Debug = 2,
    Info = 4,
    Warning = 8,
    Error = 16,
    /// Filter-only: nothing clears this bar, so no log file is ever created
    None = 32,
}

impl Severity {
    /// All severities in ascending weight order
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::None,
    ];

    /// Numeric weight used for filtering
    pub fn weight(self) -> u32 {
        self as u32
    }

    /// Upper-case name, as accepted in configuration files
    pub fn name(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::None => "NONE",
        }
    }

    /// Fixed-width preface written in front of each entry.
    ///
    /// `None` for [`Severity::None`], which is never a message severity.
    pub fn preface(self) -> Option<&'static str> {
        match self {
            Severity::Debug => Some("DEBUG"),
            Severity::Info => Some(" INFO"),
            Severity::Warning => Some(" WARN"),
            Severity::Error => Some("ERROR"),
            Severity::None => None,
        }
    }

    /// Look up a severity by its exact weight
    pub fn from_weight(weight: u32) -> Option<Severity> {
        Self::ALL.into_iter().find(|s| s.weight() == weight)
    }

    /// Look up a severity by name, ignoring case. `WARN` is accepted for `WARNING`.
    pub fn from_name(name: &str) -> Option<Severity> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("warn") {
            return Some(Severity::Warning);
        }
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Severity {
    type Error = String;

    fn try_from(name: String) -> Result<Self, String> {
        Severity::from_name(&name).ok_or_else(|| {
            format!(
                "unknown severity {:?}, expected one of {}",
                name,
                severity_names()
            )
        })
    }
}

/// Name to weight mapping of every accepted filter value, in weight order
pub fn valid_severities() -> Vec<(&'static str, u32)> {
    Severity::ALL
        .into_iter()
        .map(|s| (s.name(), s.weight()))
        .collect()
}

/// Human-readable list of valid severities, e.g. `DEBUG (2), INFO (4), ...`
pub fn severity_names() -> String {
    valid_severities()
        .into_iter()
        .map(|(name, weight)| format!("{} ({})", name, weight))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Preface for a raw weight, falling back to [`UNKNOWN_PREFACE`]
pub fn preface_for(weight: u32) -> &'static str {
    Severity::from_weight(weight)
        .and_then(Severity::preface)
        .unwrap_or(UNKNOWN_PREFACE)
}
