//! textlog - a minimal severity-filtered text file logger
//!
//! A [`Logger`] accepts severity-tagged messages, discards those below its
//! configured filter, and appends the rest as timestamped lines to a file.
//! The file is opened lazily and reopened if it is deleted while in use.

pub mod config;
pub mod error;
pub mod logging;

pub use config::LoggerConfig;
pub use error::LoggerError;
pub use logging::{Logger, Severity};
