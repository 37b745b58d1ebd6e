//! Error handling for the jstemplates loader.
//!
//! This module defines the crate-level `Error` used while building a loader
//! (settings, application resolution, directory discovery), along with a
//! convenient `Result` type alias. Errors raised while resolving a single
//! template live in [`crate::infrastructure::templates::TemplateError`].
//!
//! # Examples
//!
//! ```
//! use jstemplates::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("no installed apps"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

use crate::infrastructure::templates::TemplateError;

/// Result type for loader construction
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for loader construction
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Template resolution error
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// Configuration error, fatal for initialization
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Config(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Config(s)
    }
}
