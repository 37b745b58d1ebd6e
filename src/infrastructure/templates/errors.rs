//! Error types for template resolution

use std::path::PathBuf;
use thiserror::Error;

use crate::core::FileCharset;

/// Errors that can occur while resolving and loading a template
#[derive(Error, Debug)]
pub enum TemplateError {
    /// No template directory yielded a readable file for this name
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Joining the name onto a directory would leave that directory
    #[error("Template path {name:?} escapes directory {}", .base.display())]
    PathEscape { base: PathBuf, name: String },

    /// A template directory path is not valid Unicode
    #[error("Template directory is not valid Unicode: {}", .0.display())]
    Encoding(PathBuf),

    /// File contents could not be decoded with the configured charset
    #[error("Failed to decode {} as {charset}", .path.display())]
    Decode { path: PathBuf, charset: FileCharset },

    /// Template engine error
    #[error("Template engine error: {0}")]
    Engine(#[from] mustache::Error),

    /// IO error during template operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TemplateError {
    /// Create a new template not found error for a template name
    pub fn not_found<S: Into<String>>(name: S) -> Self {
        Self::TemplateNotFound(name.into())
    }
}
