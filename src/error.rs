//! Error types for css_lint
//!
//! Linting itself never fails: malformed syntax only reduces coverage.
//! These errors come from the layers around it (configuration, custom data,
//! parser setup and file access).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for css_lint operations
#[derive(Error, Debug)]
pub enum LintError {
    /// IO errors (reading stylesheets, config or custom data files)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing errors
    #[error("JSON error in {path:?}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing errors
    #[error("YAML error in {path:?}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Config file with an extension we can't read
    #[error("Unsupported config format: {path:?} (expected .json, .yaml or .yml)")]
    UnsupportedConfigFormat { path: PathBuf },

    /// Tree-sitter language setup errors
    #[error("Failed to set up tree-sitter language: {message}")]
    Language { message: String },

    /// Tree-sitter returned no tree
    #[error("Failed to parse {path:?}")]
    Parse { path: PathBuf },
}

/// Result type alias for css_lint operations
pub type LintResult<T> = Result<T, LintError>;

impl From<std::io::Error> for LintError {
    fn from(err: std::io::Error) -> Self {
        LintError::Io {
            source: err,
            message: "IO operation failed".to_string(),
        }
    }
}

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> LintResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> LintResult<T> {
        self.map_err(|e| LintError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}
