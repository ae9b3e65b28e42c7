//! Error types for godoc-model
//!
//! Assembly itself is total; every failure here comes from the front-end
//! (locating, reading or parsing a package) or from configuration loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for godoc-model operations
#[derive(Debug, Error)]
pub enum DocError {
    /// The front-end could not locate, read or parse the package
    #[error("Parse error for package '{import_path}': {cause}")]
    UpstreamParse { import_path: String, cause: String },

    /// The import path resolved to a directory without package members
    #[error("No Go package found for '{import_path}' in {}", dir.display())]
    MissingPackage { import_path: String, dir: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl DocError {
    /// Create an upstream parse failure
    pub fn upstream(import_path: impl Into<String>, cause: impl ToString) -> Self {
        DocError::UpstreamParse {
            import_path: import_path.into(),
            cause: cause.to_string(),
        }
    }

    /// Create a missing package failure
    pub fn missing_package(import_path: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        DocError::MissingPackage {
            import_path: import_path.into(),
            dir: dir.into(),
        }
    }

    /// Import path the failure refers to, if any
    pub fn import_path(&self) -> Option<&str> {
        match self {
            DocError::UpstreamParse { import_path, .. }
            | DocError::MissingPackage { import_path, .. } => Some(import_path),
            DocError::Config(_) => None,
        }
    }
}

/// Result type alias for godoc-model operations
pub type Result<T> = std::result::Result<T, DocError>;
