//! Settings error types.

use std::path::PathBuf;
use thiserror::Error;

/// Settings loading error.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to resolve installation root: {0}")]
    RootDir(#[source] std::io::Error),
    #[error("failed to read env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}
