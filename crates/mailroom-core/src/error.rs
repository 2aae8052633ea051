//! Errors from loading and saving settings.

use thiserror::Error;

/// Failure reading, writing or checking the settings file.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings file is not valid settings JSON.
    #[error("Invalid settings file: {0}")]
    Settings(#[from] serde_json::Error),

    /// Settings file or its directory could not be read or written.
    #[error("Settings file access failed: {0}")]
    Io(#[from] std::io::Error),

    /// Settings parsed but hold an unusable value.
    #[error("Invalid setting: {0}")]
    Config(String),
}

/// Result of a settings operation.
pub type Result<T> = std::result::Result<T, Error>;
