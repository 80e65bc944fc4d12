//! Error types for Canvaswall.
//!
//! Each module reports its own error enum; [`CanvasError`] unifies them at the
//! CLI boundary, where the error is printed and the process exits with 1.

use thiserror::Error;

use crate::config::ConfigError;
use crate::wallpaper::ProcessingError;

/// Errors that can occur during application execution.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// A wallpaper could not be composed or written.
    #[error(transparent)]
    Processing(#[from] ProcessingError),
    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
