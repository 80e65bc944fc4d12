//! Configuration module for Canvaswall.
//!
//! This module provides configuration types and loading functionality.
//! The configuration is read once per run and never written back.

pub mod template;
pub mod types;

use std::path::{Path, PathBuf};

pub use types::{
    CanvasConfig, CombineConfig, ConfigError, Coordinate, ScreenConfig, WorkspaceConfig,
    config_paths, load_config as load_config_default, load_config_from_path, parse_config,
};

use crate::platform::path::expand_and_resolve;

/// A configuration together with the file it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration.
    pub config: CanvasConfig,
    /// Path of the configuration file.
    pub path: PathBuf,
}

impl LoadedConfig {
    /// Wraps an already parsed configuration.
    #[must_use]
    pub const fn new(config: CanvasConfig, path: PathBuf) -> Self { Self { config, path } }

    /// Directory that relative paths in the configuration are resolved against.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Resolves a path written in the configuration file.
    ///
    /// `~` is expanded and relative paths are resolved against [`Self::base_dir`].
    #[must_use]
    pub fn resolve_path(&self, path: &str) -> PathBuf { expand_and_resolve(path, self.base_dir()) }
}

/// Loads the configuration.
///
/// Uses `custom_path` if given (e.g. from the `--config` flag), otherwise the
/// first file found in [`config_paths`].
///
/// # Errors
///
/// Returns a [`ConfigError`] if no file is found or the file cannot be read
/// or parsed.
pub fn load(custom_path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let (config, path) = match custom_path {
        Some(path) => load_config_from_path(path)?,
        None => load_config_default()?,
    };

    tracing::info!(
        path = %path.display(),
        workspaces = config.workspaces.len(),
        jobs = config.combine.len(),
        "configuration loaded"
    );

    Ok(LoadedConfig::new(config, path))
}
