//! Configuration types for Canvaswall.
//!
//! This module provides all configuration types organized by domain.
//! The configuration file is YAML.

// Domain-specific configuration modules
pub mod combine;
pub mod root;
pub mod workspaces;

// Render job types
pub use combine::CombineConfig;
// Root config types
pub use root::{
    CanvasConfig, ConfigError, config_paths, load_config, load_config_from_path, parse_config,
};
// Workspace types
pub use workspaces::{Coordinate, ScreenConfig, WorkspaceConfig};
