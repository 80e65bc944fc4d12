//! Root configuration type, configuration errors and file loading.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::combine::CombineConfig;
use super::workspaces::WorkspaceConfig;
use crate::constants::{APP_NAME, CONFIG_FILE_NAMES};
use crate::layout::Axis;

/// Helper function for the default output directory.
fn default_out_path() -> String { ".".to_string() }

/// Canvaswall configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CanvasConfig {
    /// Workspace definitions: named sets of screens sharing one canvas.
    pub workspaces: Vec<WorkspaceConfig>,

    /// Number used for the first output file; increments per `combine` entry.
    /// Default: 0
    #[serde(default)]
    pub start: i64,

    /// Output file name with one integer placeholder, e.g. `wall-{:02d}.png`.
    /// The extension selects the output image format.
    pub name_pattern: String,

    /// Directory the output images are written to.
    /// Default: "."
    #[serde(default = "default_out_path")]
    pub out_path: String,

    /// Render jobs, one output image each.
    #[serde(default)]
    pub combine: Vec<CombineConfig>,
}

/// Errors raised while loading or validating the configuration.
///
/// Every variant is a user configuration problem: it is reported with the
/// offending value and aborts the run.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "No configuration file found. Expected ./config.yml or ~/.config/canvaswall/config.yml \
         (run `canvaswall config init` to create one)"
    )]
    NotFound,

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML or does not match the schema.
    #[error("Failed to parse configuration file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// An alignment expression without a reference screen.
    #[error("invalid alignment string `{value}` on screen `{screen}`, expected `<keyword> <screen>`")]
    MalformedAlignment { screen: String, value: String },

    /// An alignment expression referencing a screen that is not declared
    /// before the current one.
    #[error(
        "unknown screen name `{reference}` referenced by screen `{screen}` \
         (screens can only align against screens listed before them)"
    )]
    UnknownScreen { screen: String, reference: String },

    /// An alignment keyword that is not valid for the axis.
    #[error(
        "invalid alignment `{keyword}` for {axis} on screen `{screen}`, expected {}",
        .axis.keywords()
    )]
    InvalidAlignment {
        screen: String,
        keyword: String,
        axis: Axis,
    },

    /// Sizes or coordinates out of range.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Two screens with the same name in one workspace.
    #[error("duplicate screen `{screen}` in workspace `{workspace}`")]
    DuplicateScreen { workspace: String, screen: String },

    /// Two workspaces with the same name.
    #[error("duplicate workspace `{0}`")]
    DuplicateWorkspace(String),

    /// A workspace without screens.
    #[error("workspace `{0}` has no screens")]
    EmptyWorkspace(String),

    /// A render job referencing an undefined workspace.
    #[error("unknown workspace `{0}`")]
    UnknownWorkspace(String),

    /// A `name_pattern` that does not contain exactly one integer placeholder.
    #[error("invalid name_pattern `{pattern}`: {reason}")]
    InvalidNamePattern { pattern: String, reason: String },
}

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations:
/// 1. `./config.yml` or `./config.yaml` (the working directory)
/// 2. `$XDG_CONFIG_HOME/canvaswall/config.yml` or `config.yaml`, if set
/// 3. `~/.config/canvaswall/config.yml` or `config.yaml`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = CONFIG_FILE_NAMES.iter().map(PathBuf::from).collect();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let app_dir = PathBuf::from(xdg_config).join(APP_NAME);
        for filename in CONFIG_FILE_NAMES {
            paths.push(app_dir.join(filename));
        }
    }

    if let Some(home) = dirs::home_dir() {
        let app_dir = home.join(".config").join(APP_NAME);
        for filename in CONFIG_FILE_NAMES {
            let path = app_dir.join(filename);
            // XDG_CONFIG_HOME might be ~/.config
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    paths
}

/// Parses configuration from YAML text.
///
/// `path` is only used for error reporting.
///
/// # Errors
///
/// Returns `ConfigError::Parse` if the text is not a valid configuration.
pub fn parse_config(contents: &str, path: &Path) -> Result<CanvasConfig, ConfigError> {
    serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if the file does not exist,
/// `ConfigError::Io` if it cannot be read, and `ConfigError::Parse` if it
/// contains invalid YAML.
pub fn load_config_from_path(path: &Path) -> Result<(CanvasConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents, path)?;

    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok((config, path.to_path_buf()))
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of
/// the expected locations, or the errors of [`load_config_from_path`].
pub fn load_config() -> Result<(CanvasConfig, PathBuf), ConfigError> {
    for path in config_paths() {
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    Err(ConfigError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Coordinate;

    const SAMPLE: &str = r"
workspaces:
  - name: home
    screens:
      - { name: left, x: 0, y: 0, w: 1920, h: 1080 }
      - { name: right, x: left left, y: 0, w: 2560, h: 1440 }
start: 1
name_pattern: 'wall-{:02d}.png'
out_path: out
combine:
  - workspace: home
    images:
      left: a.jpg
      right: b.jpg
";

    #[test]
    fn test_parse_sample_config() {
        let config = parse_config(SAMPLE, Path::new("config.yml")).unwrap();
        assert_eq!(config.workspaces.len(), 1);
        assert_eq!(config.workspaces[0].screens[1].x, Coordinate::Aligned("left left".into()));
        assert_eq!(config.start, 1);
        assert_eq!(config.name_pattern, "wall-{:02d}.png");
        assert_eq!(config.out_path, "out");
        assert_eq!(config.combine.len(), 1);
    }

    #[test]
    fn test_parse_applies_defaults() {
        let yaml = r"
workspaces: []
name_pattern: '{}.png'
";
        let config = parse_config(yaml, Path::new("config.yml")).unwrap();
        assert_eq!(config.start, 0);
        assert_eq!(config.out_path, ".");
        assert!(config.combine.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let yaml = r"
workspaces: []
name_pattern: '{}.png'
outpath: typo
";
        let err = parse_config(yaml, Path::new("config.yml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_parse_error_mentions_path() {
        let err = parse_config("workspaces: [", Path::new("/tmp/broken.yml")).unwrap_err();
        assert!(err.to_string().contains("/tmp/broken.yml"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config_from_path(&PathBuf::from("/nonexistent/config.yml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, SAMPLE).unwrap();

        let (config, loaded_from) = load_config_from_path(&path).unwrap();
        assert_eq!(loaded_from, path);
        assert_eq!(config.workspaces[0].name, "home");
    }

    #[test]
    fn test_config_paths_start_with_working_directory() {
        let paths = config_paths();
        assert_eq!(paths[0], PathBuf::from("config.yml"));
        assert_eq!(paths[1], PathBuf::from("config.yaml"));
    }

    #[test]
    fn test_invalid_alignment_message_lists_keywords() {
        let err = ConfigError::InvalidAlignment {
            screen: "side".to_string(),
            keyword: "middle".to_string(),
            axis: Axis::Horizontal,
        };
        let msg = err.to_string();
        assert!(msg.contains("middle"));
        assert!(msg.contains("left, center or right"));
    }

    #[test]
    fn test_unknown_screen_message_names_reference() {
        let err = ConfigError::UnknownScreen {
            screen: "side".to_string(),
            reference: "ghost".to_string(),
        };
        assert!(err.to_string().contains("ghost"));
    }
}
