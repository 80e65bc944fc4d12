//! Workspace and screen configuration types.
//!
//! Configuration for workspace definitions and the raw screen geometry that
//! the layout resolver turns into absolute coordinates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A screen coordinate as written in the configuration file.
///
/// Either an absolute pixel offset or an alignment expression such as
/// `"left main"` that positions the screen relative to a screen declared
/// earlier in the same workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Coordinate {
    /// Absolute offset in pixels from the canvas origin.
    Absolute(i64),
    /// Alignment expression: `"<keyword> <screen>"`.
    ///
    /// x-axis keywords: `left`, `center`, `right`.
    /// y-axis keywords: `top`, `center`, `bottom`.
    Aligned(String),
}

impl Default for Coordinate {
    fn default() -> Self { Self::Absolute(0) }
}

/// Raw screen geometry.
///
/// Sizes are kept signed here so that zero or negative values reach the
/// resolver and get a descriptive error instead of a generic parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ScreenConfig {
    /// Name of the screen, unique within its workspace.
    pub name: String,

    /// Horizontal position: pixels or an alignment expression.
    pub x: Coordinate,

    /// Vertical position: pixels or an alignment expression.
    pub y: Coordinate,

    /// Width in pixels.
    pub w: i64,

    /// Height in pixels.
    pub h: i64,
}

/// Workspace configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Unique name for the workspace.
    pub name: String,

    /// Screens in resolution order.
    ///
    /// A screen can only align against screens listed before it.
    pub screens: Vec<ScreenConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_deserializes_integer() {
        let coordinate: Coordinate = serde_yaml::from_str("1920").unwrap();
        assert_eq!(coordinate, Coordinate::Absolute(1920));
    }

    #[test]
    fn test_coordinate_deserializes_negative_integer() {
        let coordinate: Coordinate = serde_yaml::from_str("-10").unwrap();
        assert_eq!(coordinate, Coordinate::Absolute(-10));
    }

    #[test]
    fn test_coordinate_deserializes_expression() {
        let coordinate: Coordinate = serde_yaml::from_str("left main").unwrap();
        assert_eq!(coordinate, Coordinate::Aligned("left main".to_string()));
    }

    #[test]
    fn test_screen_config_deserializes() {
        let yaml = "{ name: side, x: left main, y: 0, w: 1280, h: 1024 }";
        let screen: ScreenConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(screen.name, "side");
        assert_eq!(screen.x, Coordinate::Aligned("left main".to_string()));
        assert_eq!(screen.y, Coordinate::Absolute(0));
        assert_eq!((screen.w, screen.h), (1280, 1024));
    }

    #[test]
    fn test_screen_config_rejects_unknown_field() {
        let yaml = "{ name: side, x: 0, y: 0, w: 10, h: 10, z: 3 }";
        assert!(serde_yaml::from_str::<ScreenConfig>(yaml).is_err());
    }

    #[test]
    fn test_screen_config_requires_size() {
        let yaml = "{ name: side, x: 0, y: 0, w: 10 }";
        assert!(serde_yaml::from_str::<ScreenConfig>(yaml).is_err());
    }
}
