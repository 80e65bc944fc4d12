//! Render job configuration.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One `combine` entry: which workspace to render and which image goes on
/// which screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CombineConfig {
    /// Name of the workspace to render.
    pub workspace: String,

    /// Source image path per screen name.
    ///
    /// Relative paths are resolved against the configuration file's directory.
    #[serde(default)]
    pub images: BTreeMap<String, String>,
}
