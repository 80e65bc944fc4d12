//! JSON Schema generation for the Canvaswall configuration file.
//!
//! The schema lets editors validate and complete `config.yml` through the
//! YAML language server.

use crate::config::CanvasConfig;
use crate::constants::SCHEMA_ID;

/// Generates a JSON Schema for the Canvaswall configuration.
///
/// The schema includes all configuration options with their types,
/// descriptions, and default values.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(CanvasConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert("$id".to_string(), serde_json::json!(SCHEMA_ID));
    }

    schema
}

/// Generates a pretty-printed JSON Schema string for the configuration.
///
/// # Errors
///
/// Returns an error if the schema cannot be serialized.
pub fn generate_schema_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&generate_schema())
}
