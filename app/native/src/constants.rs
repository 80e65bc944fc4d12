//! Application-wide constants.

/// Application name, used for the binary, the config directory and messages.
pub const APP_NAME: &str = "canvaswall";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration file names looked up in each config directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["config.yml", "config.yaml"];

/// URL identifying the configuration JSON Schema.
pub const SCHEMA_ID: &str =
    "https://raw.githubusercontent.com/canvaswall/canvaswall/main/canvaswall.schema.json";

/// Largest image, in pixels, that is ever allocated: a workspace canvas or a
/// scaled source image. 2^30 pixels is 3 GiB as 8-bit RGB.
pub const MAX_IMAGE_PIXELS: u64 = 1 << 30;
