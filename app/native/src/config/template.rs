//! Configuration template generation.
//!
//! Generates a commented example configuration covering every option.

use std::fs;
use std::path::Path;

/// Generates a configuration template.
///
/// The template is a working configuration for a two-monitor setup with
/// comments documenting each option, so it can be rendered as soon as the
/// image paths point at real files.
#[must_use]
pub fn generate_config_template() -> String {
    r#"# Canvaswall Configuration File
# =============================
# Composes one wallpaper image per workspace from per-screen source images.
# Relative paths are resolved against the directory of this file.

# ============================================================================
# Workspaces
# ============================================================================
# A workspace is a set of screens sharing one canvas. Screens are resolved in
# the order they are listed.
#
# x / y are either pixel offsets or alignment expressions that reference a
# screen listed earlier in the same workspace:
#   x: "left <screen>"    starts at the right edge of <screen>
#   x: "right <screen>"   ends at the left edge of <screen>
#   y: "top <screen>"     starts at the bottom edge of <screen>
#   y: "bottom <screen>"  ends at the top edge of <screen>
#   "center <screen>" resolves the same way as left / top.
#
# w / h are the screen size in pixels.
workspaces:
  - name: desk
    screens:
      - { name: laptop, x: 0, y: 360, w: 1920, h: 1080 }
      - { name: monitor, x: "left laptop", y: 0, w: 2560, h: 1440 }

# ============================================================================
# Output
# ============================================================================
# Number of the first output file. Increments by one per combine entry.
start: 1

# File name for each output image. Must contain exactly one integer
# placeholder: {}, {0}, {:d}, {:3d} or {:03d}.
# The extension selects the format (png, jpg, webp, bmp).
name_pattern: "wallpaper-{:02d}.png"

# Directory the output images are written to. Created if missing.
out_path: output

# ============================================================================
# Render jobs
# ============================================================================
# One output image per entry. Every screen of the workspace needs an image;
# each image is scaled to cover its screen and cropped around the center.
combine:
  - workspace: desk
    images:
      laptop: images/forest.jpg
      monitor: images/mountains.jpg
"#
    .to_string()
}

/// Creates a configuration file with the template at the specified path.
///
/// Creates parent directories if they don't exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, generate_config_template())
}
