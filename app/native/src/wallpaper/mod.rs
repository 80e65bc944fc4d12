//! Wallpaper image handling.
//!
//! - [`processing`] - Scale-to-cover fitting, decoding and encoding
//! - [`compositor`] - Pasting fitted images onto a workspace canvas

pub mod compositor;
pub mod processing;

use std::path::PathBuf;

pub use compositor::{combine, combine_images};
pub use processing::{CoverPlan, fit_cover, load_image, output_format, save_image};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while building a wallpaper canvas.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// A workspace screen has no image in the render job.
    #[error("missing setup for screen `{screen}` in workspace `{workspace}`")]
    MissingImage { workspace: String, screen: String },

    /// Failed to open or decode a source image.
    #[error("Failed to read image {}: {source}", .path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write the output image.
    #[error("Failed to save image {}: {source}", .path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output extension does not name a writable image format.
    #[error("Unsupported output format for {} (use png, jpg, webp or bmp)", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Invalid configuration found while planning or fitting.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
