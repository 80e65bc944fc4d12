//! Canvaswall - compose one wallpaper image spanning several monitors.
//!
//! Screens are described in a YAML file, either at absolute offsets or
//! aligned against screens declared earlier. Each source image is scaled to
//! cover its screen, cropped around the center and pasted onto a canvas that
//! spans the whole workspace.
//!
//! - [`layout`] - Screen layout resolution
//! - [`wallpaper`] - Image fitting and compositing
//! - [`render`] - Render jobs built from the configuration
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod logging;
pub mod platform;
pub mod render;
pub mod schema;
pub mod wallpaper;
