//! Workspace compositing.
//!
//! Pastes one fitted image per screen onto a black canvas the size of the
//! workspace.

use std::collections::BTreeMap;
use std::path::PathBuf;

use image::{DynamicImage, RgbImage, imageops};

use super::ProcessingError;
use super::processing::{fit_cover, load_image};
use crate::layout::{Screen, Workspace};

/// Checks that every screen of `workspace` has an entry in `images`.
///
/// Screens are checked in declaration order, so the first screen without an
/// image is the one reported. Entries that name no screen are logged and
/// otherwise ignored.
///
/// # Errors
///
/// Returns `ProcessingError::MissingImage` naming the first screen without
/// an image.
pub fn ensure_complete<T>(
    workspace: &Workspace,
    images: &BTreeMap<String, T>,
) -> Result<(), ProcessingError> {
    if let Some(screen) = workspace.screens().find(|screen| !images.contains_key(screen.name())) {
        return Err(ProcessingError::MissingImage {
            workspace: workspace.name().to_string(),
            screen: screen.name().to_string(),
        });
    }

    for name in images.keys().filter(|name| workspace.get(name).is_none()) {
        tracing::warn!(
            workspace = %workspace.name(),
            screen = %name,
            "image assigned to a screen that is not part of the workspace, ignoring"
        );
    }

    Ok(())
}

/// Composes a canvas, obtaining each screen's source image from `source`.
///
/// Screens are pasted in declaration order, so a later screen wins where
/// screens overlap.
///
/// # Errors
///
/// Propagates errors from `source` and from fitting.
pub fn compose_with<F>(workspace: &Workspace, mut source: F) -> Result<RgbImage, ProcessingError>
where
    F: FnMut(&Screen) -> Result<DynamicImage, ProcessingError>,
{
    let mut canvas = RgbImage::new(workspace.width(), workspace.height());

    for screen in workspace.screens() {
        let img = source(screen)?;
        let fitted = fit_cover(&img, screen.width(), screen.height())?;

        imageops::replace(
            &mut canvas,
            &fitted.to_rgb8(),
            i64::from(screen.x()),
            i64::from(screen.y()),
        );
    }

    Ok(canvas)
}

/// Composes a canvas from image files, one per screen name.
///
/// # Errors
///
/// Returns `ProcessingError::MissingImage` if a screen has no image, before
/// any file is decoded, and `ProcessingError::ImageRead` if a file cannot be
/// decoded.
pub fn combine(
    workspace: &Workspace,
    images: &BTreeMap<String, PathBuf>,
) -> Result<RgbImage, ProcessingError> {
    ensure_complete(workspace, images)?;

    compose_with(workspace, |screen| {
        let path = images.get(screen.name()).ok_or_else(|| ProcessingError::MissingImage {
            workspace: workspace.name().to_string(),
            screen: screen.name().to_string(),
        })?;

        tracing::debug!(screen = %screen.name(), path = %path.display(), "loading source image");
        load_image(path)
    })
}

/// Composes a canvas from already decoded images.
///
/// # Errors
///
/// Returns `ProcessingError::MissingImage` if a screen has no image.
pub fn combine_images(
    workspace: &Workspace,
    images: &BTreeMap<String, DynamicImage>,
) -> Result<RgbImage, ProcessingError> {
    ensure_complete(workspace, images)?;

    compose_with(workspace, |screen| {
        images.get(screen.name()).cloned().ok_or_else(|| ProcessingError::MissingImage {
            workspace: workspace.name().to_string(),
            screen: screen.name().to_string(),
        })
    })
}
