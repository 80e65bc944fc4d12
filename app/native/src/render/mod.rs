//! Render pipeline.
//!
//! Turns the `combine` entries of a configuration into output images:
//!
//! 1. [`plan_jobs`] resolves paths, output names and formats for every job
//!    and checks that each workspace screen has an image.
//! 2. [`render_jobs`] composes and writes the planned jobs one after another.
//!
//! Planning never touches image data, so every configuration error is
//! reported before the first output file is written.

pub mod pattern;

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

pub use pattern::NamePattern;
use serde::Serialize;

use crate::config::{ConfigError, LoadedConfig};
use crate::error::CanvasError;
use crate::layout::Layout;
use crate::wallpaper::{self, ProcessingError};

/// One output image: a workspace and the source image for each of its screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderJob {
    /// Number substituted into `name_pattern`.
    pub index: i64,
    /// Output file path.
    pub output: PathBuf,
    /// Workspace name.
    pub workspace: String,
    /// Source image per screen name.
    pub images: BTreeMap<String, PathBuf>,
}

/// Options for a render run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Plan and report jobs without decoding or writing images.
    pub dry_run: bool,
    /// Only render the job with this output index.
    pub only: Option<i64>,
}

/// Plans every render job of the configuration, in order.
///
/// Output indices start at `start` and increase by one per `combine` entry.
///
/// # Errors
///
/// Returns an error if the name pattern is invalid, a job references an
/// unknown workspace, a screen has no image, or the output extension is not
/// a writable image format.
pub fn plan_jobs(loaded: &LoadedConfig, layout: &Layout) -> Result<Vec<RenderJob>, CanvasError> {
    let config = &loaded.config;
    let pattern = NamePattern::parse(&config.name_pattern)?;
    let out_dir = loaded.resolve_path(&config.out_path);

    let mut jobs = Vec::with_capacity(config.combine.len());
    let mut index = config.start;

    for (position, entry) in config.combine.iter().enumerate() {
        if position > 0 {
            index = index.checked_add(1).ok_or_else(|| {
                CanvasError::InvalidArguments(format!("Output index overflows after {index}"))
            })?;
        }

        let workspace = layout
            .get(&entry.workspace)
            .ok_or_else(|| ConfigError::UnknownWorkspace(entry.workspace.clone()))?;

        let images: BTreeMap<String, PathBuf> = entry
            .images
            .iter()
            .map(|(screen, path)| (screen.clone(), loaded.resolve_path(path)))
            .collect();
        wallpaper::compositor::ensure_complete(workspace, &images)?;

        let output = out_dir.join(pattern.format(index));
        if wallpaper::output_format(&output).is_none() {
            return Err(ProcessingError::UnsupportedFormat(output).into());
        }

        jobs.push(RenderJob {
            index,
            output,
            workspace: entry.workspace.clone(),
            images,
        });
    }

    tracing::debug!(jobs = jobs.len(), out_dir = %out_dir.display(), "render: planned jobs");
    Ok(jobs)
}

/// Keeps the jobs selected by `options.only`.
///
/// # Errors
///
/// Returns `CanvasError::InvalidArguments` if no job has the requested index.
pub fn select_jobs(
    jobs: Vec<RenderJob>,
    options: RenderOptions,
) -> Result<Vec<RenderJob>, CanvasError> {
    let Some(only) = options.only else {
        return Ok(jobs);
    };

    let selected: Vec<RenderJob> = jobs.into_iter().filter(|job| job.index == only).collect();
    if selected.is_empty() {
        return Err(CanvasError::InvalidArguments(format!("No render job with index {only}")));
    }

    Ok(selected)
}

/// Composes and writes one job.
///
/// # Errors
///
/// Returns an error if the workspace is unknown, an image cannot be read,
/// or the output cannot be written.
pub fn render_job(layout: &Layout, job: &RenderJob) -> Result<(), CanvasError> {
    let workspace = layout
        .get(&job.workspace)
        .ok_or_else(|| ConfigError::UnknownWorkspace(job.workspace.clone()))?;

    let canvas = wallpaper::combine(workspace, &job.images)?;

    if let Some(parent) = job.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    wallpaper::save_image(&canvas, &job.output)?;

    tracing::info!(
        output = %job.output.display(),
        workspace = %job.workspace,
        width = canvas.width(),
        height = canvas.height(),
        "render: wrote wallpaper"
    );
    Ok(())
}

/// Renders jobs strictly in order, calling `on_start` before each one.
///
/// The first failure aborts the run; outputs already written are kept.
///
/// # Errors
///
/// Returns the first error from [`render_job`].
pub fn render_jobs<F>(
    layout: &Layout,
    jobs: &[RenderJob],
    mut on_start: F,
) -> Result<(), CanvasError>
where
    F: FnMut(&RenderJob),
{
    for job in jobs {
        on_start(job);
        render_job(layout, job)?;
    }

    Ok(())
}

/// Resolves the layout and plans the jobs selected by `options`.
///
/// # Errors
///
/// Returns the errors of [`Layout::resolve`], [`plan_jobs`] and [`select_jobs`].
pub fn prepare(
    loaded: &LoadedConfig,
    options: RenderOptions,
) -> Result<(Layout, Vec<RenderJob>), CanvasError> {
    let layout = Layout::resolve(&loaded.config.workspaces)?;
    let jobs = select_jobs(plan_jobs(loaded, &layout)?, options)?;
    Ok((layout, jobs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    fn loaded(yaml: &str) -> LoadedConfig {
        let path = PathBuf::from("/walls/config.yml");
        LoadedConfig::new(parse_config(yaml, &path).unwrap(), path)
    }

    const CONFIG: &str = r"
workspaces:
  - name: desk
    screens:
      - { name: left, x: 0, y: 0, w: 20, h: 10 }
      - { name: right, x: left left, y: 0, w: 20, h: 10 }
  - name: solo
    screens:
      - { name: main, x: 0, y: 0, w: 30, h: 30 }
start: 5
name_pattern: 'wall-{:03d}.png'
out_path: out
combine:
  - workspace: desk
    images: { left: a.png, right: /srv/b.png }
  - workspace: solo
    images: { main: c.jpg }
";

    fn plan(yaml: &str) -> Result<Vec<RenderJob>, CanvasError> {
        let loaded = loaded(yaml);
        let layout = Layout::resolve(&loaded.config.workspaces)?;
        plan_jobs(&loaded, &layout)
    }

    #[test]
    fn test_plan_numbers_jobs_from_start() {
        let jobs = plan(CONFIG).unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].index, 5);
        assert_eq!(jobs[0].output, PathBuf::from("/walls/out/wall-005.png"));
        assert_eq!(jobs[1].index, 6);
        assert_eq!(jobs[1].output, PathBuf::from("/walls/out/wall-006.png"));
        assert_eq!(jobs[1].workspace, "solo");
    }

    #[test]
    fn test_plan_resolves_image_paths() {
        let jobs = plan(CONFIG).unwrap();

        assert_eq!(jobs[0].images["left"], PathBuf::from("/walls/a.png"));
        assert_eq!(jobs[0].images["right"], PathBuf::from("/srv/b.png"));
    }

    #[test]
    fn test_plan_unknown_workspace() {
        let yaml = CONFIG.replace("workspace: solo", "workspace: attic");
        let err = plan(&yaml).unwrap_err();
        assert!(matches!(
            err,
            CanvasError::Config(ConfigError::UnknownWorkspace(ref name)) if name == "attic"
        ));
    }

    #[test]
    fn test_plan_missing_image() {
        let yaml = CONFIG.replace("{ left: a.png, right: /srv/b.png }", "{ left: a.png }");
        let err = plan(&yaml).unwrap_err();
        assert!(matches!(
            err,
            CanvasError::Processing(ProcessingError::MissingImage { ref screen, .. }) if screen == "right"
        ));
    }

    #[test]
    fn test_plan_invalid_pattern() {
        let yaml = CONFIG.replace("'wall-{:03d}.png'", "'wall.png'");
        let err = plan(&yaml).unwrap_err();
        assert!(matches!(err, CanvasError::Config(ConfigError::InvalidNamePattern { .. })));
    }

    #[test]
    fn test_plan_unsupported_extension() {
        let yaml = CONFIG.replace("'wall-{:03d}.png'", "'wall-{}.txt'");
        let err = plan(&yaml).unwrap_err();
        assert!(matches!(err, CanvasError::Processing(ProcessingError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_plan_without_jobs() {
        let yaml = CONFIG.split("combine:").next().unwrap().to_string();
        assert!(plan(&yaml).unwrap().is_empty());
    }

    #[test]
    fn test_select_jobs_only() {
        let jobs = plan(CONFIG).unwrap();
        let options = RenderOptions { only: Some(6), ..RenderOptions::default() };

        let selected = select_jobs(jobs, options).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].workspace, "solo");
    }

    #[test]
    fn test_select_jobs_unknown_index() {
        let jobs = plan(CONFIG).unwrap();
        let options = RenderOptions { only: Some(1), ..RenderOptions::default() };

        let err = select_jobs(jobs, options).unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_prepare_reports_layout_errors_first() {
        let yaml = CONFIG.replace("x: left left", "x: left ghost");
        let err = prepare(&loaded(&yaml), RenderOptions::default()).unwrap_err();
        assert!(matches!(err, CanvasError::Config(ConfigError::UnknownScreen { .. })));
    }
}
