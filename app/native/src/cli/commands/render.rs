//! Render CLI command.

use std::path::Path;

use clap::Args;
use colored::Colorize;

use crate::config;
use crate::error::CanvasError;
use crate::render::{self, RenderOptions};

/// Arguments of the `render` command.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Print the output paths without reading or writing any image.
    #[arg(long)]
    pub dry_run: bool,

    /// Only render the output with this index.
    #[arg(long, value_name = "INDEX", allow_negative_numbers = true)]
    pub only: Option<i64>,
}

impl From<&RenderArgs> for RenderOptions {
    fn from(args: &RenderArgs) -> Self {
        Self {
            dry_run: args.dry_run,
            only: args.only,
        }
    }
}

/// Execute the render command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a wallpaper cannot be
/// composed or written.
pub fn execute(args: &RenderArgs, config_path: Option<&Path>) -> Result<(), CanvasError> {
    let options = RenderOptions::from(args);
    let loaded = config::load(config_path)?;
    let (layout, jobs) = render::prepare(&loaded, options)?;

    if jobs.is_empty() {
        tracing::warn!(path = %loaded.path.display(), "render: no combine entries in configuration");
        return Ok(());
    }

    if options.dry_run {
        for job in &jobs {
            println!(
                "{} {} {}",
                job.output.display(),
                "from workspace".dimmed(),
                job.workspace.cyan()
            );
        }
        return Ok(());
    }

    render::render_jobs(&layout, &jobs, |job| {
        println!("Creating {}", job.output.display());
    })
}
