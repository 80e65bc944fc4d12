//! Layout CLI command.
//!
//! Prints the resolved geometry of each workspace.

use std::cmp::Ordering;
use std::path::Path;

use clap::Args;
use colored::Colorize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::cli::output;
use crate::config::{self, ConfigError};
use crate::error::CanvasError;
use crate::layout::{Layout, Screen, Workspace};

/// Arguments of the `layout` command.
#[derive(Args, Debug, Clone, Default)]
pub struct LayoutArgs {
    /// Only show this workspace.
    #[arg(long, short, value_name = "NAME")]
    pub workspace: Option<String>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct ScreenRow {
    #[tabled(rename = "Screen")]
    name: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Right")]
    right: u32,
    #[tabled(rename = "Bottom")]
    bottom: u32,
}

impl From<&Screen> for ScreenRow {
    fn from(screen: &Screen) -> Self {
        Self {
            name: screen.name().to_string(),
            position: output::format_position(screen.x(), screen.y()),
            size: output::format_size(screen.width(), screen.height()),
            right: screen.right(),
            bottom: screen.bottom(),
        }
    }
}

/// Natural order for screen and workspace names (`dp-2` before `dp-10`).
fn natural(a: &str, b: &str) -> Ordering { natord::compare_ignore_case(a, b) }

/// Workspaces to show, sorted by name.
fn selected<'a>(
    layout: &'a Layout,
    only: Option<&str>,
) -> Result<Vec<&'a Workspace>, ConfigError> {
    if let Some(name) = only {
        let workspace =
            layout.get(name).ok_or_else(|| ConfigError::UnknownWorkspace(name.to_string()))?;
        return Ok(vec![workspace]);
    }

    let mut workspaces: Vec<&Workspace> = layout.workspaces().collect();
    workspaces.sort_by(|a, b| natural(a.name(), b.name()));
    Ok(workspaces)
}

/// Builds the JSON description of one workspace.
fn workspace_json(workspace: &Workspace) -> Result<serde_json::Value, serde_json::Error> {
    let screens = workspace
        .screens()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(serde_json::json!({
        "name": workspace.name(),
        "width": workspace.width(),
        "height": workspace.height(),
        "screens": screens,
    }))
}

/// Renders the table for one workspace, screens in natural name order.
fn workspace_table(workspace: &Workspace) -> String {
    let mut screens: Vec<&Screen> = workspace.screens().collect();
    screens.sort_by(|a, b| natural(a.name(), b.name()));

    Table::new(screens.into_iter().map(ScreenRow::from))
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..5)).with(Alignment::right()))
        .to_string()
}

/// Execute the layout command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or resolved, or
/// the requested workspace does not exist.
pub fn execute(args: &LayoutArgs, config_path: Option<&Path>) -> Result<(), CanvasError> {
    let loaded = config::load(config_path)?;
    let layout = Layout::resolve(&loaded.config.workspaces)?;
    let workspaces = selected(&layout, args.workspace.as_deref())?;

    if args.json {
        let values = workspaces.into_iter().map(workspace_json).collect::<Result<Vec<_>, _>>()?;
        output::print_highlighted_json(&serde_json::Value::Array(values));
        return Ok(());
    }

    if workspaces.is_empty() {
        println!("{}", "No workspaces configured.".dimmed());
        return Ok(());
    }

    for (i, workspace) in workspaces.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {}",
            workspace.name().bold(),
            format!("({})", output::format_size(workspace.width(), workspace.height())).dimmed()
        );
        println!("{}", workspace_table(workspace));
    }

    Ok(())
}
