//! CLI module for Canvaswall.
//!
//! Parses arguments, installs logging and dispatches to the command
//! implementations. Running without a command renders all wallpapers.

mod commands;
mod output;

use clap::Parser;
pub use commands::{Cli, Commands, ConfigCommands, LayoutArgs, RenderArgs};

use crate::error::CanvasError;
use crate::logging;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), CanvasError> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    cli.execute()
}
