//! Config CLI commands.
//!
//! Commands for managing the Canvaswall configuration file.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::config_paths;
use crate::config::template::{create_config_file, generate_config_template};
use crate::error::CanvasError;

/// Config management commands.
#[derive(Subcommand, Debug, Clone)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Initialize a new configuration file with all options documented.
    ///
    /// Creates a working two-monitor example configuration with comments
    /// explaining each option. Point the image paths at your own files and
    /// adjust the screens to match your setup.
    #[command(
        name = "init",
        after_long_help = r#"Examples:
  canvaswall config init              # Create config at ~/.config/canvaswall/config.yml
  canvaswall config init --force      # Overwrite existing config
  canvaswall config init --path ./walls.yml  # Create at custom path
  canvaswall config init --stdout     # Print template to stdout"#
    )]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        /// If not specified, uses ~/.config/canvaswall/config.yml
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the configuration template to stdout instead of writing to a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Show the path to the configuration file.
    ///
    /// Displays the paths where Canvaswall looks for configuration files,
    /// and indicates which one is currently in use (if any).
    Path,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cmd: &ConfigCommands) -> Result<(), CanvasError> {
    match cmd {
        ConfigCommands::Init { force, path, stdout } => {
            if *stdout {
                print!("{}", generate_config_template());
                Ok(())
            } else {
                init_config(*force, path.clone())
            }
        }
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
    }
}

/// Location `config init` writes to when no path is given.
///
/// The first per-user path in the search order; the working directory is
/// only used when no home or XDG directory is known.
fn default_init_path() -> PathBuf {
    config_paths()
        .into_iter()
        .find(|path| path.is_absolute())
        .unwrap_or_else(|| PathBuf::from("config.yml"))
}

/// Initialize a new configuration file.
fn init_config(force: bool, custom_path: Option<PathBuf>) -> Result<(), CanvasError> {
    let config_path = custom_path.unwrap_or_else(default_init_path);

    if config_path.exists() && !force {
        return Err(CanvasError::InvalidArguments(format!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            config_path.display()
        )));
    }

    create_config_file(&config_path)?;
    tracing::info!(path = %config_path.display(), "config: wrote template");

    println!("Configuration file created at: {}", config_path.display());
    println!("\nEdit the screens to match your monitors and point the images at your files.");
    println!("Relative paths are resolved against the directory of the configuration file.");

    Ok(())
}

/// Show the configuration file search paths.
fn show_config_path() {
    println!("Configuration file search paths (in priority order):\n");

    let paths = config_paths();
    let mut found_config = false;

    for (i, path) in paths.iter().enumerate() {
        let exists = path.exists();
        let marker = if exists && !found_config {
            found_config = true;
            " (active)"
        } else if exists {
            " (exists)"
        } else {
            ""
        };

        println!("  {}. {}{}", i + 1, path.display(), marker);
    }

    if !found_config {
        println!("\nNo configuration file found.");
        println!("Run 'canvaswall config init' to create one.");
    }
}
