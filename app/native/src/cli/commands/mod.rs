//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! submodules:
//!
//! - `config_cmd` - Configuration file management commands
//! - `layout` - Resolved layout inspection
//! - `render` - Wallpaper rendering

use std::io;
use std::path::{Path, PathBuf};

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::error::CanvasError;
use crate::schema;

pub mod config_cmd;
pub mod layout;
pub mod render;

pub use config_cmd::ConfigCommands;
pub use layout::LayoutArgs;
pub use render::RenderArgs;

/// Canvaswall - compose multi-monitor wallpapers from per-screen images.
#[derive(Parser, Debug)]
#[command(name = "canvaswall")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to run. Defaults to `render`.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Render every wallpaper described by the configuration.
    ///
    /// This is the default when no command is given.
    Render(RenderArgs),

    /// Show the resolved screen layout of each workspace.
    ///
    /// Resolves alignment expressions and prints absolute screen positions
    /// and the canvas size, without touching any image.
    Layout(LayoutArgs),

    /// Configuration file management commands.
    ///
    /// Initialize the configuration file and show where it is looked up.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output the configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// configuration file. Can be redirected to a file for use with editors
    /// that support schema validation of YAML files.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    /// Can be used with eval or redirected to a file.
    ///
    /// Usage:
    ///   eval "$(canvaswall completions --shell zsh)"
    ///   canvaswall completions --shell bash > ~/.local/share/bash-completion/completions/canvaswall
    ///   canvaswall completions --shell fish > ~/.config/fish/completions/canvaswall.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> { self.config.as_deref() }

    /// Returns the command to run, falling back to `render`.
    #[must_use]
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or_else(|| Commands::Render(RenderArgs::default()))
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), CanvasError> {
        match self.command_or_default() {
            Commands::Render(args) => render::execute(&args, self.config_path()),
            Commands::Layout(args) => layout::execute(&args, self.config_path()),
            Commands::Config(cmd) => config_cmd::execute(&cmd),

            Commands::Schema => {
                println!("{}", schema::generate_schema_json()?);
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, APP_NAME, &mut io::stdout());
    }
}
