//! Platform helpers shared across commands.
//!
//! - [`path`] - Shell-like path expansion for paths read from configuration

pub mod path;
