//! Screen layout resolution.
//!
//! Turns the configured workspaces into resolved [`Workspace`]s whose screens
//! carry absolute canvas coordinates.
//!
//! - [`alignment`] - Parsing and evaluation of alignment expressions
//! - [`screen`] - Resolved screen geometry
//! - [`workspace`] - Ordered resolution of a workspace's screens

pub mod alignment;
pub mod screen;
pub mod workspace;

use std::collections::HashMap;

pub use alignment::{Anchor, Axis};
pub use screen::Screen;
pub use workspace::Workspace;

use crate::config::{ConfigError, WorkspaceConfig};

/// All resolved workspaces of a configuration, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    workspaces: Vec<Workspace>,
    index: HashMap<String, usize>,
}

impl Layout {
    /// Resolves every configured workspace.
    ///
    /// Resolution stops at the first error; a partially resolved layout is
    /// never returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] raised while resolving a workspace, or
    /// [`ConfigError::DuplicateWorkspace`] if two workspaces share a name.
    pub fn resolve(configs: &[WorkspaceConfig]) -> Result<Self, ConfigError> {
        let mut layout = Self::default();

        for config in configs {
            if layout.index.contains_key(&config.name) {
                return Err(ConfigError::DuplicateWorkspace(config.name.clone()));
            }

            let workspace = Workspace::resolve(config)?;
            layout.index.insert(config.name.clone(), layout.workspaces.len());
            layout.workspaces.push(workspace);
        }

        Ok(layout)
    }

    /// Looks up a workspace by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Workspace> {
        self.index.get(name).map(|&position| &self.workspaces[position])
    }

    /// Iterates workspaces in declaration order.
    pub fn workspaces(&self) -> impl ExactSizeIterator<Item = &Workspace> {
        self.workspaces.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize { self.workspaces.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.workspaces.is_empty() }
}
