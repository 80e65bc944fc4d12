//! Workspace layout resolution.
//!
//! A workspace is resolved by walking its screens in declaration order. Each
//! screen may only reference screens declared before it, which rules out
//! forward references and cycles without needing a dependency graph: a
//! reference to a later (or misspelled) screen simply fails.

use std::collections::HashMap;

use super::alignment::{Anchor, Axis, split_expression};
use super::screen::Screen;
use crate::config::{ConfigError, Coordinate, ScreenConfig, WorkspaceConfig};
use crate::constants::MAX_IMAGE_PIXELS;

/// A named set of resolved screens sharing one canvas.
#[derive(Debug, Clone)]
pub struct Workspace {
    name: String,
    screens: Vec<Screen>,
    index: HashMap<String, usize>,
}

impl Workspace {
    /// Resolves a workspace from its configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for malformed alignment expressions, unknown
    /// or not-yet-declared reference screens, invalid keywords, duplicate
    /// screen names, invalid sizes, coordinates that end up negative and
    /// canvases larger than [`MAX_IMAGE_PIXELS`].
    pub fn resolve(config: &WorkspaceConfig) -> Result<Self, ConfigError> {
        Self::from_screens(&config.name, &config.screens)
    }

    /// Resolves a workspace from an ordered list of raw screen specs.
    ///
    /// # Errors
    ///
    /// See [`Workspace::resolve`].
    pub fn from_screens(name: &str, specs: &[ScreenConfig]) -> Result<Self, ConfigError> {
        if specs.is_empty() {
            return Err(ConfigError::EmptyWorkspace(name.to_string()));
        }

        let mut workspace = Self {
            name: name.to_string(),
            screens: Vec::with_capacity(specs.len()),
            index: HashMap::with_capacity(specs.len()),
        };

        for spec in specs {
            workspace.register(spec)?;
        }

        let pixels = u64::from(workspace.width()) * u64::from(workspace.height());
        if pixels > MAX_IMAGE_PIXELS {
            return Err(ConfigError::InvalidGeometry(format!(
                "workspace `{name}` needs a {}x{} canvas, which exceeds the limit of \
                 {MAX_IMAGE_PIXELS} pixels",
                workspace.width(),
                workspace.height()
            )));
        }

        tracing::debug!(
            workspace = %workspace.name,
            screens = workspace.screens.len(),
            width = workspace.width(),
            height = workspace.height(),
            "resolved workspace layout"
        );

        Ok(workspace)
    }

    /// Resolves one screen against the screens registered so far and adds it.
    fn register(&mut self, spec: &ScreenConfig) -> Result<(), ConfigError> {
        if self.index.contains_key(&spec.name) {
            return Err(ConfigError::DuplicateScreen {
                workspace: self.name.clone(),
                screen: spec.name.clone(),
            });
        }

        let width = validate_extent(&spec.name, "w", spec.w)?;
        let height = validate_extent(&spec.name, "h", spec.h)?;

        let x = self.resolve_coordinate(&spec.name, &spec.x, Axis::Horizontal, width)?;
        let y = self.resolve_coordinate(&spec.name, &spec.y, Axis::Vertical, height)?;

        if x.checked_add(width).is_none() || y.checked_add(height).is_none() {
            return Err(ConfigError::InvalidGeometry(format!(
                "screen `{}` extends past the maximum canvas size",
                spec.name
            )));
        }

        tracing::trace!(screen = %spec.name, x, y, width, height, "registered screen");

        self.index.insert(spec.name.clone(), self.screens.len());
        self.screens.push(Screen::new(spec.name.clone(), x, y, width, height));
        Ok(())
    }

    /// Turns an absolute value or alignment expression into a coordinate.
    fn resolve_coordinate(
        &self,
        screen: &str,
        coordinate: &Coordinate,
        axis: Axis,
        extent: u32,
    ) -> Result<u32, ConfigError> {
        let value = match coordinate {
            Coordinate::Absolute(value) => *value,
            Coordinate::Aligned(expression) => {
                let (keyword, reference) = split_expression(expression).ok_or_else(|| {
                    ConfigError::MalformedAlignment {
                        screen: screen.to_string(),
                        value: expression.clone(),
                    }
                })?;

                let reference_screen =
                    self.get(reference).ok_or_else(|| ConfigError::UnknownScreen {
                        screen: screen.to_string(),
                        reference: reference.to_string(),
                    })?;

                let anchor = Anchor::from_keyword(keyword, axis).ok_or_else(|| {
                    ConfigError::InvalidAlignment {
                        screen: screen.to_string(),
                        keyword: keyword.to_string(),
                        axis,
                    }
                })?;

                anchor.offset(
                    reference_screen.origin(axis),
                    reference_screen.extent(axis),
                    extent,
                )
            }
        };

        u32::try_from(value).map_err(|_| {
            ConfigError::InvalidGeometry(format!(
                "screen `{screen}` resolves to {axis} = {value}, coordinates must be between 0 and {}",
                u32::MAX
            ))
        })
    }

    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// Looks up a resolved screen by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Screen> {
        self.index.get(name).map(|&position| &self.screens[position])
    }

    /// Iterates screens in declaration order.
    pub fn screens(&self) -> impl ExactSizeIterator<Item = &Screen> { self.screens.iter() }

    /// Canvas width: the right-most screen edge.
    ///
    /// Derived from the current screens on every call.
    #[must_use]
    pub fn width(&self) -> u32 { self.screens.iter().map(Screen::right).max().unwrap_or(0) }

    /// Canvas height: the bottom-most screen edge.
    #[must_use]
    pub fn height(&self) -> u32 { self.screens.iter().map(Screen::bottom).max().unwrap_or(0) }
}

/// Checks that a configured width/height is a positive `u32`.
fn validate_extent(screen: &str, field: &str, value: i64) -> Result<u32, ConfigError> {
    u32::try_from(value).ok().filter(|&extent| extent > 0).ok_or_else(|| {
        ConfigError::InvalidGeometry(format!(
            "screen `{screen}` has {field} = {value}, sizes must be positive"
        ))
    })
}
