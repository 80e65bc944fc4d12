//! Resolved screen geometry.

use serde::Serialize;

use super::alignment::Axis;

/// A screen with absolute, non-negative coordinates on the workspace canvas.
///
/// Screens are immutable once resolved. The constructor is crate-private so
/// that every `Screen` in circulation has passed the resolver's validation
/// (positive size, edges within `u32`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    name: String,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl Screen {
    pub(crate) const fn new(name: String, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { name, x, y, width, height }
    }

    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    #[must_use]
    pub const fn x(&self) -> u32 { self.x }

    #[must_use]
    pub const fn y(&self) -> u32 { self.y }

    #[must_use]
    pub const fn width(&self) -> u32 { self.width }

    #[must_use]
    pub const fn height(&self) -> u32 { self.height }

    /// Right edge (`x + width`), exclusive.
    #[must_use]
    pub const fn right(&self) -> u32 { self.x + self.width }

    /// Bottom edge (`y + height`), exclusive.
    #[must_use]
    pub const fn bottom(&self) -> u32 { self.y + self.height }

    /// Position along `axis`.
    #[must_use]
    pub const fn origin(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Size along `axis`.
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}
