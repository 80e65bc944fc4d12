//! Alignment expressions.
//!
//! An alignment expression positions a screen relative to a screen declared
//! earlier in the same workspace, e.g. `"left main"` or `"bottom laptop"`.
//! Expressions are parsed once while a screen is registered and turned into an
//! absolute offset on the spot; nothing of the expression is retained.

use std::fmt;

/// The coordinate axis an expression applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The `x` axis. Keywords: `left`, `center`, `right`.
    Horizontal,
    /// The `y` axis. Keywords: `top`, `center`, `bottom`.
    Vertical,
}

impl Axis {
    /// Short label used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Horizontal => "x",
            Self::Vertical => "y",
        }
    }

    /// Human readable list of the keywords accepted on this axis.
    #[must_use]
    pub const fn keywords(self) -> &'static str {
        match self {
            Self::Horizontal => "left, center or right",
            Self::Vertical => "top, center or bottom",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

/// Where a screen is placed relative to its reference screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `left` / `top`: starts at the far edge of the reference.
    Following,
    /// `center`: resolves exactly like [`Anchor::Following`], not to a
    /// geometric center.
    Center,
    /// `right` / `bottom`: ends at the near edge of the reference.
    Preceding,
}

impl Anchor {
    /// Maps an axis-specific keyword to an anchor.
    ///
    /// Returns `None` for keywords that do not belong to `axis`, so `"top"` is
    /// rejected on the horizontal axis.
    #[must_use]
    pub fn from_keyword(keyword: &str, axis: Axis) -> Option<Self> {
        match (axis, keyword) {
            (Axis::Horizontal, "left") | (Axis::Vertical, "top") => Some(Self::Following),
            (_, "center") => Some(Self::Center),
            (Axis::Horizontal, "right") | (Axis::Vertical, "bottom") => Some(Self::Preceding),
            _ => None,
        }
    }

    /// Computes the absolute offset for a screen of `extent` pixels along the
    /// axis, given the reference screen's `origin` and `reference_extent`.
    ///
    /// The result may be negative; range checks happen in the resolver.
    #[must_use]
    pub fn offset(self, origin: u32, reference_extent: u32, extent: u32) -> i64 {
        match self {
            Self::Following | Self::Center => i64::from(origin) + i64::from(reference_extent),
            Self::Preceding => i64::from(origin) - i64::from(extent),
        }
    }
}

/// Splits an expression into `(keyword, reference)`.
///
/// The keyword is everything up to the first run of whitespace, the reference
/// is the remainder with surrounding whitespace removed. Returns `None` when
/// there is no reference token.
#[must_use]
pub fn split_expression(expression: &str) -> Option<(&str, &str)> {
    let (keyword, reference) = expression.trim_start().split_once(char::is_whitespace)?;
    let reference = reference.trim();
    if keyword.is_empty() || reference.is_empty() {
        return None;
    }
    Some((keyword, reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_expression_basic() {
        assert_eq!(split_expression("left main"), Some(("left", "main")));
    }

    #[test]
    fn test_split_expression_keeps_spaces_inside_reference() {
        assert_eq!(split_expression("right  Dell U2719D "), Some(("right", "Dell U2719D")));
    }

    #[test]
    fn test_split_expression_ignores_trailing_whitespace() {
        assert_eq!(split_expression("left main "), Some(("left", "main")));
        assert_eq!(split_expression("bottom laptop\t"), Some(("bottom", "laptop")));
    }

    #[test]
    fn test_split_expression_leading_whitespace() {
        assert_eq!(split_expression("  top laptop"), Some(("top", "laptop")));
    }

    #[test]
    fn test_split_expression_missing_reference() {
        assert_eq!(split_expression("left"), None);
        assert_eq!(split_expression("left   "), None);
        assert_eq!(split_expression(""), None);
    }

    #[test]
    fn test_anchor_keywords_are_axis_specific() {
        assert_eq!(Anchor::from_keyword("left", Axis::Horizontal), Some(Anchor::Following));
        assert_eq!(Anchor::from_keyword("right", Axis::Horizontal), Some(Anchor::Preceding));
        assert_eq!(Anchor::from_keyword("top", Axis::Vertical), Some(Anchor::Following));
        assert_eq!(Anchor::from_keyword("bottom", Axis::Vertical), Some(Anchor::Preceding));
        assert_eq!(Anchor::from_keyword("center", Axis::Vertical), Some(Anchor::Center));

        assert_eq!(Anchor::from_keyword("top", Axis::Horizontal), None);
        assert_eq!(Anchor::from_keyword("left", Axis::Vertical), None);
        assert_eq!(Anchor::from_keyword("middle", Axis::Horizontal), None);
        assert_eq!(Anchor::from_keyword("LEFT", Axis::Horizontal), None);
    }

    #[test]
    fn test_anchor_offset() {
        assert_eq!(Anchor::Following.offset(100, 1920, 1280), 2020);
        assert_eq!(Anchor::Preceding.offset(100, 1920, 1280), -1180);
        assert_eq!(Anchor::Preceding.offset(1920, 1920, 1280), 640);
    }

    #[test]
    fn test_center_offset_matches_following() {
        // `center` is not a geometric center; it lands where `left`/`top` would.
        for (origin, reference, extent) in [(0, 1920, 1080), (640, 2560, 1440), (7, 1, 3)] {
            assert_eq!(
                Anchor::Center.offset(origin, reference, extent),
                Anchor::Following.offset(origin, reference, extent)
            );
        }
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::Horizontal.to_string(), "x");
        assert_eq!(Axis::Vertical.to_string(), "y");
    }
}
