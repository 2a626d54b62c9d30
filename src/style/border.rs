//! Box borders.
//!
//! A [`Border`] is eight glyph strings, one per corner and edge. Glyphs may
//! span several cells or lines, so the space a border takes is measured with
//! the text wrapper and cached on first use.

use std::cell::OnceCell;

use crate::text::wrap::wrap;
use crate::types::{Sides, Size, TextWrap};

// =============================================================================
// Presets
// =============================================================================

/// Built-in glyph sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BorderStyle {
    /// ─ │ ┌ ┐ └ ┘
    #[default]
    Single = 0,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double = 1,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded = 2,
    /// ━ ┃ ┏ ┓ ┗ ┛
    Bold = 3,
    /// ┄ ┆ ┌ ┐ └ ┘
    Dashed = 4,
    /// · · · · · ·
    Dotted = 5,
    /// - | + + + +
    Ascii = 6,
    /// █ █ █ █ █ █
    Block = 7,
    /// ═ │ ╒ ╕ ╘ ╛ (double horizontal, single vertical)
    DoubleHorz = 8,
    /// ─ ║ ╓ ╖ ╙ ╜ (single horizontal, double vertical)
    DoubleVert = 9,
}

impl BorderStyle {
    /// Get the border characters for this style.
    ///
    /// Returns: (horizontal, vertical, top_left, top_right, bottom_right, bottom_left)
    pub const fn chars(
        &self,
    ) -> (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str) {
        match self {
            Self::Single => ("─", "│", "┌", "┐", "┘", "└"),
            Self::Double => ("═", "║", "╔", "╗", "╝", "╚"),
            Self::Rounded => ("─", "│", "╭", "╮", "╯", "╰"),
            Self::Bold => ("━", "┃", "┏", "┓", "┛", "┗"),
            Self::Dashed => ("┄", "┆", "┌", "┐", "┘", "└"),
            Self::Dotted => ("·", "·", "·", "·", "·", "·"),
            Self::Ascii => ("-", "|", "+", "+", "+", "+"),
            Self::Block => ("█", "█", "█", "█", "█", "█"),
            Self::DoubleHorz => ("═", "│", "╒", "╕", "╛", "╘"),
            Self::DoubleVert => ("─", "║", "╓", "╖", "╜", "╙"),
        }
    }
}

// =============================================================================
// Border
// =============================================================================

/// Measured cell size of each glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderMetrics {
    pub top_left: Size,
    pub top: Size,
    pub top_right: Size,
    pub left: Size,
    pub right: Size,
    pub bottom_left: Size,
    pub bottom: Size,
    pub bottom_right: Size,
}

impl BorderMetrics {
    /// Cells taken on each side of the box.
    pub fn thickness(&self) -> Sides<i32> {
        Sides {
            top: self.top_left.height.max(self.top.height).max(self.top_right.height),
            right: self.top_right.width.max(self.right.width).max(self.bottom_right.width),
            bottom: self
                .bottom_left
                .height
                .max(self.bottom.height)
                .max(self.bottom_right.height),
            left: self.top_left.width.max(self.left.width).max(self.bottom_left.width),
        }
    }
}

/// Glyphs for the corners and edges of a box.
///
/// Glyphs are fixed at construction so the cached metrics always match them:
///
/// ```compile_fail
/// use spark_flow::style::Border;
///
/// let mut border = Border::default();
/// border.left = "||".to_string();
/// ```
#[derive(Debug, Clone)]
pub struct Border {
    top_left: String,
    top: String,
    top_right: String,
    left: String,
    right: String,
    bottom_left: String,
    bottom: String,
    bottom_right: String,
    metrics: OnceCell<BorderMetrics>,
}

impl Border {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        top_left: impl Into<String>,
        top: impl Into<String>,
        top_right: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
        bottom_left: impl Into<String>,
        bottom: impl Into<String>,
        bottom_right: impl Into<String>,
    ) -> Self {
        Self {
            top_left: top_left.into(),
            top: top.into(),
            top_right: top_right.into(),
            left: left.into(),
            right: right.into(),
            bottom_left: bottom_left.into(),
            bottom: bottom.into(),
            bottom_right: bottom_right.into(),
            metrics: OnceCell::new(),
        }
    }

    pub fn top_left(&self) -> &str {
        &self.top_left
    }

    pub fn top(&self) -> &str {
        &self.top
    }

    pub fn top_right(&self) -> &str {
        &self.top_right
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn bottom_left(&self) -> &str {
        &self.bottom_left
    }

    pub fn bottom(&self) -> &str {
        &self.bottom
    }

    pub fn bottom_right(&self) -> &str {
        &self.bottom_right
    }

    /// Glyph sizes, measured once.
    pub fn metrics(&self) -> &BorderMetrics {
        self.metrics.get_or_init(|| {
            let measure = |glyph: &str| wrap(glyph, TextWrap::None, false, Size::UNBOUNDED).size;
            BorderMetrics {
                top_left: measure(&self.top_left),
                top: measure(&self.top),
                top_right: measure(&self.top_right),
                left: measure(&self.left),
                right: measure(&self.right),
                bottom_left: measure(&self.bottom_left),
                bottom: measure(&self.bottom),
                bottom_right: measure(&self.bottom_right),
            }
        })
    }

    /// Cells taken on each side of the box.
    ///
    /// ```
    /// use spark_flow::style::{Border, BorderStyle};
    ///
    /// let border = Border::from(BorderStyle::Rounded);
    /// let t = border.thickness();
    /// assert_eq!((t.top, t.right, t.bottom, t.left), (1, 1, 1, 1));
    /// ```
    pub fn thickness(&self) -> Sides<i32> {
        self.metrics().thickness()
    }
}

impl From<BorderStyle> for Border {
    fn from(style: BorderStyle) -> Self {
        let (h, v, tl, tr, br, bl) = style.chars();
        Self::new(tl, h, tr, v, v, bl, h, br)
    }
}

impl Default for Border {
    fn default() -> Self {
        BorderStyle::Single.into()
    }
}

impl PartialEq for Border {
    fn eq(&self, other: &Self) -> bool {
        self.top_left == other.top_left
            && self.top == other.top
            && self.top_right == other.top_right
            && self.left == other.left
            && self.right == other.right
            && self.bottom_left == other.bottom_left
            && self.bottom == other.bottom
            && self.bottom_right == other.bottom_right
    }
}

impl Eq for Border {}
