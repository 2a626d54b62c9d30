//! Element styles.
//!
//! A [`Style`] is a sparse set of optional values. Unset inheritable values
//! are filled from the parent by [`resolve_styles`]; everything else falls
//! back to a fixed default when the solver reads it.
//!
//! ```
//! use spark_flow::style::{BorderStyle, Style};
//! use spark_flow::types::{Axis, Justify};
//!
//! let style = Style::new()
//!     .axis(Axis::Vertical)
//!     .padding(1)
//!     .padding_left(2)
//!     .border(BorderStyle::Rounded)
//!     .justify(Justify::Center);
//!
//! let edges = style.edges();
//! assert_eq!(edges.left, 3);
//! assert_eq!(edges.top, 2);
//! ```

pub mod border;
pub mod inheritance;

pub use border::{Border, BorderMetrics, BorderStyle};
pub use inheritance::resolve_styles;

use crate::types::{Align, Axis, Justify, Rgba, Sides, TextWrap};

// =============================================================================
// Edges
// =============================================================================

/// Four-sided optional value with a shorthand for all sides.
///
/// A side set on its own wins over the shorthand, whichever was set last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edges<T> {
    pub all: Option<T>,
    pub top: Option<T>,
    pub right: Option<T>,
    pub bottom: Option<T>,
    pub left: Option<T>,
}

impl<T> Default for Edges<T> {
    fn default() -> Self {
        Self {
            all: None,
            top: None,
            right: None,
            bottom: None,
            left: None,
        }
    }
}

impl<T> Edges<T> {
    /// Effective value per side.
    pub fn resolve(&self) -> Sides<Option<&T>> {
        let all = self.all.as_ref();
        Sides {
            top: self.top.as_ref().or(all),
            right: self.right.as_ref().or(all),
            bottom: self.bottom.as_ref().or(all),
            left: self.left.as_ref().or(all),
        }
    }

    pub fn is_unset(&self) -> bool {
        self.all.is_none()
            && self.top.is_none()
            && self.right.is_none()
            && self.bottom.is_none()
            && self.left.is_none()
    }
}

impl Edges<i32> {
    /// Cells per side, unset sides zero.
    pub fn cells(&self) -> Sides<i32> {
        let s = self.resolve();
        Sides {
            top: s.top.copied().unwrap_or(0),
            right: s.right.copied().unwrap_or(0),
            bottom: s.bottom.copied().unwrap_or(0),
            left: s.left.copied().unwrap_or(0),
        }
    }
}

impl Edges<Border> {
    /// Cells each side's border takes on its own side of the box.
    pub fn cells(&self) -> Sides<i32> {
        let s = self.resolve();
        Sides {
            top: s.top.map_or(0, |b| b.thickness().top),
            right: s.right.map_or(0, |b| b.thickness().right),
            bottom: s.bottom.map_or(0, |b| b.thickness().bottom),
            left: s.left.map_or(0, |b| b.thickness().left),
        }
    }
}

// =============================================================================
// Style
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub axis: Option<Axis>,
    pub grow: Option<u16>,
    pub shrink: Option<u16>,
    /// Main-axis length used instead of the intrinsic one before flexing.
    pub basis: Option<i32>,

    pub padding: Edges<i32>,
    pub margin: Edges<i32>,
    pub border: Edges<Border>,

    pub width: Option<i32>,
    pub min_width: Option<i32>,
    pub max_width: Option<i32>,
    pub height: Option<i32>,
    pub min_height: Option<i32>,
    pub max_height: Option<i32>,

    pub gap: Option<i32>,
    pub align: Option<Align>,
    pub justify: Option<Justify>,

    // Inheritable
    pub text_wrap: Option<TextWrap>,
    pub ellipsis: Option<bool>,
    pub background_color: Option<Rgba>,
    pub text_color: Option<Rgba>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Effective values
    // -------------------------------------------------------------------------

    #[inline]
    pub fn main_axis(&self) -> Axis {
        self.axis.unwrap_or_default()
    }

    #[inline]
    pub fn grow_factor(&self) -> u16 {
        self.grow.unwrap_or(0)
    }

    #[inline]
    pub fn shrink_factor(&self) -> u16 {
        self.shrink.unwrap_or(0)
    }

    #[inline]
    pub fn gap_cells(&self) -> i32 {
        self.gap.unwrap_or(0)
    }

    #[inline]
    pub fn alignment(&self) -> Align {
        self.align.unwrap_or_default()
    }

    #[inline]
    pub fn justification(&self) -> Justify {
        self.justify.unwrap_or_default()
    }

    #[inline]
    pub fn wrap_mode(&self) -> TextWrap {
        self.text_wrap.unwrap_or_default()
    }

    #[inline]
    pub fn uses_ellipsis(&self) -> bool {
        self.ellipsis.unwrap_or(false)
    }

    /// margin + border + padding, per side.
    pub fn edges(&self) -> Sides<i32> {
        self.margin.cells() + self.border.cells() + self.padding.cells()
    }

    // -------------------------------------------------------------------------
    // Margin-box constraints
    // -------------------------------------------------------------------------

    fn with_margin(&self, value: Option<i32>, axis: Axis) -> Option<i32> {
        value.map(|v| v.saturating_add(self.margin.cells().along(axis)))
    }

    /// Explicit length along `axis`, margin included.
    pub fn explicit_outer(&self, axis: Axis) -> Option<i32> {
        match axis {
            Axis::Horizontal => self.with_margin(self.width, axis),
            Axis::Vertical => self.with_margin(self.height, axis),
        }
    }

    /// Minimum length along `axis`, margin included.
    pub fn min_outer(&self, axis: Axis) -> Option<i32> {
        match axis {
            Axis::Horizontal => self.with_margin(self.min_width, axis),
            Axis::Vertical => self.with_margin(self.min_height, axis),
        }
    }

    /// Maximum length along `axis`, margin included.
    pub fn max_outer(&self, axis: Axis) -> Option<i32> {
        match axis {
            Axis::Horizontal => self.with_margin(self.max_width, axis),
            Axis::Vertical => self.with_margin(self.max_height, axis),
        }
    }

    /// Flex basis along `axis`, margin included.
    pub fn basis_outer(&self, axis: Axis) -> Option<i32> {
        self.with_margin(self.basis, axis)
    }

    /// Apply the max clamp, then the min clamp. Min wins a conflict.
    pub fn clamp_outer(&self, axis: Axis, value: i32) -> i32 {
        let mut value = value;
        if let Some(max) = self.max_outer(axis) {
            value = value.min(max);
        }
        if let Some(min) = self.min_outer(axis) {
            value = value.max(min);
        }
        value
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    #[must_use]
    pub fn grow(mut self, factor: u16) -> Self {
        self.grow = Some(factor);
        self
    }

    #[must_use]
    pub fn shrink(mut self, factor: u16) -> Self {
        self.shrink = Some(factor);
        self
    }

    #[must_use]
    pub fn basis(mut self, cells: i32) -> Self {
        self.basis = Some(cells);
        self
    }

    #[must_use]
    pub fn padding(mut self, cells: i32) -> Self {
        self.padding.all = Some(cells);
        self
    }

    #[must_use]
    pub fn padding_top(mut self, cells: i32) -> Self {
        self.padding.top = Some(cells);
        self
    }

    #[must_use]
    pub fn padding_right(mut self, cells: i32) -> Self {
        self.padding.right = Some(cells);
        self
    }

    #[must_use]
    pub fn padding_bottom(mut self, cells: i32) -> Self {
        self.padding.bottom = Some(cells);
        self
    }

    #[must_use]
    pub fn padding_left(mut self, cells: i32) -> Self {
        self.padding.left = Some(cells);
        self
    }

    #[must_use]
    pub fn margin(mut self, cells: i32) -> Self {
        self.margin.all = Some(cells);
        self
    }

    #[must_use]
    pub fn margin_top(mut self, cells: i32) -> Self {
        self.margin.top = Some(cells);
        self
    }

    #[must_use]
    pub fn margin_right(mut self, cells: i32) -> Self {
        self.margin.right = Some(cells);
        self
    }

    #[must_use]
    pub fn margin_bottom(mut self, cells: i32) -> Self {
        self.margin.bottom = Some(cells);
        self
    }

    #[must_use]
    pub fn margin_left(mut self, cells: i32) -> Self {
        self.margin.left = Some(cells);
        self
    }

    #[must_use]
    pub fn border(mut self, border: impl Into<Border>) -> Self {
        self.border.all = Some(border.into());
        self
    }

    #[must_use]
    pub fn border_top(mut self, border: impl Into<Border>) -> Self {
        self.border.top = Some(border.into());
        self
    }

    #[must_use]
    pub fn border_right(mut self, border: impl Into<Border>) -> Self {
        self.border.right = Some(border.into());
        self
    }

    #[must_use]
    pub fn border_bottom(mut self, border: impl Into<Border>) -> Self {
        self.border.bottom = Some(border.into());
        self
    }

    #[must_use]
    pub fn border_left(mut self, border: impl Into<Border>) -> Self {
        self.border.left = Some(border.into());
        self
    }

    #[must_use]
    pub fn width(mut self, cells: i32) -> Self {
        self.width = Some(cells);
        self
    }

    #[must_use]
    pub fn min_width(mut self, cells: i32) -> Self {
        self.min_width = Some(cells);
        self
    }

    #[must_use]
    pub fn max_width(mut self, cells: i32) -> Self {
        self.max_width = Some(cells);
        self
    }

    #[must_use]
    pub fn height(mut self, cells: i32) -> Self {
        self.height = Some(cells);
        self
    }

    #[must_use]
    pub fn min_height(mut self, cells: i32) -> Self {
        self.min_height = Some(cells);
        self
    }

    #[must_use]
    pub fn max_height(mut self, cells: i32) -> Self {
        self.max_height = Some(cells);
        self
    }

    #[must_use]
    pub fn gap(mut self, cells: i32) -> Self {
        self.gap = Some(cells);
        self
    }

    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    #[must_use]
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    #[must_use]
    pub fn text_wrap(mut self, mode: TextWrap) -> Self {
        self.text_wrap = Some(mode);
        self
    }

    #[must_use]
    pub fn ellipsis(mut self, enabled: bool) -> Self {
        self.ellipsis = Some(enabled);
        self
    }

    #[must_use]
    pub fn background_color(mut self, color: Rgba) -> Self {
        self.background_color = Some(color);
        self
    }

    #[must_use]
    pub fn text_color(mut self, color: Rgba) -> Self {
        self.text_color = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Style::new();
        assert_eq!(s.main_axis(), Axis::Horizontal);
        assert_eq!(s.grow_factor(), 0);
        assert_eq!(s.shrink_factor(), 0);
        assert_eq!(s.gap_cells(), 0);
        assert_eq!(s.alignment(), Align::Stretch);
        assert_eq!(s.justification(), Justify::Start);
        assert_eq!(s.wrap_mode(), TextWrap::Word);
        assert!(!s.uses_ellipsis());
        assert_eq!(s.edges(), Sides::all(0));
    }

    #[test]
    fn test_side_overrides_shorthand_either_order() {
        let a = Style::new().padding(1).padding_left(4);
        let b = Style::new().padding_left(4).padding(1);
        assert_eq!(a.padding.cells(), b.padding.cells());
        assert_eq!(a.padding.cells().left, 4);
        assert_eq!(a.padding.cells().top, 1);
    }

    #[test]
    fn test_edges_sum_margin_border_padding() {
        let s = Style::new()
            .margin(1)
            .padding(2)
            .border(BorderStyle::Single)
            .border_bottom(Border::new("", "", "", "", "", "", "", ""));
        let e = s.edges();
        assert_eq!(e.top, 4);
        assert_eq!(e.left, 4);
        assert_eq!(e.bottom, 3);
    }

    #[test]
    fn test_outer_constraints_include_margin() {
        let s = Style::new()
            .margin_left(1)
            .margin_right(2)
            .width(10)
            .min_height(3)
            .max_width(20)
            .basis(5);
        assert_eq!(s.explicit_outer(Axis::Horizontal), Some(13));
        assert_eq!(s.explicit_outer(Axis::Vertical), None);
        assert_eq!(s.min_outer(Axis::Vertical), Some(3));
        assert_eq!(s.max_outer(Axis::Horizontal), Some(23));
        assert_eq!(s.basis_outer(Axis::Horizontal), Some(8));
    }

    #[test]
    fn test_clamp_min_wins() {
        let s = Style::new().min_width(10).max_width(5);
        assert_eq!(s.clamp_outer(Axis::Horizontal, 7), 10);
        let s = Style::new().min_width(2).max_width(5);
        assert_eq!(s.clamp_outer(Axis::Horizontal, 7), 5);
        assert_eq!(s.clamp_outer(Axis::Horizontal, 1), 2);
        assert_eq!(s.clamp_outer(Axis::Vertical, 1), 1);
    }

    #[test]
    fn test_edges_unset() {
        let e: Edges<i32> = Edges::default();
        assert!(e.is_unset());
        assert_eq!(e.cells(), Sides::all(0));
    }
}
