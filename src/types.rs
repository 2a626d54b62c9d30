//! Core types for spark-flow.
//!
//! Geometry in character cells, the layout enums the solver branches on, and
//! the color type carried through styles for the renderer.

// =============================================================================
// Geometry
// =============================================================================

/// A 2D measurement in terminal cells.
///
/// Signed so callers can hand in degenerate boxes (zero or negative) without
/// a conversion step. Solver outputs are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self::new(0, 0);

    /// A box with no practical limit on either axis.
    pub const UNBOUNDED: Self = Self::new(i32::MAX, i32::MAX);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Length along `axis`.
    #[inline]
    pub const fn main(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Length across `axis`.
    #[inline]
    pub const fn cross(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.height,
            Axis::Vertical => self.width,
        }
    }

    /// Build a size from main/cross lengths relative to `axis`.
    #[inline]
    pub const fn from_axis(axis: Axis, main: i32, cross: i32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }

    /// Clamp both dimensions at zero.
    #[inline]
    pub fn non_negative(self) -> Self {
        Self::new(self.width.max(0), self.height.max(0))
    }

    /// True if either dimension is zero or negative.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Top-left corner of an element, root-relative, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset along `axis` by `main` and across it by `cross`.
    #[inline]
    pub const fn offset(&self, axis: Axis, main: i32, cross: i32) -> Self {
        match axis {
            Axis::Horizontal => {
                Self::new(self.x.saturating_add(main), self.y.saturating_add(cross))
            }
            Axis::Vertical => {
                Self::new(self.x.saturating_add(cross), self.y.saturating_add(main))
            }
        }
    }
}

/// Four-sided value (padding, margin, border).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Clone> Sides<T> {
    /// Same value on every side.
    pub fn all(value: T) -> Self {
        Self {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }
}

impl Sides<i32> {
    /// left + right
    #[inline]
    pub const fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// top + bottom
    #[inline]
    pub const fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Total of both sides that bound `axis`.
    #[inline]
    pub const fn along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.horizontal(),
            Axis::Vertical => self.vertical(),
        }
    }
}

impl std::ops::Add for Sides<i32> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            top: self.top.saturating_add(rhs.top),
            right: self.right.saturating_add(rhs.right),
            bottom: self.bottom.saturating_add(rhs.bottom),
            left: self.left.saturating_add(rhs.left),
        }
    }
}

// =============================================================================
// Layout Enums
// =============================================================================

/// Axis along which a container lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Axis {
    #[default]
    Horizontal = 0,
    Vertical = 1,
}

impl Axis {
    /// The perpendicular axis.
    pub const fn cross(&self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

impl From<u8> for Axis {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Vertical,
            _ => Self::Horizontal,
        }
    }
}

/// Cross-axis placement of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Align {
    #[default]
    Stretch = 0,
    Start = 1,
    Center = 2,
    End = 3,
}

impl From<u8> for Align {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Stretch,
            1 => Self::Start,
            2 => Self::Center,
            3 => Self::End,
            _ => Self::Stretch,
        }
    }
}

/// Main-axis distribution of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Justify {
    #[default]
    Start = 0,
    Center = 1,
    End = 2,
    SpaceBetween = 3,
    SpaceAround = 4,
    SpaceEvenly = 5,
}

impl From<u8> for Justify {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Start,
            1 => Self::Center,
            2 => Self::End,
            3 => Self::SpaceBetween,
            4 => Self::SpaceAround,
            5 => Self::SpaceEvenly,
            _ => Self::Start,
        }
    }
}

/// Text wrap mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TextWrap {
    /// Break at whitespace; split words only when they cannot fit a line.
    #[default]
    Word = 0,
    /// Break anywhere, hyphenating partial words.
    Character = 1,
    /// Only explicit line breaks; long lines are clipped.
    None = 2,
}

impl From<u8> for TextWrap {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Word,
            1 => Self::Character,
            2 => Self::None,
            _ => Self::Word,
        }
    }
}

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    /// Transparent color.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_axis_accessors() {
        let size = Size::new(8, 3);
        assert_eq!(size.main(Axis::Horizontal), 8);
        assert_eq!(size.cross(Axis::Horizontal), 3);
        assert_eq!(size.main(Axis::Vertical), 3);
        assert_eq!(size.cross(Axis::Vertical), 8);
        assert_eq!(Size::from_axis(Axis::Vertical, 3, 8), size);
    }

    #[test]
    fn test_size_non_negative() {
        assert_eq!(Size::new(-4, 2).non_negative(), Size::new(0, 2));
        assert!(Size::new(0, 5).is_empty());
        assert!(Size::new(5, -1).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn test_point_offset() {
        let p = Point::new(2, 3);
        assert_eq!(p.offset(Axis::Horizontal, 4, 1), Point::new(6, 4));
        assert_eq!(p.offset(Axis::Vertical, 4, 1), Point::new(3, 7));
    }

    #[test]
    fn test_sides_totals() {
        let s = Sides { top: 1, right: 2, bottom: 3, left: 4 };
        assert_eq!(s.horizontal(), 6);
        assert_eq!(s.vertical(), 4);
        assert_eq!(s.along(Axis::Vertical), 4);
        assert_eq!((s + Sides::all(1)).left, 5);
    }

    #[test]
    fn test_sides_totals_saturate() {
        let s = Sides::all(i32::MAX);
        assert_eq!(s.horizontal(), i32::MAX);
        assert_eq!(s.vertical(), i32::MAX);
        assert_eq!((s + Sides::all(1)).top, i32::MAX);
        assert_eq!(Sides::all(i32::MIN).horizontal(), i32::MIN);
        assert_eq!(Point::new(i32::MAX, 0).offset(Axis::Horizontal, 5, 1), Point::new(i32::MAX, 1));
    }

    #[test]
    fn test_enums_from_u8() {
        assert_eq!(Axis::from(1), Axis::Vertical);
        assert_eq!(Axis::from(9), Axis::Horizontal);
        assert_eq!(Align::from(2), Align::Center);
        assert_eq!(Align::from(99), Align::Stretch);
        assert_eq!(Justify::from(5), Justify::SpaceEvenly);
        assert_eq!(Justify::from(42), Justify::Start);
        assert_eq!(TextWrap::from(2), TextWrap::None);
        assert_eq!(TextWrap::from(7), TextWrap::Word);
    }

    #[test]
    fn test_rgba_constructors() {
        assert_eq!(Rgba::rgb(255, 0, 0), Rgba::RED);
        assert_eq!(Rgba::new(0, 0, 0, 0), Rgba::TRANSPARENT);
        assert_eq!(Rgba::WHITE.a, 255);
        assert_eq!(Rgba::TERMINAL_DEFAULT.r, -1);
    }
}
