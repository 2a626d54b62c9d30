//! Element nodes.
//!
//! An [`Element`] carries what the caller declares (kind, identifier, style,
//! source text) plus what the solver computes (sizes, position, wrapped
//! text). Tree links are owned by [`ElementTree`](super::ElementTree) and are
//! read-only from outside the crate.

use std::fmt;

use crate::error::LayoutError;
use crate::style::Style;
use crate::types::{Point, Size};

// =============================================================================
// NodeId
// =============================================================================

/// Stable handle to an element in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// ElementKind
// =============================================================================

/// What an element is. Decides how every solver phase treats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ElementKind {
    /// Not yet assigned. The solver rejects it.
    #[default]
    None = 0,
    Container = 1,
    Text = 2,
}

impl TryFrom<u8> for ElementKind {
    type Error = LayoutError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Container),
            2 => Ok(Self::Text),
            other => Err(LayoutError::InvalidKind(other)),
        }
    }
}

// =============================================================================
// Element
// =============================================================================

/// Final placement of an element, root-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub position: Point,
    pub size: Size,
}

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub kind: ElementKind,
    /// Required and unique for containers.
    pub identifier: Option<String>,
    pub style: Style,
    /// Text as declared. Only meaningful for text elements.
    pub source_text: Option<String>,

    pub(crate) parent: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
    pub(crate) previous: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) child_count: usize,

    /// Natural size, computed bottom-up.
    pub intrinsic_size: Size,
    /// Box offered by the parent. Set by the caller for the root.
    pub available_size: Size,
    pub final_size: Size,
    pub position: Point,
    /// Width a text element is measured at after it overflowed its box.
    pub reflow_width: Option<i32>,
    /// Wrapped text from the last solve.
    pub text: Option<String>,
}

impl Element {
    /// A container element.
    pub fn container(identifier: impl Into<String>, style: Style) -> Self {
        Self {
            kind: ElementKind::Container,
            identifier: Some(identifier.into()),
            style,
            ..Self::default()
        }
    }

    /// A text element.
    pub fn text(source: impl Into<String>, style: Style) -> Self {
        Self {
            kind: ElementKind::Text,
            style,
            source_text: Some(source.into()),
            ..Self::default()
        }
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    #[inline]
    pub fn last_child(&self) -> Option<NodeId> {
        self.last_child
    }

    #[inline]
    pub fn previous_sibling(&self) -> Option<NodeId> {
        self.previous
    }

    #[inline]
    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.child_count
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        self.kind == ElementKind::Text
    }

    #[inline]
    pub fn is_container(&self) -> bool {
        self.kind == ElementKind::Container
    }

    pub fn geometry(&self) -> Geometry {
        Geometry {
            position: self.position,
            size: self.final_size,
        }
    }
}
