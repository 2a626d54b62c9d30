//! Layout error types.
//!
//! Degenerate geometry (zero or negative boxes, empty text) is never an
//! error. Everything here is fatal to the frame that produced it: the caller
//! discards that frame's geometry.

use thiserror::Error;

use crate::engine::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A solver phase met an element whose kind it cannot lay out.
    #[error("unknown element kind {kind} at node {node}")]
    UnknownElementKind { node: NodeId, kind: u8 },

    /// The reflow loop did not settle within the configured number of passes.
    #[error("layout did not stabilize after {passes} reflow passes")]
    ReflowLimitExceeded { passes: usize },

    #[error("invalid element kind value: {0}")]
    InvalidKind(u8),

    #[error("container elements require an identifier")]
    MissingIdentifier,

    #[error("duplicate element identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("text node {0} cannot have children")]
    TextHasChildren(NodeId),

    #[error("attaching {child} under {parent} would create a cycle")]
    CycleDetected { parent: NodeId, child: NodeId },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
