//! Element tree.
//!
//! - [`element`]: node data, kinds, handles
//! - [`tree`]: arena storage, linking, identifier lookup
//! - [`traverse`]: stackless pre/post-order walks
//!
//! # Architecture
//!
//! Elements are NOT boxed objects pointing at each other. They are entries
//! in one arena, linked by index:
//!
//! ```text
//! #0 root  (parent=-, first=#1, last=#2, children=2)
//! #1 text  (parent=#0, next=#2)
//! #2 box   (parent=#0, prev=#1, first=#3, last=#3, children=1)
//! #3 text  (parent=#2)
//! ```
//!
//! Handles stay valid for the life of the tree; removing a child only
//! unlinks it.

pub mod element;
pub mod traverse;
pub mod tree;

pub use element::{Element, ElementKind, Geometry, NodeId};
pub use traverse::{visit_post_order, visit_pre_order, visit_pre_post};
pub use tree::{Children, ElementTree};
