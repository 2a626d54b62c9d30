//! # spark-flow
//!
//! Layout engine for terminal UIs.
//!
//! Applications describe a tree of boxes and text; spark-flow computes the
//! size and position of every element in character cells, wrapping text to
//! fit. Rendering the result to a terminal is left to the caller.
//!
//! ## Architecture
//!
//! Elements live in an arena ([`ElementTree`]) and link to each other by
//! index. Each frame runs the same pipeline:
//! ```text
//! ElementTree → resolve_styles → solve (intrinsic → available → finalize → position) → geometry
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Geometry, layout enums, colors
//! - [`text`] - Cell width and text wrapping
//! - [`style`] - Sparse styles, borders, inheritance
//! - [`engine`] - Element arena and tree walks
//! - [`layout`] - The four-phase solver
//! - [`pipeline`] - Per-frame entry point and terminal viewport
//!
//! ## Example
//!
//! ```
//! use spark_flow::{ElementTree, FrameOptions, Size, Style, compute_frame};
//! use spark_flow::types::{Axis, Justify};
//!
//! let mut tree = ElementTree::with_root_style("app", Style::new().axis(Axis::Vertical));
//! let root = tree.root();
//! let header = tree
//!     .add_container(root, "header", Style::new().justify(Justify::SpaceBetween))
//!     .unwrap();
//! tree.add_text(header, "spark-flow").unwrap();
//! tree.add_text(header, "v0.1").unwrap();
//!
//! compute_frame(&mut tree, FrameOptions::new().viewport(Size::new(40, 10))).unwrap();
//!
//! let header = tree.geometry("header").unwrap();
//! assert_eq!(header.position.y, 0);
//! assert_eq!(header.size.height, 1);
//! ```

pub mod engine;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod style;
pub mod text;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{LayoutError, Result};

pub use engine::{Element, ElementKind, ElementTree, Geometry, NodeId};

pub use layout::{SolveStats, SolverConfig, solve};

pub use pipeline::{FrameLayout, FrameOptions, compute_frame, detect_viewport};

pub use style::{Border, BorderStyle, Style, resolve_styles};

pub use text::{Truncation, Wrapped, measure, wrap};
