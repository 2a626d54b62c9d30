//! One frame of layout.
//!
//! ```text
//! ElementTree → resolve_styles → solve → FrameLayout
//! ```
//!
//! Callers rebuild or update the tree, then call [`compute_frame`] once per
//! frame and read geometry back from the tree.

use tracing::debug_span;

use super::terminal::detect_viewport;
use crate::engine::ElementTree;
use crate::error::Result;
use crate::layout::{SolverConfig, solve};
use crate::style::resolve_styles;
use crate::types::Size;

/// Per-frame options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOptions {
    pub solver: SolverConfig,
    /// Replaces the root's available size before solving.
    pub viewport: Option<Size>,
}

impl FrameOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    #[must_use]
    pub fn viewport(mut self, viewport: Size) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Lay out into the current terminal window.
    #[must_use]
    pub fn terminal_viewport(self) -> Self {
        self.viewport(detect_viewport())
    }
}

/// Summary of a computed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameLayout {
    /// Final size of the root.
    pub root_size: Size,
    /// Extra solver passes caused by text reflow.
    pub reflow_passes: usize,
}

/// Resolve inherited styles, then solve the layout.
///
/// ```
/// use spark_flow::engine::ElementTree;
/// use spark_flow::pipeline::{FrameOptions, compute_frame};
/// use spark_flow::types::Size;
///
/// let mut tree = ElementTree::new("app");
/// tree.add_text(tree.root(), "hello").unwrap();
///
/// let frame = compute_frame(&mut tree, FrameOptions::new().viewport(Size::new(20, 4))).unwrap();
/// assert_eq!(frame.root_size, Size::new(20, 4));
/// ```
pub fn compute_frame(tree: &mut ElementTree, options: FrameOptions) -> Result<FrameLayout> {
    let _span = debug_span!("frame").entered();

    if let Some(viewport) = options.viewport {
        tree.set_viewport(viewport);
    }

    resolve_styles(tree)?;
    let stats = solve(tree, options.solver)?;

    let root = tree.root();
    Ok(FrameLayout {
        root_size: tree.element(root)?.final_size,
        reflow_passes: stats.reflow_passes,
    })
}
