//! Layout solver.
//!
//! Computes the final size and position of every element reachable from the
//! root, in character cells.
//!
//! # Algorithm
//!
//! 1. **Intrinsic** (bottom-up): natural size of every element
//! 2. **Available** (top-down): each container splits its inner box among its
//!    children, growing or shrinking them along the main axis
//! 3. **Finalize** (top-down): final size from the offered box and clamps;
//!    text is wrapped into it
//! 4. **Position** (top-down): justification and alignment inside the parent
//!
//! Phases 3 and 4 share one walk: a container finalizes and places its
//! children before the walk descends into them.
//!
//! Text that does not fit its final box records the width it got and the
//! whole solve runs again, so its taller measurement can push siblings
//! around. The number of extra passes is capped by [`SolverConfig`].

mod available;
mod finalize;
mod intrinsic;
mod position;

use tracing::{debug, debug_span, warn};

use crate::engine::{ElementKind, ElementTree, NodeId, visit_post_order, visit_pre_order};
use crate::error::{LayoutError, Result};
use crate::types::Point;

use available::distribute_available;
use finalize::finalize_element;
use intrinsic::measure_intrinsic;
use position::position_children;

// =============================================================================
// Configuration
// =============================================================================

/// Solver options.
///
/// ```
/// use spark_flow::layout::SolverConfig;
///
/// let config = SolverConfig::default().max_reflow_passes(2);
/// assert_eq!(config.max_reflow_passes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Extra passes allowed after the first one when text reflows.
    pub max_reflow_passes: usize,
}

impl SolverConfig {
    pub const DEFAULT_MAX_REFLOW_PASSES: usize = 8;

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_reflow_passes(mut self, passes: usize) -> Self {
        self.max_reflow_passes = passes;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_reflow_passes: Self::DEFAULT_MAX_REFLOW_PASSES,
        }
    }
}

/// What a successful solve did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveStats {
    /// Passes run after the first because text reflowed.
    pub reflow_passes: usize,
}

// =============================================================================
// Solve
// =============================================================================

/// Lay out `tree` into the root's available size.
///
/// On error no geometry in the tree is meaningful.
///
/// ```
/// use spark_flow::engine::ElementTree;
/// use spark_flow::layout::{SolverConfig, solve};
/// use spark_flow::style::Style;
/// use spark_flow::types::{Point, Size};
///
/// let mut tree = ElementTree::new("root");
/// tree.set_viewport(Size::new(40, 10));
/// let root = tree.root();
/// let sidebar = tree.add_container(root, "sidebar", Style::new().width(10)).unwrap();
/// let main = tree.add_container(root, "main", Style::new().grow(1)).unwrap();
///
/// solve(&mut tree, SolverConfig::default()).unwrap();
/// assert_eq!(tree.get(sidebar).unwrap().final_size.width, 10);
/// assert_eq!(tree.get(main).unwrap().final_size.width, 30);
/// assert_eq!(tree.get(main).unwrap().position, Point::new(10, 0));
/// ```
pub fn solve(tree: &mut ElementTree, config: SolverConfig) -> Result<SolveStats> {
    let _span = debug_span!("layout_solve", nodes = tree.len()).entered();

    // Reflow widths only hold within one solve; the viewport may have changed.
    tree.clear_reflow_widths();

    let mut reflow_passes = 0;
    loop {
        if !run_pass(tree)? {
            debug!(reflow_passes, "layout settled");
            return Ok(SolveStats { reflow_passes });
        }

        if reflow_passes >= config.max_reflow_passes {
            warn!(passes = reflow_passes, "layout did not settle, giving up");
            return Err(LayoutError::ReflowLimitExceeded {
                passes: reflow_passes,
            });
        }

        reflow_passes += 1;
        debug!(pass = reflow_passes, "text overflowed, reflowing");
    }
}

/// One run of all four phases. Returns true if text asked for a reflow.
fn run_pass(tree: &mut ElementTree) -> Result<bool> {
    let root = tree.root();

    visit_post_order(tree, root, measure_intrinsic)?;
    visit_pre_order(tree, root, distribute_available)?;

    let mut needs_reflow = finalize_element(tree, root)?;
    tree.element_mut(root)?.position = Point::ORIGIN;

    visit_pre_order(tree, root, |tree: &mut ElementTree, id: NodeId| {
        let element = tree.element(id)?;
        match element.kind {
            ElementKind::Text => return Ok(()),
            ElementKind::None => return Err(unknown_kind(id, element.kind)),
            ElementKind::Container => {}
        }

        let children: Vec<NodeId> = tree.children(id).collect();
        for child in children {
            needs_reflow |= finalize_element(tree, child)?;
        }
        position_children(tree, id)
    })?;

    Ok(needs_reflow)
}

pub(crate) fn unknown_kind(node: NodeId, kind: ElementKind) -> LayoutError {
    LayoutError::UnknownElementKind {
        node,
        kind: kind as u8,
    }
}
