//! Phase 1: intrinsic sizing, bottom-up.
//!
//! A text element measures its source text, constrained to its reflow width
//! when an earlier pass found it overflowing. A container wraps its children
//! along its axis and adds its own edges.

use tracing::trace;

use super::unknown_kind;
use crate::engine::{ElementKind, ElementTree, NodeId};
use crate::error::Result;
use crate::style::Style;
use crate::text::wrap;
use crate::types::{Axis, Size};

/// Post-order visitor. The root keeps the size the caller gave it.
pub(crate) fn measure_intrinsic(tree: &mut ElementTree, id: NodeId) -> Result<()> {
    let element = tree.element(id)?;
    if element.parent().is_none() {
        return Ok(());
    }

    let size = match element.kind {
        ElementKind::Text => {
            let bounds = match element.reflow_width {
                Some(width) => Size::new(width, i32::MAX),
                None => Size::UNBOUNDED,
            };
            let source = element.source_text.as_deref().unwrap_or("");
            wrap(source, element.style.wrap_mode(), false, bounds).size
        }
        ElementKind::Container => container_size(tree, id)?,
        ElementKind::None => return Err(unknown_kind(id, element.kind)),
    };

    let size = size.non_negative();
    trace!(node = %id, width = size.width, height = size.height, "intrinsic");
    tree.element_mut(id)?.intrinsic_size = size;
    Ok(())
}

fn container_size(tree: &ElementTree, id: NodeId) -> Result<Size> {
    let element = tree.element(id)?;
    let style = &element.style;
    let axis = style.main_axis();

    let mut main = 0i32;
    let mut cross = 0i32;
    for child in tree.children(id) {
        let child_size = tree.element(child)?.intrinsic_size;
        main = main.saturating_add(child_size.main(axis));
        cross = cross.max(child_size.cross(axis));
    }

    if element.child_count() > 1 {
        let gaps = style.gap_cells().saturating_mul(element.child_count() as i32 - 1);
        main = main.saturating_add(gaps);
    }

    let edges = style.edges();
    let content = Size::from_axis(axis, main, cross);
    let width = content.width.saturating_add(edges.horizontal());
    let height = content.height.saturating_add(edges.vertical());

    Ok(Size::new(
        constrain(style, Axis::Horizontal, width),
        constrain(style, Axis::Vertical, height),
    ))
}

/// Explicit length wins; otherwise the min clamp applies.
fn constrain(style: &Style, axis: Axis, computed: i32) -> i32 {
    match style.explicit_outer(axis) {
        Some(explicit) => explicit,
        None => style.min_outer(axis).map_or(computed, |min| computed.max(min)),
    }
}
