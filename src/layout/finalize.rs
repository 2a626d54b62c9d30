//! Phase 3: final sizing and text reflow.
//!
//! An element's final size is the space it was offered, overridden by an
//! explicit length and clamped by min/max. Text is wrapped into that box for
//! real. When it does not fit, the element remembers the width it got so
//! the next pass measures it narrower (and therefore taller). Once its
//! natural width fits again the width is forgotten.

use tracing::trace;

use super::unknown_kind;
use crate::engine::{ElementKind, ElementTree, NodeId};
use crate::error::Result;
use crate::style::Style;
use crate::text::{Truncation, measure, wrap};
use crate::types::{Axis, Size};

/// Settle the final size of `id`. Returns true if its text needs another
/// layout pass.
pub(crate) fn finalize_element(tree: &mut ElementTree, id: NodeId) -> Result<bool> {
    let element = tree.element_mut(id)?;
    let available = element.available_size.non_negative();
    let final_size = Size::new(
        final_length(&element.style, Axis::Horizontal, available.width),
        final_length(&element.style, Axis::Vertical, available.height),
    );
    element.final_size = final_size;

    match element.kind {
        ElementKind::Container => Ok(false),
        ElementKind::None => Err(unknown_kind(id, element.kind)),
        ElementKind::Text => {
            let source = element.source_text.as_deref().unwrap_or("");
            let mode = element.style.wrap_mode();
            let bounds = Size::new(final_size.width, available.height);
            let wrapped = wrap(source, mode, element.style.uses_ellipsis(), bounds);

            let overflows = wrapped.truncation.contains(Truncation::HEIGHT)
                || wrapped.size.width > final_size.width
                || wrapped.size.height > final_size.height;

            // Both branches change what phase 1 measures on the next pass.
            let mut needs_reflow = false;
            if overflows && element.reflow_width != Some(final_size.width) {
                trace!(node = %id, width = final_size.width, "text overflows, reflow");
                element.reflow_width = Some(final_size.width);
                needs_reflow = true;
            } else if !overflows
                && element.reflow_width.is_some()
                && measure(source, mode).width <= final_size.width
            {
                trace!(node = %id, "text fits, reflow width cleared");
                element.reflow_width = None;
                needs_reflow = true;
            }

            element.text = Some(wrapped.text);
            Ok(needs_reflow)
        }
    }
}

fn final_length(style: &Style, axis: Axis, available: i32) -> i32 {
    let length = style.explicit_outer(axis).unwrap_or(available);
    style.clamp_outer(axis, length).max(0)
}
