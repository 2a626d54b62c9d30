//! Phase 2: available-size distribution, top-down.
//!
//! Each container splits its inner box among its children. Along the main
//! axis every child starts from its basis (or intrinsic length); leftover
//! space goes to growable children, missing space comes out of shrinkable
//! ones. Across the axis every child gets the widest sibling's span, capped
//! by the inner box.

use tracing::trace;

use super::unknown_kind;
use crate::engine::{ElementKind, ElementTree, NodeId};
use crate::error::Result;
use crate::types::{Axis, Size};

// =============================================================================
// Visitor
// =============================================================================

/// Pre-order visitor. Writes `available_size` of each child of `id`.
pub(crate) fn distribute_available(tree: &mut ElementTree, id: NodeId) -> Result<()> {
    let element = tree.element(id)?;
    match element.kind {
        ElementKind::Container => {}
        ElementKind::Text => return Ok(()),
        ElementKind::None => return Err(unknown_kind(id, element.kind)),
    }
    if element.child_count() == 0 {
        return Ok(());
    }

    let style = &element.style;
    let axis = style.main_axis();
    let cross_axis = axis.cross();
    let gap = style.gap_cells();

    let own = outer_box(tree, id)?;
    let edges = style.edges();
    let inner = Size::new(
        own.width.saturating_sub(edges.horizontal()),
        own.height.saturating_sub(edges.vertical()),
    )
    .non_negative();

    let children: Vec<NodeId> = tree.children(id).collect();
    let mut items = Vec::with_capacity(children.len());
    let mut widest_cross = 0i32;

    for &child in &children {
        let c = tree.element(child)?;
        let base = c
            .style
            .basis_outer(axis)
            .unwrap_or(c.intrinsic_size.main(axis))
            .max(0);
        widest_cross = widest_cross.max(c.intrinsic_size.cross(axis));
        items.push(FlexItem {
            base,
            grow: c.style.grow_factor(),
            shrink: c.style.shrink_factor(),
            max: c.style.max_outer(axis),
            min: c.style.min_outer(axis),
        });
    }

    let gaps = gap.saturating_mul(children.len() as i32 - 1);
    let desired = items
        .iter()
        .fold(gaps, |acc, item| acc.saturating_add(item.base));
    let delta = inner.main(axis).saturating_sub(desired);

    let lengths = resolve_main_lengths(&items, delta);
    let shared_cross = inner.cross(axis).min(widest_cross);

    for (&child, main) in children.iter().zip(lengths) {
        let c = tree.element_mut(child)?;
        let cross = c.style.explicit_outer(cross_axis).unwrap_or(shared_cross);
        c.available_size = Size::from_axis(axis, main, cross);
        trace!(
            node = %child,
            width = c.available_size.width,
            height = c.available_size.height,
            "available"
        );
    }

    Ok(())
}

/// The box a container lays its children into, before edges.
///
/// Inherited space is replaced by an explicit length, then capped by max.
pub(crate) fn outer_box(tree: &ElementTree, id: NodeId) -> Result<Size> {
    let element = tree.element(id)?;
    let style = &element.style;
    let available = element.available_size.non_negative();

    let length = |axis: Axis| {
        let value = style
            .explicit_outer(axis)
            .unwrap_or(available.main(axis));
        match style.max_outer(axis) {
            Some(max) => value.min(max),
            None => value,
        }
    };

    Ok(Size::new(length(Axis::Horizontal), length(Axis::Vertical)))
}

// =============================================================================
// Flex Distribution
// =============================================================================

/// One child as seen by the main-axis distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct FlexItem {
    pub base: i32,
    pub grow: u16,
    pub shrink: u16,
    pub max: Option<i32>,
    pub min: Option<i32>,
}

/// Main-axis length per item after absorbing `delta` (free space if
/// positive, overflow if negative).
pub(crate) fn resolve_main_lengths(items: &[FlexItem], delta: i32) -> Vec<i32> {
    let bases: Vec<i32> = items.iter().map(|i| i.base).collect();

    if delta > 0 && items.iter().any(|i| i.grow > 0) {
        let factors: Vec<u16> = items.iter().map(|i| i.grow).collect();
        let limits: Vec<i32> = items.iter().map(|i| i.max.unwrap_or(i32::MAX)).collect();
        return distribute(&bases, &factors, &limits, delta, Direction::Grow);
    }

    if delta < 0 && items.iter().any(|i| i.shrink > 0) {
        let factors: Vec<u16> = items.iter().map(|i| i.shrink).collect();
        let limits: Vec<i32> = items.iter().map(|i| i.min.unwrap_or(0).max(0)).collect();
        return distribute(&bases, &factors, &limits, delta.saturating_neg(), Direction::Shrink);
    }

    bases
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Grow,
    Shrink,
}

/// Hand out `pool` cells in proportion to `factors`.
///
/// Shares are floored and the cells lost to rounding go one each to the
/// first items in sibling order. Items that hit their limit are pinned
/// there and leave the round together; what they could not take goes back
/// into the pool for the next round.
fn distribute(
    bases: &[i32],
    factors: &[u16],
    limits: &[i32],
    pool: i32,
    direction: Direction,
) -> Vec<i32> {
    let mut lengths = bases.to_vec();
    let can_move = |length: i32, limit: i32| match direction {
        Direction::Grow => length < limit,
        Direction::Shrink => length > limit,
    };

    let mut active: Vec<usize> = (0..bases.len())
        .filter(|&i| factors[i] > 0 && can_move(lengths[i], limits[i]))
        .collect();
    let mut pool = i64::from(pool);

    while pool > 0 && !active.is_empty() {
        let total: i64 = active.iter().map(|&i| i64::from(factors[i])).sum();
        let mut shares: Vec<i64> = active
            .iter()
            .map(|&i| pool * i64::from(factors[i]) / total)
            .collect();

        let handed: i64 = shares.iter().sum();
        let leftover = (pool - handed) as usize;
        for share in shares.iter_mut().take(leftover) {
            *share += 1;
        }

        let mut returned = 0i64;
        let mut still_active = Vec::with_capacity(active.len());

        for (&i, &share) in active.iter().zip(&shares) {
            let current = i64::from(lengths[i]);
            let limit = i64::from(limits[i]);
            let (proposed, room) = match direction {
                Direction::Grow => (current + share, limit - current),
                Direction::Shrink => (current - share, current - limit),
            };

            if share >= room {
                lengths[i] = limits[i];
                returned += share - room;
            } else {
                lengths[i] = proposed as i32;
                still_active.push(i);
            }
        }

        if still_active.len() == active.len() {
            break;
        }
        active = still_active;
        pool = returned;
    }

    lengths
}
