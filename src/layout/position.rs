//! Phase 4: positioning.
//!
//! Children are placed in sibling order inside their container's inner box:
//! justification spreads leftover main-axis space, alignment places each
//! child across the axis.

use tracing::trace;

use crate::engine::{ElementTree, NodeId};
use crate::error::Result;
use crate::types::{Align, Axis, Justify, Size};

/// Place every child of container `id`. Children must already have their
/// final size.
pub(crate) fn position_children(tree: &mut ElementTree, id: NodeId) -> Result<()> {
    let element = tree.element(id)?;
    if element.child_count() == 0 {
        return Ok(());
    }

    let style = &element.style;
    let axis = style.main_axis();
    let gap = style.gap_cells();
    let justify = style.justification();
    let align = style.alignment();

    let edges = style.edges();
    let origin = element.position.offset(Axis::Horizontal, edges.left, edges.top);
    let inner = Size::new(
        element.final_size.width.saturating_sub(edges.horizontal()),
        element.final_size.height.saturating_sub(edges.vertical()),
    )
    .non_negative();

    let mut children = Vec::with_capacity(element.child_count());
    for child in tree.children(id) {
        children.push((child, tree.element(child)?.final_size));
    }

    let count = children.len() as i32;
    let used = children
        .iter()
        .fold(gap.saturating_mul(count - 1), |acc, (_, size)| {
            acc.saturating_add(size.main(axis))
        });
    let remaining = inner.main(axis).saturating_sub(used).max(0);

    let (mut main_offset, extra_gap) = justify_offsets(justify, remaining, count);

    for (child, size) in children {
        let cross_offset = align_offset(align, inner.cross(axis), size.cross(axis));
        let position = origin.offset(axis, main_offset, cross_offset);
        trace!(node = %child, x = position.x, y = position.y, "position");
        tree.element_mut(child)?.position = position;

        main_offset = main_offset
            .saturating_add(size.main(axis))
            .saturating_add(gap)
            .saturating_add(extra_gap);
    }

    Ok(())
}

/// Leading offset and extra spacing between items.
pub(crate) fn justify_offsets(justify: Justify, remaining: i32, count: i32) -> (i32, i32) {
    match justify {
        Justify::Start => (0, 0),
        Justify::Center => (remaining / 2, 0),
        Justify::End => (remaining, 0),
        Justify::SpaceBetween => {
            if count > 1 {
                (0, remaining / (count - 1))
            } else {
                (0, 0)
            }
        }
        Justify::SpaceAround => {
            let around = if count > 0 { remaining / count } else { 0 };
            (around / 2, around)
        }
        Justify::SpaceEvenly => {
            let even = remaining / (count + 1);
            (even, even)
        }
    }
}

/// Cross-axis offset of one child.
pub(crate) fn align_offset(align: Align, inner_cross: i32, child_cross: i32) -> i32 {
    match align {
        Align::Stretch | Align::Start => 0,
        Align::Center => ((inner_cross - child_cross) / 2).max(0),
        Align::End => (inner_cross - child_cross).max(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BorderStyle, Style};
    use crate::types::Point;

    fn row_with(style: Style, width: i32, height: i32, kids: &[(i32, i32)]) -> (ElementTree, Vec<NodeId>) {
        let mut tree = ElementTree::with_root_style("root", style);
        let root = tree.root();
        tree.get_mut(root).unwrap().final_size = Size::new(width, height);
        let ids = kids
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| {
                let id = tree.add_container(root, format!("k{i}"), Style::new()).unwrap();
                tree.get_mut(id).unwrap().final_size = Size::new(w, h);
                id
            })
            .collect();
        (tree, ids)
    }

    fn positions(tree: &ElementTree, ids: &[NodeId]) -> Vec<Point> {
        ids.iter().map(|id| tree.get(*id).unwrap().position).collect()
    }

    #[test]
    fn test_justify_offsets_table() {
        assert_eq!(justify_offsets(Justify::Start, 10, 3), (0, 0));
        assert_eq!(justify_offsets(Justify::Center, 10, 3), (5, 0));
        assert_eq!(justify_offsets(Justify::End, 10, 3), (10, 0));
        assert_eq!(justify_offsets(Justify::SpaceBetween, 10, 3), (0, 5));
        assert_eq!(justify_offsets(Justify::SpaceAround, 12, 3), (2, 4));
        assert_eq!(justify_offsets(Justify::SpaceEvenly, 12, 3), (3, 3));
    }

    #[test]
    fn test_space_between_single_child() {
        assert_eq!(justify_offsets(Justify::SpaceBetween, 10, 1), (0, 0));
        assert_eq!(justify_offsets(Justify::SpaceBetween, 10, 0), (0, 0));
        assert_eq!(justify_offsets(Justify::SpaceAround, 10, 0), (0, 0));
    }

    #[test]
    fn test_align_offsets() {
        assert_eq!(align_offset(Align::Stretch, 10, 4), 0);
        assert_eq!(align_offset(Align::Start, 10, 4), 0);
        assert_eq!(align_offset(Align::Center, 10, 4), 3);
        assert_eq!(align_offset(Align::End, 10, 4), 6);
        assert_eq!(align_offset(Align::End, 3, 4), 0);
    }

    #[test]
    fn test_start_packs_with_gap() {
        let (mut tree, ids) = row_with(Style::new().gap(2), 20, 5, &[(3, 1), (4, 1), (5, 1)]);
        let root = tree.root();
        position_children(&mut tree, root).unwrap();
        assert_eq!(
            positions(&tree, &ids),
            vec![Point::new(0, 0), Point::new(5, 0), Point::new(11, 0)]
        );
    }

    #[test]
    fn test_space_between_in_row() {
        let style = Style::new().justify(Justify::SpaceBetween);
        let (mut tree, ids) = row_with(style, 20, 1, &[(2, 1), (2, 1), (2, 1)]);
        let root = tree.root();
        position_children(&mut tree, root).unwrap();
        assert_eq!(
            positions(&tree, &ids),
            vec![Point::new(0, 0), Point::new(9, 0), Point::new(18, 0)]
        );
    }

    #[test]
    fn test_vertical_center_center_inside_border() {
        let style = Style::new()
            .axis(Axis::Vertical)
            .justify(Justify::Center)
            .align(Align::Center)
            .border(BorderStyle::Single);
        let (mut tree, ids) = row_with(style, 12, 8, &[(4, 2)]);
        let root = tree.root();
        position_children(&mut tree, root).unwrap();
        // inner box 10x6 at (1,1)
        assert_eq!(positions(&tree, &ids), vec![Point::new(4, 3)]);
    }

    #[test]
    fn test_overflow_treated_as_no_space() {
        let style = Style::new().justify(Justify::End);
        let (mut tree, ids) = row_with(style, 5, 1, &[(4, 1), (4, 1)]);
        let root = tree.root();
        position_children(&mut tree, root).unwrap();
        assert_eq!(positions(&tree, &ids), vec![Point::new(0, 0), Point::new(4, 0)]);
    }

    #[test]
    fn test_offsets_relative_to_parent_position() {
        let (mut tree, ids) = row_with(Style::new().padding(1), 10, 4, &[(2, 1)]);
        let root = tree.root();
        tree.get_mut(root).unwrap().position = Point::new(7, 3);
        position_children(&mut tree, root).unwrap();
        assert_eq!(positions(&tree, &ids), vec![Point::new(8, 4)]);
    }
}
