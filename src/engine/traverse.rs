//! Iterative tree walks.
//!
//! Walks follow the sibling links directly, so they need no stack and never
//! recurse. A visitor receives the tree mutably and may change anything
//! except the links. The first error a visitor returns stops the walk.

use super::element::NodeId;
use super::tree::ElementTree;
use crate::error::LayoutError;

/// Visit `start` and its descendants, calling `pre` on the way down and
/// `post` on the way up.
pub fn visit_pre_post<E, Pre, Post>(
    tree: &mut ElementTree,
    start: NodeId,
    mut pre: Pre,
    mut post: Post,
) -> Result<(), E>
where
    E: From<LayoutError>,
    Pre: FnMut(&mut ElementTree, NodeId) -> Result<(), E>,
    Post: FnMut(&mut ElementTree, NodeId) -> Result<(), E>,
{
    tree.element(start)?;

    let mut node = start;
    'descend: loop {
        pre(tree, node)?;
        if let Some(child) = tree.element(node)?.first_child() {
            node = child;
            continue;
        }

        loop {
            post(tree, node)?;
            if node == start {
                return Ok(());
            }

            let element = tree.element(node)?;
            if let Some(next) = element.next_sibling() {
                node = next;
                continue 'descend;
            }
            match element.parent() {
                Some(parent) => node = parent,
                None => return Ok(()),
            }
        }
    }
}

/// Parents before children, siblings in order.
pub fn visit_pre_order<E, F>(tree: &mut ElementTree, start: NodeId, visit: F) -> Result<(), E>
where
    E: From<LayoutError>,
    F: FnMut(&mut ElementTree, NodeId) -> Result<(), E>,
{
    visit_pre_post(tree, start, visit, |_, _| Ok(()))
}

/// Children before parents, siblings in order.
pub fn visit_post_order<E, F>(tree: &mut ElementTree, start: NodeId, visit: F) -> Result<(), E>
where
    E: From<LayoutError>,
    F: FnMut(&mut ElementTree, NodeId) -> Result<(), E>,
{
    visit_pre_post(tree, start, |_, _| Ok(()), visit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    /// root
    /// ├── a
    /// │   ├── a1
    /// │   └── a2
    /// └── b
    fn sample() -> (ElementTree, Vec<NodeId>) {
        let mut tree = ElementTree::new("root");
        let root = tree.root();
        let a = tree.add_container(root, "a", Style::new()).unwrap();
        let a1 = tree.add_text(a, "a1").unwrap();
        let a2 = tree.add_text(a, "a2").unwrap();
        let b = tree.add_container(root, "b", Style::new()).unwrap();
        (tree, vec![root, a, a1, a2, b])
    }

    #[test]
    fn test_pre_order() {
        let (mut tree, ids) = sample();
        let mut seen = Vec::new();
        visit_pre_order::<LayoutError, _>(&mut tree, ids[0], |_, id| {
            seen.push(id);
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, vec![ids[0], ids[1], ids[2], ids[3], ids[4]]);
    }

    #[test]
    fn test_post_order() {
        let (mut tree, ids) = sample();
        let mut seen = Vec::new();
        visit_post_order::<LayoutError, _>(&mut tree, ids[0], |_, id| {
            seen.push(id);
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, vec![ids[2], ids[3], ids[1], ids[4], ids[0]]);
    }

    #[test]
    fn test_pre_post_interleaving() {
        let (mut tree, ids) = sample();
        let log = std::cell::RefCell::new(Vec::new());
        visit_pre_post::<LayoutError, _, _>(
            &mut tree,
            ids[1],
            |_, id| {
                log.borrow_mut().push(("pre", id));
                Ok(())
            },
            |_, id| {
                log.borrow_mut().push(("post", id));
                Ok(())
            },
        )
        .unwrap();
        assert_eq!(
            log.into_inner(),
            vec![
                ("pre", ids[1]),
                ("pre", ids[2]),
                ("post", ids[2]),
                ("pre", ids[3]),
                ("post", ids[3]),
                ("post", ids[1]),
            ]
        );
    }

    #[test]
    fn test_subtree_walk_stays_inside() {
        let (mut tree, ids) = sample();
        let mut seen = Vec::new();
        visit_pre_order::<LayoutError, _>(&mut tree, ids[2], |_, id| {
            seen.push(id);
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, vec![ids[2]]);
    }

    #[test]
    fn test_first_error_stops_walk() {
        let (mut tree, ids) = sample();
        let mut seen = Vec::new();
        let stop_at = ids[2];
        let result = visit_pre_order(&mut tree, ids[0], |_, id| {
            seen.push(id);
            if id == stop_at {
                Err(LayoutError::NodeNotFound(id))
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err(LayoutError::NodeNotFound(stop_at)));
        assert_eq!(seen, vec![ids[0], ids[1], ids[2]]);
    }

    #[test]
    fn test_visitor_can_mutate() {
        let (mut tree, ids) = sample();
        visit_pre_order::<LayoutError, _>(&mut tree, ids[0], |tree, id| {
            tree.element_mut(id)?.reflow_width = Some(3);
            Ok(())
        })
        .unwrap();
        assert!(ids.iter().all(|id| tree.get(*id).unwrap().reflow_width == Some(3)));
    }
}
