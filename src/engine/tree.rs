//! Arena-backed element tree.
//!
//! Elements live in a `Vec` and link to each other by [`NodeId`]. Siblings
//! form a doubly linked chain under their parent, so appending and removing
//! a child never moves other elements.
//!
//! ```
//! use spark_flow::engine::ElementTree;
//! use spark_flow::style::Style;
//!
//! let mut tree = ElementTree::new("root");
//! let root = tree.root();
//! let list = tree.add_container(root, "list", Style::new()).unwrap();
//! tree.add_text(list, "one").unwrap();
//! tree.add_text(list, "two").unwrap();
//!
//! assert_eq!(tree.children(list).count(), 2);
//! assert_eq!(tree.find("list"), Some(list));
//! ```

use std::collections::HashMap;

use tracing::trace;

use super::element::{Element, ElementKind, Geometry, NodeId};
use crate::error::{LayoutError, Result};
use crate::style::Style;
use crate::types::Size;

#[derive(Debug, Clone)]
pub struct ElementTree {
    elements: Vec<Element>,
    root: NodeId,
    /// Identifier to node.
    index: HashMap<String, NodeId>,
}

impl ElementTree {
    /// A tree holding a single root container.
    pub fn new(root_identifier: impl Into<String>) -> Self {
        Self::with_root_style(root_identifier, Style::default())
    }

    pub fn with_root_style(root_identifier: impl Into<String>, style: Style) -> Self {
        let identifier = root_identifier.into();
        let root = NodeId(0);
        let mut index = HashMap::new();
        index.insert(identifier.clone(), root);

        Self {
            elements: vec![Element::container(identifier, style)],
            root,
            index,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of elements in the arena, detached ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false: a tree has at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// Like [`get`](Self::get), failing with `NodeNotFound`.
    pub fn element(&self, id: NodeId) -> Result<&Element> {
        self.get(id).ok_or(LayoutError::NodeNotFound(id))
    }

    /// Like [`get_mut`](Self::get_mut), failing with `NodeNotFound`.
    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut Element> {
        self.get_mut(id).ok_or(LayoutError::NodeNotFound(id))
    }

    /// Every node in the arena, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.elements.len()).map(NodeId)
    }

    // =========================================================================
    // Building
    // =========================================================================

    /// Add a detached element to the arena.
    pub fn insert(&mut self, mut element: Element) -> Result<NodeId> {
        match (&element.identifier, element.kind) {
            (None, ElementKind::Container) => return Err(LayoutError::MissingIdentifier),
            (Some(identifier), _) if self.index.contains_key(identifier) => {
                return Err(LayoutError::DuplicateIdentifier(identifier.clone()));
            }
            _ => {}
        }

        let id = NodeId(self.elements.len());
        if let Some(identifier) = &element.identifier {
            self.index.insert(identifier.clone(), id);
        }

        element.parent = None;
        element.first_child = None;
        element.last_child = None;
        element.previous = None;
        element.next = None;
        element.child_count = 0;
        self.elements.push(element);

        Ok(id)
    }

    /// Add `element` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> Result<NodeId> {
        let parent_element = self.element(parent)?;
        if parent_element.is_text() {
            return Err(LayoutError::TextHasChildren(parent));
        }

        let id = self.insert(element)?;
        self.link_last(parent, id);
        Ok(id)
    }

    pub fn add_container(
        &mut self,
        parent: NodeId,
        identifier: impl Into<String>,
        style: Style,
    ) -> Result<NodeId> {
        self.append(parent, Element::container(identifier, style))
    }

    pub fn add_text(&mut self, parent: NodeId, text: impl Into<String>) -> Result<NodeId> {
        self.append(parent, Element::text(text, Style::default()))
    }

    pub fn add_styled_text(
        &mut self,
        parent: NodeId,
        text: impl Into<String>,
        style: Style,
    ) -> Result<NodeId> {
        self.append(parent, Element::text(text, style))
    }

    // =========================================================================
    // Relinking
    // =========================================================================

    /// Move `child` to the end of `parent`'s children.
    ///
    /// A child already attached elsewhere is detached first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.element(parent)?.is_text() {
            return Err(LayoutError::TextHasChildren(parent));
        }
        self.element(child)?;

        if child == self.root || self.is_ancestor_or_self(child, parent) {
            return Err(LayoutError::CycleDetected { parent, child });
        }

        self.detach(child);
        self.link_last(parent, child);
        trace!(%parent, %child, "append_child");
        Ok(())
    }

    /// Detach `child` from `parent`. No-op if it is not a child of `parent`.
    ///
    /// The detached element stays in the arena, keeping its identifier.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.element(parent)?;
        if self.element(child)?.parent != Some(parent) {
            return Ok(());
        }

        self.detach(child);
        trace!(%parent, %child, "remove_child");
        Ok(())
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.get(id).and_then(|e| e.parent);
        }
        false
    }

    fn link_last(&mut self, parent: NodeId, child: NodeId) {
        let previous = self.elements[parent.0].last_child;

        {
            let c = &mut self.elements[child.0];
            c.parent = Some(parent);
            c.previous = previous;
            c.next = None;
        }

        match previous {
            Some(prev) => self.elements[prev.0].next = Some(child),
            None => self.elements[parent.0].first_child = Some(child),
        }

        let p = &mut self.elements[parent.0];
        p.last_child = Some(child);
        p.child_count += 1;
    }

    fn detach(&mut self, child: NodeId) {
        let (parent, previous, next) = {
            let c = &self.elements[child.0];
            (c.parent, c.previous, c.next)
        };
        let Some(parent) = parent else {
            return;
        };

        match previous {
            Some(prev) => self.elements[prev.0].next = next,
            None => self.elements[parent.0].first_child = next,
        }
        match next {
            Some(n) => self.elements[n.0].previous = previous,
            None => self.elements[parent.0].last_child = previous,
        }
        self.elements[parent.0].child_count -= 1;

        let c = &mut self.elements[child.0];
        c.parent = None;
        c.previous = None;
        c.next = None;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Children of `id` in sibling order. Empty for unknown nodes.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).and_then(|e| e.first_child),
        }
    }

    /// Node registered under `identifier`.
    pub fn find(&self, identifier: &str) -> Option<NodeId> {
        self.index.get(identifier).copied()
    }

    /// Final position and size of the element registered under `identifier`.
    pub fn geometry(&self, identifier: &str) -> Option<Geometry> {
        self.find(identifier)
            .and_then(|id| self.get(id))
            .map(Element::geometry)
    }

    /// Wrapped text of a text element from the last solve.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|e| e.text.as_deref())
    }

    /// Give the root the box it lays out into.
    pub fn set_viewport(&mut self, size: Size) {
        self.elements[self.root.0].available_size = size;
    }

    pub fn viewport(&self) -> Size {
        self.elements[self.root.0].available_size
    }

    /// Forget every reflow width recorded by earlier solves.
    pub(crate) fn clear_reflow_widths(&mut self) {
        for element in &mut self.elements {
            element.reflow_width = None;
        }
    }
}

/// Iterator over a node's children.
pub struct Children<'a> {
    tree: &'a ElementTree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.get(current).and_then(|e| e.next);
        Some(current)
    }
}
