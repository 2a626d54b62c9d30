//! Style inheritance.
//!
//! Text color, background color, wrap mode and the ellipsis flag flow from
//! parent to child: an unset value takes the parent's resolved value. Walking
//! pre-order means a parent is always resolved before its children read it.

use crate::engine::{ElementTree, NodeId, visit_pre_order};
use crate::error::Result;

/// Fill every unset inheritable value from the parent.
///
/// The root's unset values stay unset. Running this twice gives the same
/// tree as running it once.
///
/// ```
/// use spark_flow::engine::ElementTree;
/// use spark_flow::style::{Style, resolve_styles};
/// use spark_flow::types::{Rgba, TextWrap};
///
/// let root_style = Style::new().text_color(Rgba::RED).text_wrap(TextWrap::None);
/// let mut tree = ElementTree::with_root_style("root", root_style);
/// let text = tree.add_text(tree.root(), "hi").unwrap();
///
/// resolve_styles(&mut tree).unwrap();
/// let style = &tree.get(text).unwrap().style;
/// assert_eq!(style.text_color, Some(Rgba::RED));
/// assert_eq!(style.text_wrap, Some(TextWrap::None));
/// ```
pub fn resolve_styles(tree: &mut ElementTree) -> Result<()> {
    let root = tree.root();
    visit_pre_order(tree, root, inherit_from_parent)
}

fn inherit_from_parent(tree: &mut ElementTree, id: NodeId) -> Result<()> {
    let Some(parent) = tree.element(id)?.parent() else {
        return Ok(());
    };

    let inherited = {
        let p = &tree.element(parent)?.style;
        (p.text_color, p.background_color, p.text_wrap, p.ellipsis)
    };

    let style = &mut tree.element_mut(id)?.style;
    let (text_color, background_color, text_wrap, ellipsis) = inherited;
    style.text_color = style.text_color.or(text_color);
    style.background_color = style.background_color.or(background_color);
    style.text_wrap = style.text_wrap.or(text_wrap);
    style.ellipsis = style.ellipsis.or(ellipsis);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;
    use crate::types::{Rgba, TextWrap};

    fn nested() -> (ElementTree, NodeId, NodeId, NodeId) {
        let root_style = Style::new()
            .text_color(Rgba::WHITE)
            .background_color(Rgba::BLACK)
            .ellipsis(true);
        let mut tree = ElementTree::with_root_style("root", root_style);
        let root = tree.root();
        let panel = tree
            .add_container(
                root,
                "panel",
                Style::new().text_color(Rgba::YELLOW).text_wrap(TextWrap::Character),
            )
            .unwrap();
        let label = tree.add_text(panel, "label").unwrap();
        let plain = tree.add_text(root, "plain").unwrap();
        (tree, panel, label, plain)
    }

    #[test]
    fn test_grandchild_inherits_through_chain() {
        let (mut tree, _, label, _) = nested();
        resolve_styles(&mut tree).unwrap();

        let s = &tree.get(label).unwrap().style;
        assert_eq!(s.text_color, Some(Rgba::YELLOW));
        assert_eq!(s.background_color, Some(Rgba::BLACK));
        assert_eq!(s.text_wrap, Some(TextWrap::Character));
        assert_eq!(s.ellipsis, Some(true));
    }

    #[test]
    fn test_own_values_win() {
        let (mut tree, panel, _, _) = nested();
        resolve_styles(&mut tree).unwrap();
        assert_eq!(tree.get(panel).unwrap().style.text_color, Some(Rgba::YELLOW));
    }

    #[test]
    fn test_root_unset_stays_unset() {
        let (mut tree, _, _, plain) = nested();
        resolve_styles(&mut tree).unwrap();

        let root_style = &tree.get(tree.root()).unwrap().style;
        assert_eq!(root_style.text_wrap, None);
        assert_eq!(tree.get(plain).unwrap().style.text_wrap, None);
    }

    #[test]
    fn test_non_inheritable_untouched() {
        let mut tree = ElementTree::with_root_style("root", Style::new().padding(2).gap(1));
        let child = tree.add_container(tree.root(), "child", Style::new()).unwrap();
        resolve_styles(&mut tree).unwrap();

        let s = &tree.get(child).unwrap().style;
        assert!(s.padding.is_unset());
        assert_eq!(s.gap, None);
    }

    #[test]
    fn test_idempotent() {
        let (mut tree, ..) = nested();
        resolve_styles(&mut tree).unwrap();
        let once: Vec<Style> = tree.ids().map(|id| tree.get(id).unwrap().style.clone()).collect();

        resolve_styles(&mut tree).unwrap();
        let twice: Vec<Style> = tree.ids().map(|id| tree.get(id).unwrap().style.clone()).collect();

        assert_eq!(once, twice);
    }
}
