//! Helpers for assembling [`Ast`] trees by hand.
//!
//! Used by `glintc-sem`'s tests and `glintc-drv`'s fixtures to stand in
//! for a real parser: call [`NodeBuilder::node`] bottom-up, threading
//! child ids back up to their parents, then [`NodeBuilder::finish`].
//!
//! # Examples
//!
//! ```
//! use glintc_ast::builder::NodeBuilder;
//! use glintc_ast::NodeKind;
//! use glintc_util::span::Span;
//!
//! let mut b = NodeBuilder::new();
//! let lit = b.node(NodeKind::IntLit, Span::DUMMY, vec![]);
//! let name = Span::new(4, 5, 1, 5);
//! let decl = b.node(
//!     NodeKind::IntVariableDefinition { name_span: name },
//!     Span::DUMMY,
//!     vec![lit],
//! );
//! let ast = b.finish(decl);
//! assert_eq!(ast.children(decl).count(), 1);
//! ```

use crate::{Ast, Node, NodeId, NodeKind};
use glintc_util::span::Span;

#[derive(Default)]
pub struct NodeBuilder {
    ast: Ast,
}

impl NodeBuilder {
    pub fn new() -> Self {
        Self { ast: Ast::new() }
    }

    /// Push a node of `kind` at `span` whose children are `children`, in
    /// order. Returns the new node's id.
    pub fn node(&mut self, kind: NodeKind, span: Span, children: Vec<NodeId>) -> NodeId {
        let id = self.ast.push(Node::new(kind, span));
        let mut iter = children.into_iter();
        if let Some(first) = iter.next() {
            self.ast.get_mut(id).first_child = Some(first);
            let mut prev = first;
            for next in iter {
                self.ast.get_mut(prev).next_sibling = Some(next);
                prev = next;
            }
        }
        id
    }

    /// Mark `root` as the tree's root and return the assembled [`Ast`].
    pub fn finish(mut self, root: NodeId) -> Ast {
        self.ast.set_root(root);
        self.ast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_without_children_has_no_first_child() {
        let mut b = NodeBuilder::new();
        let id = b.node(NodeKind::IntLit, Span::DUMMY, vec![]);
        let ast = b.finish(id);
        assert!(ast.get(id).first_child.is_none());
    }

    #[test]
    fn node_links_children_in_order() {
        let mut b = NodeBuilder::new();
        let a = b.node(NodeKind::IntLit, Span::DUMMY, vec![]);
        let c = b.node(NodeKind::IntLit, Span::DUMMY, vec![]);
        let parent = b.node(NodeKind::ArgumentList, Span::DUMMY, vec![a, c]);
        let ast = b.finish(parent);
        assert_eq!(ast.children(parent).collect::<Vec<_>>(), vec![a, c]);
    }
}
