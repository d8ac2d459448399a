//! The AST data model the semantic analyzer checks.
//!
//! A real lexer and parser are out of scope for this repository; they are
//! external collaborators that would produce the tree this crate
//! describes. `glintc-ast` defines the node shape only (no lexing, no
//! parsing, no code generation), plus a [`builder`] module used by tests
//! and the driver's fixtures to assemble trees directly.

mod node;

pub mod builder;

pub use node::{BinOp, CompoundOp, Node, NodeId, NodeKind, UnOp};

/// An arena of [`Node`]s referenced by [`NodeId`].
///
/// The parser would normally own this; here it is produced either by
/// [`builder::NodeBuilder`] in tests or by decoding a fixture file in the
/// driver.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Ast {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a node into the arena, returning its id.
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Iterate the children of `id` in source order by walking the
    /// `next_sibling` chain starting at `first_child`.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            ast: self,
            next: self.get(id).first_child,
        }
    }
}

pub struct Children<'a> {
    ast: &'a Ast,
    next: Option<NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.ast.get(current).next_sibling;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glintc_util::span::Span;

    #[test]
    fn children_walk_sibling_chain_in_order() {
        let mut ast = Ast::new();
        let a = ast.push(Node::new(NodeKind::IntLit, Span::DUMMY));
        let b = ast.push(Node::new(NodeKind::IntLit, Span::DUMMY));
        let c = ast.push(Node::new(NodeKind::IntLit, Span::DUMMY));
        ast.get_mut(a).next_sibling = Some(b);
        ast.get_mut(b).next_sibling = Some(c);
        let parent = ast.push(Node::new(NodeKind::BlockStatement, Span::DUMMY));
        ast.get_mut(parent).first_child = Some(a);

        let kids: Vec<NodeId> = ast.children(parent).collect();
        assert_eq!(kids, vec![a, b, c]);
    }

    #[test]
    fn childless_node_has_no_children() {
        let mut ast = Ast::new();
        let leaf = ast.push(Node::new(NodeKind::IntLit, Span::DUMMY));
        assert_eq!(ast.children(leaf).count(), 0);
    }
}
