//! The flat, index-addressed AST.
//!
//! Struct-of-arrays layout: `nodes` and `spans` are parallel arrays indexed
//! by [`NodeId`]. A node's id always equals its position, and the program
//! root sits at [`NodeId::ROOT`].
//!
//! The only way to build a `FlatAst` is [`FlatAst::from_parts`], which checks
//! the structural invariants once so that consumers can index freely.

use std::fmt;
use std::ops::Index;

use crate::{ErrorCode, Node, NodeId, Span};

/// Structural invariant violated by a candidate flat AST.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlatAstError {
    #[error("flat AST has no root node")]
    Empty,

    #[error("flat AST has {nodes} nodes but {spans} spans")]
    LengthMismatch { nodes: usize, spans: usize },

    #[error("flat AST has {len} nodes, more than a node id can address")]
    TooLarge { len: usize },

    #[error("node {parent} refers to {child}, outside the {len}-node array")]
    DanglingChild {
        parent: NodeId,
        child: NodeId,
        len: usize,
    },

    #[error("binding slot {child} of {parent} holds a {found} node")]
    NotABinding {
        parent: NodeId,
        child: NodeId,
        found: &'static str,
    },

    #[error("reference {id} targets {target}, which is not a binding")]
    BadReference { id: NodeId, target: NodeId },

    #[error("node {id} has {parents} parent(s); the root needs none and every other node one")]
    NotATree { id: NodeId, parents: usize },

    #[error("node {id} is not reachable from the root")]
    Unreachable { id: NodeId },
}

impl FlatAstError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::E9001
    }
}

/// Flat array of nodes addressed by id.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatAst {
    nodes: Vec<Node>,
    spans: Vec<Span>,
}

impl FlatAst {
    /// Assemble a flat AST from parallel node and span arrays.
    ///
    /// Checks that every child id and reference target is in bounds, that
    /// every `Lambda`/`Let` binding slot holds a `Binding`, and that every
    /// `Reference` targets a `Binding`. The child links must form a single
    /// tree rooted at [`NodeId::ROOT`]: no node is shared, no cycle exists,
    /// and every node is reachable.
    pub fn from_parts(nodes: Vec<Node>, spans: Vec<Span>) -> Result<Self, FlatAstError> {
        if nodes.is_empty() {
            return Err(FlatAstError::Empty);
        }
        if nodes.len() != spans.len() {
            return Err(FlatAstError::LengthMismatch {
                nodes: nodes.len(),
                spans: spans.len(),
            });
        }
        if NodeId::from_index(nodes.len() - 1).is_none() {
            return Err(FlatAstError::TooLarge { len: nodes.len() });
        }

        let ast = FlatAst { nodes, spans };
        for (id, node) in ast.iter() {
            ast.check_node(id, node)?;
        }
        ast.check_tree()?;
        Ok(ast)
    }

    fn check_tree(&self) -> Result<(), FlatAstError> {
        let mut parents = vec![0usize; self.len()];
        for (_, node) in self.iter() {
            for child in node.children() {
                parents[child.index()] += 1;
            }
        }
        for (id, _) in self.iter() {
            let expected = usize::from(id != self.root());
            if parents[id.index()] != expected {
                return Err(FlatAstError::NotATree {
                    id,
                    parents: parents[id.index()],
                });
            }
        }

        // With one parent per non-root node, the walk visits each node once.
        let mut reached = vec![false; self.len()];
        let mut pending = vec![self.root()];
        while let Some(id) = pending.pop() {
            reached[id.index()] = true;
            pending.extend(self[id].children());
        }
        match self.iter().find(|(id, _)| !reached[id.index()]) {
            Some((id, _)) => Err(FlatAstError::Unreachable { id }),
            None => Ok(()),
        }
    }

    fn check_node(&self, id: NodeId, node: &Node) -> Result<(), FlatAstError> {
        for child in node.children() {
            if self.get(child).is_none() {
                return Err(FlatAstError::DanglingChild {
                    parent: id,
                    child,
                    len: self.len(),
                });
            }
        }
        if let Some(slot) = node.binding_slot() {
            let found = &self[slot];
            if !found.is_binding() {
                return Err(FlatAstError::NotABinding {
                    parent: id,
                    child: slot,
                    found: found.kind_name(),
                });
            }
        }
        if let Node::Reference { target } = *node {
            match self.get(target) {
                Some(Node::Binding { .. }) => {}
                Some(_) => return Err(FlatAstError::BadReference { id, target }),
                None => {
                    return Err(FlatAstError::DanglingChild {
                        parent: id,
                        child: target,
                        len: self.len(),
                    })
                }
            }
        }
        Ok(())
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a flat AST has at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The evaluation entry point.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.spans.get(id.index()).copied().unwrap_or_default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Name declared at `id`, if it is a `Binding`.
    pub fn binding_name(&self, id: NodeId) -> Option<&str> {
        match self.get(id) {
            Some(Node::Binding { name }) => Some(name),
            _ => None,
        }
    }

    /// All `(id, node)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, node)| {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "from_parts rejects arrays longer than u32::MAX"
            )]
            let id = NodeId::new(i as u32);
            (id, node)
        })
    }

    /// Ids of `Identifier` nodes still awaiting resolution.
    pub fn unresolved(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .filter(|(_, node)| matches!(node, Node::Identifier { .. }))
            .map(|(id, _)| id)
    }

    pub fn is_resolved(&self) -> bool {
        self.unresolved().next().is_none()
    }
}

impl Index<NodeId> for FlatAst {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl fmt::Display for FlatAst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, node) in self.iter() {
            writeln!(f, "{id} {node}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
