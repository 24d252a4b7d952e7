//! Flat AST nodes.
//!
//! Children are referenced by [`NodeId`], never by pointer. The nesting of
//! `Lambda` and `Let` nodes still encodes the lexical structure of the
//! original tree through these ids.

use std::fmt;

use crate::{BuiltinOp, Literal, NodeId};

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Literal(Literal),
    /// Unresolved name. None survive a successful resolution pass.
    Identifier { name: String },
    /// Declaration site of a parameter or let-bound name.
    Binding { name: String },
    /// Resolved name, pointing at the `Binding` it refers to.
    Reference { target: NodeId },
    /// Resolved built-in operator.
    Builtin { op: BuiltinOp },
    Lambda { binding: NodeId, body: NodeId },
    Let {
        binding: NodeId,
        value: NodeId,
        body: NodeId,
    },
    Call { function: NodeId, argument: NodeId },
}

impl Node {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Literal(_) => "literal",
            Node::Identifier { .. } => "identifier",
            Node::Binding { .. } => "binding",
            Node::Reference { .. } => "reference",
            Node::Builtin { .. } => "builtin",
            Node::Lambda { .. } => "lambda",
            Node::Let { .. } => "let",
            Node::Call { .. } => "call",
        }
    }

    /// Child ids in evaluation-independent traversal order
    /// (`Lambda`: binding, body; `Let`: binding, value, body; `Call`: function, argument).
    ///
    /// A `Reference` target is not a child.
    pub fn children(&self) -> impl Iterator<Item = NodeId> {
        let ids: [Option<NodeId>; 3] = match *self {
            Node::Lambda { binding, body } => [Some(binding), Some(body), None],
            Node::Let {
                binding,
                value,
                body,
            } => [Some(binding), Some(value), Some(body)],
            Node::Call { function, argument } => [Some(function), Some(argument), None],
            Node::Literal(_)
            | Node::Identifier { .. }
            | Node::Binding { .. }
            | Node::Reference { .. }
            | Node::Builtin { .. } => [None; 3],
        };
        ids.into_iter().flatten()
    }

    /// The binding slot of a `Lambda` or `Let`.
    pub fn binding_slot(&self) -> Option<NodeId> {
        match *self {
            Node::Lambda { binding, .. } | Node::Let { binding, .. } => Some(binding),
            _ => None,
        }
    }

    pub fn is_binding(&self) -> bool {
        matches!(self, Node::Binding { .. })
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(lit) => write!(f, "literal {lit}"),
            Node::Identifier { name } => write!(f, "identifier {name}"),
            Node::Binding { name } => write!(f, "binding {name}"),
            Node::Reference { target } => write!(f, "reference {target}"),
            Node::Builtin { op } => write!(f, "builtin {op}"),
            Node::Lambda { binding, body } => write!(f, "lambda {binding} {body}"),
            Node::Let {
                binding,
                value,
                body,
            } => write!(f, "let {binding} {value} {body}"),
            Node::Call { function, argument } => write!(f, "call {function} {argument}"),
        }
    }
}
