//! Structural errors raised while flattening.
//!
//! Every variant means the parser and the flattener disagree on the tree
//! contract. None of them is a user-facing program error.

use lam_ir::{ErrorCode, FlatAstError, NodeId, Span};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlattenError {
    #[error("{kind} node {id} at {span} has no flat counterpart")]
    UnsupportedNode {
        id: NodeId,
        kind: &'static str,
        span: Span,
    },

    #[error("node id {id} is outside the declared node count {node_count}")]
    IdOutOfRange { id: NodeId, node_count: usize },

    #[error("node id {id} is assigned to more than one tree node")]
    DuplicateId { id: NodeId },

    #[error("no tree node has id {id}")]
    MissingNode { id: NodeId },

    #[error("binding slot of {parent} holds {found} node {id}")]
    ExpectedBinding {
        parent: NodeId,
        id: NodeId,
        found: &'static str,
    },

    #[error("binding `{name}` ({id}) is not the binding slot of a lambda or let")]
    StrayBinding { id: NodeId, name: String },

    #[error(transparent)]
    Ast(#[from] FlatAstError),
}

impl FlattenError {
    pub fn code(&self) -> ErrorCode {
        match self {
            FlattenError::UnsupportedNode { .. } => ErrorCode::E1001,
            FlattenError::IdOutOfRange { .. } => ErrorCode::E1002,
            FlattenError::DuplicateId { .. } => ErrorCode::E1003,
            FlattenError::MissingNode { .. } => ErrorCode::E1004,
            FlattenError::ExpectedBinding { .. } => ErrorCode::E1005,
            FlattenError::StrayBinding { .. } => ErrorCode::E1006,
            FlattenError::Ast(e) => e.code(),
        }
    }

    /// Source span of the offending node, when the error has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            FlattenError::UnsupportedNode { span, .. } => Some(*span),
            _ => None,
        }
    }
}
