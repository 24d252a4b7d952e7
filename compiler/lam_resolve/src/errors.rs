//! Resolution errors.

use lam_ir::{ErrorCode, FlatAstError, NodeId, Span};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A name that is neither bound by an enclosing lambda/let nor a built-in.
    #[error("unresolved identifier `{name}` at {span}")]
    UnresolvedIdentifier { name: String, id: NodeId, span: Span },

    #[error("binding slot {slot} of {parent} is not a binding")]
    NotABinding { parent: NodeId, slot: NodeId },

    /// An already-resolved reference whose binding does not enclose it.
    #[error("reference {id} targets binding {target}, which is not in scope there")]
    OutOfScopeReference { id: NodeId, target: NodeId },

    #[error(transparent)]
    Ast(#[from] FlatAstError),
}

impl ResolveError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ResolveError::UnresolvedIdentifier { .. } => ErrorCode::E2001,
            ResolveError::NotABinding { .. } => ErrorCode::E9004,
            ResolveError::OutOfScopeReference { .. } => ErrorCode::E9005,
            ResolveError::Ast(e) => e.code(),
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            ResolveError::UnresolvedIdentifier { span, .. } => Some(*span),
            ResolveError::NotABinding { .. }
            | ResolveError::OutOfScopeReference { .. }
            | ResolveError::Ast(_) => None,
        }
    }
}
