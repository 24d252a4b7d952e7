//! The driver's unified error type.

use lam_eval::EvalError;
use lam_flatten::FlattenError;
use lam_ir::{ErrorCode, Span};
use lam_resolve::{ResolveError, Violation};

/// Any failure from compiling or running a program.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Flatten(#[from] FlattenError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    /// The post-resolution validator rejected the resolver's output.
    #[error("resolved tree failed validation ({} violation(s)), first: {}", .0.len(), first(.0))]
    Invalid(Vec<Violation>),
}

fn first(violations: &[Violation]) -> String {
    violations
        .first()
        .map_or_else(|| "none".to_owned(), ToString::to_string)
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Flatten(e) => e.code(),
            Error::Resolve(e) => e.code(),
            Error::Eval(e) => e.code(),
            Error::Invalid(_) => ErrorCode::E9007,
        }
    }

    /// Whether the error points at a bug in an earlier phase rather than
    /// at the program.
    pub fn is_internal(&self) -> bool {
        self.code().is_internal()
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Flatten(e) => e.span(),
            Error::Resolve(e) => e.span(),
            Error::Eval(e) => e.span(),
            Error::Invalid(_) => None,
        }
    }
}
