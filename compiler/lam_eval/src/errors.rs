//! Evaluation errors.
//!
//! Operand checks in `operators` build their errors with `Span::DUMMY`; the
//! evaluator attaches the builtin's span through [`EvalError::at`].

use lam_ir::{BuiltinOp, ErrorCode, NodeId, Span};

use crate::Value;

pub type EvalResult<T = Value> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("builtin `{op}` needs {needed} argument(s) but the stack holds {available}")]
    StackUnderflow {
        op: BuiltinOp,
        needed: usize,
        available: usize,
        span: Span,
    },

    #[error("lambda {id} evaluated with no argument on the stack")]
    MissingArgument { id: NodeId, span: Span },

    #[error("builtin `{op}` expects {expected}, got {found}")]
    TypeMismatch {
        op: BuiltinOp,
        expected: &'static str,
        found: String,
        span: Span,
    },

    #[error("evaluation nested deeper than {limit} at {id}")]
    RecursionLimit { limit: usize, id: NodeId },

    #[error("identifier `{name}` ({id}) reached the evaluator unresolved")]
    UnresolvedIdentifier { name: String, id: NodeId },

    #[error("reference {id} names binding {binding}, which has no value here")]
    UndefinedBinding { id: NodeId, binding: NodeId },

    #[error("{kind} node {id} cannot be evaluated")]
    NotAnExpression { id: NodeId, kind: &'static str },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::StackUnderflow { .. } => ErrorCode::E3001,
            EvalError::MissingArgument { .. } => ErrorCode::E3002,
            EvalError::TypeMismatch { .. } => ErrorCode::E3003,
            EvalError::RecursionLimit { .. } => ErrorCode::E3004,
            EvalError::UnresolvedIdentifier { .. } => ErrorCode::E9002,
            EvalError::UndefinedBinding { .. } => ErrorCode::E9003,
            EvalError::NotAnExpression { .. } => ErrorCode::E9006,
        }
    }

    /// Whether this error means an earlier pass let an invalid tree through.
    pub fn is_internal(&self) -> bool {
        self.code().is_internal()
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            EvalError::StackUnderflow { span, .. }
            | EvalError::MissingArgument { span, .. }
            | EvalError::TypeMismatch { span, .. } => Some(*span),
            _ => None,
        }
    }

    /// Attach a source span to an error built without one.
    #[must_use]
    pub fn at(mut self, at: Span) -> Self {
        if let EvalError::TypeMismatch { span, .. } = &mut self {
            if span.is_dummy() {
                *span = at;
            }
        }
        self
    }
}

/// A unary builtin was applied to an operand of the wrong kind.
pub fn unary_type_mismatch(op: BuiltinOp, operand: &Value) -> EvalError {
    EvalError::TypeMismatch {
        op,
        expected: expected_operands(op),
        found: operand.type_name().to_owned(),
        span: Span::DUMMY,
    }
}

/// A binary builtin was applied to operands of the wrong kinds.
pub fn binary_type_mismatch(op: BuiltinOp, first: &Value, second: &Value) -> EvalError {
    EvalError::TypeMismatch {
        op,
        expected: expected_operands(op),
        found: format!("{} and {}", first.type_name(), second.type_name()),
        span: Span::DUMMY,
    }
}

fn expected_operands(op: BuiltinOp) -> &'static str {
    use lam_ir::{Arity, OpFamily};
    match (op.family(), op.arity()) {
        (OpFamily::Equality, _) => "two operands of the same kind",
        (OpFamily::Comparison | OpFamily::Arithmetic, Arity::Binary) => "two numbers",
        (OpFamily::Comparison | OpFamily::Arithmetic, Arity::Unary) => "a number",
        (OpFamily::Logical, Arity::Binary) => "two bools",
        (OpFamily::Logical, Arity::Unary) => "a bool",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_internal_flag() {
        let underflow = EvalError::StackUnderflow {
            op: BuiltinOp::Add,
            needed: 2,
            available: 1,
            span: Span::DUMMY,
        };
        assert_eq!(underflow.code(), ErrorCode::E3001);
        assert!(!underflow.is_internal());

        let unresolved = EvalError::UnresolvedIdentifier {
            name: "x".to_owned(),
            id: NodeId::new(3),
        };
        assert_eq!(unresolved.code(), ErrorCode::E9002);
        assert!(unresolved.is_internal());
    }

    #[test]
    fn at_fills_only_missing_spans() {
        let err = binary_type_mismatch(BuiltinOp::Add, &Value::Bool(true), &Value::number(1.0));
        let placed = err.at(Span::new(4, 9));
        assert_eq!(placed.span(), Some(Span::new(4, 9)));
        assert_eq!(placed.clone().at(Span::new(0, 1)), placed);
    }

    #[test]
    fn mismatch_message_lists_operand_kinds() {
        let err = binary_type_mismatch(BuiltinOp::Lt, &Value::string("a"), &Value::number(1.0));
        assert_eq!(
            err.to_string(),
            "builtin `<` expects two numbers, got string and number"
        );
        let err = unary_type_mismatch(BuiltinOp::Not, &Value::number(0.0));
        assert_eq!(err.to_string(), "builtin `!` expects a bool, got number");
    }
}
