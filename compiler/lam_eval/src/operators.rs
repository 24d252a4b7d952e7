//! Builtin operator semantics.
//!
//! Numbers are IEEE-754 doubles throughout, so `/` and `%` by zero produce
//! infinities or NaN rather than errors. Equality compares two values of the
//! same kind; comparing across kinds is a type mismatch. `&&` and `||`
//! receive both operands already evaluated.

use lam_ir::BuiltinOp;

use crate::errors::{binary_type_mismatch, unary_type_mismatch, EvalResult};
use crate::Value;

/// Apply a unary builtin (`~` or `!`).
pub fn apply_unary(op: BuiltinOp, operand: Value) -> EvalResult {
    match (op, &operand) {
        (BuiltinOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (BuiltinOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        _ => Err(unary_type_mismatch(op, &operand)),
    }
}

/// Apply a binary builtin as `first op second`.
///
/// `first` is the operand applied first in the curried call, i.e. `a` in
/// `((op a) b)`.
pub fn apply_binary(op: BuiltinOp, first: Value, second: Value) -> EvalResult {
    use Value::{Bool, Number};

    match (op, &first, &second) {
        (BuiltinOp::Eq, a, b) if a.same_kind(b) => Ok(Bool(a == b)),
        (BuiltinOp::NotEq, a, b) if a.same_kind(b) => Ok(Bool(a != b)),

        (BuiltinOp::Add, Number(a), Number(b)) => Ok(Number(a + b)),
        (BuiltinOp::Sub, Number(a), Number(b)) => Ok(Number(a - b)),
        (BuiltinOp::Mul, Number(a), Number(b)) => Ok(Number(a * b)),
        (BuiltinOp::Div, Number(a), Number(b)) => Ok(Number(a / b)),
        (BuiltinOp::Mod, Number(a), Number(b)) => Ok(Number(a % b)),

        (BuiltinOp::Lt, Number(a), Number(b)) => Ok(Bool(a < b)),
        (BuiltinOp::Gt, Number(a), Number(b)) => Ok(Bool(a > b)),
        (BuiltinOp::LtEq, Number(a), Number(b)) => Ok(Bool(a <= b)),
        (BuiltinOp::GtEq, Number(a), Number(b)) => Ok(Bool(a >= b)),

        (BuiltinOp::And, Bool(a), Bool(b)) => Ok(Bool(*a && *b)),
        (BuiltinOp::Or, Bool(a), Bool(b)) => Ok(Bool(*a || *b)),

        _ => Err(binary_type_mismatch(op, &first, &second)),
    }
}
