//! Error codes for every pipeline failure.
//!
//! Each code is a unique identifier (e.g., `E2001`) with the first digit
//! indicating the phase that raised it.

use std::fmt;

/// Error codes for all pipeline failures.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Flattening (structural) errors
/// - E2xxx: Resolution errors
/// - E3xxx: Evaluation errors
/// - E9xxx: Internal invariant violations
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Flattening Errors (E1xxx)
    /// Tree node kind has no flat counterpart
    E1001,
    /// Node id outside the declared node count
    E1002,
    /// Two tree nodes share an id
    E1003,
    /// Declared node count exceeds the nodes present
    E1004,
    /// Binding position holds a non-binding node
    E1005,
    /// Binding node outside a binding position
    E1006,

    // Resolution Errors (E2xxx)
    /// Name is neither bound nor a built-in
    E2001,

    // Evaluation Errors (E3xxx)
    /// Built-in applied to too few arguments
    E3001,
    /// Lambda evaluated with no pending argument
    E3002,
    /// Built-in operand of the wrong kind
    E3003,
    /// Evaluation nested deeper than the configured limit
    E3004,

    // Internal Errors (E9xxx)
    /// Flat AST violates a structural invariant
    E9001,
    /// Unresolved identifier reached the evaluator
    E9002,
    /// Reference to a binding that is not in scope at runtime
    E9003,
    /// Lambda or let binding slot is not a binding node
    E9004,
    /// Existing reference whose binding does not enclose it
    E9005,
    /// Node that is not an expression reached the evaluator
    E9006,
    /// Resolved tree rejected by the post-resolution validator
    E9007,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
            ErrorCode::E9003 => "E9003",
            ErrorCode::E9004 => "E9004",
            ErrorCode::E9005 => "E9005",
            ErrorCode::E9006 => "E9006",
            ErrorCode::E9007 => "E9007",
        }
    }

    /// One-line description.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "tree node kind has no flat counterpart",
            ErrorCode::E1002 => "node id outside the declared node count",
            ErrorCode::E1003 => "two tree nodes share an id",
            ErrorCode::E1004 => "declared node count exceeds the nodes present",
            ErrorCode::E1005 => "binding position holds a non-binding node",
            ErrorCode::E1006 => "binding node outside a binding position",
            ErrorCode::E2001 => "name is neither bound nor a built-in",
            ErrorCode::E3001 => "built-in applied to too few arguments",
            ErrorCode::E3002 => "lambda evaluated with no pending argument",
            ErrorCode::E3003 => "built-in operand of the wrong kind",
            ErrorCode::E3004 => "evaluation nested deeper than the configured limit",
            ErrorCode::E9001 => "flat AST violates a structural invariant",
            ErrorCode::E9002 => "unresolved identifier reached the evaluator",
            ErrorCode::E9003 => "reference to a binding that is not in scope at runtime",
            ErrorCode::E9004 => "lambda or let binding slot is not a binding node",
            ErrorCode::E9005 => "reference targets a binding that does not enclose it",
            ErrorCode::E9006 => "node that is not an expression reached the evaluator",
            ErrorCode::E9007 => "resolved tree failed post-resolution validation",
        }
    }

    /// Whether this code marks a broken invariant rather than a bad program.
    pub const fn is_internal(self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1006
                | ErrorCode::E9001
                | ErrorCode::E9002
                | ErrorCode::E9003
                | ErrorCode::E9004
                | ErrorCode::E9005
                | ErrorCode::E9006
                | ErrorCode::E9007
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
