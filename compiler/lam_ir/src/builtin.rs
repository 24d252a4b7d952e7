//! Built-in operators.
//!
//! The global scope is exactly this fixed vocabulary. A name that spells one
//! of these operators and is not shadowed by a local binding resolves to
//! [`Node::Builtin`](crate::Node::Builtin).

use std::fmt;

/// A recognized built-in operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinOp {
    // Equality
    Eq,
    NotEq,

    // Comparison
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Neg,

    // Logical
    And,
    Or,
    Not,
}

/// Number of stack operands an operator consumes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            Arity::Unary => 1,
            Arity::Binary => 2,
        }
    }
}

/// Operator family, which decides the operand type check.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OpFamily {
    /// Operands of any kind, as long as both have the same kind.
    Equality,
    /// Numeric operands, boolean result.
    Comparison,
    /// Numeric operands, numeric result.
    Arithmetic,
    /// Boolean operands, boolean result.
    Logical,
}

impl BuiltinOp {
    /// Every built-in, in global-scope declaration order.
    pub const ALL: [BuiltinOp; 15] = [
        BuiltinOp::Eq,
        BuiltinOp::NotEq,
        BuiltinOp::Lt,
        BuiltinOp::Gt,
        BuiltinOp::LtEq,
        BuiltinOp::GtEq,
        BuiltinOp::Add,
        BuiltinOp::Sub,
        BuiltinOp::Mul,
        BuiltinOp::Div,
        BuiltinOp::Mod,
        BuiltinOp::Neg,
        BuiltinOp::And,
        BuiltinOp::Or,
        BuiltinOp::Not,
    ];

    /// Look up an operator by its source spelling.
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        let op = match spelling {
            "==" => Self::Eq,
            "!=" => Self::NotEq,
            "<" => Self::Lt,
            ">" => Self::Gt,
            "<=" => Self::LtEq,
            ">=" => Self::GtEq,
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "%" => Self::Mod,
            "~" => Self::Neg,
            "&&" => Self::And,
            "||" => Self::Or,
            "!" => Self::Not,
            _ => return None,
        };
        Some(op)
    }

    /// The source spelling of this operator.
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Neg => "~",
            Self::And => "&&",
            Self::Or => "||",
            Self::Not => "!",
        }
    }

    pub const fn arity(self) -> Arity {
        match self {
            Self::Neg | Self::Not => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    pub const fn family(self) -> OpFamily {
        match self {
            Self::Eq | Self::NotEq => OpFamily::Equality,
            Self::Lt | Self::Gt | Self::LtEq | Self::GtEq => OpFamily::Comparison,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod | Self::Neg => {
                OpFamily::Arithmetic
            }
            Self::And | Self::Or | Self::Not => OpFamily::Logical,
        }
    }
}

impl fmt::Display for BuiltinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}
