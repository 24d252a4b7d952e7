//! Lam Eval - evaluation of resolved flat ASTs.
//!
//! # Pipeline Position
//!
//! ```text
//! Parse → Flatten → Resolve → **Evaluate**
//! ```
//!
//! Input must be the output of `lam_resolve::resolve`: an `Identifier` found
//! here is reported as an internal error, not resolved on the fly.
//!
//! Evaluation threads a persistent [`Environment`] (binding node to value)
//! and a shared [`ValueStack`] of pending arguments. See [`Evaluator`] for
//! the application rules.

mod environment;
mod errors;
mod eval_mode;
mod evaluator;
mod operators;
mod value;
mod value_stack;

pub use environment::Environment;
pub use errors::{binary_type_mismatch, unary_type_mismatch, EvalError, EvalResult};
pub use eval_mode::EvalMode;
pub use evaluator::{evaluate, Evaluator};
pub use operators::{apply_binary, apply_unary};
pub use value::Value;
pub use value_stack::ValueStack;
