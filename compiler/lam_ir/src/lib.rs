//! Lam IR - shared data structures for the lam pipeline.
//!
//! # Pipeline
//!
//! ```text
//! parser → Tree ──flatten──▶ FlatAst ──resolve──▶ FlatAst ──evaluate──▶ Value
//! ```
//!
//! - [`Tree`] / [`ParsedTree`]: the nested tree produced by an external parser,
//!   every node pre-numbered in construction order.
//! - [`FlatAst`]: the same program as one array of [`Node`]s addressed by
//!   [`NodeId`]. Cross-references are plain integers checked once on
//!   construction.
//! - [`BuiltinOp`]: the fixed operator vocabulary of the global scope.
//! - [`ErrorCode`]: phase-prefixed codes shared by every error type.

mod builtin;
mod error_code;
mod flat_ast;
mod literal;
mod node;
mod node_id;
mod span;
mod tree;

pub use builtin::{Arity, BuiltinOp, OpFamily};
pub use error_code::ErrorCode;
pub use flat_ast::{FlatAst, FlatAstError};
pub use literal::Literal;
pub use node::Node;
pub use node_id::NodeId;
pub use span::Span;
pub use tree::{ParsedTree, Tree, TreeBuilder, TreeKind};
