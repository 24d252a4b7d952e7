//! Lam Flatten - nested tree to flat AST.
//!
//! # Pipeline Position
//!
//! ```text
//! Parse → **Flatten** → Resolve → Evaluate
//! ```
//!
//! The parser hands over a [`Tree`](lam_ir::Tree) whose nodes already carry
//! ids, plus the total node count. Flattening allocates the array once at that
//! size and fills every slot in a single pass.

mod errors;
mod flatten;

pub use errors::FlattenError;
pub use flatten::{flatten, flatten_parsed};
