//! Lam Resolve - lexical scope resolution.
//!
//! # Pipeline Position
//!
//! ```text
//! Parse → Flatten → **Resolve** → Evaluate
//! ```
//!
//! Rewrites every free-form `Identifier` into a `Reference` to the `Binding`
//! that introduced it, or into a `Builtin` when the name spells a recognized
//! operator and no enclosing binding shadows it. Resolution is fail-fast: the
//! first name bound nowhere aborts the pass.

mod errors;
mod resolve;
mod scope;
mod validate;

pub use errors::ResolveError;
pub use resolve::resolve;
pub use validate::{validate, Violation};
