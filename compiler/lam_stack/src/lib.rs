//! Stack growth for the recursive passes.
//!
//! Flattening, resolution and evaluation all recurse once per tree level, and
//! curried applications nest one `Call` per argument. Each pass wraps its
//! recursive step in [`ensure_sufficient_stack`] so that deeply nested
//! programs grow the native stack instead of overflowing it.
//!
//! On `wasm32` the closure is called directly.

/// Grow when less than this much stack remains (128KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
