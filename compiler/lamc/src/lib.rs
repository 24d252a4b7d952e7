//! Lamc - driver for the lam interpreter.
//!
//! Takes a parser's [`ParsedTree`] through every phase:
//!
//! ```text
//! ParsedTree ──flatten──▶ FlatAst ──resolve──▶ FlatAst ──evaluate──▶ Value
//! ```
//!
//! [`compile`] stops after resolution, [`run`] evaluates as well, and
//! [`run_batch`] runs independent programs on the rayon thread pool.
//! Behavior is tuned through [`Config`].

mod config;
mod error;
mod pipeline;

use std::sync::Once;

pub use config::Config;
pub use error::Error;
pub use pipeline::{compile, run, run_batch};

pub use lam_eval::{EvalMode, Value};
pub use lam_ir::{ErrorCode, FlatAst, ParsedTree, TreeBuilder};

static TRACING_INIT: Once = Once::new();

/// Install a global tracing subscriber driven by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. With `LAM_LOG_TREE=1` events are
/// rendered as an indented span tree instead of flat lines. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var("LAM_LOG_TREE").is_ok_and(|v| v == "1");

        let tree_layer = tree.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true)
        });
        let fmt_layer = (!tree).then(|| fmt::layer().with_target(true).with_level(true));

        // Another subscriber may already be installed by the host.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tree_layer)
            .with(fmt_layer)
            .try_init();
    });
}
