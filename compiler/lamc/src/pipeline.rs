//! Phase orchestration.

use lam_eval::{Evaluator, Value};
use lam_flatten::flatten_parsed;
use lam_ir::{FlatAst, ParsedTree};
use lam_resolve::{resolve, validate};
use rayon::prelude::*;

use crate::{Config, Error};

/// Flatten and resolve a parsed program.
///
/// With `config.validate` set the resolved tree is also checked by the
/// post-resolution validator.
#[tracing::instrument(level = "debug", skip_all, fields(node_count = tree.node_count))]
pub fn compile(tree: &ParsedTree, config: &Config) -> Result<FlatAst, Error> {
    let flat = flatten_parsed(tree)?;
    let resolved = resolve(&flat)?;
    if config.validate {
        let violations = validate(&resolved);
        if !violations.is_empty() {
            tracing::error!(count = violations.len(), "resolved tree failed validation");
            return Err(Error::Invalid(violations));
        }
    }
    Ok(resolved)
}

/// Compile and evaluate a parsed program.
pub fn run(tree: &ParsedTree, config: &Config) -> Result<Value, Error> {
    let ast = compile(tree, config)?;
    let value = Evaluator::new(&ast).mode(config.mode).run()?;
    Ok(value)
}

/// Run independent programs in parallel, returning results in input order.
///
/// Each program gets its own environment and argument stack, so nothing is
/// shared between evaluations.
#[tracing::instrument(level = "debug", skip_all, fields(programs = trees.len()))]
pub fn run_batch(trees: &[ParsedTree], config: &Config) -> Vec<Result<Value, Error>> {
    trees.par_iter().map(|tree| run(tree, config)).collect()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
