//! Post-resolution invariant checks.
//!
//! Walks the flat AST from the root, tracking which bindings enclose each
//! node, and reports:
//! - `Identifier` nodes that survived resolution
//! - `Reference` nodes whose target binding does not lexically enclose them
//!   (including a `Let` value referring to the let's own binding)
//!
//! `resolve` runs this under `debug_assert!`; drivers may also run it in
//! release builds.

use lam_ir::{FlatAst, Node, NodeId};
use lam_stack::ensure_sufficient_stack;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("identifier {id} was never resolved")]
    Unresolved { id: NodeId },

    #[error("reference {id} targets {target}, which does not enclose it")]
    OutOfScope { id: NodeId, target: NodeId },
}

/// Check a resolved flat AST, returning every violation found.
pub fn validate(ast: &FlatAst) -> Vec<Violation> {
    let mut validator = Validator {
        ast,
        in_scope: Vec::new(),
        problems: Vec::new(),
    };
    validator.walk(ast.root());
    validator.problems
}

struct Validator<'a> {
    ast: &'a FlatAst,
    /// Bindings enclosing the current node, outermost first.
    in_scope: Vec<NodeId>,
    problems: Vec<Violation>,
}

impl Validator<'_> {
    fn walk(&mut self, id: NodeId) {
        ensure_sufficient_stack(|| self.walk_inner(id));
    }

    fn walk_inner(&mut self, id: NodeId) {
        let ast = self.ast;
        match ast[id] {
            Node::Identifier { .. } => self.problems.push(Violation::Unresolved { id }),
            Node::Reference { target } => {
                if !self.in_scope.contains(&target) {
                    self.problems.push(Violation::OutOfScope { id, target });
                }
            }
            Node::Lambda { binding, body } => {
                self.in_scope.push(binding);
                self.walk(body);
                self.in_scope.pop();
            }
            Node::Let {
                binding,
                value,
                body,
            } => {
                self.walk(value);
                self.in_scope.push(binding);
                self.walk(body);
                self.in_scope.pop();
            }
            Node::Call { function, argument } => {
                self.walk(function);
                self.walk(argument);
            }
            Node::Literal(_) | Node::Binding { .. } | Node::Builtin { .. } => {}
        }
    }
}
