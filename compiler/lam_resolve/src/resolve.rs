//! Identifier resolution.
//!
//! One walk from the root, carrying the lexical scope chain:
//! - `Identifier`: replaced by `Builtin` (global frame hit) or `Reference`
//!   (local frame hit) at the same id; a miss aborts the pass.
//! - `Lambda`: body resolved with the parameter bound.
//! - `Let`: value resolved *without* the new binding, body with it.
//! - `Call`: function and argument resolved in the current scope.
//! - `Reference`: kept as is, provided its target encloses it.
//! - Everything else is already resolved and left untouched.
//!
//! The input array is never modified; the result is a new array.

use lam_ir::{FlatAst, Node, NodeId};
use lam_stack::ensure_sufficient_stack;

use crate::scope::{Resolution, Scope};
use crate::ResolveError;

/// Resolve every identifier reachable from the root of `ast`.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = ast.len()))]
pub fn resolve(ast: &FlatAst) -> Result<FlatAst, ResolveError> {
    let mut resolver = Resolver {
        ast,
        nodes: ast.nodes().to_vec(),
        resolved: 0,
    };
    resolver.resolve_node(ast.root(), &Scope::global())?;
    let resolved = resolver.resolved;
    let out = FlatAst::from_parts(resolver.nodes, ast.spans().to_vec())?;

    #[cfg(debug_assertions)]
    {
        let problems = crate::validate(&out);
        debug_assert!(
            problems.is_empty(),
            "resolution produced an invalid flat AST: {problems:?}"
        );
    }

    tracing::debug!(resolved, "resolution complete");
    Ok(out)
}

struct Resolver<'a> {
    ast: &'a FlatAst,
    /// Output slots, seeded from the input.
    nodes: Vec<Node>,
    /// Identifiers rewritten so far.
    resolved: usize,
}

impl<'a> Resolver<'a> {
    fn resolve_node(&mut self, id: NodeId, scope: &Scope<'_>) -> Result<(), ResolveError> {
        ensure_sufficient_stack(|| self.resolve_inner(id, scope))
    }

    fn resolve_inner(&mut self, id: NodeId, scope: &Scope<'_>) -> Result<(), ResolveError> {
        let ast = self.ast;
        match &ast[id] {
            Node::Literal(_) | Node::Binding { .. } | Node::Builtin { .. } => Ok(()),
            Node::Reference { target } => {
                if scope.encloses(*target) {
                    Ok(())
                } else {
                    Err(ResolveError::OutOfScopeReference {
                        id,
                        target: *target,
                    })
                }
            }
            Node::Identifier { name } => {
                let resolved = match scope.lookup(name) {
                    Some(Resolution::Builtin(op)) => Node::Builtin { op },
                    Some(Resolution::Local(target)) => Node::Reference { target },
                    None => {
                        return Err(ResolveError::UnresolvedIdentifier {
                            name: name.clone(),
                            id,
                            span: ast.span(id),
                        })
                    }
                };
                tracing::trace!(%id, name = name.as_str(), to = %resolved, "resolved identifier");
                self.nodes[id.index()] = resolved;
                self.resolved += 1;
                Ok(())
            }
            Node::Lambda { binding, body } => {
                let name = self.binding_name(id, *binding)?;
                let inner = scope.bind(name, *binding);
                self.resolve_node(*body, &inner)
            }
            Node::Let {
                binding,
                value,
                body,
            } => {
                // The bound name is not visible to its own definition.
                self.resolve_node(*value, scope)?;
                let name = self.binding_name(id, *binding)?;
                let inner = scope.bind(name, *binding);
                self.resolve_node(*body, &inner)
            }
            Node::Call { function, argument } => {
                self.resolve_node(*function, scope)?;
                self.resolve_node(*argument, scope)
            }
        }
    }

    fn binding_name(&self, parent: NodeId, slot: NodeId) -> Result<&'a str, ResolveError> {
        let ast: &'a FlatAst = self.ast;
        ast.binding_name(slot)
            .ok_or(ResolveError::NotABinding { parent, slot })
    }
}
