//! The tree-walking evaluator.
//!
//! Application is stack based: a `Call` evaluates its argument, pushes the
//! result and then evaluates its function. A `Lambda` pops one value and
//! binds it for its body; a builtin pops as many values as it takes. Curried
//! calls therefore deliver their arguments with the first-applied value on
//! top, and `((- 3) 1)` evaluates to `3 - 1`.

use lam_ir::{Arity, BuiltinOp, FlatAst, Node, NodeId};
use lam_stack::ensure_sufficient_stack;

use crate::errors::{EvalError, EvalResult};
use crate::operators::{apply_binary, apply_unary};
use crate::{Environment, EvalMode, Value, ValueStack};

/// Evaluate a resolved flat AST from its root with default settings.
pub fn evaluate(ast: &FlatAst) -> EvalResult {
    Evaluator::new(ast).run()
}

/// Evaluates nodes of one resolved flat AST.
pub struct Evaluator<'a> {
    ast: &'a FlatAst,
    mode: EvalMode,
    /// Active `eval` frames.
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(ast: &'a FlatAst) -> Self {
        Evaluator {
            ast,
            mode: EvalMode::default(),
            depth: 0,
        }
    }

    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Evaluate the root in an empty environment with an empty stack.
    ///
    /// Values still on the stack afterwards were never consumed; they are
    /// discarded.
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = self.ast.len()))]
    pub fn run(&mut self) -> EvalResult {
        let mut stack = ValueStack::new();
        let value = self.eval(self.ast.root(), &Environment::new(), &mut stack)?;
        if !stack.is_empty() {
            tracing::debug!(leftover = stack.len(), "discarding unconsumed arguments");
        }
        tracing::debug!(%value, "evaluation finished");
        Ok(value)
    }

    /// Evaluate `id` under `env`, consuming arguments from `stack`.
    pub fn eval(&mut self, id: NodeId, env: &Environment, stack: &mut ValueStack) -> EvalResult {
        if let Some(limit) = self.mode.max_depth() {
            if self.depth >= limit {
                return Err(EvalError::RecursionLimit { limit, id });
            }
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.eval_inner(id, env, stack));
        self.depth -= 1;
        result
    }

    fn eval_inner(&mut self, id: NodeId, env: &Environment, stack: &mut ValueStack) -> EvalResult {
        let ast = self.ast;
        match &ast[id] {
            Node::Literal(literal) => Ok(Value::from(literal)),
            Node::Reference { target } => env
                .lookup(*target)
                .cloned()
                .ok_or(EvalError::UndefinedBinding {
                    id,
                    binding: *target,
                }),
            Node::Builtin { op } => self.apply_builtin(id, *op, stack),
            Node::Lambda { binding, body } => {
                let argument = stack.pop().ok_or(EvalError::MissingArgument {
                    id,
                    span: ast.span(id),
                })?;
                tracing::trace!(lambda = %id, %argument, "bind parameter");
                let inner = env.extend(*binding, argument);
                self.eval(*body, &inner, stack)
            }
            Node::Let {
                binding,
                value,
                body,
            } => {
                let bound = self.eval(*value, env, stack)?;
                let inner = env.extend(*binding, bound);
                self.eval(*body, &inner, stack)
            }
            Node::Call { function, argument } => {
                let argument = self.eval(*argument, env, stack)?;
                stack.push(argument);
                self.eval(*function, env, stack)
            }
            Node::Identifier { name } => Err(EvalError::UnresolvedIdentifier {
                name: name.clone(),
                id,
            }),
            node @ Node::Binding { .. } => Err(EvalError::NotAnExpression {
                id,
                kind: node.kind_name(),
            }),
        }
    }

    fn apply_builtin(&self, id: NodeId, op: BuiltinOp, stack: &mut ValueStack) -> EvalResult {
        let span = self.ast.span(id);
        let available = stack.len();
        let underflow = || EvalError::StackUnderflow {
            op,
            needed: op.arity().count(),
            available,
            span,
        };
        if available < op.arity().count() {
            return Err(underflow());
        }

        let result = match op.arity() {
            Arity::Unary => {
                let operand = stack.pop().ok_or_else(underflow)?;
                apply_unary(op, operand)
            }
            Arity::Binary => {
                let first = stack.pop().ok_or_else(underflow)?;
                let second = stack.pop().ok_or_else(underflow)?;
                apply_binary(op, first, second)
            }
        };
        tracing::trace!(builtin = %op, ok = result.is_ok(), "apply builtin");
        result.map_err(|err| err.at(span))
    }
}
