//! Nested tree → flat AST.
//!
//! Every tree node is written to the slot matching its pre-assigned id, then
//! its children are visited in node-kind order:
//! - `Lambda`: binding, body
//! - `Let`: binding, value, body
//! - `Call`: function, argument
//!
//! Leaves write themselves and stop.

use lam_ir::{FlatAst, FlatAstError, Node, NodeId, ParsedTree, Span, Tree, TreeKind};
use lam_stack::ensure_sufficient_stack;

use crate::FlattenError;

/// Flatten a parsed tree into a flat AST of exactly `node_count` nodes.
///
/// Fails if the tree and the count disagree, or if the tree contains a node
/// kind with no flat counterpart. Both mean the parser and the flattener
/// disagree on the input contract.
#[tracing::instrument(level = "debug", skip_all, fields(node_count = node_count))]
pub fn flatten(root: &Tree, node_count: usize) -> Result<FlatAst, FlattenError> {
    let mut flattener = Flattener::new(node_count);
    flattener.visit(root, Position::Expr)?;
    let ast = flattener.finish()?;
    tracing::debug!("flattening complete");
    Ok(ast)
}

/// Flatten a [`ParsedTree`], using the node count the parser reported.
pub fn flatten_parsed(parsed: &ParsedTree) -> Result<FlatAst, FlattenError> {
    flatten(&parsed.root, parsed.node_count)
}

/// Where a tree node sits relative to its parent.
#[derive(Copy, Clone, Debug)]
enum Position {
    /// Any expression slot.
    Expr,
    /// The binding slot of the `Lambda` or `Let` with id `parent`.
    Binding { parent: NodeId },
}

struct Flattener {
    nodes: Vec<Option<Node>>,
    spans: Vec<Span>,
}

impl Flattener {
    fn new(node_count: usize) -> Self {
        Flattener {
            nodes: vec![None; node_count],
            spans: vec![Span::DUMMY; node_count],
        }
    }

    fn visit(&mut self, tree: &Tree, position: Position) -> Result<(), FlattenError> {
        ensure_sufficient_stack(|| self.visit_inner(tree, position))
    }

    fn visit_inner(&mut self, tree: &Tree, position: Position) -> Result<(), FlattenError> {
        match (&tree.kind, position) {
            (TreeKind::Binding(name), Position::Binding { .. }) => {
                self.write(tree, Node::Binding { name: name.clone() })
            }
            (TreeKind::Binding(name), Position::Expr) => Err(FlattenError::StrayBinding {
                id: tree.id,
                name: name.clone(),
            }),
            (kind, Position::Binding { parent }) => Err(FlattenError::ExpectedBinding {
                parent,
                id: tree.id,
                found: kind.name(),
            }),
            (TreeKind::Literal(literal), Position::Expr) => {
                self.write(tree, Node::Literal(literal.clone()))
            }
            (TreeKind::Identifier(name), Position::Expr) => {
                self.write(tree, Node::Identifier { name: name.clone() })
            }
            (TreeKind::Lambda { binding, body }, Position::Expr) => {
                self.write(
                    tree,
                    Node::Lambda {
                        binding: binding.id,
                        body: body.id,
                    },
                )?;
                self.visit(binding, Position::Binding { parent: tree.id })?;
                self.visit(body, Position::Expr)
            }
            (
                TreeKind::Let {
                    binding,
                    value,
                    body,
                },
                Position::Expr,
            ) => {
                self.write(
                    tree,
                    Node::Let {
                        binding: binding.id,
                        value: value.id,
                        body: body.id,
                    },
                )?;
                self.visit(binding, Position::Binding { parent: tree.id })?;
                self.visit(value, Position::Expr)?;
                self.visit(body, Position::Expr)
            }
            (TreeKind::Call { function, argument }, Position::Expr) => {
                self.write(
                    tree,
                    Node::Call {
                        function: function.id,
                        argument: argument.id,
                    },
                )?;
                self.visit(function, Position::Expr)?;
                self.visit(argument, Position::Expr)
            }
            (TreeKind::Error, Position::Expr) => Err(FlattenError::UnsupportedNode {
                id: tree.id,
                kind: tree.kind.name(),
                span: tree.span,
            }),
        }
    }

    /// Store `node` at the slot named by the tree node's id.
    fn write(&mut self, tree: &Tree, node: Node) -> Result<(), FlattenError> {
        let index = tree.id.index();
        let Some(slot) = self.nodes.get_mut(index) else {
            return Err(FlattenError::IdOutOfRange {
                id: tree.id,
                node_count: self.spans.len(),
            });
        };
        if slot.is_some() {
            return Err(FlattenError::DuplicateId { id: tree.id });
        }
        *slot = Some(node);
        self.spans[index] = tree.span;
        Ok(())
    }

    fn finish(self) -> Result<FlatAst, FlattenError> {
        if self.nodes.is_empty() {
            return Err(FlattenError::Ast(FlatAstError::Empty));
        }
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for (index, slot) in self.nodes.into_iter().enumerate() {
            match slot {
                Some(node) => nodes.push(node),
                None => {
                    let id = NodeId::from_index(index).unwrap_or(NodeId::new(u32::MAX));
                    return Err(FlattenError::MissingNode { id });
                }
            }
        }
        Ok(FlatAst::from_parts(nodes, self.spans)?)
    }
}
