//! The nested tree handed over by the parser.
//!
//! This is the input contract of the flattener. Every node carries the id the
//! parser assigned when it constructed the node, and the parser reports how
//! many nodes it built in total. Ids are assigned in pre-order, so the root
//! is always [`NodeId::ROOT`].

use crate::{Literal, NodeId, Span};

/// A node of the parser's nested tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    pub id: NodeId,
    pub span: Span,
    pub kind: TreeKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TreeKind {
    Literal(Literal),
    Identifier(String),
    /// Name declared by the enclosing `Lambda` or `Let`.
    Binding(String),
    Lambda {
        binding: Box<Tree>,
        body: Box<Tree>,
    },
    Let {
        binding: Box<Tree>,
        value: Box<Tree>,
        body: Box<Tree>,
    },
    Call {
        function: Box<Tree>,
        argument: Box<Tree>,
    },
    /// Placeholder left by an error-recovering parser. Has no flat counterpart.
    Error,
}

impl TreeKind {
    pub fn name(&self) -> &'static str {
        match self {
            TreeKind::Literal(_) => "literal",
            TreeKind::Identifier(_) => "identifier",
            TreeKind::Binding(_) => "binding",
            TreeKind::Lambda { .. } => "lambda",
            TreeKind::Let { .. } => "let",
            TreeKind::Call { .. } => "call",
            TreeKind::Error => "error",
        }
    }
}

impl Tree {
    pub fn new(id: NodeId, kind: TreeKind) -> Self {
        Tree {
            id,
            span: Span::DUMMY,
            kind,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        match &self.kind {
            TreeKind::Literal(_)
            | TreeKind::Identifier(_)
            | TreeKind::Binding(_)
            | TreeKind::Error => 1,
            TreeKind::Lambda { binding, body } => 1 + binding.size() + body.size(),
            TreeKind::Let {
                binding,
                value,
                body,
            } => 1 + binding.size() + value.size() + body.size(),
            TreeKind::Call { function, argument } => 1 + function.size() + argument.size(),
        }
    }
}

/// A parsed program: the tree root plus the parser's node count.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedTree {
    pub root: Tree,
    pub node_count: usize,
}

/// Builds trees the way the parser does, assigning ids in construction order.
///
/// Child subtrees are supplied as closures so that a parent's id is allocated
/// before any of its children's:
///
/// ```
/// use lam_ir::TreeBuilder;
///
/// let mut b = TreeBuilder::new();
/// // ((- 3) 1)
/// let root = b.call(
///     |b| b.call(|b| b.ident("-"), |b| b.number(3.0)),
///     |b| b.number(1.0),
/// );
/// let parsed = b.finish(root);
/// assert_eq!(parsed.node_count, 5);
/// assert_eq!(parsed.root.id.index(), 0);
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    next: u32,
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder { next: 0 }
    }

    fn alloc(&mut self) -> NodeId {
        let id = NodeId::new(self.next);
        self.next += 1;
        id
    }

    /// Number of nodes built so far.
    pub fn node_count(&self) -> usize {
        self.next as usize
    }

    pub fn literal(&mut self, literal: impl Into<Literal>) -> Tree {
        Tree::new(self.alloc(), TreeKind::Literal(literal.into()))
    }

    pub fn number(&mut self, n: f64) -> Tree {
        self.literal(n)
    }

    pub fn boolean(&mut self, b: bool) -> Tree {
        self.literal(b)
    }

    pub fn string(&mut self, s: &str) -> Tree {
        self.literal(s)
    }

    pub fn ident(&mut self, name: &str) -> Tree {
        Tree::new(self.alloc(), TreeKind::Identifier(name.to_owned()))
    }

    /// A parse-error placeholder.
    pub fn error(&mut self) -> Tree {
        Tree::new(self.alloc(), TreeKind::Error)
    }

    fn binding(&mut self, name: &str) -> Tree {
        Tree::new(self.alloc(), TreeKind::Binding(name.to_owned()))
    }

    /// `(lambda param body)`
    pub fn lambda(&mut self, param: &str, body: impl FnOnce(&mut Self) -> Tree) -> Tree {
        let id = self.alloc();
        let binding = self.binding(param);
        let body = body(self);
        Tree::new(
            id,
            TreeKind::Lambda {
                binding: Box::new(binding),
                body: Box::new(body),
            },
        )
    }

    /// `(let name value body)`
    pub fn let_in(
        &mut self,
        name: &str,
        value: impl FnOnce(&mut Self) -> Tree,
        body: impl FnOnce(&mut Self) -> Tree,
    ) -> Tree {
        let id = self.alloc();
        let binding = self.binding(name);
        let value = value(self);
        let body = body(self);
        Tree::new(
            id,
            TreeKind::Let {
                binding: Box::new(binding),
                value: Box::new(value),
                body: Box::new(body),
            },
        )
    }

    /// `(function argument)`
    pub fn call(
        &mut self,
        function: impl FnOnce(&mut Self) -> Tree,
        argument: impl FnOnce(&mut Self) -> Tree,
    ) -> Tree {
        let id = self.alloc();
        let function = function(self);
        let argument = argument(self);
        Tree::new(
            id,
            TreeKind::Call {
                function: Box::new(function),
                argument: Box::new(argument),
            },
        )
    }

    /// `((op first) second)`, the curried form of a binary operator call.
    pub fn binary(
        &mut self,
        op: &str,
        first: impl FnOnce(&mut Self) -> Tree,
        second: impl FnOnce(&mut Self) -> Tree,
    ) -> Tree {
        self.call(|b| b.call(|b| b.ident(op), first), second)
    }

    /// Finish building, pairing the root with the node count.
    pub fn finish(self, root: Tree) -> ParsedTree {
        ParsedTree {
            root,
            node_count: self.node_count(),
        }
    }
}
