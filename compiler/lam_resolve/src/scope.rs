//! Compile-time scope chain.
//!
//! Frames live on the resolver's call stack and borrow their parent, so a
//! child frame can never outlive the scope that introduced it.

use lam_ir::{BuiltinOp, NodeId};

/// What a name resolves to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Resolution {
    Builtin(BuiltinOp),
    Local(NodeId),
}

#[derive(Debug)]
enum Frame<'s> {
    /// The fixed operator vocabulary.
    Global,
    /// One name introduced by a `Lambda` or `Let`.
    Local { name: &'s str, binding: NodeId },
}

#[derive(Debug)]
pub(crate) struct Scope<'s> {
    frame: Frame<'s>,
    parent: Option<&'s Scope<'s>>,
}

impl<'s> Scope<'s> {
    pub(crate) fn global() -> Self {
        Scope {
            frame: Frame::Global,
            parent: None,
        }
    }

    /// A child scope binding `name` to the `Binding` node `binding`.
    pub(crate) fn bind(&'s self, name: &'s str, binding: NodeId) -> Scope<'s> {
        Scope {
            frame: Frame::Local { name, binding },
            parent: Some(self),
        }
    }

    /// Innermost-first lookup.
    pub(crate) fn lookup(&self, name: &str) -> Option<Resolution> {
        let mut scope = Some(self);
        while let Some(current) = scope {
            match current.frame {
                Frame::Local {
                    name: bound,
                    binding,
                } if bound == name => return Some(Resolution::Local(binding)),
                Frame::Global => {
                    if let Some(op) = BuiltinOp::from_spelling(name) {
                        return Some(Resolution::Builtin(op));
                    }
                }
                Frame::Local { .. } => {}
            }
            scope = current.parent;
        }
        None
    }

    /// Whether `binding` is introduced by this scope or an enclosing one.
    pub(crate) fn encloses(&self, binding: NodeId) -> bool {
        std::iter::successors(Some(self), |scope| scope.parent).any(|scope| {
            matches!(scope.frame, Frame::Local { binding: bound, .. } if bound == binding)
        })
    }
}
