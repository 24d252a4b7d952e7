//! Persistent environments mapping binding nodes to values.
//!
//! An `Environment` is a handle on a chain of immutable frames. Extending it
//! allocates a new frame that points at the old one, so a lambda body sees
//! its parameter while the caller's environment is unchanged and can keep
//! being used for sibling expressions.

use std::fmt;
use std::rc::Rc;

use lam_ir::NodeId;
use rustc_hash::FxHashMap;

use crate::Value;

#[derive(Clone, Default)]
pub struct Environment {
    head: Option<Rc<Frame>>,
}

struct Frame {
    bindings: FxHashMap<NodeId, Value>,
    parent: Option<Rc<Frame>>,
}

impl Environment {
    /// The empty environment used at the top level.
    pub fn new() -> Self {
        Environment { head: None }
    }

    /// A child environment in which `binding` maps to `value`.
    #[must_use]
    pub fn extend(&self, binding: NodeId, value: Value) -> Environment {
        let mut bindings = FxHashMap::default();
        bindings.insert(binding, value);
        let frame = Frame {
            bindings,
            parent: self.head.clone(),
        };
        Environment {
            head: Some(Rc::new(frame)),
        }
    }

    /// Look a binding up, innermost frame first.
    pub fn lookup(&self, binding: NodeId) -> Option<&Value> {
        self.frames().find_map(|frame| frame.bindings.get(&binding))
    }

    pub fn contains(&self, binding: NodeId) -> bool {
        self.lookup(binding).is_some()
    }

    /// Number of frames in the chain.
    pub fn depth(&self) -> usize {
        self.frames().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn frames(&self) -> impl Iterator<Item = &Frame> {
        std::iter::successors(self.head.as_deref(), |frame| frame.parent.as_deref())
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for frame in self.frames() {
            let mut entries: Vec<_> = frame.bindings.iter().collect();
            entries.sort_by_key(|(id, _)| **id);
            list.entry(&entries);
        }
        list.finish()
    }
}

// A long chain of frames would otherwise drop recursively.
impl Drop for Frame {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(rc) = next {
            match Rc::try_unwrap(rc) {
                Ok(mut frame) => next = frame.parent.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests;
