//! Node identities for the flat AST.
//!
//! A `NodeId` is both a node's identity and its position in the flat array,
//! so every cross-reference between nodes is a plain integer.

use std::fmt;

/// Index into a [`FlatAst`](crate::FlatAst).
///
/// Ids are assigned by the parser in construction order; the root of every
/// program is [`NodeId::ROOT`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// The root of the original tree, and the evaluator's entry point.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Create a `NodeId` from an array position.
    ///
    /// Returns `None` if the position does not fit in 32 bits.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(NodeId)
    }

    /// Get the index into the flat array.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_zero() {
        assert_eq!(NodeId::ROOT.index(), 0);
        assert_eq!(NodeId::ROOT, NodeId::new(0));
    }

    #[test]
    fn from_index_round_trips() {
        assert_eq!(NodeId::from_index(7), Some(NodeId::new(7)));
        assert_eq!(NodeId::new(7).index(), 7);
    }

    #[test]
    fn display_uses_hash_prefix() {
        assert_eq!(NodeId::new(12).to_string(), "#12");
        assert_eq!(format!("{:?}", NodeId::new(12)), "NodeId(12)");
    }
}
