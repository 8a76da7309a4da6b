//! Shared vocabulary: node handles, colors and sides.
//!
//! Nodes live in a `Vec`-backed arena and link to each other through
//! [`NodeId`] indices. The sentinel is not a node at all, it is the reserved
//! index [`NodeId::NIL`]: every absent child or parent link holds it, it is
//! always black, and nothing is ever written through it.

use std::fmt;

/// Handle to a node in an [`RbTree`](crate::RbTree) arena.
///
/// Handles stay valid across inserts and rotations. Deleting a key compacts
/// the arena, so any handle held across a `delete` must be looked up again.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The sentinel: stands in for every absent link.
    pub const NIL: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_nil(self) -> bool {
        self == Self::NIL
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            f.write_str("NIL")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

/// Node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Single-letter tag used by the preorder printers.
    pub fn tag(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Red => "red",
            Color::Black => "black",
        })
    }
}

/// Which child slot of a parent a node occupies.
///
/// Fixup code is written once for the left side and mirrored through
/// [`Side::opposite`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
