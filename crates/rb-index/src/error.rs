//! Error types.

use thiserror::Error;

use crate::types::NodeId;

/// Failures reported by tree operations.
///
/// Every operation checks its preconditions before the first link or color
/// is written, so an `Err` always leaves the tree exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RbError {
    #[error("key not found")]
    NotFound,
    #[error("tree has no root")]
    EmptyTree,
    #[error("key is the maximum, it has no successor")]
    NoSuccessor,
    #[error("key is the minimum, it has no predecessor")]
    NoPredecessor,
    #[error("cannot rotate {side} around {node:?}: required child is the sentinel")]
    InvalidRotation { node: NodeId, side: &'static str },
}

pub type Result<T, E = RbError> = std::result::Result<T, E>;

/// A broken red-black or BST invariant, as reported by
/// [`RbTree::validate`](crate::RbTree::validate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("root {0:?} has a parent")]
    RootHasParent(NodeId),
    #[error("root {0:?} is not black")]
    RootNotBlack(NodeId),
    #[error("broken parent link on child of {0:?}")]
    BrokenParentLink(NodeId),
    #[error("red node {0:?} has a red child")]
    RedRed(NodeId),
    #[error("black height mismatch under {node:?}: left {left}, right {right}")]
    BlackHeightMismatch {
        node: NodeId,
        left: usize,
        right: usize,
    },
    #[error("node order violated at {0:?}")]
    OrderViolated(NodeId),
    #[error("tree reaches {reachable} nodes but the arena holds {stored}")]
    LengthMismatch { reachable: usize, stored: usize },
}
