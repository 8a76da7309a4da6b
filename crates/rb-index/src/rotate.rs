//! Rotation primitives.
//!
//! A rotation is a local O(1) relink of at most six links that keeps BST
//! order. It never recolors; fixup code does that around it.

use crate::error::{RbError, Result};
use crate::tree::RbTree;
use crate::types::{NodeId, Side};

impl<K> RbTree<K> {
    /// Rotates left around `x`: `x`'s right child takes its place and `x`
    /// becomes that child's left child.
    ///
    /// Fails [`RbError::InvalidRotation`] without touching the tree if `x`
    /// is not a live node or has no right child.
    ///
    /// ```
    /// use rb_index::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// for k in [2, 1, 3] {
    ///     tree.bst_insert(k);
    /// }
    /// tree.rotate_left(tree.root().unwrap()).unwrap();
    /// assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn rotate_left(&mut self, x: NodeId) -> Result<()> {
        self.check_rotation(x, Side::Left)?;
        self.rotate(x, Side::Left);
        Ok(())
    }

    /// Mirror of [`rotate_left`](Self::rotate_left).
    pub fn rotate_right(&mut self, y: NodeId) -> Result<()> {
        self.check_rotation(y, Side::Right)?;
        self.rotate(y, Side::Right);
        Ok(())
    }

    fn check_rotation(&self, x: NodeId, down: Side) -> Result<()> {
        let side = match down {
            Side::Left => "left",
            Side::Right => "right",
        };
        if !self.arena.is_live(x) || self.arena.child(x, down.opposite()).is_nil() {
            log::debug!("rejected {side} rotation around {x:?}");
            return Err(RbError::InvalidRotation { node: x, side });
        }
        Ok(())
    }

    /// Moves `x` down to the `down` side of its child on the opposite side.
    ///
    /// The caller guarantees that child is real.
    pub(crate) fn rotate(&mut self, x: NodeId, down: Side) {
        let up = down.opposite();
        let y = self.arena.child(x, up);
        debug_assert!(!y.is_nil(), "rotation pivot is the sentinel");
        log::trace!("rotate {down:?} around {x:?}");

        let inner = self.arena.child(y, down);
        self.arena.set_child(x, up, inner);
        if !inner.is_nil() {
            self.arena.set_p(inner, x);
        }

        let p = self.arena.p(x);
        self.arena.set_p(y, p);
        if p.is_nil() {
            self.root = y;
        } else if self.arena.l(p) == x {
            self.arena.set_l(p, y);
        } else {
            self.arena.set_r(p, y);
        }

        self.arena.set_child(y, down, x);
        self.arena.set_p(x, y);
    }
}
