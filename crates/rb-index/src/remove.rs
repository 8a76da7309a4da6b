//! Deletion: transplant-driven splice followed by delete fixup.
//!
//! The node left holding the vacated slot (`x`) may be the sentinel. Its
//! parent is carried next to it as `x_parent` instead of being written onto
//! a shared nil node.

use crate::error::Result;
use crate::tree::RbTree;
use crate::types::{Color, NodeId};

impl<K: Ord> RbTree<K> {
    /// Removes the node holding `key` and returns the stored key.
    ///
    /// Fails [`RbError::NotFound`](crate::RbError::NotFound) and leaves the
    /// tree untouched if `key` is absent. With duplicates, the copy closest
    /// to the root is removed. Outstanding [`NodeId`]s become stale.
    pub fn delete(&mut self, key: &K) -> Result<K> {
        let z = self.find(key).inspect_err(|_| {
            log::debug!("delete: key not present");
        })?;
        let removed = self.delete_node(z);
        #[cfg(feature = "validate")]
        self.assert_valid("delete");
        Ok(removed)
    }
}

impl<K> RbTree<K> {
    fn delete_node(&mut self, z: NodeId) -> K {
        let zl = self.arena.l(z);
        let zr = self.arena.r(z);
        let spliced_color;
        let x;
        let x_parent;

        if zl.is_nil() {
            spliced_color = self.arena.color(z);
            x = zr;
            x_parent = self.transplant(z, zr);
        } else if zr.is_nil() {
            spliced_color = self.arena.color(z);
            x = zl;
            x_parent = self.transplant(z, zl);
        } else {
            let y = self.min_node(zr);
            spliced_color = self.arena.color(y);
            x = self.arena.r(y);
            if self.arena.p(y) == z {
                x_parent = y;
            } else {
                x_parent = self.transplant(y, x);
                self.arena.set_r(y, zr);
                self.arena.set_p(zr, y);
            }
            self.transplant(z, y);
            self.arena.set_l(y, zl);
            self.arena.set_p(zl, y);
            let z_color = self.arena.color(z);
            self.arena.set_color(y, z_color);
        }
        log::debug!("spliced out {z:?}, {x:?} fills the slot under {x_parent:?}");

        if spliced_color == Color::Black {
            self.delete_fixup(x, x_parent);
        }
        self.arena.release(z, &mut self.root)
    }

    /// Puts `v` where `u` hangs and returns `u`'s former parent, which is
    /// `v`'s new parent even when `v` is the sentinel.
    fn transplant(&mut self, u: NodeId, v: NodeId) -> NodeId {
        let p = self.arena.p(u);
        if p.is_nil() {
            self.root = v;
        } else if self.arena.l(p) == u {
            self.arena.set_l(p, v);
        } else {
            self.arena.set_r(p, v);
        }
        if !v.is_nil() {
            self.arena.set_p(v, p);
        }
        p
    }

    /// Pushes the extra black carried by `x` up the tree until it can be
    /// absorbed by a red node, a rotation, or the root.
    fn delete_fixup(&mut self, mut x: NodeId, mut x_parent: NodeId) {
        while x != self.root && self.arena.is_black(x) {
            let side = self.arena.side_of(x, x_parent);
            let far = side.opposite();
            let mut w = self.arena.child(x_parent, far);

            if self.arena.is_red(w) {
                log::trace!("delete fixup {x:?}: red sibling {w:?}");
                self.arena.set_color(w, Color::Black);
                self.arena.set_color(x_parent, Color::Red);
                self.rotate(x_parent, side);
                w = self.arena.child(x_parent, far);
            }

            // A missing sibling only happens once public rotations or
            // `bst_insert` have unbalanced the tree. It is pushed up like a
            // sibling with black children.
            if w.is_nil()
                || (self.arena.is_black(self.arena.l(w)) && self.arena.is_black(self.arena.r(w)))
            {
                log::trace!("delete fixup {x:?}: sibling {w:?} with black children");
                if !w.is_nil() {
                    self.arena.set_color(w, Color::Red);
                }
                x = x_parent;
                x_parent = self.arena.p(x);
                continue;
            }

            if self.arena.is_black(self.arena.child(w, far)) {
                log::trace!("delete fixup {x:?}: near nephew red, rotate sibling {w:?}");
                let near = self.arena.child(w, side);
                self.arena.set_color(near, Color::Black);
                self.arena.set_color(w, Color::Red);
                self.rotate(w, far);
                w = self.arena.child(x_parent, far);
            }

            log::trace!("delete fixup {x:?}: far nephew red, rotate parent {x_parent:?}");
            let parent_color = self.arena.color(x_parent);
            self.arena.set_color(w, parent_color);
            self.arena.set_color(x_parent, Color::Black);
            let far_child = self.arena.child(w, far);
            self.arena.set_color(far_child, Color::Black);
            self.rotate(x_parent, side);
            x = self.root;
            x_parent = NodeId::NIL;
        }
        if !x.is_nil() {
            self.arena.set_color(x, Color::Black);
        }
    }
}
