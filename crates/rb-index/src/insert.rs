//! Insertion: structural placement followed by insert fixup.

use std::cmp::Ordering;

use crate::tree::RbTree;
use crate::types::{Color, NodeId, Side};

impl<K: Ord> RbTree<K> {
    /// Inserts `key` and rebalances. Returns the new node.
    ///
    /// Equal keys route right, so inserting a key twice stores it twice.
    pub fn insert(&mut self, key: K) -> NodeId {
        let z = self.place(key);
        self.insert_fixup(z);
        #[cfg(feature = "validate")]
        self.assert_valid("insert");
        z
    }

    /// Places `key` as a plain BST would: a new red leaf, no recoloring and
    /// no rotations.
    ///
    /// This is the raw structural step of [`insert`](Self::insert), exposed
    /// so rotations can be exercised without fixup interfering. A tree built
    /// this way generally breaks the red-black invariants.
    pub fn bst_insert(&mut self, key: K) -> NodeId {
        self.place(key)
    }

    fn place(&mut self, key: K) -> NodeId {
        let mut parent = NodeId::NIL;
        let mut side = Side::Left;
        let mut curr = self.root;
        while !curr.is_nil() {
            parent = curr;
            side = match key.cmp(self.arena.key(curr)) {
                Ordering::Less => Side::Left,
                Ordering::Equal | Ordering::Greater => Side::Right,
            };
            curr = self.arena.child(curr, side);
        }

        let z = self.arena.alloc(key);
        if parent.is_nil() {
            self.root = z;
        } else {
            self.arena.set_p(z, parent);
            self.arena.set_child(parent, side, z);
        }
        log::debug!("placed {z:?} under {parent:?}");
        z
    }

    /// Restores the invariants after `z` was placed as a red leaf.
    ///
    /// Loop invariant: only `z` and its parent may be a red-red pair, and
    /// black heights are untouched by every branch.
    fn insert_fixup(&mut self, mut z: NodeId) {
        while self.arena.is_red(self.arena.p(z)) {
            let p = self.arena.p(z);
            let gp = self.arena.p(p);
            if gp.is_nil() {
                // Red root left behind by `bst_insert`; blackening it below
                // resolves the pair.
                break;
            }
            let side = self.arena.side_of(p, gp);
            let uncle = self.arena.child(gp, side.opposite());

            if self.arena.is_red(uncle) {
                log::trace!("insert fixup {z:?}: red uncle, recolor");
                self.arena.set_color(p, Color::Black);
                self.arena.set_color(uncle, Color::Black);
                self.arena.set_color(gp, Color::Red);
                z = gp;
                continue;
            }

            if z == self.arena.child(p, side.opposite()) {
                log::trace!("insert fixup {z:?}: inner child, rotate parent");
                z = p;
                self.rotate(z, side);
            }

            log::trace!("insert fixup {z:?}: outer child, rotate grandparent");
            let p = self.arena.p(z);
            let gp = self.arena.p(p);
            self.arena.set_color(p, Color::Black);
            self.arena.set_color(gp, Color::Red);
            self.rotate(gp, side.opposite());
        }
        let root = self.root;
        self.arena.set_color(root, Color::Black);
    }
}
