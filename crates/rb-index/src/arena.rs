//! Node storage.
//!
//! All "pointers" are [`NodeId`] indices into a `Vec<RbNode<K>>`. Reads
//! through [`NodeId::NIL`] are answered without touching the vector (links
//! read as `NIL`, color reads as black), so rotation and fixup code never
//! special-cases the sentinel. Writes through `NIL` are bugs and are caught
//! by `debug_assert!`.

use crate::types::{Color, NodeId, Side};

/// One tree node: key, color and the three links.
#[derive(Clone, Debug)]
pub struct RbNode<K> {
    pub(crate) p: NodeId,
    pub(crate) l: NodeId,
    pub(crate) r: NodeId,
    pub(crate) k: K,
    pub(crate) color: Color,
}

impl<K> RbNode<K> {
    /// A fresh node: red, linked to the sentinel on every side.
    pub(crate) fn new(k: K) -> Self {
        Self {
            p: NodeId::NIL,
            l: NodeId::NIL,
            r: NodeId::NIL,
            k,
            color: Color::Red,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Arena<K> {
    nodes: Vec<RbNode<K>>,
}

impl<K> Default for Arena<K> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<K> Arena<K> {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn is_live(&self, id: NodeId) -> bool {
        !id.is_nil() && id.index() < self.nodes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    pub(crate) fn alloc(&mut self, k: K) -> NodeId {
        let id = slot_id(self.nodes.len()).expect("arena exhausted the u32 index space");
        self.nodes.push(RbNode::new(k));
        id
    }

    /// Drops `id` from the arena and returns its key.
    ///
    /// `id` must already be unlinked from the tree. The last node in the
    /// vector moves into the freed slot; its parent, children and, if it is
    /// the root, `root` are re-pointed at its new index.
    pub(crate) fn release(&mut self, id: NodeId, root: &mut NodeId) -> K {
        let last = NodeId((self.nodes.len() - 1) as u32);
        let removed = self.nodes.swap_remove(id.index());
        if id != last {
            let moved = &self.nodes[id.index()];
            let (p, l, r) = (moved.p, moved.l, moved.r);
            if p.is_nil() {
                debug_assert_eq!(*root, last);
                *root = id;
            } else if self.l(p) == last {
                self.set_l(p, id);
            } else {
                self.set_r(p, id);
            }
            if !l.is_nil() {
                self.set_p(l, id);
            }
            if !r.is_nil() {
                self.set_p(r, id);
            }
        }
        removed.k
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &RbNode<K> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn key(&self, id: NodeId) -> &K {
        &self.nodes[id.index()].k
    }

    #[inline]
    pub(crate) fn p(&self, id: NodeId) -> NodeId {
        if id.is_nil() {
            NodeId::NIL
        } else {
            self.nodes[id.index()].p
        }
    }

    #[inline]
    pub(crate) fn l(&self, id: NodeId) -> NodeId {
        if id.is_nil() {
            NodeId::NIL
        } else {
            self.nodes[id.index()].l
        }
    }

    #[inline]
    pub(crate) fn r(&self, id: NodeId) -> NodeId {
        if id.is_nil() {
            NodeId::NIL
        } else {
            self.nodes[id.index()].r
        }
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeId, side: Side) -> NodeId {
        match side {
            Side::Left => self.l(id),
            Side::Right => self.r(id),
        }
    }

    #[inline]
    pub(crate) fn color(&self, id: NodeId) -> Color {
        if id.is_nil() {
            Color::Black
        } else {
            self.nodes[id.index()].color
        }
    }

    #[inline]
    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        self.color(id) == Color::Red
    }

    #[inline]
    pub(crate) fn is_black(&self, id: NodeId) -> bool {
        self.color(id) == Color::Black
    }

    #[inline]
    pub(crate) fn set_p(&mut self, id: NodeId, v: NodeId) {
        debug_assert!(!id.is_nil(), "write through the sentinel");
        self.nodes[id.index()].p = v;
    }

    #[inline]
    pub(crate) fn set_l(&mut self, id: NodeId, v: NodeId) {
        debug_assert!(!id.is_nil(), "write through the sentinel");
        self.nodes[id.index()].l = v;
    }

    #[inline]
    pub(crate) fn set_r(&mut self, id: NodeId, v: NodeId) {
        debug_assert!(!id.is_nil(), "write through the sentinel");
        self.nodes[id.index()].r = v;
    }

    #[inline]
    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, v: NodeId) {
        match side {
            Side::Left => self.set_l(id, v),
            Side::Right => self.set_r(id, v),
        }
    }

    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        debug_assert!(!id.is_nil(), "write through the sentinel");
        self.nodes[id.index()].color = color;
    }

    /// Side of its parent that `id` hangs from. `parent` is passed in rather
    /// than read so the sentinel can ask too.
    #[inline]
    pub(crate) fn side_of(&self, id: NodeId, parent: NodeId) -> Side {
        if self.l(parent) == id {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Id for the slot at `index`, `None` once it would reach the sentinel.
fn slot_id(index: usize) -> Option<NodeId> {
    u32::try_from(index)
        .ok()
        .filter(|&i| i != NodeId::NIL.0)
        .map(NodeId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_ids_stop_before_the_sentinel() {
        assert_eq!(slot_id(0), Some(NodeId(0)));
        assert_eq!(slot_id(u32::MAX as usize - 1), Some(NodeId(u32::MAX - 1)));
        assert_eq!(slot_id(u32::MAX as usize), None);
    }

    /// Builds `2 <- 1 -> 3` by hand and returns the ids in key order.
    fn three(arena: &mut Arena<i32>) -> (NodeId, NodeId, NodeId) {
        let b = arena.alloc(2);
        let a = arena.alloc(1);
        let c = arena.alloc(3);
        arena.set_l(b, a);
        arena.set_r(b, c);
        arena.set_p(a, b);
        arena.set_p(c, b);
        (a, b, c)
    }

    #[test]
    fn test_sentinel_reads() {
        let arena = Arena::<i32>::default();
        assert_eq!(arena.p(NodeId::NIL), NodeId::NIL);
        assert_eq!(arena.l(NodeId::NIL), NodeId::NIL);
        assert_eq!(arena.r(NodeId::NIL), NodeId::NIL);
        assert_eq!(arena.color(NodeId::NIL), Color::Black);
        assert!(!arena.is_live(NodeId::NIL));
    }

    #[test]
    fn test_release_last_slot() {
        let mut arena = Arena::default();
        let (_, b, c) = three(&mut arena);
        arena.set_r(b, NodeId::NIL);
        let mut root = b;
        assert_eq!(arena.release(c, &mut root), 3);
        assert_eq!(root, b);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_release_relinks_moved_child() {
        let mut arena = Arena::default();
        let (a, b, c) = three(&mut arena);
        arena.set_l(b, NodeId::NIL);
        let mut root = b;
        // `a` sits in slot 1; `c` (slot 2) moves into it.
        assert_eq!(arena.release(a, &mut root), 1);
        assert_eq!(root, b);
        assert_eq!(arena.r(b), a);
        assert_eq!(arena.p(a), b);
        assert_eq!(*arena.key(a), 3);
        assert!(!arena.is_live(c));
    }

    #[test]
    fn test_release_relinks_moved_root() {
        let mut arena = Arena::default();
        let x = arena.alloc(10);
        let y = arena.alloc(20);
        let z = arena.alloc(5);
        // Root is `z` (slot 2) with right child `y`; `x` is detached.
        arena.set_r(z, y);
        arena.set_p(y, z);
        let mut root = z;
        assert_eq!(arena.release(x, &mut root), 10);
        assert_eq!(root, x);
        assert_eq!(*arena.key(root), 5);
        assert_eq!(arena.r(root), y);
        assert_eq!(arena.p(y), root);
    }
}
