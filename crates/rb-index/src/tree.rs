//! The tree container and its read-only structural queries.

use std::cmp::Ordering;
use std::fmt;

use crate::arena::Arena;
use crate::error::{RbError, Result};
use crate::types::{Color, NodeId};

/// Red-black tree over `Ord` keys.
///
/// Equal keys are allowed and route right: a duplicate lands in the right
/// subtree of the first equal key met on the way down.
///
/// ```
/// use rb_index::RbTree;
///
/// let mut tree = RbTree::new();
/// for k in [7, 5, 9, 3, 6, 8, 10, 1, 2] {
///     tree.insert(k);
/// }
///
/// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7, 8, 9, 10]);
/// assert_eq!(tree.find_successor(&6), Ok(&7));
/// assert_eq!(tree.delete(&6), Ok(6));
/// assert!(!tree.contains(&6));
/// ```
pub struct RbTree<K> {
    pub(crate) arena: Arena<K>,
    pub(crate) root: NodeId,
}

impl<K> RbTree<K> {
    pub fn new() -> Self {
        Self {
            arena: Arena::default(),
            root: NodeId::NIL,
        }
    }

    /// Number of keys stored, duplicates included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_nil()
    }

    /// Drops every node. Outstanding [`NodeId`]s become stale.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = NodeId::NIL;
    }

    /// The root node, `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        some(self.root)
    }

    /// Key stored at `id`.
    ///
    /// # Panics
    ///
    /// If `id` is the sentinel or stale.
    pub fn key(&self, id: NodeId) -> &K {
        self.arena.key(id)
    }

    /// Color of `id`; the sentinel reads as black.
    ///
    /// # Panics
    ///
    /// If `id` is stale, i.e. issued before a [`delete`](Self::delete) or
    /// [`clear`](Self::clear).
    pub fn color(&self, id: NodeId) -> Color {
        self.arena.color(id)
    }

    /// Parent of `id`; `None` for the root and the sentinel.
    ///
    /// Panics on a stale `id`, like [`color`](Self::color).
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        some(self.arena.p(id))
    }

    /// Panics on a stale `id`, like [`color`](Self::color).
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        some(self.arena.l(id))
    }

    /// Panics on a stale `id`, like [`color`](Self::color).
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        some(self.arena.r(id))
    }

    /// Leftmost node of the subtree rooted at `start`.
    pub fn find_min(&self, start: NodeId) -> Result<NodeId> {
        if !self.arena.is_live(start) {
            return Err(RbError::EmptyTree);
        }
        Ok(self.min_node(start))
    }

    /// Rightmost node of the subtree rooted at `start`.
    pub fn find_max(&self, start: NodeId) -> Result<NodeId> {
        if !self.arena.is_live(start) {
            return Err(RbError::EmptyTree);
        }
        let mut curr = start;
        while !self.arena.r(curr).is_nil() {
            curr = self.arena.r(curr);
        }
        Ok(curr)
    }

    /// Smallest key.
    pub fn min(&self) -> Result<&K> {
        self.find_min(self.root).map(|i| self.arena.key(i))
    }

    /// Largest key.
    pub fn max(&self) -> Result<&K> {
        self.find_max(self.root).map(|i| self.arena.key(i))
    }

    /// In-order successor of a node, `NIL` when `id` is the maximum.
    pub(crate) fn next(&self, id: NodeId) -> NodeId {
        let r = self.arena.r(id);
        if !r.is_nil() {
            return self.min_node(r);
        }
        let mut curr = id;
        let mut p = self.arena.p(curr);
        while !p.is_nil() && curr == self.arena.r(p) {
            curr = p;
            p = self.arena.p(p);
        }
        p
    }

    /// In-order predecessor of a node, `NIL` when `id` is the minimum.
    pub(crate) fn prev(&self, id: NodeId) -> NodeId {
        let l = self.arena.l(id);
        if !l.is_nil() {
            let mut c = l;
            while !self.arena.r(c).is_nil() {
                c = self.arena.r(c);
            }
            return c;
        }
        let mut curr = id;
        let mut p = self.arena.p(curr);
        while !p.is_nil() && curr == self.arena.l(p) {
            curr = p;
            p = self.arena.p(p);
        }
        p
    }

    pub(crate) fn min_node(&self, start: NodeId) -> NodeId {
        let mut curr = start;
        while !self.arena.l(curr).is_nil() {
            curr = self.arena.l(curr);
        }
        curr
    }
}

impl<K: Ord> RbTree<K> {
    /// Node holding `key`. With duplicates, the one closest to the root.
    pub fn find(&self, key: &K) -> Result<NodeId> {
        let mut curr = self.root;
        while !curr.is_nil() {
            curr = match key.cmp(self.arena.key(curr)) {
                Ordering::Equal => return Ok(curr),
                Ordering::Less => self.arena.l(curr),
                Ordering::Greater => self.arena.r(curr),
            };
        }
        Err(RbError::NotFound)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_ok()
    }

    /// Key that follows `key` in in-order position.
    ///
    /// Fails [`RbError::EmptyTree`] on an empty tree, [`RbError::NotFound`]
    /// if `key` is absent and [`RbError::NoSuccessor`] if it is the maximum.
    pub fn find_successor(&self, key: &K) -> Result<&K> {
        if self.is_empty() {
            return Err(RbError::EmptyTree);
        }
        let node = self.find(key)?;
        match some(self.next(node)) {
            Some(s) => Ok(self.arena.key(s)),
            None => Err(RbError::NoSuccessor),
        }
    }

    /// Mirror of [`find_successor`](Self::find_successor).
    pub fn find_predecessor(&self, key: &K) -> Result<&K> {
        if self.is_empty() {
            return Err(RbError::EmptyTree);
        }
        let node = self.find(key)?;
        match some(self.prev(node)) {
            Some(s) => Ok(self.arena.key(s)),
            None => Err(RbError::NoPredecessor),
        }
    }
}

#[inline]
fn some(id: NodeId) -> Option<NodeId> {
    if id.is_nil() {
        None
    } else {
        Some(id)
    }
}

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> Clone for RbTree<K> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            root: self.root,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<K: Ord> FromIterator<K> for RbTree<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut tree = RbTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RbTree<K> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for k in iter {
            self.insert(k);
        }
    }
}
