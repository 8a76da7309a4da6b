//! Depth-first traversals driven by an explicit worklist.
//!
//! Each traversal keeps a stack of `(node, emit)` entries. Popping an
//! `emit` entry yields the node; popping any other entry expands it by
//! pushing the node (marked `emit`) and its real children in the reverse of
//! the order they must come out. One key is produced per `next` call and the
//! stack never holds more than about two entries per level of the tree.

use std::iter::FusedIterator;

use crate::tree::RbTree;
use crate::types::{Color, NodeId};

/// Depth-first visiting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, node, right subtree. Sorted by key.
    In,
    /// Left subtree, right subtree, node.
    Post,
}

/// Node-level traversal shared by the key iterators and the validator.
pub(crate) struct Walk<'a, K> {
    tree: &'a RbTree<K>,
    order: Order,
    stack: Vec<(NodeId, bool)>,
    remaining: usize,
}

// Manual impls: cloning an iterator must not require `K: Clone`.
impl<K> Clone for Walk<'_, K> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            order: self.order,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K> Clone for Keys<'_, K> {
    fn clone(&self) -> Self {
        Self {
            walk: self.walk.clone(),
        }
    }
}

impl<K> Clone for Colored<'_, K> {
    fn clone(&self) -> Self {
        Self {
            walk: self.walk.clone(),
        }
    }
}

impl<K> RbTree<K> {
    pub(crate) fn walk(&self, order: Order) -> Walk<'_, K> {
        let mut stack = Vec::new();
        if !self.root.is_nil() {
            stack.push((self.root, false));
        }
        Walk {
            tree: self,
            order,
            stack,
            remaining: self.len(),
        }
    }

    /// Keys in the given order.
    pub fn traverse(&self, order: Order) -> Keys<'_, K> {
        Keys {
            walk: self.walk(order),
        }
    }

    /// Node, then left subtree, then right subtree.
    pub fn preorder(&self) -> Keys<'_, K> {
        self.traverse(Order::Pre)
    }

    /// Keys in non-decreasing order.
    pub fn inorder(&self) -> Keys<'_, K> {
        self.traverse(Order::In)
    }

    /// Left subtree, then right subtree, then node.
    pub fn postorder(&self) -> Keys<'_, K> {
        self.traverse(Order::Post)
    }

    /// Same as [`inorder`](Self::inorder).
    pub fn iter(&self) -> Keys<'_, K> {
        self.inorder()
    }
}

impl<'a, K> Iterator for Walk<'a, K> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let arena = &self.tree.arena;
        while let Some((node, emit)) = self.stack.pop() {
            if emit {
                self.remaining -= 1;
                return Some(node);
            }
            let l = arena.l(node);
            let r = arena.r(node);
            match self.order {
                Order::Pre => {
                    push_real(&mut self.stack, r);
                    push_real(&mut self.stack, l);
                    self.stack.push((node, true));
                }
                Order::In => {
                    push_real(&mut self.stack, r);
                    self.stack.push((node, true));
                    push_real(&mut self.stack, l);
                }
                Order::Post => {
                    self.stack.push((node, true));
                    push_real(&mut self.stack, r);
                    push_real(&mut self.stack, l);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[inline]
fn push_real(stack: &mut Vec<(NodeId, bool)>, id: NodeId) {
    if !id.is_nil() {
        stack.push((id, false));
    }
}

/// Iterator over keys in one of the three depth-first orders.
///
/// Returned by [`RbTree::preorder`], [`RbTree::inorder`],
/// [`RbTree::postorder`] and [`RbTree::traverse`].
pub struct Keys<'a, K> {
    walk: Walk<'a, K>,
}

impl<'a, K> Keys<'a, K> {
    /// Pairs every key with its node color.
    ///
    /// ```
    /// use rb_index::{Color, RbTree};
    ///
    /// let tree: RbTree<_> = [2, 1, 3, 4].into_iter().collect();
    /// let colors: Vec<_> = tree.preorder().with_colors().map(|(_, c)| c).collect();
    /// assert_eq!(colors, [Color::Black, Color::Black, Color::Black, Color::Red]);
    /// ```
    pub fn with_colors(self) -> Colored<'a, K> {
        Colored { walk: self.walk }
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let tree = self.walk.tree;
        self.walk.next().map(|id| tree.arena.key(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.walk.size_hint()
    }
}

impl<'a, K> ExactSizeIterator for Keys<'a, K> {}

impl<'a, K> FusedIterator for Keys<'a, K> {}

/// `(key, color)` pairs; see [`Keys::with_colors`].
pub struct Colored<'a, K> {
    walk: Walk<'a, K>,
}

impl<'a, K> Iterator for Colored<'a, K> {
    type Item = (&'a K, Color);

    fn next(&mut self) -> Option<(&'a K, Color)> {
        let tree = self.walk.tree;
        self.walk
            .next()
            .map(|id| (tree.arena.key(id), tree.arena.color(id)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.walk.size_hint()
    }
}

impl<'a, K> ExactSizeIterator for Colored<'a, K> {}

impl<'a, K> FusedIterator for Colored<'a, K> {}

impl<'a, K> IntoIterator for &'a RbTree<K> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K>;

    fn into_iter(self) -> Keys<'a, K> {
        self.iter()
    }
}
