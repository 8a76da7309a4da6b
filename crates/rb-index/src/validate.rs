//! Invariant checker and shape metrics.

use crate::error::InvariantViolation;
use crate::tree::RbTree;
use crate::types::NodeId;

impl<K: Ord> RbTree<K> {
    /// Checks every red-black and BST invariant plus link consistency.
    ///
    /// O(n); meant for tests and debugging builds (see the `validate`
    /// feature).
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let root = self.root;
        if root.is_nil() {
            return check_len(0, self.arena.len());
        }
        if !self.arena.p(root).is_nil() {
            return Err(InvariantViolation::RootHasParent(root));
        }
        if !self.arena.is_black(root) {
            return Err(InvariantViolation::RootNotBlack(root));
        }

        let mut reachable = 0;
        self.black_height_checked(root, &mut reachable)?;
        check_len(reachable, self.arena.len())?;

        let mut prev = NodeId::NIL;
        for curr in self.walk(crate::traverse::Order::In) {
            if !prev.is_nil() && self.arena.key(prev) > self.arena.key(curr) {
                return Err(InvariantViolation::OrderViolated(curr));
            }
            prev = curr;
        }
        Ok(())
    }

    fn black_height_checked(
        &self,
        node: NodeId,
        reachable: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        if node.is_nil() {
            return Ok(0);
        }
        *reachable += 1;

        let l = self.arena.l(node);
        let r = self.arena.r(node);
        for child in [l, r] {
            if !child.is_nil() && self.arena.p(child) != node {
                return Err(InvariantViolation::BrokenParentLink(node));
            }
        }
        if self.arena.is_red(node) && (self.arena.is_red(l) || self.arena.is_red(r)) {
            return Err(InvariantViolation::RedRed(node));
        }

        let left = self.black_height_checked(l, reachable)?;
        let right = self.black_height_checked(r, reachable)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { node, left, right });
        }
        Ok(left + usize::from(self.arena.is_black(node)))
    }

    #[cfg(feature = "validate")]
    pub(crate) fn assert_valid(&self, op: &str) {
        if let Err(err) = self.validate() {
            log::error!("invalid red-black tree after {op}: {err}");
            panic!("invalid red-black tree after {op}: {err}");
        }
    }
}

impl<K> RbTree<K> {
    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        if !self.root.is_nil() {
            stack.push((self.root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [self.arena.l(node), self.arena.r(node)] {
                if !child.is_nil() {
                    stack.push((child, depth + 1));
                }
            }
        }
        height
    }

    /// Black nodes on the leftmost root-to-sentinel path, the root included.
    ///
    /// Equal along every path when the tree is valid.
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut curr = self.root;
        while !curr.is_nil() {
            if self.arena.is_black(curr) {
                count += 1;
            }
            curr = self.arena.l(curr);
        }
        count
    }
}

fn check_len(reachable: usize, stored: usize) -> Result<(), InvariantViolation> {
    if reachable != stored {
        return Err(InvariantViolation::LengthMismatch { reachable, stored });
    }
    Ok(())
}
