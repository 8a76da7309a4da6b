//! Debug printers.

use std::fmt::{Debug, Display, Write};

use crate::tree::RbTree;
use crate::types::NodeId;

impl<K: Display> RbTree<K> {
    /// Preorder keys separated by spaces, e.g. `"7 5 3 9"`.
    pub fn print_tree(&self) -> String {
        let mut out = String::new();
        for k in self.preorder() {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "{k}");
        }
        out
    }

    /// Preorder keys tagged with their color, e.g. `"7B 5R 9R"`.
    pub fn print_with_colors(&self) -> String {
        let mut out = String::new();
        for (k, color) in self.preorder().with_colors() {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "{k}{}", color.tag());
        }
        out
    }
}

impl<K: Debug> RbTree<K> {
    /// Indented structural dump with node indices and colors.
    ///
    /// ```text
    /// Node[0] black { 2 }
    /// L=Node[1] red { 1 }
    ///   L=∅
    ///   R=∅
    /// R=∅
    /// ```
    pub fn dump(&self) -> String {
        self.dump_node(self.root, "")
    }

    fn dump_node(&self, node: NodeId, tab: &str) -> String {
        if node.is_nil() {
            return "∅".to_string();
        }
        let child_tab = format!("{tab}  ");
        let left = self.dump_node(self.arena.l(node), &child_tab);
        let right = self.dump_node(self.arena.r(node), &child_tab);
        let n = self.arena.node(node);
        format!(
            "Node[{}] {} {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
            node.index(),
            n.color,
            n.k
        )
    }
}
