//! Debug rendering of the tree shape.

use std::fmt::Debug;

use crate::tree::RbTree;
use crate::types::{Color, NIL};

impl<K: Debug> RbTree<K> {
    /// Renders the tree as indented text, one node per line with its arena
    /// index, color, and key. The sentinel prints as `∅`. Intended for
    /// debugging and test failure output only; the format is not stable.
    pub fn dump(&self) -> String {
        self.dump_node(self.root, "")
    }

    fn dump_node(&self, n: u32, tab: &str) -> String {
        if n == NIL {
            return "∅".to_string();
        }
        let node = &self.nodes[n as usize];
        let color = match node.color {
            Color::Red => "red",
            Color::Black => "black",
        };
        let child_tab = format!("{tab}  ");
        let left = self.dump_node(node.left, &child_tab);
        let right = self.dump_node(node.right, &child_tab);
        format!(
            "Node[{n}] {color} {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
            node.key
        )
    }
}
