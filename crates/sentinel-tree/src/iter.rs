//! In-order traversal over arena indices.

use crate::tree::RbTree;
use crate::types::NIL;

/// In-order iterator yielding arena indices.
///
/// Uses the parent-walk successor, so it needs no explicit stack and no
/// allocation; each step is amortized O(1).
pub struct Iter<'a, K> {
    tree: &'a RbTree<K>,
    curr: u32,
}

impl<K> RbTree<K> {
    /// Iterates node indices in key order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            tree: self,
            curr: self.min(),
        }
    }

    /// Iterates keys in order: the diagnostic traversal consumed by
    /// callers that print or inspect the tree contents.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(move |i| &self.nodes[i as usize].key)
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.curr == NIL {
            return None;
        }
        let idx = self.curr;
        self.curr = self.tree.next(idx);
        Some(idx)
    }
}
