//! The tree itself: construction, navigation, rotations, insertion.

use crate::error::TreeError;
use crate::types::{Color, Node, NIL};

/// Red-black tree over an arena of nodes.
///
/// The tree owns every node in `nodes`; slot `0` is the shared sentinel.
/// All link fields are arena indices, so rotations are plain index
/// rewrites and `parent` back-references carry no ownership.
pub struct RbTree<K> {
    pub(crate) nodes: Vec<Node<K>>,
    pub(crate) root: u32,
    pub(crate) len: usize,
}

impl<K: Default> RbTree<K> {
    /// Creates an empty tree: the arena holds only the sentinel and the
    /// root points at it.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::sentinel()],
            root: NIL,
            len: 0,
        }
    }

    /// Drops every node and resets the root to the sentinel.
    ///
    /// The sentinel itself stays in slot `0` for the tree's whole lifetime.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.root = NIL;
        self.len = 0;
    }
}

impl<K: Default> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> RbTree<K> {
    /// Index of the root node; `NIL` when the tree is empty.
    pub fn root(&self) -> u32 {
        self.root
    }

    /// Number of inserted nodes (the sentinel does not count).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `idx` is the sentinel.
    pub fn is_nil(&self, idx: u32) -> bool {
        idx == NIL
    }

    /// Key stored at `idx`, or `None` for the sentinel (its key is
    /// undefined).
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a live arena index.
    pub fn key(&self, idx: u32) -> Option<&K> {
        if idx == NIL {
            None
        } else {
            Some(&self.nodes[idx as usize].key)
        }
    }

    /// Color of the node at `idx`. The sentinel reads BLACK, which is what
    /// makes absent-child color checks branch-free.
    #[inline]
    pub fn color(&self, idx: u32) -> Color {
        self.nodes[idx as usize].color
    }

    /// Left child index (`NIL` for an absent child).
    #[inline]
    pub fn left(&self, idx: u32) -> u32 {
        self.nodes[idx as usize].left
    }

    /// Right child index (`NIL` for an absent child).
    #[inline]
    pub fn right(&self, idx: u32) -> u32 {
        self.nodes[idx as usize].right
    }

    /// Parent index (`NIL` for the root and the sentinel).
    #[inline]
    pub fn parent(&self, idx: u32) -> u32 {
        self.nodes[idx as usize].parent
    }

    #[inline]
    fn set_color(&mut self, idx: u32, color: Color) {
        self.nodes[idx as usize].color = color;
    }

    #[inline]
    fn set_left(&mut self, idx: u32, child: u32) {
        self.nodes[idx as usize].left = child;
    }

    #[inline]
    fn set_right(&mut self, idx: u32, child: u32) {
        self.nodes[idx as usize].right = child;
    }

    #[inline]
    fn set_parent(&mut self, idx: u32, parent: u32) {
        self.nodes[idx as usize].parent = parent;
    }

    /// Minimum of the subtree rooted at `sub`; `NIL` if `sub` is `NIL`.
    pub fn min_in(&self, sub: u32) -> u32 {
        let mut x = sub;
        while x != NIL && self.left(x) != NIL {
            x = self.left(x);
        }
        x
    }

    /// Maximum of the subtree rooted at `sub`; `NIL` if `sub` is `NIL`.
    pub fn max_in(&self, sub: u32) -> u32 {
        let mut x = sub;
        while x != NIL && self.right(x) != NIL {
            x = self.right(x);
        }
        x
    }

    /// Minimum of the whole tree; `NIL` on an empty tree.
    pub fn min(&self) -> u32 {
        self.min_in(self.root)
    }

    /// Maximum of the whole tree; `NIL` on an empty tree.
    pub fn max(&self) -> u32 {
        self.max_in(self.root)
    }

    /// In-order successor of the node at `idx`; `NIL` past the maximum.
    ///
    /// Either the minimum of the right subtree, or the lowest ancestor
    /// reached by walking up from a left child.
    pub fn next(&self, idx: u32) -> u32 {
        if self.right(idx) != NIL {
            return self.min_in(self.right(idx));
        }
        let mut x = idx;
        let mut y = self.parent(x);
        while y != NIL && x == self.right(y) {
            x = y;
            y = self.parent(y);
        }
        y
    }

    /// In-order predecessor of the node at `idx`; `NIL` before the minimum.
    pub fn prev(&self, idx: u32) -> u32 {
        if self.left(idx) != NIL {
            return self.max_in(self.left(idx));
        }
        let mut x = idx;
        let mut y = self.parent(x);
        while y != NIL && x == self.left(y) {
            x = y;
            y = self.parent(y);
        }
        y
    }

    /// Left-rotates at `x`, promoting its right child into `x`'s position.
    ///
    /// Purely structural: relinks six indices, touches no color, preserves
    /// the in-order key sequence. Fails with
    /// [`TreeError::InvalidRotationTarget`] when `x` has no real right
    /// child.
    pub fn rotate_left(&mut self, x: u32) -> Result<(), TreeError> {
        if x == NIL || self.right(x) == NIL {
            return Err(TreeError::InvalidRotationTarget);
        }
        self.rotate_left_inner(x);
        Ok(())
    }

    /// Mirror of [`RbTree::rotate_left`]; requires a real left child.
    pub fn rotate_right(&mut self, y: u32) -> Result<(), TreeError> {
        if y == NIL || self.left(y) == NIL {
            return Err(TreeError::InvalidRotationTarget);
        }
        self.rotate_right_inner(y);
        Ok(())
    }

    // Precondition: right(x) != NIL. The fixup loop calls this directly;
    // its case analysis guarantees the pivot's child exists.
    fn rotate_left_inner(&mut self, x: u32) {
        let y = self.right(x);
        let yl = self.left(y);

        self.set_right(x, yl);
        if yl != NIL {
            self.set_parent(yl, x);
        }

        let p = self.parent(x);
        self.set_parent(y, p);
        if p == NIL {
            self.root = y;
        } else if self.left(p) == x {
            self.set_left(p, y);
        } else {
            self.set_right(p, y);
        }

        self.set_left(y, x);
        self.set_parent(x, y);
    }

    // Precondition: left(y) != NIL.
    fn rotate_right_inner(&mut self, y: u32) {
        let x = self.left(y);
        let xr = self.right(x);

        self.set_left(y, xr);
        if xr != NIL {
            self.set_parent(xr, y);
        }

        let p = self.parent(y);
        self.set_parent(x, p);
        if p == NIL {
            self.root = x;
        } else if self.right(p) == y {
            self.set_right(p, x);
        } else {
            self.set_left(p, x);
        }

        self.set_right(x, y);
        self.set_parent(y, x);
    }

    fn alloc(&mut self, key: K) -> u32 {
        let idx = self.nodes.len() as u32;
        self.nodes.push(Node::new(key));
        idx
    }
}

impl<K: Ord> RbTree<K> {
    /// Finds the node holding `key`; `NIL` when absent.
    ///
    /// With duplicate keys this stops at the shallowest match.
    pub fn search(&self, key: &K) -> u32 {
        let mut x = self.root;
        while x != NIL {
            let node_key = &self.nodes[x as usize].key;
            if key == node_key {
                break;
            }
            x = if key < node_key {
                self.left(x)
            } else {
                self.right(x)
            };
        }
        x
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &K) -> bool {
        self.search(key) != NIL
    }

    /// In-order successor of `key`; `Ok(NIL)` when `key` is the maximum.
    ///
    /// The key must exist: an absent key is a precondition violation and
    /// yields [`TreeError::NotFound`].
    pub fn successor(&self, key: &K) -> Result<u32, TreeError> {
        let x = self.search(key);
        if x == NIL {
            return Err(TreeError::NotFound);
        }
        Ok(self.next(x))
    }

    /// In-order predecessor of `key`; `Ok(NIL)` when `key` is the minimum.
    pub fn predecessor(&self, key: &K) -> Result<u32, TreeError> {
        let x = self.search(key);
        if x == NIL {
            return Err(TreeError::NotFound);
        }
        Ok(self.prev(x))
    }

    /// Inserts `key` and rebalances; returns the new node's index.
    ///
    /// Equal keys are allowed and always descend right of an existing
    /// equal key; their order among themselves is unspecified.
    pub fn insert(&mut self, key: K) -> u32 {
        let z = self.alloc(key);

        // BST descent tracking the last real node visited.
        let mut y = NIL;
        let mut x = self.root;
        while x != NIL {
            y = x;
            x = if self.nodes[z as usize].key < self.nodes[x as usize].key {
                self.left(x)
            } else {
                self.right(x)
            };
        }

        self.set_parent(z, y);
        if y == NIL {
            self.root = z;
        } else if self.nodes[z as usize].key < self.nodes[y as usize].key {
            self.set_left(y, z);
        } else {
            self.set_right(y, z);
        }

        self.len += 1;
        self.insert_fixup(z);
        z
    }

    // Restores invariants after attaching the RED node `z`. The only
    // possible violation is a red-red pair at `z`, so the loop runs while
    // `z`'s parent is RED; the sentinel and the root read BLACK, which
    // also bounds the climb.
    fn insert_fixup(&mut self, mut z: u32) {
        while self.color(self.parent(z)) == Color::Red {
            let p = self.parent(z);
            // A RED parent is never the root, so the grandparent is real.
            let g = self.parent(p);

            if p == self.left(g) {
                let u = self.right(g);
                if self.color(u) == Color::Red {
                    // Red uncle: recolor and push the violation up.
                    self.set_color(p, Color::Black);
                    self.set_color(u, Color::Black);
                    self.set_color(g, Color::Red);
                    z = g;
                } else {
                    if z == self.right(p) {
                        // Inner child: rotate into the outer shape first.
                        z = p;
                        self.rotate_left_inner(z);
                    }
                    let p = self.parent(z);
                    let g = self.parent(p);
                    self.set_color(p, Color::Black);
                    self.set_color(g, Color::Red);
                    self.rotate_right_inner(g);
                }
            } else {
                let u = self.left(g);
                if self.color(u) == Color::Red {
                    self.set_color(p, Color::Black);
                    self.set_color(u, Color::Black);
                    self.set_color(g, Color::Red);
                    z = g;
                } else {
                    if z == self.left(p) {
                        z = p;
                        self.rotate_right_inner(z);
                    }
                    let p = self.parent(z);
                    let g = self.parent(p);
                    self.set_color(p, Color::Black);
                    self.set_color(g, Color::Red);
                    self.rotate_left_inner(g);
                }
            }
        }

        // Idempotent; covers the recolor case terminating at the root.
        let root = self.root;
        self.set_color(root, Color::Black);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_navigation_returns_nil() {
        let tree: RbTree<i32> = RbTree::new();
        assert_eq!(tree.root(), NIL);
        assert_eq!(tree.min(), NIL);
        assert_eq!(tree.max(), NIL);
        assert!(tree.is_empty());
        assert_eq!(tree.key(NIL), None);
        assert_eq!(tree.color(NIL), Color::Black);
    }

    #[test]
    fn clear_keeps_only_the_sentinel() {
        let mut tree = RbTree::new();
        tree.insert(1);
        tree.insert(2);
        tree.clear();
        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(tree.root(), NIL);
        assert!(tree.is_empty());
        tree.insert(3);
        assert_eq!(tree.key(tree.root()), Some(&3));
    }
}
