//! Structural invariant checker.
//!
//! Recursive by design: the black-height invariant it verifies is the very
//! thing that keeps the recursion depth at O(log n).

use crate::tree::RbTree;
use crate::types::{Color, NIL};

impl<K> RbTree<K> {
    /// Checks every red-black invariant from the root down.
    ///
    /// True iff:
    /// - the sentinel is BLACK and the root is BLACK,
    /// - no link escapes the arena and every child points back at its
    ///   parent,
    /// - no RED node has a RED child,
    /// - every path to a sentinel crosses the same number of BLACK nodes.
    pub fn is_valid(&self) -> bool {
        if self.color(NIL) != Color::Black {
            return false;
        }
        if self.color(self.root) != Color::Black {
            return false;
        }
        let (_, ok) = self.validate(self.root);
        ok
    }

    /// Returns `(black_height, valid)` for the subtree at `n`.
    ///
    /// The sentinel contributes height 0; a BLACK node adds one to its
    /// children's (equal) heights. Any violation below `n` propagates up
    /// as `(0, false)`.
    fn validate(&self, n: u32) -> (u32, bool) {
        if n == NIL {
            return (0, true);
        }

        let l = self.left(n);
        let r = self.right(n);

        // A link outside the arena is a malformed shape, not a color
        // violation; catch it before indexing anywhere.
        let bound = self.nodes.len();
        if (l as usize) >= bound || (r as usize) >= bound {
            return (0, false);
        }

        if l != NIL && self.parent(l) != n {
            return (0, false);
        }
        if r != NIL && self.parent(r) != n {
            return (0, false);
        }

        // Sentinel children read BLACK, so a red leaf passes for free.
        if self.color(n) == Color::Red
            && (self.color(l) == Color::Red || self.color(r) == Color::Red)
        {
            return (0, false);
        }

        let (lh, l_ok) = self.validate(l);
        if !l_ok {
            return (0, false);
        }
        let (rh, r_ok) = self.validate(r);
        if !r_ok {
            return (0, false);
        }
        if lh != rh {
            return (0, false);
        }

        let own = if self.color(n) == Color::Black { 1 } else { 0 };
        (lh + own, true)
    }
}
