//! Arena-backed red-black tree with a shared nil sentinel.
//!
//! A classic red-black tree (ordered insertion, exact-key search, min/max,
//! in-order successor/predecessor, invariant validator) where every
//! `parent` / `left` / `right` "pointer" is a `u32` index into a
//! [`Vec`]-backed arena owned by the tree. Index `0` is a single shared
//! sentinel: BLACK, key undefined, standing in for every absent child and
//! the root's absent parent. Navigation compares indices against [`NIL`]
//! instead of unwrapping options, and a color lookup on an absent child
//! reads the sentinel's BLACK without a branch.
//!
//! Deletion is out of scope; the tree only grows. The tree is not designed
//! for concurrent mutation — callers needing shared access serialize
//! externally.
//!
//! # Example
//!
//! ```
//! use sentinel_tree::{RbTree, NIL};
//!
//! let mut tree = RbTree::new();
//! for key in [10, 5, 15, 3, 7, 20] {
//!     tree.insert(key);
//!     assert!(tree.is_valid());
//! }
//!
//! assert_ne!(tree.search(&7), NIL);
//! assert_eq!(tree.search(&8), NIL);
//!
//! assert_eq!(tree.key(tree.min()), Some(&3));
//! assert_eq!(tree.key(tree.max()), Some(&20));
//!
//! let after_ten = tree.successor(&10).unwrap();
//! assert_eq!(tree.key(after_ten), Some(&15));
//! assert_eq!(tree.successor(&20).unwrap(), NIL);
//!
//! let ordered: Vec<i32> = tree.keys().copied().collect();
//! assert_eq!(ordered, vec![3, 5, 7, 10, 15, 20]);
//! ```

pub mod error;
pub mod iter;
pub mod print;
pub mod tree;
pub mod types;
pub mod validate;

pub use error::TreeError;
pub use iter::Iter;
pub use tree::RbTree;
pub use types::{Color, Node, NIL};
