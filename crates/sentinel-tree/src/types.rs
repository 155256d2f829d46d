//! Node record and arena index conventions.
//!
//! Every relation (`parent` / `left` / `right`) is a `u32` index into the
//! tree's node arena. Index [`NIL`] is reserved for the shared sentinel, so
//! an "absent" relation stores `NIL` instead of an option type and a color
//! lookup on an absent child reads the sentinel's BLACK without branching.

/// Reserved arena index of the shared sentinel node.
///
/// Slot `0` is allocated at construction, colored [`Color::Black`], and never
/// reallocated. Callers test returned indices against `NIL` rather than
/// against an option value.
pub const NIL: u32 = 0;

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// A tree node: a plain record of key, color, and arena-index links.
#[derive(Debug, Clone)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) parent: u32,
    pub(crate) left: u32,
    pub(crate) right: u32,
}

impl<K> Node<K> {
    /// A freshly allocated node: RED, all links pointing at the sentinel.
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            color: Color::Red,
            parent: NIL,
            left: NIL,
            right: NIL,
        }
    }

    /// The sentinel record for slot `0`.
    ///
    /// Its key slot is filled with `K::default()` and is never read;
    /// [`RbTree::key`](crate::RbTree::key) returns `None` for `NIL` so the
    /// undefined key cannot leak.
    pub(crate) fn sentinel() -> Self
    where
        K: Default,
    {
        Self {
            key: K::default(),
            color: Color::Black,
            parent: NIL,
            left: NIL,
            right: NIL,
        }
    }
}
