//! Error taxonomy for the tree API.

use thiserror::Error;

/// Errors surfaced to callers.
///
/// `min`/`max` on an empty tree are not errors: they return [`NIL`]
/// (documented contract), and callers compare against the sentinel.
///
/// [`NIL`]: crate::NIL
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// `successor` / `predecessor` was asked about a key absent from the
    /// tree. The operations are defined only for keys that exist.
    #[error("key not found in tree")]
    NotFound,

    /// A rotation was requested on a pivot lacking the required real child
    /// (left rotation needs a non-sentinel right child, and mirrored).
    /// Unreachable through the insertion path.
    #[error("rotation pivot lacks the required child")]
    InvalidRotationTarget,
}
