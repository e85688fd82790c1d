//! Errors reported by [`Tree`][crate::Tree] operations.

use thiserror::Error;

/// Things that can go wrong when modifying a tree.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TreeError {
    /// No element in the tree compared equal to the one asked for. Nothing was changed.
    #[error("element not found in tree")]
    NotFound,
}

/// Shorthand for results of tree operations.
pub type Result<T, E = TreeError> = std::result::Result<T, E>;
