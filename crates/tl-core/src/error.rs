//! Engine error type.
//!
//! Sub-crates may define their own error enums and convert them into `TlError`
//! via `From` impls, or keep them separate and wrap `TlError` as one variant.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.
//!
//! Unknown calendar-unit names are deliberately *not* a variant here: unit
//! lookup returns `Option::None` so callers can treat "no such unit" as a
//! recoverable sentinel rather than a fault (see [`crate::time::TimeUnit`]).

use thiserror::Error;

/// The top-level error type for `tl-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TlError {
    /// A child lookup by name found nothing.
    #[error("no child named {name:?} in node {parent:?}")]
    ChildNotFound { name: String, parent: String },

    /// A child-manipulation operation was attempted on a leaf.
    #[error("leaf {leaf:?} cannot have children")]
    LeafChild { leaf: String },

    /// A composite with no children was asked to play.
    #[error("node {name:?} has no children to play")]
    EmptyNode { name: String },
}

/// Shorthand result type for all `tl-*` crates.
pub type TlResult<T> = Result<T, TlError>;
