//! `tl-tree` — the priority round-robin behavior tree.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`status`] | `Status` enum and the `Outcome { status, from }` result       |
//! | [`node`]   | `Node` tagged enum over `Composite` / `Sequence` / `Leaf`     |
//! | [`tree`]   | `BehaviorTree` root with the name→callback registry           |
//!
//! # Design notes
//!
//! The engine is single-threaded and synchronous: one `play` call selects
//! exactly one child per composite along a single path and runs to
//! completion, callbacks included, before returning.  All scheduling state
//! (composite cursors, sequence positions) lives in plain integer fields
//! mutated in place — the tree holds no ambient global state and is driven
//! entirely by the caller's tick loop.
//!
//! Drivers assemble a fresh `&[Condition]` state list each tick (see
//! `tl-core`) and read back the returned [`Outcome`]; registered callbacks
//! fire when the outcome's `from` matches their name.

pub mod node;
pub mod status;
pub mod tree;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use node::{Composite, Leaf, Node, Sequence};
pub use status::{Outcome, Status};
pub use tree::{BehaviorTree, Callback};
