//! `tl-core` — foundational types for the `townlife` behavior engine.
//!
//! This crate is a dependency of every other `tl-*` crate.  It intentionally
//! has no `tl-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`condition`] | `Condition`, `Value` — world state / match criteria   |
//! | [`time`]      | `SimClock`, `TimeUnit`, calendar-unit conversions     |
//! | [`error`]     | `TlError`, `TlResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod condition;
pub mod error;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use condition::{Condition, Value};
pub use error::{TlError, TlResult};
pub use time::{SimClock, TimeUnit, ticks_per_year};
