//! `tl-habit` — condition-triggered habits and one-shot events.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`trigger`] | `TriggerEvent` — periodic/conditional activation signal   |
//! | [`habit`]   | `Habit`, `Recurrence`, `Action` — start/stop hysteresis   |
//! | [`loader`]  | CSV habit definitions                                     |
//! | [`error`]   | `HabitError`, `HabitResult<T>`                            |
//!
//! # Design notes
//!
//! Habits live *outside* the behavior tree: the driver checks each one
//! against the same per-tick state list it feeds the tree, and reads back
//! the boolean `launched` flags.  The state list must carry a `time`-keyed
//! condition (the tick counter) for the triggers' time test to ever pass.

pub mod error;
pub mod habit;
pub mod loader;
pub mod trigger;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{HabitError, HabitResult};
pub use habit::{Action, Habit, Recurrence};
pub use loader::{load_habits_csv, load_habits_reader};
pub use trigger::{END_TIME_KEY, TIME_KEY, TriggerEvent};
