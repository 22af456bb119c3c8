//! `TriggerEvent` — a periodic, condition-gated activation signal.
//!
//! A trigger carries a target tick-of-year and a list of conditions.  Each
//! tick the driver passes in the current state list (which should include a
//! `time`-keyed condition holding the tick counter); the trigger matches its
//! conditions against the states and reduces the time value modulo one year
//! to decide whether it is at its firing instant.
//!
//! The boolean `triggered` flag persists between calls: a trigger that fired
//! stays on through ticks where its conditions still match but the time test
//! fails, and only drops when its conditions stop matching entirely.

use tl_core::{Condition, ticks_per_year};

/// State key carrying the current tick counter.
pub const TIME_KEY: &str = "time";
/// Condition key naming the tick at which a triggered window closes.
pub const END_TIME_KEY: &str = "end_time";

#[derive(Debug, Clone)]
pub struct TriggerEvent {
    /// Target position within the year, in ticks.
    at: i64,
    conditions: Vec<Condition>,
    triggered: bool,
}

impl TriggerEvent {
    pub fn new(at: i64, conditions: Vec<Condition>) -> Self {
        Self { at, conditions, triggered: false }
    }

    pub fn at(&self) -> i64 {
        self.at
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Re-evaluate the trigger against the current states and return the
    /// (possibly updated) flag.
    ///
    /// One scan over `states`: the latest `time`-keyed value is remembered,
    /// and every configured condition matching a state adds its importance to
    /// a support total, stopping early once the total reaches 1.0.  Then:
    ///
    /// * support > 0 and `time % ticks-per-year` equals the target → fire;
    /// * support > 0 otherwise → leave the flag as it is (an active trigger
    ///   is sustained without re-arming; a missing `time` state counts as a
    ///   failed time test);
    /// * no support at all → drop the flag, even if it was on.
    pub fn check(&mut self, states: &[Condition]) -> bool {
        let mut total = 0.0;
        let mut current_time: Option<i64> = None;

        'scan: for state in states {
            if state.key == TIME_KEY {
                current_time = state.value.as_int();
            }
            for cond in &self.conditions {
                if cond.matches(state) {
                    total += cond.importance;
                }
                if total >= 1.0 {
                    break 'scan;
                }
            }
        }

        if total != 0.0 {
            if current_time.is_some_and(|t| t.rem_euclid(ticks_per_year() as i64) == self.at) {
                self.trigger();
            }
        } else {
            self.untrigger();
        }

        self.triggered
    }

    /// Whether an active trigger is still inside its window.
    ///
    /// Pairs every configured `end_time` condition with every `time` state:
    /// equal values mean the window just closed (false); a configured end
    /// strictly in the future means it is still open (true).  With no such
    /// pair at all the window is considered closed.
    pub fn should_last(&self, states: &[Condition]) -> bool {
        for state in states {
            for cond in &self.conditions {
                if cond.key == END_TIME_KEY && state.key == TIME_KEY {
                    if cond.value == state.value {
                        return false;
                    }
                    if cond.value > state.value {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Force the flag on.
    pub fn trigger(&mut self) {
        self.triggered = true;
    }

    /// Force the flag off.
    pub fn untrigger(&mut self) {
        self.triggered = false;
    }
}
