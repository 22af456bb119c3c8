//! `Habit` — a trigger wrapped with start/stop hysteresis.
//!
//! A habit owns a [`TriggerEvent`] and an opaque [`Action`] payload.  Each
//! tick the driver calls [`Habit::check`]; the habit re-evaluates its
//! trigger, starts when the trigger comes on, keeps going while the
//! trigger's window lasts, and stops when the window closes.  The `launched`
//! flag is what the driver reads to know whether the action is in progress.
//!
//! The one-shot form (an *event* — a founding feast, a wedding) is the same
//! machine with a latch: once it has started once, it can never start again.

use tl_core::Condition;

use crate::trigger::TriggerEvent;

// ── Action ────────────────────────────────────────────────────────────────────

/// Opaque action payload.  The engine never interprets it; the driver maps
/// the name onto whatever the town model does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub name: String,
}

impl Action {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

// ── Recurrence ────────────────────────────────────────────────────────────────

/// Whether a habit may restart after it has run once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Recurrence {
    /// May start again every time its trigger fires.
    Recurring,
    /// Starts at most once over the object's lifetime (an event).
    OneShot,
}

// ── Habit ─────────────────────────────────────────────────────────────────────

/// A recurring or one-shot activity driven by a trigger.
#[derive(Debug, Clone)]
pub struct Habit {
    name: String,
    trigger: TriggerEvent,
    action: Action,
    recurrence: Recurrence,
    launched: bool,
    /// Latch: set by the first successful start and never cleared.  For a
    /// one-shot habit this is what blocks every later start.
    has_fired: bool,
}

impl Habit {
    /// A habit that restarts whenever its trigger fires again.
    pub fn recurring(name: impl Into<String>, trigger: TriggerEvent, action: Action) -> Self {
        Self::with_recurrence(name, trigger, action, Recurrence::Recurring)
    }

    /// A one-shot event: fires at most once, ever.
    pub fn event(name: impl Into<String>, trigger: TriggerEvent, action: Action) -> Self {
        Self::with_recurrence(name, trigger, action, Recurrence::OneShot)
    }

    fn with_recurrence(
        name: impl Into<String>,
        trigger: TriggerEvent,
        action: Action,
        recurrence: Recurrence,
    ) -> Self {
        Self {
            name: name.into(),
            trigger,
            action,
            recurrence,
            launched: false,
            has_fired: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn trigger(&self) -> &TriggerEvent {
        &self.trigger
    }

    pub fn recurrence(&self) -> Recurrence {
        self.recurrence
    }

    /// `true` while the habit's action is in progress.
    pub fn is_launched(&self) -> bool {
        self.launched
    }

    /// `true` once the habit has started at least once.
    pub fn has_fired(&self) -> bool {
        self.has_fired
    }

    /// Re-evaluate against the current states and return whether the action
    /// is (now) in progress.
    ///
    /// Hysteresis: a freshly triggered, not-yet-launched habit starts; a
    /// launched habit stops only when its trigger's window has closed
    /// ([`TriggerEvent::should_last`] is false).  In between, nothing
    /// changes — the habit neither restarts nor flickers off while the
    /// trigger merely sustains.
    pub fn check(&mut self, states: &[Condition]) -> bool {
        self.trigger.check(states);

        if self.trigger.is_triggered() && !self.launched {
            self.start();
        } else if self.launched && !self.trigger.should_last(states) {
            self.stop();
        }

        self.launched
    }

    /// Begin the action.  A one-shot habit that has already fired ignores
    /// this forever after.
    pub fn start(&mut self) {
        if self.recurrence == Recurrence::OneShot && self.has_fired {
            return;
        }
        self.has_fired = true;
        self.launched = true;
    }

    /// End the action.
    pub fn stop(&mut self) {
        self.launched = false;
    }
}
