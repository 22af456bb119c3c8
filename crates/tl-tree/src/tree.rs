//! `BehaviorTree` — the root node with callback dispatch.

use std::collections::HashMap;
use std::fmt;

use tl_core::{Condition, TlError, TlResult};

use crate::node::{Node, select_child};
use crate::status::{Outcome, Status};

/// A callback invoked when a tick's result originated from the node it is
/// registered under.  Receives the result status and the state list the tick
/// was evaluated against.
///
/// Boxed `FnMut` so drivers can close over their own state mutably (counters,
/// queues, the town model) without any ceremony.
pub type Callback = Box<dyn FnMut(Status, &[Condition])>;

/// The root of a behavior tree.
///
/// Selection is the same priority round-robin as [`Composite`][crate::Composite],
/// with two differences:
///
/// * the returned status is the selected child's *actual* status, never
///   overwritten with scheduling progress;
/// * after each play, a callback registered under the result's `from` name is
///   invoked synchronously — the engine's only externally observable side
///   effect beyond the return value.
///
/// The root is always named `"main"`.
pub struct BehaviorTree {
    children: Vec<Node>,
    cursor: usize,
    callbacks: HashMap<String, Callback>,
}

impl BehaviorTree {
    pub const NAME: &'static str = "main";

    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            cursor: 0,
            callbacks: HashMap::new(),
        }
    }

    /// Append a top-level child.
    pub fn add_child(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Register `cb` to run whenever a tick's result comes from the node
    /// named `name`.  A later registration under the same name replaces the
    /// earlier one.
    pub fn on(
        &mut self,
        name: impl Into<String>,
        cb: impl FnMut(Status, &[Condition]) + 'static,
    ) -> &mut Self {
        self.callbacks.insert(name.into(), Box::new(cb));
        self
    }

    /// Builder-style callback registration.
    pub fn with_callback(
        mut self,
        name: impl Into<String>,
        cb: impl FnMut(Status, &[Condition]) + 'static,
    ) -> Self {
        self.callbacks.insert(name.into(), Box::new(cb));
        self
    }

    /// Find a direct child by name.
    pub fn child_by_name(&self, name: &str) -> TlResult<&Node> {
        self.children
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| TlError::ChildNotFound {
                name: name.to_owned(),
                parent: Self::NAME.to_owned(),
            })
    }

    /// Remove the last direct child with the given name (no-op when absent).
    pub fn remove_child(&mut self, name: &str) -> &mut Self {
        if let Some(idx) = self.children.iter().rposition(|c| c.name() == name) {
            self.children.remove(idx);
        }
        self
    }

    /// Evaluate one tick: select one child, play it, advance the cursor past
    /// terminal results, dispatch any matching callback, and hand the child's
    /// outcome back unchanged.
    pub fn play(&mut self, states: &[Condition]) -> TlResult<Outcome> {
        if self.children.is_empty() {
            return Err(TlError::EmptyNode { name: Self::NAME.to_owned() });
        }

        let child = select_child(&mut self.children, self.cursor);
        let outcome = child.play(states)?;

        if outcome.status != Status::Running {
            self.cursor += 1;
        }
        self.cursor %= self.children.len();

        if let Some(cb) = self.callbacks.get_mut(&outcome.from) {
            cb(outcome.status, states);
        }

        Ok(outcome)
    }
}

impl Default for BehaviorTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BehaviorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorTree")
            .field("children", &self.children)
            .field("cursor", &self.cursor)
            .field("callbacks", &self.callbacks.keys())
            .finish()
    }
}
