//! The node hierarchy: `Composite`, `Sequence`, and `Leaf` behind the
//! [`Node`] tagged enum.
//!
//! # Scheduling model
//!
//! A composite does *not* evaluate its whole subtree per tick.  Each `play`
//! call selects exactly one child — by round-robin cursor, or by priority
//! rank when any child opts in — and plays it, so one call descends a single
//! path of depth equal to the tree's height.  The cursors (`cursor` on
//! composites, `current` on sequences) persist across calls: they are the
//! "where we paused" state of the schedule, held as plain integers rather
//! than suspended control flow.
//!
//! # Status semantics
//!
//! A composite's reported status describes *scheduling progress*, not the
//! child's outcome: `Running` while the cursor has not wrapped, `Success`
//! once it wraps to 0.  The child's own result only decides whether the
//! cursor advances.  The `from` field is passed through untouched so the
//! driver always learns which terminal acted.

use std::cmp::Ordering;

use tl_core::{Condition, TlError, TlResult};

use crate::status::{Outcome, Status};

// ── Node ──────────────────────────────────────────────────────────────────────

/// A behavior-tree node.  Closed set: matching on this enum is the only
/// dispatch mechanism, there is no open subclassing.
#[derive(Debug)]
pub enum Node {
    Composite(Composite),
    Sequence(Sequence),
    Leaf(Leaf),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Composite(n) => &n.name,
            Node::Sequence(n) => &n.name,
            Node::Leaf(n) => &n.name,
        }
    }

    pub fn priority(&self) -> f64 {
        match self {
            Node::Composite(n) => n.priority,
            Node::Sequence(n) => n.priority,
            Node::Leaf(n) => n.priority,
        }
    }

    /// Play this node for one tick against the current world state.
    pub fn play(&mut self, states: &[Condition]) -> TlResult<Outcome> {
        match self {
            Node::Composite(n) => n.play(states),
            Node::Sequence(n) => n.play(states),
            Node::Leaf(n) => Ok(n.play(states)),
        }
    }

    /// Append a child.  Leaves are terminal and reject this.
    pub fn add_child(&mut self, child: Node) -> TlResult<&mut Node> {
        let children = self.children_mut()?;
        children.push(child);
        Ok(self)
    }

    /// Find a direct child by name.
    pub fn child_by_name(&self, name: &str) -> TlResult<&Node> {
        match self {
            Node::Leaf(leaf) => Err(TlError::LeafChild { leaf: leaf.name.clone() }),
            _ => self
                .children()
                .iter()
                .find(|c| c.name() == name)
                .ok_or_else(|| TlError::ChildNotFound {
                    name: name.to_owned(),
                    parent: self.name().to_owned(),
                }),
        }
    }

    /// Remove the last direct child with the given name.  Removing an absent
    /// name is a no-op, not an error.
    pub fn remove_child(&mut self, name: &str) -> TlResult<&mut Node> {
        let children = self.children_mut()?;
        if let Some(idx) = children.iter().rposition(|c| c.name() == name) {
            children.remove(idx);
        }
        Ok(self)
    }

    fn children(&self) -> &[Node] {
        match self {
            Node::Composite(n) => &n.children,
            Node::Sequence(n) => &n.children,
            Node::Leaf(_) => &[],
        }
    }

    fn children_mut(&mut self) -> TlResult<&mut Vec<Node>> {
        match self {
            Node::Composite(n) => Ok(&mut n.children),
            Node::Sequence(n) => Ok(&mut n.children),
            Node::Leaf(leaf) => Err(TlError::LeafChild { leaf: leaf.name.clone() }),
        }
    }
}

impl From<Composite> for Node {
    fn from(n: Composite) -> Node {
        Node::Composite(n)
    }
}

impl From<Sequence> for Node {
    fn from(n: Sequence) -> Node {
        Node::Sequence(n)
    }
}

impl From<Leaf> for Node {
    fn from(n: Leaf) -> Node {
        Node::Leaf(n)
    }
}

// ── Child selection (shared with the root) ────────────────────────────────────

/// Pick the child the cursor points at.
///
/// If no child carries a priority (max is 0), the cursor indexes declaration
/// order.  Otherwise it indexes a *stable descending* sort by priority, so
/// equal priorities keep their declaration order and selection stays
/// deterministic across calls as long as priorities are static.
pub(crate) fn select_child<'a>(children: &'a mut [Node], cursor: usize) -> &'a mut Node {
    let max_priority = children.iter().map(Node::priority).fold(0.0_f64, f64::max);
    if max_priority > 0.0 {
        let mut order: Vec<usize> = (0..children.len()).collect();
        order.sort_by(|&a, &b| {
            children[b]
                .priority()
                .partial_cmp(&children[a].priority())
                .unwrap_or(Ordering::Equal)
        });
        &mut children[order[cursor]]
    } else {
        &mut children[cursor]
    }
}

// ── Composite ─────────────────────────────────────────────────────────────────

/// The priority round-robin composite.
#[derive(Debug, Default)]
pub struct Composite {
    pub name: String,
    /// 0 means "no priority weighting" — a parent scheduling this node by
    /// round-robin ignores it entirely.
    pub priority: f64,
    pub children: Vec<Node>,
    /// Round-robin position, always reduced modulo the child count right
    /// after use.
    cursor: usize,
}

impl Composite {
    pub fn new(name: impl Into<String>, priority: f64) -> Self {
        Self {
            name: name.into(),
            priority,
            children: Vec::new(),
            cursor: 0,
        }
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Play the child under the cursor, advance the cursor past terminal
    /// results, and report scheduling progress.
    pub fn play(&mut self, states: &[Condition]) -> TlResult<Outcome> {
        if self.children.is_empty() {
            return Err(TlError::EmptyNode { name: self.name.clone() });
        }

        let child = select_child(&mut self.children, self.cursor);
        let inner = child.play(states)?;

        if inner.status.is_terminal() {
            self.cursor += 1;
        }
        self.cursor %= self.children.len();

        // The child's status is deliberately overwritten: the composite
        // reports whether its round-robin cycle has wrapped, and only `from`
        // survives from below.
        let status = if self.cursor != 0 { Status::Running } else { Status::Success };
        Ok(Outcome { status, from: inner.from })
    }
}

// ── Sequence ──────────────────────────────────────────────────────────────────

/// An ordered composite: walks children strictly in declaration order,
/// looping back to the first on overflow, resetting on any failure.
#[derive(Debug, Default)]
pub struct Sequence {
    pub name: String,
    pub priority: f64,
    pub children: Vec<Node>,
    /// Walk position.  Reset to 0 by any child failure.
    current: usize,
}

impl Sequence {
    pub fn new(name: impl Into<String>, priority: f64) -> Self {
        Self {
            name: name.into(),
            priority,
            children: Vec::new(),
            current: 0,
        }
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Play the next child in declaration order.
    ///
    /// `Success` is reported only when the child that just played was the
    /// last of the walk; earlier successes report `Running`.  A failure
    /// resets the walk to the beginning.  `from` is always the acting
    /// child's name, never the sequence's own.
    pub fn play(&mut self, states: &[Condition]) -> TlResult<Outcome> {
        if self.children.is_empty() {
            return Err(TlError::EmptyNode { name: self.name.clone() });
        }

        let inner = if self.current < self.children.len() {
            let out = self.children[self.current].play(states)?;
            self.current += 1;
            out
        } else {
            // Walked off the end last time: loop back to the first child.
            let out = self.children[0].play(states)?;
            self.current = 1;
            out
        };

        let status = match inner.status {
            Status::Success if self.current < self.children.len() => Status::Running,
            Status::Success => Status::Success,
            Status::Failure => {
                self.current = 0;
                Status::Failure
            }
            Status::Running => Status::Running,
        };

        Ok(Outcome { status, from: inner.from })
    }
}

// ── Leaf ──────────────────────────────────────────────────────────────────────

/// A terminal node gated by a single condition.
///
/// Structurally childless: every child-manipulation call on a `Node::Leaf`
/// is rejected with [`TlError::LeafChild`].
#[derive(Debug)]
pub struct Leaf {
    pub name: String,
    /// Contributes to the activation total as a head start: a leaf with
    /// priority 0.9 needs little state support to fire.
    pub priority: f64,
    pub cond: Condition,
}

impl Leaf {
    pub fn new(name: impl Into<String>, priority: f64, cond: Condition) -> Self {
        Self { name: name.into(), priority, cond }
    }

    /// A leaf that succeeds on every tick.
    pub fn unconditional(name: impl Into<String>) -> Self {
        Self::new(name, 0.0, Condition::always())
    }

    /// Accumulate support for this leaf from the current state list.
    ///
    /// Starting from `priority`, every state matching the leaf's condition
    /// adds the condition's importance; the loop stops once the total
    /// reaches 1.0, but success requires *strictly more* than 1.0 — a total
    /// of exactly 1.0 ends the scan and still fails.  An unconditional leaf
    /// (empty key or value) always succeeds.
    pub fn check(&self, states: &[Condition]) -> bool {
        if self.cond.is_unconditional() {
            return true;
        }

        let mut total = self.priority;
        for state in states {
            if self.cond.matches(state) {
                total += self.cond.importance;
            }
            if total >= 1.0 {
                break;
            }
        }
        total > 1.0
    }

    /// `Success` iff [`check`][Self::check] passes; `from` is always the
    /// leaf's own name.
    pub fn play(&self, states: &[Condition]) -> Outcome {
        let status = if self.check(states) { Status::Success } else { Status::Failure };
        Outcome::new(status, self.name.clone())
    }
}
