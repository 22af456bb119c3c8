//! `Condition` — the atomic unit of world state and of match criteria.
//!
//! A condition is a `(key, value, importance)` triple.  The same type plays
//! two roles:
//!
//! * **world state**: the driver assembles a fresh list of conditions each
//!   tick (`place = market`, `time = 480`, …) and passes it into every
//!   `play`/`check` call;
//! * **match criterion**: a leaf or trigger carries conditions describing
//!   what it is looking for, and `importance` says how much one match
//!   contributes to its activation total.
//!
//! Conditions are never mutated after construction.  There is no identity
//! beyond structural equality of key and value.

use std::cmp::Ordering;
use std::fmt;

// ── Value ─────────────────────────────────────────────────────────────────────

/// The value side of a condition: either an integer (tick counts, quantities)
/// or free text (place names, weekdays, …).
///
/// Equality is structural.  Ordering is defined only *within* a variant —
/// comparing an `Int` to a `Text` yields `None`, which match loops treat as
/// "no match" rather than a fault.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    /// `true` for the empty text value.  An empty value (like an empty key)
    /// makes a condition unconditional.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Text(s) if s.is_empty())
    }

    /// The integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
            (Value::Text(a), Value::Text(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

// ── Condition ─────────────────────────────────────────────────────────────────

/// A key/value/importance triple.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    pub key: String,
    pub value: Value,
    /// How much one match of this condition contributes to an activation
    /// total.  Totals are compared against a fixed 1.0 threshold.
    pub importance: f64,
}

impl Condition {
    pub fn new(key: impl Into<String>, value: impl Into<Value>, importance: f64) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            importance,
        }
    }

    /// The unconditional condition: empty key and value, zero importance.
    /// A leaf carrying it succeeds on every check.
    pub fn always() -> Self {
        Self::new("", "", 0.0)
    }

    /// `true` when the key or value is empty, i.e. this criterion matches
    /// unconditionally and contributes nothing to totals.
    pub fn is_unconditional(&self) -> bool {
        self.key.is_empty() || self.value.is_empty()
    }

    /// Structural key/value match against a state entry.  Importance does
    /// not participate in matching.
    #[inline]
    pub fn matches(&self, state: &Condition) -> bool {
        self.key == state.key && self.value == state.value
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.key, self.value, self.importance)
    }
}
