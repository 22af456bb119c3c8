//! Tick results: `Status` and `Outcome`.

use std::fmt;

/// The result of playing a node for one tick.
///
/// `Running` from a composite means its scheduling cursor has not wrapped
/// back to the first child yet; from a sequence it means the walk is mid-way
/// through its children.  Leaves only ever report `Success` or `Failure`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Success,
    Failure,
    Running,
}

impl Status {
    /// `true` for the two terminal values.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Status::Running
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Success => "success",
            Status::Failure => "failure",
            Status::Running => "running",
        };
        f.write_str(s)
    }
}

/// What one `play` call produced: a status plus the name of the node the
/// result originated from.
///
/// `from` always names the *acting* node along the selected path (for a leaf,
/// itself) — composites and sequences pass it through unchanged, so the
/// driver can attribute every tick to a concrete terminal action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub status: Status,
    pub from: String,
}

impl Outcome {
    pub fn new(status: Status, from: impl Into<String>) -> Self {
        Self { status, from: from.into() }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {}", self.status, self.from)
    }
}
