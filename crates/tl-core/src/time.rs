//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing tick counter held in
//! [`SimClock`].  The mapping to calendar units is a fixed cascade of
//! integer ratios:
//!
//! ```text
//! 60 ticks = 1 minute, 60 minutes = 1 hour, 24 hours = 1 day,
//! 7 days = 1 week, 52 weeks = 1 year
//! ```
//!
//! Using an integer tick as the canonical time unit means all calendar
//! arithmetic is exact (no floating-point drift) and comparisons are O(1).
//! There is no unit below the tick: requests for a "seconds" conversion are
//! rejected at the name-parsing step rather than answered with a guessed
//! constant.

use std::fmt;

// ── Unit ratios ───────────────────────────────────────────────────────────────

/// Ticks in one simulated minute.
pub const TICKS_PER_MINUTE: u64 = 60;
/// Minutes in one hour.
pub const MINUTES_PER_HOUR: u64 = 60;
/// Hours in one day.
pub const HOURS_PER_DAY: u64 = 24;
/// Days in one week.
pub const DAYS_PER_WEEK: u64 = 7;
/// Weeks in one year.
pub const WEEKS_PER_YEAR: u64 = 52;

/// Length of one simulated year in raw ticks.
///
/// This is the modulus trigger evaluation uses to reduce an absolute tick
/// counter to a tick-of-year position.
pub fn ticks_per_year() -> u64 {
    TICKS_PER_MINUTE * TimeUnit::span(TimeUnit::Minute, TimeUnit::Year)
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// A monotonically increasing tick counter with calendar read-outs.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.  The
/// driver owns one clock per simulation and advances it once per tick; the
/// engine itself never advances time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick.  `u64` cannot realistically overflow: at one tick
    /// per simulated second of wall time it lasts ~585 billion years.
    pub tick: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Elapsed whole minutes since tick 0.
    #[inline]
    pub fn in_minutes(&self) -> u64 {
        self.tick / TICKS_PER_MINUTE
    }

    /// Elapsed whole hours since tick 0.
    #[inline]
    pub fn in_hours(&self) -> u64 {
        self.in_minutes() / MINUTES_PER_HOUR
    }

    /// Elapsed whole days since tick 0.
    #[inline]
    pub fn in_days(&self) -> u64 {
        self.in_hours() / HOURS_PER_DAY
    }

    /// Elapsed whole weeks since tick 0.
    #[inline]
    pub fn in_weeks(&self) -> u64 {
        self.in_days() / DAYS_PER_WEEK
    }

    /// Elapsed whole years since tick 0.
    #[inline]
    pub fn in_years(&self) -> u64 {
        self.in_weeks() / WEEKS_PER_YEAR
    }

    /// Position within the current year, in raw ticks.
    #[inline]
    pub fn tick_of_year(&self) -> u64 {
        self.tick % ticks_per_year()
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.tick)
    }
}

// ── TimeUnit ──────────────────────────────────────────────────────────────────

/// A named calendar unit, ordered finest to coarsest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
    Week,
    Year,
}

impl TimeUnit {
    /// All units, finest first.  `span` walks this order.
    const ORDER: [TimeUnit; 5] = [
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Year,
    ];

    /// Parse a unit name.  Accepts singular and plural, case-insensitive.
    ///
    /// Returns `None` for anything else — notably `"seconds"`, which has no
    /// defined ratio in this model.  Callers must treat `None` as a
    /// recoverable "no such unit" signal.
    pub fn parse(name: &str) -> Option<TimeUnit> {
        match name.to_ascii_lowercase().as_str() {
            "minute" | "minutes" => Some(TimeUnit::Minute),
            "hour" | "hours" => Some(TimeUnit::Hour),
            "day" | "days" => Some(TimeUnit::Day),
            "week" | "weeks" => Some(TimeUnit::Week),
            "year" | "years" => Some(TimeUnit::Year),
            _ => None,
        }
    }

    /// How many of the next-finer unit make up one of this unit.
    /// For `Minute` this is the tick ratio.
    #[inline]
    fn ratio(self) -> u64 {
        match self {
            TimeUnit::Minute => TICKS_PER_MINUTE,
            TimeUnit::Hour => MINUTES_PER_HOUR,
            TimeUnit::Day => HOURS_PER_DAY,
            TimeUnit::Week => DAYS_PER_WEEK,
            TimeUnit::Year => WEEKS_PER_YEAR,
        }
    }

    /// Position in [`Self::ORDER`].
    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// The multiplicative conversion factor between two units: how many of
    /// the finer unit fit in one of the coarser.
    ///
    /// The factor is the product of the ratio constants strictly above the
    /// finer unit up to and including the coarser one, so
    /// `span(Minute, Hour) == 60`, `span(Minute, Day) == 60 * 24`, and
    /// `span(Minute, Year) == 60 * 24 * 7 * 52`.  Direction does not matter:
    /// `span(Hour, Minute)` returns the same magnitude as its mirror.
    pub fn span(x: TimeUnit, y: TimeUnit) -> u64 {
        let (lo, hi) = if x.index() <= y.index() { (x, y) } else { (y, x) };
        Self::ORDER[lo.index() + 1..=hi.index()]
            .iter()
            .map(|u| u.ratio())
            .product()
    }

    /// [`Self::span`] by unit name.  `None` if either name is unrecognized.
    pub fn span_by_name(x: &str, y: &str) -> Option<u64> {
        Some(Self::span(Self::parse(x)?, Self::parse(y)?))
    }

    /// Length of one year expressed in this unit, by cascading down from
    /// years one ratio at a time.
    pub fn year_length(self) -> u64 {
        match self {
            TimeUnit::Year => 1,
            TimeUnit::Week => WEEKS_PER_YEAR,
            TimeUnit::Day => DAYS_PER_WEEK * TimeUnit::Week.year_length(),
            TimeUnit::Hour => HOURS_PER_DAY * TimeUnit::Day.year_length(),
            TimeUnit::Minute => MINUTES_PER_HOUR * TimeUnit::Hour.year_length(),
        }
    }

    /// [`Self::year_length`] by unit name.  `None` if the name is
    /// unrecognized — including `"seconds"`, which this model cannot express.
    pub fn year_length_by_name(name: &str) -> Option<u64> {
        Self::parse(name).map(Self::year_length)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Year => "year",
        };
        f.write_str(name)
    }
}
