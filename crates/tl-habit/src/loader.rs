//! CSV habit loader.
//!
//! # CSV format
//!
//! One row per trigger condition.  Rows sharing a `name` form one habit and
//! must agree on `kind` and `at_tick`.
//!
//! ```csv
//! name,kind,at_tick,cond_key,cond_value,importance
//! market,habit,480,place,market,0.6
//! market,habit,480,weekday,saturday,0.6
//! founding_feast,event,0,season,spring,1.2
//! ```
//!
//! **`kind`** field:
//!
//! | Value   | Meaning                                  |
//! |---------|------------------------------------------|
//! | `habit` | [`Habit::recurring`] — restartable       |
//! | `event` | [`Habit::event`] — fires at most once    |
//!
//! `cond_value` is parsed as an `i64` when possible (tick counts such as
//! `end_time` values), otherwise kept as text.  The habit's [`Action`] is
//! named after the habit itself; mapping action names onto town-model
//! behavior is the driver's job.
//!
//! Habits come back in first-appearance order, so a definition file doubles
//! as a stable registration order for the driver's check loop.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tl_core::{Condition, Value};

use crate::habit::{Action, Habit};
use crate::trigger::TriggerEvent;
use crate::HabitError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct HabitRecord {
    name:       String,
    kind:       String,
    at_tick:    i64,
    cond_key:   String,
    cond_value: String,
    importance: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load habit definitions from a CSV file.
pub fn load_habits_csv(path: &Path) -> Result<Vec<Habit>, HabitError> {
    let file = std::fs::File::open(path).map_err(HabitError::Io)?;
    load_habits_reader(file)
}

/// Like [`load_habits_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded definitions.
pub fn load_habits_reader<R: Read>(reader: R) -> Result<Vec<Habit>, HabitError> {
    // ── Parse CSV rows, grouped by habit name ─────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut order: Vec<String> = Vec::new();
    let mut by_name: HashMap<String, Vec<HabitRecord>> = HashMap::new();

    for result in csv_reader.deserialize::<HabitRecord>() {
        let row = result.map_err(|e| HabitError::Parse(e.to_string()))?;
        if !by_name.contains_key(&row.name) {
            order.push(row.name.clone());
        }
        by_name.entry(row.name.clone()).or_default().push(row);
    }

    // ── Build one Habit per name, in first-appearance order ───────────────
    let mut habits = Vec::with_capacity(order.len());

    for name in order {
        let Some(rows) = by_name.remove(&name) else { continue };

        let one_shot = parse_kind(&rows[0].kind)?;
        let at = rows[0].at_tick;
        for row in &rows[1..] {
            if parse_kind(&row.kind)? != one_shot || row.at_tick != at {
                return Err(HabitError::Parse(format!(
                    "habit {name:?}: rows disagree on kind/at_tick"
                )));
            }
        }

        let conditions: Vec<Condition> = rows
            .iter()
            .map(|r| Condition::new(r.cond_key.as_str(), parse_value(&r.cond_value), r.importance))
            .collect();

        let trigger = TriggerEvent::new(at, conditions);
        let action = Action::new(name.as_str());
        habits.push(if one_shot {
            Habit::event(name, trigger, action)
        } else {
            Habit::recurring(name, trigger, action)
        });
    }

    Ok(habits)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `true` for the one-shot `event` kind.
fn parse_kind(s: &str) -> Result<bool, HabitError> {
    match s.trim() {
        "habit" => Ok(false),
        "event" => Ok(true),
        other => Err(HabitError::Parse(format!(
            "invalid kind {other:?}: expected \"habit\" or \"event\""
        ))),
    }
}

fn parse_value(s: &str) -> Value {
    let s = s.trim();
    s.parse::<i64>()
        .map(Value::Int)
        .unwrap_or_else(|_| Value::Text(s.to_owned()))
}
