//! Unit tests for tl-habit.

use tl_core::{Condition, Value, ticks_per_year};

use crate::{Action, Habit, HabitError, Recurrence, TriggerEvent, load_habits_reader};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Trigger for a temple visit firing at tick-of-year 480, window closing at
/// tick 520.
fn temple_trigger() -> TriggerEvent {
    TriggerEvent::new(
        480,
        vec![
            Condition::new("place", "temple", 1.2),
            Condition::new("end_time", 520_i64, 0.0),
        ],
    )
}

/// State list at tick `t` with the temple in sight.
fn temple_states(t: i64) -> Vec<Condition> {
    vec![
        Condition::new("time", t, 0.0),
        Condition::new("place", "temple", 0.0),
    ]
}

/// State list at tick `t` with nothing of interest around.
fn bare_states(t: i64) -> Vec<Condition> {
    vec![Condition::new("time", t, 0.0)]
}

// ── TriggerEvent ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod trigger {
    use super::*;

    #[test]
    fn fires_at_its_tick_of_year() {
        let mut trig = temple_trigger();
        assert!(!trig.is_triggered());
        assert!(trig.check(&temple_states(480)));
        assert!(trig.is_triggered());
    }

    #[test]
    fn does_not_fire_off_schedule() {
        let mut trig = temple_trigger();
        assert!(!trig.check(&temple_states(481)));
    }

    #[test]
    fn fires_again_next_year() {
        let mut trig = temple_trigger();
        let next_year = ticks_per_year() as i64 + 480;
        assert!(trig.check(&temple_states(next_year)));
    }

    #[test]
    fn sustained_while_conditions_still_match() {
        let mut trig = temple_trigger();
        trig.check(&temple_states(480));
        // Off the firing instant, but the place still matches: the flag holds.
        assert!(trig.check(&temple_states(481)));
        assert!(trig.check(&temple_states(519)));
    }

    #[test]
    fn drops_when_nothing_matches_any_more() {
        let mut trig = temple_trigger();
        trig.check(&temple_states(480));
        assert!(trig.is_triggered());
        // No state matches any configured condition: unconditionally off.
        assert!(!trig.check(&bare_states(481)));
        assert!(!trig.is_triggered());
    }

    #[test]
    fn partial_support_is_still_support() {
        // A single 0.3-importance match is nonzero support: enough to fire
        // at the right instant.
        let mut trig = TriggerEvent::new(100, vec![Condition::new("mood", "curious", 0.3)]);
        let states = vec![
            Condition::new("time", 100_i64, 0.0),
            Condition::new("mood", "curious", 0.0),
        ];
        assert!(trig.check(&states));
    }

    #[test]
    fn without_a_time_state_it_never_fires_but_sustains() {
        let mut trig = temple_trigger();
        let no_time = vec![Condition::new("place", "temple", 0.0)];
        assert!(!trig.check(&no_time));

        // Once on, the same stateless list sustains it.
        trig.trigger();
        assert!(trig.check(&no_time));
    }

    #[test]
    fn should_last_window() {
        let trig = temple_trigger(); // end_time = 520
        assert!(trig.should_last(&bare_states(500))); // still open
        assert!(!trig.should_last(&bare_states(520))); // closes exactly here
        assert!(!trig.should_last(&bare_states(600))); // already past
    }

    #[test]
    fn should_last_is_false_without_an_end_time() {
        let trig = TriggerEvent::new(0, vec![Condition::new("place", "temple", 1.2)]);
        assert!(!trig.should_last(&bare_states(10)));
    }
}

// ── Habit ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod habit {
    use super::*;

    fn temple_habit() -> Habit {
        Habit::recurring("worship", temple_trigger(), Action::new("worship"))
    }

    #[test]
    fn launches_when_its_trigger_fires() {
        let mut habit = temple_habit();
        assert!(!habit.is_launched());
        assert!(habit.check(&temple_states(480)));
        assert!(habit.is_launched());
        assert!(habit.has_fired());
    }

    #[test]
    fn keeps_going_while_the_window_lasts() {
        let mut habit = temple_habit();
        habit.check(&temple_states(480));
        for t in 481..520 {
            assert!(habit.check(&temple_states(t)), "dropped early at tick {t}");
        }
    }

    #[test]
    fn stops_when_the_window_closes() {
        let mut habit = temple_habit();
        habit.check(&temple_states(480));
        assert!(!habit.check(&temple_states(520)));
        assert!(!habit.is_launched());
    }

    #[test]
    fn survives_a_dropped_trigger_inside_the_window() {
        // Hysteresis: the trigger untriggers (no support), but the window is
        // still open, so the launched action carries on.
        let mut habit = temple_habit();
        habit.check(&temple_states(480));
        assert!(habit.check(&bare_states(490)));
    }

    #[test]
    fn restarts_next_year() {
        let mut habit = temple_habit();
        habit.check(&temple_states(480));
        habit.check(&temple_states(520)); // window closes
        habit.check(&bare_states(521)); // trigger drops

        let next_year = ticks_per_year() as i64 + 480;
        assert!(habit.check(&temple_states(next_year)));
    }
}

// ── One-shot events ───────────────────────────────────────────────────────────

#[cfg(test)]
mod event {
    use super::*;

    fn feast() -> Habit {
        Habit::event("feast", temple_trigger(), Action::new("feast"))
    }

    #[test]
    fn fires_exactly_once() {
        let mut ev = feast();
        assert!(ev.check(&temple_states(480)));
        ev.check(&temple_states(520)); // window closes, stops
        ev.check(&bare_states(521)); // trigger drops

        // Same firing conditions a year later: nothing happens.
        let next_year = ticks_per_year() as i64 + 480;
        assert!(!ev.check(&temple_states(next_year)));
        assert!(ev.has_fired());
    }

    #[test]
    fn start_is_idempotent_after_the_first() {
        let mut ev = feast();
        ev.start();
        assert!(ev.is_launched());
        ev.stop();
        ev.start(); // latched: no effect
        assert!(!ev.is_launched());
        assert!(ev.has_fired());
    }

    #[test]
    fn recurring_habits_restart_freely() {
        let mut habit = Habit::recurring("worship", temple_trigger(), Action::new("worship"));
        habit.start();
        habit.stop();
        habit.start();
        assert!(habit.is_launched());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;

    const CSV: &[u8] = b"\
name,kind,at_tick,cond_key,cond_value,importance\n\
market,habit,480,place,market,0.6\n\
market,habit,480,weekday,saturday,0.6\n\
market,habit,480,end_time,520,0.0\n\
feast,event,0,season,spring,1.2\n\
";

    #[test]
    fn groups_rows_into_habits_in_first_appearance_order() {
        let habits = load_habits_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(habits.len(), 2);
        assert_eq!(habits[0].name(), "market");
        assert_eq!(habits[1].name(), "feast");
    }

    #[test]
    fn kinds_and_targets() {
        let habits = load_habits_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(habits[0].recurrence(), Recurrence::Recurring);
        assert_eq!(habits[0].trigger().at(), 480);
        assert_eq!(habits[1].recurrence(), Recurrence::OneShot);
        assert_eq!(habits[1].trigger().at(), 0);
    }

    #[test]
    fn values_parse_as_int_when_numeric() {
        let habits = load_habits_reader(Cursor::new(CSV)).unwrap();
        let conds = habits[0].trigger().conditions();
        assert_eq!(conds.len(), 3);
        assert_eq!(conds[0].value, Value::Text("market".into()));
        assert_eq!(conds[2].key, "end_time");
        assert_eq!(conds[2].value, Value::Int(520));
    }

    #[test]
    fn action_is_named_after_the_habit() {
        let habits = load_habits_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(habits[0].action().name, "market");
    }

    #[test]
    fn invalid_kind_errors() {
        let bad = b"\
name,kind,at_tick,cond_key,cond_value,importance\n\
market,sometimes,480,place,market,0.6\n\
";
        let result = load_habits_reader(Cursor::new(bad.as_slice()));
        assert!(matches!(result, Err(HabitError::Parse(_))));
    }

    #[test]
    fn rows_disagreeing_on_kind_error() {
        let bad = b"\
name,kind,at_tick,cond_key,cond_value,importance\n\
market,habit,480,place,market,0.6\n\
market,event,480,weekday,saturday,0.6\n\
";
        let result = load_habits_reader(Cursor::new(bad.as_slice()));
        assert!(matches!(result, Err(HabitError::Parse(_))));
    }

    #[test]
    fn loaded_habit_runs_end_to_end() {
        let mut habits = load_habits_reader(Cursor::new(CSV)).unwrap();
        let market = &mut habits[0];

        let states = vec![
            Condition::new("time", 480_i64, 0.0),
            Condition::new("place", "market", 0.0),
            Condition::new("weekday", "saturday", 0.0),
        ];
        assert!(market.check(&states));
    }
}
