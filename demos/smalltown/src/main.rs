//! smalltown — smallest end-to-end demo of the townlife behavior engine.
//!
//! One villager, one behavior tree, two habits loaded from an embedded CSV.
//! The driver loop below stands in for the town/person model: each tick it
//! assembles the current world state as a list of conditions (including the
//! mandatory `time` entry), plays the tree, and checks every habit.

use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;

use tl_core::{Condition, SimClock};
use tl_habit::load_habits_reader;
use tl_tree::{BehaviorTree, Leaf, Sequence, Status};

// ── Constants ─────────────────────────────────────────────────────────────────

const TOTAL_TICKS: u64 = 600;
/// The villager gets hungry for the first 60 ticks of every 180-tick stretch.
const HUNGER_PERIOD: u64 = 180;
const HUNGER_SPAN: u64 = 60;
/// The market square is busy during this tick window.
const MARKET_OPEN: u64 = 470;
const MARKET_CLOSE: u64 = 520;

// ── Habit definitions ─────────────────────────────────────────────────────────

// The market habit fires at tick-of-year 480 and lasts until tick 520; the
// festival is a one-shot event at tick 100.
const HABITS_CSV: &str = "\
name,kind,at_tick,cond_key,cond_value,importance\n\
market_errand,habit,480,place,market,0.6\n\
market_errand,habit,480,end_time,520,0.0\n\
spring_festival,event,100,season,spring,1.2\n\
spring_festival,event,100,end_time,130,0.0\n\
";

// ── World state assembly ──────────────────────────────────────────────────────

/// Build the per-tick state list.  Callers of the engine rebuild this from
/// scratch every tick; nothing in it survives the call.
fn world_states(tick: u64) -> Vec<Condition> {
    let mut states = vec![
        Condition::new("time", tick as i64, 0.0),
        Condition::new("season", "spring", 0.0),
    ];
    if tick % HUNGER_PERIOD < HUNGER_SPAN {
        states.push(Condition::new("hungry", "yes", 0.0));
    }
    if (MARKET_OPEN..MARKET_CLOSE).contains(&tick) {
        states.push(Condition::new("place", "market", 0.0));
    }
    states
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let started = Instant::now();

    // The villager's tree: eating outranks everything when hunger support is
    // there; the morning routine is an ordered walk; idling always succeeds.
    let meals: Rc<RefCell<u32>> = Rc::default();
    let meal_sink = Rc::clone(&meals);

    let mut tree = BehaviorTree::new()
        .with_child(Leaf::new("eat", 0.3, Condition::new("hungry", "yes", 0.8)))
        .with_child(
            Sequence::new("morning_routine", 0.0)
                .with_child(Leaf::unconditional("wash"))
                .with_child(Leaf::unconditional("dress"))
                .with_child(Leaf::unconditional("leave_house")),
        )
        .with_child(Leaf::unconditional("idle"))
        .with_callback("eat", move |status, _states| {
            if status == Status::Success {
                *meal_sink.borrow_mut() += 1;
            }
        });

    let mut habits = load_habits_reader(Cursor::new(HABITS_CSV.as_bytes()))?;

    let mut clock = SimClock::new();
    let mut successes = 0u32;
    let mut failures = 0u32;

    while clock.tick < TOTAL_TICKS {
        let states = world_states(clock.tick);

        let outcome = tree.play(&states)?;
        match outcome.status {
            Status::Success => successes += 1,
            Status::Failure => failures += 1,
            Status::Running => {}
        }

        for habit in &mut habits {
            let was = habit.is_launched();
            let now = habit.check(&states);
            if was != now {
                let verb = if now { "starts" } else { "stops" };
                println!("{clock}: {} {verb} ({})", habit.name(), habit.action());
            }
        }

        clock.advance();
    }

    println!();
    println!("ran {TOTAL_TICKS} ticks in {:?}", started.elapsed());
    println!("tree: {successes} successes, {failures} failures");
    println!("meals eaten: {}", meals.borrow());
    for habit in &habits {
        println!(
            "{}: fired={} launched_at_end={}",
            habit.name(),
            habit.has_fired(),
            habit.is_launched()
        );
    }

    Ok(())
}
