//! Completion toggles: `done` and `undo` drive the streak engine.

use habitflow_core::{Clock, HabitRepository, SystemClock};

use crate::config::Config;
use crate::state::AppState;

pub fn done(needle: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut state = AppState::load()?;
    let today = SystemClock.today();

    let mut habit = state.resolve_habit(&config.owner, needle)?;
    habit.mark_completed(today);
    let (title, current, best) = (habit.title.clone(), habit.current_streak(), habit.best_streak());
    state.habits.update(habit)?;
    state.save()?;
    println!("Completed '{title}' on {today} (streak {current}, best {best})");
    Ok(())
}

pub fn undo(needle: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut state = AppState::load()?;
    let today = SystemClock.today();

    let mut habit = state.resolve_habit(&config.owner, needle)?;
    let before = habit.last_completed();
    habit.mark_incompleted(today);
    let changed = habit.last_completed() != before;
    let (title, current) = (habit.title.clone(), habit.current_streak());
    state.habits.update(habit)?;
    state.save()?;
    if changed {
        println!("Undid today's completion for '{title}' (streak {current})");
    } else {
        println!("Nothing to undo for '{title}'");
    }
    Ok(())
}
