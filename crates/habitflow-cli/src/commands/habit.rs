use chrono::NaiveDate;
use clap::Subcommand;

use habitflow_core::{
    ActiveWindow, Clock, Habit, HabitRepository, RecurrenceRule, SystemClock,
};

use crate::config::Config;
use crate::state::AppState;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a habit
    Add {
        title: String,
        /// Daily goal (count to reach per scheduled day)
        #[arg(long)]
        goal: Option<u32>,
        /// Comma-separated weekday indices, Sunday = 0 (omit for daily)
        #[arg(long)]
        weekdays: Option<String>,
        /// First scheduled day (defaults to today)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Last scheduled day (omit for open-ended)
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// List habits as JSON
    List,
    /// Delete a habit by id or exact title
    Remove { habit: String },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut state = AppState::load()?;
    let clock = SystemClock;

    match action {
        HabitAction::Add {
            title,
            goal,
            weekdays,
            start,
            end,
        } => {
            let rule = match weekdays {
                None => RecurrenceRule::Daily,
                Some(raw) => {
                    let days = raw
                        .split(',')
                        .map(|part| part.trim().parse::<u8>())
                        .collect::<Result<Vec<u8>, _>>()?;
                    RecurrenceRule::weekday_set(days)?
                }
            };
            let start = start.unwrap_or_else(|| clock.today());
            let window = match end {
                Some(end) => ActiveWindow::bounded(start, end),
                None => ActiveWindow::open_ended(start),
            };
            let habit = Habit::new(
                config.owner.clone(),
                title,
                goal.unwrap_or(config.default_goal),
                rule,
                window,
                clock.now(),
            )?;
            let id = habit.id;
            let title = habit.title.clone();
            state.habits.create(habit)?;
            state.save()?;
            println!("Habit created: {title} ({id})");
        }
        HabitAction::List => {
            let habits = state.habits.list(&config.owner)?;
            println!("{}", serde_json::to_string_pretty(&habits)?);
        }
        HabitAction::Remove { habit } => {
            let habit = state.resolve_habit(&config.owner, &habit)?;
            state.habits.delete(habit.id)?;
            state.save()?;
            println!("Habit removed: {}", habit.title);
        }
    }
    Ok(())
}
