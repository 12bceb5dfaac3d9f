use chrono::NaiveDate;
use clap::Args;

use habitflow_core::{Clock, ProgressRecord, ProgressRepository, SystemClock};

use crate::config::Config;
use crate::state::AppState;

#[derive(Args)]
pub struct LogArgs {
    /// Habit id or exact title
    pub habit: String,
    /// Amount to add to the day's progress
    pub amount: u32,
    /// Day to log against (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Override the goal for that day
    #[arg(long)]
    pub goal: Option<u32>,
    /// Replace the day's progress instead of adding to it
    #[arg(long)]
    pub set: bool,
}

pub fn run(args: LogArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.goal == Some(0) {
        return Err("goal must be at least 1".into());
    }
    let config = Config::load()?;
    let mut state = AppState::load()?;
    let clock = SystemClock;

    let habit = state.resolve_habit(&config.owner, &args.habit)?;
    let day = args.date.unwrap_or_else(|| clock.today());
    let now = clock.now();

    let record = match state.progress.get(habit.id, day)? {
        Some(mut existing) => {
            if args.set {
                existing.set_progress(args.amount, now);
            } else {
                existing.increment(args.amount, now);
            }
            if let Some(goal) = args.goal {
                existing.goal = goal;
                existing.updated_at = now;
            }
            existing
        }
        None => ProgressRecord::new(
            habit.id,
            day,
            args.amount,
            args.goal.unwrap_or(habit.daily_goal),
            now,
        )?,
    };

    let (progress, goal) = (record.progress, record.goal);
    state.progress.upsert(record)?;
    state.save()?;
    println!("Logged {progress}/{goal} for '{}' on {day}", habit.title);
    Ok(())
}
