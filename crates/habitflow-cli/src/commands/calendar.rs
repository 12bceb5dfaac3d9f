use chrono::{Duration, NaiveDate};
use clap::Args;

use habitflow_core::{build_summary, Clock, ProgressRepository, SystemClock};

use crate::config::Config;
use crate::state::AppState;

#[derive(Args)]
pub struct CalendarArgs {
    /// Habit id or exact title
    pub habit: String,
    /// Window length in days (defaults to the configured window)
    #[arg(long)]
    pub days: Option<u32>,
    /// Last day of the window (defaults to today)
    #[arg(long)]
    pub end: Option<NaiveDate>,
}

pub fn run(args: CalendarArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let state = AppState::load()?;
    let today = SystemClock.today();

    let habit = state.resolve_habit(&config.owner, &args.habit)?;
    let days = args.days.unwrap_or(config.window_days).max(1);
    let end = args.end.unwrap_or(today);
    let start = end - Duration::days(i64::from(days) - 1);

    let records = state.progress.fetch_range(habit.id, start, end)?;
    let summary = build_summary(&habit, &records, start, days, today);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
