use chrono::{Duration, NaiveDate};
use clap::{Args, ValueEnum};
use serde::Serialize;

use habitflow_core::{
    build_summary, rollup, Clock, Habit, HabitRepository, ProgressRepository, RollupBucket,
    RollupPeriod, SystemClock,
};

use crate::config::Config;
use crate::state::AppState;

#[derive(Clone, Copy, ValueEnum)]
pub enum RollupArg {
    Week,
    Month,
}

impl From<RollupArg> for RollupPeriod {
    fn from(value: RollupArg) -> Self {
        match value {
            RollupArg::Week => RollupPeriod::Week,
            RollupArg::Month => RollupPeriod::Month,
        }
    }
}

#[derive(Args)]
pub struct StatsArgs {
    /// Habit id or exact title (omit for all habits)
    pub habit: Option<String>,
    /// Also report week or month buckets over the window
    #[arg(long)]
    pub rollup: Option<RollupArg>,
}

#[derive(Serialize)]
struct HabitStats {
    id: uuid::Uuid,
    title: String,
    current_streak: u32,
    best_streak: u32,
    last_completed: Option<NaiveDate>,
    scheduled_days: u32,
    completed_days: u32,
    percent_complete: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    rollup: Option<Vec<RollupBucket>>,
}

pub fn run(args: StatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let state = AppState::load()?;
    let today = SystemClock.today();

    let habits = match &args.habit {
        Some(needle) => vec![state.resolve_habit(&config.owner, needle)?],
        None => state.habits.list(&config.owner)?,
    };

    let reports: Vec<HabitStats> = habits
        .iter()
        .map(|habit| habit_stats(habit, &state, config.window_days, today, args.rollup))
        .collect::<Result<_, Box<dyn std::error::Error>>>()?;

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

fn habit_stats(
    habit: &Habit,
    state: &AppState,
    window_days: u32,
    today: NaiveDate,
    period: Option<RollupArg>,
) -> Result<HabitStats, Box<dyn std::error::Error>> {
    let window_days = window_days.max(1);
    let start = today - Duration::days(i64::from(window_days) - 1);
    let records = state.progress.fetch_range(habit.id, start, today)?;
    let summary = build_summary(habit, &records, start, window_days, today);
    Ok(HabitStats {
        id: habit.id,
        title: habit.title.clone(),
        current_streak: habit.current_streak(),
        best_streak: habit.best_streak(),
        last_completed: habit.last_completed(),
        scheduled_days: summary.scheduled_days,
        completed_days: summary.completed_days,
        percent_complete: summary.percent_complete,
        rollup: period.map(|p| rollup(&summary, p.into())),
    })
}
