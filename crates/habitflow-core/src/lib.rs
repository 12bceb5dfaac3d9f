//! # Habitflow Core Library
//!
//! This library provides the scheduling, progress and streak engine behind
//! Habitflow. The hosting app (screens, notifications, sync) is a thin layer
//! over this crate; everything here is deterministic and free of I/O.
//!
//! ## Architecture
//!
//! - **Calendar**: day-granularity date math over a fixed UTC reference
//!   calendar, plus the injected [`Clock`] capability
//! - **Recurrence**: pure evaluation of whether a habit is due on a day
//! - **Progress**: per-day aggregation of logged progress against goals
//! - **Streak**: an explicit state machine driven by completion events
//! - **Summary**: multi-day completion grids and weekly/monthly rollups
//! - **Store**: repository traits the hosting app implements, with in-memory
//!   implementations for tests and the CLI
//!
//! ## Key Components
//!
//! - [`Habit`]: the habit record and its recurrence rule
//! - [`streak::apply`]: the streak transition function
//! - [`build_summary`]: windowed calendar summaries
//! - [`CoreError`]: error hierarchy for the crate

pub mod calendar;
pub mod error;
pub mod habit;
pub mod progress;
pub mod recurrence;
pub mod store;
pub mod streak;
pub mod summary;

pub use calendar::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, Result, StoreError, ValidationError};
pub use habit::{ActiveWindow, Habit, RecurrenceRule};
pub use progress::{day_completion, DayCompletion, ProgressRecord};
pub use recurrence::{is_scheduled, is_scheduled_with, EmptyWeekdaySetPolicy};
pub use store::{
    HabitRepository, MemoryHabitStore, MemoryProgressStore, ProgressRepository,
};
pub use streak::{StreakEvent, StreakState};
pub use summary::{build_summary, rollup, HabitCalendarSummary, RollupBucket, RollupPeriod};
