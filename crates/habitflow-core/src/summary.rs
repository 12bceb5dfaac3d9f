//! Calendar summary builder: per-habit completion grids and rollups.
//!
//! Everything here is a pure function over immutable snapshots; a summary is
//! cheap to recompute on demand and never mutates the habit or its records.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::enumerate_days;
use crate::habit::Habit;
use crate::progress::{DayCompletion, ProgressRecord};
use crate::recurrence::is_scheduled;

/// Completion grid for one habit over a fixed window of consecutive days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitCalendarSummary {
    pub habit_id: Uuid,
    pub window_start: NaiveDate,
    /// One entry per day, in window order.
    pub days: Vec<DayCompletion>,
    /// Days that were scheduled and not in the future.
    pub scheduled_days: u32,
    /// Scheduled days whose goal was met or exceeded.
    pub completed_days: u32,
    /// `round(100 * completed / scheduled)`, 0 when nothing was scheduled.
    pub percent_complete: u32,
}

/// Build the completion grid for `window_len` consecutive days starting at
/// `window_start` (the typical window is 90 days ending at `today`).
///
/// A window that lies entirely in the future produces a well-formed summary
/// with zero scheduled days, not an error.
pub fn build_summary(
    habit: &Habit,
    records: &[ProgressRecord],
    window_start: NaiveDate,
    window_len: u32,
    today: NaiveDate,
) -> HabitCalendarSummary {
    let by_day: HashMap<NaiveDate, &ProgressRecord> = records
        .iter()
        .filter(|r| r.habit_id == habit.id)
        .map(|r| (r.day, r))
        .collect();

    let mut days = Vec::with_capacity(window_len as usize);
    let mut scheduled_days = 0u32;
    let mut completed_days = 0u32;

    for day in enumerate_days(window_start, window_len) {
        let (progress, goal) = match by_day.get(&day) {
            Some(r) => (r.progress, r.goal),
            None => (0, habit.daily_goal),
        };
        let scheduled = is_scheduled(&habit.rule, &habit.window, day, today);
        let completion = DayCompletion {
            day,
            scheduled,
            progress,
            goal,
            is_active: scheduled && day <= today,
        };
        if completion.is_active {
            scheduled_days += 1;
            if completion.is_completed() {
                completed_days += 1;
            }
        }
        days.push(completion);
    }

    HabitCalendarSummary {
        habit_id: habit.id,
        window_start,
        days,
        scheduled_days,
        completed_days,
        percent_complete: percent(completed_days, scheduled_days),
    }
}

fn percent(completed: u32, scheduled: u32) -> u32 {
    if scheduled == 0 {
        return 0;
    }
    (100.0 * f64::from(completed) / f64::from(scheduled)).round() as u32
}

/// Granularity for grouping a summary's days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollupPeriod {
    /// ISO weeks, labelled `YYYY-Www`.
    Week,
    /// Calendar months, labelled `YYYY-MM`.
    Month,
}

/// One rollup bucket: the scheduled/completed tallies for a week or month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupBucket {
    pub label: String,
    /// First window day falling in this bucket.
    pub start: NaiveDate,
    pub scheduled_days: u32,
    pub completed_days: u32,
    pub percent_complete: u32,
}

/// Group a summary's days into weekly or monthly buckets, in window order.
///
/// Only active days contribute to the tallies; a bucket containing no active
/// day still appears, with zero counts, so a rendered rollup has no holes.
pub fn rollup(summary: &HabitCalendarSummary, period: RollupPeriod) -> Vec<RollupBucket> {
    let mut buckets: Vec<RollupBucket> = Vec::new();

    for completion in &summary.days {
        let label = bucket_label(completion.day, period);
        if buckets.last().map(|b| b.label.as_str()) != Some(label.as_str()) {
            buckets.push(RollupBucket {
                label,
                start: completion.day,
                scheduled_days: 0,
                completed_days: 0,
                percent_complete: 0,
            });
        }
        // Just pushed when absent.
        let bucket = buckets.last_mut().unwrap();
        if completion.is_active {
            bucket.scheduled_days += 1;
            if completion.is_completed() {
                bucket.completed_days += 1;
            }
        }
    }

    for bucket in &mut buckets {
        bucket.percent_complete = percent(bucket.completed_days, bucket.scheduled_days);
    }
    buckets
}

fn bucket_label(day: NaiveDate, period: RollupPeriod) -> String {
    match period {
        RollupPeriod::Week => {
            let iso = day.iso_week();
            format!("{}-W{:02}", iso.year(), iso.week())
        }
        RollupPeriod::Month => format!("{}-{:02}", day.year(), day.month()),
    }
}
