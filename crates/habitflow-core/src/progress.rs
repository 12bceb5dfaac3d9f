//! Progress records and the per-day completion signal.
//!
//! A [`ProgressRecord`] is the persisted accumulator for one (habit, day)
//! pair. [`DayCompletion`] is the derived, never-persisted signal the summary
//! builder consumes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::habit::Habit;
use crate::recurrence::is_scheduled;

/// Accumulated progress for one habit on one calendar day.
///
/// At most one record exists per (habit, day); the progress store enforces
/// that key. Records are updated in place, never deleted in normal flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub habit_id: Uuid,
    pub day: NaiveDate,
    /// Non-negative accumulated count for the day.
    pub progress: u32,
    /// Goal for this day; may differ from the habit's default.
    pub goal: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProgressRecord {
    /// Create a record, rejecting a zero goal at construction time.
    pub fn new(
        habit_id: Uuid,
        day: NaiveDate,
        progress: u32,
        goal: u32,
        at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if goal == 0 {
            return Err(ValidationError::ZeroGoal);
        }
        Ok(Self {
            habit_id,
            day,
            progress,
            goal,
            created_at: at,
            updated_at: at,
        })
    }

    /// Add `delta` to the accumulated progress.
    pub fn increment(&mut self, delta: u32, at: DateTime<Utc>) {
        self.progress = self.progress.saturating_add(delta);
        self.updated_at = at;
    }

    /// Overwrite the accumulated progress.
    pub fn set_progress(&mut self, progress: u32, at: DateTime<Utc>) {
        self.progress = progress;
        self.updated_at = at;
    }
}

/// Derived completion signal for one (habit, day). Purely computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayCompletion {
    pub day: NaiveDate,
    /// The recurrence rule puts the habit on this day.
    pub scheduled: bool,
    pub progress: u32,
    pub goal: u32,
    /// Scheduled and not in the future.
    pub is_active: bool,
}

impl DayCompletion {
    /// Completion ratio `progress / goal`, defined as 0.0 when the goal is 0.
    pub fn ratio(&self) -> f64 {
        if self.goal == 0 {
            return 0.0;
        }
        f64::from(self.progress) / f64::from(self.goal)
    }

    /// A day counts as completed once the goal is met or exceeded. A zero
    /// goal never completes.
    pub fn is_completed(&self) -> bool {
        self.goal > 0 && self.progress >= self.goal
    }
}

/// Merge the day's progress record (if any) with the habit's schedule into a
/// [`DayCompletion`].
///
/// Records for other habits or other days in `records` are ignored, so a
/// caller may pass an unfiltered fetch result.
pub fn day_completion(
    records: &[ProgressRecord],
    habit: &Habit,
    day: NaiveDate,
    today: NaiveDate,
) -> DayCompletion {
    let record = records
        .iter()
        .find(|r| r.habit_id == habit.id && r.day == day);
    let (progress, goal) = match record {
        Some(r) => (r.progress, r.goal),
        None => (0, habit.daily_goal),
    };
    let scheduled = is_scheduled(&habit.rule, &habit.window, day, today);
    DayCompletion {
        day,
        scheduled,
        progress,
        goal,
        is_active: scheduled && day <= today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::{ActiveWindow, RecurrenceRule};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn habit() -> Habit {
        Habit::new(
            "owner",
            "Hydrate",
            8,
            RecurrenceRule::Daily,
            ActiveWindow::open_ended(d(2026, 1, 1)),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn missing_record_falls_back_to_habit_goal() {
        let habit = habit();
        let dc = day_completion(&[], &habit, d(2026, 2, 1), d(2026, 2, 14));
        assert!(dc.scheduled);
        assert!(dc.is_active);
        assert_eq!(dc.progress, 0);
        assert_eq!(dc.goal, 8);
        assert!(!dc.is_completed());
    }

    #[test]
    fn record_goal_overrides_habit_default() {
        let habit = habit();
        let record = ProgressRecord::new(habit.id, d(2026, 2, 1), 3, 3, Utc::now()).unwrap();
        let dc = day_completion(&[record], &habit, d(2026, 2, 1), d(2026, 2, 14));
        assert_eq!(dc.goal, 3);
        assert!(dc.is_completed());
        assert!((dc.ratio() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn over_completion_still_counts() {
        let habit = habit();
        let record = ProgressRecord::new(habit.id, d(2026, 2, 1), 12, 8, Utc::now()).unwrap();
        let dc = day_completion(&[record], &habit, d(2026, 2, 1), d(2026, 2, 14));
        assert!(dc.is_completed());
        assert!(dc.ratio() > 1.0);
    }

    #[test]
    fn zero_goal_ratio_is_zero_not_a_fault() {
        let dc = DayCompletion {
            day: d(2026, 2, 1),
            scheduled: true,
            progress: 5,
            goal: 0,
            is_active: true,
        };
        assert_eq!(dc.ratio(), 0.0);
        assert!(!dc.is_completed());
    }

    #[test]
    fn records_for_other_habits_are_ignored() {
        let habit = habit();
        let other = ProgressRecord::new(Uuid::new_v4(), d(2026, 2, 1), 99, 1, Utc::now()).unwrap();
        let dc = day_completion(&[other], &habit, d(2026, 2, 1), d(2026, 2, 14));
        assert_eq!(dc.progress, 0);
        assert_eq!(dc.goal, 8);
    }

    #[test]
    fn future_day_is_not_active() {
        let habit = habit();
        let dc = day_completion(&[], &habit, d(2026, 2, 15), d(2026, 2, 14));
        assert!(!dc.scheduled);
        assert!(!dc.is_active);
    }

    #[test]
    fn increment_saturates_and_bumps_updated_at() {
        let t0 = Utc::now();
        let mut record = ProgressRecord::new(Uuid::new_v4(), d(2026, 2, 1), 1, 4, t0).unwrap();
        let t1 = t0 + chrono::Duration::seconds(5);
        record.increment(2, t1);
        assert_eq!(record.progress, 3);
        assert_eq!(record.updated_at, t1);
        record.increment(u32::MAX, t1);
        assert_eq!(record.progress, u32::MAX);
    }

    #[test]
    fn zero_goal_record_is_rejected() {
        let err = ProgressRecord::new(Uuid::new_v4(), d(2026, 2, 1), 0, 0, Utc::now()).unwrap_err();
        assert_eq!(err, ValidationError::ZeroGoal);
    }
}
