//! Habit data model: recurrence rules, active windows and the habit record.
//!
//! A [`Habit`] owns its completion/streak state exclusively. Progress records
//! live in the progress store and are referenced, never embedded, by summaries.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::streak::StreakState;

/// When a habit is due.
///
/// Weekly and custom weekday schedules are the same thing to the engine, so
/// they share the `WeekdaySet` variant. Indices run Sunday = 0 through
/// Saturday = 6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceRule {
    /// Due every day inside the active window.
    Daily,
    /// Due on the listed weekdays inside the active window.
    WeekdaySet(BTreeSet<u8>),
}

impl RecurrenceRule {
    /// Build a weekday-set rule, rejecting indices outside 0..=6.
    pub fn weekday_set(days: impl IntoIterator<Item = u8>) -> Result<Self, ValidationError> {
        let set: BTreeSet<u8> = days.into_iter().collect();
        if let Some(&bad) = set.iter().find(|&&d| d > 6) {
            return Err(ValidationError::WeekdayOutOfRange(bad));
        }
        Ok(Self::WeekdaySet(set))
    }
}

/// Inclusive date range during which a habit can be scheduled.
///
/// An absent end means the window is open-ended and closes at "today",
/// whatever today is when the question is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveWindow {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl ActiveWindow {
    pub fn open_ended(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    pub fn bounded(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Inclusive containment check; an open end is clamped to `today`.
    ///
    /// A window whose explicit end precedes its start contains nothing.
    pub fn contains(&self, day: NaiveDate, today: NaiveDate) -> bool {
        let end = self.end.unwrap_or(today);
        day >= self.start && day <= end
    }
}

/// A recurring habit with its streak state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub owner_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    /// Default per-day goal; a progress record may override it for its day.
    pub daily_goal: u32,
    pub rule: RecurrenceRule,
    pub window: ActiveWindow,
    /// Preferred reminder time. Carried for the app layer; the engine never
    /// reads it.
    #[serde(default)]
    pub reminder: Option<NaiveTime>,
    #[serde(default)]
    pub streak: StreakState,
}

impl Habit {
    /// Create a habit, enforcing the structural invariants (non-empty title,
    /// goal >= 1). The id is freshly generated.
    pub fn new(
        owner_id: impl Into<String>,
        title: impl Into<String>,
        daily_goal: u32,
        rule: RecurrenceRule,
        window: ActiveWindow,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if daily_goal == 0 {
            return Err(ValidationError::ZeroGoal);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            owner_id: owner_id.into(),
            title,
            created_at,
            daily_goal,
            rule,
            window,
            reminder: None,
            streak: StreakState::default(),
        })
    }

    pub fn with_reminder(mut self, reminder: NaiveTime) -> Self {
        self.reminder = Some(reminder);
        self
    }

    pub fn current_streak(&self) -> u32 {
        self.streak.current
    }

    pub fn best_streak(&self) -> u32 {
        self.streak.best
    }

    pub fn last_completed(&self) -> Option<NaiveDate> {
        self.streak.last_completed
    }
}
