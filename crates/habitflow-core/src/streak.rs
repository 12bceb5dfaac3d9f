//! Streak engine: an explicit state machine over completion events.
//!
//! The transition is a pure function `(StreakState, StreakEvent) -> StreakState`
//! so the table is testable independent of storage. Single-writer discipline
//! per habit falls out of ownership: mutating a streak requires `&mut` access
//! to the habit, different habits are independent.
//!
//! Rules:
//! - completing a day already marked is a no-op (idempotent per day);
//! - a completion whose nearest prior completed day is yesterday (gap <= 1)
//!   extends the current streak, a larger gap resets it to 1;
//! - the best streak is a monotonic watermark, never decremented;
//! - un-completing is only meaningful when the last completed day is today,
//!   otherwise there is nothing to undo and the event is a silent no-op.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::days_between;
use crate::habit::Habit;

/// Per-habit streak state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// Day-stamps on which the habit was marked completed.
    pub completed_dates: BTreeSet<NaiveDate>,
    /// Latest completed day, if any.
    pub last_completed: Option<NaiveDate>,
    /// Length of the running streak.
    pub current: u32,
    /// Historical maximum of `current`; `best >= current` always holds.
    pub best: u32,
}

/// Completion-toggle events driving the streak state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "today")]
pub enum StreakEvent {
    MarkCompleted(NaiveDate),
    MarkIncompleted(NaiveDate),
}

/// Apply one event to the state, producing the next state.
pub fn apply(state: StreakState, event: StreakEvent) -> StreakState {
    match event {
        StreakEvent::MarkCompleted(today) => mark_completed(state, today),
        StreakEvent::MarkIncompleted(today) => mark_incompleted(state, today),
    }
}

fn mark_completed(mut state: StreakState, today: NaiveDate) -> StreakState {
    if state.completed_dates.contains(&today) {
        // Already counted today.
        return state;
    }

    // Nearest completed day strictly before today.
    let prior = state.completed_dates.range(..today).next_back().copied();

    state.completed_dates.insert(today);
    if state.last_completed.map_or(true, |last| last < today) {
        state.last_completed = Some(today);
    }

    state.current = match prior {
        None => 1,
        Some(prior) if days_between(prior, today) <= 1 => state.current + 1,
        Some(_) => 1,
    };
    state.best = state.best.max(state.current);
    state
}

fn mark_incompleted(mut state: StreakState, today: NaiveDate) -> StreakState {
    if state.last_completed != Some(today) {
        // Nothing to undo.
        return state;
    }
    state.completed_dates.remove(&today);
    state.last_completed = state.completed_dates.iter().next_back().copied();
    state.current = state.current.saturating_sub(1);
    state
}

impl Habit {
    /// Record a completion for `today`, updating the streak counters.
    pub fn mark_completed(&mut self, today: NaiveDate) {
        let state = std::mem::take(&mut self.streak);
        self.streak = apply(state, StreakEvent::MarkCompleted(today));
    }

    /// Undo today's completion. A no-op unless the last completed day is
    /// `today`.
    pub fn mark_incompleted(&mut self, today: NaiveDate) {
        let state = std::mem::take(&mut self.streak);
        self.streak = apply(state, StreakEvent::MarkIncompleted(today));
    }
}
