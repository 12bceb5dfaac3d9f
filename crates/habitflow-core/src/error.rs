//! Core error types for habitflow-core.
//!
//! The engine itself never fails on malformed-but-representable input; errors
//! here cover structural invariants rejected at construction time and the
//! repository seams.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Core error type for habitflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Repository errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Structural invariant violations, rejected when a value is built.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A habit title must be non-empty
    #[error("Habit title must not be empty")]
    EmptyTitle,

    /// Daily goals are positive integers
    #[error("Daily goal must be at least 1")]
    ZeroGoal,

    /// Weekday indices run Sunday = 0 through Saturday = 6
    #[error("Weekday index {0} out of range 0..=6")]
    WeekdayOutOfRange(u8),

    /// Invalid value with field context
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Repository-level errors surfaced by the store seams.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// No habit with the given id
    #[error("Habit not found: {0}")]
    HabitNotFound(Uuid),

    /// No progress record for the given (habit, day) key
    #[error("No progress record for habit {habit_id} on {day}")]
    RecordNotFound { habit_id: Uuid, day: NaiveDate },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
