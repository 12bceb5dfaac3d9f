//! Recurrence evaluation: is a habit due on a given calendar day?
//!
//! Evaluation fails closed: days in the future, before the window opens or
//! after it closes are never scheduled, regardless of the rule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::weekday_index;
use crate::habit::{ActiveWindow, RecurrenceRule};

/// How to treat a `WeekdaySet` rule whose set is empty.
///
/// An empty set normally means the habit was created through a flow that never
/// picked weekdays. Historically such habits were due every day; that behavior
/// is kept as the default here, but it is a named policy so callers that want
/// the stricter reading can opt out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyWeekdaySetPolicy {
    /// An empty set schedules the habit every day inside the window.
    #[default]
    EveryDay,
    /// An empty set never schedules the habit.
    NeverDue,
}

/// Whether `day` is a scheduled day for the rule, using the default
/// empty-weekday-set policy.
pub fn is_scheduled(
    rule: &RecurrenceRule,
    window: &ActiveWindow,
    day: NaiveDate,
    today: NaiveDate,
) -> bool {
    is_scheduled_with(rule, window, day, today, EmptyWeekdaySetPolicy::default())
}

/// Whether `day` is a scheduled day for the rule.
///
/// Returns `false` for any day after `today` or outside the active window
/// (an open-ended window closes at `today`).
pub fn is_scheduled_with(
    rule: &RecurrenceRule,
    window: &ActiveWindow,
    day: NaiveDate,
    today: NaiveDate,
    policy: EmptyWeekdaySetPolicy,
) -> bool {
    if day > today || !window.contains(day, today) {
        return false;
    }
    match rule {
        RecurrenceRule::Daily => true,
        RecurrenceRule::WeekdaySet(set) => {
            if set.is_empty() {
                policy == EmptyWeekdaySetPolicy::EveryDay
            } else {
                set.contains(&weekday_index(day))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::enumerate_days;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn future_days_are_never_scheduled() {
        let window = ActiveWindow::open_ended(d(2026, 1, 1));
        let today = d(2026, 3, 1);
        assert!(!is_scheduled(
            &RecurrenceRule::Daily,
            &window,
            d(2026, 3, 2),
            today
        ));
    }

    #[test]
    fn days_outside_window_are_never_scheduled() {
        let window = ActiveWindow::bounded(d(2026, 2, 1), d(2026, 2, 10));
        let today = d(2026, 3, 1);
        assert!(!is_scheduled(
            &RecurrenceRule::Daily,
            &window,
            d(2026, 1, 31),
            today
        ));
        assert!(!is_scheduled(
            &RecurrenceRule::Daily,
            &window,
            d(2026, 2, 11),
            today
        ));
        assert!(is_scheduled(
            &RecurrenceRule::Daily,
            &window,
            d(2026, 2, 10),
            today
        ));
    }

    #[test]
    fn window_starting_in_the_future_schedules_nothing() {
        let window = ActiveWindow::open_ended(d(2026, 6, 1));
        let today = d(2026, 3, 1);
        for day in enumerate_days(d(2026, 2, 1), 30) {
            assert!(!is_scheduled(&RecurrenceRule::Daily, &window, day, today));
        }
    }

    #[test]
    fn daily_rule_schedules_every_day_in_window() {
        let window = ActiveWindow::open_ended(d(2026, 2, 1));
        let today = d(2026, 2, 14);
        for day in enumerate_days(d(2026, 2, 1), 14) {
            assert!(is_scheduled(&RecurrenceRule::Daily, &window, day, today));
        }
    }

    #[test]
    fn weekday_set_matches_weekday_membership() {
        // Mon/Wed/Fri.
        let rule = RecurrenceRule::weekday_set([1, 3, 5]).unwrap();
        let window = ActiveWindow::open_ended(d(2026, 1, 1));
        let today = d(2026, 12, 31);
        for day in enumerate_days(d(2026, 8, 2), 14) {
            let expected = matches!(weekday_index(day), 1 | 3 | 5);
            assert_eq!(is_scheduled(&rule, &window, day, today), expected);
        }
    }

    #[test]
    fn empty_weekday_set_policy_is_explicit() {
        let rule = RecurrenceRule::weekday_set([]).unwrap();
        let window = ActiveWindow::open_ended(d(2026, 1, 1));
        let today = d(2026, 3, 1);
        let day = d(2026, 2, 15);
        assert!(is_scheduled(&rule, &window, day, today));
        assert!(!is_scheduled_with(
            &rule,
            &window,
            day,
            today,
            EmptyWeekdaySetPolicy::NeverDue
        ));
    }
}
