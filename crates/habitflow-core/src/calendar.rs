//! Day-granularity calendar utilities.
//!
//! Every date computation in habitflow runs against a single fixed reference
//! calendar: the proleptic Gregorian calendar in UTC. Timestamps are truncated
//! to UTC days before any comparison, and local time never enters the engine.
//! Callers that want wall-clock-local behavior convert at the boundary.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

/// Truncate a timestamp to its UTC calendar day.
pub fn start_of_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}

/// Signed whole-day distance `b - a`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// `count` consecutive days starting at (and including) `start`.
pub fn enumerate_days(start: NaiveDate, count: u32) -> Vec<NaiveDate> {
    (0..i64::from(count))
        .map(|offset| start + Duration::days(offset))
        .collect()
}

/// Weekday index with Sunday = 0 through Saturday = 6.
pub fn weekday_index(day: NaiveDate) -> u8 {
    day.weekday().num_days_from_sunday() as u8
}

/// Source of the current instant.
///
/// The engine never reads the ambient system clock directly; callers inject a
/// `Clock` so that date logic stays reproducible in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Today's day-stamp, derived from [`Clock::now`].
    fn today(&self) -> NaiveDate {
        start_of_day(self.now())
    }
}

/// Clock backed by the real system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Pin the clock to noon UTC on the given day.
    pub fn on_day(day: NaiveDate) -> Self {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        Self {
            now: day.and_time(noon).and_utc(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn days_between_is_signed() {
        assert_eq!(days_between(d(2026, 1, 1), d(2026, 1, 4)), 3);
        assert_eq!(days_between(d(2026, 1, 4), d(2026, 1, 1)), -3);
        assert_eq!(days_between(d(2026, 1, 4), d(2026, 1, 4)), 0);
    }

    #[test]
    fn enumerate_days_is_inclusive_and_ordered() {
        let days = enumerate_days(d(2026, 2, 27), 3);
        assert_eq!(days, vec![d(2026, 2, 27), d(2026, 2, 28), d(2026, 3, 1)]);
        assert!(enumerate_days(d(2026, 2, 27), 0).is_empty());
    }

    #[test]
    fn weekday_index_starts_at_sunday() {
        // 2026-08-23 is a Sunday.
        assert_eq!(weekday_index(d(2026, 8, 23)), 0);
        assert_eq!(weekday_index(d(2026, 8, 24)), 1);
        assert_eq!(weekday_index(d(2026, 8, 29)), 6);
    }

    #[test]
    fn fixed_clock_reports_its_day() {
        let clock = FixedClock::on_day(d(2026, 8, 23));
        assert_eq!(clock.today(), d(2026, 8, 23));
    }

    #[test]
    fn start_of_day_truncates_to_utc() {
        let ts = d(2026, 8, 23).and_hms_opt(23, 59, 59).unwrap().and_utc();
        assert_eq!(start_of_day(ts), d(2026, 8, 23));
    }
}
