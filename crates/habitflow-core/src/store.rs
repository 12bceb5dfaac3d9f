//! Repository seams for habits and progress records.
//!
//! The engine consumes these traits and never dictates where the data lives.
//! The in-memory implementations back the CLI (which hydrates them from a
//! JSON snapshot) and the integration tests; anything heavier is the hosting
//! app's concern.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;
use crate::habit::Habit;
use crate::progress::ProgressRecord;

/// Snapshot access to habits.
pub trait HabitRepository {
    /// All habits belonging to `owner_id`, ordered by creation time.
    fn list(&self, owner_id: &str) -> Result<Vec<Habit>, StoreError>;

    fn get(&self, id: Uuid) -> Result<Habit, StoreError>;

    fn create(&mut self, habit: Habit) -> Result<(), StoreError>;

    /// Persist a mutated habit snapshot. Fails if the habit does not exist.
    fn update(&mut self, habit: Habit) -> Result<(), StoreError>;

    /// Remove a habit. Deleting an absent habit is a no-op.
    fn delete(&mut self, id: Uuid) -> Result<(), StoreError>;
}

/// Access to progress records, keyed uniquely by (habit, day).
pub trait ProgressRepository {
    /// Records for `habit_id` with `start <= day <= end`, ordered by day.
    fn fetch_range(
        &self,
        habit_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ProgressRecord>, StoreError>;

    fn get(&self, habit_id: Uuid, day: NaiveDate) -> Result<Option<ProgressRecord>, StoreError>;

    /// Insert or overwrite the record for its (habit, day) key.
    /// Last write wins on both progress and goal.
    fn upsert(&mut self, record: ProgressRecord) -> Result<(), StoreError>;
}

/// In-memory habit store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryHabitStore {
    habits: BTreeMap<Uuid, Habit>,
}

impl MemoryHabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}

impl HabitRepository for MemoryHabitStore {
    fn list(&self, owner_id: &str) -> Result<Vec<Habit>, StoreError> {
        let mut habits: Vec<Habit> = self
            .habits
            .values()
            .filter(|h| h.owner_id == owner_id)
            .cloned()
            .collect();
        habits.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(habits)
    }

    fn get(&self, id: Uuid) -> Result<Habit, StoreError> {
        self.habits
            .get(&id)
            .cloned()
            .ok_or(StoreError::HabitNotFound(id))
    }

    fn create(&mut self, habit: Habit) -> Result<(), StoreError> {
        self.habits.insert(habit.id, habit);
        Ok(())
    }

    fn update(&mut self, habit: Habit) -> Result<(), StoreError> {
        if !self.habits.contains_key(&habit.id) {
            return Err(StoreError::HabitNotFound(habit.id));
        }
        self.habits.insert(habit.id, habit);
        Ok(())
    }

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        self.habits.remove(&id);
        Ok(())
    }
}

/// In-memory progress store, keyed by habit then day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryProgressStore {
    records: BTreeMap<Uuid, BTreeMap<NaiveDate, ProgressRecord>>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressRepository for MemoryProgressStore {
    fn fetch_range(
        &self,
        habit_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ProgressRecord>, StoreError> {
        let Some(days) = self.records.get(&habit_id) else {
            return Ok(Vec::new());
        };
        Ok(days.range(start..=end).map(|(_, r)| r.clone()).collect())
    }

    fn get(&self, habit_id: Uuid, day: NaiveDate) -> Result<Option<ProgressRecord>, StoreError> {
        Ok(self
            .records
            .get(&habit_id)
            .and_then(|days| days.get(&day))
            .cloned())
    }

    fn upsert(&mut self, record: ProgressRecord) -> Result<(), StoreError> {
        self.records
            .entry(record.habit_id)
            .or_default()
            .insert(record.day, record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::{ActiveWindow, RecurrenceRule};
    use chrono::Utc;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn habit(owner: &str, title: &str) -> Habit {
        Habit::new(
            owner,
            title,
            1,
            RecurrenceRule::Daily,
            ActiveWindow::open_ended(d(2026, 1, 1)),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn list_filters_by_owner() {
        let mut store = MemoryHabitStore::new();
        store.create(habit("a", "One")).unwrap();
        store.create(habit("a", "Two")).unwrap();
        store.create(habit("b", "Other")).unwrap();
        assert_eq!(store.list("a").unwrap().len(), 2);
        assert_eq!(store.list("b").unwrap().len(), 1);
        assert!(store.list("c").unwrap().is_empty());
    }

    #[test]
    fn update_requires_an_existing_habit() {
        let mut store = MemoryHabitStore::new();
        let h = habit("a", "One");
        let err = store.update(h.clone()).unwrap_err();
        assert_eq!(err, StoreError::HabitNotFound(h.id));
        store.create(h.clone()).unwrap();
        assert!(store.update(h).is_ok());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = MemoryHabitStore::new();
        let h = habit("a", "One");
        let id = h.id;
        store.create(h).unwrap();
        store.delete(id).unwrap();
        store.delete(id).unwrap();
        assert!(store.get(id).is_err());
    }

    #[test]
    fn upsert_overwrites_per_day() {
        let mut store = MemoryProgressStore::new();
        let id = Uuid::new_v4();
        let day = d(2026, 2, 1);
        let first = ProgressRecord::new(id, day, 1, 5, Utc::now()).unwrap();
        let second = ProgressRecord::new(id, day, 4, 6, Utc::now()).unwrap();
        store.upsert(first).unwrap();
        store.upsert(second).unwrap();
        let got = store.get(id, day).unwrap().unwrap();
        assert_eq!(got.progress, 4);
        assert_eq!(got.goal, 6);
        assert_eq!(store.fetch_range(id, day, day).unwrap().len(), 1);
    }

    #[test]
    fn fetch_range_is_inclusive_and_ordered() {
        let mut store = MemoryProgressStore::new();
        let id = Uuid::new_v4();
        for offset in [3i64, 1, 2] {
            let day = d(2026, 2, 1) + chrono::Duration::days(offset);
            store
                .upsert(ProgressRecord::new(id, day, 1, 1, Utc::now()).unwrap())
                .unwrap();
        }
        let records = store.fetch_range(id, d(2026, 2, 2), d(2026, 2, 4)).unwrap();
        let days: Vec<NaiveDate> = records.iter().map(|r| r.day).collect();
        assert_eq!(days, vec![d(2026, 2, 2), d(2026, 2, 3), d(2026, 2, 4)]);
        assert!(store
            .fetch_range(Uuid::new_v4(), d(2026, 2, 1), d(2026, 2, 28))
            .unwrap()
            .is_empty());
    }
}
