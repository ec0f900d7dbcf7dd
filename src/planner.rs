//! Owner of the current day.
//!
//! A [`Planner`] is created once per process from a [`Store`]. It loads the
//! stored record (starting a fresh day when the record is missing, unreadable
//! or from another date), applies user events to it and writes the whole
//! record back after every change.
//!
//! Writes made while opening are best effort: a store that cannot be written
//! still yields a planner over the in-memory record.

use anyhow::Result;

use crate::catalog;
use crate::day::{Counter, DayRecord, Direction};
use crate::store::{Store, StoredDay};

pub struct Planner {
    store: Store,
    record: DayRecord,
}

impl Planner {
    pub fn open(store: Store, today: &str) -> Result<Self> {
        let record = match store.load_day()? {
            StoredDay::Found(mut record) if record.date == today => {
                if record.reconcile(catalog::tasks()) {
                    tracing::info!(date = today, "stored day realigned with schedule");
                    write_best_effort(&store, &record);
                }
                tracing::debug!(date = today, "resuming stored day");
                record
            }
            stored => {
                match stored {
                    StoredDay::Found(old) => {
                        tracing::info!(previous = %old.date, date = today, "new day, resetting");
                    }
                    StoredDay::Malformed(reason) => {
                        tracing::warn!(%reason, "stored day unreadable, starting fresh");
                    }
                    StoredDay::Missing => {
                        tracing::info!(date = today, "no stored day, starting fresh");
                    }
                }
                let record = DayRecord::fresh(today, catalog::tasks());
                write_best_effort(&store, &record);
                record
            }
        };
        Ok(Planner { store, record })
    }

    pub fn record(&self) -> &DayRecord {
        &self.record
    }

    /// Replace the record with a fresh one when `today` differs from its date.
    pub fn roll_over_if_stale(&mut self, today: &str) -> Result<bool> {
        if self.record.date == today {
            return Ok(false);
        }
        tracing::info!(previous = %self.record.date, date = today, "day changed, resetting");
        self.record = DayRecord::fresh(today, catalog::tasks());
        self.save()?;
        Ok(true)
    }

    /// Flip a task. Unknown ids leave the record untouched and nothing is written.
    pub fn toggle_task(&mut self, id: &str) -> Result<bool> {
        if !self.record.toggle_task(id) {
            tracing::debug!(id, "toggle for unknown task ignored");
            return Ok(false);
        }
        tracing::debug!(id, completed = self.record.is_completed(id), "task toggled");
        self.save()?;
        Ok(true)
    }

    pub fn adjust_counter(&mut self, counter: Counter, direction: Direction) -> Result<u32> {
        let value = self.record.adjust(counter, direction);
        tracing::debug!(counter = counter.as_str(), value, "counter adjusted");
        self.save()?;
        Ok(value)
    }

    pub fn toggle_workout(&mut self) -> Result<bool> {
        let done = self.record.toggle_workout();
        tracing::debug!(done, "workout toggled");
        self.save()?;
        Ok(done)
    }

    /// Write the current record to the store.
    pub fn save(&self) -> Result<()> {
        self.store.save_day(&self.record)
    }
}

fn write_best_effort(store: &Store, record: &DayRecord) {
    if let Err(e) = store.save_day(record) {
        tracing::warn!(date = %record.date, error = %e, "failed to save day, continuing in memory");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::TaskState;
    use crate::store::DAY_KEY;

    const TODAY: &str = "Mon Oct 19 2026";
    const YESTERDAY: &str = "Sun Oct 18 2026";

    fn stored(store: &Store) -> DayRecord {
        match store.load_day().unwrap() {
            StoredDay::Found(record) => record,
            other => panic!("expected stored record, got {other:?}"),
        }
    }

    #[test]
    fn first_run_initializes_and_persists() {
        let planner = Planner::open(Store::open_in_memory().unwrap(), TODAY).unwrap();
        assert_eq!(planner.record().date, TODAY);
        assert_eq!(planner.record().tasks.len(), 16);
        assert_eq!(stored(&planner.store), *planner.record());
    }

    #[test]
    fn same_day_record_is_loaded() {
        let store = Store::open_in_memory().unwrap();
        let mut record = DayRecord::fresh(TODAY, catalog::tasks());
        record.toggle_task("2");
        record.dsa_problems = 3;
        store.save_day(&record).unwrap();

        let planner = Planner::open(store, TODAY).unwrap();
        assert_eq!(*planner.record(), record);
    }

    #[test]
    fn stale_record_is_discarded() {
        let store = Store::open_in_memory().unwrap();
        let mut old = DayRecord::fresh(YESTERDAY, catalog::tasks());
        for def in catalog::tasks() {
            old.toggle_task(def.id);
        }
        old.dsa_problems = 4;
        old.sql_js_questions = 2;
        old.internship_hours = 5;
        old.workout_completed = true;
        store.save_day(&old).unwrap();

        let planner = Planner::open(store, TODAY).unwrap();
        let fresh = DayRecord::fresh(TODAY, catalog::tasks());
        assert_eq!(*planner.record(), fresh);
        assert_eq!(stored(&planner.store), fresh);
    }

    #[test]
    fn malformed_blob_falls_back_to_fresh() {
        let store = Store::open_in_memory().unwrap();
        store.put(DAY_KEY, "][").unwrap();

        let planner = Planner::open(store, TODAY).unwrap();
        assert_eq!(*planner.record(), DayRecord::fresh(TODAY, catalog::tasks()));
        assert_eq!(stored(&planner.store).date, TODAY);
    }

    #[test]
    fn same_day_record_is_realigned() {
        let store = Store::open_in_memory().unwrap();
        let mut record = DayRecord::fresh(TODAY, catalog::tasks());
        record.toggle_task("9");
        record.tasks.truncate(10);
        record.tasks.push(TaskState {
            id: "99".into(),
            completed: true,
        });
        store.save_day(&record).unwrap();

        let planner = Planner::open(store, TODAY).unwrap();
        assert_eq!(planner.record().tasks.len(), 16);
        assert!(planner.record().is_completed("9"));
        assert!(!planner.record().is_completed("99"));
        assert_eq!(stored(&planner.store), *planner.record());
    }

    #[test]
    fn every_mutation_is_persisted() {
        let mut planner = Planner::open(Store::open_in_memory().unwrap(), TODAY).unwrap();

        assert!(planner.toggle_task("1").unwrap());
        assert!(stored(&planner.store).is_completed("1"));

        assert_eq!(
            planner
                .adjust_counter(Counter::InternshipHours, Direction::Increment)
                .unwrap(),
            1
        );
        assert_eq!(stored(&planner.store).internship_hours, 1);

        assert!(planner.toggle_workout().unwrap());
        assert!(stored(&planner.store).workout_completed);
    }

    #[test]
    fn unknown_toggle_changes_nothing() {
        let mut planner = Planner::open(Store::open_in_memory().unwrap(), TODAY).unwrap();
        let before = planner.record().clone();
        assert!(!planner.toggle_task("0").unwrap());
        assert_eq!(*planner.record(), before);
        assert_eq!(stored(&planner.store), before);
    }

    #[test]
    fn three_toggles_give_nineteen_percent() {
        let mut planner = Planner::open(Store::open_in_memory().unwrap(), TODAY).unwrap();
        for id in ["1", "9", "13"] {
            planner.toggle_task(id).unwrap();
        }
        assert_eq!(planner.record().completion_rate(), 19);
    }

    #[test]
    fn read_only_store_still_opens() {
        let store = Store::open_in_memory().unwrap();
        store.conn.execute_batch("PRAGMA query_only = ON;").unwrap();

        let mut planner = Planner::open(store, TODAY).unwrap();
        assert_eq!(*planner.record(), DayRecord::fresh(TODAY, catalog::tasks()));
        assert!(planner.save().is_err());

        // The in-memory record keeps changing; only the write reports failure.
        assert!(planner.toggle_task("4").is_err());
        assert!(planner.record().is_completed("4"));
    }

    #[test]
    fn read_only_store_keeps_same_day_record() {
        let store = Store::open_in_memory().unwrap();
        let mut record = DayRecord::fresh(TODAY, catalog::tasks());
        record.toggle_task("5");
        record.tasks.truncate(12);
        store.save_day(&record).unwrap();
        store.conn.execute_batch("PRAGMA query_only = ON;").unwrap();

        let planner = Planner::open(store, TODAY).unwrap();
        assert_eq!(planner.record().tasks.len(), 16);
        assert!(planner.record().is_completed("5"));
    }

    #[test]
    fn roll_over_while_running() {
        let mut planner = Planner::open(Store::open_in_memory().unwrap(), YESTERDAY).unwrap();
        planner.toggle_task("3").unwrap();
        planner
            .adjust_counter(Counter::DsaProblems, Direction::Increment)
            .unwrap();

        assert!(!planner.roll_over_if_stale(YESTERDAY).unwrap());
        assert!(planner.record().is_completed("3"));

        assert!(planner.roll_over_if_stale(TODAY).unwrap());
        assert_eq!(*planner.record(), DayRecord::fresh(TODAY, catalog::tasks()));
        assert_eq!(stored(&planner.store).date, TODAY);
    }
}
