use dayplan::catalog;
use dayplan::day::{Counter, DayRecord, Direction};
use dayplan::planner::Planner;
use dayplan::store::{DAY_KEY, Store, StoredDay};

const MONDAY: &str = "Mon Oct 19 2026";
const TUESDAY: &str = "Tue Oct 20 2026";

#[test]
fn progress_survives_reopen_on_the_same_day() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("dayplan.db");

    {
        let mut planner = Planner::open(Store::open(&db).unwrap(), MONDAY).unwrap();
        for id in ["1", "9", "13"] {
            planner.toggle_task(id).unwrap();
        }
        for _ in 0..3 {
            planner
                .adjust_counter(Counter::DsaProblems, Direction::Increment)
                .unwrap();
        }
        planner
            .adjust_counter(Counter::DsaProblems, Direction::Decrement)
            .unwrap();
        planner.toggle_workout().unwrap();
    }

    let planner = Planner::open(Store::open(&db).unwrap(), MONDAY).unwrap();
    let record = planner.record();
    assert_eq!(record.completion_rate(), 19);
    assert_eq!(record.dsa_problems, 2);
    assert!(record.workout_completed);
    assert!(record.is_completed("13"));
}

#[test]
fn next_day_starts_from_scratch() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("dayplan.db");

    {
        let mut planner = Planner::open(Store::open(&db).unwrap(), MONDAY).unwrap();
        planner.toggle_task("5").unwrap();
        planner
            .adjust_counter(Counter::SqlJsQuestions, Direction::Increment)
            .unwrap();
    }

    let planner = Planner::open(Store::open(&db).unwrap(), TUESDAY).unwrap();
    assert_eq!(
        *planner.record(),
        DayRecord::fresh(TUESDAY, catalog::tasks())
    );

    let store = Store::open(&db).unwrap();
    match store.load_day().unwrap() {
        StoredDay::Found(record) => assert_eq!(record.date, TUESDAY),
        other => panic!("expected stored record, got {other:?}"),
    }
}

#[test]
fn corrupt_database_value_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("dayplan.db");
    Store::open(&db)
        .unwrap()
        .put(DAY_KEY, "{\"date\":")
        .unwrap();

    let planner = Planner::open(Store::open(&db).unwrap(), MONDAY).unwrap();
    assert_eq!(planner.record().date, MONDAY);
    assert_eq!(planner.record().completed_count(), 0);

    let store = Store::open(&db).unwrap();
    assert!(matches!(store.load_day().unwrap(), StoredDay::Found(_)));
}
