use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::catalog::TaskDefinition;

/// Date stamp format of a day record, e.g. `Mon Oct 19 2026`.
pub const DATE_FORMAT: &str = "%a %b %d %Y";

/// Stamp for an arbitrary calendar day.
pub fn date_stamp(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Stamp for the current local day.
pub fn today_stamp() -> String {
    date_stamp(Local::now().date_naive())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskState {
    pub id: String,
    pub completed: bool,
}

/// One of the three numeric daily tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    DsaProblems,
    SqlJsQuestions,
    InternshipHours,
}

impl Counter {
    pub const ALL: [Counter; 3] = [
        Counter::DsaProblems,
        Counter::SqlJsQuestions,
        Counter::InternshipHours,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Counter::DsaProblems => "dsa",
            Counter::SqlJsQuestions => "sql-js",
            Counter::InternshipHours => "internship",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Counter::DsaProblems => "DSA Problems",
            Counter::SqlJsQuestions => "SQL/JS Questions",
            Counter::InternshipHours => "Internship Hours",
        }
    }

    /// Daily target shown as the denominator. Not enforced as a cap.
    pub fn target(self) -> u32 {
        match self {
            Counter::DsaProblems | Counter::SqlJsQuestions => 4,
            Counter::InternshipHours => 5,
        }
    }
}

impl FromStr for Counter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dsa" | "dsaProblems" => Ok(Counter::DsaProblems),
            "sql-js" | "sqlJsQuestions" => Ok(Counter::SqlJsQuestions),
            "internship" | "internshipHours" => Ok(Counter::InternshipHours),
            _ => Err(format!(
                "unknown counter '{s}' (expected dsa, sql-js or internship)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increment,
    Decrement,
}

/// The state of the current day. Exactly one exists per planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: String,
    pub tasks: Vec<TaskState>,
    pub dsa_problems: u32,
    pub sql_js_questions: u32,
    pub internship_hours: u32,
    pub workout_completed: bool,
}

impl DayRecord {
    /// A record for `date` with every task incomplete and every counter at zero.
    pub fn fresh(date: impl Into<String>, catalog: &[TaskDefinition]) -> Self {
        DayRecord {
            date: date.into(),
            tasks: catalog
                .iter()
                .map(|def| TaskState {
                    id: def.id.to_string(),
                    completed: false,
                })
                .collect(),
            dsa_problems: 0,
            sql_js_questions: 0,
            internship_hours: 0,
            workout_completed: false,
        }
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.tasks.iter().any(|t| t.id == id && t.completed)
    }

    /// Flip the completion flag of `id`. Returns `false` for an unknown id.
    pub fn toggle_task(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    pub fn counter(&self, counter: Counter) -> u32 {
        match counter {
            Counter::DsaProblems => self.dsa_problems,
            Counter::SqlJsQuestions => self.sql_js_questions,
            Counter::InternshipHours => self.internship_hours,
        }
    }

    fn counter_mut(&mut self, counter: Counter) -> &mut u32 {
        match counter {
            Counter::DsaProblems => &mut self.dsa_problems,
            Counter::SqlJsQuestions => &mut self.sql_js_questions,
            Counter::InternshipHours => &mut self.internship_hours,
        }
    }

    /// Step a counter by one. Decrementing stops at zero; there is no upper bound.
    pub fn adjust(&mut self, counter: Counter, direction: Direction) -> u32 {
        let value = self.counter_mut(counter);
        *value = match direction {
            Direction::Increment => value.saturating_add(1),
            Direction::Decrement => value.saturating_sub(1),
        };
        *value
    }

    pub fn toggle_workout(&mut self) -> bool {
        self.workout_completed = !self.workout_completed;
        self.workout_completed
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Percentage of completed tasks, rounded half up. Zero for an empty record.
    pub fn completion_rate(&self) -> u8 {
        let total = self.tasks.len();
        if total == 0 {
            return 0;
        }
        let done = self.completed_count();
        ((200 * done + total) / (2 * total)) as u8
    }

    /// Align `tasks` with the catalog: same ids, catalog order, known flags kept.
    /// Returns whether anything changed.
    pub fn reconcile(&mut self, catalog: &[TaskDefinition]) -> bool {
        let aligned: Vec<TaskState> = catalog
            .iter()
            .map(|def| TaskState {
                id: def.id.to_string(),
                completed: self.is_completed(def.id),
            })
            .collect();
        if aligned == self.tasks {
            return false;
        }
        self.tasks = aligned;
        true
    }
}
