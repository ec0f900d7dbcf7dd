use crate::catalog::{self, Category, TaskDefinition};

use super::models::DayRecord;

/// A schedule row with its completion overlaid from the day record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRow {
    pub def: &'static TaskDefinition,
    pub completed: bool,
}

/// One category block of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: Category,
    pub rows: Vec<TaskRow>,
}

impl Section {
    pub fn completed(&self) -> usize {
        self.rows.iter().filter(|r| r.completed).count()
    }
}

/// Group the catalog by category and overlay completion from `record`.
/// Ids missing from the record read as incomplete.
pub fn sections(record: &DayRecord) -> Vec<Section> {
    catalog::grouped()
        .into_iter()
        .map(|(category, defs)| Section {
            category,
            rows: defs
                .into_iter()
                .map(|def| TaskRow {
                    def,
                    completed: record.is_completed(def.id),
                })
                .collect(),
        })
        .collect()
}

/// Like [`sections`], limited to one category when `only` is set.
pub fn sections_in(record: &DayRecord, only: Option<Category>) -> Vec<Section> {
    let mut all = sections(record);
    if let Some(category) = only {
        all.retain(|s| s.category == category);
    }
    all
}

/// Rows of every section in display order.
pub fn flat_rows(sections: &[Section]) -> Vec<TaskRow> {
    sections.iter().flat_map(|s| s.rows.iter().copied()).collect()
}
