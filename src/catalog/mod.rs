//! The fixed daily schedule.
//!
//! Everything here is compiled in. Tasks are never created, edited or removed
//! at runtime; the day record only tracks completion against these ids.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five segments of the day used to group tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Morning,
    Afternoon,
    Evening,
    Night,
    LateNight,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Morning,
        Category::Afternoon,
        Category::Evening,
        Category::Night,
        Category::LateNight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Morning => "morning",
            Category::Afternoon => "afternoon",
            Category::Evening => "evening",
            Category::Night => "night",
            Category::LateNight => "late-night",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Morning => "🌅",
            Category::Afternoon => "🍴",
            Category::Evening => "💻",
            Category::Night => "📚",
            Category::LateNight => "🌙",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Morning => "Morning",
            Category::Afternoon => "Afternoon",
            Category::Evening => "Evening (Internship Work)",
            Category::Night => "Night (Study Focus)",
            Category::LateNight => "Late Night",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// A single time-boxed entry of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskDefinition {
    pub id: &'static str,
    pub title: &'static str,
    /// Display label only, never parsed.
    pub time: &'static str,
    pub category: Category,
}

const fn task(
    id: &'static str,
    title: &'static str,
    time: &'static str,
    category: Category,
) -> TaskDefinition {
    TaskDefinition {
        id,
        title,
        time,
        category,
    }
}

static TASKS: [TaskDefinition; 16] = [
    task("1", "Wake up, freshen up, drink water", "9:30 – 9:45", Category::Morning),
    task("2", "Light breakfast/snack", "9:45 – 10:00", Category::Morning),
    task("3", "Classes (focus on learning)", "10:00 – 2:00", Category::Morning),
    task("4", "Lunch + rest", "2:00 – 2:45", Category::Afternoon),
    task("5", "SQL/JS (2 questions)", "2:45 – 3:15", Category::Afternoon),
    task("6", "Workout (fixed daily anchor)", "3:30 – 4:30", Category::Afternoon),
    task("7", "Internship deep work block", "4:45 – 8:00", Category::Evening),
    task("8", "Dinner", "8:00 – 8:30", Category::Evening),
    task("9", "DSA (2 medium/hard problems)", "8:30 – 10:00", Category::Night),
    task("10", "Break (walk / music)", "10:00 – 10:15", Category::Night),
    task("11", "DSA (2 more problems)", "10:15 – 11:30", Category::Night),
    task("12", "SQL/JS (1–2 questions)", "11:30 – 12:00", Category::Night),
    task("13", "Internship wrap-up / project tasks", "12:00 – 1:00", Category::LateNight),
    task("14", "Relax (light walk, music, journaling)", "1:00 – 1:30", Category::LateNight),
    task("15", "Optional learning (revision, notes)", "1:30 – 2:30", Category::LateNight),
    task("16", "Shutdown (no screens, prepare for sleep)", "2:30 – 3:00", Category::LateNight),
];

/// Static guidelines shown beneath the schedule.
pub const KEY_POINTS: [&str; 6] = [
    "DSA = 4 problems daily (split evening/night)",
    "SQL/JS = 3–4 daily (spread across day)",
    "Internship = 4–5 hours daily",
    "Workout = fixed 3:30 – 4:30 PM",
    "Sleep = ~6.5 hours (adjust later if needed)",
    "Wake up at 9:30 AM, sleep around 3:00 AM",
];

/// The whole schedule in display order.
pub fn tasks() -> &'static [TaskDefinition] {
    &TASKS
}

pub fn find(id: &str) -> Option<&'static TaskDefinition> {
    TASKS.iter().find(|t| t.id == id)
}

/// Group the schedule by category, in order of first appearance.
pub fn grouped() -> Vec<(Category, Vec<&'static TaskDefinition>)> {
    group_by_category(tasks())
}

pub fn group_by_category(defs: &[TaskDefinition]) -> Vec<(Category, Vec<&TaskDefinition>)> {
    let mut groups: Vec<(Category, Vec<&TaskDefinition>)> = Vec::new();
    for def in defs {
        if let Some((_, members)) = groups.iter_mut().find(|(c, _)| *c == def.category) {
            members.push(def);
        } else {
            groups.push((def.category, vec![def]));
        }
    }
    groups
}
