use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::DefaultTerminal;

use crate::catalog;
use crate::day::view::{self, Section, TaskRow};
use crate::day::{self, Counter, Direction};
use crate::planner::Planner;

use super::event::{self, AppEvent};
use super::keymap::{Action, KeyMap};
use super::theme::Theme;
use super::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Schedule,
    Counters,
}

/// One of the four progress widgets in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Tally(Counter),
    Workout,
}

impl Tile {
    pub const ALL: [Tile; 4] = [
        Tile::Tally(Counter::DsaProblems),
        Tile::Tally(Counter::SqlJsQuestions),
        Tile::Tally(Counter::InternshipHours),
        Tile::Workout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tile::Tally(counter) => counter.label(),
            Tile::Workout => "Workout",
        }
    }
}

pub struct App {
    pub planner: Planner,
    pub theme: Theme,
    pub keymap: KeyMap,
    pub should_quit: bool,
    pub focus: Focus,
    pub show_help: bool,

    // Selection indices
    pub task_index: usize,
    pub tile_index: usize,
}

impl App {
    pub fn new(planner: Planner, theme: Theme) -> Self {
        App {
            planner,
            theme,
            keymap: KeyMap::default_keymap(),
            should_quit: false,
            focus: Focus::Schedule,
            show_help: false,
            task_index: 0,
            tile_index: 0,
        }
    }

    pub fn sections(&self) -> Vec<Section> {
        view::sections(self.planner.record())
    }

    pub fn selected_row(&self) -> Option<TaskRow> {
        view::flat_rows(&self.sections()).get(self.task_index).copied()
    }

    pub fn selected_tile(&self) -> Tile {
        Tile::ALL[self.tile_index.min(Tile::ALL.len() - 1)]
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            match event::poll(tick_rate)? {
                AppEvent::Key(key) => self.handle_key(key.code, key.modifiers),
                AppEvent::Tick => self.tick(&day::today_stamp()),
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Start a new day if the calendar moved on while the dashboard was open.
    pub fn tick(&mut self, today: &str) {
        match self.planner.roll_over_if_stale(today) {
            Ok(true) => {
                self.task_index = 0;
                self.tile_index = 0;
            }
            Ok(false) => {}
            Err(e) => tracing::warn!(error = %e, "failed to save new day"),
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        if let Some(action) = self.keymap.lookup(code, modifiers) {
            self.apply(action);
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ShowHelp => self.show_help = true,
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Schedule => Focus::Counters,
                    Focus::Counters => Focus::Schedule,
                };
            }
            Action::MoveDown => self.move_down(),
            Action::MoveUp => self.move_up(),
            Action::NextSection => self.jump_section(true),
            Action::PrevSection => self.jump_section(false),
            Action::Toggle => match self.focus {
                Focus::Schedule => self.toggle_selected_task(),
                Focus::Counters => {
                    if self.selected_tile() == Tile::Workout {
                        self.toggle_workout();
                    }
                }
            },
            Action::Increment => self.adjust_selected(Direction::Increment),
            Action::Decrement => self.adjust_selected(Direction::Decrement),
            Action::ToggleWorkout => self.toggle_workout(),
        }
    }

    fn move_down(&mut self) {
        match self.focus {
            Focus::Schedule => {
                let count = catalog::tasks().len();
                if count > 0 {
                    self.task_index = (self.task_index + 1).min(count - 1);
                }
            }
            Focus::Counters => {
                self.tile_index = (self.tile_index + 1).min(Tile::ALL.len() - 1);
            }
        }
    }

    fn move_up(&mut self) {
        match self.focus {
            Focus::Schedule => self.task_index = self.task_index.saturating_sub(1),
            Focus::Counters => self.tile_index = self.tile_index.saturating_sub(1),
        }
    }

    /// Move the task cursor to the first row of the next or previous section.
    fn jump_section(&mut self, forward: bool) {
        let mut starts = Vec::new();
        let mut offset = 0;
        for section in self.sections() {
            starts.push(offset);
            offset += section.rows.len();
        }
        let target = if forward {
            starts.iter().copied().find(|&s| s > self.task_index)
        } else {
            starts.iter().copied().rev().find(|&s| s < self.task_index)
        };
        if let Some(index) = target {
            self.focus = Focus::Schedule;
            self.task_index = index;
        }
    }

    fn toggle_selected_task(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if let Err(e) = self.planner.toggle_task(row.def.id) {
            tracing::warn!(id = row.def.id, error = %e, "failed to save task toggle");
        }
    }

    fn adjust_selected(&mut self, direction: Direction) {
        if self.focus != Focus::Counters {
            return;
        }
        if let Tile::Tally(counter) = self.selected_tile()
            && let Err(e) = self.planner.adjust_counter(counter, direction)
        {
            tracing::warn!(counter = counter.as_str(), error = %e, "failed to save counter");
        }
    }

    fn toggle_workout(&mut self) {
        if let Err(e) = self.planner.toggle_workout() {
            tracing::warn!(error = %e, "failed to save workout toggle");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    const TODAY: &str = "Mon Oct 19 2026";

    fn app() -> App {
        let planner = Planner::open(Store::open_in_memory().unwrap(), TODAY).unwrap();
        App::new(planner, Theme::default())
    }

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
    }

    #[test]
    fn space_toggles_selected_task() {
        let mut app = app();
        press(&mut app, 'j');
        press(&mut app, ' ');
        assert!(app.planner.record().is_completed("2"));
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(!app.planner.record().is_completed("2"));
    }

    #[test]
    fn cursor_is_clamped_to_schedule() {
        let mut app = app();
        press(&mut app, 'k');
        assert_eq!(app.task_index, 0);
        for _ in 0..40 {
            press(&mut app, 'j');
        }
        assert_eq!(app.task_index, 15);
        assert_eq!(app.selected_row().map(|r| r.def.id), Some("16"));
    }

    #[test]
    fn section_jumps() {
        let mut app = app();
        press(&mut app, 'J');
        assert_eq!(app.task_index, 3);
        press(&mut app, 'J');
        press(&mut app, 'J');
        assert_eq!(app.selected_row().map(|r| r.def.id), Some("9"));
        press(&mut app, 'K');
        assert_eq!(app.task_index, 6);
        press(&mut app, 'j');
        press(&mut app, 'K');
        assert_eq!(app.task_index, 6);
    }

    #[test]
    fn counters_adjust_selected_tile() {
        let mut app = app();
        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.focus, Focus::Counters);

        for _ in 0..3 {
            press(&mut app, '+');
        }
        press(&mut app, '-');
        assert_eq!(app.planner.record().dsa_problems, 2);

        press(&mut app, 'j');
        press(&mut app, '-');
        assert_eq!(app.planner.record().sql_js_questions, 0);
    }

    #[test]
    fn counter_keys_ignored_in_schedule_focus() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Schedule);
        press(&mut app, '+');
        press(&mut app, '=');
        let record = app.planner.record();
        for counter in Counter::ALL {
            assert_eq!(record.counter(counter), 0, "{counter:?} changed");
        }

        app.apply(Action::SwitchFocus);
        press(&mut app, '+');
        app.apply(Action::SwitchFocus);
        press(&mut app, '-');
        assert_eq!(app.planner.record().dsa_problems, 1);
    }

    #[test]
    fn toggle_on_workout_tile() {
        let mut app = app();
        app.apply(Action::SwitchFocus);
        for _ in 0..5 {
            press(&mut app, 'j');
        }
        assert_eq!(app.selected_tile(), Tile::Workout);
        press(&mut app, ' ');
        assert!(app.planner.record().workout_completed);
        // +/- do nothing on the workout tile
        press(&mut app, '+');
        assert_eq!(app.planner.record().internship_hours, 0);
        press(&mut app, 'w');
        assert!(!app.planner.record().workout_completed);
    }

    #[test]
    fn toggle_on_tally_tile_is_ignored() {
        let mut app = app();
        app.apply(Action::SwitchFocus);
        let before = app.planner.record().clone();
        press(&mut app, ' ');
        assert_eq!(*app.planner.record(), before);
    }

    #[test]
    fn help_swallows_next_key() {
        let mut app = app();
        press(&mut app, '?');
        assert!(app.show_help);
        press(&mut app, 'q');
        assert!(!app.show_help);
        assert!(!app.should_quit);
        press(&mut app, 'q');
        assert!(app.should_quit);
    }

    #[test]
    fn tick_rolls_over_and_resets_cursor() {
        let mut app = app();
        press(&mut app, 'j');
        press(&mut app, ' ');
        app.tick(TODAY);
        assert!(app.planner.record().is_completed("2"));

        app.tick("Tue Oct 20 2026");
        assert_eq!(app.planner.record().date, "Tue Oct 20 2026");
        assert_eq!(app.planner.record().completed_count(), 0);
        assert_eq!(app.task_index, 0);
    }
}
