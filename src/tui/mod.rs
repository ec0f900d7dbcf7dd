mod app;
mod event;
mod keymap;
pub mod theme;
mod ui;

use anyhow::Result;

use crate::planner::Planner;

use theme::Theme;

/// Run the dashboard until the user quits. Restores the terminal on the way out.
pub fn run(planner: Planner, theme: Theme) -> Result<()> {
    let mut terminal = ratatui::init();
    let mut app = app::App::new(planner, theme);
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}
