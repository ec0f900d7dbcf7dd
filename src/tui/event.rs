use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

/// Wait up to `tick_rate` for a key press. Releases and repeats are dropped so
/// a single press never toggles twice.
pub fn poll(tick_rate: Duration) -> Result<AppEvent> {
    if event::poll(tick_rate)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(AppEvent::Key(key));
    }
    Ok(AppEvent::Tick)
}
