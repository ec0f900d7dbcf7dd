use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::day::Counter;

use super::app::Tile;

/// Semantic colour theme for the dashboard.
///
/// Every colour used by the renderer is stored here so the user can
/// override any of them via `[theme]` in `config.toml`.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Borders ───────────────────────────────────────────────
    pub border_focused: Color,
    pub border_unfocused: Color,

    // ── Text ──────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_accent: Color,

    // ── Tasks ─────────────────────────────────────────────────
    pub task_done: Color,
    pub task_pending: Color,
    pub selection_indicator: Color,

    // ── Progress ──────────────────────────────────────────────
    pub progress: Color,
    pub progress_track: Color,

    // ── Counter tiles ─────────────────────────────────────────
    pub counter_dsa: Color,
    pub counter_sql_js: Color,
    pub counter_internship: Color,
    pub counter_workout: Color,
    pub button_increment: Color,
    pub button_decrement: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border_focused: Color::Cyan,
            border_unfocused: Color::DarkGray,

            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            text_accent: Color::Cyan,

            task_done: Color::Green,
            task_pending: Color::White,
            selection_indicator: Color::Cyan,

            progress: Color::Blue,
            progress_track: Color::DarkGray,

            counter_dsa: Color::Blue,
            counter_sql_js: Color::Green,
            counter_internship: Color::Magenta,
            counter_workout: Color::Rgb(255, 165, 0),
            button_increment: Color::Green,
            button_decrement: Color::Red,
        }
    }
}

impl Theme {
    /// Style for a focused panel border.
    pub fn focused_border(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Style for an unfocused panel border.
    pub fn unfocused_border(&self) -> Style {
        Style::default().fg(self.border_unfocused)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.focused_border()
        } else {
            self.unfocused_border()
        }
    }

    /// Title text of a task row; completed tasks are struck through.
    pub fn task_style(&self, completed: bool) -> Style {
        if completed {
            Style::default()
                .fg(self.task_done)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(self.task_pending)
        }
    }

    pub fn check_style(&self, completed: bool) -> Style {
        if completed {
            Style::default()
                .fg(self.task_done)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_secondary)
        }
    }

    /// Accent colour of a counter tile's value.
    pub fn tile_style(&self, tile: Tile) -> Style {
        let color = match tile {
            Tile::Tally(Counter::DsaProblems) => self.counter_dsa,
            Tile::Tally(Counter::SqlJsQuestions) => self.counter_sql_js,
            Tile::Tally(Counter::InternshipHours) => self.counter_internship,
            Tile::Workout => self.counter_workout,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn progress_style(&self) -> Style {
        Style::default().fg(self.progress).bg(self.progress_track)
    }
}

// ── Config deserialization ────────────────────────────────────────────

/// All-optional mirror of [`Theme`] for `config.toml` `[theme]` section.
///
/// Only `Some` fields override the default; everything else keeps its default.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct ThemeConfig {
    pub border_focused: Option<String>,
    pub border_unfocused: Option<String>,

    pub text_primary: Option<String>,
    pub text_secondary: Option<String>,
    pub text_accent: Option<String>,

    pub task_done: Option<String>,
    pub task_pending: Option<String>,
    pub selection_indicator: Option<String>,

    pub progress: Option<String>,
    pub progress_track: Option<String>,

    pub counter_dsa: Option<String>,
    pub counter_sql_js: Option<String>,
    pub counter_internship: Option<String>,
    pub counter_workout: Option<String>,
    pub button_increment: Option<String>,
    pub button_decrement: Option<String>,
}

/// Parse a colour string into a ratatui `Color`.
///
/// Supports named colours (`"cyan"`, `"red"`, `"dark_gray"`, etc.) and
/// `"rgb(R,G,B)"` syntax.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    // Named colours (case-insensitive, with underscore tolerance)
    let lower = s.to_lowercase().replace('-', "_");
    match lower.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" | "purple" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "light_red" | "lightred" => Some(Color::LightRed),
        "light_green" | "lightgreen" => Some(Color::LightGreen),
        "light_yellow" | "lightyellow" => Some(Color::LightYellow),
        "light_blue" | "lightblue" => Some(Color::LightBlue),
        "light_magenta" | "lightmagenta" => Some(Color::LightMagenta),
        "light_cyan" | "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        "orange" => Some(Color::Rgb(255, 165, 0)),
        _ => None,
    }
}

/// Apply an optional config field: if the string parses to a valid colour,
/// overwrite `target`.
fn apply(target: &mut Color, source: Option<&String>) {
    if let Some(s) = source {
        match parse_color(s) {
            Some(color) => *target = color,
            None => tracing::warn!(value = %s, "ignoring unknown theme colour"),
        }
    }
}

impl ThemeConfig {
    /// Build a `Theme` starting from defaults, overriding any fields that were
    /// set in the config file.
    pub fn build(&self) -> Theme {
        let mut t = Theme::default();

        apply(&mut t.border_focused, self.border_focused.as_ref());
        apply(&mut t.border_unfocused, self.border_unfocused.as_ref());
        apply(&mut t.text_primary, self.text_primary.as_ref());
        apply(&mut t.text_secondary, self.text_secondary.as_ref());
        apply(&mut t.text_accent, self.text_accent.as_ref());
        apply(&mut t.task_done, self.task_done.as_ref());
        apply(&mut t.task_pending, self.task_pending.as_ref());
        apply(
            &mut t.selection_indicator,
            self.selection_indicator.as_ref(),
        );
        apply(&mut t.progress, self.progress.as_ref());
        apply(&mut t.progress_track, self.progress_track.as_ref());
        apply(&mut t.counter_dsa, self.counter_dsa.as_ref());
        apply(&mut t.counter_sql_js, self.counter_sql_js.as_ref());
        apply(&mut t.counter_internship, self.counter_internship.as_ref());
        apply(&mut t.counter_workout, self.counter_workout.as_ref());
        apply(&mut t.button_increment, self.button_increment.as_ref());
        apply(&mut t.button_decrement, self.button_decrement.as_ref());

        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_has_expected_colors() {
        let t = Theme::default();
        assert_eq!(t.border_focused, Color::Cyan);
        assert_eq!(t.counter_workout, Color::Rgb(255, 165, 0));
        assert_eq!(t.text_primary, Color::White);
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!(parse_color("cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("dark_gray"), Some(Color::DarkGray));
        assert_eq!(parse_color("DarkGray"), Some(Color::DarkGray));
        assert_eq!(parse_color("purple"), Some(Color::Magenta));
        assert_eq!(parse_color("orange"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("nope"), None);
    }

    #[test]
    fn parse_rgb_color() {
        assert_eq!(parse_color("rgb(37, 99, 235)"), Some(Color::Rgb(37, 99, 235)));
        assert_eq!(parse_color("rgb(0,0,0)"), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(parse_color("rgb(256,0,0)"), None);
        assert_eq!(parse_color("rgb(1,2)"), None);
    }

    #[test]
    fn theme_config_overrides() {
        let cfg = ThemeConfig {
            progress: Some("light_blue".into()),
            counter_dsa: Some("rgb(10,20,30)".into()),
            task_done: Some("not-a-colour".into()),
            ..Default::default()
        };
        let t = cfg.build();
        assert_eq!(t.progress, Color::LightBlue);
        assert_eq!(t.counter_dsa, Color::Rgb(10, 20, 30));
        // Unparseable and non-overridden fields keep defaults
        assert_eq!(t.task_done, Color::Green);
        assert_eq!(t.text_primary, Color::White);
    }

    #[test]
    fn completed_tasks_are_crossed_out() {
        let t = Theme::default();
        let done = t.task_style(true);
        assert_eq!(done.fg, Some(Color::Green));
        assert!(done.add_modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(t.task_style(false), Style::default().fg(Color::White));
    }

    #[test]
    fn every_tile_has_a_distinct_colour() {
        let t = Theme::default();
        let colours: Vec<Option<Color>> = Tile::ALL.iter().map(|&tile| t.tile_style(tile).fg).collect();
        for (i, c) in colours.iter().enumerate() {
            assert!(c.is_some());
            assert!(!colours[i + 1..].contains(c), "duplicate tile colour {c:?}");
        }
    }

    #[test]
    fn border_follows_focus() {
        let t = Theme::default();
        assert_eq!(t.border(true), Style::default().fg(Color::Cyan));
        assert_eq!(t.border(false), Style::default().fg(Color::DarkGray));
    }
}
