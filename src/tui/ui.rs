use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::catalog::KEY_POINTS;
use crate::day::DayRecord;

use super::app::{App, Focus, Tile};
use super::theme::Theme;

pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(10),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    draw_title_bar(frame, app, outer[0]);
    draw_header(frame, app, outer[1]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(outer[2]);

    draw_schedule(frame, app, main[0]);
    draw_key_points(frame, &app.theme, main[1]);
    draw_status_bar(frame, app, outer[3]);

    if app.show_help {
        draw_help(frame, app);
    }
}

fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " dayplan ",
            Style::default()
                .fg(app.theme.text_accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", app.planner.record().date),
            Style::default().fg(app.theme.text_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let record = app.planner.record();

    let block = Block::default()
        .title(" Daily Study & Work Plan ")
        .borders(Borders::ALL)
        .border_style(theme.unfocused_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            record.date.as_str(),
            Style::default().fg(theme.text_secondary),
        )),
        rows[0],
    );

    let pct = record.completion_rate();
    let progress_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(rows[1]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Daily Progress",
            Style::default().fg(theme.text_primary),
        )),
        progress_row[0],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(theme.progress_style())
            .percent(u16::from(pct))
            .label(format!("{pct}%")),
        progress_row[1],
    );

    draw_tiles(frame, app, record, rows[3]);
}

fn draw_tiles(frame: &mut Frame, app: &App, record: &DayRecord, area: Rect) {
    let theme = &app.theme;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (i, tile) in Tile::ALL.into_iter().enumerate() {
        let selected = app.focus == Focus::Counters && app.tile_index == i;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(selected));

        let (value, controls) = match tile {
            Tile::Tally(counter) => (
                format!("{}/{}", record.counter(counter), counter.target()),
                Line::from(vec![
                    Span::styled("[-]", Style::default().fg(theme.button_decrement)),
                    Span::raw(" "),
                    Span::styled("[+]", Style::default().fg(theme.button_increment)),
                ]),
            ),
            Tile::Workout => {
                let (mark, label) = if record.workout_completed {
                    ("✓", "Done")
                } else {
                    ("○", "Mark Done")
                };
                (
                    mark.to_string(),
                    Line::from(Span::styled(
                        label,
                        theme.check_style(record.workout_completed),
                    )),
                )
            }
        };

        let lines = vec![
            Line::from(Span::styled(value, theme.tile_style(tile))),
            Line::from(Span::styled(
                tile.label(),
                Style::default().fg(theme.text_secondary),
            )),
            controls,
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            columns[i],
        );
    }
}

fn draw_schedule(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Schedule;

    let block = Block::default()
        .title(" Schedule ")
        .borders(Borders::ALL)
        .border_style(theme.border(focused));

    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_item = None;
    let mut row_index = 0;

    for (s, section) in app.sections().iter().enumerate() {
        if s > 0 {
            items.push(ListItem::new(Line::raw("")));
        }
        items.push(ListItem::new(Line::from(vec![
            Span::raw(format!("{} ", section.category.icon())),
            Span::styled(
                section.category.title(),
                Style::default()
                    .fg(theme.text_accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}/{}", section.completed(), section.rows.len()),
                Style::default().fg(theme.text_secondary),
            ),
        ])));

        for row in &section.rows {
            let is_selected = focused && row_index == app.task_index;
            if row_index == app.task_index {
                selected_item = Some(items.len());
            }
            let cursor = if is_selected {
                Span::styled("▸ ", Style::default().fg(theme.selection_indicator))
            } else {
                Span::raw("  ")
            };
            let check = if row.completed { "(✓) " } else { "( ) " };
            items.push(ListItem::new(Line::from(vec![
                cursor,
                Span::styled(check, theme.check_style(row.completed)),
                Span::styled(row.def.title, theme.task_style(row.completed)),
                Span::styled(
                    format!("  {}", row.def.time),
                    Style::default().fg(theme.text_secondary),
                ),
            ])));
            row_index += 1;
        }
    }

    let mut state = ListState::default().with_selected(selected_item);
    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}

fn draw_key_points(frame: &mut Frame, theme: &Theme, area: Rect) {
    let block = Block::default()
        .title(" ⚡ Key Points ")
        .borders(Borders::ALL)
        .border_style(theme.unfocused_border());

    let lines: Vec<Line> = KEY_POINTS
        .iter()
        .map(|point| {
            Line::from(Span::styled(
                format!("• {point}"),
                Style::default().fg(theme.text_primary),
            ))
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let record = app.planner.record();
    let line = Line::from(vec![
        Span::styled(
            format!(
                " {}/{} tasks done ",
                record.completed_count(),
                record.tasks.len()
            ),
            Style::default().fg(app.theme.text_accent),
        ),
        Span::styled(
            " Tab:switch  Space:toggle  +/-:count  w:workout  ?:help  q:quit",
            Style::default().fg(app.theme.text_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_help(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let sections = app.keymap.help_entries();

    let mut lines: Vec<Line> = Vec::new();
    for (i, (category, entries)) in sections.iter().enumerate() {
        if i > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            *category,
            Style::default()
                .fg(theme.text_accent)
                .add_modifier(Modifier::BOLD),
        )));
        for entry in entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<16}", entry.label),
                    Style::default().fg(theme.text_primary),
                ),
                Span::styled(entry.description, Style::default().fg(theme.text_secondary)),
            ]));
        }
    }

    let area = frame.area();
    let width = 52u16.min(area.width.saturating_sub(4));
    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    let help_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Keys (any key to close) ")
                .borders(Borders::ALL)
                .border_style(theme.focused_border()),
        ),
        help_area,
    );
}
