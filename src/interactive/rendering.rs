//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{Cell, GameStatus, Mark, Row};
use crate::game::{KEYBOARD_ROWS, KeyState, SessionStore};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: SessionStore>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Min(4),     // Messages
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.show_results {
        render_results(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(cell: &Cell) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match cell.mark() {
        Some(Mark::Exact) => base.fg(Color::Black).bg(Color::Green),
        Some(Mark::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Mark::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn row_line(row: &Row) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.cells().len() * 2);
    for cell in row.cells() {
        let letter = cell.character.map_or_else(|| "·".to_string(), String::from);
        spans.push(Span::styled(format!(" {letter} "), tile_style(cell)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board<S: SessionStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let mut lines = Vec::new();
    for row in app.board.rows() {
        lines.push(row_line(row));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn key_style(state: KeyState) -> Style {
    match state {
        KeyState::Exact => Style::default().fg(Color::Black).bg(Color::Green),
        KeyState::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        KeyState::Absent => Style::default().fg(Color::DarkGray),
        KeyState::Unused => Style::default().fg(Color::White),
    }
}

fn render_keyboard<S: SessionStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let keyboard = app.controller.key_tracker();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    [
                        Span::styled(format!(" {letter} "), key_style(keyboard.state(letter))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(widget, area);
}

fn render_messages<S: SessionStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();
    if !app.board.error().is_empty() {
        items.push(
            ListItem::new(app.board.error().to_string())
                .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        );
    }
    items.extend(app.messages.iter().rev().map(|msg| {
        let style = match msg.style {
            MessageStyle::Info => Style::default().fg(Color::White),
            MessageStyle::Success => Style::default().fg(Color::Green),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };
        ListItem::new(msg.text.clone()).style(style)
    }));

    let messages =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages, area);
}

fn render_status<S: SessionStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let clock = Paragraph::new(format!("⏱ {}", app.clock())).alignment(Alignment::Center);
    f.render_widget(clock, chunks[0]);

    let options = &app.controller.session().options;
    let mode = format!(
        "{} letters | Hard: {}",
        app.board.word_length(),
        if options.hard_mode { "on" } else { "off" }
    );
    f.render_widget(Paragraph::new(mode).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("Esc: Quit | ^N: New | ^G: Give up | ^T: Hard mode")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_results<S: SessionStore>(f: &mut Frame, app: &App<'_, S>) {
    let area = centered(f.area(), 60, 16);
    let (title, color) = match app.board.status() {
        GameStatus::Won => (" 🎉 Solved ", Color::Green),
        _ => (" Game over ", Color::Red),
    };

    let mut lines = vec![
        Line::styled(
            crate::output::results_message(app.board.status(), app.controller.secret()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("Time: {}", app.clock())),
        Line::from(""),
    ];
    lines.extend(app.results_text().lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Enter: new game | Esc: back to board",
        Style::default().fg(Color::DarkGray),
    ));

    let results = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(results, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
