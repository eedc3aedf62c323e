//! TUI rendering with ratatui
//!
//! Board grids, per-board keyboard overlays and the message log.

use super::app::{ActiveGame, App, MessageStyle};
use crate::core::{KeyStatus, LetterFeedback};
use crate::engine::{BoardStatus, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Boards
            Constraint::Length(6),  // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_boards(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            format!(" TERMO - {} ", app.mode.label()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "| attempts {}/{} ",
            app.game.attempts_used(),
            app.game.max_attempts()
        )),
    ];
    if app.timed {
        spans.push(Span::styled(
            format!("| {:>5.1}s ", app.elapsed.as_secs_f64()),
            Style::default().fg(Color::Magenta),
        ));
    }
    if app.near_miss() {
        spans.push(Span::styled(
            "| one letter away!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_boards(f: &mut Frame, app: &App, area: Rect) {
    match &app.game {
        ActiveGame::Solo(session) => render_board(f, area, session, 0),
        ActiveGame::Duet(session) => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            render_board(f, columns[0], session, 0);
            render_board(f, columns[1], session, 1);
        }
        ActiveGame::Quartet(session) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            for (half, row_area) in rows.iter().enumerate() {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(*row_area);
                render_board(f, columns[0], session, half * 2);
                render_board(f, columns[1], session, half * 2 + 1);
            }
        }
    }
}

fn render_board<const N: usize>(f: &mut Frame, area: Rect, session: &Session<N>, board: usize) {
    let status = session.board_status(board);
    let (title, border_color) = match status {
        BoardStatus::Playing => (format!(" Board {} ", board + 1), Color::Cyan),
        BoardStatus::Won { attempt } => {
            (format!(" Board {} - won in {} ", board + 1, attempt + 1), Color::Green)
        }
        BoardStatus::Lost => (format!(" Board {} - lost ", board + 1), Color::Red),
    };

    let mut lines: Vec<Line> = Vec::new();

    let rows = session.board_rows(board);
    for (guess, row) in session.history().iter().zip(&rows) {
        let spans: Vec<Span> = guess
            .display()
            .chars()
            .zip(row)
            .map(|(c, &feedback)| Span::styled(format!(" {c} "), feedback_style(feedback)))
            .collect();
        lines.push(Line::from(spans));
    }

    if status.is_playing() {
        let buffer = session.buffer();
        let spans: Vec<Span> = buffer
            .slots()
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let c = slot.unwrap_or('·');
                let mut style = Style::default().fg(Color::White);
                if i == buffer.cursor() {
                    style = style
                        .add_modifier(Modifier::UNDERLINED)
                        .add_modifier(Modifier::BOLD);
                }
                Span::styled(format!(" {c} "), style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::raw(""));
    let keyboard = session.keyboard();
    for key_row in KEYBOARD_ROWS {
        let spans: Vec<Span> = key_row
            .chars()
            .map(|letter| {
                let status = keyboard
                    .statuses(letter)
                    .map_or(KeyStatus::Unused, |s| s[board]);
                Span::styled(format!("{letter} "), key_style(status))
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border_color)),
    );
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(visible)
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Span::styled(message.text.clone(), style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let mut help = String::from("Type letters | Enter submit | Backspace erase | ←/→ move");
    if matches!(app.game, ActiveGame::Solo(_)) {
        help.push_str(" | ? hint");
    }
    help.push_str(" | Ctrl+N new | Esc quit");

    let status = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}

fn feedback_style(feedback: LetterFeedback) -> Style {
    match feedback {
        LetterFeedback::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterFeedback::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterFeedback::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterFeedback::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn key_style(status: KeyStatus) -> Style {
    match status {
        KeyStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        KeyStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        KeyStatus::Absent => Style::default().fg(Color::DarkGray),
        KeyStatus::Unused => Style::default().fg(Color::White),
    }
}
