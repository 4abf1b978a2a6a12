//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the level challenge.

use super::app::App;
use crate::core::{LetterStatus, statuses_to_emoji};
use crate::game::{Cell, RoundState, RoundView, Severity};
use crate::wordlists::Key;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let view = app.game.view(&app.input);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, &view, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let board_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(u16::try_from(view.max_attempts).unwrap_or(6) + 2),
            Constraint::Min(5),
        ])
        .split(main_chunks[0]);

    render_grid(f, &view, board_chunks[0]);
    render_keyboard(f, app, &view, board_chunks[1]);

    let info_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(main_chunks[1]);

    render_progress(f, &view, info_chunks[0]);
    render_messages(f, app, info_chunks[1]);

    render_status(f, app, &view, chunks[2]);
}

fn status_style(status: LetterStatus) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        LetterStatus::Correct => base.fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => base.fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => base.fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Empty => base.fg(Color::White),
    }
}

fn render_header(f: &mut Frame, view: &RoundView, area: Rect) {
    let header = Paragraph::new(format!(
        "🎯 WORD CHALLENGE - Level {}/{} ({})",
        view.level, view.max_level, view.tier
    ))
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

fn cell_span(cell: &Cell) -> Span<'static> {
    let letter = cell.letter.unwrap_or('·');
    Span::styled(format!(" {letter} "), status_style(cell.status))
}

fn render_grid(f: &mut Frame, view: &RoundView, area: Rect) {
    let lines: Vec<Line> = view
        .grid
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for cell in row {
                spans.push(cell_span(cell));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let title = match (&view.state, &view.revealed) {
        (RoundState::Won, _) => " 🎉 Solved! ".to_string(),
        (RoundState::Lost, Some(word)) => format!(" ❌ The word was {word} "),
        _ => format!(" {} letters ", view.word_len),
    };
    let color = match view.state {
        RoundState::Playing => Color::White,
        RoundState::Won => Color::Green,
        RoundState::Lost => Color::Red,
    };

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, app: &App, view: &RoundView, area: Rect) {
    let enter_ready = app.row_full() && app.accepts_input();
    let lines: Vec<Line> = app
        .keyboard
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for key in row {
                let style = match key {
                    Key::Letter(c) => status_style(view.keyboard.get(*c)),
                    Key::Enter if enter_ready => Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                    Key::Enter | Key::Delete => Style::default().fg(Color::DarkGray),
                };
                spans.push(Span::styled(format!(" {} ", key.label()), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_progress(f: &mut Frame, view: &RoundView, area: Rect) {
    let pct = (u64::from(view.level) * 100 / u64::from(view.max_level.max(1))).min(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(u16::try_from(pct).unwrap_or(100))
        .label(format!("Level {}/{}", view.level, view.max_level));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .game
        .notifier()
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.severity {
                Severity::Info => Style::default().fg(Color::White),
                Severity::Success => Style::default().fg(Color::Green),
                Severity::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, view: &RoundView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let score = Paragraph::new(format!("Score: {}", view.score)).alignment(Alignment::Center);
    f.render_widget(score, chunks[0]);

    let streak = Paragraph::new(format!(
        "Streak: {} (best {})",
        view.streak,
        app.game.session().best_streak()
    ))
    .alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let attempts = if view.state.is_terminal() {
        app.game
            .round()
            .history()
            .last()
            .map(|a| statuses_to_emoji(&a.statuses))
            .unwrap_or_default()
    } else {
        format!("Attempts: {}/{}", view.attempts_used, view.max_attempts)
    };
    f.render_widget(
        Paragraph::new(attempts).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if app.game.is_finished() {
        "All levels played! Esc: Quit"
    } else if app.game.pending_advance().is_some() {
        "Next level coming up... | Esc: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
