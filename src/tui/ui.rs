//! UI rendering for the timer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::timer::{format_duration_mmss, HistoryStore, TimerState};
use crate::tui::app::App;
use crate::tui::theme::palette;

/// Render the application UI.
pub fn render<S: HistoryStore>(frame: &mut Frame<'_>, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Topic input
            Constraint::Length(5), // Countdown
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Recent sessions
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_topic(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_recent(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

/// Render the topic input box.
fn render_topic<S: HistoryStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let colors = palette(app.theme);
    let editable = app.engine.state() == TimerState::Idle;

    let text = if app.engine.topic().is_empty() && editable {
        Span::styled("what are you working on?", Style::default().fg(colors.dim))
    } else {
        Span::styled(app.engine.topic(), Style::default().fg(colors.text))
    };

    let title = if editable { " Topic " } else { " Topic (locked) " };
    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.accent))
            .title(title),
    );

    frame.render_widget(input, area);
}

/// Render the big countdown readout.
fn render_countdown<S: HistoryStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let colors = palette(app.theme);

    let state = app.engine.state();
    let state_label = match state {
        TimerState::Idle => String::new(),
        TimerState::Running | TimerState::Paused => format!(" [{state}]"),
    };

    let readout = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{}{state_label}",
                format_duration_mmss(app.engine.remaining())
            ),
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" pomogo "));

    frame.render_widget(readout, area);
}

/// Render the progress gauge.
fn render_progress<S: HistoryStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let colors = palette(app.theme);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(colors.accent))
        .ratio(app.engine.progress().clamp(0.0, 1.0));

    frame.render_widget(gauge, area);
}

/// Render the most recent sessions, newest first.
fn render_recent<S: HistoryStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let colors = palette(app.theme);

    let items: Vec<ListItem<'_>> = app
        .engine
        .history()
        .iter()
        .rev()
        .take(usize::from(area.height.saturating_sub(2)))
        .map(|session| {
            let line = Line::from(vec![
                Span::styled(
                    session.start_time_local().format("%H:%M ").to_string(),
                    Style::default().fg(colors.dim),
                ),
                Span::styled(
                    format_duration_mmss(chrono::Duration::seconds(session.duration_seconds)),
                    Style::default().fg(colors.accent),
                ),
                Span::styled(
                    format!("  {}", session.topic),
                    Style::default().fg(colors.text),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Today's sessions ({}) ", app.engine.history().len())),
    );

    frame.render_widget(list, area);
}

/// Render the status bar with the active key hints.
fn render_status_bar<S: HistoryStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let colors = palette(app.theme);

    let hints = match app.engine.state() {
        TimerState::Running => "p pause · x stop · q quit",
        TimerState::Paused => "Enter resume · x stop · q quit",
        TimerState::Idle => "type topic · Enter start · Esc quit",
    };

    let status = app.status.as_deref().unwrap_or("");
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(status, Style::default().fg(colors.text)),
        Span::raw("  "),
        Span::styled(hints, Style::default().fg(colors.dim)),
    ]));

    frame.render_widget(bar, area);
}
