// src/ui/widgets/input.rs

use crate::app::{App, SPINNER_CHARS};
use crate::core::models::{ADVISORY_MAX_CHARS, MIN_TEXT_CHARS};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the input tab: the text box plus the action bar beneath it.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    render_editor(frame, app, chunks[0]);
    render_action_bar(frame, app, chunks[1]);
}

fn render_editor(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Paste Text")
        .title(
            Line::from(format!("Max {}k chars", ADVISORY_MAX_CHARS / 1000))
                .right_aligned()
                .fg(Color::DarkGray),
        );
    let inner = block.inner(area);

    let text = app.workflow.text();
    let editable = !app.workflow.in_flight();

    let content = if text.is_empty() {
        Text::from(Line::from(vec![
            Span::styled(if editable { "▏" } else { "" }, Style::default().fg(Color::Yellow)),
            Span::styled(
                "Paste your abstract or article content here...",
                Style::default().fg(Color::DarkGray).italic(),
            ),
        ]))
    } else {
        let mut lines: Vec<Line> = text.split('\n').map(|l| Line::from(l.to_string())).collect();
        if editable {
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled("▏", Style::default().fg(Color::Yellow)));
            }
        }
        Text::from(lines)
    };

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: false });

    // Keep the end of the text (where typing happens) in view.
    let rows = paragraph.line_count(inner.width);
    let scroll = u16::try_from(rows.saturating_sub(inner.height as usize)).unwrap_or(u16::MAX);

    frame.render_widget(paragraph.block(block).scroll((scroll, 0)), area);
}

fn render_action_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(area);

    let count = app.workflow.char_count();
    let count_style = if count >= MIN_TEXT_CHARS {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let info = Text::from(vec![
        Line::from(vec![
            Span::styled(format!("{count}"), count_style),
            Span::raw(format!(" chars (min {MIN_TEXT_CHARS})")),
        ]),
        Line::from(vec![
            Span::styled("Note: ", Style::default().bold()),
            Span::raw("Does not store your data."),
        ])
        .fg(Color::DarkGray),
    ]);
    frame.render_widget(Paragraph::new(info), chunks[0]);

    let button = if app.workflow.in_flight() {
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} ", SPINNER_CHARS[app.spinner_frame % SPINNER_CHARS.len()]),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("Analyzing..."),
        ]))
        .style(Style::default().fg(Color::Gray))
    } else if app.workflow.can_submit() {
        Paragraph::new("Check Originality").style(Style::default().fg(Color::White).bold())
    } else {
        Paragraph::new("Check Originality").style(Style::default().fg(Color::DarkGray))
    };
    let button_block = Block::default().borders(Borders::ALL).border_style(
        if app.workflow.can_submit() { Style::default().fg(Color::Blue) } else { Style::default().fg(Color::DarkGray) },
    );
    frame.render_widget(button.alignment(Alignment::Center).block(button_block), chunks[1]);
}
