// src/ui/widgets/summary.rs

use crate::core::models::{AnalysisResult, Outcome, ScoreBand};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
    text::Line,
};

/// Height the score grid needs, borders included.
pub const SUMMARY_HEIGHT: u16 = 6;

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::High => Color::Green,
        ScoreBand::Medium => Color::Yellow,
        ScoreBand::Low => Color::Red,
    }
}

/// Renders the three-cell score grid: originality score, similarity index, outcome.
///
/// # Arguments
/// * `frame` - The `Frame` used for rendering the UI.
/// * `result` - The analysis result being displayed.
/// * `area` - The `Rect` defining the drawable area for this widget.
pub fn render_summary(frame: &mut Frame, result: &AnalysisResult, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    // --- Originality Score ---
    let score_color = band_color(result.score_band());
    let score_block = Block::default().borders(Borders::ALL).title("ORIGINALITY SCORE".bold());
    let score_inner = score_block.inner(cells[0]);
    frame.render_widget(score_block, cells[0]);

    let score_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1), Constraint::Min(0)])
        .split(score_inner);
    let score_line = Line::from(vec![
        Span::styled(result.score.to_string(), Style::default().fg(score_color).bold()),
        Span::styled(" /100", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(score_line).alignment(Alignment::Center), score_rows[0]);

    let score_gauge = Gauge::default()
        .percent(result.score.clamp(0, 100) as u16)
        .label("")
        .gauge_style(Style::default().fg(score_color));
    frame.render_widget(score_gauge, score_rows[1]);

    // --- Similarity Index ---
    let similarity = Paragraph::new(Line::from(vec![
        Span::styled(result.similarity_percentage.to_string(), Style::default().bold()),
        Span::styled(" %", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("SIMILARITY INDEX".bold()));
    frame.render_widget(similarity, cells[1]);

    // --- Outcome ---
    let outcome = result.outcome();
    let badge_style = match outcome {
        Outcome::Passed => Style::default().fg(Color::Black).bg(Color::Green).bold(),
        Outcome::ReviewNeeded => Style::default().fg(Color::White).bg(Color::Red).bold(),
    };
    let badge = Paragraph::new(Line::from(Span::styled(format!(" {outcome} "), badge_style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("OUTCOME".bold()));
    frame.render_widget(badge, cells[2]);
}
