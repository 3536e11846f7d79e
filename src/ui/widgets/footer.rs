// src/ui/widgets/footer.rs

use crate::app::{App, ExportStatus};
use crate::core::workflow::View;
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = if app.workflow.in_flight() {
        Line::from(vec![Span::raw("Analyzing... "), key("Esc"), Span::raw(" to quit.")])
    } else {
        match app.workflow.view() {
            // Quando l'utente sta digitando
            View::Input => {
                let mut spans = vec![
                    key("Enter"),
                    Span::raw(" check originality, "),
                    key("Ctrl+L"),
                    Span::raw(" clear, "),
                ];
                if app.workflow.result().is_some() {
                    spans.extend([key("Tab"), Span::raw(" results, ")]);
                }
                spans.extend([key("Esc"), Span::raw(" quit.")]);
                Line::from(spans)
            }
            // Quando il report è visualizzato
            View::Results => match &app.export_status {
                ExportStatus::Idle => Line::from(vec![
                    key("[N]"),
                    Span::raw("ew Check, "),
                    key("[B]"),
                    Span::raw("ack to Input, "),
                    key("[D]"),
                    Span::raw("ownload Report, "),
                    key("↑ ↓"),
                    Span::raw(" scroll, "),
                    key("[Q]"),
                    Span::raw("uit"),
                ]),
                ExportStatus::Success(path) => Line::from(vec![
                    Span::styled("✓ Report saved to ", Style::new().fg(Color::Green)),
                    Span::raw(path.clone()),
                ]),
                ExportStatus::Error(e) => Line::from(vec![
                    Span::styled("✗ Export failed: ", Style::new().fg(Color::Red)),
                    Span::raw(e.clone()),
                ]),
            },
        }
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
