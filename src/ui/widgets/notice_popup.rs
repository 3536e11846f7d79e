// src/ui/widgets/notice_popup.rs

use crate::core::workflow::Notice;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    text::Line,
};

/// Renders a workflow notice as a modal popup on top of the existing UI.
///
/// The `Clear` widget wipes the popup area first so the screen underneath
/// does not bleed through.
pub fn render_notice_popup(frame: &mut Frame, notice: Notice, area: Rect) {
    let (title, color) = match notice {
        Notice::Validation => ("Notice", Color::Yellow),
        Notice::AnalysisFailed => ("Error", Color::Red),
    };

    let text = Text::from(vec![
        Line::from(""),
        Line::from(notice.message().bold()),
        Line::from(""),
        Line::from("Press any key to continue".fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let popup_area = centered_rect(60, 30, area);

    let popup = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// Helper function to create a centered rectangle for a popup.
///
/// # Arguments
/// * `percent_x` - The desired width of the popup as a percentage of the parent area.
/// * `percent_y` - The desired height of the popup as a percentage of the parent area.
/// * `r` - The parent `Rect` to center the new area within.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
