// src/ui/widgets/sidebar.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the right-hand column of the input tab.
///
/// Document upload is shown for parity with the web checker but is not
/// wired to anything.
pub fn render_sidebar(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let upload = Text::from(vec![
        Line::from("Support for .doc, .docx, .pdf (Simulated)").fg(Color::DarkGray),
        Line::from(""),
        Line::from("[ Click to Select File ]").fg(Color::DarkGray),
        Line::from("not available in the terminal").italic().fg(Color::DarkGray),
    ]);
    let upload_block = Block::default()
        .borders(Borders::ALL)
        .title("Upload Document".bold())
        .border_style(Style::default().fg(Color::Blue));
    frame.render_widget(
        Paragraph::new(upload)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(upload_block),
        chunks[0],
    );

    let steps = [
        "Paste text or upload document.",
        "AI analyzes for synthetic patterns & duplicates.",
        "Get instant feedback and score.",
    ];
    let how: Vec<Line> = steps
        .iter()
        .map(|step| Line::from(vec![Span::styled("• ", Style::default().fg(Color::Cyan)), Span::raw(*step)]))
        .collect();
    let how_block = Block::default().borders(Borders::ALL).title("How it works".bold());
    frame.render_widget(Paragraph::new(how).wrap(Wrap { trim: true }).block(how_block), chunks[1]);
}
