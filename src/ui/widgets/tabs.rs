// src/ui/widgets/tabs.rs

use crate::app::App;
use crate::core::workflow::View;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};
use strum::IntoEnumIterator;

/// Renders the tab bar. The results tab is dimmed until a result exists.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let has_result = app.workflow.result().is_some();

    let titles: Vec<Line> = View::iter()
        .map(|view| {
            let style = match view {
                View::Results if !has_result => Style::default().fg(Color::DarkGray),
                _ => Style::default(),
            };
            Line::styled(view.to_string().to_uppercase(), style)
        })
        .collect();

    let selected = View::iter()
        .position(|v| v == app.workflow.view())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Originality & Plagiarism Checker ".bold()),
        )
        .select(selected)
        .highlight_style(Style::new().fg(Color::Cyan).bold().underlined())
        .divider("│");

    frame.render_widget(tabs, area);
}
