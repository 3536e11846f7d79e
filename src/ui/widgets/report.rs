// src/ui/widgets/report.rs

use crate::app::App;
use crate::core::models::AnalysisResult;
use crate::ui::widgets::summary::{render_summary, SUMMARY_HEIGHT};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    text::Line,
};

/// Renders the results tab: score grid on top, scrollable narrative and
/// flagged sections below.
pub fn render_report(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Analysis Report".bold())
        .title(Line::from("[N] Start New Check").right_aligned().fg(Color::Yellow));

    let Some(result) = app.workflow.result().cloned() else {
        let placeholder = Paragraph::new("No analysis available yet.")
            .alignment(Alignment::Center)
            .block(main_block);
        frame.render_widget(placeholder, area);
        return;
    };

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(SUMMARY_HEIGHT), Constraint::Min(0)])
        .split(inner_area);

    render_summary(frame, &result, chunks[0]);

    let body_area = chunks[1];
    // The rightmost column is reserved for the scrollbar.
    let text_area = Rect { width: body_area.width.saturating_sub(1), ..body_area };

    let paragraph = Paragraph::new(build_report_text(&result)).wrap(Wrap { trim: false });
    let total_rows = paragraph.line_count(text_area.width);
    let max_offset = total_rows.saturating_sub(text_area.height as usize);
    if app.scroll_offset > max_offset {
        app.scroll_offset = max_offset;
    }
    app.report_scroll_state = app
        .report_scroll_state
        .content_length(max_offset)
        .position(app.scroll_offset);

    let paragraph = paragraph.scroll((u16::try_from(app.scroll_offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, text_area);

    if max_offset > 0 {
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            body_area,
            &mut app.report_scroll_state,
        );
    }
}

/// Builds the narrative and the numbered list of flagged excerpts.
fn build_report_text(result: &AnalysisResult) -> Text<'static> {
    let mut lines = vec![
        Line::from(""),
        Line::from("Detailed AI Analysis".bold().fg(Color::Cyan)),
    ];
    lines.extend(result.analysis.lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));

    if result.flagged_sections.is_empty() {
        lines.push(Line::from(
            "✓ No specific sections were flagged as suspicious.".fg(Color::Green),
        ));
    } else {
        lines.push(Line::from("Flagged Sections".bold().fg(Color::Red)));
        for (idx, section) in result.flagged_sections.iter().enumerate() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(format!("#{} ", idx + 1), Style::default().fg(Color::Red).bold()),
                Span::styled(format!("\"{}\"", section.text), Style::default().italic()),
            ]));
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(format!("Issue: {}", section.reason), Style::default().fg(Color::Red)),
            ]));
        }
    }

    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::FlaggedSection;

    #[test]
    fn flagged_sections_are_numbered_from_one() {
        let result = AnalysisResult {
            score: 20,
            similarity_percentage: 70,
            analysis: "Heavily derivative.\nSee excerpts.".to_string(),
            flagged_sections: vec![
                FlaggedSection { text: "alpha".into(), reason: "copied".into() },
                FlaggedSection { text: "beta".into(), reason: "paraphrased".into() },
            ],
        };
        let rendered: Vec<String> = build_report_text(&result)
            .lines
            .iter()
            .map(|l| l.to_string())
            .collect();

        assert!(rendered.contains(&"Heavily derivative.".to_string()));
        assert!(rendered.contains(&"#1 \"alpha\"".to_string()));
        assert!(rendered.contains(&"#2 \"beta\"".to_string()));
        assert!(rendered.contains(&"   Issue: paraphrased".to_string()));
    }
}
