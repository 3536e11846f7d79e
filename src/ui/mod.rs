// src/ui/mod.rs

use crate::app::App;
use crate::core::workflow::View;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let layout = layout::create_layout(area);

    widgets::tabs::render_tabs(frame, app, layout.tabs);

    match app.workflow.view() {
        View::Input => {
            let input_layout = layout::create_input_layout(layout.content);
            widgets::input::render_input(frame, app, input_layout.editor);
            if !input_layout.sidebar.is_empty() {
                widgets::sidebar::render_sidebar(frame, input_layout.sidebar);
            }
        }
        View::Results => widgets::report::render_report(frame, app, layout.content),
    }

    widgets::footer::render_footer(frame, app, layout.footer);

    if let Some(notice) = app.workflow.notice() {
        widgets::notice_popup::render_notice_popup(frame, notice, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{AnalysisResult, FlaggedSection};
    use ratatui::backend::TestBackend;

    fn screen(app: &mut App) -> String {
        screen_sized(app, 120, 40)
    }

    fn screen_sized(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    fn finished_app(result: AnalysisResult) -> App {
        let mut app = App::new(std::env::temp_dir());
        app.workflow.insert_str(&"z".repeat(60));
        app.submit();
        app.finish_analysis(Ok(result));
        app
    }

    #[test]
    fn draws_input_tab() {
        let mut app = App::new(std::env::temp_dir());
        let content = screen(&mut app);

        assert!(content.contains("1. INPUT TEXT"));
        assert!(content.contains("Paste Text"));
        assert!(content.contains("Max 15k chars"));
        assert!(content.contains("Check Originality"));
        assert!(content.contains("Upload Document"));
    }

    #[test]
    fn draws_spinner_while_analyzing() {
        let mut app = App::new(std::env::temp_dir());
        app.workflow.insert_str(&"z".repeat(60));
        app.submit();

        assert!(screen(&mut app).contains("Analyzing..."));
    }

    #[test]
    fn draws_report_with_flagged_sections() {
        let mut app = finished_app(AnalysisResult {
            score: 45,
            similarity_percentage: 33,
            analysis: "Paragraph two mirrors a known review.".to_string(),
            flagged_sections: vec![FlaggedSection {
                text: "tidal forcing dominates".to_string(),
                reason: "Verbatim match".to_string(),
            }],
        });
        let content = screen(&mut app);

        assert!(content.contains("Analysis Report"));
        assert!(content.contains("Review Needed"));
        assert!(content.contains("tidal forcing dominates"));
        assert!(content.contains("Issue: Verbatim match"));
    }

    #[test]
    fn draws_clean_report() {
        let mut app = finished_app(AnalysisResult {
            score: 92,
            similarity_percentage: 3,
            analysis: "Looks original.".to_string(),
            flagged_sections: vec![],
        });
        let content = screen(&mut app);

        assert!(content.contains("Passed"));
        assert!(content.contains("No specific sections were flagged as suspicious."));
    }

    #[test]
    fn draws_notice_popup() {
        let mut app = App::new(std::env::temp_dir());
        app.workflow.insert_str("too short");
        app.submit();

        assert!(screen(&mut app).contains("Please enter at least 50 characters"));
    }

    #[test]
    fn report_scrolls_to_last_flagged_section() {
        let analysis = (1..=25)
            .map(|n| format!("Sentence {n} compares the submission against prior reviews of the same topic."))
            .collect::<Vec<_>>()
            .join("\n");
        let mut app = finished_app(AnalysisResult {
            score: 30,
            similarity_percentage: 64,
            analysis,
            flagged_sections: vec![FlaggedSection {
                text: "ocean heat uptake accelerates".to_string(),
                reason: "LASTREASON".to_string(),
            }],
        });

        assert!(!screen_sized(&mut app, 100, 30).contains("Issue: LASTREASON"));
        for _ in 0..200 {
            app.scroll_down();
        }
        assert!(screen_sized(&mut app, 100, 30).contains("Issue: LASTREASON"));
        // Over-scrolling is clamped so the last line sits on the bottom row.
        assert!(app.scroll_offset < 200);
        app.scroll_up();
        assert!(!screen_sized(&mut app, 100, 30).contains("Issue: LASTREASON"));
    }

    #[test]
    fn editor_keeps_end_of_word_wrapped_text_visible() {
        let mut app = App::new(std::env::temp_dir());
        let word = "w".repeat(40);
        let mut text = vec![word.as_str(); 60].join(" ");
        text.push_str(" ENDMARK");
        app.workflow.insert_str(&text);

        assert!(screen(&mut app).contains("ENDMARK"));
    }
}
