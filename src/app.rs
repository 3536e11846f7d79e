// src/app.rs

use crate::core::client::ClientResult;
use crate::core::export;
use crate::core::models::AnalysisResult;
use crate::core::workflow::{PendingRequest, View, Workflow};
use ratatui::widgets::ScrollbarState;
use std::path::PathBuf;
use tracing::error;

pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub enum ExportStatus {
    Idle,
    Success(String),
    Error(String),
}

pub struct App {
    pub should_quit: bool,
    pub workflow: Workflow,
    pub spinner_frame: usize,
    pub scroll_offset: usize,
    pub report_scroll_state: ScrollbarState,
    pub export_status: ExportStatus,
    pub export_dir: PathBuf,
}

impl App {
    pub fn new(export_dir: PathBuf) -> Self {
        Self {
            should_quit: false,
            workflow: Workflow::new(),
            spinner_frame: 0,
            scroll_offset: 0,
            report_scroll_state: ScrollbarState::default(),
            export_status: ExportStatus::Idle,
            export_dir,
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    /// Submits the current input. Returns the request to dispatch, if any.
    pub fn submit(&mut self) -> Option<PendingRequest> {
        self.export_status = ExportStatus::Idle;
        self.workflow.begin_submit_current().ok()
    }

    pub fn finish_analysis(&mut self, outcome: ClientResult<AnalysisResult>) {
        self.workflow.complete(outcome);
        self.reset_scroll();
    }

    pub fn show(&mut self, view: View) {
        self.workflow.select_view(view);
    }

    pub fn export_report(&mut self) {
        let Some(result) = self.workflow.result() else {
            return;
        };
        self.export_status = match export::export_report(result, &self.export_dir) {
            Ok(path) => ExportStatus::Success(path.display().to_string()),
            Err(e) => {
                error!(error = %e, "Report export failed.");
                ExportStatus::Error(e.to_string())
            }
        };
    }

    pub fn on_tick(&mut self) {
        if self.workflow.in_flight() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn quit(&mut self) { self.should_quit = true; }

    pub fn reset(&mut self) {
        self.workflow.reset();
        self.export_status = ExportStatus::Idle;
        self.spinner_frame = 0;
        self.reset_scroll();
    }

    fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
        self.report_scroll_state = ScrollbarState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::ClientError;

    fn app() -> App {
        App::new(std::env::temp_dir())
    }

    fn result() -> AnalysisResult {
        AnalysisResult {
            score: 88,
            similarity_percentage: 4,
            analysis: "Original work.".to_string(),
            flagged_sections: vec![],
        }
    }

    #[test]
    fn submit_dispatches_only_once() {
        let mut app = app();
        app.workflow.insert_str(&"x".repeat(64));

        assert!(app.submit().is_some());
        assert!(app.submit().is_none());

        app.finish_analysis(Ok(result()));
        assert_eq!(app.workflow.view(), View::Results);
    }

    #[test]
    fn failed_analysis_keeps_the_input_for_another_try() {
        let mut app = app();
        app.workflow.insert_str(&"x".repeat(64));
        app.submit();
        app.finish_analysis(Err(ClientError::InvalidResponse("broken".into())));

        assert_eq!(app.workflow.view(), View::Input);
        assert_eq!(app.workflow.char_count(), 64);
        assert!(app.submit().is_some());
    }

    #[test]
    fn spinner_only_moves_while_in_flight() {
        let mut app = app();
        app.on_tick();
        assert_eq!(app.spinner_frame, 0);

        app.workflow.insert_str(&"x".repeat(50));
        app.submit();
        app.on_tick();
        app.on_tick();
        assert_eq!(app.spinner_frame, 2);
    }

    #[test]
    fn reset_clears_scroll_and_export_status() {
        let mut app = app();
        app.scroll_down();
        app.export_status = ExportStatus::Error("disk full".into());

        app.reset();
        assert_eq!(app.scroll_offset, 0);
        assert!(matches!(app.export_status, ExportStatus::Idle));
    }
}
