// src/core/workflow.rs

//! The analysis workflow: text validation, the single in-flight request guard,
//! and the tab state that decides which panel is visible.
//!
//! All state lives in [`Workflow`], a plain serializable struct, so every
//! transition can be exercised without a terminal.

use crate::core::client::{AnalysisClient, ClientResult};
use crate::core::models::{AnalysisResult, MIN_TEXT_CHARS};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::{debug, info, warn};

pub const VALIDATION_NOTICE: &str = "Please enter at least 50 characters for analysis.";
pub const FAILURE_NOTICE: &str = "An error occurred during analysis.";

/// The two tabs of the checker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum View {
    #[default]
    #[strum(to_string = "1. Input Text")]
    Input,
    #[strum(to_string = "2. Analysis Results")]
    Results,
}

/// A user-facing message raised by the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// The text was too short to submit.
    Validation,
    /// The analysis call failed for any reason.
    AnalysisFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Validation => VALIDATION_NOTICE,
            Notice::AnalysisFailed => FAILURE_NOTICE,
        }
    }
}

/// Why `begin_submit` did not start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    TooShort,
    InFlight,
}

/// A request that passed validation and must now be handed to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    text: String,
    result: Option<AnalysisResult>,
    view: View,
    in_flight: bool,
    notice: Option<Notice>,
}

/// True when `text` is long enough to be analyzed.
pub fn meets_minimum(text: &str) -> bool {
    text.chars().count() >= MIN_TEXT_CHARS
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Whether the "Check Originality" action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.in_flight && meets_minimum(&self.text)
    }

    // --- Text editing ---
    // Edits are ignored while a request is outstanding so that the text on
    // screen is always the text that was submitted.

    pub fn insert_char(&mut self, c: char) {
        if !self.in_flight {
            self.text.push(c);
        }
    }

    pub fn insert_str(&mut self, s: &str) {
        if !self.in_flight {
            self.text.push_str(s);
        }
    }

    pub fn delete_char(&mut self) {
        if !self.in_flight {
            self.text.pop();
        }
    }

    pub fn clear_text(&mut self) {
        if !self.in_flight {
            self.text.clear();
        }
    }

    /// First half of a submission: validates `text` and claims the in-flight slot.
    ///
    /// On success the prior result is dropped, the view returns to `Input`,
    /// and the caller must dispatch the returned request and later hand its
    /// outcome to [`Workflow::complete`].
    pub fn begin_submit(&mut self, text: &str) -> Result<PendingRequest, SubmitRejected> {
        if text.is_empty() || !meets_minimum(text) {
            warn!(chars = text.chars().count(), "Rejected submission below the minimum length.");
            self.notice = Some(Notice::Validation);
            return Err(SubmitRejected::TooShort);
        }
        if self.in_flight {
            debug!("Ignored submission while a request is outstanding.");
            return Err(SubmitRejected::InFlight);
        }

        self.in_flight = true;
        self.result = None;
        self.view = View::Input;
        self.notice = None;
        if self.text != text {
            self.text = text.to_string();
        }
        info!(chars = text.chars().count(), "Submitting text for analysis.");
        Ok(PendingRequest { text: text.to_string() })
    }

    /// Submits the text currently held in the input box.
    pub fn begin_submit_current(&mut self) -> Result<PendingRequest, SubmitRejected> {
        let text = self.text.clone();
        self.begin_submit(&text)
    }

    /// Second half of a submission: records the client's outcome.
    ///
    /// Calling this with nothing in flight is ignored.
    pub fn complete(&mut self, outcome: ClientResult<AnalysisResult>) {
        if !self.in_flight {
            warn!("Dropped an analysis outcome with no request outstanding.");
            return;
        }
        self.in_flight = false;

        match outcome {
            Ok(result) => {
                info!(score = result.score, outcome = %result.outcome(), "Analysis result received.");
                self.result = Some(result);
                self.view = View::Results;
            }
            Err(e) => {
                warn!(error = %e, "Analysis failed.");
                self.notice = Some(Notice::AnalysisFailed);
            }
        }
    }

    /// Single-await form of [`Workflow::begin_submit`] + [`Workflow::complete`]:
    /// validates `text`, calls `client` once, and records the outcome.
    ///
    /// The TUI keeps the two phases apart so the call can run on a background
    /// task while frames keep drawing. Returns the stored result on success,
    /// `None` otherwise (the reason is left in [`Workflow::notice`]).
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn submit<C>(&mut self, client: &C, text: &str) -> Option<&AnalysisResult>
    where
        C: AnalysisClient + ?Sized,
    {
        let request = self.begin_submit(text).ok()?;
        let outcome = client.analyze(&request.text).await;
        self.complete(outcome);
        self.result.as_ref()
    }

    /// Starts a new check from scratch. Idempotent.
    pub fn reset(&mut self) {
        self.text.clear();
        self.result = None;
        self.view = View::Input;
        self.notice = None;
    }

    /// Switches tabs. `Results` is only selectable while a result is present.
    pub fn select_view(&mut self, view: View) {
        match view {
            View::Input => self.view = View::Input,
            View::Results if self.result.is_some() => self.view = View::Results,
            View::Results => debug!("Ignored switch to results with no result available."),
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
