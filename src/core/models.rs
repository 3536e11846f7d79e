// src/core/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// --- Modelli Dati Core ---
// Core Data Models

/// Minimum number of characters a text must have before it can be analyzed.
pub const MIN_TEXT_CHARS: usize = 50;

/// Advisory upper bound shown next to the input box. It is never enforced.
pub const ADVISORY_MAX_CHARS: usize = 15_000;

/// Originality scores strictly above this value are considered a pass.
pub const PASS_THRESHOLD: i32 = 80;

/// Scores strictly above this value (and not passing) are shown as "medium".
pub const MEDIUM_THRESHOLD: i32 = 50;

// A single excerpt of the submitted text that the analysis service considers suspicious.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlaggedSection {
    pub text: String,
    pub reason: String,
}

/// The structured report returned by the analysis service.
///
/// Field names follow the camelCase wire format of the service. A missing
/// `flaggedSections` array is read as empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: i32,
    pub similarity_percentage: i32,
    pub analysis: String,
    #[serde(default)]
    pub flagged_sections: Vec<FlaggedSection>,
}

impl AnalysisResult {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_score(self.score)
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Pass/fail verdict shown in the "Outcome" cell of the score grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    ReviewNeeded,
}

impl Outcome {
    pub fn from_score(score: i32) -> Self {
        if score > PASS_THRESHOLD {
            Outcome::Passed
        } else {
            Outcome::ReviewNeeded
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => write!(f, "Passed"),
            Outcome::ReviewNeeded => write!(f, "Review Needed"),
        }
    }
}

// Colour band of the originality score: high is green, medium yellow, low red.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: i32) -> Self {
        if score > PASS_THRESHOLD {
            ScoreBand::High
        } else if score > MEDIUM_THRESHOLD {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }
}
