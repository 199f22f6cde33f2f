// AI Detector Data Models
// Report and request shapes shared by the analyzer, the HTTP API and the CLI

use serde::{Deserialize, Serialize};

// ============ Detection Request ============

/// Body of `POST /api/detect_ai`.
///
/// `text` is kept as a raw JSON value so that a non-string payload reaches the
/// analyzer and comes back as an error outcome instead of a rejected request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DetectRequest {
    #[serde(default)]
    pub text: Option<serde_json::Value>,
}

// ============ Score Breakdown ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScoreDetails {
    pub sentence_variety: u8,
    pub word_repetition: u8,
    pub transition_usage: u8,
    pub burstiness: u8,
}

// ============ Analysis Report ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AnalysisReport {
    pub ai_percentage: u8,
    pub highlighted_sections: Vec<String>,
    pub details: ScoreDetails,
}

impl AnalysisReport {
    /// Report returned for input too short to analyze.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Either a full report or an error object, never a mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Report(AnalysisReport),
    Failed { error: String },
}

impl AnalysisOutcome {
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisOutcome::Report(report) => Some(report),
            AnalysisOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisOutcome::Report(_) => None,
            AnalysisOutcome::Failed { error } => Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AnalysisOutcome::Failed { .. })
    }
}

impl From<AnalysisReport> for AnalysisOutcome {
    fn from(report: AnalysisReport) -> Self {
        AnalysisOutcome::Report(report)
    }
}

// ============ API Errors ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}
