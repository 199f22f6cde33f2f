// Analysis faults
// Surfaced to callers only as the `{error}` outcome, never as a panic.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("cannot split {tokens} word tokens into burstiness chunks")]
    ChunkStrideZero { tokens: usize },
    #[error("text must be a string, got {kind}")]
    NonStringInput { kind: &'static str },
}

impl AnalysisError {
    /// Message carried by the `{error}` outcome.
    pub fn to_outcome_message(&self) -> String {
        format!("Error during AI detection: {}", self)
    }
}
