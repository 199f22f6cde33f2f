// Text Analyzer
// Entry point of the heuristic detector: text in, report or error out

use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{AnalysisOutcome, AnalysisReport};
use crate::services::text_processor::{char_len, split_sentences, tokenize_words, word_count};
use super::aggregation::{composite_score, SignalScores, SIGNAL_WEIGHTS};
use super::error::AnalysisError;
use super::highlighter::highlight_sentences;
use super::signals::{
    burstiness_score, sentence_variety_score, transition_usage_score, word_repetition_score,
};

/// Inputs shorter than this (after trimming) get the zeroed report.
pub const MIN_ANALYZABLE_CHARS: usize = 50;

/// Analyze a passage and return either a full report or `{error}`.
///
/// Never panics: faults inside the pipeline, typed or not, are converted into
/// the error outcome.
pub fn analyze(text: &str) -> AnalysisOutcome {
    if char_len(text.trim()) < MIN_ANALYZABLE_CHARS {
        debug!(chars = char_len(text), "analyzer.too_short");
        return AnalysisReport::empty().into();
    }

    guarded(|| compute_report(text))
}

/// Run the pipeline, folding typed faults and panics into `{error}`.
///
/// The global panic hook stays installed, so a caught panic still prints to
/// stderr alongside the returned error.
fn guarded<F>(pipeline: F) -> AnalysisOutcome
where
    F: FnOnce() -> Result<AnalysisReport, AnalysisError>,
{
    match panic::catch_unwind(AssertUnwindSafe(pipeline)) {
        Ok(Ok(report)) => AnalysisOutcome::Report(report),
        Ok(Err(err)) => {
            warn!(error = %err, "analyzer.fault");
            AnalysisOutcome::Failed { error: err.to_outcome_message() }
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(error = %message, "analyzer.panic");
            AnalysisOutcome::Failed {
                error: format!("Error during AI detection: {}", message),
            }
        }
    }
}

/// Analyze an untyped JSON value; anything but a string is a fault.
pub fn analyze_value(value: &Value) -> AnalysisOutcome {
    match value {
        Value::String(text) => analyze(text),
        other => {
            let err = AnalysisError::NonStringInput { kind: json_kind(other) };
            warn!(error = %err, "analyzer.fault");
            AnalysisOutcome::Failed { error: err.to_outcome_message() }
        }
    }
}

/// The scoring pipeline proper.
pub fn compute_report(text: &str) -> Result<AnalysisReport, AnalysisError> {
    let sentences = split_sentences(text);
    let sentence_lengths: Vec<usize> = sentences.iter().map(|s| word_count(s)).collect();
    let tokens = tokenize_words(text);

    let scores = SignalScores {
        sentence_variety: sentence_variety_score(&sentence_lengths),
        word_repetition: word_repetition_score(&tokens),
        transition_usage: transition_usage_score(text, tokens.len()),
        burstiness: burstiness_score(&tokens, sentences.len())?,
    };

    let ai_percentage = composite_score(&scores, &SIGNAL_WEIGHTS);
    let highlighted_sections = highlight_sentences(&sentences, &sentence_lengths);

    debug!(
        sentences = sentences.len(),
        tokens = tokens.len(),
        sentence_variety = scores.sentence_variety,
        word_repetition = scores.word_repetition,
        transition_usage = scores.transition_usage,
        burstiness = scores.burstiness,
        ai_percentage,
        highlights = highlighted_sections.len(),
        "analyzer.scored"
    );

    Ok(AnalysisReport {
        ai_percentage,
        highlighted_sections,
        details: scores.details(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected internal error".to_string()
    }
}
