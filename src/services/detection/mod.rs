// Detection Module
// Heuristic AI text detection core organized into specialized submodules:
// - analyzer: Entry point, runs the pipeline and converts faults into `{error}`
// - signals: Sentence variety, word repetition, transition usage, burstiness
// - aggregation: Weighted composite of the signal scores
// - highlighter: Selects the most template-like sentences
// - statistics: Mean, sample standard deviation, score clamping

pub mod analyzer;
pub mod aggregation;
pub mod error;
pub mod highlighter;
pub mod signals;
pub mod statistics;

// Re-export commonly used functions
pub use analyzer::{analyze, analyze_value, compute_report, MIN_ANALYZABLE_CHARS};
pub use aggregation::{composite_score, SignalScores, SignalWeights, SIGNAL_WEIGHTS};
pub use error::AnalysisError;
pub use highlighter::{highlight_sentences, MAX_HIGHLIGHTS};
pub use signals::{
    burstiness_score,
    count_padded_transitions,
    sentence_variety_score,
    transition_usage_score,
    word_repetition_score,
    TRANSITION_WORDS,
};
