// Aggregation Logic
// Combines the four signal scores into the overall AI percentage

use crate::models::ScoreDetails;
use super::statistics::truncate_score;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalWeights {
    pub sentence_variety: f64,
    pub word_repetition: f64,
    pub transition_usage: f64,
    pub burstiness: f64,
}

pub const SIGNAL_WEIGHTS: SignalWeights = SignalWeights {
    sentence_variety: 0.25,
    word_repetition: 0.30,
    transition_usage: 0.20,
    burstiness: 0.25,
};

/// Unrounded signal scores, each already clamped to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SignalScores {
    pub sentence_variety: f64,
    pub word_repetition: f64,
    pub transition_usage: f64,
    pub burstiness: f64,
}

impl SignalScores {
    /// Sub-scores as reported, truncated toward zero.
    pub fn details(&self) -> ScoreDetails {
        ScoreDetails {
            sentence_variety: truncate_score(self.sentence_variety),
            word_repetition: truncate_score(self.word_repetition),
            transition_usage: truncate_score(self.transition_usage),
            burstiness: truncate_score(self.burstiness),
        }
    }
}

/// Weighted sum of the unrounded scores, truncated toward zero.
pub fn composite_score(scores: &SignalScores, weights: &SignalWeights) -> u8 {
    let weighted = scores.sentence_variety * weights.sentence_variety
        + scores.word_repetition * weights.word_repetition
        + scores.transition_usage * weights.transition_usage
        + scores.burstiness * weights.burstiness;
    truncate_score(weighted)
}
