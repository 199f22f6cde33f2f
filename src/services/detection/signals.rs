// Heuristic Signals
// Each signal maps a text statistic onto an unrounded 0..=100 score.
//
// Higher means "more AI-like" for repetition, transitions and burstiness.
// Sentence variety rises with length variance.

use std::collections::{HashMap, HashSet};

use super::error::AnalysisError;
use super::statistics::{clamp_score, sample_std_dev};
use crate::services::text_processor::is_meaningful_word;

pub const TRANSITION_WORDS: [&str; 15] = [
    "however",
    "therefore",
    "moreover",
    "furthermore",
    "consequently",
    "additionally",
    "nevertheless",
    "thus",
    "hence",
    "accordingly",
    "subsequently",
    "meanwhile",
    "conversely",
    "similarly",
    "likewise",
];

/// Burstiness is only measured above this many sentences.
pub const BURSTINESS_MIN_SENTENCES: usize = 5;
/// Score used when there is not enough text to measure burstiness.
pub const NEUTRAL_BURSTINESS: f64 = 50.0;
const BURSTINESS_CHUNKS: usize = 3;

pub fn is_transition_word(token: &str) -> bool {
    TRANSITION_WORDS.iter().any(|w| *w == token)
}

/// `100 - 100 / (σ + 1)` over sentence word counts, σ = 0 below two sentences.
pub fn sentence_variety_score(sentence_lengths: &[usize]) -> f64 {
    let lengths: Vec<f64> = sentence_lengths.iter().map(|&n| n as f64).collect();
    let sigma = sample_std_dev(&lengths).unwrap_or(0.0);
    clamp_score(100.0 - 20.0 * (5.0 / (sigma + 1.0)))
}

/// Share of meaningful-word occurrences that repeat an earlier one, tripled.
pub fn word_repetition_score(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for token in tokens.iter().filter(|t| is_meaningful_word(t)) {
        *freq.entry(token.as_str()).or_insert(0) += 1;
    }
    if freq.is_empty() {
        return 0.0;
    }

    let unique_ratio = freq.len() as f64 / tokens.len() as f64;
    clamp_score(100.0 * (1.0 - unique_ratio) * 3.0)
}

/// Occurrences of `" word "` in the lower-cased text.
///
/// Only a literal space on both sides counts: a transition word that opens or
/// closes the text, or sits next to punctuation or a newline, is not matched.
pub fn count_padded_transitions(text: &str) -> usize {
    let lowered = text.to_lowercase();
    TRANSITION_WORDS
        .iter()
        .map(|word| lowered.matches(format!(" {word} ").as_str()).count())
        .sum()
}

/// Transition occurrences per hundred tokens, times ten.
pub fn transition_usage_score(text: &str, token_count: usize) -> f64 {
    if token_count == 0 {
        return 0.0;
    }
    let count = count_padded_transitions(text);
    let ratio = count as f64 / (token_count as f64 / 100.0);
    clamp_score(ratio * 10.0)
}

/// Meaningful-word diversity of each contiguous chunk of the token stream.
///
/// Chunks are cut every `len / 3` tokens, so a remainder produces a short
/// fourth chunk. Empty chunks never occur with this stride.
pub fn chunk_diversities(tokens: &[String]) -> Result<Vec<f64>, AnalysisError> {
    let stride = tokens.len() / BURSTINESS_CHUNKS;
    if stride == 0 {
        return Err(AnalysisError::ChunkStrideZero { tokens: tokens.len() });
    }

    Ok(tokens
        .chunks(stride)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let distinct: HashSet<&str> = chunk
                .iter()
                .filter(|t| is_meaningful_word(t))
                .map(String::as_str)
                .collect();
            distinct.len() as f64 / chunk.len() as f64
        })
        .collect())
}

/// `100 - σ(chunk diversities) * 100`; fixed at 50 for five sentences or fewer.
pub fn burstiness_score(tokens: &[String], sentence_count: usize) -> Result<f64, AnalysisError> {
    if sentence_count <= BURSTINESS_MIN_SENTENCES {
        return Ok(NEUTRAL_BURSTINESS);
    }

    let diversities = chunk_diversities(tokens)?;
    let burstiness = sample_std_dev(&diversities)
        .map(|sigma| sigma * 100.0)
        .unwrap_or(NEUTRAL_BURSTINESS);
    Ok(clamp_score(100.0 - burstiness))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::text_processor::tokenize_words;

    fn tokens(text: &str) -> Vec<String> {
        tokenize_words(text)
    }

    #[test]
    fn test_sentence_variety_uniform_lengths() {
        // σ = 0 gives 100 - 100 = 0
        assert_eq!(sentence_variety_score(&[8, 8, 8, 8]), 0.0);
        assert_eq!(sentence_variety_score(&[]), 0.0);
        assert_eq!(sentence_variety_score(&[12]), 0.0);
    }

    #[test]
    fn test_sentence_variety_rises_with_variance() {
        let low = sentence_variety_score(&[8, 9, 8, 9]);
        let high = sentence_variety_score(&[2, 30, 5, 25]);
        assert!(high > low);
        assert!(high < 100.0);
    }

    #[test]
    fn test_word_repetition_ignores_short_words() {
        // only "word" is meaningful: 1 distinct / 4 tokens
        let score = word_repetition_score(&tokens("the word the word"));
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_word_repetition_zero_without_meaningful_words() {
        assert_eq!(word_repetition_score(&[]), 0.0);
        assert_eq!(word_repetition_score(&tokens("a an the of to in")), 0.0);
    }

    #[test]
    fn test_word_repetition_all_distinct_long_words() {
        assert_eq!(word_repetition_score(&tokens("alpha bravo charlie delta")), 0.0);
    }

    #[test]
    fn test_padded_transition_requires_surrounding_spaces() {
        assert_eq!(count_padded_transitions("However the cat sat."), 0);
        assert_eq!(count_padded_transitions("The cat sat however."), 0);
        assert_eq!(count_padded_transitions("The cat, however, sat."), 0);
        assert_eq!(count_padded_transitions("The cat however sat."), 1);
        assert_eq!(count_padded_transitions("It is THUS done and hence over."), 2);
    }

    #[test]
    fn test_padded_transition_count_is_non_overlapping() {
        // the shared space between the two words is consumed by the first match
        assert_eq!(count_padded_transitions("a thus thus b"), 1);
        assert_eq!(count_padded_transitions("a thus  thus b"), 2);
    }

    #[test]
    fn test_transition_usage_score() {
        assert_eq!(transition_usage_score("anything", 0), 0.0);
        // one match over 20 tokens: 1 / 0.2 * 10 = 50
        let text = "we went home however the rain kept falling on the roof of the old barn all night long and cold";
        let count = tokens(text).len();
        assert_eq!(count, 20);
        assert!((transition_usage_score(text, count) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_chunk_diversities_with_remainder_chunk() {
        // ten tokens, stride three: 3 + 3 + 3 + 1
        let toks = tokens("alpha alpha alpha bravo charlie delta echo echo echo golf");
        let diversities = chunk_diversities(&toks).unwrap();
        assert_eq!(diversities.len(), 4);
        assert!((diversities[0] - 1.0 / 3.0).abs() < 1e-9);
        assert!((diversities[1] - 1.0).abs() < 1e-9);
        assert!((diversities[2] - 1.0 / 3.0).abs() < 1e-9);
        assert!((diversities[3] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_chunk_diversities_rejects_zero_stride() {
        let err = chunk_diversities(&tokens("two words")).unwrap_err();
        assert!(matches!(err, AnalysisError::ChunkStrideZero { tokens: 2 }));
    }

    #[test]
    fn test_burstiness_neutral_for_few_sentences() {
        assert_eq!(burstiness_score(&[], 5).unwrap(), NEUTRAL_BURSTINESS);
    }

    #[test]
    fn test_burstiness_uniform_chunks_is_max() {
        let toks = tokens("alpha bravo charlie delta echo foxtrot");
        assert_eq!(burstiness_score(&toks, 6).unwrap(), 100.0);
    }

    #[test]
    fn test_burstiness_equal_fractional_diversities_is_max() {
        // three chunks of five tokens, four meaningful each: 0.8, 0.8, 0.8
        let toks = tokens(
            "alpha bravo charlie delta the alpha bravo charlie delta the alpha bravo charlie delta the",
        );
        assert_eq!(chunk_diversities(&toks).unwrap(), vec![0.8, 0.8, 0.8]);
        assert_eq!(burstiness_score(&toks, 6).unwrap(), 100.0);
    }
}
