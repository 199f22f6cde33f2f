// Sentence Highlighter
// Picks the sentences that look most template-like

use super::signals::is_transition_word;
use super::statistics::mean;
use crate::services::text_processor::{char_len, word_count};

/// Highlighting is only attempted above this many sentences.
pub const HIGHLIGHT_MIN_SENTENCES: usize = 3;
/// Sentences with this many words or fewer are never scored.
pub const HIGHLIGHT_MIN_WORDS: usize = 5;
pub const MAX_HIGHLIGHTS: usize = 3;

const TRANSITION_BONUS: u32 = 30;
const AVERAGE_LENGTH_BONUS: u32 = 40;
const AVERAGE_LENGTH_TOLERANCE: f64 = 2.0;
const MIN_HIGHLIGHT_SCORE: u32 = 50;
const MIN_HIGHLIGHT_CHARS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceCandidate<'a> {
    pub index: usize,
    pub text: &'a str,
    pub score: u32,
}

/// Score one sentence against the document's average sentence length.
///
/// Transition words are matched as whole whitespace tokens here, so
/// `"however,"` does not count.
pub fn score_sentence(sentence: &str, avg_length: f64) -> u32 {
    let lowered = sentence.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    let has_transition = words.iter().any(|w| is_transition_word(w));
    let length_diff = (words.len() as f64 - avg_length).abs();

    let mut score = 0;
    if has_transition {
        score += TRANSITION_BONUS;
    }
    if length_diff < AVERAGE_LENGTH_TOLERANCE {
        score += AVERAGE_LENGTH_BONUS;
    }
    score
}

/// Scored candidates in document order.
pub fn score_candidates<'a>(sentences: &[&'a str], sentence_lengths: &[usize]) -> Vec<SentenceCandidate<'a>> {
    let lengths: Vec<f64> = sentence_lengths.iter().map(|&n| n as f64).collect();
    let avg_length = mean(&lengths);

    sentences
        .iter()
        .enumerate()
        .filter(|(_, text)| word_count(text) > HIGHLIGHT_MIN_WORDS)
        .map(|(index, &text)| SentenceCandidate {
            index,
            text,
            score: score_sentence(text, avg_length),
        })
        .collect()
}

/// Up to three sentences, best score first, ties in document order.
pub fn highlight_sentences(sentences: &[&str], sentence_lengths: &[usize]) -> Vec<String> {
    if sentences.len() <= HIGHLIGHT_MIN_SENTENCES {
        return vec![];
    }

    let mut candidates = score_candidates(sentences, sentence_lengths);
    // stable: equal scores keep document order
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    candidates
        .into_iter()
        .take(MAX_HIGHLIGHTS)
        .filter(|c| c.score > MIN_HIGHLIGHT_SCORE && char_len(c.text) > MIN_HIGHLIGHT_CHARS)
        .map(|c| c.text.to_string())
        .collect()
}
