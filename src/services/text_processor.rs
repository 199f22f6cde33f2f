// Text Processing Service
// Sentence segmentation and tokenization shared by the heuristic signals

use regex::Regex;
use std::sync::OnceLock;

/// Tokens at or below this many characters are ignored by the lexical signals.
pub const MIN_MEANINGFUL_WORD_CHARS: usize = 3;

fn sentence_terminator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence terminator regex"))
}

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+").expect("word regex"))
}

/// Split text on runs of `.`, `!` and `?`, trimming each piece and
/// dropping the empty ones.
pub fn split_sentences(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![];
    }

    sentence_terminator_re()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Number of whitespace-separated words in a sentence.
pub fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

/// Lower-cased word tokens (runs of word characters) of the whole text.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_re()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Whether a token is long enough to count as a meaningful word.
pub fn is_meaningful_word(token: &str) -> bool {
    token.chars().count() > MIN_MEANINGFUL_WORD_CHARS
}

/// Character count (Unicode scalar values), used for every length threshold.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
