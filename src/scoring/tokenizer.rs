// file: src/scoring/tokenizer.rs
// description: bag-of-words tokenization for relevance scoring
// reference: https://docs.rs/regex

use crate::extractor::patterns::WORD_TOKEN;

pub const STOPWORDS: [&str; 12] = [
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was",
];

/// Lowercases the text and returns every run of three or more ASCII letters
/// that is not a stopword, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_TOKEN
        .find_iter(&lowered)
        .map(|token| token.as_str())
        .filter(|token| !STOPWORDS.contains(token))
        .map(str::to_string)
        .collect()
}
