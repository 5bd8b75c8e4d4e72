//! Topic tokenization.
//!
//! Whitespace/punctuation tokenization only: no stemming, no phrase
//! detection. Duplicates are kept so repeated words accumulate weight.

use curator_types::Signal;

/// Minimum token length in characters.
const MIN_TOKEN_LEN: usize = 3;

/// Split text into lower-case alphabetic topic tokens.
///
/// `/` and `-` separate words. Within a word every non-alphabetic character
/// is dropped, so `"AI's"` becomes `"ais"` and `"2024"` disappears.
/// Tokens shorter than three characters and stop words are discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    text.replace(['/', '-'], " ")
        .split_whitespace()
        .map(|raw| {
            raw.chars()
                .flat_map(char::to_lowercase)
                .filter(|c| c.is_alphabetic())
                .collect::<String>()
        })
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .filter(|token| !is_stop_word(token))
        .collect()
}

/// Check if a word is a stop word.
///
/// Common function words plus domain filler ("art", "new") that would
/// otherwise dominate every ranking.
pub fn is_stop_word(word: &str) -> bool {
    const STOP_WORDS: &[&str] = &[
        "the", "a", "of", "and", "to", "in", "for", "with", "on", "at", "by", "from", "about",
        "into", "through", "over", "after", "is", "are", "an", "new", "art", "arts",
    ];

    STOP_WORDS.contains(&word)
}

/// Topics a signal contributes weight to: its explicit tags when it has
/// any, otherwise the tokens of its title and summary.
pub fn signal_topics(signal: &Signal) -> Vec<String> {
    if signal.tags.is_empty() {
        tokenize(&signal.text())
    } else {
        signal.tags.clone()
    }
}

/// True when `topic` is one of the signal's tags or one of the tokens of
/// its title and summary, regardless of which of the two drove weighting.
pub fn mentions(signal: &Signal, topic: &str) -> bool {
    signal.tags.iter().any(|t| t == topic) || tokenize(&signal.text()).iter().any(|t| t == topic)
}
