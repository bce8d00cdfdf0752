use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use super::LanguageResources;

/// Lowercased word tokens: runs of alphanumeric characters, keeping inner
/// apostrophes ("don't"). Punctuation is dropped rather than kept as its own
/// token, so a trailing "." never counts as a shared word in overlap scores.
pub fn word_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'' && c != '’')
        .map(|w| w.trim_matches(|c| c == '\'' || c == '’'))
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

/// Distinct lowercased word tokens with stop words removed.
pub fn content_word_set(text: &str, resources: &LanguageResources) -> HashSet<String> {
    word_tokens(text)
        .into_iter()
        .filter(|w| !resources.is_stop_word(w))
        .collect()
}

fn term_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("term pattern is valid"))
}

/// Terms for vector-space weighting: lowercased words of two or more
/// characters, stop words removed, then unigrams and adjacent bigrams.
pub fn ngram_terms(text: &str, resources: &LanguageResources) -> Vec<String> {
    let lower = text.to_lowercase();
    let words: Vec<&str> = term_pattern()
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|w| !resources.is_stop_word(w))
        .collect();

    let mut terms: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    terms.extend(words.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    terms
}
