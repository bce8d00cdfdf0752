pub mod language;
pub mod sentence;
pub mod tokenize;

pub use language::{Language, LanguageResources};
pub use sentence::split_sentences;
pub use tokenize::{content_word_set, ngram_terms, word_tokens};
