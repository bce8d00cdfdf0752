use crate::models::{InconsistencyKind, MatchedPair};
use crate::processing::{word_tokens, LanguageResources};

/// Negation-mismatch classifier for matched statement pairs.
///
/// A pair is a contradiction when exactly one side contains a negation
/// marker. This is a surface heuristic: "I was never there" vs "I was not
/// there" both negate and are not flagged, while an unrelated "no" in one
/// statement is.
#[derive(Debug, Clone, Copy)]
pub struct ContradictionClassifier<'a> {
    resources: &'a LanguageResources,
}

impl<'a> ContradictionClassifier<'a> {
    pub fn new(resources: &'a LanguageResources) -> Self {
        Self { resources }
    }

    /// `Some(Contradiction)` on a negation mismatch, otherwise `None`.
    pub fn classify(&self, pair: &MatchedPair<'_>) -> Option<InconsistencyKind> {
        self.is_contradiction(&pair.statement_a.text, &pair.statement_b.text)
            .then_some(InconsistencyKind::Contradiction)
    }

    /// The record kind for a matched pair: contradiction or plain restatement.
    pub fn kind_of(&self, pair: &MatchedPair<'_>) -> InconsistencyKind {
        self.classify(pair)
            .unwrap_or(InconsistencyKind::SimilarStatement)
    }

    pub fn is_contradiction(&self, text_a: &str, text_b: &str) -> bool {
        self.has_negation(text_a) != self.has_negation(text_b)
    }

    /// True when any lowercased word token is a negation marker.
    pub fn has_negation(&self, text: &str) -> bool {
        word_tokens(text)
            .iter()
            .any(|token| self.resources.is_negation_marker(token))
    }
}
