//! Pairwise statement similarity.
//!
//! The primary measure is TF-IDF weighted cosine similarity over unigrams and
//! bigrams. Building the vector space can legitimately fail on small inputs
//! (every shared term gets pruned by the document-frequency bounds), so
//! [`VectorSpace::build`] reports that as [`VectorSpace::Degenerate`] and the
//! matcher falls back to Jaccard overlap of content words.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::{debug, warn};

use crate::config::DEFAULT_SIMILARITY_THRESHOLD;
use crate::models::{MatchedPair, Statement};
use crate::processing::{content_word_set, ngram_terms, LanguageResources};

use super::utils::{cosine_similarity, jaccard_similarity};

/// Terms must occur in at least this many statements.
pub const MIN_DOCUMENT_FREQUENCY: usize = 2;

/// Terms occurring in more than this share of statements are pruned.
pub const MAX_DOCUMENT_RATIO: f64 = 0.85;

/// Why a TF-IDF vector space could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// No statement produced a single term after stop-word removal
    NoTerms,
    /// Too few statements for the ratio bound to admit any term
    DocumentFrequencyBounds,
    /// Every term was pruned by the document-frequency bounds
    EmptyVocabulary,
}

impl std::fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoTerms => write!(f, "no terms after stop-word removal"),
            Self::DocumentFrequencyBounds => {
                write!(f, "document-frequency bounds admit no term")
            }
            Self::EmptyVocabulary => write!(f, "empty vocabulary after pruning"),
        }
    }
}

/// TF-IDF vectors for a fixed list of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfModel {
    vocabulary: BTreeMap<String, usize>,
    vectors: Vec<Vec<f64>>,
}

impl TfIdfModel {
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Cosine similarity of statements `i` and `j`, in [0, 1].
    pub fn similarity(&self, i: usize, j: usize) -> f64 {
        cosine_similarity(&self.vectors[i], &self.vectors[j])
    }
}

/// Outcome of fitting the primary vector space.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorSpace {
    Model(TfIdfModel),
    Degenerate(Degeneracy),
}

impl VectorSpace {
    /// Fit TF-IDF weights over `texts`.
    ///
    /// Terms are kept when their document frequency `df` satisfies
    /// `df >= 2` and `df <= 0.85 * n`. Weights are raw counts times the
    /// smoothed idf `ln((1 + n) / (1 + df)) + 1`, and each row is
    /// L2-normalised.
    pub fn build<S: AsRef<str>>(texts: &[S], resources: &LanguageResources) -> Self {
        let documents: Vec<Vec<String>> = texts
            .iter()
            .map(|t| ngram_terms(t.as_ref(), resources))
            .collect();

        if documents.iter().all(Vec::is_empty) {
            return Self::Degenerate(Degeneracy::NoTerms);
        }

        let n = documents.len();
        let max_doc_count = MAX_DOCUMENT_RATIO * n as f64;
        if max_doc_count < MIN_DOCUMENT_FREQUENCY as f64 {
            return Self::Degenerate(Degeneracy::DocumentFrequencyBounds);
        }

        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for terms in &documents {
            let distinct: HashSet<&str> = terms.iter().map(String::as_str).collect();
            for term in distinct {
                *document_frequency.entry(term).or_default() += 1;
            }
        }

        let kept: BTreeMap<&str, usize> = document_frequency
            .into_iter()
            .filter(|&(_, df)| df >= MIN_DOCUMENT_FREQUENCY && df as f64 <= max_doc_count)
            .collect();

        if kept.is_empty() {
            return Self::Degenerate(Degeneracy::EmptyVocabulary);
        }

        let vocabulary: BTreeMap<String, usize> = kept
            .keys()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        let idf: Vec<f64> = kept
            .values()
            .map(|&df| ((1.0 + n as f64) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let vectors = documents
            .iter()
            .map(|terms| {
                let mut row = vec![0.0; vocabulary.len()];
                for term in terms {
                    if let Some(&idx) = vocabulary.get(term) {
                        row[idx] += idf[idx];
                    }
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        Self::Model(TfIdfModel {
            vocabulary,
            vectors,
        })
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > f64::EPSILON {
        for v in row.iter_mut() {
            *v /= norm;
        }
    }
}

/// Which measure produced a set of scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityMethod {
    Cosine,
    Jaccard,
}

/// Indices into the matcher's input with `index_a < index_b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPair {
    pub index_a: usize,
    pub index_b: usize,
    pub score: f64,
}

/// Finds statement pairs whose similarity meets the threshold (inclusive).
#[derive(Debug, Clone, Copy)]
pub struct SimilarityMatcher<'a> {
    resources: &'a LanguageResources,
    threshold: f64,
}

impl<'a> SimilarityMatcher<'a> {
    pub fn new(resources: &'a LanguageResources, threshold: f64) -> Self {
        Self {
            resources,
            threshold,
        }
    }

    pub fn with_default_threshold(resources: &'a LanguageResources) -> Self {
        Self::new(resources, DEFAULT_SIMILARITY_THRESHOLD)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// All pairs at or above the threshold, in `(index_a, index_b)` order.
    pub fn find_similar<S: AsRef<str>>(&self, statements: &[S]) -> Vec<ScoredPair> {
        self.find_similar_with_method(statements).1
    }

    /// Like [`find_similar`](Self::find_similar), also reporting which
    /// measure was used.
    pub fn find_similar_with_method<S: AsRef<str>>(
        &self,
        statements: &[S],
    ) -> (SimilarityMethod, Vec<ScoredPair>) {
        if statements.len() < 2 {
            return (SimilarityMethod::Cosine, Vec::new());
        }

        match VectorSpace::build(statements, self.resources) {
            VectorSpace::Model(model) => {
                debug!(
                    statements = statements.len(),
                    vocabulary = model.vocabulary_len(),
                    "Scoring pairs with TF-IDF cosine similarity"
                );
                (SimilarityMethod::Cosine, self.cosine_pairs(&model))
            }
            VectorSpace::Degenerate(reason) => {
                warn!(
                    statements = statements.len(),
                    "TF-IDF vectorization failed ({}), using word-overlap similarity",
                    reason
                );
                (SimilarityMethod::Jaccard, self.jaccard_pairs(statements))
            }
        }
    }

    /// Threshold-filtered cosine scores over every pair of a fitted model.
    pub fn cosine_pairs(&self, model: &TfIdfModel) -> Vec<ScoredPair> {
        let mut pairs = Vec::new();
        for i in 0..model.len() {
            for j in (i + 1)..model.len() {
                let score = model.similarity(i, j);
                if score >= self.threshold {
                    pairs.push(ScoredPair {
                        index_a: i,
                        index_b: j,
                        score,
                    });
                }
            }
        }
        pairs
    }

    /// Threshold-filtered Jaccard scores over content-word sets. Pairs where
    /// either side has no content words are skipped.
    pub fn jaccard_pairs<S: AsRef<str>>(&self, statements: &[S]) -> Vec<ScoredPair> {
        let word_sets: Vec<HashSet<String>> = statements
            .iter()
            .map(|s| content_word_set(s.as_ref(), self.resources))
            .collect();

        let mut pairs = Vec::new();
        for i in 0..word_sets.len() {
            for j in (i + 1)..word_sets.len() {
                let Some(score) = jaccard_similarity(&word_sets[i], &word_sets[j]) else {
                    continue;
                };
                if score >= self.threshold {
                    pairs.push(ScoredPair {
                        index_a: i,
                        index_b: j,
                        score,
                    });
                }
            }
        }
        pairs
    }

    /// Matched pairs as statement references rather than indices.
    pub fn matched_pairs<'s>(&self, statements: &[&'s Statement]) -> Vec<MatchedPair<'s>> {
        self.find_similar(statements)
            .into_iter()
            .map(|pair| {
                MatchedPair::new(
                    statements[pair.index_a],
                    statements[pair.index_b],
                    pair.score,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::Language;

    fn english() -> LanguageResources {
        LanguageResources::for_language(Language::English)
    }

    #[test]
    fn test_fewer_than_two_statements() {
        let resources = english();
        let matcher = SimilarityMatcher::with_default_threshold(&resources);
        assert_eq!(matcher.threshold(), DEFAULT_SIMILARITY_THRESHOLD);
        assert!(matcher.find_similar::<&str>(&[]).is_empty());
        assert!(matcher.find_similar(&["I was at home all day."]).is_empty());
    }

    #[test]
    fn test_two_statements_are_degenerate() {
        let resources = english();
        let space = VectorSpace::build(
            &["I was at home all day.", "I was not at home all day."],
            &resources,
        );
        assert_eq!(space, VectorSpace::Degenerate(Degeneracy::DocumentFrequencyBounds));
    }

    #[test]
    fn test_stop_words_only_is_degenerate() {
        let resources = english();
        let space = VectorSpace::build(&["I was there.", "It is what it is.", "We are."], &resources);
        assert_eq!(space, VectorSpace::Degenerate(Degeneracy::NoTerms));
    }

    #[test]
    fn test_unshared_terms_give_empty_vocabulary() {
        let resources = english();
        let space = VectorSpace::build(
            &["Apples grow slowly.", "Bridges rust quickly.", "Cats sleep often."],
            &resources,
        );
        assert_eq!(space, VectorSpace::Degenerate(Degeneracy::EmptyVocabulary));
    }

    #[test]
    fn test_vocabulary_pruning() {
        let resources = english();
        let space = VectorSpace::build(
            &[
                "red car parked outside",
                "red car parked inside",
                "blue truck parked outside",
                "green bike stolen yesterday",
            ],
            &resources,
        );
        let VectorSpace::Model(model) = space else {
            panic!("expected a fitted model");
        };
        // df("red") = 2 kept; df("parked") = 3 <= 3.4 kept; df("green") = 1 pruned
        assert!(model.contains_term("red"));
        assert!(model.contains_term("red car"));
        assert!(model.contains_term("parked"));
        assert!(!model.contains_term("green"));
        assert_eq!(model.len(), 4);
    }

    #[test]
    fn test_cosine_scores_identical_rows() {
        let resources = english();
        let VectorSpace::Model(model) = VectorSpace::build(
            &[
                "red car parked outside",
                "red car parked outside",
                "green bike stolen yesterday",
            ],
            &resources,
        ) else {
            panic!("expected a fitted model");
        };
        assert!((model.similarity(0, 1) - 1.0).abs() < 1e-9);
        // No kept terms in row 2: zero vector
        assert_eq!(model.similarity(0, 2), 0.0);
    }

    #[test]
    fn test_primary_path_reports_pairs_above_threshold() {
        let resources = english();
        let matcher = SimilarityMatcher::with_default_threshold(&resources);
        let statements = [
            "The red car parked outside the bank.",
            "A red car parked outside the bank.",
            "Somebody stole a green bike yesterday.",
        ];
        let (method, pairs) = matcher.find_similar_with_method(&statements);
        assert_eq!(method, SimilarityMethod::Cosine);
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].index_a, pairs[0].index_b), (0, 1));
        assert!(pairs[0].score >= 0.7 && pairs[0].score <= 1.0);
    }

    #[test]
    fn test_fallback_matches_standalone_jaccard() {
        let resources = english();
        let matcher = SimilarityMatcher::with_default_threshold(&resources);
        let statements = ["I was at home all day.", "I was not at home all day."];

        let (method, pairs) = matcher.find_similar_with_method(&statements);
        assert_eq!(method, SimilarityMethod::Jaccard);
        assert_eq!(pairs, matcher.jaccard_pairs(&statements));
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].score, 1.0);
    }

    #[test]
    fn test_jaccard_skips_empty_word_sets() {
        let resources = english();
        let matcher = SimilarityMatcher::new(&resources, 0.0);
        let pairs = matcher.jaccard_pairs(&["I was there.", "I was there."]);
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let resources = english();
        let statements = ["I saw him at the store.", "I saw him near the store today."];
        // content words: {saw, store} vs {saw, near, store, today} -> 2/4
        let matcher = SimilarityMatcher::new(&resources, 0.5);
        assert_eq!(matcher.threshold(), 0.5);
        let pairs = matcher.jaccard_pairs(&statements);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].score, 0.5);

        let stricter = SimilarityMatcher::new(&resources, 0.51);
        assert!(stricter.jaccard_pairs(&statements).is_empty());
    }

    #[test]
    fn test_matched_pairs_carry_statements() {
        use crate::models::Segment;

        let resources = english();
        let matcher = SimilarityMatcher::with_default_threshold(&resources);
        let segment = Segment::new("unused", 0.0, 1.0);
        let a = Statement::from_segment("I was at home all day.", &segment).attributed_to("i1");
        let b = Statement::from_segment("I was not at home all day.", &segment)
            .attributed_to("i2");

        let pairs = matcher.matched_pairs(&[&a, &b]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].statement_a, &a);
        assert_eq!(pairs[0].statement_b, &b);
        assert!(pairs[0].spans_interviews());
    }
}
