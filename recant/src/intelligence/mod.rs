pub mod contradiction;
pub mod extractor;
pub mod similarity;
pub mod utils;

pub use contradiction::ContradictionClassifier;
pub use extractor::StatementExtractor;
pub use similarity::{
    Degeneracy, ScoredPair, SimilarityMatcher, SimilarityMethod, TfIdfModel, VectorSpace,
};
