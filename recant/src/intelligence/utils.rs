use std::collections::HashSet;
use std::hash::Hash;

/// Jaccard similarity |A ∩ B| / |A ∪ B|.
///
/// Returns `None` when either set is empty, where the ratio carries no
/// information about the pair.
pub fn jaccard_similarity<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    Some(intersection as f64 / union as f64)
}

/// Cosine similarity between two dense vectors, clamped to [0, 1].
/// Zero vectors score 0.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a <= f64::EPSILON || norm_b <= f64::EPSILON {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
