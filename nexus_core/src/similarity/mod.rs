//! Similarity between two text bodies.
//!
//! The default measure is a crude bag-of-words overlap:
//! 1. **Normalize**: lowercase both texts
//! 2. **Tokenize**: split on whitespace
//! 3. **Overlap**: count tokens of the first text present anywhere in the second
//! 4. **Scale**: divide by the longer token count
//!
//! Tokens of the first text keep their multiplicity while the second text is
//! only tested for membership, so the measure is directional:
//! `similarity(a, b)` and `similarity(b, a)` can differ. Callers fix an order.

use std::collections::HashSet;

use crate::text::tokens;

/// A similarity measure over free text, returning a score in `[0, 1]`.
pub trait SimilarityMeasure {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Bag-of-words overlap measure.
#[derive(Debug, Clone, Copy, Default)]
pub struct BagOfWords;

impl SimilarityMeasure for BagOfWords {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let tokens_a = tokens(a);
        let tokens_b = tokens(b);

        let longest = tokens_a.len().max(tokens_b.len());
        if longest == 0 {
            return 0.0;
        }

        let vocabulary: HashSet<&str> = tokens_b.iter().map(String::as_str).collect();
        let shared = tokens_a
            .iter()
            .filter(|token| vocabulary.contains(token.as_str()))
            .count();

        shared as f64 / longest as f64
    }
}

/// [`BagOfWords`] similarity of `a` against `b`.
pub fn similarity(a: &str, b: &str) -> f64 {
    BagOfWords.similarity(a, b)
}
