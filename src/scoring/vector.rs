// file: src/scoring/vector.rs
// description: sparse tf-idf vectors over a shared vocabulary and cosine similarity
// reference: classical vector-space retrieval

use std::collections::BTreeMap;

/// Term weights keyed by term. Terms with zero weight are not stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: BTreeMap<String, f64>,
}

impl TermVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, term: impl Into<String>, weight: f64) {
        if weight != 0.0 {
            self.weights.insert(term.into(), weight);
        }
    }

    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Cosine similarity. Zero when either vector is zero or they share no term.
    pub fn cosine(&self, other: &TermVector) -> f64 {
        let mut shared = false;
        let mut dot = 0.0;
        for (term, weight) in &self.weights {
            if let Some(other_weight) = other.weights.get(term) {
                shared = true;
                dot += weight * other_weight;
            }
        }

        if !shared {
            return 0.0;
        }

        let norms = self.norm() * other.norm();
        if norms == 0.0 { 0.0 } else { dot / norms }
    }
}

impl FromIterator<(String, f64)> for TermVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut vector = TermVector::new();
        for (term, weight) in iter {
            vector.insert(term, weight);
        }
        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn vector(pairs: &[(&str, f64)]) -> TermVector {
        pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect()
    }

    #[test]
    fn test_zero_weights_not_stored() {
        let v = vector(&[("a", 0.0), ("b", 0.5)]);
        assert_eq!(v.len(), 1);
        assert_eq!(v.weight("a"), 0.0);
    }

    #[test]
    fn test_disjoint_vectors_score_zero() {
        let a = vector(&[("alpha", 1.0)]);
        let b = vector(&[("beta", 1.0)]);
        assert_eq!(a.cosine(&b), 0.0);
        assert_eq!(a.cosine(&TermVector::new()), 0.0);
        assert_eq!(TermVector::new().cosine(&TermVector::new()), 0.0);
    }

    #[test]
    fn test_known_cosine() {
        let a = vector(&[("x", 1.0), ("y", 1.0)]);
        let b = vector(&[("x", 1.0)]);
        assert!((a.cosine(&b) - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    fn weights() -> impl Strategy<Value = Vec<(String, f64)>> {
        prop::collection::vec(("[a-e]{3}", 0.001f64..5.0), 1..8)
    }

    proptest! {
        #[test]
        fn prop_self_similarity_is_one(pairs in weights()) {
            let v: TermVector = pairs.into_iter().collect();
            prop_assert!((v.cosine(&v) - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_cosine_symmetric_and_bounded(a in weights(), b in weights()) {
            let a: TermVector = a.into_iter().collect();
            let b: TermVector = b.into_iter().collect();
            let ab = a.cosine(&b);
            prop_assert_eq!(ab, b.cosine(&a));
            prop_assert!((0.0..=1.0 + 1e-9).contains(&ab));
        }
    }
}
