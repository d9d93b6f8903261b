// file: src/scoring/index.rs
// description: corpus collection and the frozen inverse-document-frequency index
// reference: classical tf-idf weighting

use crate::scoring::tokenizer::tokenize;
use crate::scoring::vector::TermVector;
use std::collections::{BTreeMap, BTreeSet};

/// Passages collected for one ranking run. Consumed by [`Corpus::into_index`],
/// so nothing can be added once IDF values exist.
#[derive(Debug, Default)]
pub struct Corpus {
    passages: Vec<Vec<String>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, passage: &str) {
        self.passages.push(tokenize(passage));
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    pub fn into_index(self) -> TermIndex {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for passage in &self.passages {
            let unique: BTreeSet<&String> = passage.iter().collect();
            for term in unique {
                *document_frequency.entry(term.clone()).or_default() += 1;
            }
        }

        let total = self.passages.len() as f64;
        let idf = document_frequency
            .into_iter()
            .map(|(term, df)| (term, (total / (df as f64 + 1.0)).ln()))
            .collect();

        TermIndex {
            idf,
            passage_count: self.passages.len(),
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for passage in iter {
            corpus.push(passage.as_ref());
        }
        corpus
    }
}

/// Inverse document frequency per term, read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct TermIndex {
    idf: BTreeMap<String, f64>,
    passage_count: usize,
}

impl TermIndex {
    pub fn build<I, S>(passages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        passages.into_iter().collect::<Corpus>().into_index()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    pub fn passage_count(&self) -> usize {
        self.passage_count
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Term frequency times IDF for every indexed term in `text`. Terms
    /// outside the vocabulary weigh nothing.
    pub fn vectorize(&self, text: &str) -> TermVector {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return TermVector::new();
        }

        let total = tokens.len() as f64;
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for token in &tokens {
            *counts.entry(token.as_str()).or_default() += 1;
        }

        counts
            .into_iter()
            .filter_map(|(term, count)| {
                let idf = self.idf(term)?;
                Some((term.to_string(), (count as f64 / total) * idf))
            })
            .collect()
    }

    pub fn compare(&self, a: &TermVector, b: &TermVector) -> f64 {
        a.cosine(b)
    }
}
