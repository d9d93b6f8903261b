// file: src/scoring/mod.rs
// description: tf-idf scoring module exports
// reference: internal module structure

pub mod index;
pub mod tokenizer;
pub mod vector;

pub use index::{Corpus, TermIndex};
pub use tokenizer::tokenize;
pub use vector::TermVector;
