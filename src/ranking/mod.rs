// file: src/ranking/mod.rs
// description: relevance ranking module exports
// reference: internal module structure

pub mod ranker;

pub use ranker::{RankedDocument, RelevanceRanker};
