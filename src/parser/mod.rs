// file: src/parser/mod.rs
// description: document segmentation module exports
// reference: internal module structure

pub mod segmenter;

pub use segmenter::{LineEvent, SectionSegmenter, SegmenterState};
