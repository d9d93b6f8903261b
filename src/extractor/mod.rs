// file: src/extractor/mod.rs
// description: heading and outline extraction module exports
// reference: internal module structure

pub mod font_stats;
pub mod heading;
pub mod outline;
pub mod patterns;
pub mod title;

pub use font_stats::FontStatistics;
pub use heading::HeadingClassifier;
pub use outline::OutlineBuilder;
pub use title::TitleDetector;
