// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod ranking;
pub mod repository;
pub mod scoring;
pub mod utils;

pub use config::{Config, OutlineConfig, PathsConfig, PipelineConfig, RankingConfig};
pub use error::{PipelineError, Result};
pub use exporter::JsonExporter;
pub use extractor::{FontStatistics, HeadingClassifier, OutlineBuilder, TitleDetector};
pub use models::{
    CollectionInput, HeadingLevel, HeadingRecord, OutlineRecord, RankingRecord, Section,
    SegmentedDocument, SourceDocument,
};
pub use parser::SectionSegmenter;
pub use pipeline::{
    CollectionOutcome, CollectionPipeline, CollectionsSummary, NoopObserver, OutlinePipeline,
    PipelineObserver, PipelineStats, ProgressTracker, SHUTDOWN_GRACE,
};
pub use ranking::{RankedDocument, RelevanceRanker};
pub use repository::{DocumentProvider, FileScanner, JsonSpanProvider, ScannedFile};
pub use scoring::{Corpus, TermIndex, TermVector};
pub use utils::{OperationTimer, SchemaValidator, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _outline = OutlinePipeline::new(&config);
        let _ranking = CollectionPipeline::new(&config);
        assert_eq!(HeadingLevel::H2.to_string(), "H2");
    }
}
