// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod collection;
mod outline;
mod progress;

pub use collection::{CollectionOutcome, CollectionPipeline, CollectionsSummary, SHUTDOWN_GRACE};
pub use outline::OutlinePipeline;
pub use progress::{NoopObserver, PipelineObserver, PipelineStats, ProgressTracker};
