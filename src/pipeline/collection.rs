// file: src/pipeline/collection.rs
// description: persona-driven ranking run over one collection directory or a root of them
// reference: concurrent blocking segmentation with ordered collection before the index build

use crate::config::{Config, RankingConfig};
use crate::error::{PipelineError, Result};
use crate::exporter::JsonExporter;
use crate::models::{CollectionInput, RankingMetadata, RankingRecord, SegmentedDocument};
use crate::parser::SectionSegmenter;
use crate::pipeline::progress::{NoopObserver, PipelineObserver};
use crate::ranking::{RankedDocument, RelevanceRanker};
use crate::repository::{DocumentProvider, FileScanner, JsonSpanProvider};
use crate::utils::{OperationTimer, Validator};
use crate::utils::logging::format_step;
use futures::stream::{self, StreamExt};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// How long a runtime owner should wait for abandoned segmentation work
/// when shutting down.
pub const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// Result of ranking one collection.
#[derive(Debug, Clone)]
pub struct CollectionOutcome {
    pub output_path: PathBuf,
    pub record: RankingRecord,
    pub documents_read: usize,
    pub documents_failed: usize,
}

/// Per-collection results of a run over a root directory, in name order.
#[derive(Debug, Default)]
pub struct CollectionsSummary {
    pub completed: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

pub struct CollectionPipeline {
    provider: Arc<dyn DocumentProvider>,
    segmenter: Arc<SectionSegmenter>,
    ranker: RelevanceRanker,
    ranking: RankingConfig,
    workers: usize,
    timeout: Option<Duration>,
    observer: Arc<dyn PipelineObserver>,
}

enum Segmented {
    Read(SegmentedDocument),
    Failed(String),
}

impl CollectionPipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            provider: Arc::new(JsonSpanProvider::new()),
            segmenter: Arc::new(SectionSegmenter::new()),
            ranker: RelevanceRanker::new(config.ranking.clone()),
            ranking: config.ranking.clone(),
            workers: config.pipeline.parallel_workers.max(1),
            timeout: config.pipeline.document_timeout(),
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn DocumentProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn read_input(&self, collection_dir: &Path) -> Result<CollectionInput> {
        let input_path = collection_dir.join(&self.ranking.input_file);
        if !input_path.is_file() {
            return Err(PipelineError::Validation(format!(
                "Collection input not found: {}",
                input_path.display()
            )));
        }

        let raw = fs::read_to_string(&input_path).map_err(|source| PipelineError::FileOperation {
            path: input_path.clone(),
            source,
        })?;

        let input = CollectionInput::from_json(&raw)?;
        Validator::validate_collection_input(&input)?;
        Ok(input)
    }

    /// Ranks the sections of one collection and writes its output file.
    /// Nothing is written when the input file is missing or malformed.
    pub async fn run(&self, collection_dir: &Path) -> Result<CollectionOutcome> {
        let timer = OperationTimer::new(&format!("Ranking {}", collection_dir.display()));

        let input = self.read_input(collection_dir)?;
        let documents_dir = collection_dir.join(&self.ranking.documents_dir);
        Validator::validate_directory(&documents_dir)?;

        let jobs = self.resolve_documents(&input, &documents_dir);
        info!(
            "Segmenting {} of {} listed documents with {} workers",
            jobs.len(),
            input.documents.len(),
            self.workers
        );

        let documents = self.segment_all(jobs, &documents_dir).await;
        let documents_failed = documents.iter().filter(|(_, failed)| *failed).count();
        let documents: Vec<RankedDocument> = documents.into_iter().map(|(doc, _)| doc).collect();

        let documents_read = documents.len();
        let role = input.persona.role.clone();
        let task = input.job_to_be_done.task.clone();
        let ranker = self.ranker.clone();
        let ranking = tokio::task::spawn_blocking(move || ranker.rank(&role, &task, &documents))
            .await
            .map_err(|e| PipelineError::Task(e.to_string()))?;

        let metadata = RankingMetadata::new(
            input.filenames(),
            input.persona.role.clone(),
            input.job_to_be_done.task.clone(),
        );
        let record = RankingRecord::new(metadata, ranking);

        let output_path =
            JsonExporter::new(collection_dir)?.write_ranking(&self.ranking.output_file, &record)?;

        info!(
            "Wrote {} ranked sections and {} excerpts to {}",
            record.extracted_sections.len(),
            record.subsection_analysis.len(),
            output_path.display()
        );
        timer.finish_with_count(documents_read, "documents");

        Ok(CollectionOutcome {
            output_path,
            record,
            documents_read,
            documents_failed,
        })
    }

    /// Runs every collection under `root` in name order. A failing collection
    /// is logged and does not stop the others.
    pub async fn run_all(&self, root: &Path) -> Result<CollectionsSummary> {
        let collections = FileScanner::scan_collections(root, &self.ranking.collection_prefix)?;
        let mut summary = CollectionsSummary::default();

        if collections.is_empty() {
            warn!(
                "No directories starting with '{}' under {}",
                self.ranking.collection_prefix,
                root.display()
            );
            return Ok(summary);
        }

        let timer = OperationTimer::new("Collections run");
        let total = collections.len();
        for (idx, collection) in collections.into_iter().enumerate() {
            info!("{}", format_step(idx + 1, total, &collection.display().to_string()));
            match self.run(&collection).await {
                Ok(outcome) => summary.completed.push(outcome.output_path),
                Err(e) => {
                    error!("Skipping {}: {}", collection.display(), e);
                    summary.failed.push((collection, e.to_string()));
                }
            }
        }
        timer.finish();

        Ok(summary)
    }

    /// Listed documents whose readable form exists, in listing order.
    fn resolve_documents(
        &self,
        input: &CollectionInput,
        documents_dir: &Path,
    ) -> Vec<(String, PathBuf)> {
        input
            .documents
            .iter()
            .filter_map(|doc| {
                let path = self.provider.resolve(documents_dir, &doc.filename);
                if path.exists() {
                    Some((doc.filename.clone(), path))
                } else {
                    warn!("Document not found, skipping: {}", path.display());
                    None
                }
            })
            .collect()
    }

    /// Segments documents concurrently and returns them in input order,
    /// flagged when a placeholder stands in for an unreadable document.
    async fn segment_all(
        &self,
        jobs: Vec<(String, PathBuf)>,
        documents_dir: &Path,
    ) -> Vec<(RankedDocument, bool)> {
        stream::iter(jobs)
            .map(|(name, path)| self.segment_one(name, path, documents_dir.to_path_buf()))
            .buffered(self.workers)
            .collect()
            .await
    }

    /// A timeout only stops waiting. The blocking load keeps its thread until
    /// it returns, so runtimes driving this pipeline should shut down with
    /// `shutdown_timeout(SHUTDOWN_GRACE)` rather than wait on it.
    async fn segment_one(
        &self,
        name: String,
        path: PathBuf,
        documents_dir: PathBuf,
    ) -> (RankedDocument, bool) {
        self.observer.document_started(&name);

        let provider = self.provider.clone();
        let segmenter = self.segmenter.clone();
        let task = tokio::task::spawn_blocking(move || -> Result<SegmentedDocument> {
            Validator::validate_within_base_dir(&path, &documents_dir)?;
            let source = provider.load(&path)?;
            Ok(segmenter.segment(&source))
        });

        let outcome = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, task).await {
                Ok(joined) => flatten(joined),
                Err(_) => Segmented::Failed(format!("timed out after {:.1}s", limit.as_secs_f64())),
            },
            None => flatten(task.await),
        };

        match outcome {
            Segmented::Read(document) => {
                debug!("Segmented {} into {} sections", name, document.sections.len());
                self.observer.sections_found(document.sections.len());
                self.observer.document_finished(&name);
                (RankedDocument::new(name, document), false)
            }
            Segmented::Failed(reason) => {
                warn!("Failed to read {}: {}", name, reason);
                self.observer.document_failed(&name, &reason);
                let placeholder = SegmentedDocument::unreadable(&name);
                (RankedDocument::new(name, placeholder), true)
            }
        }
    }
}

fn flatten(
    joined: std::result::Result<Result<SegmentedDocument>, tokio::task::JoinError>,
) -> Segmented {
    match joined {
        Ok(Ok(document)) => Segmented::Read(document),
        Ok(Err(e)) => Segmented::Failed(e.to_string()),
        Err(e) => Segmented::Failed(PipelineError::Task(e.to_string()).to_string()),
    }
}
