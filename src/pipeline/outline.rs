// file: src/pipeline/outline.rs
// description: batch outline extraction over an input directory of span dumps
// reference: sequential per-document processing with placeholder output on failure

use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::exporter::JsonExporter;
use crate::extractor::OutlineBuilder;
use crate::models::OutlineRecord;
use crate::pipeline::progress::{NoopObserver, PipelineObserver, PipelineStats};
use crate::repository::{DocumentProvider, FileScanner, JsonSpanProvider, document_name};
use crate::utils::{OperationTimer, SchemaValidator};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const SLOW_DOCUMENT: Duration = Duration::from_secs(10);

pub struct OutlinePipeline {
    provider: Arc<dyn DocumentProvider>,
    builder: OutlineBuilder,
    scanner: FileScanner,
    schema: Option<SchemaValidator>,
    observer: Arc<dyn PipelineObserver>,
}

impl OutlinePipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            provider: Arc::new(JsonSpanProvider::new()),
            builder: OutlineBuilder::new(&config.outline),
            scanner: FileScanner::default(),
            schema: load_schema(config.paths.schema_path.as_deref()),
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Number of documents a run over `input_dir` would visit.
    pub fn count_inputs(&self, input_dir: &Path) -> Result<usize> {
        Ok(self.scanner.scan_directory(input_dir)?.len())
    }

    /// Writes one `<stem>.json` outline per input document. A document that
    /// cannot be read still gets a placeholder record.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<PipelineStats> {
        if input_dir == output_dir {
            return Err(PipelineError::Config(
                "input and output directories must differ".to_string(),
            ));
        }

        let timer = OperationTimer::new("Outline extraction");
        let files = self.scanner.scan_directory(input_dir)?;
        let mut stats = PipelineStats::new();

        if files.is_empty() {
            warn!("No span dumps found in {}", input_dir.display());
            return Ok(stats);
        }

        let exporter = JsonExporter::new(output_dir)?;

        for file in &files {
            let name = document_name(&file.path);
            let doc_timer = OperationTimer::quiet(&name);
            self.observer.document_started(&name);

            let record = match self.outline_file(&file.path) {
                Ok(record) => {
                    stats.documents_processed += 1;
                    stats.headings_found += record.outline.len();
                    self.observer.headings_found(record.outline.len());
                    self.observer.document_finished(&name);
                    record
                }
                Err(e) => {
                    warn!("Failed to read {}: {}", name, e);
                    stats.documents_failed += 1;
                    self.observer.document_failed(&name, &e.to_string());
                    OutlineRecord::unreadable(&name)
                }
            };

            self.check_schema(&name, &record);
            let written = exporter.write_outline(&file.stem(), &record)?;
            doc_timer.warn_if_slow(SLOW_DOCUMENT, "outline extraction");
            info!(
                "Processed {} -> {} ({} headings, {:.2}s)",
                name,
                written.display(),
                record.outline.len(),
                doc_timer.elapsed().as_secs_f64()
            );
        }

        stats.duration_secs = timer.finish_with_count(files.len(), "documents").as_secs_f64();
        Ok(stats)
    }

    pub fn outline_file(&self, path: &Path) -> Result<OutlineRecord> {
        let document = self.provider.load(path)?;
        Ok(self.builder.build(&document))
    }

    /// Builds the outline of a single document and saves it as
    /// `<stem>_output.json` in `output_dir`. An unreadable document is saved
    /// as the same placeholder a batch run writes.
    pub fn inspect(&self, path: &Path, output_dir: &Path) -> Result<(OutlineRecord, PathBuf)> {
        let name = document_name(path);
        let record = self.outline_file(path).unwrap_or_else(|e| {
            warn!("Failed to read {}: {}", name, e);
            OutlineRecord::unreadable(&name)
        });
        self.check_schema(&name, &record);

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| name.clone());
        let written = JsonExporter::new(output_dir)?.write_outline(&format!("{}_output", stem), &record)?;
        Ok((record, written))
    }

    fn check_schema(&self, name: &str, record: &OutlineRecord) {
        let Some(schema) = &self.schema else {
            return;
        };

        match schema.check(record) {
            Ok(errors) if errors.is_empty() => {}
            Ok(errors) => {
                for error in errors {
                    warn!("Schema mismatch in outline for {}: {}", name, error);
                }
            }
            Err(e) => warn!("Could not check outline for {}: {}", name, e),
        }
    }
}

/// Schema file from config, else the built-in outline schema. A configured
/// file that cannot be loaded disables checking.
fn load_schema(path: Option<&Path>) -> Option<SchemaValidator> {
    let loaded = match path {
        Some(path) => SchemaValidator::from_file(path),
        None => SchemaValidator::outline(),
    };

    match loaded {
        Ok(schema) => Some(schema),
        Err(e) => {
            warn!("Outline schema unavailable, skipping validation: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HeadingLevel;
    use crate::pipeline::progress::ProgressTracker;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const GUIDE: &str = r#"{
        "metadata": {"title": "Field Guide"},
        "pages": [
            {"lines": [
                {"spans": [{"text": "Introduction", "size": 30.0, "flags": 16}]},
                {"spans": [{"text": "Plain body text for the guide.", "size": 12.0}]}
            ]},
            {"lines": [
                {"spans": [{"text": "1. Getting Started", "size": 12.0}]},
                {"spans": [{"text": "More body text.", "size": 12.0}]}
            ]}
        ]
    }"#;

    fn setup() -> (TempDir, PathBuf, PathBuf) {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("input");
        let output = temp.path().join("output");
        fs::create_dir(&input).unwrap();
        (temp, input, output)
    }

    #[test]
    fn test_batch_writes_outline_and_placeholder() {
        let (_temp, input, output) = setup();
        fs::write(input.join("guide.json"), GUIDE).unwrap();
        fs::write(input.join("broken.json"), "{ not json").unwrap();

        let tracker = Arc::new(ProgressTracker::hidden(2));
        let pipeline = OutlinePipeline::new(&Config::default_config()).with_observer(tracker.clone());
        let stats = pipeline.run(&input, &output).unwrap();

        assert_eq!(stats.documents_processed, 1);
        assert_eq!(stats.documents_failed, 1);
        assert_eq!(tracker.get_stats().documents_failed, 1);

        let guide: OutlineRecord =
            serde_json::from_str(&fs::read_to_string(output.join("guide.json")).unwrap()).unwrap();
        assert_eq!(guide.title, "Field Guide");
        assert_eq!(guide.outline[0].text, "Introduction");
        assert_eq!(guide.outline[0].level, HeadingLevel::H1);
        assert_eq!(guide.outline[1].text, "1. Getting Started");
        assert_eq!(guide.outline[1].page, 2);
        assert_eq!(stats.headings_found, guide.outline.len());

        let broken: OutlineRecord =
            serde_json::from_str(&fs::read_to_string(output.join("broken.json")).unwrap()).unwrap();
        assert_eq!(broken, OutlineRecord::unreadable("broken.json"));
    }

    #[test]
    fn test_empty_input_dir_writes_nothing() {
        let (_temp, input, output) = setup();
        let stats = OutlinePipeline::new(&Config::default_config())
            .run(&input, &output)
            .unwrap();

        assert_eq!(stats.total_documents(), 0);
        assert!(!output.exists());
    }

    #[test]
    fn test_same_directories_rejected() {
        let (_temp, input, _output) = setup();
        let result = OutlinePipeline::new(&Config::default_config()).run(&input, &input);
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_schema_mismatch_does_not_block_output() {
        let (temp, input, output) = setup();
        fs::write(input.join("guide.json"), GUIDE).unwrap();
        let schema_path = temp.path().join("schema.json");
        fs::write(&schema_path, r#"{"required": ["summary"]}"#).unwrap();

        let mut config = Config::default_config();
        config.paths.schema_path = Some(schema_path);
        let stats = OutlinePipeline::new(&config).run(&input, &output).unwrap();

        assert_eq!(stats.documents_processed, 1);
        assert!(output.join("guide.json").exists());
    }

    #[test]
    fn test_inspect_saves_output_copy() {
        let (temp, input, _output) = setup();
        let path = input.join("guide.json");
        fs::write(&path, GUIDE).unwrap();

        let (record, written) = OutlinePipeline::new(&Config::default_config())
            .inspect(&path, temp.path())
            .unwrap();

        assert_eq!(written, temp.path().join("guide_output.json"));
        assert_eq!(record.title, "Field Guide");
        assert!(written.exists());
    }

    #[test]
    fn test_inspect_unreadable_document_saves_placeholder() {
        let (temp, input, _output) = setup();
        let path = input.join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let (record, written) = OutlinePipeline::new(&Config::default_config())
            .inspect(&path, temp.path())
            .unwrap();

        assert_eq!(record, OutlineRecord::unreadable("broken.json"));
        assert_eq!(written, temp.path().join("broken_output.json"));
        let saved: OutlineRecord =
            serde_json::from_str(&fs::read_to_string(&written).unwrap()).unwrap();
        assert_eq!(saved, record);
    }
}
