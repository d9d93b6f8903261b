// file: src/repository/provider.rs
// description: document provider seam and the json span-dump implementation
// reference: https://docs.rs/serde_json

use crate::error::{PipelineError, Result};
use crate::models::SourceDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// Supplies page/line/span content for a document.
pub trait DocumentProvider: Send + Sync {
    /// Path of the readable form of `filename` inside `dir`.
    fn resolve(&self, dir: &Path, filename: &str) -> PathBuf;

    fn load(&self, path: &Path) -> Result<SourceDocument>;
}

/// Reads span dumps written by an upstream text extractor, one JSON file per
/// document. A listed `report.pdf` is read from `report.json`.
#[derive(Debug, Clone, Default)]
pub struct JsonSpanProvider;

impl JsonSpanProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentProvider for JsonSpanProvider {
    fn resolve(&self, dir: &Path, filename: &str) -> PathBuf {
        dir.join(Path::new(filename).with_extension("json"))
    }

    fn load(&self, path: &Path) -> Result<SourceDocument> {
        let raw = fs::read_to_string(path).map_err(|source| PipelineError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|e| PipelineError::DocumentRead {
            name: document_name(path),
            message: e.to_string(),
        })
    }
}

/// File name used in error titles and logs.
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_swaps_extension() {
        let provider = JsonSpanProvider::new();
        assert_eq!(
            provider.resolve(Path::new("docs"), "guide.pdf"),
            PathBuf::from("docs/guide.json")
        );
        assert_eq!(
            provider.resolve(Path::new("docs"), "dump.json"),
            PathBuf::from("docs/dump.json")
        );
    }

    #[test]
    fn test_load_span_dump() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.json");
        fs::write(
            &path,
            r#"{
                "metadata": {"title": "Guide"},
                "pages": [
                    {"lines": [{"spans": [{"text": "Intro", "size": 18.0, "flags": 16}]}]}
                ]
            }"#,
        )
        .unwrap();

        let doc = JsonSpanProvider::new().load(&path).unwrap();
        assert_eq!(doc.metadata.title.as_deref(), Some("Guide"));
        assert!(doc.pages[0].lines[0].spans[0].is_bold);
    }

    #[test]
    fn test_load_errors() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.json");
        assert!(matches!(
            JsonSpanProvider::new().load(&missing),
            Err(PipelineError::FileOperation { .. })
        ));

        let broken = temp.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        match JsonSpanProvider::new().load(&broken) {
            Err(PipelineError::DocumentRead { name, .. }) => assert_eq!(name, "broken.json"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
