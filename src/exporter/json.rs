// file: src/exporter/json.rs
// description: pretty-printed json output for outline and ranking records
// reference: https://docs.rs/serde_json

use crate::error::{PipelineError, Result};
use crate::models::{OutlineRecord, RankingRecord};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const OUTLINE_INDENT: &[u8] = b"  ";
pub const RANKING_INDENT: &[u8] = b"    ";

/// Writes records as UTF-8 JSON. Non-ASCII text is written as-is.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| PipelineError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `<stem>.json` in the output directory.
    pub fn write_outline(&self, stem: &str, record: &OutlineRecord) -> Result<PathBuf> {
        let path = self.output_dir.join(format!("{}.json", stem));
        write_json(&path, record, OUTLINE_INDENT)?;
        Ok(path)
    }

    pub fn write_ranking(&self, file_name: &str, record: &RankingRecord) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        write_json(&path, record, RANKING_INDENT)?;
        Ok(path)
    }
}

pub fn to_pretty_string<T: Serialize>(value: &T, indent: &[u8]) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent));
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|e| PipelineError::Serialization(e.to_string()))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T, indent: &[u8]) -> Result<()> {
    let body = to_pretty_string(value, indent)?;
    fs::write(path, body).map_err(|source| PipelineError::FileOperation {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {}", path.display());
    Ok(())
}
