// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub paths: PathsConfig,
    pub outline: OutlineConfig,
    pub ranking: RankingConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub schema_path: Option<PathBuf>,
    pub collections_root: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutlineConfig {
    pub sample_pages: usize,
    pub default_font_size: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankingConfig {
    pub top_sections: usize,
    pub refined_limit: usize,
    pub refined_min_score: f64,
    pub refined_max_chars: usize,
    pub input_file: String,
    pub output_file: String,
    pub documents_dir: String,
    pub collection_prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    pub parallel_workers: usize,
    #[serde(default)]
    pub document_timeout_secs: Option<u64>,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            sample_pages: 5,
            default_font_size: 12.0,
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_sections: 5,
            refined_limit: 5,
            refined_min_score: 0.1,
            refined_max_chars: 1000,
            input_file: "challenge1b_input.json".to_string(),
            output_file: "challenge1b_output.json".to_string(),
            documents_dir: "PDFs".to_string(),
            collection_prefix: "Collection".to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn document_timeout(&self) -> Option<Duration> {
        self.document_timeout_secs.map(Duration::from_secs)
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("OUTLINE_RANK")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            paths: PathsConfig {
                input_dir: PathBuf::from("./input"),
                output_dir: PathBuf::from("./output"),
                schema_path: None,
                collections_root: PathBuf::from("."),
            },
            outline: OutlineConfig::default(),
            ranking: RankingConfig::default(),
            pipeline: PipelineConfig {
                parallel_workers: 4,
                document_timeout_secs: None,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.pipeline.parallel_workers == 0 {
            return Err(PipelineError::Config(
                "parallel_workers must be greater than 0".to_string(),
            ));
        }

        if self.pipeline.document_timeout_secs == Some(0) {
            return Err(PipelineError::Config(
                "document_timeout_secs must be greater than 0 when set".to_string(),
            ));
        }

        if self.outline.sample_pages == 0 {
            return Err(PipelineError::Config(
                "sample_pages must be greater than 0".to_string(),
            ));
        }

        if self.outline.default_font_size <= 0.0 {
            return Err(PipelineError::Config(
                "default_font_size must be positive".to_string(),
            ));
        }

        if self.paths.input_dir == self.paths.output_dir {
            return Err(PipelineError::Config(
                "input_dir and output_dir must differ".to_string(),
            ));
        }

        Ok(())
    }
}
