// file: src/models/ranking.rs
// description: scored sections and the ranking record written per collection
// reference: Used for relevance ranking results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A section with its similarity to the persona query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSection {
    pub document: String,
    pub section_title: String,
    pub page_number: u32,
    pub relevance_score: f64,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedSection {
    pub document: String,
    pub section_title: String,
    pub importance_rank: usize,
    pub page_number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RefinedSubsection {
    pub document: String,
    pub refined_text: String,
    pub page_number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RankingMetadata {
    pub input_documents: Vec<String>,
    pub persona: String,
    pub job_to_be_done: String,
    pub processing_timestamp: String,
}

impl RankingMetadata {
    pub fn new(input_documents: Vec<String>, persona: String, job_to_be_done: String) -> Self {
        Self {
            input_documents,
            persona,
            job_to_be_done,
            processing_timestamp: chrono::Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
        }
    }
}

/// Ranker output before metadata is attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    pub extracted_sections: Vec<ExtractedSection>,
    pub subsection_analysis: Vec<RefinedSubsection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RankingRecord {
    pub metadata: RankingMetadata,
    pub extracted_sections: Vec<ExtractedSection>,
    pub subsection_analysis: Vec<RefinedSubsection>,
}

impl RankingRecord {
    pub fn new(metadata: RankingMetadata, ranking: Ranking) -> Self {
        Self {
            metadata,
            extracted_sections: ranking.extracted_sections,
            subsection_analysis: ranking.subsection_analysis,
        }
    }
}
