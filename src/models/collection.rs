// file: src/models/collection.rs
// description: persona and task configuration for a document collection
// reference: collection input files (persona, job_to_be_done, documents)

use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobToBeDone {
    pub task: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRef {
    pub filename: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_info: Option<serde_json::Value>,
    pub documents: Vec<DocumentRef>,
    pub persona: Persona,
    pub job_to_be_done: JobToBeDone,
}

impl CollectionInput {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| PipelineError::InvalidInput(e.to_string()))
    }

    pub fn query_text(&self) -> String {
        format!("{} {}", self.persona.role, self.job_to_be_done.task)
    }

    pub fn filenames(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.filename.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collection_input() {
        let raw = r#"{
            "challenge_info": {"challenge_id": "round_1b_002"},
            "documents": [{"filename": "a.pdf", "title": "A"}, {"filename": "b.pdf"}],
            "persona": {"role": "Travel Planner"},
            "job_to_be_done": {"task": "Plan a trip"}
        }"#;

        let input = CollectionInput::from_json(raw).unwrap();
        assert_eq!(input.filenames(), vec!["a.pdf", "b.pdf"]);
        assert_eq!(input.query_text(), "Travel Planner Plan a trip");
        assert!(input.documents[1].title.is_none());
    }

    #[test]
    fn test_missing_persona_is_invalid() {
        let raw = r#"{"documents": [], "job_to_be_done": {"task": "x"}}"#;
        assert!(matches!(
            CollectionInput::from_json(raw),
            Err(PipelineError::InvalidInput(_))
        ));
    }
}
