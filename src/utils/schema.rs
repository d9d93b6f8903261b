// file: src/utils/schema.rs
// description: advisory json schema checks for outline and ranking records
// reference: https://docs.rs/jsonschema, https://docs.rs/schemars

use crate::error::{PipelineError, Result};
use crate::models::{OutlineRecord, RankingRecord};
use jsonschema::Validator as CompiledSchema;
use schemars::{JsonSchema, schema_for};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// A compiled JSON schema together with its source document.
pub struct SchemaValidator {
    schema: Value,
    compiled: CompiledSchema,
}

impl SchemaValidator {
    pub fn new(schema: Value) -> Result<Self> {
        let compiled = jsonschema::validator_for(&schema)
            .map_err(|e| PipelineError::Validation(format!("Invalid schema: {}", e)))?;
        Ok(Self { schema, compiled })
    }

    pub fn outline() -> Result<Self> {
        Self::generated::<OutlineRecord>()
    }

    pub fn ranking() -> Result<Self> {
        Self::generated::<RankingRecord>()
    }

    fn generated<T: JsonSchema>() -> Result<Self> {
        Self::new(serde_json::to_value(schema_for!(T))?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| PipelineError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let schema: Value = serde_json::from_str(&raw).map_err(|e| {
            PipelineError::Validation(format!("Invalid schema {}: {}", path.display(), e))
        })?;

        Self::new(schema)
    }

    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Every violation found in `instance`. Empty when it conforms.
    pub fn validate(&self, instance: &Value) -> Vec<String> {
        self.compiled
            .iter_errors(instance)
            .map(|error| error.to_string())
            .collect()
    }

    pub fn check<T: Serialize>(&self, record: &T) -> Result<Vec<String>> {
        let value = serde_json::to_value(record)?;
        Ok(self.validate(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HeadingLevel, HeadingRecord, Ranking, RankingMetadata};
    use serde_json::json;
    use tempfile::TempDir;

    fn outline() -> OutlineRecord {
        OutlineRecord {
            title: "Guide".to_string(),
            outline: vec![HeadingRecord {
                level: HeadingLevel::H2,
                text: "Overview".to_string(),
                page: 3,
            }],
        }
    }

    #[test]
    fn test_generated_outline_schema_accepts_records() {
        let validator = SchemaValidator::outline().unwrap();
        assert!(validator.check(&outline()).unwrap().is_empty());
        assert!(validator.check(&OutlineRecord::unreadable("x.json")).unwrap().is_empty());
    }

    #[test]
    fn test_generated_outline_schema_rejects_bad_level() {
        let validator = SchemaValidator::outline().unwrap();
        let bad = json!({
            "title": "Guide",
            "outline": [{"level": "H4", "text": "Overview", "page": 1}]
        });

        let errors = validator.validate(&bad);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("H4"));
    }

    #[test]
    fn test_missing_and_mistyped_fields() {
        let validator = SchemaValidator::outline().unwrap();
        let bad = json!({"outline": [{"level": "H1", "text": 5, "page": "one"}]});

        let errors = validator.validate(&bad);
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("title")));
    }

    #[test]
    fn test_full_keyword_set_is_enforced() {
        let validator = SchemaValidator::new(json!({
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "title": {"type": "string", "minLength": 50, "pattern": "^X"},
                "outline": {"type": "array", "minItems": 1}
            }
        }))
        .unwrap();

        let errors = validator.validate(&json!({"title": "Guide", "outline": [], "extra": 1}));
        assert_eq!(errors.len(), 4);
        assert!(validator
            .validate(&json!({"title": format!("X{}", "y".repeat(60)), "outline": [1]}))
            .is_empty());
    }

    #[test]
    fn test_composition_keywords() {
        let validator = SchemaValidator::new(json!({
            "oneOf": [{"const": 1}, {"type": "string"}],
            "not": {"const": "forbidden"}
        }))
        .unwrap();

        assert!(validator.validate(&json!(1)).is_empty());
        assert!(validator.validate(&json!("fine")).is_empty());
        assert!(!validator.validate(&json!(2)).is_empty());
        assert!(!validator.validate(&json!("forbidden")).is_empty());
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let result = SchemaValidator::new(json!({"type": 12}));
        assert!(matches!(result, Err(PipelineError::Validation(_))));
    }

    #[test]
    fn test_ranking_schema_accepts_empty_ranking() {
        let record = RankingRecord::new(
            RankingMetadata::new(vec![], "role".to_string(), "task".to_string()),
            Ranking::default(),
        );
        let validator = SchemaValidator::ranking().unwrap();
        assert!(validator.check(&record).unwrap().is_empty());
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("schema.json");
        fs::write(&path, r#"{"type": "object", "required": ["title"]}"#).unwrap();

        let validator = SchemaValidator::from_file(&path).unwrap();
        assert!(validator.check(&outline()).unwrap().is_empty());
        assert_eq!(validator.validate(&json!({})).len(), 1);

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            SchemaValidator::from_file(&path),
            Err(PipelineError::Validation(_))
        ));
    }
}
