// file: src/utils/validation.rs
// description: path and collection input checks run before any document is read
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use crate::models::CollectionInput;
use std::fs;
use std::path::{Component, Path};

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            PipelineError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(PipelineError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PipelineError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(PipelineError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// Listed document names must stay inside the collection's document folder.
    pub fn validate_document_filename(filename: &str) -> Result<()> {
        if filename.trim().is_empty() {
            return Err(PipelineError::InvalidInput(
                "document filename is empty".to_string(),
            ));
        }

        let escapes = Path::new(filename).components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });

        if escapes {
            return Err(PipelineError::InvalidInput(format!(
                "document filename leaves the documents directory: {}",
                filename
            )));
        }

        Ok(())
    }

    pub fn validate_collection_input(input: &CollectionInput) -> Result<()> {
        for document in &input.documents {
            Self::validate_document_filename(&document.filename)?;
        }

        Ok(())
    }

    pub fn validate_within_base_dir(path: &Path, base_dir: &Path) -> Result<()> {
        let canonical_path = fs::canonicalize(path).map_err(|e| {
            PipelineError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        let canonical_base = fs::canonicalize(base_dir).map_err(|e| {
            PipelineError::Validation(format!(
                "Cannot canonicalize base dir {}: {}",
                base_dir.display(),
                e
            ))
        })?;

        if !canonical_path.starts_with(&canonical_base) {
            return Err(PipelineError::Validation(format!(
                "Document resolves outside its folder ({} outside {})",
                canonical_path.display(),
                canonical_base.display()
            )));
        }

        Ok(())
    }
}
