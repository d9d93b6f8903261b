// file: src/repository/mod.rs
// description: Document source operations module exports
// reference: Internal module structure

pub mod provider;
pub mod scanner;

pub use provider::{DocumentProvider, JsonSpanProvider, document_name};
pub use scanner::{FileScanner, ScannedFile};
