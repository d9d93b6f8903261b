// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod logging;
pub mod schema;
pub mod telemetry;
pub mod validation;

pub use schema::SchemaValidator;
pub use telemetry::OperationTimer;
pub use validation::Validator;
