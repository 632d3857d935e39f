//! Traits for generator system standardization.

use super::service::GenerateOptions;
use super::{GeneratedDocument, GeneratorError};
use crate::model::LaudoVistoria;

/// Trait for validating record snapshots.
pub trait Validator {
    /// Validate the state of the object.
    fn validate(&self) -> Result<(), String>;
}

/// Trait for document generators.
pub trait Generator {
    /// Generate a document from the report snapshot.
    fn generate(
        &self,
        laudo: &LaudoVistoria,
        options: &GenerateOptions,
    ) -> Result<GeneratedDocument, GeneratorError>;
}
