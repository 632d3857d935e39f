//! Geração de laudos de vistoria técnica de coberturas em fibrocimento.
//!
//! The crate receives a filled [`model::LaudoVistoria`] snapshot from the
//! field application and renders it into a downloadable document. The main
//! entry point is [`generators::generate`], which selects the template,
//! applies the business normalizations and falls back to a degraded-mode
//! document when the primary generator fails.

pub mod catalog;
pub mod config;
pub mod generators;
pub mod model;
pub mod templates;

pub use crate::config::ReportConfig;
pub use crate::generators::{
    generate, GeneratedDocument, GenerateOptions, GeneratorError, OutputFormat, TemplateKind,
};
pub use crate::model::{LaudoVistoria, NaoConformidadeSelecionada, Resultado, TelhaSpec};
