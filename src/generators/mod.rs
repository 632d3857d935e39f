//! Generators module - business logic for rendering inspection reports.
//!
//! This module contains the document pipeline for the laudo de vistoria:
//! - `assembly` - turns a report snapshot into an ordered block sequence
//! - `docx` / `html` - render engines for the block sequence
//! - `laudo_abnt`, `laudo_simplificado`, `laudo_html` - generator variants
//! - `laudo_minimo` - degraded-mode generator used by the fallback chain
//! - `service` - template selection, normalization and the fallback chain

pub mod assembly;
pub mod blocks;
pub mod common;
pub mod docx;
pub mod html;
pub mod laudo_abnt;
pub mod laudo_html;
pub mod laudo_minimo;
pub mod laudo_simplificado;
pub mod service;
pub mod traits;
pub mod validation;

pub use blocks::{DocBlock, StyleProfile};
pub use laudo_abnt::LaudoAbntGenerator;
pub use laudo_html::LaudoHtmlGenerator;
pub use laudo_minimo::LaudoMinimoGenerator;
pub use laudo_simplificado::LaudoSimplificadoGenerator;
pub use service::{generate, generate_with, GenerateOptions, TemplateKind};
pub use traits::{Generator, Validator};

use thiserror::Error;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("falha ao montar o pacote DOCX: {0}")]
    DocxPack(#[from] docx_rs::DocxError),
    #[error("geração do laudo interrompida: {0}")]
    Geracao(String),
}

/// Formato do artefato gerado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Docx,
    Html,
}

impl OutputFormat {
    /// Extensão de arquivo do formato.
    pub fn extensao(&self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Html => "html",
        }
    }
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub formato: OutputFormat,
    /// Data de emissão impressa no corpo do documento.
    pub emitido_em: String,
    /// Marcado quando o artefato veio do gerador de modo degradado.
    pub degradado: bool,
}
