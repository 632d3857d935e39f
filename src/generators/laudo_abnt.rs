//! Gerador completo do laudo em DOCX.
//!
//! This is the primary generator: full block sequence with photo annex and
//! signature block, rendered with the standard visual profile.

use super::assembly::montar_blocos;
use super::blocks::StyleProfile;
use super::common::{build_filename, format_data_extensa};
use super::docx::DocxRenderEngine;
use super::service::GenerateOptions;
use super::traits::Generator;
use super::{GeneratedDocument, GeneratorError, OutputFormat};
use crate::model::LaudoVistoria;

/// Gerador do laudo completo em DOCX.
pub struct LaudoAbntGenerator;

impl Generator for LaudoAbntGenerator {
    /// Generate the document from the report snapshot.
    fn generate(
        &self,
        laudo: &LaudoVistoria,
        options: &GenerateOptions,
    ) -> Result<GeneratedDocument, GeneratorError> {
        let emitido_em = format_data_extensa();
        let blocos = montar_blocos(laudo, options, &emitido_em);
        let bytes = DocxRenderEngine::render(&blocos, &StyleProfile::abnt())?;

        let filename = build_filename(
            &options.prefixo_arquivo,
            laudo.cliente_ou_protocolo(),
            OutputFormat::Docx.extensao(),
        );

        Ok(GeneratedDocument {
            filename,
            bytes,
            formato: OutputFormat::Docx,
            emitido_em,
            degradado: false,
        })
    }
}

// Inherent impl for ease of use without importing the trait.
impl LaudoAbntGenerator {
    pub fn generate(
        &self,
        laudo: &LaudoVistoria,
        options: &GenerateOptions,
    ) -> Result<GeneratedDocument, GeneratorError> {
        Generator::generate(self, laudo, options)
    }
}
