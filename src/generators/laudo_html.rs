//! Gerador do laudo em HTML para impressão pelo navegador.

use super::assembly::montar_blocos;
use super::blocks::StyleProfile;
use super::common::{build_filename, format_data_extensa};
use super::html::HtmlRenderEngine;
use super::service::GenerateOptions;
use super::traits::Generator;
use super::{GeneratedDocument, GeneratorError, OutputFormat};
use crate::model::LaudoVistoria;

/// Gerador do laudo em HTML, com a mesma sequência de blocos do DOCX.
pub struct LaudoHtmlGenerator;

impl Generator for LaudoHtmlGenerator {
    fn generate(
        &self,
        laudo: &LaudoVistoria,
        options: &GenerateOptions,
    ) -> Result<GeneratedDocument, GeneratorError> {
        let emitido_em = format_data_extensa();
        let blocos = montar_blocos(laudo, options, &emitido_em);
        let html = HtmlRenderEngine::render(&blocos, &StyleProfile::abnt());

        let filename = build_filename(
            &options.prefixo_arquivo,
            laudo.cliente_ou_protocolo(),
            OutputFormat::Html.extensao(),
        );

        Ok(GeneratedDocument {
            filename,
            bytes: html.into_bytes(),
            formato: OutputFormat::Html,
            emitido_em,
            degradado: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gera_pagina_html() {
        let laudo = LaudoVistoria {
            cliente: "Acme Ltda".to_string(),
            ..Default::default()
        };
        let documento = Generator::generate(&LaudoHtmlGenerator, &laudo, &GenerateOptions::default())
            .unwrap();
        let html = String::from_utf8(documento.bytes).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Acme Ltda"));
        assert!(documento.filename.ends_with(".html"));
    }
}
