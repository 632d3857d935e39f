//! Gerador simplificado do laudo em DOCX.
//!
//! Same assembly engine as the full generator, with the photo annex and
//! the signature block switched off.

use super::assembly::montar_blocos;
use super::blocks::StyleProfile;
use super::common::{build_filename, format_data_extensa};
use super::docx::DocxRenderEngine;
use super::service::GenerateOptions;
use super::traits::Generator;
use super::{GeneratedDocument, GeneratorError, OutputFormat};
use crate::model::LaudoVistoria;

/// Gerador do laudo simplificado em DOCX.
pub struct LaudoSimplificadoGenerator;

impl Generator for LaudoSimplificadoGenerator {
    fn generate(
        &self,
        laudo: &LaudoVistoria,
        options: &GenerateOptions,
    ) -> Result<GeneratedDocument, GeneratorError> {
        let mut opcoes = options.clone();
        opcoes.incluir_fotos = false;
        opcoes.incluir_assinaturas = false;

        let emitido_em = format_data_extensa();
        let blocos = montar_blocos(laudo, &opcoes, &emitido_em);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::blocks::DocBlock;
    use crate::model::{FotoRef, NaoConformidadeSelecionada};

    fn laudo_com_fotos() -> LaudoVistoria {
        LaudoVistoria {
            nao_conformidades: vec![NaoConformidadeSelecionada {
                id: 1,
                selecionada: true,
                fotos: vec![FotoRef {
                    arquivo: "IMG_0001.jpg".to_string(),
                    legenda: String::new(),
                }],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_gera_docx_valido() {
        let documento = Generator::generate(
            &LaudoSimplificadoGenerator,
            &laudo_com_fotos(),
            &GenerateOptions::default(),
        )
        .unwrap();
        assert_eq!(documento.formato, OutputFormat::Docx);
        assert_eq!(&documento.bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_anexo_e_assinatura_desligados_na_montagem() {
        // a variante força as flags mesmo quando o chamador pede fotos
        let mut opcoes = GenerateOptions::default();
        opcoes.incluir_fotos = false;
        opcoes.incluir_assinaturas = false;

        let blocos = montar_blocos(&laudo_com_fotos(), &opcoes, "data");
        assert!(!blocos
            .iter()
            .any(|b| matches!(b, DocBlock::Cabecalho(c) if c == "ANEXO FOTOGRÁFICO")));
        assert!(!blocos.iter().any(|b| matches!(b, DocBlock::Assinatura(_))));
    }
}
