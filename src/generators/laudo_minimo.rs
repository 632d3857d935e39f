//! Gerador de contingência do laudo.
//!
//! Emits a reduced HTML document with the identification fields and a
//! fixed degraded-mode notice. This path performs no catalog lookups and
//! dereferences no optional data, so it cannot fail for a well-formed
//! report; the fallback chain relies on that.

use super::common::{build_filename, escape_html, format_data_extensa};
use super::service::GenerateOptions;
use super::traits::Generator;
use super::{GeneratedDocument, GeneratorError, OutputFormat};
use crate::model::LaudoVistoria;

/// Aviso fixo impresso nos documentos de contingência.
pub const AVISO_MODO_DEGRADADO: &str = "Documento emitido em modo de contingência. \
    Os dados completos da vistoria permanecem registrados no sistema e o laudo \
    definitivo pode ser reemitido a qualquer momento.";

/// Gerador reduzido usado quando a geração primária falha.
pub struct LaudoMinimoGenerator;

impl Generator for LaudoMinimoGenerator {
    fn generate(
        &self,
        laudo: &LaudoVistoria,
        options: &GenerateOptions,
    ) -> Result<GeneratedDocument, GeneratorError> {
        let emitido_em = format_data_extensa();

        let mut corpo = String::new();
        corpo.push_str("<h1>LAUDO DE VISTORIA TÉCNICA</h1>\n");
        for (rotulo, valor) in [
            ("Protocolo", laudo.protocolo.as_str()),
            ("Data", emitido_em.as_str()),
            ("Cliente", laudo.cliente.as_str()),
            ("Empreendimento", laudo.empreendimento.as_str()),
            ("Endereço", laudo.endereco.as_str()),
            ("Cidade", laudo.cidade.as_str()),
            ("UF", laudo.uf.as_str()),
            ("Assunto", laudo.assunto.as_str()),
        ] {
            corpo.push_str(&format!(
                "<p><strong>{}:</strong> {}</p>\n",
                rotulo,
                escape_html(valor)
            ));
        }
        corpo.push_str(&format!("<p><em>{}</em></p>\n", AVISO_MODO_DEGRADADO));

        let html = format!(
            "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Laudo de Vistoria</title>\n</head>\n<body>\n{corpo}</body>\n</html>\n"
        );

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
            degradado: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sempre_gera_com_laudo_vazio() {
        let documento = Generator::generate(
            &LaudoMinimoGenerator,
            &LaudoVistoria::default(),
            &GenerateOptions::default(),
        )
        .unwrap();
        assert!(documento.degradado);
        assert_eq!(documento.formato, OutputFormat::Html);
    }

    #[test]
    fn test_contem_identificacao_e_aviso() {
        let laudo = LaudoVistoria {
            protocolo: "FAR-9999".to_string(),
            cliente: "Construtora <X> & Filhos".to_string(),
            ..Default::default()
        };
        let documento =
            Generator::generate(&LaudoMinimoGenerator, &laudo, &GenerateOptions::default()).unwrap();
        let html = String::from_utf8(documento.bytes).unwrap();
        assert!(html.contains("FAR-9999"));
        assert!(html.contains("Construtora &lt;X&gt; &amp; Filhos"));
        assert!(html.contains("modo de contingência"));
    }
}
