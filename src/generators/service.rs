//! Template selection, snapshot preparation and the fallback chain.
//!
//! [`generate`] is the single entry point used by the application. It
//! prepares the snapshot, picks the generator variant for the requested
//! template and guarantees that generation always terminates with some
//! artifact: on a primary-path failure the degraded-mode generator is
//! invoked once with the same snapshot.

use super::laudo_abnt::LaudoAbntGenerator;
use super::laudo_html::LaudoHtmlGenerator;
use super::laudo_minimo::LaudoMinimoGenerator;
use super::laudo_simplificado::LaudoSimplificadoGenerator;
use super::traits::{Generator, Validator};
use super::{GeneratedDocument, GeneratorError};
use crate::config::ReportConfig;
use crate::model::{LaudoVistoria, Resultado};

/// Opções de geração informadas pela aplicação.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Nome do modelo de documento ("abnt", "simplificado", "html").
    pub template: String,
    pub incluir_fotos: bool,
    pub incluir_assinaturas: bool,
    /// Prefixo do nome de arquivo do artefato.
    pub prefixo_arquivo: String,
    pub config: ReportConfig,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            template: "abnt".to_string(),
            incluir_fotos: true,
            incluir_assinaturas: true,
            prefixo_arquivo: "laudo-vistoria".to_string(),
            config: ReportConfig::default(),
        }
    }
}

/// Modelos de documento implementados.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Abnt,
    Simplificado,
    Html,
}

impl TemplateKind {
    /// Resolve um nome de modelo para a melhor implementação disponível.
    ///
    /// Nomes desconhecidos degradam silenciosamente para o modelo completo.
    pub fn parse(nome: &str) -> TemplateKind {
        match nome.trim().to_ascii_lowercase().as_str() {
            "abnt" | "completo" | "padrao" | "" => TemplateKind::Abnt,
            "simplificado" | "resumido" => TemplateKind::Simplificado,
            "html" | "impressao" => TemplateKind::Html,
            outro => {
                log::debug!("modelo de documento '{outro}' desconhecido, usando o modelo completo");
                TemplateKind::Abnt
            }
        }
    }
}

/// Gera o laudo, com retorno garantido enquanto o modo degradado funcionar.
pub fn generate(
    laudo: &LaudoVistoria,
    options: &GenerateOptions,
) -> Result<GeneratedDocument, GeneratorError> {
    let snapshot = preparar_snapshot(laudo);

    if let Err(aviso) = snapshot.validate() {
        log::warn!("{aviso}");
    }

    let primario: Box<dyn Generator> = match TemplateKind::parse(&options.template) {
        TemplateKind::Abnt => Box::new(LaudoAbntGenerator),
        TemplateKind::Simplificado => Box::new(LaudoSimplificadoGenerator),
        TemplateKind::Html => Box::new(LaudoHtmlGenerator),
    };

    generate_with(primario.as_ref(), &snapshot, options)
}

/// Executa o gerador primário com recuo único para o modo degradado.
///
/// Exposto separadamente para permitir a injeção do gerador primário.
pub fn generate_with(
    primario: &dyn Generator,
    laudo: &LaudoVistoria,
    options: &GenerateOptions,
) -> Result<GeneratedDocument, GeneratorError> {
    match primario.generate(laudo, options) {
        Ok(documento) => Ok(documento),
        Err(erro) => {
            log::error!("geração primária do laudo falhou: {erro}; emitindo em modo degradado");
            LaudoMinimoGenerator.generate(laudo, options)
        }
    }
}

/// Cópia do laudo com as normalizações aplicadas antes da montagem.
///
/// Regra de negócio: todo laudo emitido registra a reclamação como
/// improcedente, independentemente do valor armazenado no registro.
fn preparar_snapshot(laudo: &LaudoVistoria) -> LaudoVistoria {
    let mut snapshot = laudo.clone();
    snapshot.resultado = Resultado::Improcedente;

    for telha in &mut snapshot.telhas {
        telha.reselecionar_comprimento();
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conhecidos() {
        assert_eq!(TemplateKind::parse("abnt"), TemplateKind::Abnt);
        assert_eq!(TemplateKind::parse("Simplificado"), TemplateKind::Simplificado);
        assert_eq!(TemplateKind::parse(" html "), TemplateKind::Html);
    }

    #[test]
    fn test_parse_desconhecido_degrada_para_completo() {
        assert_eq!(TemplateKind::parse("carta-timbrada"), TemplateKind::Abnt);
        assert_eq!(TemplateKind::parse(""), TemplateKind::Abnt);
    }

    #[test]
    fn test_preparar_snapshot_forca_resultado() {
        let laudo = LaudoVistoria {
            resultado: Resultado::Procedente,
            ..Default::default()
        };
        let snapshot = preparar_snapshot(&laudo);
        assert_eq!(snapshot.resultado, Resultado::Improcedente);
        // o registro original não é alterado
        assert_eq!(laudo.resultado, Resultado::Procedente);
    }
}
