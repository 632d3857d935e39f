//! Configuração da geração de laudos.
//!
//! The surrounding application owns persisted settings; this crate only
//! receives an explicit [`ReportConfig`] at each generation call.
//! `from_env` exists for hosts that configure through the environment.

use std::env;

/// Valores institucionais impressos em todos os laudos.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Razão social impressa no bloco de assinatura.
    pub organizacao: String,
    /// Autor usado quando o laudo não informa o responsável.
    pub autor_padrao: String,
    pub departamento_padrao: String,
    pub unidade_padrao: String,
    /// Garantia da telha, em anos.
    pub garantia_anos: u32,
    /// Garantia com o sistema completo de fixação, em anos.
    pub garantia_sistema_anos: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            organizacao: "Fibratec Coberturas S.A.".to_string(),
            autor_padrao: "Assistência Técnica".to_string(),
            departamento_padrao: "Departamento Técnico".to_string(),
            unidade_padrao: "Unidade Matriz".to_string(),
            garantia_anos: 5,
            garantia_sistema_anos: 10,
        }
    }
}

impl ReportConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file
        let padrao = Self::default();

        Self {
            organizacao: env::var("LAUDO_ORGANIZACAO").unwrap_or(padrao.organizacao),
            autor_padrao: env::var("LAUDO_AUTOR_PADRAO").unwrap_or(padrao.autor_padrao),
            departamento_padrao: env::var("LAUDO_DEPARTAMENTO")
                .unwrap_or(padrao.departamento_padrao),
            unidade_padrao: env::var("LAUDO_UNIDADE").unwrap_or(padrao.unidade_padrao),
            garantia_anos: env::var("LAUDO_GARANTIA_ANOS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(padrao.garantia_anos),
            garantia_sistema_anos: env::var("LAUDO_GARANTIA_SISTEMA_ANOS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(padrao.garantia_sistema_anos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preenche_todos_os_campos() {
        let config = ReportConfig::default();
        assert!(!config.organizacao.is_empty());
        assert!(config.garantia_sistema_anos >= config.garantia_anos);
    }
}
