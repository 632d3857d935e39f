//! Modelo de dados do laudo de vistoria técnica.
//!
//! A [`LaudoVistoria`] record is filled incrementally by the field
//! application and handed to the generators as an immutable snapshot at
//! export time. Every textual field defaults to an empty string so that a
//! partially filled record always renders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::catalog::{busca_por_id, comprimentos_disponiveis, parse_metros, peso_da_telha};
use crate::generators::traits::Validator;
use crate::generators::validation::{
    validate_protocolo, validate_quantidade, validate_required, validate_uf, ValidationErrors,
};

/// Resultado da análise da reclamação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Resultado {
    #[default]
    Improcedente,
    Procedente,
    ParcialmenteProcedente,
}

impl fmt::Display for Resultado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let texto = match self {
            Resultado::Improcedente => "IMPROCEDENTE",
            Resultado::Procedente => "PROCEDENTE",
            Resultado::ParcialmenteProcedente => "PARCIALMENTE PROCEDENTE",
        };
        write!(f, "{texto}")
    }
}

/// Referência a uma foto anexada a uma constatação.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FotoRef {
    pub arquivo: String,
    #[serde(default)]
    pub legenda: String,
}

/// Especificação de telha empregada na obra.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TelhaSpec {
    pub modelo: String,
    /// Espessura nominal (ex.: "6mm")
    pub espessura: String,
    /// Largura útil (ex.: "1.10m")
    pub largura: String,
    /// Comprimento nominal (ex.: "2.44m")
    pub comprimento: String,
    #[serde(default)]
    pub quantidade: u32,
}

impl TelhaSpec {
    /// Área coberta em m²: quantidade × comprimento × largura, com duas casas.
    pub fn area(&self) -> f64 {
        let comprimento = parse_metros(&self.comprimento).unwrap_or(0.0);
        let largura = parse_metros(&self.largura).unwrap_or(0.0);
        arredonda2(f64::from(self.quantidade) * comprimento * largura)
    }

    /// Peso total em kg, quando a combinação consta na tabela de pesos.
    pub fn peso_total(&self) -> Option<f64> {
        peso_da_telha(&self.modelo, &self.espessura, &self.largura, &self.comprimento)
            .map(|kg| arredonda2(kg * f64::from(self.quantidade)))
    }

    /// Comprimento atual é fabricado para o par (espessura, largura)?
    pub fn comprimento_disponivel(&self) -> bool {
        peso_da_telha(&self.modelo, &self.espessura, &self.largura, &self.comprimento).is_some()
    }

    /// Altera a espessura, reselecionando o comprimento quando necessário.
    pub fn definir_espessura(&mut self, espessura: &str) {
        self.espessura = espessura.to_string();
        self.reselecionar_comprimento();
    }

    /// Altera a largura, reselecionando o comprimento quando necessário.
    pub fn definir_largura(&mut self, largura: &str) {
        self.largura = largura.to_string();
        self.reselecionar_comprimento();
    }

    /// Substitui um comprimento indisponível pelo primeiro fabricado.
    ///
    /// Quando nenhum comprimento é fabricado para o par, o valor atual é
    /// mantido e o peso permanece indisponível.
    pub fn reselecionar_comprimento(&mut self) {
        if self.comprimento_disponivel() {
            return;
        }
        if let Some(primeiro) = comprimentos_disponiveis(&self.espessura, &self.largura).first() {
            log::debug!(
                "comprimento {} indisponível para {} x {}, substituído por {}",
                self.comprimento,
                self.espessura,
                self.largura,
                primeiro
            );
            self.comprimento = (*primeiro).to_string();
        }
    }
}

/// Constatação de não conformidade atribuída ao laudo.
///
/// Guarda a referência ao catálogo e um título/descrição reserva para o
/// caso de a entrada não existir mais no catálogo.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NaoConformidadeSelecionada {
    pub id: u32,
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub selecionada: bool,
    #[serde(default)]
    pub observacoes: String,
    #[serde(default)]
    pub fotos: Vec<FotoRef>,
}

impl NaoConformidadeSelecionada {
    /// Título resolvido pelo catálogo, com o texto armazenado como reserva.
    pub fn titulo_efetivo(&self) -> String {
        busca_por_id(self.id)
            .map(|nc| nc.titulo.to_string())
            .unwrap_or_else(|| self.titulo.clone())
    }

    /// Descrição resolvida pelo catálogo, com o texto armazenado como reserva.
    pub fn descricao_efetiva(&self) -> String {
        busca_por_id(self.id)
            .map(|nc| nc.descricao.to_string())
            .unwrap_or_else(|| self.descricao.clone())
    }
}

/// Laudo de vistoria técnica.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LaudoVistoria {
    // Identificação
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub criado_em: Option<DateTime<Utc>>,
    #[serde(default)]
    pub atualizado_em: Option<DateTime<Utc>>,
    #[serde(default)]
    pub protocolo: String,

    // Cliente e obra
    #[serde(default)]
    pub cliente: String,
    #[serde(default)]
    pub empreendimento: String,
    #[serde(default)]
    pub cidade: String,
    #[serde(default)]
    pub uf: String,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub assunto: String,

    // Responsáveis
    #[serde(default)]
    pub autor: String,
    #[serde(default)]
    pub departamento: String,
    #[serde(default)]
    pub regional: String,
    #[serde(default)]
    pub unidade: String,
    #[serde(default)]
    pub coordenador: String,
    #[serde(default)]
    pub gerente: String,
    #[serde(default)]
    pub registro_crea: String,

    // Produto
    #[serde(default)]
    pub telhas: Vec<TelhaSpec>,
    #[serde(default)]
    pub area_coberta: f64,

    // Constatações
    #[serde(default)]
    pub nao_conformidades: Vec<NaoConformidadeSelecionada>,

    // Textos do laudo (gerados a partir dos modelos quando vazios)
    #[serde(default)]
    pub introducao: String,
    #[serde(default)]
    pub analise_tecnica: String,
    #[serde(default)]
    pub conclusao: String,
    #[serde(default)]
    pub recomendacoes: String,
    #[serde(default)]
    pub observacoes_gerais: String,

    #[serde(default)]
    pub resultado: Resultado,
}

impl LaudoVistoria {
    /// Constatações efetivamente selecionadas, na ordem de seleção.
    pub fn selecionadas(&self) -> Vec<&NaoConformidadeSelecionada> {
        self.nao_conformidades
            .iter()
            .filter(|nc| nc.selecionada)
            .collect()
    }

    /// Área coberta informada, ou a soma das áreas das telhas quando ausente.
    pub fn area_coberta_efetiva(&self) -> f64 {
        if self.area_coberta > 0.0 {
            return self.area_coberta;
        }
        arredonda2(self.telhas.iter().map(TelhaSpec::area).sum())
    }

    /// Cliente quando informado, senão o protocolo. Base do nome de arquivo.
    pub fn cliente_ou_protocolo(&self) -> &str {
        if self.cliente.trim().is_empty() {
            &self.protocolo
        } else {
            &self.cliente
        }
    }
}

impl Validator for LaudoVistoria {
    /// Validate the snapshot and return descriptive issues if any.
    ///
    /// Generation never rejects a report: callers log the returned message
    /// and proceed with documented defaults.
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();

        validate_protocolo(&self.protocolo, "protocolo", &mut errors);
        validate_required(&self.cliente, "cliente", "Nome do Cliente", &mut errors);
        validate_required(&self.autor, "autor", "Responsável pelo Laudo", &mut errors);
        validate_uf(&self.uf, "uf", &mut errors);

        for (i, telha) in self.telhas.iter().enumerate() {
            validate_quantidade(telha.quantidade, &format!("telhas[{i}].quantidade"), &mut errors);
        }

        errors.into_result()
    }
}

fn arredonda2(valor: f64) -> f64 {
    (valor * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telha_padrao() -> TelhaSpec {
        TelhaSpec {
            modelo: "ONDULADA".to_string(),
            espessura: "6mm".to_string(),
            largura: "1.10m".to_string(),
            comprimento: "2.44m".to_string(),
            quantidade: 50,
        }
    }

    #[test]
    fn test_area_duas_casas() {
        assert_eq!(telha_padrao().area(), 134.2);

        let mut telha = telha_padrao();
        telha.quantidade = 7;
        telha.comprimento = "1.53m".to_string();
        // 7 * 1.53 * 1.10 = 11.781 -> 11.78
        assert_eq!(telha.area(), 11.78);
    }

    #[test]
    fn test_area_dimensao_invalida() {
        let mut telha = telha_padrao();
        telha.comprimento = "invalida".to_string();
        assert_eq!(telha.area(), 0.0);
    }

    #[test]
    fn test_peso_total() {
        // 50 chapas de 36.8 kg
        assert_eq!(telha_padrao().peso_total(), Some(1840.0));
    }

    #[test]
    fn test_definir_espessura_reseleciona_comprimento() {
        let mut telha = telha_padrao();
        telha.comprimento = "1.22m".to_string();
        // 8mm x 1.10m não fabrica 1.22m: assume o primeiro disponível
        telha.definir_espessura("8mm");
        assert_eq!(telha.comprimento, "1.83m");
        assert!(telha.comprimento_disponivel());
    }

    #[test]
    fn test_definir_largura_mantem_comprimento_valido() {
        let mut telha = telha_padrao();
        telha.definir_largura("0.92m");
        assert_eq!(telha.comprimento, "2.44m");
    }

    #[test]
    fn test_par_sem_comprimentos_mantem_valor() {
        let mut telha = telha_padrao();
        telha.definir_largura("1.10m");
        telha.definir_espessura("4mm");
        // nenhum comprimento fabricado para 4mm x 1.10m
        assert_eq!(telha.comprimento, "2.44m");
        assert!(!telha.comprimento_disponivel());
    }

    #[test]
    fn test_titulo_descricao_com_catalogo() {
        let nc = NaoConformidadeSelecionada {
            id: 1,
            titulo: "titulo antigo".to_string(),
            descricao: "descricao antiga".to_string(),
            selecionada: true,
            ..Default::default()
        };
        assert_eq!(nc.titulo_efetivo(), "Fixação irregular das telhas");
        assert!(nc.descricao_efetiva().contains("vedação elástica"));
    }

    #[test]
    fn test_titulo_descricao_fora_do_catalogo() {
        let nc = NaoConformidadeSelecionada {
            id: 999,
            titulo: "Defeito observado em campo".to_string(),
            descricao: "Descrição registrada pelo técnico.".to_string(),
            selecionada: true,
            ..Default::default()
        };
        assert_eq!(nc.titulo_efetivo(), "Defeito observado em campo");
        assert_eq!(nc.descricao_efetiva(), "Descrição registrada pelo técnico.");
    }

    #[test]
    fn test_laudo_deserializacao_parcial() {
        let json = r#"{
            "protocolo": "FAR-1234",
            "cliente": "Acme Ltda",
            "telhas": [{
                "modelo": "ONDULADA",
                "espessura": "6mm",
                "largura": "1.10m",
                "comprimento": "2.44m",
                "quantidade": 50
            }]
        }"#;

        let laudo: LaudoVistoria = serde_json::from_str(json).unwrap();
        assert_eq!(laudo.cliente, "Acme Ltda");
        assert_eq!(laudo.resultado, Resultado::Improcedente);
        assert!(laudo.cidade.is_empty());
        assert_eq!(laudo.area_coberta_efetiva(), 134.2);
    }
}
