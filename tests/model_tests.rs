use vistoria_laudos::catalog::comprimentos_disponiveis;
use vistoria_laudos::model::{LaudoVistoria, NaoConformidadeSelecionada, TelhaSpec};

fn telha(espessura: &str, largura: &str, comprimento: &str, quantidade: u32) -> TelhaSpec {
    TelhaSpec {
        modelo: "ONDULADA".to_string(),
        espessura: espessura.to_string(),
        largura: largura.to_string(),
        comprimento: comprimento.to_string(),
        quantidade,
    }
}

#[test]
fn test_area_arredondada_para_duas_casas() {
    assert_eq!(telha("6mm", "1.10m", "2.44m", 50).area(), 134.2);
    assert_eq!(telha("6mm", "0.92m", "1.53m", 13).area(), 18.3);
    assert_eq!(telha("6mm", "1.10m", "2.44m", 0).area(), 0.0);
}

#[test]
fn test_area_nunca_negativa() {
    for quantidade in [0, 1, 7, 120] {
        for comprimento in ["1.22m", "2.44m", "3.66m", "lixo"] {
            assert!(telha("6mm", "1.10m", comprimento, quantidade).area() >= 0.0);
        }
    }
}

#[test]
fn test_reselecao_apos_troca_de_espessura() {
    let mut spec = telha("6mm", "1.10m", "1.22m", 10);
    spec.definir_espessura("8mm");

    let disponiveis = comprimentos_disponiveis("8mm", "1.10m");
    assert_eq!(spec.comprimento.as_str(), *disponiveis.first().unwrap());
}

#[test]
fn test_comprimento_indisponivel_nunca_persiste() {
    // percorre todas as trocas de largura/espessura partindo de um
    // comprimento curto, que nem sempre é fabricado
    for espessura in ["4mm", "5mm", "6mm", "8mm"] {
        for largura in ["0.92m", "1.10m"] {
            let mut spec = telha("6mm", "1.10m", "1.22m", 10);
            spec.definir_largura(largura);
            spec.definir_espessura(espessura);

            let disponiveis = comprimentos_disponiveis(espessura, largura);
            if !disponiveis.is_empty() {
                assert!(
                    disponiveis.contains(&spec.comprimento.as_str()),
                    "comprimento {} persistiu para {espessura} x {largura}",
                    spec.comprimento
                );
            }
        }
    }
}

#[test]
fn test_selecionadas_preserva_ordem() {
    let laudo = LaudoVistoria {
        nao_conformidades: vec![
            NaoConformidadeSelecionada { id: 7, selecionada: true, ..Default::default() },
            NaoConformidadeSelecionada { id: 2, selecionada: false, ..Default::default() },
            NaoConformidadeSelecionada { id: 11, selecionada: true, ..Default::default() },
        ],
        ..Default::default()
    };
    let ids: Vec<u32> = laudo.selecionadas().iter().map(|nc| nc.id).collect();
    assert_eq!(ids, vec![7, 11]);
}

#[test]
fn test_area_coberta_informada_tem_precedencia() {
    let mut laudo = LaudoVistoria {
        telhas: vec![telha("6mm", "1.10m", "2.44m", 50)],
        ..Default::default()
    };
    assert_eq!(laudo.area_coberta_efetiva(), 134.2);

    laudo.area_coberta = 150.0;
    assert_eq!(laudo.area_coberta_efetiva(), 150.0);
}

#[test]
fn test_deserializacao_com_campos_ausentes() {
    let laudo: LaudoVistoria = serde_json::from_str(r#"{"protocolo": "FAR-77"}"#).unwrap();
    assert_eq!(laudo.protocolo, "FAR-77");
    assert!(laudo.telhas.is_empty());
    assert!(laudo.cliente.is_empty());
    assert_eq!(laudo.cliente_ou_protocolo(), "FAR-77");
}
