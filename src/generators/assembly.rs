//! Assembly engine: reduces a report snapshot to an ordered block sequence.
//!
//! All generator variants share this engine; feature flags in
//! [`GenerateOptions`] switch the photo annex and the signature block on
//! and off. The engine never mutates the snapshot and renders whatever
//! `resultado` value it is given; the business override happens in the
//! service layer before this point.

use super::blocks::DocBlock;
use super::common::format_area;
use super::service::GenerateOptions;
use crate::model::{LaudoVistoria, NaoConformidadeSelecionada};
use crate::templates::{
    render_conclusao, render_introducao, CamposConclusao, CamposIntroducao,
    SEM_NAO_CONFORMIDADES, TEXTO_ANALISE_TECNICA,
};

/// Título fixo dos laudos.
pub const TITULO_LAUDO: &str = "LAUDO DE VISTORIA TÉCNICA";

/// Monta a sequência completa de blocos do laudo.
pub fn montar_blocos(
    laudo: &LaudoVistoria,
    options: &GenerateOptions,
    data_emissao: &str,
) -> Vec<DocBlock> {
    let mut blocos = Vec::new();
    let selecionadas = laudo.selecionadas();

    blocos.push(DocBlock::Titulo(TITULO_LAUDO.to_string()));

    bloco_identificacao(laudo, data_emissao, &mut blocos);
    bloco_responsaveis(laudo, options, &mut blocos);
    secao_introducao(laudo, options, &mut blocos);
    secao_analise(laudo, &selecionadas, &mut blocos);
    secao_conclusao(laudo, options, &selecionadas, &mut blocos);

    if options.incluir_assinaturas {
        bloco_assinatura(laudo, options, &mut blocos);
    }

    if options.incluir_fotos {
        anexo_fotografico(&selecionadas, &mut blocos);
    }

    blocos
}

fn bloco_identificacao(laudo: &LaudoVistoria, data_emissao: &str, blocos: &mut Vec<DocBlock>) {
    let cidade_uf = match (laudo.cidade.trim(), laudo.uf.trim()) {
        ("", "") => String::new(),
        (cidade, "") => cidade.to_string(),
        ("", uf) => uf.to_string(),
        (cidade, uf) => format!("{cidade}/{uf}"),
    };

    let linhas = [
        ("Protocolo", laudo.protocolo.clone()),
        ("Data", data_emissao.to_string()),
        ("Cliente", laudo.cliente.clone()),
        ("Empreendimento", laudo.empreendimento.clone()),
        ("Endereço", laudo.endereco.clone()),
        ("Cidade/UF", cidade_uf),
        ("Assunto", laudo.assunto.clone()),
    ];
    for (rotulo, valor) in linhas {
        blocos.push(DocBlock::ChaveValor {
            rotulo: rotulo.to_string(),
            valor,
        });
    }
}

fn bloco_responsaveis(laudo: &LaudoVistoria, options: &GenerateOptions, blocos: &mut Vec<DocBlock>) {
    let autor = valor_ou(&laudo.autor, &options.config.autor_padrao);
    let departamento = valor_ou(&laudo.departamento, &options.config.departamento_padrao);
    let unidade = valor_ou(&laudo.unidade, &options.config.unidade_padrao);

    let linhas = [
        ("Elaborado por", autor),
        ("Departamento", departamento),
        ("Regional", laudo.regional.clone()),
        ("Unidade", unidade),
        ("Coordenador", laudo.coordenador.clone()),
        ("Gerente", laudo.gerente.clone()),
    ];
    for (rotulo, valor) in linhas {
        blocos.push(DocBlock::ChaveValor {
            rotulo: rotulo.to_string(),
            valor,
        });
    }
}

fn secao_introducao(laudo: &LaudoVistoria, options: &GenerateOptions, blocos: &mut Vec<DocBlock>) {
    blocos.push(DocBlock::Cabecalho("1. INTRODUÇÃO".to_string()));

    let texto = if laudo.introducao.trim().is_empty() {
        let telha = laudo.telhas.first();
        render_introducao(&CamposIntroducao {
            modelo_telha: telha.map(|t| t.modelo.clone()).unwrap_or_default(),
            espessura: telha.map(|t| t.espessura.clone()).unwrap_or_default(),
            protocolo: laudo.protocolo.clone(),
            garantia_anos: options.config.garantia_anos.to_string(),
            garantia_sistema_anos: options.config.garantia_sistema_anos.to_string(),
        })
    } else {
        laudo.introducao.clone()
    };
    empurra_paragrafos(&texto, blocos);

    for telha in &laudo.telhas {
        blocos.push(DocBlock::ItemLista(format!("Modelo da telha: {}", telha.modelo)));
        blocos.push(DocBlock::ItemLista(format!("Espessura: {}", telha.espessura)));
        blocos.push(DocBlock::ItemLista(format!(
            "Quantidade: {} peças de {} x {}",
            telha.quantidade, telha.comprimento, telha.largura
        )));
        blocos.push(DocBlock::ItemLista(format!(
            "Área coberta: {} m²",
            format_area(telha.area())
        )));
    }
    if laudo.telhas.len() > 1 {
        blocos.push(DocBlock::ItemLista(format!(
            "Área total coberta: {} m²",
            format_area(laudo.area_coberta_efetiva())
        )));
    }
}

fn secao_analise(
    laudo: &LaudoVistoria,
    selecionadas: &[&NaoConformidadeSelecionada],
    blocos: &mut Vec<DocBlock>,
) {
    blocos.push(DocBlock::Cabecalho("2. ANÁLISE TÉCNICA".to_string()));

    let texto = if laudo.analise_tecnica.trim().is_empty() {
        TEXTO_ANALISE_TECNICA.to_string()
    } else {
        laudo.analise_tecnica.clone()
    };
    empurra_paragrafos(&texto, blocos);

    if selecionadas.is_empty() {
        blocos.push(DocBlock::Paragrafo(SEM_NAO_CONFORMIDADES.to_string()));
        return;
    }

    // Numeração sequencial pela ordem de seleção, independente do código
    // de catálogo da constatação.
    for (i, nc) in selecionadas.iter().enumerate() {
        let mut descricao = nc.descricao_efetiva();
        if !nc.observacoes.trim().is_empty() {
            if !descricao.is_empty() {
                descricao.push(' ');
            }
            descricao.push_str(&format!("Observações do técnico: {}", nc.observacoes.trim()));
        }
        blocos.push(DocBlock::ItemNumerado {
            numero: i + 1,
            titulo: nc.titulo_efetivo(),
            descricao: Some(descricao),
        });
    }
}

fn secao_conclusao(
    laudo: &LaudoVistoria,
    options: &GenerateOptions,
    selecionadas: &[&NaoConformidadeSelecionada],
    blocos: &mut Vec<DocBlock>,
) {
    blocos.push(DocBlock::Cabecalho("3. CONCLUSÃO".to_string()));

    if selecionadas.is_empty() {
        blocos.push(DocBlock::Paragrafo(SEM_NAO_CONFORMIDADES.to_string()));
    } else {
        // Somente os títulos, renumerados a partir de 1.
        for (i, nc) in selecionadas.iter().enumerate() {
            blocos.push(DocBlock::ItemNumerado {
                numero: i + 1,
                titulo: nc.titulo_efetivo(),
                descricao: None,
            });
        }
    }

    let texto = if laudo.conclusao.trim().is_empty() {
        render_conclusao(&CamposConclusao {
            resultado: laudo.resultado.to_string(),
            modelo_telha: laudo
                .telhas
                .first()
                .map(|t| t.modelo.clone())
                .unwrap_or_default(),
            garantia_total_anos: options.config.garantia_sistema_anos.to_string(),
        })
    } else {
        laudo.conclusao.clone()
    };
    empurra_paragrafos(&texto, blocos);

    if !laudo.recomendacoes.trim().is_empty() {
        blocos.push(DocBlock::Paragrafo(format!(
            "Recomendações: {}",
            laudo.recomendacoes.trim()
        )));
    }
    if !laudo.observacoes_gerais.trim().is_empty() {
        blocos.push(DocBlock::Paragrafo(format!(
            "Observações gerais: {}",
            laudo.observacoes_gerais.trim()
        )));
    }
}

fn bloco_assinatura(laudo: &LaudoVistoria, options: &GenerateOptions, blocos: &mut Vec<DocBlock>) {
    let autor = valor_ou(&laudo.autor, &options.config.autor_padrao);
    let departamento = valor_ou(&laudo.departamento, &options.config.departamento_padrao);
    let unidade = valor_ou(&laudo.unidade, &options.config.unidade_padrao);

    let mut linhas = vec![
        options.config.organizacao.clone(),
        autor,
        format!("{departamento} - {unidade}"),
    ];
    if !laudo.registro_crea.trim().is_empty() {
        linhas.push(format!("CREA {}", laudo.registro_crea.trim()));
    }
    blocos.push(DocBlock::Assinatura(linhas));
}

fn anexo_fotografico(selecionadas: &[&NaoConformidadeSelecionada], blocos: &mut Vec<DocBlock>) {
    if selecionadas.iter().all(|nc| nc.fotos.is_empty()) {
        return;
    }

    blocos.push(DocBlock::Cabecalho("ANEXO FOTOGRÁFICO".to_string()));
    for nc in selecionadas {
        if nc.fotos.is_empty() {
            continue;
        }
        blocos.push(DocBlock::SubCabecalho(nc.titulo_efetivo()));
        for (i, foto) in nc.fotos.iter().enumerate() {
            let legenda = if foto.legenda.trim().is_empty() {
                foto.arquivo.clone()
            } else {
                foto.legenda.clone()
            };
            blocos.push(DocBlock::LegendaFoto(format!("Foto {} - {}", i + 1, legenda)));
        }
    }
}

fn empurra_paragrafos(texto: &str, blocos: &mut Vec<DocBlock>) {
    for paragrafo in texto.split("\n\n") {
        let paragrafo = paragrafo.trim();
        if !paragrafo.is_empty() {
            blocos.push(DocBlock::Paragrafo(paragrafo.to_string()));
        }
    }
}

fn valor_ou(valor: &str, padrao: &str) -> String {
    if valor.trim().is_empty() {
        padrao.to_string()
    } else {
        valor.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FotoRef, TelhaSpec};

    fn laudo_basico() -> LaudoVistoria {
        LaudoVistoria {
            protocolo: "FAR-1234".to_string(),
            cliente: "Acme Ltda".to_string(),
            telhas: vec![TelhaSpec {
                modelo: "ONDULADA".to_string(),
                espessura: "6mm".to_string(),
                largura: "1.10m".to_string(),
                comprimento: "2.44m".to_string(),
                quantidade: 50,
            }],
            ..Default::default()
        }
    }

    fn conta_numerados(blocos: &[DocBlock]) -> usize {
        blocos
            .iter()
            .filter(|b| matches!(b, DocBlock::ItemNumerado { .. }))
            .count()
    }

    #[test]
    fn test_primeiro_bloco_e_o_titulo() {
        let blocos = montar_blocos(&laudo_basico(), &GenerateOptions::default(), "1 de agosto de 2026");
        assert_eq!(blocos[0], DocBlock::Titulo(TITULO_LAUDO.to_string()));
    }

    #[test]
    fn test_sem_selecao_usa_frase_fixa_nas_duas_secoes() {
        let blocos = montar_blocos(&laudo_basico(), &GenerateOptions::default(), "data");
        let fixas = blocos
            .iter()
            .filter(|b| matches!(b, DocBlock::Paragrafo(p) if p == SEM_NAO_CONFORMIDADES))
            .count();
        assert_eq!(fixas, 2);
        assert_eq!(conta_numerados(&blocos), 0);
    }

    #[test]
    fn test_anexo_omitido_sem_fotos() {
        let blocos = montar_blocos(&laudo_basico(), &GenerateOptions::default(), "data");
        assert!(!blocos
            .iter()
            .any(|b| matches!(b, DocBlock::Cabecalho(c) if c == "ANEXO FOTOGRÁFICO")));
    }

    #[test]
    fn test_anexo_com_fotos_selecionadas() {
        let mut laudo = laudo_basico();
        laudo.nao_conformidades.push(crate::model::NaoConformidadeSelecionada {
            id: 9,
            selecionada: true,
            fotos: vec![FotoRef {
                arquivo: "IMG_0001.jpg".to_string(),
                legenda: String::new(),
            }],
            ..Default::default()
        });

        let blocos = montar_blocos(&laudo, &GenerateOptions::default(), "data");
        assert!(blocos
            .iter()
            .any(|b| matches!(b, DocBlock::Cabecalho(c) if c == "ANEXO FOTOGRÁFICO")));
        assert!(blocos
            .iter()
            .any(|b| matches!(b, DocBlock::LegendaFoto(l) if l == "Foto 1 - IMG_0001.jpg")));
    }
}
