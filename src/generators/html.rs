//! HTML rendering engine.
//!
//! Renders the same block sequence as the DOCX engine into a standalone
//! HTML page suitable for browser printing. The visual specification is
//! carried over as inline CSS derived from the [`StyleProfile`].

use super::blocks::{DocBlock, StyleProfile};
use super::common::escape_html;

const TWIPS_POR_CM: f64 = 567.0;

/// Stateless engine for rendering block sequences to an HTML page.
pub struct HtmlRenderEngine;

impl HtmlRenderEngine {
    /// Render the block sequence to a complete HTML document.
    pub fn render(blocos: &[DocBlock], estilo: &StyleProfile) -> String {
        let titulo_pagina = blocos
            .iter()
            .find_map(|b| match b {
                DocBlock::Titulo(t) => Some(t.clone()),
                _ => None,
            })
            .unwrap_or_else(|| "Laudo de Vistoria".to_string());

        let mut corpo = String::new();
        let mut lista_aberta: Option<&'static str> = None;

        for bloco in blocos {
            match bloco {
                DocBlock::ItemLista(texto) => {
                    abre_lista(&mut corpo, &mut lista_aberta, "ul");
                    corpo.push_str(&format!("<li>{}</li>\n", escape_html(texto)));
                }
                DocBlock::ItemNumerado {
                    numero,
                    titulo,
                    descricao,
                } => {
                    abre_lista(&mut corpo, &mut lista_aberta, "ol");
                    match descricao {
                        Some(descricao) => corpo.push_str(&format!(
                            "<li value=\"{}\"><strong>{}</strong><p>{}</p></li>\n",
                            numero,
                            escape_html(titulo),
                            escape_html(descricao)
                        )),
                        None => corpo.push_str(&format!(
                            "<li value=\"{}\"><strong>{}</strong></li>\n",
                            numero,
                            escape_html(titulo)
                        )),
                    }
                }
                outro => {
                    fecha_lista(&mut corpo, &mut lista_aberta);
                    empurra_bloco(&mut corpo, outro);
                }
            }
        }
        fecha_lista(&mut corpo, &mut lista_aberta);

        format!(
            "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
            escape_html(&titulo_pagina),
            Self::folha_de_estilo(estilo),
            corpo
        )
    }

    fn folha_de_estilo(estilo: &StyleProfile) -> String {
        let superior = f64::from(estilo.margem_superior) / TWIPS_POR_CM;
        let direita = f64::from(estilo.margem_direita) / TWIPS_POR_CM;
        let inferior = f64::from(estilo.margem_inferior) / TWIPS_POR_CM;
        let esquerda = f64::from(estilo.margem_esquerda) / TWIPS_POR_CM;
        let fonte_pt = estilo.tamanho_fonte / 2;
        let entrelinha = f64::from(estilo.entrelinha) / 240.0;
        let espaco_pt = estilo.espaco_apos / 20;
        let espaco_secao_pt = estilo.espaco_secao / 20;

        format!(
            "@page {{ margin: {superior:.1}cm {direita:.1}cm {inferior:.1}cm {esquerda:.1}cm; }}\n\
             body {{ font-family: \"{fonte}\", serif; font-size: {fonte_pt}pt; \
             line-height: {entrelinha:.1}; \
             margin: {superior:.1}cm {direita:.1}cm {inferior:.1}cm {esquerda:.1}cm; }}\n\
             p {{ text-align: justify; margin: 0 0 {espaco_pt}pt 0; }}\n\
             h1, h2 {{ text-align: center; font-size: {fonte_pt}pt; \
             margin: {espaco_secao_pt}pt 0 {espaco_pt}pt 0; }}\n\
             h3 {{ text-align: left; font-size: {fonte_pt}pt; }}\n\
             p.chave-valor {{ text-align: left; }}\n\
             p.legenda {{ text-align: center; font-style: italic; }}\n\
             div.assinatura {{ text-align: center; margin-top: {espaco_secao_pt}pt; }}",
            fonte = estilo.fonte,
        )
    }
}

fn empurra_bloco(corpo: &mut String, bloco: &DocBlock) {
    match bloco {
        DocBlock::Titulo(texto) => {
            corpo.push_str(&format!("<h1>{}</h1>\n", escape_html(texto)));
        }
        DocBlock::ChaveValor { rotulo, valor } => {
            corpo.push_str(&format!(
                "<p class=\"chave-valor\"><strong>{}:</strong> {}</p>\n",
                escape_html(rotulo),
                escape_html(valor)
            ));
        }
        DocBlock::Cabecalho(texto) => {
            corpo.push_str(&format!("<h2>{}</h2>\n", escape_html(texto)));
        }
        DocBlock::Paragrafo(texto) => {
            corpo.push_str(&format!("<p>{}</p>\n", escape_html(texto)));
        }
        DocBlock::SubCabecalho(texto) => {
            corpo.push_str(&format!("<h3>{}</h3>\n", escape_html(texto)));
        }
        DocBlock::LegendaFoto(texto) => {
            corpo.push_str(&format!("<p class=\"legenda\">{}</p>\n", escape_html(texto)));
        }
        DocBlock::Assinatura(linhas) => {
            corpo.push_str("<div class=\"assinatura\">\n");
            for linha in linhas {
                corpo.push_str(&format!("<p>{}</p>\n", escape_html(linha)));
            }
            corpo.push_str("</div>\n");
        }
        // itens de lista são tratados pelo agrupamento no chamador
        DocBlock::ItemLista(_) | DocBlock::ItemNumerado { .. } => {}
    }
}

fn abre_lista(corpo: &mut String, lista_aberta: &mut Option<&'static str>, tag: &'static str) {
    if *lista_aberta == Some(tag) {
        return;
    }
    fecha_lista(corpo, lista_aberta);
    corpo.push_str(&format!("<{tag}>\n"));
    *lista_aberta = Some(tag);
}

fn fecha_lista(corpo: &mut String, lista_aberta: &mut Option<&'static str>) {
    if let Some(tag) = lista_aberta.take() {
        corpo.push_str(&format!("</{tag}>\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listas_consecutivas_agrupadas() {
        let blocos = vec![
            DocBlock::ItemLista("um".to_string()),
            DocBlock::ItemLista("dois".to_string()),
            DocBlock::Paragrafo("corpo".to_string()),
        ];
        let html = HtmlRenderEngine::render(&blocos, &StyleProfile::abnt());
        assert_eq!(html.matches("<ul>").count(), 1);
        assert!(html.contains("<li>um</li>"));
        assert!(html.contains("</ul>"));
    }

    #[test]
    fn test_numeracao_explicita() {
        let blocos = vec![DocBlock::ItemNumerado {
            numero: 3,
            titulo: "Título".to_string(),
            descricao: None,
        }];
        let html = HtmlRenderEngine::render(&blocos, &StyleProfile::abnt());
        assert!(html.contains("<li value=\"3\">"));
    }

    #[test]
    fn test_texto_escapado() {
        let blocos = vec![DocBlock::Paragrafo("vão <livre> & beiral".to_string())];
        let html = HtmlRenderEngine::render(&blocos, &StyleProfile::abnt());
        assert!(html.contains("vão &lt;livre&gt; &amp; beiral"));
    }
}
