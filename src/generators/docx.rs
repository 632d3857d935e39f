//! DOCX rendering engine.
//!
//! Renders an assembled block sequence into an OOXML container through the
//! `docx-rs` authoring library. Measurements follow the library's native
//! units: margins and spacing in twips, font size in half points.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, LineSpacing, LineSpacingType, PageMargin, Paragraph, Run, RunFonts,
};

use super::blocks::{DocBlock, StyleProfile};
use super::GeneratorError;

/// Stateless engine for rendering block sequences to DOCX bytes.
pub struct DocxRenderEngine;

impl DocxRenderEngine {
    /// Render the block sequence to an in-memory DOCX artifact.
    pub fn render(blocos: &[DocBlock], estilo: &StyleProfile) -> Result<Vec<u8>, GeneratorError> {
        let mut docx = Docx::new()
            .page_margin(
                PageMargin::new()
                    .top(estilo.margem_superior)
                    .right(estilo.margem_direita)
                    .bottom(estilo.margem_inferior)
                    .left(estilo.margem_esquerda),
            )
            .default_fonts(RunFonts::new().ascii(estilo.fonte).hi_ansi(estilo.fonte))
            .default_size(estilo.tamanho_fonte);

        for bloco in blocos {
            for paragrafo in Self::paragrafos(bloco, estilo) {
                docx = docx.add_paragraph(paragrafo);
            }
        }

        let mut cursor = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut cursor)
            .map_err(docx_rs::DocxError::from)?;
        Ok(cursor.into_inner())
    }

    /// Parágrafos DOCX de um bloco. Itens numerados com descrição produzem
    /// dois parágrafos.
    fn paragrafos(bloco: &DocBlock, estilo: &StyleProfile) -> Vec<Paragraph> {
        match bloco {
            DocBlock::Titulo(texto) => vec![Paragraph::new()
                .align(AlignmentType::Center)
                .line_spacing(Self::espacamento(estilo, 0, estilo.espaco_secao))
                .add_run(Self::run(texto, estilo).bold())],

            DocBlock::ChaveValor { rotulo, valor } => vec![Paragraph::new()
                .align(AlignmentType::Left)
                .line_spacing(Self::espacamento(estilo, 0, estilo.espaco_apos))
                .add_run(Self::run(&format!("{rotulo}: "), estilo).bold())
                .add_run(Self::run(valor, estilo))],

            DocBlock::Cabecalho(texto) => vec![Paragraph::new()
                .align(AlignmentType::Center)
                .line_spacing(Self::espacamento(estilo, estilo.espaco_secao, estilo.espaco_apos))
                .add_run(Self::run(texto, estilo).bold())],

            DocBlock::Paragrafo(texto) => vec![Paragraph::new()
                .align(AlignmentType::Both)
                .line_spacing(Self::espacamento(estilo, 0, estilo.espaco_apos))
                .add_run(Self::run(texto, estilo))],

            DocBlock::ItemLista(texto) => vec![Paragraph::new()
                .align(AlignmentType::Left)
                .indent(Some(425), None, None, None)
                .line_spacing(Self::espacamento(estilo, 0, estilo.espaco_apos / 2))
                .add_run(Self::run(&format!("\u{2022} {texto}"), estilo))],

            DocBlock::ItemNumerado {
                numero,
                titulo,
                descricao,
            } => {
                let mut paragrafos = vec![Paragraph::new()
                    .align(AlignmentType::Left)
                    .line_spacing(Self::espacamento(estilo, 0, estilo.espaco_apos / 2))
                    .add_run(Self::run(&format!("{numero}. {titulo}"), estilo).bold())];
                if let Some(descricao) = descricao {
                    paragrafos.push(
                        Paragraph::new()
                            .align(AlignmentType::Both)
                            .indent(Some(425), None, None, None)
                            .line_spacing(Self::espacamento(estilo, 0, estilo.espaco_apos))
                            .add_run(Self::run(descricao, estilo)),
                    );
                }
                paragrafos
            }

            DocBlock::SubCabecalho(texto) => vec![Paragraph::new()
                .align(AlignmentType::Left)
                .line_spacing(Self::espacamento(estilo, estilo.espaco_apos, estilo.espaco_apos))
                .add_run(Self::run(texto, estilo).bold())],

            DocBlock::LegendaFoto(texto) => vec![Paragraph::new()
                .align(AlignmentType::Center)
                .line_spacing(Self::espacamento(estilo, 0, estilo.espaco_apos))
                .add_run(Self::run(texto, estilo).italic())],

            DocBlock::Assinatura(linhas) => linhas
                .iter()
                .enumerate()
                .map(|(i, linha)| {
                    let antes = if i == 0 { estilo.espaco_secao * 2 } else { 0 };
                    Paragraph::new()
                        .align(AlignmentType::Center)
                        .line_spacing(Self::espacamento(estilo, antes, 0))
                        .add_run(Self::run(linha, estilo))
                })
                .collect(),
        }
    }

    fn run(texto: &str, estilo: &StyleProfile) -> Run {
        Run::new()
            .add_text(texto)
            .size(estilo.tamanho_fonte)
            .fonts(RunFonts::new().ascii(estilo.fonte).hi_ansi(estilo.fonte))
    }

    fn espacamento(estilo: &StyleProfile, antes: u32, depois: u32) -> LineSpacing {
        LineSpacing::new()
            .before(antes)
            .after(depois)
            .line_rule(LineSpacingType::Auto)
            .line(estilo.entrelinha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_produz_pacote_zip() {
        let blocos = vec![
            DocBlock::Titulo("LAUDO DE VISTORIA TÉCNICA".to_string()),
            DocBlock::Paragrafo("Parágrafo de teste.".to_string()),
        ];
        let bytes = DocxRenderEngine::render(&blocos, &StyleProfile::abnt()).unwrap();
        // contêiner OOXML é um pacote zip
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_render_sequencia_vazia() {
        let bytes = DocxRenderEngine::render(&[], &StyleProfile::abnt()).unwrap();
        assert!(!bytes.is_empty());
    }
}
