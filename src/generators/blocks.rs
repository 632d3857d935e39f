//! Typed content blocks produced by the assembly engine.
//!
//! The assembly engine reduces a report snapshot to an ordered `Vec` of
//! [`DocBlock`] values; the DOCX and HTML engines render the same sequence.

/// Um bloco de conteúdo do documento, na ordem em que deve ser renderizado.
#[derive(Debug, Clone, PartialEq)]
pub enum DocBlock {
    /// Título do documento, centralizado e em negrito.
    Titulo(String),
    /// Linha rotulada "Rótulo: valor", alinhada à esquerda.
    ChaveValor { rotulo: String, valor: String },
    /// Cabeçalho de seção, centralizado e em negrito.
    Cabecalho(String),
    /// Parágrafo de corpo, justificado.
    Paragrafo(String),
    /// Item de lista com marcador.
    ItemLista(String),
    /// Item numerado: título em negrito e descrição justificada opcional.
    ItemNumerado {
        numero: usize,
        titulo: String,
        descricao: Option<String>,
    },
    /// Subtítulo do anexo fotográfico.
    SubCabecalho(String),
    /// Legenda de foto, centralizada e em itálico. A imagem em si não é
    /// incorporada ao artefato.
    LegendaFoto(String),
    /// Bloco de assinatura: linhas centralizadas ao final do documento.
    Assinatura(Vec<String>),
}

/// Especificação visual do documento.
///
/// Margens em vigésimos de ponto (twips), fonte em meios-pontos,
/// entrelinha na escala de 240 = simples.
#[derive(Debug, Clone)]
pub struct StyleProfile {
    pub fonte: &'static str,
    pub tamanho_fonte: usize,
    pub margem_superior: i32,
    pub margem_direita: i32,
    pub margem_inferior: i32,
    pub margem_esquerda: i32,
    pub entrelinha: i32,
    pub espaco_apos: u32,
    pub espaco_secao: u32,
}

impl StyleProfile {
    /// Perfil padrão dos laudos: Times New Roman 12pt, entrelinha 1,5,
    /// margens 2,5cm com 3,0cm na borda de encadernação.
    pub fn abnt() -> Self {
        Self {
            fonte: "Times New Roman",
            tamanho_fonte: 24,
            margem_superior: 1417,
            margem_direita: 1417,
            margem_inferior: 1417,
            margem_esquerda: 1701,
            entrelinha: 360,
            espaco_apos: 160,
            espaco_secao: 480,
        }
    }
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self::abnt()
    }
}
