//! Textos padrão do laudo e substituição de campos.
//!
//! The narrative templates are fixed prose with `{campo}` placeholders.
//! Substitution is literal token replacement: no conditionals, no loops,
//! order independent, and idempotent once every token has been consumed.
//! Missing values substitute as the empty string.

/// Modelo do texto de introdução.
const MODELO_INTRODUCAO: &str = "\
Em atendimento à solicitação registrada sob o protocolo {protocolo}, foi \
realizada vistoria técnica na obra em referência, com o objetivo de avaliar \
as condições de instalação e o desempenho das telhas {modelo_telha} de \
{espessura} aplicadas na cobertura.

As telhas {modelo_telha} possuem garantia de {garantia_anos} anos contra \
defeitos de fabricação, estendida para {garantia_sistema_anos} anos quando \
instaladas com o sistema completo de fixação e acessórios indicados pelo \
fabricante.

A presente análise fundamenta-se nas verificações realizadas em campo, nas \
normas técnicas vigentes e nas recomendações do manual de instalação do \
fabricante, conforme descrito nas seções seguintes.";

/// Modelo do texto de conclusão.
const MODELO_CONCLUSAO: &str = "\
Diante das constatações relacionadas acima, a reclamação registrada foi \
considerada {resultado}, uma vez que as anomalias verificadas decorrem de \
condições de instalação e uso em desacordo com as recomendações do \
fabricante, não caracterizando defeito de fabricação das telhas \
{modelo_telha}.

Permanecem asseguradas as condições de garantia de {garantia_total_anos} \
anos contra defeitos de fabricação, desde que observadas as orientações do \
manual de instalação e as correções indicadas neste laudo.";

/// Texto fixo de abertura da análise técnica.
pub const TEXTO_ANALISE_TECNICA: &str = "\
Durante a vistoria foram verificados os aspectos de instalação, fixação, \
armazenamento e manuseio das telhas, confrontando-se as condições \
encontradas em campo com as recomendações do manual técnico do fabricante. \
As constatações são relacionadas a seguir:";

/// Frase fixa para laudos sem não conformidades selecionadas.
pub const SEM_NAO_CONFORMIDADES: &str =
    "Não foram identificadas não conformidades de instalação durante a vistoria.";

/// Campos da introdução.
#[derive(Debug, Default)]
pub struct CamposIntroducao {
    pub modelo_telha: String,
    pub espessura: String,
    pub protocolo: String,
    pub garantia_anos: String,
    pub garantia_sistema_anos: String,
}

/// Campos da conclusão.
#[derive(Debug, Default)]
pub struct CamposConclusao {
    pub resultado: String,
    pub modelo_telha: String,
    pub garantia_total_anos: String,
}

/// Renderiza o texto de introdução do laudo.
pub fn render_introducao(campos: &CamposIntroducao) -> String {
    substituir(
        MODELO_INTRODUCAO,
        &[
            ("modelo_telha", &campos.modelo_telha),
            ("espessura", &campos.espessura),
            ("protocolo", &campos.protocolo),
            ("garantia_anos", &campos.garantia_anos),
            ("garantia_sistema_anos", &campos.garantia_sistema_anos),
        ],
    )
}

/// Renderiza o texto de conclusão do laudo.
///
/// O valor de `resultado` é renderizado tal como recebido; a regra de
/// negócio que fixa o resultado é aplicada por quem chama a geração.
pub fn render_conclusao(campos: &CamposConclusao) -> String {
    substituir(
        MODELO_CONCLUSAO,
        &[
            ("resultado", &campos.resultado),
            ("modelo_telha", &campos.modelo_telha),
            ("garantia_total_anos", &campos.garantia_total_anos),
        ],
    )
}

/// Substituição literal de `{token}` pelos valores informados.
fn substituir(modelo: &str, valores: &[(&str, &str)]) -> String {
    let mut texto = modelo.to_string();
    for (token, valor) in valores {
        texto = texto.replace(&format!("{{{token}}}"), valor);
    }
    texto
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_introducao_substitui_todos_os_campos() {
        let texto = render_introducao(&CamposIntroducao {
            modelo_telha: "ONDULADA".to_string(),
            espessura: "6mm".to_string(),
            protocolo: "FAR-1234".to_string(),
            garantia_anos: "5".to_string(),
            garantia_sistema_anos: "10".to_string(),
        });

        assert!(texto.contains("protocolo FAR-1234"));
        assert!(texto.contains("telhas ONDULADA de 6mm"));
        assert!(texto.contains("garantia de 5 anos"));
        assert!(texto.contains("para 10 anos"));
        assert!(!texto.contains('{'));
    }

    #[test]
    fn test_campo_ausente_vira_vazio() {
        let texto = render_introducao(&CamposIntroducao::default());
        assert!(texto.contains("sob o protocolo ,"));
        assert!(!texto.contains("{protocolo}"));
    }

    #[test]
    fn test_substituicao_idempotente() {
        let campos = CamposConclusao {
            resultado: "IMPROCEDENTE".to_string(),
            modelo_telha: "ONDULADA".to_string(),
            garantia_total_anos: "10".to_string(),
        };
        let uma_vez = render_conclusao(&campos);
        let duas_vezes = substituir(
            &uma_vez,
            &[
                ("resultado", "OUTRO"),
                ("modelo_telha", "OUTRA"),
                ("garantia_total_anos", "99"),
            ],
        );
        assert_eq!(uma_vez, duas_vezes);
    }
}
