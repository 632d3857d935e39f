//! Tabela de pesos das telhas onduladas de fibrocimento.
//!
//! The weight table maps each manufactured (modelo, espessura, largura,
//! comprimento) combination to the weight of a single sheet in kilograms.
//! Combinations that are not manufactured have no entry, and callers are
//! expected to reselect a valid length through [`comprimentos_disponiveis`].

/// Modelos de telha cobertos pela tabela de pesos.
pub const MODELOS: &[&str] = &["ONDULADA"];

/// Espessuras de chapa produzidas.
pub const ESPESSURAS: &[&str] = &["4mm", "5mm", "6mm", "8mm"];

/// Larguras úteis de chapa produzidas.
pub const LARGURAS: &[&str] = &["0.92m", "1.10m"];

/// Comprimentos nominais de chapa, em ordem crescente.
pub const COMPRIMENTOS: &[&str] = &[
    "1.22m", "1.53m", "1.83m", "2.13m", "2.44m", "3.05m", "3.66m",
];

/// Peso em kg de uma chapa para cada combinação fabricada.
struct PesoTelha {
    modelo: &'static str,
    espessura: &'static str,
    largura: &'static str,
    comprimento: &'static str,
    kg: f64,
}

const PESOS: &[PesoTelha] = &[
    // 4mm - linha leve, apenas largura 0.92m e comprimentos curtos
    PesoTelha { modelo: "ONDULADA", espessura: "4mm", largura: "0.92m", comprimento: "1.22m", kg: 10.2 },
    PesoTelha { modelo: "ONDULADA", espessura: "4mm", largura: "0.92m", comprimento: "1.53m", kg: 12.8 },
    PesoTelha { modelo: "ONDULADA", espessura: "4mm", largura: "0.92m", comprimento: "1.83m", kg: 15.3 },
    // 5mm - até 2.44m
    PesoTelha { modelo: "ONDULADA", espessura: "5mm", largura: "0.92m", comprimento: "1.22m", kg: 12.8 },
    PesoTelha { modelo: "ONDULADA", espessura: "5mm", largura: "0.92m", comprimento: "1.53m", kg: 16.1 },
    PesoTelha { modelo: "ONDULADA", espessura: "5mm", largura: "0.92m", comprimento: "1.83m", kg: 19.2 },
    PesoTelha { modelo: "ONDULADA", espessura: "5mm", largura: "0.92m", comprimento: "2.13m", kg: 22.4 },
    PesoTelha { modelo: "ONDULADA", espessura: "5mm", largura: "0.92m", comprimento: "2.44m", kg: 25.7 },
    PesoTelha { modelo: "ONDULADA", espessura: "5mm", largura: "1.10m", comprimento: "1.22m", kg: 15.3 },
    PesoTelha { modelo: "ONDULADA", espessura: "5mm", largura: "1.10m", comprimento: "1.53m", kg: 19.2 },
    PesoTelha { modelo: "ONDULADA", espessura: "5mm", largura: "1.10m", comprimento: "1.83m", kg: 23.0 },
    PesoTelha { modelo: "ONDULADA", espessura: "5mm", largura: "1.10m", comprimento: "2.13m", kg: 26.8 },
    PesoTelha { modelo: "ONDULADA", espessura: "5mm", largura: "1.10m", comprimento: "2.44m", kg: 30.7 },
    // 6mm - linha completa
    PesoTelha { modelo: "ONDULADA", espessura: "6mm", largura: "0.92m", comprimento: "1.22m", kg: 15.4 },
    PesoTelha { modelo: "ONDULADA", espessura: "6mm", largura: "0.92m", comprimento: "1.53m", kg: 19.3 },
    PesoTelha { modelo: "ONDULADA", espessura: "6mm", largura: "0.92m", comprimento: "1.83m", kg: 23.1 },
    PesoTelha { modelo: "ONDULADA", espessura: "6mm", largura: "0.92m", comprimento: "2.13m", kg: 26.9 },
    PesoTelha { modelo: "ONDULADA", espessura: "6mm", largura: "0.92m", comprimento: "2.44m", kg: 30.8 },
    PesoTelha { modelo: "ONDULADA", espessura: "6mm", largura: "0.92m", comprimento: "3.05m", kg: 38.5 },
    PesoTelha { modelo: "ONDULADA", espessura: "6mm", largura: "0.92m", comprimento: "3.66m", kg: 46.2 },
    PesoTelha { modelo: "ONDULADA", espessura: "6mm", largura: "1.10m", comprimento: "1.22m", kg: 18.4 },
    PesoTelha { modelo: "ONDULADA", espessura: "6mm", largura: "1.10m", comprimento: "1.53m", kg: 23.1 },
    PesoTelha { modelo: "ONDULADA", espessura: "6mm", largura: "1.10m", comprimento: "1.83m", kg: 27.6 },
    PesoTelha { modelo: "ONDULADA", espessura: "6mm", largura: "1.10m", comprimento: "2.13m", kg: 32.1 },
    PesoTelha { modelo: "ONDULADA", espessura: "6mm", largura: "1.10m", comprimento: "2.44m", kg: 36.8 },
    PesoTelha { modelo: "ONDULADA", espessura: "6mm", largura: "1.10m", comprimento: "3.05m", kg: 46.0 },
    PesoTelha { modelo: "ONDULADA", espessura: "6mm", largura: "1.10m", comprimento: "3.66m", kg: 55.2 },
    // 8mm - apenas comprimentos para grandes vãos
    PesoTelha { modelo: "ONDULADA", espessura: "8mm", largura: "0.92m", comprimento: "2.44m", kg: 40.9 },
    PesoTelha { modelo: "ONDULADA", espessura: "8mm", largura: "0.92m", comprimento: "3.05m", kg: 51.1 },
    PesoTelha { modelo: "ONDULADA", espessura: "8mm", largura: "0.92m", comprimento: "3.66m", kg: 61.3 },
    PesoTelha { modelo: "ONDULADA", espessura: "8mm", largura: "1.10m", comprimento: "1.83m", kg: 36.6 },
    PesoTelha { modelo: "ONDULADA", espessura: "8mm", largura: "1.10m", comprimento: "2.13m", kg: 42.6 },
    PesoTelha { modelo: "ONDULADA", espessura: "8mm", largura: "1.10m", comprimento: "2.44m", kg: 48.8 },
    PesoTelha { modelo: "ONDULADA", espessura: "8mm", largura: "1.10m", comprimento: "3.05m", kg: 61.0 },
    PesoTelha { modelo: "ONDULADA", espessura: "8mm", largura: "1.10m", comprimento: "3.66m", kg: 73.2 },
];

/// Peso em kg de uma chapa, ou `None` quando a combinação não é fabricada.
pub fn peso_da_telha(
    modelo: &str,
    espessura: &str,
    largura: &str,
    comprimento: &str,
) -> Option<f64> {
    PESOS
        .iter()
        .find(|p| {
            p.modelo.eq_ignore_ascii_case(modelo.trim())
                && p.espessura == espessura.trim()
                && p.largura == largura.trim()
                && p.comprimento == comprimento.trim()
        })
        .map(|p| p.kg)
}

/// Comprimentos fabricados para o par (espessura, largura), em ordem crescente.
///
/// Retorna lista vazia quando nenhum comprimento é fabricado para o par.
pub fn comprimentos_disponiveis(espessura: &str, largura: &str) -> Vec<&'static str> {
    COMPRIMENTOS
        .iter()
        .filter(|c| {
            PESOS.iter().any(|p| {
                p.espessura == espessura.trim() && p.largura == largura.trim() && p.comprimento == **c
            })
        })
        .copied()
        .collect()
}

/// Converte uma dimensão textual ("2.44m") para metros.
pub fn parse_metros(dimensao: &str) -> Option<f64> {
    dimensao
        .trim()
        .trim_end_matches('m')
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peso_combinacao_fabricada() {
        assert_eq!(peso_da_telha("ONDULADA", "6mm", "1.10m", "2.44m"), Some(36.8));
        // modelo é comparado sem diferenciar maiúsculas
        assert_eq!(peso_da_telha("ondulada", "6mm", "1.10m", "2.44m"), Some(36.8));
    }

    #[test]
    fn test_peso_combinacao_inexistente() {
        assert_eq!(peso_da_telha("ONDULADA", "4mm", "1.10m", "2.44m"), None);
        assert_eq!(peso_da_telha("ROMANA", "6mm", "1.10m", "2.44m"), None);
    }

    #[test]
    fn test_comprimentos_disponiveis_par_valido() {
        let comprimentos = comprimentos_disponiveis("8mm", "1.10m");
        assert_eq!(comprimentos, vec!["1.83m", "2.13m", "2.44m", "3.05m", "3.66m"]);
    }

    #[test]
    fn test_comprimentos_disponiveis_par_sem_fabricacao() {
        assert!(comprimentos_disponiveis("4mm", "1.10m").is_empty());
    }

    #[test]
    fn test_parse_metros() {
        assert_eq!(parse_metros("2.44m"), Some(2.44));
        assert_eq!(parse_metros("1,10m"), Some(1.10));
        assert_eq!(parse_metros(" 3.05 "), Some(3.05));
        assert_eq!(parse_metros("abc"), None);
    }
}
