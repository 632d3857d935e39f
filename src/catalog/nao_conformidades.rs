//! Catálogo fixo de não conformidades de instalação.
//!
//! Each entry describes a known installation defect that a technician can
//! attribute to an inspection. Reports store only the entry id and a
//! selection flag; the full text is resolved here at render time.

/// Entrada do catálogo de não conformidades.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NaoConformidadeCatalogo {
    pub id: u32,
    pub codigo: &'static str,
    pub titulo: &'static str,
    pub descricao: &'static str,
}

/// Catálogo completo, nunca alterado em tempo de execução.
pub const CATALOGO: &[NaoConformidadeCatalogo] = &[
    NaoConformidadeCatalogo {
        id: 1,
        codigo: "NC-01",
        titulo: "Fixação irregular das telhas",
        descricao: "As telhas foram fixadas com pregos comuns ou parafusos sem o conjunto de \
            vedação elástica recomendado pelo fabricante. A fixação rígida impede a livre \
            dilatação das chapas e favorece o surgimento de fissuras e pontos de infiltração \
            junto aos furos de fixação.",
    },
    NaoConformidadeCatalogo {
        id: 2,
        codigo: "NC-02",
        titulo: "Recobrimento lateral invertido",
        descricao: "O recobrimento lateral entre chapas foi executado em sentido contrário ao \
            dos ventos dominantes da região. Nessa condição, a chuva com vento pressiona a \
            junta lateral e pode penetrar por capilaridade, causando gotejamento no interior \
            da edificação.",
    },
    NaoConformidadeCatalogo {
        id: 3,
        codigo: "NC-03",
        titulo: "Recobrimento longitudinal insuficiente",
        descricao: "O recobrimento longitudinal entre fiadas é inferior ao mínimo recomendado \
            para a inclinação do telhado. Recobrimentos reduzidos comprometem a estanqueidade \
            da cobertura, principalmente em chuvas de longa duração.",
    },
    NaoConformidadeCatalogo {
        id: 4,
        codigo: "NC-04",
        titulo: "Balanço excessivo no beiral",
        descricao: "As chapas do beiral apresentam balanço superior ao máximo recomendado, \
            sem apoio complementar. O balanço excessivo gera esforço de flexão não previsto \
            na borda da chapa e pode provocar trincas transversais sob a ação do vento.",
    },
    NaoConformidadeCatalogo {
        id: 5,
        codigo: "NC-05",
        titulo: "Inclinação do telhado abaixo da mínima",
        descricao: "A inclinação medida na cobertura é inferior à mínima indicada no manual \
            de instalação para o comprimento de chapa utilizado. Inclinações reduzidas \
            retardam o escoamento da água e aumentam o risco de retorno por capilaridade \
            nos recobrimentos.",
    },
    NaoConformidadeCatalogo {
        id: 6,
        codigo: "NC-06",
        titulo: "Corte dos cantos não executado",
        descricao: "Nas regiões com recobrimento duplo não foi executado o corte diagonal \
            dos cantos das chapas intermediárias. A sobreposição de quatro espessuras impede \
            o assentamento correto das chapas e cria frestas que comprometem a vedação.",
    },
    NaoConformidadeCatalogo {
        id: 7,
        codigo: "NC-07",
        titulo: "Espaçamento entre apoios superior ao recomendado",
        descricao: "O vão livre entre terças excede o máximo admitido para a espessura da \
            chapa instalada. Vãos superiores ao recomendado produzem deformações e trincas \
            por flexão, agravadas pelo trânsito sobre a cobertura e por sobrecargas de vento.",
    },
    NaoConformidadeCatalogo {
        id: 8,
        codigo: "NC-08",
        titulo: "Armazenamento inadequado na obra",
        descricao: "As chapas foram armazenadas diretamente sobre terreno irregular, sem \
            pontaletes de apoio e sem proteção contra intempéries. O empilhamento fora das \
            recomendações provoca empenamento e microfissuras anteriores à instalação.",
    },
    NaoConformidadeCatalogo {
        id: 9,
        codigo: "NC-09",
        titulo: "Trânsito direto sobre as telhas",
        descricao: "Constatou-se circulação de pessoas diretamente sobre as chapas, sem o \
            uso de tábuas de distribuição apoiadas nas terças. O carregamento concentrado \
            do passo é causa típica de trincas longitudinais na onda alta das chapas.",
    },
    NaoConformidadeCatalogo {
        id: 10,
        codigo: "NC-10",
        titulo: "Acessórios incompatíveis com o sistema",
        descricao: "Foram utilizados acessórios de cumeeira e arremate de outro sistema \
            construtivo, assentados com argamassa rígida. A incompatibilidade dimensional e \
            a rigidez do assentamento restringem a movimentação das chapas e geram trincas \
            localizadas.",
    },
    NaoConformidadeCatalogo {
        id: 11,
        codigo: "NC-11",
        titulo: "Furação executada fora da onda alta",
        descricao: "Os furos de fixação foram executados na onda baixa das chapas, região de \
            escoamento da água. A furação fora da crista da onda conduz a água diretamente \
            ao elemento de fixação e é causa recorrente de infiltrações pontuais.",
    },
    NaoConformidadeCatalogo {
        id: 12,
        codigo: "NC-12",
        titulo: "Pintura com produto incompatível",
        descricao: "A face exposta das chapas recebeu pintura com produto de base solvente \
            não indicado para fibrocimento, sem preparo da superfície. Produtos incompatíveis \
            formam película estanque ao vapor e podem provocar descolamento e manchamento \
            precoce da cobertura.",
    },
];

/// Busca uma entrada do catálogo pelo id.
pub fn busca_por_id(id: u32) -> Option<&'static NaoConformidadeCatalogo> {
    CATALOGO.iter().find(|nc| nc.id == id)
}

/// Busca uma entrada do catálogo pelo código (ex.: "NC-07").
pub fn busca_por_codigo(codigo: &str) -> Option<&'static NaoConformidadeCatalogo> {
    CATALOGO
        .iter()
        .find(|nc| nc.codigo.eq_ignore_ascii_case(codigo.trim()))
}
