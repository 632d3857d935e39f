//! Catalog module - static reference data for inspection reports.
//!
//! This module contains the fixed lookup tables consulted during report
//! generation:
//! - `telhas` - tile weight table and dimension axes
//! - `nao_conformidades` - catalog of known installation non-conformities

pub mod nao_conformidades;
pub mod telhas;

pub use nao_conformidades::{busca_por_codigo, busca_por_id, NaoConformidadeCatalogo, CATALOGO};
pub use telhas::{
    comprimentos_disponiveis, parse_metros, peso_da_telha, COMPRIMENTOS, ESPESSURAS, LARGURAS,
    MODELOS,
};
